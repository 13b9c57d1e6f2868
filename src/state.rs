use tracing::debug;

use crate::{
    model::summoner::{RankedQueueStats, Summoner},
    service::pipeline::{Generation, PipelineEvent, PipelineMessage},
};

/// Summoner names are between 3 and 16 characters long, inclusive.
pub const MIN_QUERY_LEN: usize = 3;
pub const MAX_QUERY_LEN: usize = 16;

/// Length is measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
pub fn is_valid_query(query: &str) -> bool {
    (MIN_QUERY_LEN..=MAX_QUERY_LEN).contains(&query.encode_utf16().count())
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    InsertChar(char),
    DeleteChar,
    ClearInput,
    SetInput(String),
    Submit,
    Pipeline(PipelineMessage),
}

/// Side effect the caller has to carry out after an [`Action`] was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    StartLookup { generation: Generation, query: String },
}

#[derive(Debug, Default)]
pub struct QueryState {
    raw_input: String,
    committed_query: String,
    profile: Option<Summoner>,
    entries: Vec<RankedQueueStats>,
    is_loading: bool,
    generation: Generation,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    pub fn profile(&self) -> Option<&Summoner> {
        self.profile.as_ref()
    }

    pub fn entries(&self) -> &[RankedQueueStats] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::InsertChar(c) => {
                self.raw_input.push(c);
                None
            }
            Action::DeleteChar => {
                self.raw_input.pop();
                None
            }
            Action::ClearInput => {
                self.raw_input.clear();
                None
            }
            Action::SetInput(text) => {
                self.raw_input = text;
                None
            }
            Action::Submit => self.commit(),
            Action::Pipeline(message) => {
                self.receive(message);
                None
            }
        }
    }

    fn commit(&mut self) -> Option<Effect> {
        if self.raw_input == self.committed_query {
            return None;
        }

        self.committed_query = self.raw_input.clone();
        self.profile = None;
        self.entries.clear();

        // Anything still in flight belongs to an older query from here on
        self.generation += 1;

        if !is_valid_query(&self.committed_query) {
            self.is_loading = false;
            return None;
        }

        self.is_loading = true;
        Some(Effect::StartLookup {
            generation: self.generation,
            query: self.committed_query.clone(),
        })
    }

    fn receive(&mut self, message: PipelineMessage) {
        if message.generation != self.generation {
            debug!(
                stale = message.generation,
                current = self.generation,
                "Discarding result of superseded lookup"
            );
            return;
        }

        match message.event {
            PipelineEvent::Profile(summoner) => self.profile = Some(summoner),
            PipelineEvent::Ranked(entries) => self.entries = entries,
            PipelineEvent::Finished => self.is_loading = false,
        }
    }
}
