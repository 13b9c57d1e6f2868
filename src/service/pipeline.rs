use std::{
    fmt, io,
    sync::{mpsc::Sender, Arc},
    thread::{self, JoinHandle},
};

use tracing::{error, info};

use crate::{
    model::{
        ids::SummonerId,
        summoner::{RankedQueueStats, Summoner},
    },
    service::gameapi::{
        parsing::{
            summoner::{parse_ranked_stats, parse_summoner},
            ParsingError,
        },
        riot_api_client::RiotApiRequestError,
        GameApi,
    },
};

/// Tag handed to every pipeline run, bumped on each new committed query.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    Profile(Summoner),
    Ranked(Vec<RankedQueueStats>),
    /// Always the last event of a run, whether it succeeded or not.
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineMessage {
    pub generation: Generation,
    pub event: PipelineEvent,
}

pub fn fetch_profile(api: &dyn GameApi, name: &str) -> DataRetrievalResult<Summoner> {
    let json = api.summoner_by_name(name)?;
    Ok(parse_summoner(&json)?)
}

pub fn fetch_ranked(api: &dyn GameApi, summoner_id: &SummonerId) -> DataRetrievalResult<Vec<RankedQueueStats>> {
    let json = api.league_entries(summoner_id)?;
    Ok(parse_ranked_stats(&json)?)
}

/// Runs both lookups in order and reports every stored record through `emit`
/// as soon as it is available.
fn stream_lookup<F>(api: &dyn GameApi, query: &str, emit: &mut F) -> DataRetrievalResult<()>
where
    F: FnMut(PipelineEvent),
{
    let summoner = fetch_profile(api, query)?;
    let summoner_id = summoner.id.clone();
    let is_placeholder = summoner.is_placeholder();
    emit(PipelineEvent::Profile(summoner));

    if is_placeholder {
        info!(query, "No summoner registered under this name");
        return Ok(());
    }

    let ranked = fetch_ranked(api, &summoner_id)?;
    emit(PipelineEvent::Ranked(ranked));
    Ok(())
}

/// Executes one lookup on the calling thread. Failures are logged and end the
/// run early; the final message is always [`PipelineEvent::Finished`].
pub fn run_pipeline(api: &dyn GameApi, generation: Generation, query: &str, tx: &Sender<PipelineMessage>) {
    info!(generation, query, "Starting player lookup");

    let mut emit = |event: PipelineEvent| {
        // Receiver gone means the UI shut down, nothing left to update
        let _ = tx.send(PipelineMessage { generation, event });
    };

    match stream_lookup(api, query, &mut emit) {
        Ok(()) => info!(generation, query, "Player lookup finished"),
        Err(err) => error!(generation, query, error = %err, "Player lookup failed"),
    }

    emit(PipelineEvent::Finished);
}

pub fn spawn_pipeline(
    api: Arc<dyn GameApi>,
    generation: Generation,
    query: String,
    tx: Sender<PipelineMessage>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(format!("LookupThread-{}", generation))
        .spawn(move || run_pipeline(api.as_ref(), generation, &query, &tx))
}

pub type DataRetrievalResult<T> = Result<T, DataRetrievalError>;

#[derive(Debug)]
pub enum DataRetrievalError {
    RiotApiClient(RiotApiRequestError),
    Parsing(ParsingError),
}

impl fmt::Display for DataRetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataRetrievalError::RiotApiClient(err) => write!(f, "Riot API client error: {}", err),
            DataRetrievalError::Parsing(err) => write!(f, "Parsing error: {}", err),
        }
    }
}

impl From<RiotApiRequestError> for DataRetrievalError {
    fn from(error: RiotApiRequestError) -> Self {
        Self::RiotApiClient(error)
    }
}

impl From<ParsingError> for DataRetrievalError {
    fn from(error: ParsingError) -> Self {
        Self::Parsing(error)
    }
}
