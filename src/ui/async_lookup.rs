use std::{
    io,
    sync::{
        mpsc::{self, Receiver, Sender, TryRecvError},
        Arc,
    },
};

use crate::{
    service::{
        gameapi::GameApi,
        pipeline::{spawn_pipeline, PipelineMessage},
    },
    state::Effect,
};

/// Runs lookups in the background and hands their messages back to the UI
/// loop, which polls once per tick.
pub struct LookupRunner {
    api: Arc<dyn GameApi>,
    sender: Sender<PipelineMessage>,
    receiver: Receiver<PipelineMessage>,
}

impl LookupRunner {
    pub fn new(api: Arc<dyn GameApi>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { api, sender, receiver }
    }

    pub fn start(&self, effect: Effect) -> io::Result<()> {
        match effect {
            Effect::StartLookup { generation, query } => {
                // Detached, stale runs are filtered out by their generation
                spawn_pipeline(Arc::clone(&self.api), generation, query, self.sender.clone())?;
            }
        }
        Ok(())
    }

    /// Everything that arrived since the last call, in arrival order.
    pub fn try_drain(&self) -> Vec<PipelineMessage> {
        let mut messages = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(message) => messages.push(message),
                // We hold a sender ourselves, so disconnect cannot really happen
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        messages
    }
}
