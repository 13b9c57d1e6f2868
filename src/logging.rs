use std::{fmt, fs::OpenOptions, io, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILE: &str = "summoner-lookup.log";
const DEFAULT_DIRECTIVE: &str = "info";

/// Routes `tracing` output into `path`. The terminal UI owns stdout, so
/// nothing is ever written to the console.
pub fn init(path: &Path) -> Result<(), LoggingInitError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_names(true)
        .try_init()
        .map_err(|e| LoggingInitError::Subscriber(e.to_string()))
}

#[derive(Debug)]
pub enum LoggingInitError {
    LogFile(io::Error),
    Subscriber(String),
}

impl fmt::Display for LoggingInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoggingInitError::LogFile(err) => write!(f, "Failed to open log file: {}", err),
            LoggingInitError::Subscriber(err) => write!(f, "Failed to install log subscriber: {}", err),
        }
    }
}

impl From<io::Error> for LoggingInitError {
    fn from(error: io::Error) -> Self {
        Self::LogFile(error)
    }
}
