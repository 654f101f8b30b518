use thiserror::Error;

/// Failures that abort a generation run. There is no retry or partial-result
/// policy: the batch either completes with a fully consistent table or stops
/// here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown club id {0} in fixture or strength lookup")]
    UnknownClub(u32),

    #[error("configuration defect: {0}")]
    ConfigurationDefect(String),
}

pub type SimResult<T> = Result<T, SimulationError>;
