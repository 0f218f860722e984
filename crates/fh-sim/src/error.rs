use fh_core::FhError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("mission configuration error: {0}")]
    Config(String),

    #[error("mission has no robots")]
    EmptyFleet,

    #[error("mission has already been run")]
    AlreadyRun,

    #[error(transparent)]
    Core(#[from] FhError),
}

pub type SimResult<T> = Result<T, SimError>;
