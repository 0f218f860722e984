use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    /// The input ended before the announced number of positions was read.
    #[error("position file announces {expected} robots but only {read} positions could be read")]
    Truncated {
        expected: usize,
        read:     usize,
    },

    #[error("position parse error: {0}")]
    Parse(String),

    #[error("expected {expected} initial positions, got {got}")]
    RobotCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
