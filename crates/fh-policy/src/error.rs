use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("unknown policy {0:?}: expected \"random\" or \"heuristic\"")]
    UnknownPolicy(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
