use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No problem to run matches {0:?}")]
    NoProblemsMatched(String),
    #[error("{failed} of {total} problems failed")]
    ChecksFailed { failed: usize, total: usize },
    #[error("IO error")]
    IO(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
