use thiserror::Error;

/// Errors raised by the predicates and by connectivity oracles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph does not satisfy a precondition of the query, e.g. it declares
    /// neither a directed nor an undirected orientation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A connectivity oracle could not answer the query.
    #[error("Connectivity oracle failed: {0}")]
    Oracle(String),
}

pub type Result<T> = std::result::Result<T, Error>;
