use thiserror::Error;

/// Failure taxonomy shared by the containers and the analyzers.
///
/// Every operation in this crate is pure in-memory computation, so failures
/// are immediate and deterministic; there are no transient error modes and
/// nothing to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A dictionary lookup or removal on an absent key, or an analyzer query
    /// for a document id that was not part of the corpus.
    #[error("key not found")]
    KeyNotFound,

    /// Peek or pop on an empty heap, or pop on an empty sequence.
    #[error("container is empty")]
    EmptyContainer,

    /// A caller-supplied parameter that violates a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Indexed sequence access outside `0..len` (or `0..=len` for insert).
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
