//! Errors raised when a network or a step request is malformed.
//!
//! Every variant is reported before anything is mutated, so the caller keeps
//! the model it had before the rejected action.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigurationError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The text had no vertex line.
    #[error("missing vertex list")]
    MissingVertexList,

    #[error("line {line}: expected `from to capacity`, found {found} tokens")]
    WrongTokenCount { line: usize, found: usize },

    #[error("line {line}: capacity `{token}` is not an integer")]
    InvalidCapacity { line: usize, token: String },

    #[error("edge {from} -> {to} has a negative capacity")]
    NegativeCapacity { from: String, to: String },

    /// Adding this edge would push the summed capacity past the flow type's range.
    #[error("capacity of edge {from} -> {to} overflows the network's total capacity")]
    CapacityOverflow { from: String, to: String },

    #[error("unknown vertex `{0}`")]
    UnknownVertex(String),

    #[error("source and sink are both `{0}`")]
    SourceIsSink(String),
}
