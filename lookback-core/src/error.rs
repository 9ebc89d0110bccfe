//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum LookbackError {
    /// A component was configured with invalid parameters.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Arg-max decoding was requested on an empty score vector.
    #[error("Cannot decode an action from an empty score vector")]
    EmptyScores,

    /// An operation combining tensors received no tensors.
    #[error("No input tensors given to {0}")]
    EmptyInput(&'static str),

    /// Tensors to be combined have incompatible shapes.
    #[error("Shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch(Vec<usize>, Vec<usize>),
}
