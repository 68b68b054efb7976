use std::fmt;

/// Errors raised by the network core.
///
/// Non-convergence is not represented here: running out of epochs with a
/// nonzero error count is reported through [`crate::TrainingOutcome`].
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// A vector handed to a neuron, layer or network has the wrong length.
    InvalidInput { expected: usize, actual: usize },
    /// The network specification (or one of its examples) is malformed.
    InvalidSpec(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { expected, actual } => {
                write!(f, "invalid input: expected {expected} values, got {actual}")
            }
            Self::InvalidSpec(msg) => write!(f, "invalid spec: {msg}"),
        }
    }
}

impl std::error::Error for NetworkError {}

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Checks that `actual` matches `expected`, the one place width mismatches are raised.
pub(crate) fn check_width(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::InvalidInput { expected, actual })
    }
}
