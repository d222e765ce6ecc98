//! Error type shared by every generation stage.

use thiserror::Error;

/// Errors raised while building schemas, tuples or writing the script.
///
/// The first three variants mean the generator itself is misconfigured:
/// a correct build never produces them, and the run must stop rather than
/// emit a malformed block.
#[derive(Debug, Error)]
pub enum GenError {
    /// Type token not known to the catalog or the value factory
    #[error("unknown value type token: {0}")]
    UnknownTypeToken(String),

    /// VARCHAR generators only exist for sizes 4 and 128
    #[error("unsupported VARCHAR size: {0} (expected 4 or 128)")]
    UnsupportedVarCharSize(usize),

    /// Tuple arity does not match the schema it was keyed against
    #[error("tuple has {actual} values but schema has {expected} columns")]
    ArityMismatch { expected: usize, actual: usize },

    /// User supplied configuration was rejected
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing the script failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// True for internal misconfiguration (as opposed to bad user input or I/O).
    pub fn is_misconfiguration(&self) -> bool {
        matches!(
            self,
            GenError::UnknownTypeToken(_)
                | GenError::UnsupportedVarCharSize(_)
                | GenError::ArityMismatch { .. }
        )
    }

    /// True when the output's reader went away before the run finished.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, GenError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
