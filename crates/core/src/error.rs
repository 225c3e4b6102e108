use std::io;

use roster_storage::StorageError;

/// Why a single controller operation stopped before reaching an outcome.
///
/// None of these are service statuses: `AlreadyExists`, `NotFound` and
/// `Failed` are ordinary values and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// A numeric prompt received text that does not parse.
    #[error("invalid {field}: '{input}' is not a valid number")]
    Parse { field: &'static str, input: String },

    /// The input stream closed while a prompt was waiting.
    #[error("input closed before the operation completed")]
    EndOfInput,

    #[error("console i/o error: {0}")]
    Io(#[from] io::Error),

    /// The service faulted on a read.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ControllerError {
    /// True for errors caused by what the user typed (or didn't).
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            ControllerError::Parse { .. } | ControllerError::EndOfInput
        )
    }
}

/// Invalid controller configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("score bounds must be finite numbers (got {min} to {max})")]
    NonFiniteScore { min: f32, max: f32 },

    #[error("empty score range: minimum {min} is greater than maximum {max}")]
    EmptyScoreRange { min: f32, max: f32 },
}
