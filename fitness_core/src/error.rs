//! Error types for the fitness_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitness_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Type code outside the RUN/WLK/SWM vocabulary
    #[error("unsupported workout code '{0}', expected one of RUN, WLK, SWM")]
    UnsupportedWorkoutCode(String),

    /// Parameter list length does not match the variant's signature
    #[error("workout code '{code}' expects {expected} parameters, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    /// Mean speed and the calorie formulas divide by the duration
    #[error("duration must be positive, got {0} h")]
    InvalidDuration(f64),

    /// The walking calorie formula divides by the height
    #[error("height must be nonzero, got {0} cm")]
    InvalidHeight(f64),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
