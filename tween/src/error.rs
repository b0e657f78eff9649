use thiserror::Error;

/// Error types for `Tween` construction
#[derive(Error, Debug, PartialEq, Clone)]
pub enum TweenError {
    /// The duration must be finite and strictly positive
    #[error("Invalid duration: {end_time} is not a positive, finite end time")]
    InvalidDuration {
        /// Rejected end time
        end_time: f64,
    },
}
