//! Estimation error types.

/// Errors that can occur while estimating an exceedance probability.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// No valid observation fell inside the day-window.
    ///
    /// This is a user-correctable condition: the window or the year range
    /// is too narrow for the available record.
    #[error(
        "no valid observations in the selected window ({selected_days} day(s) selected); \
         try increasing the window or year range"
    )]
    EmptySample {
        /// Number of days selected by the window, valid or not.
        selected_days: usize,
    },

    /// The comparison direction is not one of the recognized operators.
    #[error("invalid direction '{value}': expected '>' or '<'")]
    InvalidDirection {
        /// The rejected input.
        value: String,
    },

    /// One or more query or configuration checks failed.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the encoder failure.
        reason: String,
    },
}
