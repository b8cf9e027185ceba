//! Error types for the demo-data crate.

use thiserror::Error;

/// Errors that can occur when validating seed data values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeedDataError {
    /// A listing rating is outside the allowed `0.0..=5.0` range.
    #[error("listing rating {value} is outside 0.0..=5.0")]
    RatingOutOfRange {
        /// The offending rating value.
        value: f32,
    },

    /// An investigation score is outside the allowed `0..=100` range.
    #[error("investigation score {value} is outside 0..=100")]
    ScoreOutOfRange {
        /// The offending score value.
        value: u32,
    },
}
