// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for pattern construction and encoding.

use thiserror::Error;

use crate::curves::{MAX_HAPTIC_FREQ, MIN_HAPTIC_FREQ};

/// Errors surfaced by the engine
#[derive(Debug, Error)]
pub enum Error {
    /// Frequency outside the haptic actuator band with clamping disabled
    #[error(
        "incorrect frequency: frequency must be between {} and {} Hz, but it is {freq:.2}",
        MIN_HAPTIC_FREQ,
        MAX_HAPTIC_FREQ
    )]
    FrequencyOutOfRange { freq: f64 },

    /// Normalized sharpness fell outside [0, 1]
    #[error("the calculated normalized frequency {value} is out of range: result must be between 0 and 1")]
    SharpnessOutOfRange { value: f64 },

    /// A time, duration or value that JSON cannot represent as a number
    #[error("failed to encode pattern: {field} is not finite ({value})")]
    NonFinite { field: &'static str, value: f64 },

    /// Serializing the document failed, including writes to the output sink
    #[error("failed to encode pattern: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl Error {
    /// True for the range-check family (frequency mapping)
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            Error::FrequencyOutOfRange { .. } | Error::SharpnessOutOfRange { .. }
        )
    }

    /// True when the canonical-form serialization failed
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::Encoding(_) | Error::NonFinite { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
