// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Frequency to sharpness mapping.
//!
//! Haptic sharpness is the actuator frequency mapped logarithmically onto
//! [0, 1] across the usable band of 80 to 230 Hz.

use crate::error::{Error, Result};

/// Lowest frequency the actuator reproduces
pub const MIN_HAPTIC_FREQ: f64 = 80.0;

/// Highest frequency the actuator reproduces
pub const MAX_HAPTIC_FREQ: f64 = 230.0;

/// Convert a frequency in Hz to a sharpness value in [0, 1].
///
/// With `clamp` set, frequencies outside the band are pinned to its
/// edges. Without it they fail with [`Error::FrequencyOutOfRange`].
pub fn freq_to_sharpness(freq: f64, clamp: bool) -> Result<f64> {
    let freq = if clamp {
        freq.clamp(MIN_HAPTIC_FREQ, MAX_HAPTIC_FREQ)
    } else {
        freq
    };

    // NaN fails here too
    if !(MIN_HAPTIC_FREQ..=MAX_HAPTIC_FREQ).contains(&freq) {
        return Err(Error::FrequencyOutOfRange { freq });
    }

    let ratio = (freq.ln() - MIN_HAPTIC_FREQ.ln()) / (MAX_HAPTIC_FREQ.ln() - MIN_HAPTIC_FREQ.ln());
    if !(0.0..=1.0).contains(&ratio) {
        return Err(Error::SharpnessOutOfRange { value: ratio });
    }

    Ok(ratio)
}

/// Frequency of a MIDI note number (A4 = 69 = 440 Hz)
pub fn midi_note_to_freq(note: u8) -> f64 {
    440.0 * 2.0_f64.powf((note as f64 - 69.0) / 12.0)
}
