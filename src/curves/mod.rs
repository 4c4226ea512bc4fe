// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Curve interpolation and value mapping.
//!
//! Pure functions that synthesize control point sequences for parameter
//! curves, plus the frequency to sharpness conversion.

pub mod frequency;
pub mod interpolate;

pub use frequency::{freq_to_sharpness, midi_note_to_freq, MAX_HAPTIC_FREQ, MIN_HAPTIC_FREQ};
pub use interpolate::{create_curve, ease_in_out, exponential, interpolate, linear, Interpolation};
