// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Musical time conversion.
//!
//! Maps beat and bar positions to absolute seconds for a given tempo and
//! time signature. Positions may be fractional and no rounding is done.

use serde::{Deserialize, Serialize};

/// Default tempo when none is configured
pub const DEFAULT_BPM: f64 = 120.0;

/// A position or length measured in beats
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Beat(pub f64);

/// A position or length measured in bars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Bar(pub f64);

impl From<f64> for Beat {
    fn from(beats: f64) -> Self {
        Beat(beats)
    }
}

impl From<u32> for Beat {
    fn from(beats: u32) -> Self {
        Beat(beats as f64)
    }
}

impl From<f64> for Bar {
    fn from(bars: f64) -> Self {
        Bar(bars)
    }
}

impl From<u32> for Bar {
    fn from(bars: u32) -> Self {
        Bar(bars as f64)
    }
}

/// Musical time signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignature {
    /// Beats per bar
    pub numerator: u32,
    /// Note value of one beat (4 = quarter note)
    pub denominator: u32,
}

impl TimeSignature {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

/// Tempo and time signature used to resolve musical positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MusicalContext {
    /// Tempo in beats per minute
    pub bpm: f64,
    pub time_signature: TimeSignature,
}

impl Default for MusicalContext {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            time_signature: TimeSignature::default(),
        }
    }
}

impl MusicalContext {
    /// Create a context with the given tempo and signature
    pub fn new(bpm: f64, numerator: u32, denominator: u32) -> Self {
        Self {
            bpm,
            time_signature: TimeSignature::new(numerator, denominator),
        }
    }

    pub fn set_bpm(&mut self, bpm: f64) {
        self.bpm = bpm;
    }

    pub fn set_time_signature(&mut self, numerator: u32, denominator: u32) {
        self.time_signature = TimeSignature::new(numerator, denominator);
    }

    /// Beats per bar (the signature numerator)
    pub fn beats_per_bar(&self) -> u32 {
        self.time_signature.numerator
    }

    /// Length of one beat in seconds
    pub fn beat_duration(&self) -> f64 {
        60.0 / self.bpm
    }

    /// Length of one bar in seconds
    pub fn bar_duration(&self) -> f64 {
        self.bar_to_seconds(Bar(1.0))
    }

    pub fn beat_to_seconds(&self, beat: Beat) -> f64 {
        beat.0 * (60.0 / self.bpm)
    }

    pub fn bar_to_seconds(&self, bar: Bar) -> f64 {
        bar.0 * self.beats_per_bar() as f64 * (60.0 / self.bpm)
    }

    /// Absolute time of a beat offset within a bar
    pub fn position_to_seconds(&self, bar: Bar, beat: Beat) -> f64 {
        self.bar_to_seconds(bar) + self.beat_to_seconds(beat)
    }

    pub fn seconds_to_beats(&self, seconds: f64) -> Beat {
        Beat(seconds / (60.0 / self.bpm))
    }

    pub fn seconds_to_bars(&self, seconds: f64) -> Bar {
        Bar(seconds / (self.beats_per_bar() as f64 * (60.0 / self.bpm)))
    }
}
