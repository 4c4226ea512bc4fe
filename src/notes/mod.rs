// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note-to-haptic conversion.
//!
//! This module turns a stream of already decoded note facts (timestamps
//! in seconds) into builder calls:
//! - Percussion on the drum channel becomes transients
//! - Melodic notes become continuous events spanning note-on to note-off
//! - Tempo changes retune the builder's musical context

pub mod drums;

pub use drums::{drum_mapping, gm_drums, DrumMapping, DRUM_CHANNEL, UNMAPPED_DRUM_SHARPNESS};

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::builder::{Builder, DEFAULT_SHARPNESS};
use crate::curves::{freq_to_sharpness, midi_note_to_freq};

/// A decoded note-level fact
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoteFact {
    /// A note starts. Velocity zero is treated as a note-off.
    NoteOn {
        channel: u8,
        key: u8,
        velocity: u8,
        time: f64,
    },
    NoteOff { channel: u8, key: u8, time: f64 },
    /// Tempo change in microseconds per quarter note
    TempoChange { micros_per_beat: f64, time: f64 },
}

/// Counts of events produced by a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Transients from percussion, mapped or not
    pub drum_events: usize,
    /// Percussion transients that fell back to defaults
    pub unmapped_drum_events: usize,
    pub melodic_events: usize,
}

impl ConversionStats {
    pub fn total(&self) -> usize {
        self.drum_events + self.melodic_events
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingNote {
    start: f64,
    velocity: u8,
}

/// Drives a builder from note facts
#[derive(Debug, Clone)]
pub struct NoteConverter {
    drums_enabled: bool,
    pending: HashMap<u8, PendingNote>,
    stats: ConversionStats,
}

impl Default for NoteConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteConverter {
    pub fn new() -> Self {
        Self {
            drums_enabled: true,
            pending: HashMap::new(),
            stats: ConversionStats::default(),
        }
    }

    /// Treat the drum channel as percussion (on by default)
    pub fn with_drums(mut self, enabled: bool) -> Self {
        self.drums_enabled = enabled;
        self
    }

    pub fn drums_enabled(&self) -> bool {
        self.drums_enabled
    }

    pub fn stats(&self) -> ConversionStats {
        self.stats
    }

    /// Number of melodic notes still waiting for their note-off
    pub fn pending_notes(&self) -> usize {
        self.pending.len()
    }

    fn is_percussion(&self, channel: u8) -> bool {
        self.drums_enabled && channel == DRUM_CHANNEL
    }

    /// Feed a whole stream and return the accumulated statistics
    pub fn convert<I>(&mut self, builder: &mut Builder, facts: I) -> ConversionStats
    where
        I: IntoIterator<Item = NoteFact>,
    {
        for fact in facts {
            self.process(builder, fact);
        }
        if !self.pending.is_empty() {
            debug!(
                pending = self.pending.len(),
                "Notes without note-off left pending"
            );
        }
        self.stats
    }

    /// Apply a single fact to the builder
    pub fn process(&mut self, builder: &mut Builder, fact: NoteFact) {
        match fact {
            NoteFact::NoteOn {
                channel,
                key,
                velocity: 0,
                time,
            } => self.note_off(builder, channel, key, time),
            NoteFact::NoteOn {
                channel,
                key,
                velocity,
                time,
            } => self.note_on(builder, channel, key, velocity, time),
            NoteFact::NoteOff { channel, key, time } => self.note_off(builder, channel, key, time),
            NoteFact::TempoChange {
                micros_per_beat,
                time,
            } => {
                if micros_per_beat > 0.0 && micros_per_beat.is_finite() {
                    let bpm = 60_000_000.0 / micros_per_beat;
                    debug!(bpm, time, "Tempo change");
                    builder.set_bpm(bpm);
                } else {
                    warn!(micros_per_beat, time, "Ignoring invalid tempo change");
                }
            }
        }
    }

    fn note_on(&mut self, builder: &mut Builder, channel: u8, key: u8, velocity: u8, time: f64) {
        if !self.is_percussion(channel) {
            self.pending.insert(
                key,
                PendingNote {
                    start: time,
                    velocity,
                },
            );
            return;
        }

        let scale = velocity as f64 / 127.0;
        let (intensity, sharpness) = match drum_mapping(key) {
            Some(mapping) => (mapping.intensity * scale, mapping.sharpness),
            None => {
                self.stats.unmapped_drum_events += 1;
                (scale, UNMAPPED_DRUM_SHARPNESS)
            }
        };
        builder
            .transient(time)
            .intensity(intensity)
            .sharpness(sharpness)
            .add();
        self.stats.drum_events += 1;
    }

    fn note_off(&mut self, builder: &mut Builder, channel: u8, key: u8, time: f64) {
        if self.is_percussion(channel) {
            return;
        }
        let Some(note) = self.pending.remove(&key) else {
            warn!(channel, key, time, "Dropping note-off without a pending note-on");
            return;
        };

        let duration = time - note.start;
        if duration <= 0.0 {
            return;
        }

        let sharpness = match freq_to_sharpness(midi_note_to_freq(key), true) {
            Ok(sharpness) => sharpness,
            Err(err) => {
                warn!(key, error = %err, "Using neutral sharpness");
                DEFAULT_SHARPNESS
            }
        };
        builder
            .continuous(note.start, duration)
            .intensity(note.velocity as f64 / 127.0)
            .sharpness(sharpness)
            .add();
        self.stats.melodic_events += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{EventType, ParamId};
    use assert_approx_eq::assert_approx_eq;

    fn note_on(channel: u8, key: u8, velocity: u8, time: f64) -> NoteFact {
        NoteFact::NoteOn {
            channel,
            key,
            velocity,
            time,
        }
    }

    fn note_off(channel: u8, key: u8, time: f64) -> NoteFact {
        NoteFact::NoteOff { channel, key, time }
    }

    #[test]
    fn test_drum_transients() {
        let mut builder = Builder::new("drums", "test");
        let stats = NoteConverter::new().convert(
            &mut builder,
            vec![
                note_on(DRUM_CHANNEL, gm_drums::KICK, 127, 0.0),
                note_on(DRUM_CHANNEL, gm_drums::CLOSED_HAT, 127, 0.25),
                note_on(DRUM_CHANNEL, 20, 127, 0.5),
                note_off(DRUM_CHANNEL, gm_drums::KICK, 0.1),
            ],
        );

        assert_eq!(
            stats,
            ConversionStats {
                drum_events: 3,
                unmapped_drum_events: 1,
                melodic_events: 0,
            }
        );

        let events: Vec<_> = builder.document().events().cloned().collect();
        assert!(events
            .iter()
            .all(|e| e.event_type == EventType::HapticTransient));
        assert_eq!(events[0].parameter(ParamId::HapticIntensity), Some(1.0));
        assert_eq!(events[0].parameter(ParamId::HapticSharpness), Some(0.2));
        assert_eq!(events[1].parameter(ParamId::HapticSharpness), Some(1.0));
        assert_eq!(events[2].parameter(ParamId::HapticIntensity), Some(1.0));
        assert_eq!(events[2].parameter(ParamId::HapticSharpness), Some(0.7));
    }

    #[test]
    fn test_drum_velocity_scaling() {
        let mut builder = Builder::new("velocity", "test");
        let mut converter = NoteConverter::new();
        converter.process(
            &mut builder,
            note_on(DRUM_CHANNEL, gm_drums::SNARE, 64, 1.0),
        );

        let event = builder.document().events().next().unwrap().clone();
        assert_eq!(event.time, 1.0);
        assert_approx_eq!(
            event.parameter(ParamId::HapticIntensity).unwrap(),
            0.95 * 64.0 / 127.0,
            1e-12
        );
    }

    #[test]
    fn test_melodic_continuous() {
        let mut builder = Builder::new("melody", "test");
        let stats = NoteConverter::new().convert(
            &mut builder,
            vec![
                note_on(0, 40, 127, 0.5),
                note_on(1, 69, 100, 1.0),
                note_off(0, 40, 1.5),
                note_off(1, 69, 3.0),
            ],
        );
        assert_eq!(stats.melodic_events, 2);
        assert_eq!(stats.total(), 2);

        let events: Vec<_> = builder.document().events().cloned().collect();
        assert_eq!(events[0].event_type, EventType::HapticContinuous);
        assert_eq!(events[0].time, 0.5);
        assert_eq!(events[0].duration, Some(1.0));
        assert_approx_eq!(
            events[0].parameter(ParamId::HapticSharpness).unwrap(),
            freq_to_sharpness(midi_note_to_freq(40), true).unwrap(),
            1e-12
        );

        // A4 is above the haptic band and clamps to full sharpness
        assert_eq!(events[1].duration, Some(2.0));
        assert_eq!(events[1].parameter(ParamId::HapticSharpness), Some(1.0));
        assert_approx_eq!(
            events[1].parameter(ParamId::HapticIntensity).unwrap(),
            100.0 / 127.0,
            1e-12
        );
    }

    #[test]
    fn test_unmatched_and_empty_notes() {
        let mut builder = Builder::new("unmatched", "test");
        let mut converter = NoteConverter::new();
        let stats = converter.convert(
            &mut builder,
            vec![
                note_off(0, 60, 1.0),
                note_on(0, 62, 90, 2.0),
                note_off(0, 62, 2.0),
                note_on(0, 64, 90, 3.0),
            ],
        );

        assert_eq!(stats.melodic_events, 0);
        assert!(builder.is_empty());
        assert_eq!(converter.pending_notes(), 1);
    }

    #[test]
    fn test_zero_velocity_ends_note() {
        let mut builder = Builder::new("zero velocity", "test");
        NoteConverter::new().convert(
            &mut builder,
            vec![note_on(2, 50, 80, 0.0), note_on(2, 50, 0, 0.75)],
        );

        let event = builder.document().events().next().unwrap().clone();
        assert_eq!(event.duration, Some(0.75));
    }

    #[test]
    fn test_drums_disabled() {
        let mut builder = Builder::new("no drums", "test");
        let mut converter = NoteConverter::new().with_drums(false);
        assert!(!converter.drums_enabled());

        let stats = converter.convert(
            &mut builder,
            vec![
                note_on(DRUM_CHANNEL, gm_drums::KICK, 127, 0.0),
                note_off(DRUM_CHANNEL, gm_drums::KICK, 0.2),
            ],
        );
        assert_eq!(stats.drum_events, 0);
        assert_eq!(stats.melodic_events, 1);
    }

    #[test]
    fn test_tempo_change() {
        let mut builder = Builder::new("tempo", "test");
        let mut converter = NoteConverter::new();
        converter.process(
            &mut builder,
            NoteFact::TempoChange {
                micros_per_beat: 1_000_000.0,
                time: 0.0,
            },
        );
        assert_eq!(builder.musical_context().map(|m| m.bpm), Some(60.0));

        converter.process(
            &mut builder,
            NoteFact::TempoChange {
                micros_per_beat: 0.0,
                time: 1.0,
            },
        );
        assert_eq!(builder.musical_context().map(|m| m.bpm), Some(60.0));
        assert_eq!(converter.stats(), ConversionStats::default());
    }
}
