// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Declarative expansion of bar/beat ranges into events.
//!
//! Bar ranges are inclusive on both ends. An empty range (start after
//! end) adds nothing.

use tracing::debug;

use super::Builder;
use crate::timing::{Bar, Beat};

/// Sequence expansion over a builder's musical context
#[must_use = "a sequence does nothing until one of its expansions is called"]
#[derive(Debug)]
pub struct Sequence<'a> {
    builder: &'a mut Builder,
}

impl<'a> Sequence<'a> {
    pub(crate) fn new(builder: &'a mut Builder) -> Self {
        // Resolve the default context up front so every expansion agrees
        builder.musical();
        Self { builder }
    }

    /// Transients on the given beat offsets of every bar in the range
    pub fn transients_on_beats(
        self,
        beats: &[Beat],
        start_bar: u32,
        end_bar: u32,
        intensity: f64,
        sharpness: f64,
    ) -> &'a mut Builder {
        let musical = self.builder.musical();
        for bar in start_bar..=end_bar {
            for &beat in beats {
                let time = musical.position_to_seconds(Bar::from(bar), beat);
                self.builder
                    .transient(time)
                    .intensity(intensity)
                    .sharpness(sharpness)
                    .add();
            }
        }
        debug!(start_bar, end_bar, beats = beats.len(), "Expanded beat sequence");
        self.builder
    }

    /// Transients on the given beat offsets of a single bar
    pub fn transients_on_beats_in_bar(
        self,
        beats: &[Beat],
        bar: u32,
        intensity: f64,
        sharpness: f64,
    ) -> &'a mut Builder {
        self.transients_on_beats(beats, bar, bar, intensity, sharpness)
    }

    /// A transient on every beat of every bar in the range
    pub fn every_beat(
        self,
        start_bar: u32,
        end_bar: u32,
        intensity: f64,
        sharpness: f64,
    ) -> &'a mut Builder {
        let beats: Vec<Beat> = (0..self.builder.beats_per_bar()).map(Beat::from).collect();
        self.transients_on_beats(&beats, start_bar, end_bar, intensity, sharpness)
    }

    /// A transient on every `n`th beat, counting across bar lines.
    ///
    /// The range is treated as one continuous run of beats starting at
    /// beat 0 of `start_bar`. An `n` of zero is treated as one.
    pub fn every_nth_beat(
        self,
        n: u32,
        start_bar: u32,
        end_bar: u32,
        intensity: f64,
        sharpness: f64,
    ) -> &'a mut Builder {
        let musical = self.builder.musical();
        let beats_per_bar = musical.beats_per_bar();
        if beats_per_bar == 0 || start_bar > end_bar {
            return self.builder;
        }

        // u64 so a full u32 bar range cannot overflow
        let beats_per_bar = u64::from(beats_per_bar);
        let total_beats = (u64::from(end_bar) - u64::from(start_bar) + 1) * beats_per_bar;
        for beat_index in (0..total_beats).step_by(n.max(1) as usize) {
            let bar = u64::from(start_bar) + beat_index / beats_per_bar;
            let beat_in_bar = beat_index % beats_per_bar;
            let time = musical.position_to_seconds(Bar(bar as f64), Beat(beat_in_bar as f64));
            self.builder
                .transient(time)
                .intensity(intensity)
                .sharpness(sharpness)
                .add();
        }
        debug!(n, start_bar, end_bar, "Expanded every-nth-beat sequence");
        self.builder
    }

    /// Call `f` once per bar in the range with the builder and bar index
    pub fn pattern<F>(self, start_bar: u32, end_bar: u32, mut f: F) -> &'a mut Builder
    where
        F: FnMut(&mut Builder, u32),
    {
        for bar in start_bar..=end_bar {
            f(&mut *self.builder, bar);
        }
        self.builder
    }
}
