// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Staging objects for events.
//!
//! Each stage starts with default parameter values, accepts any number of
//! setter calls (last write wins, values are not range checked), and is
//! consumed by `add()`.

use super::curve::CurveStage;
use super::{Builder, DEFAULT_INTENSITY, DEFAULT_SHARPNESS, DEFAULT_VOLUME};
use crate::pattern::{CurveParamId, Event, EventParameter, EventType, ParamId};
use crate::timing::{Bar, Beat};

/// Overwrite a parameter if present, append it otherwise
fn set_parameter(parameters: &mut Vec<EventParameter>, id: ParamId, value: f64) {
    match parameters.iter_mut().find(|p| p.id == id) {
        Some(existing) => existing.value = value,
        None => parameters.push(EventParameter::new(id, value)),
    }
}

fn haptic_defaults() -> Vec<EventParameter> {
    vec![
        EventParameter::new(ParamId::HapticIntensity, DEFAULT_INTENSITY),
        EventParameter::new(ParamId::HapticSharpness, DEFAULT_SHARPNESS),
    ]
}

fn audio_defaults() -> Vec<EventParameter> {
    vec![EventParameter::new(ParamId::AudioVolume, DEFAULT_VOLUME)]
}

/// Staging object for a haptic transient
#[must_use = "staging objects do nothing until committed with add()"]
#[derive(Debug)]
pub struct TransientStage<'a> {
    builder: &'a mut Builder,
    time: f64,
    parameters: Vec<EventParameter>,
}

impl<'a> TransientStage<'a> {
    pub(crate) fn new(builder: &'a mut Builder, time: f64) -> Self {
        Self {
            builder,
            time,
            parameters: haptic_defaults(),
        }
    }

    pub fn intensity(mut self, intensity: f64) -> Self {
        set_parameter(&mut self.parameters, ParamId::HapticIntensity, intensity);
        self
    }

    pub fn sharpness(mut self, sharpness: f64) -> Self {
        set_parameter(&mut self.parameters, ParamId::HapticSharpness, sharpness);
        self
    }

    /// Set any other parameter, e.g. attack or release time
    pub fn parameter(mut self, id: ParamId, value: f64) -> Self {
        set_parameter(&mut self.parameters, id, value);
        self
    }

    /// Commit the event and return the builder
    pub fn add(self) -> &'a mut Builder {
        let Self {
            builder,
            time,
            parameters,
        } = self;
        let mut event = Event::new(EventType::HapticTransient, time);
        event.parameters = parameters;
        builder.commit(event)
    }
}

/// Staging object for a haptic continuous event
#[must_use = "staging objects do nothing until committed with add()"]
#[derive(Debug)]
pub struct ContinuousStage<'a> {
    builder: &'a mut Builder,
    time: f64,
    duration: f64,
    parameters: Vec<EventParameter>,
}

impl<'a> ContinuousStage<'a> {
    pub(crate) fn new(builder: &'a mut Builder, time: f64, duration: f64) -> Self {
        Self {
            builder,
            time,
            duration,
            parameters: haptic_defaults(),
        }
    }

    pub fn intensity(mut self, intensity: f64) -> Self {
        set_parameter(&mut self.parameters, ParamId::HapticIntensity, intensity);
        self
    }

    pub fn sharpness(mut self, sharpness: f64) -> Self {
        set_parameter(&mut self.parameters, ParamId::HapticSharpness, sharpness);
        self
    }

    /// Replace the duration given at the factory
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn parameter(mut self, id: ParamId, value: f64) -> Self {
        set_parameter(&mut self.parameters, id, value);
        self
    }

    pub fn add(self) -> &'a mut Builder {
        let Self {
            builder,
            time,
            duration,
            parameters,
        } = self;
        let mut event = Event::new(EventType::HapticContinuous, time).with_duration(duration);
        event.parameters = parameters;
        builder.commit(event)
    }
}

/// Staging object for an audio event backed by a waveform file
#[must_use = "staging objects do nothing until committed with add()"]
#[derive(Debug)]
pub struct AudioCustomStage<'a> {
    builder: &'a mut Builder,
    time: f64,
    waveform_path: String,
    parameters: Vec<EventParameter>,
}

impl<'a> AudioCustomStage<'a> {
    pub(crate) fn new(builder: &'a mut Builder, time: f64, waveform_path: String) -> Self {
        Self {
            builder,
            time,
            waveform_path,
            parameters: audio_defaults(),
        }
    }

    pub fn volume(mut self, volume: f64) -> Self {
        set_parameter(&mut self.parameters, ParamId::AudioVolume, volume);
        self
    }

    pub fn parameter(mut self, id: ParamId, value: f64) -> Self {
        set_parameter(&mut self.parameters, id, value);
        self
    }

    pub fn add(self) -> &'a mut Builder {
        let Self {
            builder,
            time,
            waveform_path,
            parameters,
        } = self;
        let mut event = Event::new(EventType::AudioCustom, time).with_waveform_path(waveform_path);
        event.parameters = parameters;
        builder.commit(event)
    }
}

/// Staging object for a sustained audio tone
#[must_use = "staging objects do nothing until committed with add()"]
#[derive(Debug)]
pub struct AudioContinuousStage<'a> {
    builder: &'a mut Builder,
    time: f64,
    duration: f64,
    parameters: Vec<EventParameter>,
}

impl<'a> AudioContinuousStage<'a> {
    pub(crate) fn new(builder: &'a mut Builder, time: f64, duration: f64) -> Self {
        Self {
            builder,
            time,
            duration,
            parameters: audio_defaults(),
        }
    }

    pub fn volume(mut self, volume: f64) -> Self {
        set_parameter(&mut self.parameters, ParamId::AudioVolume, volume);
        self
    }

    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn parameter(mut self, id: ParamId, value: f64) -> Self {
        set_parameter(&mut self.parameters, id, value);
        self
    }

    pub fn add(self) -> &'a mut Builder {
        let Self {
            builder,
            time,
            duration,
            parameters,
        } = self;
        let mut event = Event::new(EventType::AudioContinuous, time).with_duration(duration);
        event.parameters = parameters;
        builder.commit(event)
    }
}

/// A resolved musical position waiting for an element kind.
///
/// Durations given in beats or bars resolve through the same musical
/// context as the position itself.
#[must_use = "a position does nothing until an element is staged and committed"]
#[derive(Debug)]
pub struct PositionStage<'a> {
    builder: &'a mut Builder,
    time: f64,
}

impl<'a> PositionStage<'a> {
    pub(crate) fn new(builder: &'a mut Builder, time: f64) -> Self {
        Self { builder, time }
    }

    /// Resolved time in seconds
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn transient(self) -> TransientStage<'a> {
        TransientStage::new(self.builder, self.time)
    }

    /// Continuous event with a duration in seconds
    pub fn continuous(self, duration: f64) -> ContinuousStage<'a> {
        ContinuousStage::new(self.builder, self.time, duration)
    }

    pub fn continuous_beats(self, beats: impl Into<Beat>) -> ContinuousStage<'a> {
        let duration = self.builder.musical().beat_to_seconds(beats.into());
        ContinuousStage::new(self.builder, self.time, duration)
    }

    pub fn continuous_bars(self, bars: impl Into<Bar>) -> ContinuousStage<'a> {
        let duration = self.builder.musical().bar_to_seconds(bars.into());
        ContinuousStage::new(self.builder, self.time, duration)
    }

    pub fn audio_custom(self, waveform_path: impl Into<String>) -> AudioCustomStage<'a> {
        AudioCustomStage::new(self.builder, self.time, waveform_path.into())
    }

    pub fn audio_continuous(self, duration: f64) -> AudioContinuousStage<'a> {
        AudioContinuousStage::new(self.builder, self.time, duration)
    }

    /// Curve whose declared start is this position
    pub fn curve(self, parameter: impl Into<CurveParamId>) -> CurveStage<'a> {
        CurveStage::new(self.builder, parameter.into(), self.time)
    }
}
