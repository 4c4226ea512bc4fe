// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Discrete pattern events.

use serde::{Deserialize, Serialize};

use super::params::{EventType, ParamId};

/// A named parameter value attached to an event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventParameter {
    #[serde(rename = "ParameterID")]
    pub id: ParamId,
    #[serde(rename = "ParameterValue")]
    pub value: f64,
}

impl EventParameter {
    pub fn new(id: ParamId, value: f64) -> Self {
        Self { id, value }
    }
}

/// An instantaneous or duration-bound occurrence on the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Start time in seconds
    #[serde(rename = "Time")]
    pub time: f64,
    /// Event kind
    #[serde(rename = "EventType")]
    pub event_type: EventType,
    /// Parameter values in insertion order
    #[serde(rename = "EventParameters", default)]
    pub parameters: Vec<EventParameter>,
    /// Duration in seconds (sustained kinds only)
    #[serde(
        rename = "EventDuration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<f64>,
    /// Waveform file path (custom audio only)
    #[serde(
        rename = "EventWaveformPath",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub waveform_path: Option<String>,
}

impl Event {
    /// Create an event with no parameters
    pub fn new(event_type: EventType, time: f64) -> Self {
        Self {
            time,
            event_type,
            parameters: Vec::new(),
            duration: None,
            waveform_path: None,
        }
    }

    /// Haptic tap with intensity and sharpness
    pub fn haptic_transient(time: f64, intensity: f64, sharpness: f64) -> Self {
        Self::new(EventType::HapticTransient, time)
            .with_parameter(ParamId::HapticIntensity, intensity)
            .with_parameter(ParamId::HapticSharpness, sharpness)
    }

    /// Sustained haptic vibration
    pub fn haptic_continuous(time: f64, duration: f64, intensity: f64, sharpness: f64) -> Self {
        Self::new(EventType::HapticContinuous, time)
            .with_parameter(ParamId::HapticIntensity, intensity)
            .with_parameter(ParamId::HapticSharpness, sharpness)
            .with_duration(duration)
    }

    /// Audio event playing a waveform file
    pub fn audio_custom(time: f64, waveform_path: impl Into<String>, volume: f64) -> Self {
        Self::new(EventType::AudioCustom, time)
            .with_parameter(ParamId::AudioVolume, volume)
            .with_waveform_path(waveform_path)
    }

    /// Sustained audio tone
    pub fn audio_continuous(time: f64, duration: f64, volume: f64) -> Self {
        Self::new(EventType::AudioContinuous, time)
            .with_parameter(ParamId::AudioVolume, volume)
            .with_duration(duration)
    }

    /// Append a parameter value
    pub fn with_parameter(mut self, id: ParamId, value: f64) -> Self {
        self.parameters.push(EventParameter::new(id, value));
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_waveform_path(mut self, path: impl Into<String>) -> Self {
        self.waveform_path = Some(path.into());
        self
    }

    /// Look up the first value recorded for a parameter
    pub fn parameter(&self, id: ParamId) -> Option<f64> {
        self.parameters
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.value)
    }

    /// End time, for sustained events
    pub fn end_time(&self) -> Option<f64> {
        self.duration.map(|d| self.time + d)
    }
}
