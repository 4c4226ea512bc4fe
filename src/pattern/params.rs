// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Event types and parameter identifiers.
//!
//! The serialized names are the literals the playback engine expects.
//! Curve identifiers mirror event identifiers one-to-one, with a
//! `Control` suffix on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a pattern event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Short haptic tap
    HapticTransient,
    /// Haptic vibration with a duration
    HapticContinuous,
    /// Audio played from an external waveform file
    AudioCustom,
    /// Sustained generated audio tone
    AudioContinuous,
}

impl EventType {
    /// Wire literal for this event type
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::HapticTransient => "HapticTransient",
            EventType::HapticContinuous => "HapticContinuous",
            EventType::AudioCustom => "AudioCustom",
            EventType::AudioContinuous => "AudioContinuous",
        }
    }

    /// Whether events of this type carry a duration
    pub fn is_sustained(self) -> bool {
        matches!(self, EventType::HapticContinuous | EventType::AudioContinuous)
    }

    pub fn is_haptic(self) -> bool {
        matches!(self, EventType::HapticTransient | EventType::HapticContinuous)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of an event parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamId {
    HapticIntensity,
    HapticSharpness,
    HapticAttackTime,
    HapticDecayTime,
    HapticReleaseTime,
    AudioVolume,
    AudioPitch,
    AudioPan,
    AudioBrightness,
    AudioAttackTime,
    AudioDecayTime,
    AudioReleaseTime,
}

impl ParamId {
    /// Every event parameter, haptic first
    pub const ALL: [ParamId; 12] = [
        ParamId::HapticIntensity,
        ParamId::HapticSharpness,
        ParamId::HapticAttackTime,
        ParamId::HapticDecayTime,
        ParamId::HapticReleaseTime,
        ParamId::AudioVolume,
        ParamId::AudioPitch,
        ParamId::AudioPan,
        ParamId::AudioBrightness,
        ParamId::AudioAttackTime,
        ParamId::AudioDecayTime,
        ParamId::AudioReleaseTime,
    ];

    /// Wire literal for this parameter
    pub fn as_str(self) -> &'static str {
        match self {
            ParamId::HapticIntensity => "HapticIntensity",
            ParamId::HapticSharpness => "HapticSharpness",
            ParamId::HapticAttackTime => "HapticAttackTime",
            ParamId::HapticDecayTime => "HapticDecayTime",
            ParamId::HapticReleaseTime => "HapticReleaseTime",
            ParamId::AudioVolume => "AudioVolume",
            ParamId::AudioPitch => "AudioPitch",
            ParamId::AudioPan => "AudioPan",
            ParamId::AudioBrightness => "AudioBrightness",
            ParamId::AudioAttackTime => "AudioAttackTime",
            ParamId::AudioDecayTime => "AudioDecayTime",
            ParamId::AudioReleaseTime => "AudioReleaseTime",
        }
    }

    /// The curve identifier that animates this parameter
    pub fn curve(self) -> CurveParamId {
        match self {
            ParamId::HapticIntensity => CurveParamId::HapticIntensity,
            ParamId::HapticSharpness => CurveParamId::HapticSharpness,
            ParamId::HapticAttackTime => CurveParamId::HapticAttackTime,
            ParamId::HapticDecayTime => CurveParamId::HapticDecayTime,
            ParamId::HapticReleaseTime => CurveParamId::HapticReleaseTime,
            ParamId::AudioVolume => CurveParamId::AudioVolume,
            ParamId::AudioPitch => CurveParamId::AudioPitch,
            ParamId::AudioPan => CurveParamId::AudioPan,
            ParamId::AudioBrightness => CurveParamId::AudioBrightness,
            ParamId::AudioAttackTime => CurveParamId::AudioAttackTime,
            ParamId::AudioDecayTime => CurveParamId::AudioDecayTime,
            ParamId::AudioReleaseTime => CurveParamId::AudioReleaseTime,
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a parameter curve target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveParamId {
    #[serde(rename = "HapticIntensityControl")]
    HapticIntensity,
    #[serde(rename = "HapticSharpnessControl")]
    HapticSharpness,
    #[serde(rename = "HapticAttackTimeControl")]
    HapticAttackTime,
    #[serde(rename = "HapticDecayTimeControl")]
    HapticDecayTime,
    #[serde(rename = "HapticReleaseTimeControl")]
    HapticReleaseTime,
    #[serde(rename = "AudioVolumeControl")]
    AudioVolume,
    #[serde(rename = "AudioPitchControl")]
    AudioPitch,
    #[serde(rename = "AudioPanControl")]
    AudioPan,
    #[serde(rename = "AudioBrightnessControl")]
    AudioBrightness,
    #[serde(rename = "AudioAttackTimeControl")]
    AudioAttackTime,
    #[serde(rename = "AudioDecayTimeControl")]
    AudioDecayTime,
    #[serde(rename = "AudioReleaseTimeControl")]
    AudioReleaseTime,
}

impl CurveParamId {
    /// Wire literal for this curve target
    pub fn as_str(self) -> &'static str {
        match self {
            CurveParamId::HapticIntensity => "HapticIntensityControl",
            CurveParamId::HapticSharpness => "HapticSharpnessControl",
            CurveParamId::HapticAttackTime => "HapticAttackTimeControl",
            CurveParamId::HapticDecayTime => "HapticDecayTimeControl",
            CurveParamId::HapticReleaseTime => "HapticReleaseTimeControl",
            CurveParamId::AudioVolume => "AudioVolumeControl",
            CurveParamId::AudioPitch => "AudioPitchControl",
            CurveParamId::AudioPan => "AudioPanControl",
            CurveParamId::AudioBrightness => "AudioBrightnessControl",
            CurveParamId::AudioAttackTime => "AudioAttackTimeControl",
            CurveParamId::AudioDecayTime => "AudioDecayTimeControl",
            CurveParamId::AudioReleaseTime => "AudioReleaseTimeControl",
        }
    }

    /// The event parameter this curve animates
    pub fn event_param(self) -> ParamId {
        match self {
            CurveParamId::HapticIntensity => ParamId::HapticIntensity,
            CurveParamId::HapticSharpness => ParamId::HapticSharpness,
            CurveParamId::HapticAttackTime => ParamId::HapticAttackTime,
            CurveParamId::HapticDecayTime => ParamId::HapticDecayTime,
            CurveParamId::HapticReleaseTime => ParamId::HapticReleaseTime,
            CurveParamId::AudioVolume => ParamId::AudioVolume,
            CurveParamId::AudioPitch => ParamId::AudioPitch,
            CurveParamId::AudioPan => ParamId::AudioPan,
            CurveParamId::AudioBrightness => ParamId::AudioBrightness,
            CurveParamId::AudioAttackTime => ParamId::AudioAttackTime,
            CurveParamId::AudioDecayTime => ParamId::AudioDecayTime,
            CurveParamId::AudioReleaseTime => ParamId::AudioReleaseTime,
        }
    }
}

impl From<ParamId> for CurveParamId {
    fn from(param: ParamId) -> Self {
        param.curve()
    }
}

impl fmt::Display for CurveParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
