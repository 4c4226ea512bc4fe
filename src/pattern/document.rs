// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The pattern document aggregate.

use serde::{Deserialize, Serialize};

use super::curve::{ControlPoint, ParameterCurve};
use super::event::Event;
use super::params::CurveParamId;

/// Schema version written to every document
pub const AHAP_VERSION: f64 = 1.0;

/// Project name used when none is configured
pub const DEFAULT_PROJECT: &str = "Basis";

/// Creation timestamp layout: fixed width, sortable, locale independent
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Free-text document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Created")]
    pub created: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Created By")]
    pub created_by: String,
}

impl Metadata {
    /// Metadata stamped with the current local time
    pub fn new(description: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            project: DEFAULT_PROJECT.to_string(),
            created: timestamp_now(),
            description: description.into(),
            created_by: created_by.into(),
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }
}

/// Current local time in [`TIMESTAMP_FORMAT`]
pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// One entry in the document timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PatternElement {
    Event(Event),
    ParameterCurve(ParameterCurve),
}

impl PatternElement {
    pub fn as_event(&self) -> Option<&Event> {
        match self {
            PatternElement::Event(event) => Some(event),
            PatternElement::ParameterCurve(_) => None,
        }
    }

    pub fn as_curve(&self) -> Option<&ParameterCurve> {
        match self {
            PatternElement::Event(_) => None,
            PatternElement::ParameterCurve(curve) => Some(curve),
        }
    }

    /// Event time or curve start time
    pub fn time(&self) -> f64 {
        match self {
            PatternElement::Event(event) => event.time,
            PatternElement::ParameterCurve(curve) => curve.time,
        }
    }
}

impl From<Event> for PatternElement {
    fn from(event: Event) -> Self {
        PatternElement::Event(event)
    }
}

impl From<ParameterCurve> for PatternElement {
    fn from(curve: ParameterCurve) -> Self {
        PatternElement::ParameterCurve(curve)
    }
}

/// A complete haptic pattern.
///
/// Elements stay in insertion order. Nothing here sorts by time; callers
/// emit elements in the order the consumer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "Version")]
    pub version: f64,
    #[serde(rename = "Metadata")]
    pub metadata: Metadata,
    #[serde(rename = "Pattern", default)]
    pub pattern: Vec<PatternElement>,
}

impl Document {
    /// Create an empty document with default metadata
    pub fn new(description: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self::with_metadata(Metadata::new(description, created_by))
    }

    pub fn with_metadata(metadata: Metadata) -> Self {
        Self {
            version: AHAP_VERSION,
            metadata,
            pattern: Vec::new(),
        }
    }

    /// Append an element
    pub fn push(&mut self, element: impl Into<PatternElement>) {
        self.pattern.push(element.into());
    }

    pub fn add_event(&mut self, event: Event) {
        self.push(event);
    }

    pub fn add_parameter_curve(&mut self, curve: ParameterCurve) {
        self.push(curve);
    }

    /// Append a curve built from its parts
    pub fn add_curve(
        &mut self,
        parameter: CurveParamId,
        start_time: f64,
        control_points: Vec<ControlPoint>,
    ) {
        self.push(ParameterCurve::new(parameter, start_time, control_points));
    }

    pub fn add_haptic_transient(&mut self, time: f64, intensity: f64, sharpness: f64) {
        self.push(Event::haptic_transient(time, intensity, sharpness));
    }

    pub fn add_haptic_continuous(
        &mut self,
        time: f64,
        duration: f64,
        intensity: f64,
        sharpness: f64,
    ) {
        self.push(Event::haptic_continuous(time, duration, intensity, sharpness));
    }

    pub fn add_audio_custom(&mut self, time: f64, waveform_path: impl Into<String>, volume: f64) {
        self.push(Event::audio_custom(time, waveform_path, volume));
    }

    pub fn add_audio_continuous(&mut self, time: f64, duration: f64, volume: f64) {
        self.push(Event::audio_continuous(time, duration, volume));
    }

    /// Append every element of `other` after this document's own.
    ///
    /// Metadata of `self` is kept. Elements are not interleaved by time.
    pub fn merge(&mut self, other: Document) {
        self.pattern.extend(other.pattern);
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn elements(&self) -> &[PatternElement] {
        &self.pattern
    }

    /// Events in insertion order
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.pattern.iter().filter_map(PatternElement::as_event)
    }

    /// Parameter curves in insertion order
    pub fn curves(&self) -> impl Iterator<Item = &ParameterCurve> {
        self.pattern.iter().filter_map(PatternElement::as_curve)
    }
}
