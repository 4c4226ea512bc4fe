// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fluent construction of pattern documents.
//!
//! A [`Builder`] owns the document being assembled. Factory methods hand
//! out short-lived staging objects that borrow the builder, collect
//! settings through chained calls, and commit exactly once with `add()`,
//! which hands the builder back for the next call:
//!
//! ```
//! use hapseq::{Builder, CurveParamId};
//!
//! let mut builder = Builder::new("demo", "docs").with_bpm(120.0);
//! builder
//!     .transient(0.0).intensity(1.0).sharpness(0.5).add()
//!     .at_beat(2.0).continuous_beats(2.0).intensity(0.8).add()
//!     .curve(CurveParamId::HapticIntensity)
//!     .at(1.0)
//!     .from(1.0, 0.8).to(2.0, 0.0).ease_in_out(8)
//!     .add();
//!
//! assert_eq!(builder.len(), 3);
//! let json = builder.to_json(false).unwrap();
//! assert!(json.starts_with("{\"Version\":1.0"));
//! ```

pub mod curve;
pub mod events;
pub mod sequence;

use std::io::Write;

use tracing::debug;

pub use curve::{CurveFrom, CurveStage, CurveTo};
pub use events::{
    AudioContinuousStage, AudioCustomStage, ContinuousStage, PositionStage, TransientStage,
};
pub use sequence::Sequence;

use crate::config::PatternConfig;
use crate::error::Result;
use crate::pattern::{CurveParamId, Document, Metadata, PatternElement};
use crate::timing::{Bar, Beat, MusicalContext, TimeSignature};

/// Default haptic intensity for new events
pub const DEFAULT_INTENSITY: f64 = 0.5;

/// Default haptic sharpness for new events
pub const DEFAULT_SHARPNESS: f64 = 0.5;

/// Default audio volume for new events
pub const DEFAULT_VOLUME: f64 = 0.75;

/// Construction session for one pattern document
#[derive(Debug)]
pub struct Builder {
    document: Document,
    musical: Option<MusicalContext>,
}

impl Builder {
    /// Start a new document
    pub fn new(description: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self::with_metadata(Metadata::new(description, created_by))
    }

    pub fn with_metadata(metadata: Metadata) -> Self {
        Self {
            document: Document::with_metadata(metadata),
            musical: None,
        }
    }

    /// Seed metadata and musical context from configuration
    pub fn from_config(config: &PatternConfig) -> Self {
        Self::with_metadata(config.metadata()).with_musical_context(config.musical_context())
    }

    /// Set the tempo, creating a 4/4 context if none exists
    pub fn with_bpm(mut self, bpm: f64) -> Self {
        self.set_bpm(bpm);
        self
    }

    /// Set the time signature, creating a 120 BPM context if none exists
    pub fn with_time_signature(mut self, numerator: u32, denominator: u32) -> Self {
        self.set_time_signature(numerator, denominator);
        self
    }

    pub fn with_musical_context(mut self, musical: MusicalContext) -> Self {
        self.musical = Some(musical);
        self
    }

    /// Change the tempo mid-session
    pub fn set_bpm(&mut self, bpm: f64) {
        match self.musical.as_mut() {
            Some(musical) => musical.set_bpm(bpm),
            None => self.musical = Some(MusicalContext::new(bpm, 4, 4)),
        }
    }

    pub fn set_time_signature(&mut self, numerator: u32, denominator: u32) {
        match self.musical.as_mut() {
            Some(musical) => musical.set_time_signature(numerator, denominator),
            None => {
                self.musical = Some(MusicalContext {
                    time_signature: TimeSignature::new(numerator, denominator),
                    ..MusicalContext::default()
                })
            }
        }
    }

    /// Configured musical context, if any musical operation has run
    pub fn musical_context(&self) -> Option<&MusicalContext> {
        self.musical.as_ref()
    }

    /// Musical context, created with defaults on first use
    pub(crate) fn musical(&mut self) -> MusicalContext {
        *self.musical.get_or_insert_with(|| {
            debug!("No musical context configured, defaulting to 120 BPM 4/4");
            MusicalContext::default()
        })
    }

    /// Beats per bar of the (possibly defaulted) musical context
    pub fn beats_per_bar(&mut self) -> u32 {
        self.musical().beats_per_bar()
    }

    /// Begin a haptic transient at an absolute time
    pub fn transient(&mut self, time: f64) -> TransientStage<'_> {
        TransientStage::new(self, time)
    }

    /// Begin a haptic continuous event at an absolute time
    pub fn continuous(&mut self, time: f64, duration: f64) -> ContinuousStage<'_> {
        ContinuousStage::new(self, time, duration)
    }

    /// Begin an audio event that plays a waveform file
    pub fn audio_custom(
        &mut self,
        time: f64,
        waveform_path: impl Into<String>,
    ) -> AudioCustomStage<'_> {
        AudioCustomStage::new(self, time, waveform_path.into())
    }

    /// Begin a sustained audio tone
    pub fn audio_continuous(&mut self, time: f64, duration: f64) -> AudioContinuousStage<'_> {
        AudioContinuousStage::new(self, time, duration)
    }

    /// Position the next element at a beat
    pub fn at_beat(&mut self, beat: impl Into<Beat>) -> PositionStage<'_> {
        let time = self.musical().beat_to_seconds(beat.into());
        PositionStage::new(self, time)
    }

    /// Position the next element at the start of a bar
    pub fn at_bar(&mut self, bar: impl Into<Bar>) -> PositionStage<'_> {
        let time = self.musical().bar_to_seconds(bar.into());
        PositionStage::new(self, time)
    }

    /// Position the next element at a beat offset within a bar
    pub fn at(&mut self, bar: impl Into<Bar>, beat: impl Into<Beat>) -> PositionStage<'_> {
        let time = self.musical().position_to_seconds(bar.into(), beat.into());
        PositionStage::new(self, time)
    }

    /// Begin a parameter curve starting at time zero
    pub fn curve(&mut self, parameter: impl Into<CurveParamId>) -> CurveStage<'_> {
        CurveStage::new(self, parameter.into(), 0.0)
    }

    /// Expand bar/beat ranges into repeated events
    pub fn sequence(&mut self) -> Sequence<'_> {
        Sequence::new(self)
    }

    /// Append a finished element and hand the session back
    pub(crate) fn commit(&mut self, element: impl Into<PatternElement>) -> &mut Self {
        let element = element.into();
        match &element {
            PatternElement::Event(event) => {
                debug!(kind = %event.event_type, time = event.time, "Committed event")
            }
            PatternElement::ParameterCurve(curve) => debug!(
                parameter = %curve.parameter,
                time = curve.time,
                points = curve.control_points.len(),
                "Committed parameter curve"
            ),
        }
        self.document.push(element);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// Encode the document built so far
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        self.document.to_json(pretty)
    }

    pub fn to_json_bytes(&self, pretty: bool) -> Result<Vec<u8>> {
        self.document.to_json_bytes(pretty)
    }

    pub fn write_to<W: Write>(&self, writer: W, pretty: bool) -> Result<()> {
        self.document.write_to(writer, pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{EventType, ParamId};

    #[test]
    fn test_fluent_chain() {
        let mut b = Builder::new("test", "test creator");
        b.transient(0.0)
            .intensity(1.0)
            .sharpness(0.5)
            .add()
            .continuous(1.0, 2.0)
            .intensity(0.8)
            .sharpness(0.7)
            .add();

        let doc = b.into_document();
        assert_eq!(doc.len(), 2);
        let continuous = doc.elements()[1].as_event().unwrap();
        assert_eq!(continuous.event_type, EventType::HapticContinuous);
        assert_eq!(continuous.duration, Some(2.0));
        assert_eq!(continuous.parameter(ParamId::HapticIntensity), Some(0.8));
    }

    #[test]
    fn test_musical_positions() {
        let mut b = Builder::new("musical test", "test creator")
            .with_bpm(120.0)
            .with_time_signature(4, 4);
        b.at_beat(0.0)
            .transient()
            .intensity(1.0)
            .add()
            .at_beat(1.0)
            .transient()
            .intensity(0.8)
            .add()
            .at_bar(1.0)
            .continuous(1.0)
            .intensity(0.5)
            .add();

        let times: Vec<f64> = b.document().events().map(|e| e.time).collect();
        assert_eq!(times, vec![0.0, 0.5, 2.0]);
    }

    #[test]
    fn test_lazy_default_context() {
        let mut b = Builder::new("lazy", "test");
        assert!(b.musical_context().is_none());

        b.at_beat(4.0).transient().add();
        b.at_bar(2.0).transient().add();
        assert_eq!(b.musical_context(), Some(&MusicalContext::default()));

        let times: Vec<f64> = b.document().events().map(|e| e.time).collect();
        assert_eq!(times, vec![2.0, 4.0]);
    }

    #[test]
    fn test_bpm_and_signature_defaults() {
        let b = Builder::new("bpm", "test").with_bpm(90.0);
        assert_eq!(b.musical_context(), Some(&MusicalContext::new(90.0, 4, 4)));

        let b = Builder::new("sig", "test").with_time_signature(3, 4);
        assert_eq!(b.musical_context(), Some(&MusicalContext::new(120.0, 3, 4)));

        let b = Builder::new("both", "test")
            .with_time_signature(7, 8)
            .with_bpm(140.0);
        assert_eq!(b.musical_context(), Some(&MusicalContext::new(140.0, 7, 8)));
    }

    #[test]
    fn test_session_continues_after_encoding() {
        let mut b = Builder::new("continue", "test");
        b.transient(0.0).add();
        let first = b.to_json(false).unwrap();
        b.transient(1.0).add();
        let second = b.to_json(false).unwrap();
        assert!(second.len() > first.len());
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn test_from_config() {
        let config = PatternConfig::from_yaml(
            r#"
metadata:
  description: "from config"
  created_by: "yaml"
tempo: 60
time_signature_num: 3
"#,
        )
        .unwrap();
        let mut b = Builder::from_config(&config);
        b.at_bar(1.0).transient().add();

        assert_eq!(b.document().metadata.description, "from config");
        assert_eq!(b.document().metadata.created_by, "yaml");
        assert_eq!(b.document().elements()[0].time(), 3.0);
    }

    #[test]
    fn test_zero_tempo_fails_to_encode() {
        let mut b = Builder::new("zero tempo", "test").with_bpm(0.0);
        b.at_beat(1.0).transient().add();

        let err = b.to_json(false).unwrap_err();
        assert!(err.is_encoding());
        assert!(b.to_json_bytes(true).is_err());
    }

    #[test]
    fn test_write_to_matches_json() {
        let mut b = Builder::new("write", "test");
        b.transient(0.25).add();
        let mut out = Vec::new();
        b.write_to(&mut out, true).unwrap();
        assert_eq!(out, b.to_json_bytes(true).unwrap());
    }
}
