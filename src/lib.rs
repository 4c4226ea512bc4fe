// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! hapseq - haptic pattern construction.
//!
//! Builds haptic/audio pattern documents (events and parameter curves on
//! a shared timeline) through a fluent builder, with musical-time
//! positioning, curve interpolation, declarative beat sequences, and
//! canonical JSON encoding.

pub mod builder;
pub mod config;
pub mod curves;
pub mod error;
pub mod notes;
pub mod pattern;
pub mod timing;

pub use builder::{
    Builder, CurveStage, Sequence, DEFAULT_INTENSITY, DEFAULT_SHARPNESS, DEFAULT_VOLUME,
};
pub use config::PatternConfig;
pub use curves::{freq_to_sharpness, interpolate, Interpolation};
pub use error::{Error, Result};
pub use notes::{ConversionStats, NoteConverter, NoteFact};
pub use pattern::{
    ControlPoint, CurveParamId, Document, Event, EventType, Metadata, ParamId, ParameterCurve,
    PatternElement,
};
pub use timing::{Bar, Beat, MusicalContext, TimeSignature};
