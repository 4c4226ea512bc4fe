// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Haptic pattern document model.
//!
//! This module provides:
//! - The document aggregate and its metadata
//! - Events and parameter curves, the two kinds of timeline entry
//! - Parameter identifiers and event types with their wire literals
//! - Canonical JSON encoding and decoding

pub mod curve;
pub mod document;
pub mod encode;
pub mod event;
pub mod params;

pub use curve::{ControlPoint, ParameterCurve};
pub use document::{
    timestamp_now, Document, Metadata, PatternElement, AHAP_VERSION, DEFAULT_PROJECT,
    TIMESTAMP_FORMAT,
};
pub use event::{Event, EventParameter};
pub use params::{CurveParamId, EventType, ParamId};
