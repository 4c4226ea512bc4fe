// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Timing module.
//!
//! This module provides tempo and time signature aware conversion
//! between musical positions and seconds.

pub mod musical;

pub use musical::{Bar, Beat, MusicalContext, TimeSignature, DEFAULT_BPM};
