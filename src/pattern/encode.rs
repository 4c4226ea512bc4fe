// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Canonical JSON encoding of pattern documents.
//!
//! Compact output has no whitespace; pretty output indents with two
//! spaces. Unset optional event fields are omitted rather than written
//! as `null`.

use std::io::Write;

use tracing::info;

use super::document::{Document, PatternElement};
use crate::error::{Error, Result};

fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { field, value })
    }
}

impl Document {
    /// Fail on the first NaN or infinite number, which JSON would write as `null`
    fn check_finite(&self) -> Result<()> {
        ensure_finite("Version", self.version)?;
        for element in &self.pattern {
            match element {
                PatternElement::Event(event) => {
                    ensure_finite("Time", event.time)?;
                    for parameter in &event.parameters {
                        ensure_finite("ParameterValue", parameter.value)?;
                    }
                    if let Some(duration) = event.duration {
                        ensure_finite("EventDuration", duration)?;
                    }
                }
                PatternElement::ParameterCurve(curve) => {
                    ensure_finite("Time", curve.time)?;
                    for point in &curve.control_points {
                        ensure_finite("Time", point.time)?;
                        ensure_finite("ParameterValue", point.value)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Encode to a JSON string
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        self.check_finite()?;
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        info!(elements = self.len(), bytes = json.len(), "Encoded pattern");
        Ok(json)
    }

    /// Encode to JSON bytes
    pub fn to_json_bytes(&self, pretty: bool) -> Result<Vec<u8>> {
        self.check_finite()?;
        let bytes = if pretty {
            serde_json::to_vec_pretty(self)?
        } else {
            serde_json::to_vec(self)?
        };
        info!(elements = self.len(), bytes = bytes.len(), "Encoded pattern");
        Ok(bytes)
    }

    /// Encode directly into a sink.
    ///
    /// Sink failures surface as [`crate::Error::Encoding`]. Nothing is
    /// written when the document holds a non-finite number.
    pub fn write_to<W: Write>(&self, writer: W, pretty: bool) -> Result<()> {
        self.check_finite()?;
        if pretty {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_json::to_writer(writer, self)?;
        }
        info!(elements = self.len(), "Wrote pattern");
        Ok(())
    }

    /// Decode a document from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a document from JSON bytes
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
