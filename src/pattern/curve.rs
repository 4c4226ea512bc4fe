// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Parameter curves and their control points.

use serde::{Deserialize, Serialize};

use super::params::CurveParamId;

/// A (time, value) sample on a parameter curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Time in seconds
    #[serde(rename = "Time")]
    pub time: f64,
    #[serde(rename = "ParameterValue")]
    pub value: f64,
}

impl ControlPoint {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Continuous change of one parameter over time.
///
/// Control point order is whatever the producer appended; nothing here
/// checks that times increase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterCurve {
    /// Parameter being animated
    #[serde(rename = "ParameterID")]
    pub parameter: CurveParamId,
    /// Declared start time in seconds
    #[serde(rename = "Time")]
    pub time: f64,
    #[serde(rename = "ParameterCurveControlPoints", default)]
    pub control_points: Vec<ControlPoint>,
}

impl ParameterCurve {
    /// Create a curve from prepared control points
    pub fn new(parameter: CurveParamId, time: f64, control_points: Vec<ControlPoint>) -> Self {
        Self {
            parameter,
            time,
            control_points,
        }
    }

    /// Time of the last control point, if any
    pub fn end_time(&self) -> Option<f64> {
        self.control_points.last().map(|p| p.time)
    }
}
