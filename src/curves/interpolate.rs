// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Control point synthesis between two anchors.
//!
//! Every law shares the same time spacing: `steps` points at
//! `t0 + k * (t1 - t0) / steps` for `k = 1..=steps`. The start anchor
//! itself is never emitted, and the last point lands exactly on the end
//! anchor's time.

use tracing::trace;

use crate::pattern::ControlPoint;

/// Value mapping applied across a segment's fractional progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interpolation {
    /// Straight line
    Linear,
    /// Smoothstep: `f² (3 - 2f)`
    EaseInOut,
    /// Power curve `f^e`
    Exponential(f64),
}

impl Interpolation {
    /// Map progress `f` in [0, 1] to eased progress
    pub fn apply(self, f: f64) -> f64 {
        match self {
            Interpolation::Linear => f,
            Interpolation::EaseInOut => f * f * (3.0 - 2.0 * f),
            Interpolation::Exponential(exponent) => f.powf(exponent),
        }
    }
}

/// Generate `steps` control points from `start` to `end` under `law`.
///
/// A step count of zero is treated as one.
pub fn interpolate(
    start: ControlPoint,
    end: ControlPoint,
    steps: usize,
    law: Interpolation,
) -> Vec<ControlPoint> {
    let steps = steps.max(1);
    let time_diff = end.time - start.time;
    let value_diff = end.value - start.value;

    trace!(?law, steps, from = start.time, to = end.time, "Interpolating segment");

    (1..=steps)
        .map(|k| {
            let f = k as f64 / steps as f64;
            let time = if k == steps {
                end.time
            } else {
                start.time + time_diff * f
            };
            ControlPoint::new(time, start.value + value_diff * law.apply(f))
        })
        .collect()
}

/// Linear control points between two (time, value) pairs
pub fn create_curve(
    start_time: f64,
    end_time: f64,
    start_value: f64,
    end_value: f64,
    steps: usize,
) -> Vec<ControlPoint> {
    interpolate(
        ControlPoint::new(start_time, start_value),
        ControlPoint::new(end_time, end_value),
        steps,
        Interpolation::Linear,
    )
}

pub fn linear(start: ControlPoint, end: ControlPoint, steps: usize) -> Vec<ControlPoint> {
    interpolate(start, end, steps, Interpolation::Linear)
}

pub fn ease_in_out(start: ControlPoint, end: ControlPoint, steps: usize) -> Vec<ControlPoint> {
    interpolate(start, end, steps, Interpolation::EaseInOut)
}

pub fn exponential(
    start: ControlPoint,
    end: ControlPoint,
    steps: usize,
    exponent: f64,
) -> Vec<ControlPoint> {
    interpolate(start, end, steps, Interpolation::Exponential(exponent))
}
