// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Staging objects for parameter curves.
//!
//! A curve collects control points either one at a time or as
//! interpolated segments (`from(..).to(..).steps(..)`), any number of
//! times, before a single `add()` commits it. The curve's declared start
//! time is independent of the anchor times used for interpolation.

use super::Builder;
use crate::curves::{interpolate, Interpolation};
use crate::pattern::{ControlPoint, CurveParamId, ParameterCurve};

/// Staging object for a parameter curve
#[must_use = "staging objects do nothing until committed with add()"]
#[derive(Debug)]
pub struct CurveStage<'a> {
    builder: &'a mut Builder,
    parameter: CurveParamId,
    start_time: f64,
    points: Vec<ControlPoint>,
}

impl<'a> CurveStage<'a> {
    pub(crate) fn new(builder: &'a mut Builder, parameter: CurveParamId, start_time: f64) -> Self {
        Self {
            builder,
            parameter,
            start_time,
            points: Vec::new(),
        }
    }

    /// Set the curve's declared start time
    pub fn at(mut self, time: f64) -> Self {
        self.start_time = time;
        self
    }

    /// Append a single control point (not order checked)
    pub fn point(mut self, time: f64, value: f64) -> Self {
        self.points.push(ControlPoint::new(time, value));
        self
    }

    /// Replace all control points
    pub fn points(mut self, points: Vec<ControlPoint>) -> Self {
        self.points = points;
        self
    }

    /// Begin an interpolated segment at a start anchor
    pub fn from(self, time: f64, value: f64) -> CurveFrom<'a> {
        CurveFrom {
            curve: self,
            start: ControlPoint::new(time, value),
        }
    }

    /// Control points collected so far
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    fn extend(
        mut self,
        start: ControlPoint,
        end: ControlPoint,
        steps: usize,
        law: Interpolation,
    ) -> Self {
        self.points.extend(interpolate(start, end, steps, law));
        self
    }

    /// Commit the curve and return the builder
    pub fn add(self) -> &'a mut Builder {
        let Self {
            builder,
            parameter,
            start_time,
            points,
        } = self;
        builder.commit(ParameterCurve::new(parameter, start_time, points))
    }
}

/// A curve segment with its start anchor set
#[must_use = "a segment does nothing until an end anchor and law are chosen"]
#[derive(Debug)]
pub struct CurveFrom<'a> {
    curve: CurveStage<'a>,
    start: ControlPoint,
}

impl<'a> CurveFrom<'a> {
    pub fn to(self, time: f64, value: f64) -> CurveTo<'a> {
        CurveTo {
            curve: self.curve,
            start: self.start,
            end: ControlPoint::new(time, value),
        }
    }
}

/// A curve segment with both anchors set, waiting for its law
#[must_use = "a segment does nothing until an interpolation law is chosen"]
#[derive(Debug)]
pub struct CurveTo<'a> {
    curve: CurveStage<'a>,
    start: ControlPoint,
    end: ControlPoint,
}

impl<'a> CurveTo<'a> {
    /// Linear segment of `steps` points
    pub fn steps(self, steps: usize) -> CurveStage<'a> {
        self.interpolate(steps, Interpolation::Linear)
    }

    /// Smoothstep segment of `steps` points
    pub fn ease_in_out(self, steps: usize) -> CurveStage<'a> {
        self.interpolate(steps, Interpolation::EaseInOut)
    }

    /// Power-law segment of `steps` points
    pub fn exponential(self, steps: usize, exponent: f64) -> CurveStage<'a> {
        self.interpolate(steps, Interpolation::Exponential(exponent))
    }

    pub fn interpolate(self, steps: usize, law: Interpolation) -> CurveStage<'a> {
        self.curve.extend(self.start, self.end, steps, law)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternElement;
    use assert_approx_eq::assert_approx_eq;

    fn only_curve(builder: &Builder) -> ParameterCurve {
        match &builder.document().elements()[0] {
            PatternElement::ParameterCurve(curve) => curve.clone(),
            other => panic!("expected curve, got {other:?}"),
        }
    }

    #[test]
    fn test_interpolated_curve() {
        let mut b = Builder::new("curve test", "test creator");
        b.continuous(0.0, 2.0)
            .add()
            .curve(CurveParamId::HapticSharpness)
            .at(0.0)
            .from(0.0, 0.3)
            .to(2.0, 0.8)
            .steps(10)
            .add();

        assert_eq!(b.len(), 2);
        let curve = b.document().curves().next().unwrap().clone();
        assert_eq!(curve.parameter, CurveParamId::HapticSharpness);
        assert_eq!(curve.control_points.len(), 10);
        assert_approx_eq!(curve.control_points[0].time, 0.2, 1e-12);
        assert_approx_eq!(curve.control_points[0].value, 0.35, 1e-12);
        assert_eq!(curve.control_points[9].time, 2.0);
    }

    #[test]
    fn test_segments_concatenate() {
        let mut b = Builder::new("segments", "test");
        b.curve(CurveParamId::HapticIntensity)
            .from(0.0, 0.0)
            .to(1.0, 1.0)
            .steps(4)
            .from(1.0, 1.0)
            .to(2.0, 0.0)
            .ease_in_out(5)
            .from(2.0, 0.0)
            .to(3.0, 0.5)
            .exponential(3, 2.0)
            .add();

        let curve = only_curve(&b);
        assert_eq!(curve.control_points.len(), 12);
        assert_eq!(curve.control_points[3].time, 1.0);
        assert_eq!(curve.control_points[8].time, 2.0);
        assert_eq!(curve.control_points[11].time, 3.0);
        assert_approx_eq!(curve.control_points[11].value, 0.5, 1e-12);
    }

    #[test]
    fn test_start_time_independent_of_anchors() {
        let mut b = Builder::new("start", "test");
        b.curve(CurveParamId::AudioVolume)
            .at(5.0)
            .from(0.0, 0.0)
            .to(1.0, 1.0)
            .steps(2)
            .add();

        let curve = only_curve(&b);
        assert_eq!(curve.time, 5.0);
        assert_eq!(curve.control_points[0].time, 0.5);
    }

    #[test]
    fn test_manual_points() {
        let mut b = Builder::new("manual", "test");
        b.curve(CurveParamId::HapticIntensity)
            .point(0.5, 1.0)
            .point(0.1, 0.0)
            .add();

        let curve = only_curve(&b);
        assert_eq!(curve.time, 0.0);
        assert_eq!(
            curve.control_points,
            vec![ControlPoint::new(0.5, 1.0), ControlPoint::new(0.1, 0.0)]
        );
    }

    #[test]
    fn test_points_replace_and_mix() {
        let mut b = Builder::new("replace", "test");
        let stage = b
            .curve(crate::pattern::ParamId::HapticSharpness)
            .point(9.0, 9.0)
            .points(vec![ControlPoint::new(0.0, 0.2)])
            .from(0.0, 0.2)
            .to(1.0, 0.6)
            .steps(2);
        assert_eq!(stage.control_points().len(), 3);
        stage.add();

        let curve = only_curve(&b);
        assert_eq!(curve.parameter, CurveParamId::HapticSharpness);
        assert_eq!(curve.control_points[0], ControlPoint::new(0.0, 0.2));
        assert_approx_eq!(curve.control_points[1].value, 0.4, 1e-12);
    }

    #[test]
    fn test_empty_curve_commits() {
        let mut b = Builder::new("empty", "test");
        b.curve(CurveParamId::AudioPan).add();
        assert!(only_curve(&b).control_points.is_empty());
    }
}
