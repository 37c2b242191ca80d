// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::Point;

/// A line through two points.
///
/// The methods here treat the line as extending to infinity in both
/// directions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        Self {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The perpendicular bisector of the segment from `a` to `b`.
    ///
    /// Every point on the result is equidistant from `a` and `b`.
    pub fn perpendicular_bisector(a: Point, b: Point) -> Self {
        let mid = a.midpoint(b);
        Self::new(mid, mid + (a - b).turn_90())
    }

    /// Computes the point where two lines, if extended to infinity, would cross.
    ///
    /// Returns `None` if the lines are parallel, if either line is degenerate
    /// (both of its points coincide), or if the result is not finite.
    pub fn crossing_point(self, other: Self) -> Option<Point> {
        // P(s) = p0 + s·u lies on the other line when it has no component
        // along that line's normal, measured from q0.
        let u = self.p1 - self.p0;
        let v = other.p1 - other.p0;
        let w = self.p0 - other.p0;
        let v_perp = v.turn_90();
        let denom = v_perp.dot(u);
        if denom == 0.0 {
            return None;
        }
        let s = -v_perp.dot(w) / denom;
        let p = self.p0 + u * s;
        p.is_finite().then_some(p)
    }

    /// Perpendicular distance from `pt` to this line.
    ///
    /// Returns `NaN` if the line is degenerate.
    pub fn distance_to(self, pt: Point) -> f64 {
        let d = self.p1 - self.p0;
        d.cross(pt - self.p0).abs() / d.hypot()
    }
}
