// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A circular arc between two points.

use core::f64::consts::TAU;

use arrayvec::ArrayVec;

use crate::{Circle, Point};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Angular distance below which a point counts as an arc endpoint.
const ENDPOINT_TOLERANCE: f64 = 1e-9;

/// A circular arc, described by its center and its two endpoints.
///
/// The radius is the distance from `center` to `from`; a well formed arc has
/// `to` at the same distance (see [`Arc::is_consistent`]). Of the two arcs of
/// that circle joining the endpoints, this is the shorter one, traversed from
/// `from` to `to`.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    /// The arc's center point.
    pub center: Point,
    /// The arc's start point.
    pub from: Point,
    /// The arc's end point.
    pub to: Point,
}

impl Arc {
    /// Create a new `Arc`.
    #[inline(always)]
    pub fn new(center: impl Into<Point>, from: impl Into<Point>, to: impl Into<Point>) -> Self {
        Self {
            center: center.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// The radius, measured to the start point.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.from.distance(self.center)
    }

    /// The full circle this arc lies on.
    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius())
    }

    /// Whether both endpoints lie at the same distance from the center.
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        (self.to.distance(self.center) - self.radius()).abs() <= tolerance
    }

    /// Signed area test on (center, from, to).
    ///
    /// True when the arc turns counter-clockwise in a Y-up system, which is
    /// the positive angle direction.
    #[inline]
    pub fn is_ccw(&self) -> bool {
        (self.from - self.center).cross(self.to - self.center) > 0.0
    }

    /// Angle of the start point as seen from the center.
    #[inline]
    pub fn start_angle(&self) -> f64 {
        (self.from - self.center).atan2()
    }

    /// Signed angle swept from `from` to `to`, in the range `-π..=π`.
    pub fn sweep_angle(&self) -> f64 {
        let a = self.from - self.center;
        let b = self.to - self.center;
        a.cross(b).atan2(a.dot(b))
    }

    /// Whether the direction at angle `th` from the center falls strictly
    /// inside the arc.
    ///
    /// Directions within a small tolerance of either endpoint are excluded.
    pub fn contains_angle(&self, th: f64) -> bool {
        let sweep = self.sweep_angle();
        let delta = if sweep >= 0.0 {
            (th - self.start_angle()).rem_euclid(TAU)
        } else {
            (self.start_angle() - th).rem_euclid(TAU)
        };
        delta > ENDPOINT_TOLERANCE && delta < sweep.abs() - ENDPOINT_TOLERANCE
    }

    /// Points where two arcs cross, excluding their endpoints.
    pub fn intersect(&self, other: &Self) -> ArrayVec<Point, 2> {
        self.circle()
            .intersect(&other.circle())
            .into_iter()
            .filter(|p| {
                self.contains_angle((*p - self.center).atan2())
                    && other.contains_angle((*p - other.center).atan2())
            })
            .collect()
    }

    /// The concentric arc whose radius is larger by `distance`.
    ///
    /// It spans the same angles, so a negative `distance` smaller in
    /// magnitude than the radius gives the inner parallel arc.
    #[must_use]
    pub fn offset(&self, distance: f64) -> Self {
        let radius = self.radius() + distance;
        let start = (self.from - self.center).normalize();
        let end = (self.to - self.center).normalize();
        Self {
            center: self.center,
            from: self.center + start * radius,
            to: self.center + end * radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn quarter_turn_is_ccw() {
        let a = Arc::new((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let b = Arc::new((0.0, 0.0), (0.0, 1.0), (1.0, 0.0));
        assert!(a.is_ccw());
        assert!(!b.is_ccw());
        assert!((a.sweep_angle() - FRAC_PI_2).abs() < 1e-15);
        assert!((b.sweep_angle() + FRAC_PI_2).abs() < 1e-15);
        assert_eq!(a.radius(), b.radius());
    }

    #[test]
    fn consistency() {
        let a = Arc::new((1.0, 1.0), (4.0, 5.0), (6.0, 1.0));
        assert_eq!(a.radius(), 5.0);
        assert!(a.is_consistent(1e-12));
        let b = Arc::new((1.0, 1.0), (4.0, 5.0), (6.5, 1.0));
        assert!(!b.is_consistent(1e-9));
    }

    #[test]
    fn contains_angle() {
        let ccw = Arc::new((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        assert!(ccw.contains_angle(PI / 4.0));
        assert!(ccw.contains_angle(PI / 4.0 + 2.0 * PI));
        assert!(!ccw.contains_angle(-PI / 4.0));
        assert!(!ccw.contains_angle(0.0));
        assert!(!ccw.contains_angle(FRAC_PI_2));

        let cw = Arc::new((0.0, 0.0), (0.0, 1.0), (1.0, 0.0));
        assert!(cw.contains_angle(PI / 4.0));
        assert!(!cw.contains_angle(PI));

        // Across the ±π seam.
        let seam = Arc::new((0.0, 0.0), (-1.0, 0.1), (-1.0, -0.1));
        assert!(seam.contains_angle(PI));
        assert!(seam.contains_angle(-PI));
        assert!(!seam.contains_angle(0.0));
    }

    #[test]
    fn crossing_arcs() {
        // Clockwise quarter from the top of a circle of radius 5.
        let a = Arc::new((0.0, 0.0), (0.0, 5.0), (5.0, 0.0));
        // Counter-clockwise quarter from the top of a circle centered at (8, 0).
        let b = Arc::new((8.0, 0.0), (8.0, 5.0), (3.0, 0.0));
        let points = a.intersect(&b);
        assert_eq!(points.len(), 1);
        assert!(points[0].distance(Point::new(4.0, 3.0)) < 1e-12);
        assert_eq!(b.intersect(&a).len(), 1);
    }

    #[test]
    fn tangent_arcs_meet_only_at_endpoint() {
        let a = Arc::new((0.0, 0.0), (0.0, 1.0), (1.0, 0.0));
        let b = Arc::new((3.0, 0.0), (1.0, 0.0), (3.0, 2.0));
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn offset_keeps_angles() {
        let a = Arc::new((1.0, 2.0), (4.0, 2.0), (1.0, 5.0));
        let outer = a.offset(0.5);
        let inner = a.offset(-0.5);
        assert!((outer.radius() - 3.5).abs() < 1e-12);
        assert!((inner.radius() - 2.5).abs() < 1e-12);
        assert!(outer.is_consistent(1e-12));
        assert!(inner.is_consistent(1e-12));
        assert!((outer.sweep_angle() - a.sweep_angle()).abs() < 1e-12);
        assert_eq!(outer.is_ccw(), a.is_ccw());
    }
}
