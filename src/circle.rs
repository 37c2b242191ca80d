// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circles and their intersections.

use arrayvec::ArrayVec;

use crate::common::approx_eq;
use crate::Point;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Relative tolerance used to classify tangent and concentric circles.
const TANGENT_TOLERANCE: f64 = 1e-9;

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Self {
        Self {
            center: center.into(),
            radius,
        }
    }

    /// Points where the outlines of two circles meet.
    ///
    /// Concentric circles yield no points, whether or not they coincide.
    /// Circles that touch, from outside or from inside, yield the single
    /// touching point. Otherwise there are either two points or none.
    pub fn intersect(&self, other: &Self) -> ArrayVec<Point, 2> {
        let mut result = ArrayVec::new();
        let r1 = self.radius.abs();
        let r2 = other.radius.abs();
        let transverse = other.center - self.center;
        let dist = transverse.hypot();
        if approx_eq(dist, 0.0, TANGENT_TOLERANCE) {
            return result;
        }
        let radius_sum = r1 + r2;
        let radius_difference = (r1 - r2).abs();
        let dir = transverse / dist;
        if approx_eq(dist, radius_sum, TANGENT_TOLERANCE)
            || approx_eq(dist, radius_difference, TANGENT_TOLERANCE)
        {
            // Internal tangency with the larger circle second puts the
            // touching point behind `self.center`.
            let sign = if r2 > r1 && !approx_eq(dist, radius_sum, TANGENT_TOLERANCE) {
                -1.0
            } else {
                1.0
            };
            result.push(self.center + dir * (sign * r1));
            return result;
        }
        if dist > radius_sum || dist < radius_difference {
            return result;
        }
        // Distance along the center line to the chord, and the half chord.
        let x = (dist * dist - r2 * r2 + r1 * r1) / (2.0 * dist);
        let half_chord = (r1 * r1 - x * x).max(0.0).sqrt();
        let chord_middle = self.center + dir * x;
        let offset = dir.turn_90() * half_chord;
        result.push(chord_middle + offset);
        result.push(chord_middle - offset);
        result
    }
}
