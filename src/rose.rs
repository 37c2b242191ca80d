// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rose curve whose self-intersections are the knot crossovers.

use core::f64::consts::TAU;

use crate::common::approx_eq;
use crate::crossover::{Crossovers, KnotParams, CROSSOVERS};
use crate::Point;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Tolerance for deciding that two branches of the curve meet.
const BRANCH_TOLERANCE: f64 = 1e-9;

/// The polar curve `r(θ) = base + cos(ratio · θ)`.
///
/// With the standard `7/3` ratio the curve winds three times around the
/// origin before closing, and its self-intersections fall on the 14 angles
/// `k · τ/14`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoseCurve {
    /// Mean radius.
    pub base: f64,
    /// Angular frequency of the radial oscillation.
    pub ratio: f64,
    /// Number of turns around the origin before the curve closes.
    pub turns: u32,
}

impl Default for RoseCurve {
    fn default() -> Self {
        Self {
            base: 7.0 / 3.0,
            ratio: 7.0 / 3.0,
            turns: 3,
        }
    }
}

impl RoseCurve {
    /// Radius at angle `theta`.
    #[inline]
    pub fn radius_at(&self, theta: f64) -> f64 {
        self.base + (self.ratio * theta).cos()
    }

    /// Radius where two branches of the curve cross at angle `k · τ/14`.
    ///
    /// Each turn contributes one branch at that angle. Returns `None` when
    /// no two branches share a radius there.
    pub fn crossover_radius(&self, k: usize) -> Option<f64> {
        let radii = (0..self.turns as usize)
            .map(|j| self.radius_at(Crossovers::angle(k + CROSSOVERS * j)));
        let mut seen = [0.0_f64; 8];
        for (j, r) in radii.enumerate().take(seen.len()) {
            if let Some(&hit) = seen[..j]
                .iter()
                .find(|&&prev| approx_eq(prev, r, BRANCH_TOLERANCE))
            {
                return Some(hit);
            }
            seen[j] = r;
        }
        None
    }

    /// Knot parameters read off the curve's self-intersections.
    ///
    /// Returns `None` unless every even position crosses at one radius and
    /// every odd position at another.
    pub fn knot_params(&self, rotation: f64) -> Option<KnotParams> {
        let inner_radius = self.crossover_radius(0)?;
        let outer_radius = self.crossover_radius(1)?;
        for k in 2..CROSSOVERS {
            let expected = if k % 2 == 0 { inner_radius } else { outer_radius };
            if !approx_eq(self.crossover_radius(k)?, expected, BRANCH_TOLERANCE) {
                return None;
            }
        }
        Some(KnotParams {
            inner_radius,
            outer_radius,
            rotation,
        })
    }

    /// Whether the crossovers of `params` are self-intersections of this curve.
    ///
    /// Only then does a trace of the curve, rotated by `params.rotation`,
    /// pass through the crossovers of a knot built from `params`.
    pub fn generates(&self, params: &KnotParams) -> bool {
        self.knot_params(params.rotation).is_some_and(|own| {
            approx_eq(own.inner_radius, params.inner_radius, BRANCH_TOLERANCE)
                && approx_eq(own.outer_radius, params.outer_radius, BRANCH_TOLERANCE)
        })
    }

    /// `n` points spaced evenly in angle along the whole closed curve,
    /// rotated by `rotation`.
    pub fn sample(&self, n: usize, rotation: f64) -> impl Iterator<Item = Point> + '_ {
        let span = TAU * f64::from(self.turns);
        (0..n).map(move |i| {
            let theta = span * i as f64 / n as f64;
            Point::from_polar(self.radius_at(theta), theta + rotation)
        })
    }
}
