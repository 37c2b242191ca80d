// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The crossover points of the knot.

use core::f64::consts::TAU;
use core::ops::Index;

use crate::Point;

/// Number of crossover points around the knot.
pub const CROSSOVERS: usize = 14;

/// Number of petals; each petal owns one inner and one outer crossover.
pub const PETALS: usize = CROSSOVERS / 2;

/// Wrap a signed table index into `0..CROSSOVERS`.
///
/// Every table indexed around the ring (crossovers, middle arc centers) goes
/// through this function.
///
/// # Examples
///
/// ```
/// use knotwork::ring_index;
///
/// assert_eq!(ring_index(-1), 13);
/// assert_eq!(ring_index(14), 0);
/// assert_eq!(ring_index(29), 1);
/// ```
#[inline]
pub fn ring_index(i: isize) -> usize {
    i.rem_euclid(CROSSOVERS as isize) as usize
}

/// Geometric parameters of the knot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnotParams {
    /// Radius of the even-indexed crossovers.
    pub inner_radius: f64,
    /// Radius of the odd-indexed crossovers.
    pub outer_radius: f64,
    /// Angle of crossover 0, in radians.
    pub rotation: f64,
}

impl KnotParams {
    /// Inner crossover radius of the standard knot.
    pub const INNER_RADIUS: f64 = 11.0 / 6.0;
    /// Outer crossover radius of the standard knot.
    pub const OUTER_RADIUS: f64 = 17.0 / 6.0;
    /// Crossover 0 sits at the bottom ("south") of the standard knot.
    pub const ROTATION: f64 = -TAU / 4.0;
}

impl Default for KnotParams {
    fn default() -> Self {
        Self {
            inner_radius: Self::INNER_RADIUS,
            outer_radius: Self::OUTER_RADIUS,
            rotation: Self::ROTATION,
        }
    }
}

/// The 14 crossover points, alternating between the inner (even index) and
/// outer (odd index) radius at equal angular steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossovers {
    points: [Point; CROSSOVERS],
}

impl Crossovers {
    /// Place the crossovers for the given parameters.
    pub fn new(params: &KnotParams) -> Self {
        let mut points = [Point::ORIGIN; CROSSOVERS];
        for (i, p) in points.iter_mut().enumerate() {
            let theta = Self::angle(i) + params.rotation;
            let r = if is_inner(i) {
                params.inner_radius
            } else {
                params.outer_radius
            };
            *p = Point::from_polar(r, theta);
            log::trace!("crossover {i}: r={r:.4} θ={theta:.4} at {p:.4}");
        }
        Self { points }
    }

    /// Angle of crossover `i` before the knot rotation is applied.
    #[inline]
    pub fn angle(i: usize) -> f64 {
        i as f64 * (TAU / CROSSOVERS as f64)
    }

    /// The crossover at a signed index, wrapped around the ring.
    #[inline]
    pub fn get(&self, i: isize) -> Point {
        self.points[ring_index(i)]
    }

    /// Iterate over the crossovers in index order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

impl Default for Crossovers {
    fn default() -> Self {
        Self::new(&KnotParams::default())
    }
}

impl Index<usize> for Crossovers {
    type Output = Point;

    fn index(&self, i: usize) -> &Point {
        &self.points[i]
    }
}

/// Whether crossover `i` lies on the inner radius.
#[inline]
pub fn is_inner(i: usize) -> bool {
    i % 2 == 0
}
