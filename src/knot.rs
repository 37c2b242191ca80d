// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction of the knot arcs.
//!
//! The knot is built in three tiers, each consuming what the previous one
//! produced:
//!
//! - **Outer** arcs are centered on an inner crossover and join its two
//!   neighbouring outer crossovers.
//! - **Middle** arcs join an outer crossover to each adjacent inner
//!   crossover. Each is tangent to the outer arc ending at the same outer
//!   crossover, because its center lies on the radius line of that outer arc.
//! - **Inner** arcs join two inner crossovers. Their centers lie on the
//!   radius lines of the middle arcs ending there, so they are tangent to
//!   both.

use core::fmt;

use crate::crossover::{ring_index, Crossovers, KnotParams, CROSSOVERS, PETALS};
use crate::{Arc, Line, Point};

/// The three rings of arcs making up the knot.
#[expect(clippy::exhaustive_enums, reason = "the knot has exactly three tiers")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Arcs looping around the outside of each petal.
    Outer,
    /// Arcs running between an outer and an inner crossover.
    Middle,
    /// Arcs joining two inner crossovers near the center.
    Inner,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Outer => "outer",
            Self::Middle => "middle",
            Self::Inner => "inner",
        })
    }
}

/// An error constructing the knot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum KnotError {
    /// The two lines defining an arc center do not cross at a single point.
    ParallelLines {
        /// Tier of the arc being solved.
        tier: Tier,
        /// Index of the arc within its tier.
        index: usize,
    },
}

impl fmt::Display for KnotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ParallelLines { tier, index } => write!(
                f,
                "center of {tier} arc {index} is undefined: its defining lines are parallel"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KnotError {}

/// The complete set of knot arcs.
#[derive(Clone, Debug, PartialEq)]
pub struct Knot {
    params: KnotParams,
    crossovers: Crossovers,
    outer: [Arc; PETALS],
    middle: [Arc; CROSSOVERS],
    middle_centers: [Point; CROSSOVERS],
    inner: [Arc; PETALS],
}

impl Knot {
    /// Total number of arcs in a knot.
    pub const ARC_COUNT: usize = PETALS + CROSSOVERS + PETALS;

    /// Construct the knot for the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`KnotError::ParallelLines`] if some arc center is undefined.
    /// This does not happen for the standard parameters.
    pub fn new(params: &KnotParams) -> Result<Self, KnotError> {
        let crossovers = Crossovers::new(params);
        let outer = outer_arcs(&crossovers);
        let (middle, middle_centers) = middle_arcs(&crossovers)?;
        let inner = inner_arcs(&crossovers, &middle_centers)?;
        log::info!(
            "solved knot: {} outer, {} middle, {} inner arcs",
            outer.len(),
            middle.len(),
            inner.len()
        );
        Ok(Self {
            params: *params,
            crossovers,
            outer,
            middle,
            middle_centers,
            inner,
        })
    }

    /// The parameters the knot was built from.
    #[inline]
    pub fn params(&self) -> &KnotParams {
        &self.params
    }

    /// The crossover points the knot was built on.
    #[inline]
    pub fn crossovers(&self) -> &Crossovers {
        &self.crossovers
    }

    /// The arcs of one tier, in construction order.
    pub fn tier(&self, tier: Tier) -> &[Arc] {
        match tier {
            Tier::Outer => &self.outer,
            Tier::Middle => &self.middle,
            Tier::Inner => &self.inner,
        }
    }

    /// Centers of the middle arcs.
    ///
    /// Entries `2i` and `2i + 1` belong to the two middle arcs of petal `i`,
    /// ending at crossovers `2i` and `2i + 2` respectively.
    #[inline]
    pub fn middle_centers(&self) -> &[Point; CROSSOVERS] {
        &self.middle_centers
    }

    /// Every arc tagged with its tier: outer, then middle, then inner.
    pub fn arcs(&self) -> impl Iterator<Item = (Tier, Arc)> + '_ {
        let outer = self.outer.iter().map(|arc| (Tier::Outer, *arc));
        let middle = self.middle.iter().map(|arc| (Tier::Middle, *arc));
        let inner = self.inner.iter().map(|arc| (Tier::Inner, *arc));
        outer.chain(middle).chain(inner)
    }
}

/// Crossing point of two center lines, or the error for arc `index` of `tier`.
fn solve_center(a: Line, b: Line, tier: Tier, index: usize) -> Result<Point, KnotError> {
    let center = a
        .crossing_point(b)
        .ok_or(KnotError::ParallelLines { tier, index })?;
    log::debug!("{tier} arc {index}: center {center:.6}");
    Ok(center)
}

fn outer_arcs(crossovers: &Crossovers) -> [Arc; PETALS] {
    let mut arcs = [Arc::default(); PETALS];
    for (i, arc) in arcs.iter_mut().enumerate() {
        let k = 2 * i as isize;
        *arc = Arc::new(crossovers.get(k), crossovers.get(k - 1), crossovers.get(k + 1));
    }
    arcs
}

fn middle_arcs(
    crossovers: &Crossovers,
) -> Result<([Arc; CROSSOVERS], [Point; CROSSOVERS]), KnotError> {
    let mut arcs = [Arc::default(); CROSSOVERS];
    let mut centers = [Point::ORIGIN; CROSSOVERS];
    for i in 0..PETALS {
        let k = 2 * i as isize;
        let outer = crossovers.get(k + 1);
        let inner1 = crossovers.get(k);
        let inner2 = crossovers.get(k + 2);

        // Each center sits on the radius line of the outer arc through
        // `outer`, which is the line to the opposite inner crossover.
        let left = solve_center(
            Line::new(outer, inner2),
            Line::perpendicular_bisector(outer, inner1),
            Tier::Middle,
            2 * i,
        )?;
        let right = solve_center(
            Line::new(outer, inner1),
            Line::perpendicular_bisector(outer, inner2),
            Tier::Middle,
            2 * i + 1,
        )?;

        arcs[2 * i] = Arc::new(left, outer, inner1);
        arcs[2 * i + 1] = Arc::new(right, outer, inner2);
        centers[2 * i] = left;
        centers[2 * i + 1] = right;
    }
    Ok((arcs, centers))
}

fn inner_arcs(
    crossovers: &Crossovers,
    middle_centers: &[Point; CROSSOVERS],
) -> Result<[Arc; PETALS], KnotError> {
    let mut arcs = [Arc::default(); PETALS];
    for (n, arc) in arcs.iter_mut().enumerate() {
        let i = 2 * n as isize + 1;
        let inner1 = crossovers.get(i - 1);
        let inner2 = crossovers.get(i + 1);
        // The middle arcs ending at `inner1` and `inner2`.
        let m1 = middle_centers[ring_index(i - 2)];
        let m2 = middle_centers[ring_index(i + 1)];
        let center = solve_center(
            Line::new(m1, inner1),
            Line::new(m2, inner2),
            Tier::Inner,
            n,
        )?;
        *arc = Arc::new(center, inner1, inner2);
    }
    Ok(arcs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn standard() -> Knot {
        Knot::new(&KnotParams::default()).unwrap()
    }

    #[test]
    fn arc_counts() {
        let knot = standard();
        assert_eq!(knot.tier(Tier::Outer).len(), 7);
        assert_eq!(knot.tier(Tier::Middle).len(), 14);
        assert_eq!(knot.tier(Tier::Inner).len(), 7);
        assert_eq!(knot.arcs().count(), Knot::ARC_COUNT);
        assert_eq!(Knot::ARC_COUNT, 28);
    }

    #[test]
    fn outer_arcs_use_crossovers() {
        let knot = standard();
        let c = knot.crossovers();
        let first = knot.tier(Tier::Outer)[0];
        assert_eq!(first.center, c[0]);
        assert_eq!(first.from, c[13]);
        assert_eq!(first.to, c[1]);
        for arc in knot.tier(Tier::Outer) {
            assert!(arc.is_consistent(TOLERANCE), "{arc:?}");
        }
    }

    #[test]
    fn middle_centers_are_equidistant() {
        let knot = standard();
        let c = knot.crossovers();
        for (i, arc) in knot.tier(Tier::Middle).iter().enumerate() {
            let petal = (i / 2) as isize;
            let outer = c.get(2 * petal + 1);
            let inner_same = if i % 2 == 0 {
                c.get(2 * petal)
            } else {
                c.get(2 * petal + 2)
            };
            assert_eq!(arc.from, outer);
            assert_eq!(arc.to, inner_same);
            assert_eq!(arc.center, knot.middle_centers()[i]);
            let d_outer = arc.center.distance(outer);
            let d_inner = arc.center.distance(inner_same);
            assert!((d_outer - d_inner).abs() < TOLERANCE, "middle {i}");
        }
    }

    #[test]
    fn inner_centers_lie_on_both_lines() {
        let knot = standard();
        let c = knot.crossovers();
        let mc = knot.middle_centers();
        for (n, arc) in knot.tier(Tier::Inner).iter().enumerate() {
            let i = 2 * n as isize + 1;
            let l1 = Line::new(mc[ring_index(i - 2)], c.get(i - 1));
            let l2 = Line::new(mc[ring_index(i + 1)], c.get(i + 1));
            assert!(l1.distance_to(arc.center) < TOLERANCE, "inner {n}");
            assert!(l2.distance_to(arc.center) < TOLERANCE, "inner {n}");
            assert!(arc.is_consistent(TOLERANCE), "inner {n}");
        }
    }

    #[test]
    fn no_degenerate_coordinates() {
        for (tier, arc) in standard().arcs() {
            let finite = arc.center.is_finite() && arc.from.is_finite() && arc.to.is_finite();
            assert!(finite, "{tier} {arc:?}");
            assert!(arc.radius() > 0.0, "{tier} {arc:?}");
        }
    }

    #[test]
    fn collapsed_radii_are_an_error() {
        let params = KnotParams {
            inner_radius: 0.0,
            outer_radius: 0.0,
            rotation: 0.0,
        };
        assert_eq!(
            Knot::new(&params),
            Err(KnotError::ParallelLines {
                tier: Tier::Middle,
                index: 0
            })
        );
    }

    #[test]
    fn error_message() {
        let err = KnotError::ParallelLines {
            tier: Tier::Inner,
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "center of inner arc 3 is undefined: its defining lines are parallel"
        );
    }
}
