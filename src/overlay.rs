// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction overlay drawn on top of the knot.

use core::fmt::{self, Write};

use crate::crossover::{Crossovers, CROSSOVERS};
use crate::render::RenderConfig;
use crate::svg::SvgWriter;
use crate::{Arc, Circle, Knot, Line, Point, RoseCurve, Tier};

/// Number of points used to trace the rose curve.
const ROSE_SAMPLES: usize = 3 * 7 * 64;

/// Optional debug layers showing how the knot was constructed.
///
/// The overlay is composed into a [`Renderer`](crate::Renderer) with
/// [`Renderer::with_overlay`](crate::Renderer::with_overlay).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugOverlay {
    /// After each knot arc, draw its center, its radius lines and its full
    /// circle.
    pub construction: bool,
    /// Mark every crossover point.
    pub crossovers: bool,
    /// Draw dashed radial spokes through the crossover angles and circles at
    /// the crossover radii.
    pub grid: bool,
    /// Trace the rose curve the crossovers come from.
    ///
    /// The trace is skipped when the knot radii are not those of the
    /// standard rose curve.
    pub rose: bool,
}

impl DebugOverlay {
    /// An overlay with every layer enabled.
    pub const ALL: Self = Self {
        construction: true,
        crossovers: true,
        grid: true,
        rose: true,
    };

    /// Annotate a knot arc just drawn.
    pub(crate) fn arc<W: Write>(
        self,
        w: &mut SvgWriter<'_, W>,
        config: &RenderConfig,
        tier: Tier,
        arc: &Arc,
    ) -> fmt::Result {
        if !self.construction {
            return Ok(());
        }
        // Outer arcs are centered on a crossover, which gets its own marker.
        if tier != Tier::Outer {
            w.dot(&Circle::new(arc.center, config.dot_radius), config.marker)?;
        }
        w.line(&Line::new(arc.center, arc.from), &config.construction)?;
        w.line(&Line::new(arc.center, arc.to), &config.construction)?;
        w.circle(&arc.circle(), &config.construction)
    }

    /// Draw the layers that come after all knot arcs.
    pub(crate) fn finish<W: Write>(
        self,
        w: &mut SvgWriter<'_, W>,
        config: &RenderConfig,
        knot: &Knot,
    ) -> fmt::Result {
        let params = knot.params();
        if self.crossovers {
            for p in knot.crossovers().iter() {
                w.dot(&Circle::new(p, config.dot_radius), config.marker)?;
            }
        }
        if self.grid {
            for i in 0..CROSSOVERS {
                let dir = Point::from_polar(config.extent, Crossovers::angle(i) + params.rotation);
                w.line(&Line::new(Point::ORIGIN, dir), &config.grid)?;
            }
            w.circle(&Circle::new(Point::ORIGIN, params.inner_radius), &config.grid)?;
            w.circle(&Circle::new(Point::ORIGIN, params.outer_radius), &config.grid)?;
        }
        if self.rose {
            let rose = RoseCurve::default();
            if !rose.generates(params) {
                log::debug!("skipping rose trace: knot radii do not lie on the rose curve");
                return Ok(());
            }
            let mut points = rose.sample(ROSE_SAMPLES, params.rotation);
            let first = points.next();
            // Close the loop.
            w.polyline(
                first.into_iter().chain(points).chain(first),
                &config.construction,
            )?;
        }
        Ok(())
    }
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self::ALL
    }
}
