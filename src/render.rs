// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering a knot as an SVG document.

use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use crate::svg::SvgWriter;
use crate::{Color, DebugOverlay, Knot, Stroke};

/// How each knot arc is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum StrandMode {
    /// A single stroked path along the arc.
    #[default]
    Line,
    /// The two edges of a band of the given width centered on the arc.
    Ribbon {
        /// Distance between the two edges, in logical units.
        width: f64,
    },
}

impl StrandMode {
    /// Width of the band drawn by [`StrandMode::RIBBON`].
    pub const RIBBON_WIDTH: f64 = 0.8;

    /// Ribbon strands of the standard width.
    pub const RIBBON: Self = Self::Ribbon {
        width: Self::RIBBON_WIDTH,
    };
}

/// Output settings for a rendered knot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Width of the document, in pixels.
    pub width: u32,
    /// Height of the document, in pixels.
    pub height: u32,
    /// Output units per logical unit.
    pub units: f64,
    /// Half the side of the square view box, in logical units.
    pub extent: f64,
    /// Stroke for the knot strands.
    pub knot: Stroke,
    /// Stroke for overlay lines and circles.
    pub construction: Stroke,
    /// Stroke for the overlay grid.
    pub grid: Stroke,
    /// Fill for overlay dots.
    pub marker: Color,
    /// Radius of overlay dots, in logical units.
    pub dot_radius: f64,
    /// How the strands are drawn.
    pub strands: StrandMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            units: f64::from(1_u32 << 20),
            extent: 4.0,
            knot: Stroke::new(0.06).with_color(Color::DARK_RED),
            construction: Stroke::new(0.004).with_color(Color::GRAY),
            grid: Stroke::new(0.004)
                .with_color(Color::GRAY)
                .with_dashes(0.0, [0.05, 0.05]),
            marker: Color::BLUE,
            dot_radius: 1.0 / 15.0,
            strands: StrandMode::Line,
        }
    }
}

/// Draws knots with a given configuration.
///
/// # Examples
///
/// ```
/// use knotwork::{Knot, KnotParams, RenderConfig, Renderer};
///
/// let knot = Knot::new(&KnotParams::default()).unwrap();
/// let config = RenderConfig::default();
/// let svg = Renderer::new(&config).to_svg(&knot);
/// assert_eq!(svg.matches("<path").count(), 28);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Renderer<'a> {
    config: &'a RenderConfig,
    overlay: Option<DebugOverlay>,
}

impl<'a> Renderer<'a> {
    /// A renderer drawing only the knot.
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            overlay: None,
        }
    }

    /// Builder method for adding a debug overlay.
    #[must_use]
    pub fn with_overlay(mut self, overlay: DebugOverlay) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Write the whole document for `knot` into `out`.
    ///
    /// Arcs are emitted outer, middle, then inner, each followed by its
    /// overlay annotations. The remaining overlay layers come last.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn render<W: Write>(&self, knot: &Knot, out: &mut W) -> fmt::Result {
        let config = self.config;
        let mut w = SvgWriter::new(out, config.units);
        w.start(config.width, config.height, config.extent)?;
        for (tier, arc) in knot.arcs() {
            match config.strands {
                StrandMode::Line => w.arc(&arc, &config.knot)?,
                StrandMode::Ribbon { width } => {
                    w.arc(&arc.offset(-0.5 * width), &config.knot)?;
                    w.arc(&arc.offset(0.5 * width), &config.knot)?;
                }
            }
            if let Some(overlay) = self.overlay {
                overlay.arc(&mut w, config, tier, &arc)?;
            }
        }
        if let Some(overlay) = self.overlay {
            overlay.finish(&mut w, config, knot)?;
        }
        w.end()
    }

    /// Display adapter formatting the document for `knot`.
    pub fn display<'b>(&'b self, knot: &'b Knot) -> impl fmt::Display + 'b {
        SvgDocument {
            renderer: *self,
            knot,
        }
    }

    /// Render `knot` into a new string.
    pub fn to_svg(&self, knot: &Knot) -> String {
        self.display(knot).to_string()
    }
}

struct SvgDocument<'a> {
    renderer: Renderer<'a>,
    knot: &'a Knot,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.renderer.render(self.knot, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KnotParams;

    fn knot() -> Knot {
        Knot::new(&KnotParams::default()).unwrap()
    }

    #[test]
    fn one_path_per_arc() {
        let config = RenderConfig::default();
        let svg = Renderer::new(&config).to_svg(&knot());
        assert_eq!(svg.matches("<path").count(), Knot::ARC_COUNT);
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("<line"));
        assert!(svg.contains("viewBox=\"-4194304 -4194304 8388608 8388608\""));
        assert!(svg.contains("stroke:#600b26; stroke-width:62914"));
    }

    #[test]
    fn ribbon_doubles_paths() {
        let config = RenderConfig {
            strands: StrandMode::RIBBON,
            ..Default::default()
        };
        let svg = Renderer::new(&config).to_svg(&knot());
        assert_eq!(svg.matches("<path").count(), 2 * Knot::ARC_COUNT);
    }

    #[test]
    fn output_is_stable() {
        let config = RenderConfig::default();
        let renderer = Renderer::new(&config).with_overlay(DebugOverlay::ALL);
        assert_eq!(renderer.to_svg(&knot()), renderer.to_svg(&knot()));
    }

    #[test]
    fn overlay_layers() {
        let config = RenderConfig::default();
        let knot = knot();

        let crossovers = DebugOverlay {
            construction: false,
            crossovers: true,
            grid: false,
            rose: false,
        };
        let marked = Renderer::new(&config).with_overlay(crossovers).to_svg(&knot);
        assert_eq!(marked.matches("<circle").count(), 14);
        assert_eq!(marked.matches("fill:#607bc6").count(), 14);

        let construction = DebugOverlay {
            construction: true,
            crossovers: false,
            grid: false,
            rose: false,
        };
        let built = Renderer::new(&config).with_overlay(construction).to_svg(&knot);
        // Two radius lines per arc, a center dot for middle and inner arcs.
        assert_eq!(built.matches("<line").count(), 2 * Knot::ARC_COUNT);
        assert_eq!(built.matches("fill:#607bc6").count(), 14 + 7);
        assert_eq!(built.matches("<circle").count(), Knot::ARC_COUNT + 14 + 7);

        let grid = DebugOverlay {
            construction: false,
            crossovers: false,
            grid: true,
            rose: true,
        };
        let gridded = Renderer::new(&config).with_overlay(grid).to_svg(&knot);
        assert_eq!(gridded.matches("<line").count(), 14);
        assert_eq!(gridded.matches("<circle").count(), 2);
        assert_eq!(gridded.matches("<polyline").count(), 1);
    }

    #[test]
    fn grid_is_dashed() {
        let config = RenderConfig::default();
        let grid = DebugOverlay {
            construction: false,
            crossovers: false,
            grid: true,
            rose: false,
        };
        let svg = Renderer::new(&config).with_overlay(grid).to_svg(&knot());
        // 0.05 logical units at 2^20 output units each, truncated.
        let dashed = "stroke-dasharray:52428,52428\"/>";
        assert_eq!(svg.matches(dashed).count(), 14 + 2);
        assert!(!config.construction.css(config.units).to_string().contains("dasharray"));
    }

    #[test]
    fn rose_trace_needs_rose_radii() {
        let config = RenderConfig::default();
        // The standard knot scaled up by a fifth.
        let params = KnotParams {
            inner_radius: 1.2 * KnotParams::INNER_RADIUS,
            outer_radius: 1.2 * KnotParams::OUTER_RADIUS,
            ..Default::default()
        };
        let custom = Knot::new(&params).unwrap();
        let renderer = Renderer::new(&config).with_overlay(DebugOverlay::ALL);
        let custom_svg = renderer.to_svg(&custom);
        assert!(!custom_svg.contains("<polyline"));
        // The other layers are still drawn.
        assert_eq!(custom_svg.matches("<circle").count(), Knot::ARC_COUNT + 14 + 7 + 14 + 2);

        assert_eq!(renderer.to_svg(&knot()).matches("<polyline").count(), 1);
    }

    #[test]
    fn display_matches_to_svg() {
        let config = RenderConfig::default();
        let knot = knot();
        let renderer = Renderer::new(&config).with_overlay(DebugOverlay::ALL);
        assert_eq!(format!("{}", renderer.display(&knot)), renderer.to_svg(&knot));
    }

    #[test]
    fn writes_into_any_sink() {
        struct Counter(usize);
        impl Write for Counter {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.0 += s.len();
                Ok(())
            }
        }
        let config = RenderConfig::default();
        let knot = knot();
        let mut counter = Counter(0);
        Renderer::new(&config).render(&knot, &mut counter).unwrap();
        assert_eq!(counter.0, Renderer::new(&config).to_svg(&knot).len());
    }
}
