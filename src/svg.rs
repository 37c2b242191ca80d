// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG output.
//!
//! Coordinates are written as integers: each logical unit is scaled by a
//! fixed number of output units and truncated toward zero.

use core::fmt::{self, Write};

use crate::{Arc, Circle, Color, Line, Point, Stroke};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Convert a logical length or coordinate to integer output units.
#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is truncated toward zero on purpose"
)]
pub fn to_units(v: f64, units: f64) -> i64 {
    (v * units).trunc() as i64
}

/// A single SVG elliptical arc command on a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgArc {
    /// The arc's start point.
    pub from: Point,
    /// The arc's end point.
    pub to: Point,
    /// Radius of the circle.
    pub radius: f64,
    /// Does this arc sweep through more than π radians?
    pub large_arc: bool,
    /// Determines if the arc should begin moving at positive angles.
    pub sweep: bool,
}

impl SvgArc {
    /// Write the path data `M x,y A r,r 0 large,sweep x,y` for this arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn write_path_data(&self, units: f64, w: &mut impl Write) -> fmt::Result {
        let r = to_units(self.radius, units);
        write!(
            w,
            "M{},{} A{r},{r} 0 {},{} {},{}",
            to_units(self.from.x, units),
            to_units(self.from.y, units),
            u8::from(self.large_arc),
            u8::from(self.sweep),
            to_units(self.to.x, units),
            to_units(self.to.y, units),
        )
    }
}

impl Arc {
    /// The SVG arc command drawing this arc.
    ///
    /// The sweep flag comes from the signed area test, so among the two
    /// circles of this radius through both endpoints the command selects the
    /// one centered on `self.center`.
    pub fn to_svg_arc(&self) -> SvgArc {
        SvgArc {
            from: self.from,
            to: self.to,
            radius: self.radius(),
            large_arc: false,
            sweep: self.is_ccw(),
        }
    }
}

/// Streams SVG elements into a [`fmt::Write`] sink.
///
/// All geometry is given in logical units and scaled by `units` on output.
/// Every drawing method fails only when the sink does.
pub struct SvgWriter<'a, W: Write> {
    out: &'a mut W,
    units: f64,
}

impl<'a, W: Write> SvgWriter<'a, W> {
    /// Create a writer scaling logical units by `units`.
    pub fn new(out: &'a mut W, units: f64) -> Self {
        Self { out, units }
    }

    #[inline]
    fn u(&self, v: f64) -> i64 {
        to_units(v, self.units)
    }

    /// Open the document. The view box is the square `[-extent, extent]²`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn start(&mut self, width: u32, height: u32, extent: f64) -> fmt::Result {
        let min = self.u(-extent);
        let size = self.u(2.0 * extent);
        writeln!(self.out, "<?xml version=\"1.0\"?>")?;
        writeln!(
            self.out,
            "<svg width=\"{width}\" height=\"{height}\" viewBox=\"{min} {min} {size} {size}\" \
             xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\">"
        )
    }

    /// Close the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn end(&mut self) -> fmt::Result {
        writeln!(self.out, "</svg>")
    }

    /// Draw an arc as a path.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn arc(&mut self, arc: &Arc, stroke: &Stroke) -> fmt::Result {
        write!(self.out, "<path d=\"")?;
        arc.to_svg_arc().write_path_data(self.units, &mut *self.out)?;
        writeln!(self.out, "\" style=\"{}\"/>", stroke.css(self.units))
    }

    /// Draw a line segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn line(&mut self, line: &Line, stroke: &Stroke) -> fmt::Result {
        writeln!(
            self.out,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"{}\"/>",
            self.u(line.p0.x),
            self.u(line.p0.y),
            self.u(line.p1.x),
            self.u(line.p1.y),
            stroke.css(self.units)
        )
    }

    /// Draw the outline of a circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn circle(&mut self, circle: &Circle, stroke: &Stroke) -> fmt::Result {
        writeln!(
            self.out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" style=\"{}\"/>",
            self.u(circle.center.x),
            self.u(circle.center.y),
            self.u(circle.radius),
            stroke.css(self.units)
        )
    }

    /// Draw a filled disc.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn dot(&mut self, circle: &Circle, fill: Color) -> fmt::Result {
        writeln!(
            self.out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" style=\"fill:{fill}\"/>",
            self.u(circle.center.x),
            self.u(circle.center.y),
            self.u(circle.radius),
        )
    }

    /// Draw an open polyline through `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn polyline(
        &mut self,
        points: impl IntoIterator<Item = Point>,
        stroke: &Stroke,
    ) -> fmt::Result {
        write!(self.out, "<polyline points=\"")?;
        for (i, p) in points.into_iter().enumerate() {
            if i > 0 {
                self.out.write_char(' ')?;
            }
            write!(self.out, "{},{}", self.u(p.x), self.u(p.y))?;
        }
        writeln!(self.out, "\" style=\"{}\"/>", stroke.css(self.units))
    }
}

impl<W: Write> fmt::Debug for SvgWriter<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgWriter")
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(to_units(1.5, 10.0), 15);
        assert_eq!(to_units(-0.19, 10.0), -1);
        assert_eq!(to_units(0.999, 1.0), 0);
    }

    #[test]
    fn quarter_arc_path() {
        let ccw = Arc::new((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let svg_arc = ccw.to_svg_arc();
        assert!(svg_arc.sweep);
        assert!(!svg_arc.large_arc);
        let mut ccw_data = String::new();
        svg_arc.write_path_data(1000.0, &mut ccw_data).unwrap();
        assert_eq!(ccw_data, "M1000,0 A1000,1000 0 0,1 0,1000");

        let cw = Arc::new((0.0, 0.0), (0.0, 1.0), (1.0, 0.0));
        let mut cw_data = String::new();
        cw.to_svg_arc().write_path_data(1000.0, &mut cw_data).unwrap();
        assert_eq!(cw_data, "M0,1000 A1000,1000 0 0,0 1000,0");
    }

    #[test]
    fn writer_elements() {
        let mut out = String::new();
        let mut w = SvgWriter::new(&mut out, 100.0);
        let stroke = Stroke::new(0.02).with_color(Color::GRAY);
        w.start(50, 50, 4.0).unwrap();
        w.line(&Line::new((0.0, 0.0), (0.0, 4.0)), &stroke).unwrap();
        w.circle(&Circle::new((1.0, 1.0), 0.5), &stroke).unwrap();
        w.dot(&Circle::new((1.0, 1.0), 0.1), Color::BLUE).unwrap();
        w.polyline([Point::new(0.0, 0.0), Point::new(1.0, 2.0)], &stroke)
            .unwrap();
        w.end().unwrap();

        assert!(out.starts_with("<?xml version=\"1.0\"?>\n<svg width=\"50\" height=\"50\""));
        assert!(out.contains("viewBox=\"-400 -400 800 800\""));
        assert!(out.contains("<line x1=\"0\" y1=\"0\" x2=\"0\" y2=\"400\" style=\"fill:none; stroke:#a59da0; stroke-width:2\"/>"));
        assert!(out.contains("<circle cx=\"100\" cy=\"100\" r=\"50\""));
        assert!(out.contains("r=\"10\" style=\"fill:#607bc6\"/>"));
        assert!(out.contains("<polyline points=\"0,0 100,200\""));
        assert!(out.ends_with("</svg>\n"));
    }
}
