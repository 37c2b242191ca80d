// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke and fill styles for drawn geometry.

use core::borrow::Borrow;
use core::fmt;

use smallvec::SmallVec;

use crate::svg::to_units;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    /// Gray used for construction lines and circles.
    pub const GRAY: Self = Self::rgb8(0xa5, 0x9d, 0xa0);
    /// Dark red used for the knot strands.
    pub const DARK_RED: Self = Self::rgb8(0x60, 0x0b, 0x26);
    /// Blue used for point markers.
    pub const BLUE: Self = Self::rgb8(0x60, 0x7b, 0xc6);

    /// Create a color from 8-bit components.
    #[inline]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    /// Formats as a CSS hex color, such as `#600b26`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Collection of values representing lengths in a dash pattern.
pub type Dashes = SmallVec<[f64; 4]>;

/// Describes the visual style of a stroke.
///
/// Widths and dash lengths are in logical units, the same units as the knot
/// geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    /// Width of the stroke.
    pub width: f64,
    /// Color of the stroke.
    pub color: Color,
    /// Lengths of dashes in alternating on/off order.
    pub dash_pattern: Dashes,
    /// Offset of the first dash.
    pub dash_offset: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::BLACK,
            dash_pattern: Default::default(),
            dash_offset: 0.0,
        }
    }
}

impl Stroke {
    /// Creates a new stroke with the specified width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Builder method for setting the color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder method for setting the dashing parameters.
    #[must_use]
    pub fn with_dashes<P>(mut self, offset: f64, pattern: P) -> Self
    where
        P: IntoIterator,
        P::Item: Borrow<f64>,
    {
        self.dash_offset = offset;
        self.dash_pattern.clear();
        self.dash_pattern
            .extend(pattern.into_iter().map(|dash| *dash.borrow()));
        self
    }

    /// Display adapter writing this stroke as an inline CSS style.
    ///
    /// `units` is the number of output units per logical unit.
    pub fn css(&self, units: f64) -> impl fmt::Display + '_ {
        StrokeCss {
            stroke: self,
            units,
        }
    }
}

struct StrokeCss<'a> {
    stroke: &'a Stroke,
    units: f64,
}

impl fmt::Display for StrokeCss<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stroke;
        write!(
            f,
            "fill:none; stroke:{}; stroke-width:{}",
            s.color,
            to_units(s.width, self.units)
        )?;
        if !s.dash_pattern.is_empty() {
            f.write_str("; stroke-dasharray:")?;
            for (i, dash) in s.dash_pattern.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", to_units(*dash, self.units))?;
            }
            if s.dash_offset != 0.0 {
                write!(f, "; stroke-dashoffset:{}", to_units(s.dash_offset, self.units))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex() {
        assert_eq!(Color::DARK_RED.to_string(), "#600b26");
        assert_eq!(Color::GRAY.to_string(), "#a59da0");
        assert_eq!(Color::BLUE.to_string(), "#607bc6");
    }

    #[test]
    fn solid_css() {
        let s = Stroke::new(0.5).with_color(Color::DARK_RED);
        assert_eq!(
            s.css(1000.0).to_string(),
            "fill:none; stroke:#600b26; stroke-width:500"
        );
    }

    #[test]
    fn dashed_css() {
        let s = Stroke::new(0.01)
            .with_color(Color::GRAY)
            .with_dashes(0.25, [0.5, 0.25]);
        assert_eq!(s.dash_pattern.len(), 2);
        assert_eq!(
            s.css(100.0).to_string(),
            "fill:none; stroke:#a59da0; stroke-width:1; stroke-dasharray:50,25; stroke-dashoffset:25"
        );
    }
}
