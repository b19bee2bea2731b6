//! Justified text placement.
//!
//! Each justification turns a normalized anchor point into the device
//! position where the label starts. Widths are always measured on the
//! simplified text so markup characters never count.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, IVec2};

use crate::font::FontState;
use crate::markup::glyph_count;
use crate::types::{DEVICE_SCALE, POINTS_PER_INCH, device_point, run_extent, to_device};

use super::context::PlotContext;

/// Start point of a justified label
#[enum_dispatch]
pub trait Justify {
    /// Device position of the first character of `text` for anchor `at`.
    fn anchor(&self, at: DVec2, text: &str, font: &FontState, ctx: &PlotContext) -> IVec2;

    /// Whether the positioning command ends its line in the plot file.
    fn ends_line(&self) -> bool {
        false
    }
}

/// Justifications for horizontal text
#[enum_dispatch(Justify)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Justification {
    Left(Left),
    CentreBottom(CentreBottom),
    RightOffset(RightOffset),
    LeftCentre(LeftCentre),
    CentreTop(CentreTop),
}

/// Horizontal start of text centred on `x`
fn centred_x(x: i32, text: &str, font: &FontState) -> i32 {
    x - run_extent(glyph_count(text), font.width) / 2 + font.width / 6
}

/// Baseline that centres a line of text on `y`
fn centred_y(y: i32, font: &FontState) -> i32 {
    y - (f64::from(font.height) / 3.0) as i32
}

/// Text starts exactly at the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Left;

impl Justify for Left {
    fn anchor(&self, at: DVec2, _text: &str, _font: &FontState, _ctx: &PlotContext) -> IVec2 {
        device_point(at.x, at.y)
    }
}

/// Text centred on the anchor with its baseline on it, raised by `offset`
/// character heights.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CentreBottom {
    pub offset: f64,
}

impl Justify for CentreBottom {
    fn anchor(&self, at: DVec2, text: &str, font: &FontState, _ctx: &PlotContext) -> IVec2 {
        let p = device_point(at.x, at.y);
        IVec2::new(
            centred_x(p.x, text, font),
            p.y + (self.offset * f64::from(font.height)) as i32,
        )
    }
}

/// Text ending at the anchor, vertically centred, moved along X by
/// `offset` points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RightOffset {
    pub offset: f64,
}

impl Justify for RightOffset {
    fn anchor(&self, at: DVec2, text: &str, font: &FontState, ctx: &PlotContext) -> IVec2 {
        let p = device_point(at.x, at.y);
        let x = p.x - run_extent(glyph_count(text), font.width)
            + font.width / 6
            + ctx.points_to_device_x(self.offset);
        IVec2::new(x, centred_y(p.y, font))
    }

    fn ends_line(&self) -> bool {
        true
    }
}

/// Text starting at the anchor, vertically centred on it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LeftCentre;

impl Justify for LeftCentre {
    fn anchor(&self, at: DVec2, _text: &str, font: &FontState, _ctx: &PlotContext) -> IVec2 {
        let p = device_point(at.x, at.y);
        IVec2::new(p.x, centred_y(p.y, font))
    }
}

/// Text centred on the anchor and hanging one character height below it,
/// moved along Y by `offset` points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CentreTop {
    pub offset: f64,
}

impl Justify for CentreTop {
    fn anchor(&self, at: DVec2, text: &str, font: &FontState, ctx: &PlotContext) -> IVec2 {
        let p = device_point(at.x, at.y);
        IVec2::new(
            centred_x(p.x, text, font),
            p.y - font.height + ctx.points_to_device_y(self.offset),
        )
    }

    fn ends_line(&self) -> bool {
        true
    }
}

/// Placement of text running up the Y axis, such as an axis title.
///
/// The text is centred on the anchor along Y and moved back along X by the
/// width of `reference` (typically the widest tick label on that axis) at
/// `reference_size` points, then forward by `x_offset` points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertical<'a> {
    pub x_offset: f64,
    /// Point size the text itself is set in
    pub title_size: f64,
    pub reference: &'a str,
    pub reference_size: f64,
}

impl Vertical<'_> {
    pub fn anchor(&self, at: DVec2, text: &str, font: &FontState, ctx: &PlotContext) -> IVec2 {
        let reference_width = glyph_count(self.reference) as f64 * self.reference_size
            * DEVICE_SCALE
            / (2.0 * POINTS_PER_INCH * ctx.picture_width());
        let shift = self.x_offset * DEVICE_SCALE / (POINTS_PER_INCH * ctx.picture_width());
        let x = f64::from(to_device(at.x)) - reference_width + shift;
        IVec2::new(x as i32, centred_x(to_device(at.y), text, font))
    }
}
