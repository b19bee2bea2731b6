//! Plot configuration and the validated per-session scale context

use glam::IVec2;

use crate::errors::{Axis, PlotError};
use crate::font::FontTable;
use crate::types::{DEVICE_SCALE, POINTS_PER_INCH, check_finite, check_positive};

use super::defaults;

/// Settings for a plot session, validated into a [`PlotContext`] when the
/// session starts.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Picture width in inches
    pub picture_width: f64,
    /// Picture height in inches
    pub picture_height: f64,
    /// Picture offset from the device origin, in inches
    pub x_offset: f64,
    pub y_offset: f64,
    /// Unprintable margins of the output device, in inches
    pub x_margin: f64,
    pub y_margin: f64,
    /// PostScript name of the font used for substitution glyphs
    pub alt_font: String,
    /// Lookup from font names to HPGL character sets
    pub fonts: FontTable,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            picture_width: defaults::PICTURE_WIDTH,
            picture_height: defaults::PICTURE_HEIGHT,
            x_offset: defaults::X_OFFSET,
            y_offset: defaults::Y_OFFSET,
            x_margin: defaults::X_MARGIN,
            y_margin: defaults::Y_MARGIN,
            alt_font: defaults::ALT_FONT.to_string(),
            fonts: FontTable::standard(),
        }
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_picture_size(mut self, width: f64, height: f64) -> Self {
        self.picture_width = width;
        self.picture_height = height;
        self
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.x_offset = x;
        self.y_offset = y;
        self
    }

    pub fn with_margins(mut self, x: f64, y: f64) -> Self {
        self.x_margin = x;
        self.y_margin = y;
        self
    }

    pub fn with_alt_font(mut self, name: impl Into<String>) -> Self {
        self.alt_font = name.into();
        self
    }

    pub fn with_fonts(mut self, fonts: FontTable) -> Self {
        self.fonts = fonts;
        self
    }

    /// Validate the picture geometry.
    pub fn context(&self) -> Result<PlotContext, PlotError> {
        let size = |axis, value| {
            check_positive(value).map_err(|reason| PlotError::InvalidPictureSize {
                axis,
                value,
                reason,
            })
        };
        let offset = |axis, value| {
            check_finite(value).map_err(|reason| PlotError::InvalidOffset {
                axis,
                value,
                reason,
            })
        };
        Ok(PlotContext {
            picture_width: size(Axis::X, self.picture_width)?,
            picture_height: size(Axis::Y, self.picture_height)?,
            x_offset: offset(Axis::X, self.x_offset)?,
            y_offset: offset(Axis::Y, self.y_offset)?,
        })
    }
}

/// Picture geometry for one plot session. Read-only once the session has
/// started; every device conversion derives from it at the time of the call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotContext {
    picture_width: f64,
    picture_height: f64,
    x_offset: f64,
    y_offset: f64,
}

impl PlotContext {
    pub fn picture_width(&self) -> f64 {
        self.picture_width
    }

    pub fn picture_height(&self) -> f64 {
        self.picture_height
    }

    pub fn x_offset(&self) -> f64 {
        self.x_offset
    }

    pub fn y_offset(&self) -> f64 {
        self.y_offset
    }

    /// Width over height of the picture
    pub fn aspect(&self) -> f64 {
        self.picture_width / self.picture_height
    }

    /// Convert a length in points along X to device units (truncated).
    pub fn points_to_device_x(&self, points: f64) -> i32 {
        (points * DEVICE_SCALE / (POINTS_PER_INCH * self.picture_width)) as i32
    }

    /// Convert a length in points along Y to device units (truncated).
    pub fn points_to_device_y(&self, points: f64) -> i32 {
        (points * DEVICE_SCALE / (POINTS_PER_INCH * self.picture_height)) as i32
    }

    /// Input window corners for the `IP` command, compensating for the
    /// device's unprintable margins.
    pub fn input_window(&self, x_margin: f64, y_margin: f64) -> (IVec2, IVec2) {
        let origin = IVec2::new(
            ((self.x_offset() - x_margin) * defaults::IP_UNITS_PER_INCH) as i32,
            ((self.y_offset() - y_margin) * defaults::IP_UNITS_PER_INCH) as i32,
        );
        let extent = IVec2::new(
            (self.picture_width * defaults::IP_UNITS_PER_INCH) as i32,
            (self.picture_height * defaults::IP_UNITS_PER_INCH) as i32,
        );
        (origin, origin + extent)
    }
}
