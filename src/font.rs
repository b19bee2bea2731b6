//! Font metrics and the font-name lookup.
//!
//! A [`FontState`] carries the current character size both in device units
//! (for layout arithmetic) and in centimetres (for `SI` commands). It is
//! recomputed in full from the point size and the picture geometry on every
//! font change.

use std::collections::HashMap;

use crate::render::context::PlotContext;
use crate::render::defaults::{
    ADVANCE_RATIO, HEIGHT_FUDGE, HEIGHT_TO_WIDTH, TITLE_HEIGHT_TO_WIDTH,
};
use crate::types::{CM_PER_INCH, DEVICE_SCALE, POINTS_PER_INCH};

/// Character size in centimetres, as sent with `SI`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharSize {
    pub width: f64,
    pub height: f64,
}

impl CharSize {
    /// Plotted size of a character set at `points`.
    pub fn from_points(points: f64) -> Self {
        Self::with_ratio(points, HEIGHT_TO_WIDTH)
    }

    /// Size of a vertical title at `points`: half as wide as it is high.
    pub fn title(points: f64) -> Self {
        Self::with_ratio(points, TITLE_HEIGHT_TO_WIDTH)
    }

    fn with_ratio(points: f64, height_to_width: f64) -> Self {
        let height = points * CM_PER_INCH / (HEIGHT_FUDGE * POINTS_PER_INCH);
        Self {
            width: height / height_to_width,
            height,
        }
    }

    /// Stretch the size to cancel the distortion vertical text picks up on
    /// a non-square picture.
    pub fn aspect_corrected(self, ctx: &PlotContext) -> Self {
        Self {
            width: self.width * ctx.aspect(),
            height: self.height / ctx.aspect(),
        }
    }

    /// Same width, half the height: the size of raised and lowered runs.
    pub fn halved(self) -> Self {
        Self {
            width: self.width,
            height: self.height / 2.0,
        }
    }
}

/// The active font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontState {
    /// HPGL character set selected with `CS`
    pub index: i32,
    /// Point size the state was derived from
    pub points: f64,
    /// Character height in device units
    pub height: i32,
    /// Character advance in device units
    pub width: i32,
    /// Character size in centimetres
    pub size_cm: CharSize,
}

impl FontState {
    pub fn new(index: i32, points: f64, ctx: &PlotContext) -> Self {
        let size_cm = CharSize::from_points(points);
        let height = (points * DEVICE_SCALE / (POINTS_PER_INCH * ctx.picture_height())).round();
        // The advance is empirical: a fixed fraction of the plotted height
        let width = (size_cm.height * ADVANCE_RATIO / CM_PER_INCH) * DEVICE_SCALE
            / ctx.picture_width();
        Self {
            index,
            points,
            height: height as i32,
            width: width.round() as i32,
            size_cm,
        }
    }

    /// Size to send with `SI` for a run in the given orientation
    pub fn label_size(&self, vertical: bool, ctx: &PlotContext) -> CharSize {
        if vertical {
            self.size_cm.aspect_corrected(ctx)
        } else {
            self.size_cm
        }
    }
}

/// Maps PostScript font names onto HPGL character set numbers.
#[derive(Debug, Clone, Default)]
pub struct FontTable {
    sets: HashMap<String, i32>,
}

impl FontTable {
    /// Table covering the standard PostScript faces.
    pub fn standard() -> Self {
        let mut table = Self::default();
        for family in ["Courier", "Helvetica", "Times"] {
            for style in ["", "-Bold", "-Oblique", "-Italic", "-BoldOblique", "-BoldItalic", "-Roman"] {
                table.sets.insert(format!("{family}{style}"), 0);
            }
        }
        table.sets.insert("Symbol".to_string(), 7);
        table
    }

    pub fn with(mut self, name: impl Into<String>, set: i32) -> Self {
        self.insert(name, set);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, set: i32) {
        self.sets.insert(name.into(), set);
    }

    pub fn get(&self, name: &str) -> Option<i32> {
        self.sets.get(name).copied()
    }

    /// Character set for `name`, falling back to set 0.
    pub fn resolve(&self, name: &str) -> i32 {
        match self.get(name) {
            Some(set) => set,
            None => {
                crate::log::warn!(name, "unknown font, using character set 0");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::context::PlotConfig;

    fn ctx(w: f64, h: f64) -> PlotContext {
        PlotConfig::new().with_picture_size(w, h).context().unwrap()
    }

    #[test]
    fn twelve_point_metrics() {
        let font = FontState::new(0, 12.0, &ctx(10.0, 8.0));
        assert_eq!(font.height, 208);
        assert_eq!(font.width, 60);
        assert!((font.size_cm.height - 0.249_019_6).abs() < 1e-6);
        assert!((font.size_cm.width - 0.103_758_2).abs() < 1e-6);
    }

    #[test]
    fn metrics_follow_picture_size() {
        let small = FontState::new(0, 12.0, &ctx(5.0, 4.0));
        assert_eq!(small.height, 417);
        assert_eq!(small.width, 121);
        // centimetre size does not depend on the picture
        assert_eq!(small.size_cm, FontState::new(0, 12.0, &ctx(10.0, 8.0)).size_cm);
    }

    #[test]
    fn recomputation_is_stable() {
        let c = ctx(10.0, 8.0);
        assert_eq!(FontState::new(3, 9.5, &c), FontState::new(3, 9.5, &c));
    }

    #[test]
    fn vertical_size_is_aspect_corrected() {
        let c = ctx(10.0, 8.0);
        let font = FontState::new(0, 12.0, &c);
        let v = font.label_size(true, &c);
        assert!((v.width - font.size_cm.width * 1.25).abs() < 1e-12);
        assert!((v.height - font.size_cm.height * 0.8).abs() < 1e-12);
        assert_eq!(font.label_size(false, &c), font.size_cm);
    }

    #[test]
    fn title_size_is_half_as_wide_as_high() {
        let title = CharSize::title(12.0);
        assert_eq!(title.height, CharSize::from_points(12.0).height);
        assert!((title.width - title.height / 2.0).abs() < 1e-12);
        let corrected = title.aspect_corrected(&ctx(10.0, 8.0));
        assert_eq!(format!("{:5.3}, {:5.3}", corrected.width, corrected.height), "0.156, 0.199");
        assert_eq!(format!("{:5.3}, {:5.3}", title.width, title.height), "0.125, 0.249");
    }

    #[test]
    fn state_keeps_its_selection() {
        let font = FontState::new(3, 9.5, &ctx(10.0, 8.0));
        assert_eq!(font.index, 3);
        assert_eq!(font.points, 9.5);
        assert_eq!(font.size_cm, CharSize::from_points(font.points));
    }

    #[test]
    fn font_table_lookup() {
        let table = FontTable::standard().with("Greek-Plotter", 5);
        assert_eq!(table.resolve("Symbol"), 7);
        assert_eq!(table.resolve("Times-Roman"), 0);
        assert_eq!(table.resolve("Greek-Plotter"), 5);
        assert_eq!(table.resolve("NoSuchFont"), 0);
        assert_eq!(table.get("NoSuchFont"), None);
    }
}
