//! HPGL plot sessions
//!
//! This module is organized into submodules:
//! - `defaults`: Default picture settings and layout constants
//! - `context`: PlotConfig and the validated PlotContext
//! - `emit`: Command formatting and the output sink
//! - `label`: Markup-aware label layout
//! - `justify`: Justified and vertical text placement

pub mod context;
pub mod defaults;
pub mod emit;
pub mod justify;
pub mod label;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::{DVec2, IVec2};

pub use context::{PlotConfig, PlotContext};
pub use emit::{Command, Dash, Emitter};
pub use justify::{
    CentreBottom, CentreTop, Justification, Justify, Left, LeftCentre, RightOffset, Vertical,
};
pub use label::{LabelLayout, LabelStats, LaidOut, Orientation};

use crate::errors::PlotError;
use crate::font::{CharSize, FontState};
use crate::types::device_point;

/// One plot: an open output stream plus the picture geometry and font it is
/// being drawn with. Commands are written in call order.
#[derive(Debug)]
pub struct Plotter<W: Write> {
    out: Emitter<W>,
    ctx: PlotContext,
    font: Option<FontState>,
}

impl Plotter<BufWriter<File>> {
    /// Create the plot file at `path` and initialize it.
    pub fn create(path: impl AsRef<Path>, config: &PlotConfig) -> Result<Self, PlotError> {
        let ctx = config.context()?;
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| PlotError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::start(BufWriter::new(file), ctx, config)
    }
}

impl<W: Write> Plotter<W> {
    /// Initialize a plot over an already-open sink.
    pub fn new(sink: W, config: &PlotConfig) -> Result<Self, PlotError> {
        let ctx = config.context()?;
        Self::start(sink, ctx, config)
    }

    fn start(sink: W, ctx: PlotContext, config: &PlotConfig) -> Result<Self, PlotError> {
        let alt_set = config.fonts.resolve(&config.alt_font);
        let (lo, hi) = ctx.input_window(config.x_margin, config.y_margin);
        crate::log::debug!(
            width = ctx.picture_width(),
            height = ctx.picture_height(),
            alt_font = config.alt_font.as_str(),
            alt_set,
            "starting plot"
        );

        let mut out = Emitter::new(sink);
        out.emit_all(&[
            Command::Init { lo, hi },
            Command::Scale,
            Command::AltCharSet(alt_set),
        ])?;
        Ok(Self {
            out,
            ctx,
            font: None,
        })
    }

    pub fn context(&self) -> &PlotContext {
        &self.ctx
    }

    /// The font selected by the last [`set_font`](Self::set_font).
    pub fn font(&self) -> Option<&FontState> {
        self.font.as_ref()
    }

    fn current_font(&self) -> Result<FontState, PlotError> {
        self.font.ok_or(PlotError::FontNotSelected)
    }

    pub fn pen(&mut self, pen: i32) -> Result<(), PlotError> {
        self.out.emit(&Command::Pen(pen))
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> Result<(), PlotError> {
        self.out.emit(&Command::MoveTo(device_point(x, y)))
    }

    pub fn draw_to(&mut self, x: f64, y: f64) -> Result<(), PlotError> {
        self.out.emit(&Command::DrawTo(device_point(x, y)))
    }

    /// Select line style 0 to 5. Other values leave the line type as is.
    pub fn set_dash(&mut self, style: i32) -> Result<(), PlotError> {
        match Dash::from_style(style) {
            Some(dash) => self.out.emit(&Command::LineType(dash)),
            None => {
                crate::log::warn!(style, "ignoring unknown dash style");
                Ok(())
            }
        }
    }

    /// Select character set `set` at `points` and make it the current font.
    pub fn set_font(&mut self, set: i32, points: f64) -> Result<(), PlotError> {
        let font = FontState::new(set, points, &self.ctx);
        crate::log::debug!(
            set = font.index,
            points = font.points,
            height = font.height,
            width = font.width,
            "font selected"
        );
        self.out.emit(&Command::Font {
            set,
            size: font.size_cm,
        })?;
        self.font = Some(font);
        Ok(())
    }

    /// Lay out `text` from a device position without any justification.
    pub fn show_text(
        &mut self,
        text: &str,
        orientation: Orientation,
        base: IVec2,
    ) -> Result<LabelStats, PlotError> {
        let font = self.current_font()?;
        let laid = LabelLayout::new(&self.ctx, &font, orientation, base).layout(text);
        self.out.emit_all(&laid.commands)?;
        Ok(laid.stats)
    }

    /// Write horizontal `text` justified about the normalized point `(x, y)`.
    pub fn text(
        &mut self,
        justification: impl Into<Justification>,
        x: f64,
        y: f64,
        text: &str,
    ) -> Result<LabelStats, PlotError> {
        let justification = justification.into();
        let font = self.current_font()?;
        let at = justification.anchor(DVec2::new(x, y), text, &font, &self.ctx);
        crate::log::debug!(?justification, x = at.x, y = at.y, text, "placing text");
        self.out.emit(&Command::LabelStart {
            at,
            newline: justification.ends_line(),
        })?;
        self.show_text(text, Orientation::Horizontal, at)
    }

    pub fn left_text(&mut self, x: f64, y: f64, text: &str) -> Result<LabelStats, PlotError> {
        self.text(Left, x, y, text)
    }

    /// Centred on `x`, baseline on `y` raised by `offset` character heights.
    pub fn centre_bottom_text(
        &mut self,
        x: f64,
        y: f64,
        offset: f64,
        text: &str,
    ) -> Result<LabelStats, PlotError> {
        self.text(CentreBottom { offset }, x, y, text)
    }

    /// Ending at `x` moved by `offset` points, centred on `y`.
    pub fn right_offset_text(
        &mut self,
        x: f64,
        y: f64,
        offset: f64,
        text: &str,
    ) -> Result<LabelStats, PlotError> {
        self.text(RightOffset { offset }, x, y, text)
    }

    pub fn left_centre_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
    ) -> Result<LabelStats, PlotError> {
        self.text(LeftCentre, x, y, text)
    }

    /// Centred on `x`, hanging below `y` moved by `offset` points.
    pub fn centre_top_text(
        &mut self,
        x: f64,
        y: f64,
        offset: f64,
        text: &str,
    ) -> Result<LabelStats, PlotError> {
        self.text(CentreTop { offset }, x, y, text)
    }

    /// Write `text` running up the Y axis, centred on `y`.
    ///
    /// The title is set half as wide as it is high. Its size is stretched by
    /// the picture aspect ratio while the text is drawn and put back to the
    /// plain title size afterwards.
    pub fn vertical_text(
        &mut self,
        x: f64,
        y: f64,
        placement: &Vertical<'_>,
        text: &str,
    ) -> Result<LabelStats, PlotError> {
        let font = self.current_font()?;
        let at = placement.anchor(DVec2::new(x, y), text, &font, &self.ctx);
        let size = CharSize::title(placement.title_size);
        crate::log::debug!(x = at.x, y = at.y, text, "placing vertical text");

        self.out.emit_all(&[
            Command::CharSize(size.aspect_corrected(&self.ctx)),
            Command::VerticalStart(at),
        ])?;
        let stats = self.show_text(text, Orientation::Vertical, at)?;
        self.out
            .emit_all(&[Command::DirectionReset, Command::CharSize(size)])?;
        Ok(stats)
    }

    /// Finish the plot, returning the flushed sink.
    pub fn end(self) -> Result<W, PlotError> {
        crate::log::debug!("ending plot");
        self.out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plotter() -> Plotter<Vec<u8>> {
        let config = PlotConfig::new().with_picture_size(10.0, 8.0);
        Plotter::new(Vec::new(), &config).unwrap()
    }

    fn output(p: Plotter<Vec<u8>>) -> String {
        String::from_utf8(p.end().unwrap()).unwrap()
    }

    #[test]
    fn text_before_font_is_an_error() {
        let mut p = plotter();
        let err = p.left_text(0.5, 0.5, "x").unwrap_err();
        assert!(matches!(err, PlotError::FontNotSelected));
    }

    #[test]
    fn set_font_twice_is_identical() {
        let mut p = plotter();
        p.set_font(1, 10.0).unwrap();
        let first = *p.font().unwrap();
        p.set_font(1, 10.0).unwrap();
        assert_eq!(*p.font().unwrap(), first);

        let out = output(p);
        let fonts: Vec<_> = out.lines().filter(|l| l.contains("CS1")).collect();
        assert_eq!(fonts.len(), 2);
        assert_eq!(fonts[0], fonts[1]);
    }

    #[test]
    fn font_survives_shifted_text() {
        let mut p = plotter();
        p.set_font(0, 12.0).unwrap();
        let before = *p.font().unwrap();
        p.left_text(0.1, 0.1, "m^{2}s_{-1}").unwrap();
        p.vertical_text(
            0.1,
            0.5,
            &Vertical {
                x_offset: 0.0,
                title_size: 12.0,
                reference: "100",
                reference_size: 10.0,
            },
            "x^2",
        )
        .unwrap();
        assert_eq!(*p.font().unwrap(), before);
    }

    #[test]
    fn vertical_title_sizes_bracket_the_label() {
        let mut p = plotter();
        p.set_font(0, 12.0).unwrap();
        p.vertical_text(
            0.1,
            0.5,
            &Vertical {
                x_offset: 0.0,
                title_size: 12.0,
                reference: "",
                reference_size: 10.0,
            },
            "Y",
        )
        .unwrap();
        let out = output(p);
        let sizes: Vec<_> = out.lines().filter(|l| l.starts_with("PU;SI")).collect();
        assert_eq!(sizes, ["PU;SI0.156, 0.199;", "PU;SI0.125, 0.249;"]);
    }

    #[test]
    fn unknown_dash_emits_nothing() {
        let mut p = plotter();
        let start = output(plotter()).len();
        p.set_dash(9).unwrap();
        p.set_dash(-1).unwrap();
        assert_eq!(output(p).len(), start);
    }

    #[test]
    fn show_text_reports_stats() {
        let mut p = plotter();
        p.set_font(0, 12.0).unwrap();
        let stats = p
            .show_text("a^{bc}", Orientation::Vertical, IVec2::new(100, 100))
            .unwrap();
        assert_eq!(stats, LabelStats { glyphs: 3, advance: 4 });
    }
}
