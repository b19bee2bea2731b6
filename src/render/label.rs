//! Label layout: turns marked-up text into positioned label commands.
//!
//! Plain characters collect into a literal run that is flushed as one `LB`
//! before anything that moves the pen, so commands always come out in visual
//! order. Raised and lowered runs are drawn at half height from a point off
//! the baseline, after which the pen returns to the baseline at the running
//! character count.

use glam::IVec2;

use crate::font::FontState;
use crate::markup::{Markup, Segment, Shift};
use crate::types::run_extent;

use super::context::PlotContext;
use super::emit::Command;

/// Direction text runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Counts from one laid-out label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelStats {
    /// Characters placed
    pub glyphs: usize,
    /// Final character advance along the text axis
    pub advance: usize,
}

/// Commands for one label plus its counts
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOut {
    pub commands: Vec<Command>,
    pub stats: LabelStats,
}

/// Transient state of a single layout pass
#[derive(Debug)]
struct MarkupRun {
    literal: String,
    advance: usize,
    first_shift: bool,
}

impl MarkupRun {
    fn new() -> Self {
        Self {
            literal: String::new(),
            advance: 0,
            first_shift: true,
        }
    }

    fn flush(&mut self, commands: &mut Vec<Command>) {
        if !self.literal.is_empty() {
            commands.push(Command::Label(std::mem::take(&mut self.literal)));
        }
    }
}

/// Lays out labels from a fixed start point with the current font.
#[derive(Debug, Clone, Copy)]
pub struct LabelLayout<'a> {
    ctx: &'a PlotContext,
    font: &'a FontState,
    orientation: Orientation,
    base: IVec2,
}

impl<'a> LabelLayout<'a> {
    pub fn new(
        ctx: &'a PlotContext,
        font: &'a FontState,
        orientation: Orientation,
        base: IVec2,
    ) -> Self {
        Self {
            ctx,
            font,
            orientation,
            base,
        }
    }

    fn vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    /// Position along the text axis after `advance` characters.
    fn along(&self, advance: usize) -> i32 {
        match self.orientation {
            Orientation::Horizontal => self.base.x + run_extent(advance, self.font.width),
            Orientation::Vertical => {
                let step = self.ctx.picture_width() * advance as f64 * f64::from(self.font.width)
                    / self.ctx.picture_height();
                (f64::from(self.base.y) + step) as i32
            }
        }
    }

    fn baseline(&self, advance: usize) -> IVec2 {
        match self.orientation {
            Orientation::Horizontal => IVec2::new(self.along(advance), self.base.y),
            Orientation::Vertical => IVec2::new(self.base.x, self.along(advance)),
        }
    }

    fn shifted(&self, shift: Shift, advance: usize) -> IVec2 {
        let h = self.font.height;
        match (self.orientation, shift) {
            (Orientation::Horizontal, Shift::Raise) => {
                IVec2::new(self.along(advance), self.base.y + h / 2)
            }
            (Orientation::Horizontal, Shift::Lower) => {
                IVec2::new(self.along(advance), self.base.y - h / 4)
            }
            (Orientation::Vertical, Shift::Raise) => {
                IVec2::new(self.base.x - h / 2, self.along(advance))
            }
            (Orientation::Vertical, Shift::Lower) => {
                IVec2::new(self.base.x + h / 4, self.along(advance))
            }
        }
    }

    pub fn layout(&self, text: &str) -> LaidOut {
        let mut run = MarkupRun::new();
        let mut commands = Vec::new();
        let mut glyphs = 0;

        for segment in Markup::new(text) {
            glyphs += segment.glyphs();
            if segment.has_terminator() {
                crate::log::warn!(text, ?segment, "label terminator in label text");
            }
            match segment {
                Segment::Char(c) => {
                    run.literal.push(c);
                    run.advance += 1;
                }
                Segment::Greek(c) => {
                    run.flush(&mut commands);
                    commands.push(Command::Greek(c));
                    run.advance += 1;
                }
                Segment::Shifted { shift, text } => {
                    run.flush(&mut commands);
                    // Vertical labels lead their first shifted run by one
                    // character.
                    if run.first_shift {
                        if self.vertical() {
                            run.advance += 1;
                        }
                        run.first_shift = false;
                    }
                    commands.push(Command::Reposition(self.shifted(shift, run.advance)));
                    run.advance += text.chars().count();
                    if !text.is_empty() {
                        commands.push(Command::Shifted {
                            size: self.font.label_size(self.vertical(), self.ctx),
                            text,
                        });
                    }
                    commands.push(Command::Reposition(self.baseline(run.advance)));
                }
            }
        }
        run.flush(&mut commands);
        if !text.is_empty() {
            commands.push(Command::Newline);
        }

        crate::log::debug!(
            text,
            glyphs,
            advance = run.advance,
            commands = commands.len(),
            "laid out label"
        );

        LaidOut {
            commands,
            stats: LabelStats {
                glyphs,
                advance: run.advance,
            },
        }
    }
}
