//! HPGL command formatting and the output sink.
//!
//! Every command renders to the exact byte sequence the interpreter
//! expects. Positions are plain integers; `SI` sizes are fixed at three
//! decimals. Labels end with the `\` terminator installed by `DT\;`.

use std::fmt;
use std::io::Write;

use glam::IVec2;

use crate::errors::PlotError;
use crate::font::CharSize;

/// Line type for [`Command::LineType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dash {
    Solid,
    Dotted,
    DashDot,
    Dashed,
    DashDotDot,
    LongDashDot,
}

impl Dash {
    /// Map the numeric style used by plotting callers, 0 to 5.
    pub fn from_style(style: i32) -> Option<Self> {
        Some(match style {
            0 => Dash::Solid,
            1 => Dash::Dotted,
            2 => Dash::DashDot,
            3 => Dash::Dashed,
            4 => Dash::DashDotDot,
            5 => Dash::LongDashDot,
            _ => return None,
        })
    }

    fn command(self) -> &'static str {
        match self {
            Dash::Solid => "LT;\n",
            Dash::Dotted => "LT1,2;\n",
            Dash::DashDot => "LT4,3;\n",
            Dash::Dashed => "LT2,3;\n",
            Dash::DashDotDot => "LT6,3;\n",
            Dash::LongDashDot => "LT5,3;\n",
        }
    }
}

/// One HPGL instruction group as written to the plot stream
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `IN; IP..;` reset and scaling points
    Init { lo: IVec2, hi: IVec2 },
    /// `SC` user scale plus the label terminator
    Scale,
    /// `CA` alternate character set
    AltCharSet(i32),
    /// `SP` pen select
    Pen(i32),
    /// Pen-up absolute move, one per line
    MoveTo(IVec2),
    /// Pen-down absolute draw, one per line
    DrawTo(IVec2),
    LineType(Dash),
    /// `CS` character set with its size
    Font { set: i32, size: CharSize },
    /// Stand-alone `SI` character size
    CharSize(CharSize),
    /// Pen-up move to the start of a label
    LabelStart { at: IVec2, newline: bool },
    /// Pen-up move to the start of a vertical label, switching `DR` to Y
    VerticalStart(IVec2),
    /// `DR;` restores horizontal label direction
    DirectionReset,
    /// Label text on the current baseline.
    ///
    /// Text is written as is. A `\` in it is the label terminator set by
    /// `DT\;`, so the device ends the label there and reads the rest as
    /// commands.
    Label(String),
    /// Single character from the alternate set
    Greek(char),
    /// Pen-up move within a label
    Reposition(IVec2),
    /// Half-height run, restoring `size` afterwards
    Shifted { size: CharSize, text: String },
    Newline,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Init { lo, hi } => {
                writeln!(f, "IN; IP{},{},{},{};", lo.x, lo.y, hi.x, hi.y)
            }
            Command::Scale => f.write_str("SC0,10000,0,10000;DT\\;\n"),
            Command::AltCharSet(set) => writeln!(f, "CA{set};SS;"),
            Command::Pen(pen) => writeln!(f, "SP;PU;SP{pen};"),
            Command::MoveTo(p) => writeln!(f, "PU;PA{}, {};", p.x, p.y),
            Command::DrawTo(p) => writeln!(f, "PD;PA{}, {};", p.x, p.y),
            Command::LineType(dash) => f.write_str(dash.command()),
            Command::Font { set, size } => writeln!(
                f,
                "PU;CS{set};SS;SI{:5.3}, {:5.3};",
                size.width, size.height
            ),
            Command::CharSize(size) => {
                writeln!(f, "PU;SI{:5.3}, {:5.3};", size.width, size.height)
            }
            Command::LabelStart { at, newline } => {
                write!(f, "PU;PA{}, {};", at.x, at.y)?;
                if *newline {
                    f.write_str("\n")?;
                }
                Ok(())
            }
            Command::VerticalStart(p) => write!(f, "PU;PA{},{};DR0,1;", p.x, p.y),
            Command::DirectionReset => f.write_str("DR;\n"),
            Command::Label(text) => write!(f, "LB{text}\\;"),
            Command::Greek(c) => write!(f, "SA;LB{c}\\;SS;"),
            Command::Reposition(p) => write!(f, "PU;PA{},{};", p.x, p.y),
            Command::Shifted { size, text } => {
                let half = size.halved();
                write!(
                    f,
                    "PU;SI{:.3},{:.3};LB{text}\\;PU;SI{:.3},{:.3};",
                    half.width, half.height, size.width, size.height
                )
            }
            Command::Newline => f.write_str("\n"),
        }
    }
}

/// Writes commands to the plot stream in issue order.
#[derive(Debug)]
pub struct Emitter<W: Write> {
    sink: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Format `command` in full, then write it with a single call.
    pub fn emit(&mut self, command: &Command) -> Result<(), PlotError> {
        let text = command.to_string();
        self.sink.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn emit_all<'c>(
        &mut self,
        commands: impl IntoIterator<Item = &'c Command>,
    ) -> Result<(), PlotError> {
        commands.into_iter().try_for_each(|c| self.emit(c))
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> Result<W, PlotError> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
