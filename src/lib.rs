//! HPGL plot output with inline label markup.
//!
//! A [`Plotter`] writes an HPGL command stream for a picture whose plot
//! space runs from 0.0 to 1.0 on both axes. Labels may raise (`^`) or lower
//! (`_`) single characters or `{...}` groups, and draw single characters
//! from a substitution font with `\`:
//!
//! ```no_run
//! use hpglabel::{PlotConfig, Plotter};
//!
//! # fn main() -> Result<(), hpglabel::PlotError> {
//! let config = PlotConfig::new().with_picture_size(10.0, 8.0);
//! let mut plot = Plotter::create("formula.hpgl", &config)?;
//! plot.set_font(0, 12.0)?;
//! plot.left_text(0.5, 0.5, "H\\a_2O")?;
//! plot.end()?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod font;
mod log;
pub mod markup;
pub mod render;
pub mod types;

pub use errors::PlotError;
pub use font::{CharSize, FontState, FontTable};
pub use markup::{Markup, Segment, Shift, simplify};
pub use render::{
    Command, Dash, Justification, LabelStats, Orientation, PlotConfig, PlotContext, Plotter,
    Vertical,
};
