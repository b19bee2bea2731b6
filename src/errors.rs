//! Error types for plot sessions
//!
//! Only opening the sink and writing to it can fail at runtime. Malformed
//! label markup is never an error: the layout engine truncates it.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Picture axis named in configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors raised by a [`Plotter`](crate::Plotter) session
#[derive(Error, Diagnostic, Debug)]
pub enum PlotError {
    #[error("cannot open plot file {}", .path.display())]
    #[diagnostic(code(hpglabel::session::open))]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed writing to plot output")]
    #[diagnostic(code(hpglabel::session::write))]
    Write(#[from] io::Error),

    #[error("invalid {axis} picture size {value}: {reason}")]
    #[diagnostic(
        code(hpglabel::config::picture_size),
        help("picture dimensions are in inches and must be finite and positive")
    )]
    InvalidPictureSize {
        axis: Axis,
        value: f64,
        reason: NumericError,
    },

    #[error("invalid {axis} picture offset {value}: {reason}")]
    #[diagnostic(code(hpglabel::config::picture_offset))]
    InvalidOffset {
        axis: Axis,
        value: f64,
        reason: NumericError,
    },

    #[error("no font selected")]
    #[diagnostic(
        code(hpglabel::text::no_font),
        help("call `set_font` before writing any text")
    )]
    FontNotSelected,
}
