//! Inline label markup.
//!
//! Label strings may carry three escapes:
//!
//! - `\X` draws `X` from the substitution (Greek) character set
//! - `^X` or `^{...}` raises a run above the baseline
//! - `_X` or `_{...}` lowers a run below the baseline
//!
//! [`Markup`] walks a string as a small state machine and yields
//! [`Segment`]s in visual order. It never fails: a dangling escape or an
//! unterminated group ends the walk, and whatever was collected is still
//! yielded. The same walk backs [`simplify`], so measured widths always agree
//! with what the layout engine places.

use std::str::Chars;

use crate::render::defaults::LABEL_CAPACITY;

/// Character that ends an `LB` label once `DT\;` is in effect
pub const LABEL_TERMINATOR: char = '\\';

/// Direction of a shifted run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Raise,
    Lower,
}

/// One unit of laid-out label content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Ordinary character on the baseline
    Char(char),
    /// Character drawn from the substitution set
    Greek(char),
    /// Run drawn at half height off the baseline
    Shifted { shift: Shift, text: String },
}

impl Segment {
    /// Characters this segment places
    pub fn glyphs(&self) -> usize {
        match self {
            Segment::Char(_) | Segment::Greek(_) => 1,
            Segment::Shifted { text, .. } => text.chars().count(),
        }
    }

    /// Whether the content carries the `\` label terminator, which cuts the
    /// plotted label short.
    pub fn has_terminator(&self) -> bool {
        match self {
            Segment::Char(c) | Segment::Greek(c) => *c == LABEL_TERMINATOR,
            Segment::Shifted { text, .. } => text.contains(LABEL_TERMINATOR),
        }
    }
}

/// Why a walk stopped before the end of its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// A literal or grouped run hit [`LABEL_CAPACITY`]
    Capacity,
    /// The string ended right after `\`, `^` or `_`
    DanglingEscape,
    /// The string ended inside `{...}`
    UnterminatedGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Escape {
    Greek,
    Raise,
    Lower,
}

#[derive(Debug)]
enum State {
    Normal,
    Escape(Escape),
    Group {
        shift: Shift,
        text: String,
        len: usize,
    },
    Done,
}

/// Segment iterator over a marked-up label
#[derive(Debug)]
pub struct Markup<'a> {
    chars: Chars<'a>,
    state: State,
    /// Length of the current run of plain characters
    literal: usize,
    truncation: Option<Truncation>,
}

impl<'a> Markup<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
            state: State::Normal,
            literal: 0,
            truncation: None,
        }
    }

    /// Set once the walk has dropped part of its input.
    pub fn truncation(&self) -> Option<Truncation> {
        self.truncation
    }

    fn truncate(&mut self, why: Truncation) {
        if self.truncation.is_none() {
            crate::log::warn!(?why, "label markup truncated");
            self.truncation = Some(why);
        }
    }
}

impl Iterator for Markup<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            match std::mem::replace(&mut self.state, State::Done) {
                State::Done => return None,
                State::Normal => {
                    let Some(c) = self.chars.next() else {
                        return None;
                    };
                    if self.literal >= LABEL_CAPACITY {
                        self.truncate(Truncation::Capacity);
                        return None;
                    }
                    let escape = match c {
                        '\\' => Escape::Greek,
                        '^' => Escape::Raise,
                        '_' => Escape::Lower,
                        c => {
                            self.state = State::Normal;
                            self.literal += 1;
                            return Some(Segment::Char(c));
                        }
                    };
                    self.state = State::Escape(escape);
                }
                State::Escape(escape) => {
                    let Some(c) = self.chars.next() else {
                        self.truncate(Truncation::DanglingEscape);
                        return None;
                    };
                    self.literal = 0;
                    let shift = match escape {
                        Escape::Greek => {
                            self.state = State::Normal;
                            return Some(Segment::Greek(c));
                        }
                        Escape::Raise => Shift::Raise,
                        Escape::Lower => Shift::Lower,
                    };
                    if c == '{' {
                        self.state = State::Group {
                            shift,
                            text: String::new(),
                            len: 0,
                        };
                    } else {
                        self.state = State::Normal;
                        return Some(Segment::Shifted {
                            shift,
                            text: c.to_string(),
                        });
                    }
                }
                State::Group {
                    shift,
                    mut text,
                    mut len,
                } => match self.chars.next() {
                    None => {
                        self.truncate(Truncation::UnterminatedGroup);
                        return Some(Segment::Shifted { shift, text });
                    }
                    Some('}') => {
                        self.state = State::Normal;
                        return Some(Segment::Shifted { shift, text });
                    }
                    Some(c) => {
                        if len < LABEL_CAPACITY {
                            text.push(c);
                            len += 1;
                        } else {
                            self.truncate(Truncation::Capacity);
                        }
                        self.state = State::Group { shift, text, len };
                    }
                },
            }
        }
    }
}

/// Strip markup from `text`, keeping every character the layout engine
/// would place, in order.
pub fn simplify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in Markup::new(text) {
        match segment {
            Segment::Char(c) | Segment::Greek(c) => out.push(c),
            Segment::Shifted { text, .. } => out.push_str(&text),
        }
    }
    out
}

/// Number of characters `text` lays out: `simplify(text).chars().count()`.
pub fn glyph_count(text: &str) -> usize {
    Markup::new(text).map(|s| s.glyphs()).sum()
}
