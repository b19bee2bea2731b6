//! Default plot settings (picture dimensions in inches)

/// Picture width
pub const PICTURE_WIDTH: f64 = 10.0;
/// Picture height
pub const PICTURE_HEIGHT: f64 = 8.0;
/// Picture offset from the device origin
pub const X_OFFSET: f64 = 0.0;
pub const Y_OFFSET: f64 = 0.0;
/// Unprintable device margins
pub const X_MARGIN: f64 = 0.0;
pub const Y_MARGIN: f64 = 0.0;
/// Font used for substitution (Greek) glyphs
pub const ALT_FONT: &str = "Symbol";

/// Plotter units per inch used for the `IP` scaling points
pub const IP_UNITS_PER_INCH: f64 = 1024.0;

/// Longest run of characters a single `LB` command may carry
pub const LABEL_CAPACITY: usize = 159;

/// Empirical divisor taking a point size to a plotted character height
pub const HEIGHT_FUDGE: f64 = 1.7;
/// Character height over character width, in centimetres
pub const HEIGHT_TO_WIDTH: f64 = 2.4;
/// Height over width for vertical titles
pub const TITLE_HEIGHT_TO_WIDTH: f64 = 2.0;
/// Empirical advance of one character as a fraction of its height
pub const ADVANCE_RATIO: f64 = 0.6154;
