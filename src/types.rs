//! Numeric primitives shared by the plot context and the font tracker.
//!
//! Plot space is normalized: 0.0 to 1.0 on each axis maps onto the device
//! scale of 0 to [`DEVICE_SCALE`] units set up by the `SC` command.

use std::fmt;

use glam::IVec2;

/// Device units per normalized plot unit
pub const DEVICE_SCALE: f64 = 10000.0;

/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Centimetres per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinite values
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject anything that is not a finite, strictly positive value
#[inline]
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Convert a normalized coordinate to device units: `round(v * 10000)`.
#[inline]
pub fn to_device(v: f64) -> i32 {
    (v * DEVICE_SCALE).round() as i32
}

/// Convert a normalized point to device units.
#[inline]
pub fn device_point(x: f64, y: f64) -> IVec2 {
    IVec2::new(to_device(x), to_device(y))
}

/// Character count times a per-character extent, as a device offset.
#[inline]
pub fn run_extent(chars: usize, per_char: i32) -> i32 {
    i32::try_from(chars).unwrap_or(i32::MAX).saturating_mul(per_char)
}
