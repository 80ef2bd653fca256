//! Strongly-typed primitives shared by the pipeline stages.

use std::fmt;
use std::str::FromStr;

use glam::I64Vec2;

/// Absolute drawing position in canvas units.
pub type Point = I64Vec2;

/// Shorthand constructor for a [`Point`].
#[inline]
pub const fn pt(x: i64, y: i64) -> Point {
    I64Vec2::new(x, y)
}

/// How a numeric path-data token is turned into an integer coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Add one half, then truncate toward zero.
    ///
    /// Rounds non-negative tokens half-up, but pulls negative tokens toward
    /// zero: `-2.7` becomes `-2` and `-0.6` becomes `0`. Kept as the default
    /// so output stays byte-compatible with existing generated canvas code.
    #[default]
    Legacy,
    /// Round half away from zero: `-2.7` becomes `-3`, `2.5` becomes `3`.
    HalfAwayFromZero,
}

impl Rounding {
    /// Round a parsed token. Values outside the `i64` range saturate.
    #[inline]
    pub fn apply(self, value: f64) -> i64 {
        let rounded = match self {
            Rounding::Legacy => (value + 0.5).trunc(),
            Rounding::HalfAwayFromZero => value.round(),
        };
        rounded as i64
    }
}

impl FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Rounding::Legacy),
            "half-away-from-zero" | "half_away_from_zero" | "fixed" => {
                Ok(Rounding::HalfAwayFromZero)
            }
            other => Err(format!("unknown rounding mode: {other}")),
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounding::Legacy => write!(f, "legacy"),
            Rounding::HalfAwayFromZero => write!(f, "half-away-from-zero"),
        }
    }
}

/// Why a `viewBox` value was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ViewBoxError {
    /// Not exactly four fields
    FieldCount(usize),
    /// A field is not a finite number
    NotANumber(String),
    /// Width or height is below zero
    Negative(&'static str),
}

impl fmt::Display for ViewBoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewBoxError::FieldCount(n) => write!(f, "expected 4 fields, found {n}"),
            ViewBoxError::NotANumber(field) => write!(f, "`{field}` is not a number"),
            ViewBoxError::Negative(which) => write!(f, "{which} is negative"),
        }
    }
}

impl std::error::Error for ViewBoxError {}

/// Document size taken from the root `viewBox`.
///
/// Width and height keep the exact field text so the header repeats it
/// verbatim (`0.5` stays `0.5`, `010` stays `010`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: String,
    pub height: String,
}

impl Size {
    /// Parse `min-x min-y width height`. Fields may be separated by
    /// whitespace and/or commas.
    pub fn from_view_box(view_box: &str) -> Result<Size, ViewBoxError> {
        let fields: Vec<&str> = view_box
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty())
            .collect();

        if fields.len() != 4 {
            return Err(ViewBoxError::FieldCount(fields.len()));
        }

        let mut parsed = [0.0f64; 4];
        for (slot, field) in parsed.iter_mut().zip(&fields) {
            *slot = field
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ViewBoxError::NotANumber(field.to_string()))?;
        }

        if parsed[2] < 0.0 {
            return Err(ViewBoxError::Negative("width"));
        }
        if parsed[3] < 0.0 {
            return Err(ViewBoxError::Negative("height"));
        }

        Ok(Size {
            width: fields[2].to_string(),
            height: fields[3].to_string(),
        })
    }
}
