//! Path-data command types
//!
//! [`RawCommand`] is what the tokenizer produces: a marker and its numbers,
//! still relative or absolute as written. [`NormalizedCommand`] is what the
//! normalizer produces: absolute, integer, and limited to what the code
//! generator can draw.

use std::fmt;
use std::ops::Range;

use crate::types::Point;

/// Whether a command's coordinates are absolute or cursor-relative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Absolute, // uppercase marker
    Relative, // lowercase marker
}

/// The command family selected by a marker letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    Arc,
    ClosePath,
}

impl CommandKind {
    /// Whether the normalizer turns this command into a drawing call.
    /// Smooth curves, quadratic curves and arcs are recognized but dropped.
    pub fn is_drawable(self) -> bool {
        !matches!(
            self,
            CommandKind::SmoothCurveTo
                | CommandKind::QuadraticCurveTo
                | CommandKind::SmoothQuadraticCurveTo
                | CommandKind::Arc
        )
    }

    /// Number of values one instance of this command consumes
    pub fn arity(self) -> usize {
        match self {
            CommandKind::ClosePath => 0,
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadraticCurveTo => 2,
            CommandKind::SmoothCurveTo | CommandKind::QuadraticCurveTo => 4,
            CommandKind::CurveTo => 6,
            CommandKind::Arc => 7,
        }
    }
}

/// A path-data marker letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub kind: CommandKind,
    pub position: Position,
}

impl Marker {
    /// Map a letter to its marker, or `None` if it is not a command letter
    pub fn from_char(c: char) -> Option<Marker> {
        let kind = match c.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::HorizontalLineTo,
            'V' => CommandKind::VerticalLineTo,
            'C' => CommandKind::CurveTo,
            'S' => CommandKind::SmoothCurveTo,
            'Q' => CommandKind::QuadraticCurveTo,
            'T' => CommandKind::SmoothQuadraticCurveTo,
            'A' => CommandKind::Arc,
            'Z' => CommandKind::ClosePath,
            _ => return None,
        };
        let position = if c.is_ascii_uppercase() {
            Position::Absolute
        } else {
            Position::Relative
        };
        Some(Marker { kind, position })
    }

    /// The letter this marker is written as
    pub fn as_char(self) -> char {
        let upper = match self.kind {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLineTo => 'H',
            CommandKind::VerticalLineTo => 'V',
            CommandKind::CurveTo => 'C',
            CommandKind::SmoothCurveTo => 'S',
            CommandKind::QuadraticCurveTo => 'Q',
            CommandKind::SmoothQuadraticCurveTo => 'T',
            CommandKind::Arc => 'A',
            CommandKind::ClosePath => 'Z',
        };
        match self.position {
            Position::Absolute => upper,
            Position::Relative => upper.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One marker and the numbers written after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    pub marker: Marker,
    pub values: Vec<i64>,
    /// Byte range of the marker and its payload in the path data
    pub span: Range<usize>,
}

/// A drawing command in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizedCommand {
    ClosePath,
    MoveTo(Point),
    LineTo(Point),
    CurveTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
}
