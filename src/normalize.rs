//! Turn raw commands into absolute drawing commands.
//!
//! [`Cursor`] is the only state: the current absolute position. It starts at
//! the origin for every shape and returns there after each close-path.
//!
//! | marker | cursor update                         | emits              |
//! |--------|---------------------------------------|--------------------|
//! | `Z` `z`| origin                                | `ClosePath`        |
//! | `M`    | `(v0, v1)`                            | `MoveTo(cursor)`   |
//! | `m`    | `+ (v0, v1)`                          | `MoveTo(cursor)`   |
//! | `L`    | `(v0, v1)`                            | `LineTo(cursor)`   |
//! | `l`    | `+ (v0, v1)`                          | `LineTo(cursor)`   |
//! | `H` `h`| x only                                | `LineTo(cursor)`   |
//! | `V` `v`| y only                                | `LineTo(cursor)`   |
//! | `C` `c`| end point, controls via `(v0..v3)`    | `CurveTo`          |
//! | other  | unchanged                             | nothing            |
//!
//! Relative coordinates add to the cursor as it was *before* the command, so
//! both control points of a `c` are offsets from the segment start.

use crate::ast::{CommandKind, NormalizedCommand, Position, RawCommand};
use crate::errors::PathDataError;
use crate::log::warn;
use crate::parse::path_source;
use crate::types::{Point, pt};

/// Current drawing position for one shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    position: Point,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Resolve a coordinate pair against the cursor
    fn resolve(&self, position: Position, x: i64, y: i64) -> Point {
        match position {
            Position::Absolute => pt(x, y),
            Position::Relative => self.position.saturating_add(pt(x, y)),
        }
    }

    /// Apply one raw command.
    ///
    /// Returns `Ok(None)` for markers that have no drawing effect (smooth and
    /// quadratic curves, arcs). `data` is the full path data, used only to
    /// label errors.
    pub fn step(
        &mut self,
        command: &RawCommand,
        data: &str,
    ) -> Result<Option<NormalizedCommand>, PathDataError> {
        let marker = command.marker;
        if !marker.kind.is_drawable() {
            warn!(marker = %marker, "unsupported command dropped");
            return Ok(None);
        }

        let required = marker.kind.arity();
        let v = command.values.as_slice();

        if v.len() < required {
            return Err(PathDataError::MissingValues {
                marker: marker.as_char(),
                required,
                found: v.len(),
                src: path_source(data),
                span: (command.span.start, command.span.len()).into(),
            });
        }
        if v.len() > required {
            warn!(
                marker = %marker,
                required,
                found = v.len(),
                "ignoring surplus values"
            );
        }

        let emitted = match marker.kind {
            CommandKind::ClosePath => {
                self.position = Point::ZERO;
                NormalizedCommand::ClosePath
            }
            CommandKind::MoveTo => {
                self.position = self.resolve(marker.position, v[0], v[1]);
                NormalizedCommand::MoveTo(self.position)
            }
            CommandKind::LineTo => {
                self.position = self.resolve(marker.position, v[0], v[1]);
                NormalizedCommand::LineTo(self.position)
            }
            CommandKind::HorizontalLineTo => {
                self.position.x = match marker.position {
                    Position::Absolute => v[0],
                    Position::Relative => self.position.x.saturating_add(v[0]),
                };
                NormalizedCommand::LineTo(self.position)
            }
            CommandKind::VerticalLineTo => {
                self.position.y = match marker.position {
                    Position::Absolute => v[0],
                    Position::Relative => self.position.y.saturating_add(v[0]),
                };
                NormalizedCommand::LineTo(self.position)
            }
            CommandKind::CurveTo => {
                let ctrl1 = self.resolve(marker.position, v[0], v[1]);
                let ctrl2 = self.resolve(marker.position, v[2], v[3]);
                self.position = self.resolve(marker.position, v[4], v[5]);
                NormalizedCommand::CurveTo {
                    ctrl1,
                    ctrl2,
                    to: self.position,
                }
            }
            CommandKind::SmoothCurveTo
            | CommandKind::QuadraticCurveTo
            | CommandKind::SmoothQuadraticCurveTo
            | CommandKind::Arc => return Ok(None),
        };

        Ok(Some(emitted))
    }
}

/// Normalize one shape's raw commands with a fresh cursor
pub fn normalize(
    commands: &[RawCommand],
    data: &str,
) -> Result<Vec<NormalizedCommand>, PathDataError> {
    let mut cursor = Cursor::new();
    let mut out = Vec::with_capacity(commands.len());
    for command in commands {
        if let Some(normalized) = cursor.step(command, data)? {
            out.push(normalized);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::tokenize;
    use crate::types::Rounding;

    fn run(data: &str) -> Vec<NormalizedCommand> {
        let raw = tokenize(data, Rounding::Legacy).unwrap();
        normalize(&raw, data).unwrap()
    }

    use NormalizedCommand::*;

    #[test]
    fn relative_lines_accumulate_and_close_resets() {
        let data = "M 10 10 l 5 0 l 0 5 z";
        let raw = tokenize(data, Rounding::Legacy).unwrap();
        let mut cursor = Cursor::new();
        let mut emitted = Vec::new();
        for command in &raw {
            emitted.extend(cursor.step(command, data).unwrap());
        }
        assert_eq!(
            emitted,
            vec![
                MoveTo(pt(10, 10)),
                LineTo(pt(15, 10)),
                LineTo(pt(15, 15)),
                ClosePath
            ]
        );
        assert_eq!(cursor.position(), pt(0, 0));
    }

    #[test]
    fn relative_and_absolute_agree() {
        assert_eq!(run("M 10 10 l 5 5"), run("M 10 10 L 15 15"));
        assert_eq!(run("M 10 10 l 5 5"), vec![MoveTo(pt(10, 10)), LineTo(pt(15, 15))]);
    }

    #[test]
    fn same_input_same_output() {
        let data = "m 3 4 c 1 1 2 2 3 3 h 4 v -2 z l 1 1";
        let raw = tokenize(data, Rounding::Legacy).unwrap();
        assert_eq!(normalize(&raw, data).unwrap(), normalize(&raw, data).unwrap());
    }

    #[test]
    fn horizontal_and_vertical() {
        assert_eq!(
            run("M 1 2 h 3 v 4 H 0 V 0"),
            vec![
                MoveTo(pt(1, 2)),
                LineTo(pt(4, 2)),
                LineTo(pt(4, 6)),
                LineTo(pt(0, 6)),
                LineTo(pt(0, 0)),
            ]
        );
    }

    #[test]
    fn relative_curve_offsets_from_segment_start() {
        assert_eq!(
            run("M 10 10 c 1 2 3 4 5 6"),
            vec![
                MoveTo(pt(10, 10)),
                CurveTo {
                    ctrl1: pt(11, 12),
                    ctrl2: pt(13, 14),
                    to: pt(15, 16),
                },
            ]
        );
    }

    #[test]
    fn absolute_curve() {
        assert_eq!(
            run("M 0 0 C 1 2 3 4 5 6"),
            vec![
                MoveTo(pt(0, 0)),
                CurveTo {
                    ctrl1: pt(1, 2),
                    ctrl2: pt(3, 4),
                    to: pt(5, 6),
                },
            ]
        );
    }

    #[test]
    fn relative_move_after_close_starts_from_origin() {
        assert_eq!(
            run("M 10 10 Z m 2 3"),
            vec![MoveTo(pt(10, 10)), ClosePath, MoveTo(pt(2, 3))]
        );
    }

    #[test]
    fn unsupported_markers_are_dropped() {
        assert_eq!(run("M0 0 Q 5 5 10 10"), vec![MoveTo(pt(0, 0))]);
        assert_eq!(
            run("M0 0 S 1 1 2 2 T 3 3 A 1 1 0 0 1 4 4 L 7 7"),
            vec![MoveTo(pt(0, 0)), LineTo(pt(7, 7))]
        );
    }

    #[test]
    fn unsupported_markers_do_not_move_the_cursor() {
        assert_eq!(
            run("M 1 1 q 5 5 10 10 l 1 0"),
            vec![MoveTo(pt(1, 1)), LineTo(pt(2, 1))]
        );
    }

    #[test]
    fn surplus_values_are_ignored() {
        assert_eq!(run("M 1 2 3 4"), vec![MoveTo(pt(1, 2))]);
    }

    #[test]
    fn short_payload_is_an_error() {
        let data = "M 0 0 l 5";
        let raw = tokenize(data, Rounding::Legacy).unwrap();
        let err = normalize(&raw, data).unwrap_err();
        match err {
            PathDataError::MissingValues {
                marker,
                required,
                found,
                span,
                ..
            } => {
                assert_eq!(marker, 'l');
                assert_eq!(required, 2);
                assert_eq!(found, 1);
                assert_eq!(span.offset(), 6);
                assert_eq!(span.len(), 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn short_payload_on_unsupported_marker_is_still_dropped() {
        assert_eq!(run("M 0 0 Q 1 L 2 2"), vec![MoveTo(pt(0, 0)), LineTo(pt(2, 2))]);
    }

    #[test]
    fn cursor_saturates() {
        let data = "M 9223372036854775807 0 l 10 0";
        assert_eq!(
            run(data),
            vec![MoveTo(pt(i64::MAX, 0)), LineTo(pt(i64::MAX, 0))]
        );
    }
}
