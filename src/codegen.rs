//! Canvas call generation
//!
//! Each shape becomes a `save()` … `restore()` block; the document is a
//! constructor header followed by every block, one call per line.

use std::fmt;

use crate::ast::NormalizedCommand;
use crate::document::Shape;
use crate::options::ConvertOptions;
use crate::types::{Point, Size};

/// One emitted line of canvas code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `.method(arg,arg,...)`
    Call {
        method: &'static str,
        args: Vec<String>,
    },
    /// Raw text written as `.text.`
    Passthrough(String),
}

impl Instruction {
    pub fn call(method: &'static str) -> Self {
        Instruction::Call {
            method,
            args: Vec::new(),
        }
    }

    /// Call with a single-quoted string argument: `.fillStyle('#fff')`
    pub fn quoted(method: &'static str, value: &str) -> Self {
        Instruction::Call {
            method,
            args: vec![format!("'{value}'")],
        }
    }

    /// Call with integer point arguments, flattened `x,y` per point
    pub fn points(method: &'static str, points: &[Point]) -> Self {
        let args = points
            .iter()
            .flat_map(|p| [p.x.to_string(), p.y.to_string()])
            .collect();
        Instruction::Call { method, args }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Call { method, args } => write!(f, ".{}({})", method, args.join(",")),
            Instruction::Passthrough(raw) => write!(f, ".{raw}."),
        }
    }
}

impl From<NormalizedCommand> for Instruction {
    fn from(command: NormalizedCommand) -> Self {
        match command {
            NormalizedCommand::ClosePath => Instruction::call("closePath"),
            NormalizedCommand::MoveTo(p) => Instruction::points("moveTo", &[p]),
            NormalizedCommand::LineTo(p) => Instruction::points("lineTo", &[p]),
            NormalizedCommand::CurveTo { ctrl1, ctrl2, to } => {
                Instruction::points("bezierCurveTo", &[ctrl1, ctrl2, to])
            }
        }
    }
}

/// Instructions for one shape, in fixed order: save, transform, styles,
/// path commands, fill/stroke, restore.
pub fn shape_instructions(shape: &Shape, commands: &[NormalizedCommand]) -> Vec<Instruction> {
    let fill = shape.active_fill();
    let stroke = shape.active_stroke();

    let mut out = Vec::with_capacity(commands.len() + 7);
    out.push(Instruction::call("save"));

    if let Some(transform) = &shape.transform {
        // Opaque: written exactly as found in the document
        out.push(Instruction::Passthrough(transform.clone()));
    }
    if let Some(fill) = fill {
        out.push(Instruction::quoted("fillStyle", fill));
    }
    if let Some(stroke) = stroke {
        out.push(Instruction::quoted("strokeStyle", stroke));
        if let Some(width) = &shape.stroke_width {
            out.push(Instruction::quoted("lineWidth", width));
        }
    }

    out.extend(commands.iter().copied().map(Instruction::from));

    if fill.is_some() {
        out.push(Instruction::call("fill"));
    }
    if stroke.is_some() {
        out.push(Instruction::call("stroke"));
    }

    out.push(Instruction::call("restore"));
    out
}

/// The constructor line that opens every generated document
pub fn header(size: &Size, options: &ConvertOptions) -> String {
    format!(
        "new {}({{ width: {}, height: {} }})",
        options.canvas_class, size.width, size.height
    )
}

/// Join the header and every shape's instructions into the final text
pub fn assemble<I>(size: &Size, shapes: I, options: &ConvertOptions) -> String
where
    I: IntoIterator<Item = Vec<Instruction>>,
{
    let body: Vec<String> = shapes
        .into_iter()
        .flatten()
        .map(|instruction| instruction.to_string())
        .collect();

    let mut output = header(size, options);
    output.push('\n');
    output.push_str(&body.join("\n"));
    output
}
