//! Convert SVG path documents into imperative 2D canvas calls.
//!
//! ```
//! let svg = r##"<svg viewBox="0 0 10 10"><path fill="#000" d="M0 0 L10 0 L10 10 Z"/></svg>"##;
//! let code = svg2canvas::svg2canvas(svg).unwrap();
//! assert_eq!(
//!     code,
//!     "new WeCanvas({ width: 10, height: 10 })\n\
//!      .save()\n.fillStyle('#000')\n.moveTo(0,0)\n.lineTo(10,0)\n.lineTo(10,10)\n\
//!      .closePath()\n.fill()\n.restore()"
//! );
//! ```
//!
//! The pipeline is: markup tree → [`Document`] → per shape
//! [`parse::tokenize`] → [`normalize::normalize`] →
//! [`codegen::shape_instructions`] → [`codegen::assemble`].

pub mod ast;
pub mod codegen;
pub mod document;
pub mod errors;
pub mod log;
pub mod normalize;
pub mod options;
pub mod parse;
pub mod types;

use pest_derive::Parser;

pub use codegen::Instruction;
pub use document::{Document, MarkupNode, Shape};
pub use errors::{ConvertError, DocumentError, PathDataError};
pub use options::ConvertOptions;
pub use types::{Rounding, Size};

#[derive(Parser)]
#[grammar = "path_data.pest"]
pub struct PathDataParser;

/// Convert an SVG document to canvas code with default options.
///
/// Returns the generated code on success, or an error with diagnostics.
pub fn svg2canvas(source: &str) -> Result<String, miette::Report> {
    Ok(convert(source, &ConvertOptions::default())?)
}

/// Convert an SVG document to canvas code
pub fn convert(source: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let ctx = errors::SourceContext::new(options.source_name.as_str(), source);
    let document = Document::parse(&ctx)?;
    convert_document(&document, options)
}

/// Generate canvas code for an already extracted document.
///
/// Fails on the first shape whose path data is malformed.
pub fn convert_document(document: &Document, options: &ConvertOptions) -> Result<String, ConvertError> {
    let mut shapes = Vec::with_capacity(document.shapes.len());
    for (index, shape) in document.shapes.iter().enumerate() {
        shapes.push(
            generate_shape(shape, options)
                .map_err(|source| ConvertError::Shape { index, source })?,
        );
    }
    Ok(codegen::assemble(&document.size, shapes, options))
}

/// Tokenize, normalize and generate one shape
pub fn generate_shape(
    shape: &Shape,
    options: &ConvertOptions,
) -> Result<Vec<Instruction>, PathDataError> {
    let raw = parse::tokenize(&shape.path_data, options.rounding)?;
    let commands = normalize::normalize(&raw, &shape.path_data)?;
    log::debug!(
        raw = raw.len(),
        drawn = commands.len(),
        "normalized shape"
    );
    Ok(codegen::shape_instructions(shape, &commands))
}
