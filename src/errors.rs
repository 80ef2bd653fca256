//! Error types with rich diagnostics using miette
//!
//! Document errors label the offending element in the input markup; path
//! data errors label the offending command inside its `d` attribute.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::types::ViewBoxError;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Byte offset of a 1-based row/column position, clamped to the source
    pub fn offset_of(&self, row: u32, col: u32) -> usize {
        let mut offset = 0;
        for (i, line) in self.source.split_inclusive('\n').enumerate() {
            if i + 1 == row as usize {
                let col_bytes: usize = line
                    .chars()
                    .take(col.saturating_sub(1) as usize)
                    .map(char::len_utf8)
                    .sum();
                return offset + col_bytes;
            }
            offset += line.len();
        }
        self.source.len()
    }
}

// ============================================================================
// Document Errors
// ============================================================================

/// The input could not be read as a document (`MalformedDocument`)
#[derive(Error, Diagnostic, Debug)]
pub enum DocumentError {
    #[error("malformed markup")]
    #[diagnostic(code(svg2canvas::document::markup))]
    Markup {
        #[source]
        source: roxmltree::Error,
        #[source_code]
        src: NamedSource<String>,
        #[label("parsing stopped here")]
        span: SourceSpan,
    },

    #[error("root element has no `viewBox`")]
    #[diagnostic(
        code(svg2canvas::document::missing_view_box),
        help("add a size declaration such as viewBox=\"0 0 24 24\"")
    )]
    MissingViewBox {
        #[source_code]
        src: NamedSource<String>,
        #[label("this element")]
        span: SourceSpan,
    },

    #[error("invalid `viewBox`: {reason}")]
    #[diagnostic(
        code(svg2canvas::document::invalid_view_box),
        help("expected four numbers: min-x min-y width height")
    )]
    InvalidViewBox {
        reason: ViewBoxError,
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: SourceSpan,
    },

    #[error("`path` element has no `d` attribute")]
    #[diagnostic(code(svg2canvas::document::missing_path_data))]
    MissingPathData {
        #[source_code]
        src: NamedSource<String>,
        #[label("this path")]
        span: SourceSpan,
    },
}

// ============================================================================
// Path Data Errors
// ============================================================================

/// A `d` attribute that cannot be turned into drawing commands
/// (`MalformedPathData`)
#[derive(Error, Diagnostic, Debug)]
pub enum PathDataError {
    #[error("`{marker}` needs {required} values, found {found}")]
    #[diagnostic(
        code(svg2canvas::path::missing_values),
        help("every coordinate of the command must be given")
    )]
    MissingValues {
        marker: char,
        required: usize,
        found: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("incomplete command")]
        span: SourceSpan,
    },

    #[error("path data could not be tokenized: {message}")]
    #[diagnostic(code(svg2canvas::path::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },
}

// ============================================================================
// Top-level
// ============================================================================

/// Any failure while converting a document
#[derive(Error, Diagnostic, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Document(#[from] DocumentError),

    #[error("path #{index} has malformed path data")]
    #[diagnostic(code(svg2canvas::shape))]
    Shape {
        /// Zero-based position of the path in document order
        index: usize,
        #[source]
        #[diagnostic_source]
        source: PathDataError,
    },
}
