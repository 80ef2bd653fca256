//! Conversion settings

use crate::types::Rounding;

/// Constructor named in the generated header when none is configured
pub const DEFAULT_CANVAS_CLASS: &str = "WeCanvas";

/// Name used for the input in diagnostics when none is configured
pub const DEFAULT_SOURCE_NAME: &str = "<input>";

/// Settings for [`crate::convert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// How numeric path-data tokens become integer coordinates
    pub rounding: Rounding,
    /// Class constructed by the header line: `new <class>({ width: .., height: .. })`
    pub canvas_class: String,
    /// Name shown for the input document in error reports
    pub source_name: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            rounding: Rounding::default(),
            canvas_class: DEFAULT_CANVAS_CLASS.to_string(),
            source_name: DEFAULT_SOURCE_NAME.to_string(),
        }
    }
}

impl ConvertOptions {
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_canvas_class(mut self, class: impl Into<String>) -> Self {
        self.canvas_class = class.into();
        self
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ConvertOptions::default();
        assert_eq!(options.rounding, Rounding::Legacy);
        assert_eq!(options.canvas_class, "WeCanvas");
        assert_eq!(options.source_name, "<input>");
    }

    #[test]
    fn builders_override_fields() {
        let options = ConvertOptions::default()
            .with_rounding(Rounding::HalfAwayFromZero)
            .with_canvas_class("Canvas2D")
            .with_source_name("icon.svg");
        assert_eq!(options.rounding, Rounding::HalfAwayFromZero);
        assert_eq!(options.canvas_class, "Canvas2D");
        assert_eq!(options.source_name, "icon.svg");
    }
}
