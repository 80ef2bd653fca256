//! Extract the size and the path shapes from a markup tree.

use std::ops::Range;

use crate::errors::{DocumentError, SourceContext};
use crate::log::debug;
use crate::types::Size;

/// Read-only view of one element of a parsed markup tree.
///
/// Implemented for [`roxmltree::Node`]; any other tree that can name its
/// element, look up attributes and list child elements in order works too.
pub trait MarkupNode: Sized {
    /// Local tag name, without namespace prefix
    fn tag_name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Child elements in document order
    fn children(&self) -> impl Iterator<Item = Self>;

    /// Byte range of the element in the source text, if known
    fn source_range(&self) -> Option<Range<usize>> {
        None
    }
}

impl<'a, 'input: 'a> MarkupNode for roxmltree::Node<'a, 'input> {
    fn tag_name(&self) -> &str {
        roxmltree::Node::tag_name(self).name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        roxmltree::Node::attribute(self, name)
    }

    fn children(&self) -> impl Iterator<Item = Self> {
        roxmltree::Node::children(self).filter(|n| n.is_element())
    }

    fn source_range(&self) -> Option<Range<usize>> {
        Some(self.range())
    }
}

/// Attributes of one `path` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shape {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<String>,
    pub transform: Option<String>,
    /// The `d` attribute
    pub path_data: String,
}

impl Shape {
    /// Shape with only path data
    pub fn new(path_data: impl Into<String>) -> Self {
        Self {
            path_data: path_data.into(),
            ..Self::default()
        }
    }

    /// Fill color, if it is a `#` hex color. Named colors, `none` and paint
    /// server references are ignored.
    pub fn active_fill(&self) -> Option<&str> {
        self.fill.as_deref().filter(|c| c.starts_with('#'))
    }

    /// Stroke color, under the same rule as [`Shape::active_fill`]
    pub fn active_stroke(&self) -> Option<&str> {
        self.stroke.as_deref().filter(|c| c.starts_with('#'))
    }

    fn from_node<N: MarkupNode>(node: &N, ctx: &SourceContext) -> Result<Shape, DocumentError> {
        let path_data = node
            .attribute("d")
            .ok_or_else(|| DocumentError::MissingPathData {
                src: ctx.named_source(),
                span: span_of(node),
            })?;

        Ok(Shape {
            fill: non_empty(node.attribute("fill")),
            stroke: non_empty(node.attribute("stroke")),
            stroke_width: non_empty(node.attribute("stroke-width")),
            transform: non_empty(node.attribute("transform")),
            path_data: path_data.to_string(),
        })
    }
}

/// A document reduced to what the code generator needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub size: Size,
    /// Path shapes in document order
    pub shapes: Vec<Shape>,
}

impl Document {
    /// Parse markup text and extract its size and shapes
    pub fn parse(ctx: &SourceContext) -> Result<Document, DocumentError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let tree = roxmltree::Document::parse_with_options(&ctx.source, options).map_err(|e| {
            let pos = e.pos();
            DocumentError::Markup {
                source: e,
                src: ctx.named_source(),
                span: (ctx.offset_of(pos.row, pos.col), 0).into(),
            }
        })?;

        Self::extract(&tree.root_element(), ctx)
    }

    /// Extract the size from `root` and collect every `path` below it.
    ///
    /// Paths are visited depth first, parents before children, siblings left
    /// to right.
    pub fn extract<N: MarkupNode>(root: &N, ctx: &SourceContext) -> Result<Document, DocumentError> {
        let view_box = root
            .attribute("viewBox")
            .ok_or_else(|| DocumentError::MissingViewBox {
                src: ctx.named_source(),
                span: span_of(root),
            })?;
        let size = Size::from_view_box(view_box).map_err(|reason| DocumentError::InvalidViewBox {
            reason,
            src: ctx.named_source(),
            span: span_of(root),
        })?;

        let mut shapes = Vec::new();
        let mut stack: Vec<N> = root.children().collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            if node.tag_name() == "path" {
                shapes.push(Shape::from_node(&node, ctx)?);
            }
            let mut children: Vec<N> = node.children().collect();
            children.reverse();
            stack.extend(children);
        }

        debug!(
            width = %size.width,
            height = %size.height,
            shapes = shapes.len(),
            "extracted document"
        );

        Ok(Document { size, shapes })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn span_of<N: MarkupNode>(node: &N) -> miette::SourceSpan {
    match node.source_range() {
        Some(range) => (range.start, range.len()).into(),
        None => (0, 0).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Document, DocumentError> {
        Document::parse(&SourceContext::new("<test>", source))
    }

    /// Minimal in-memory tree, to exercise the extractor without XML
    #[derive(Clone)]
    struct Element {
        tag: &'static str,
        attrs: Vec<(&'static str, &'static str)>,
        children: Vec<Element>,
    }

    fn el(tag: &'static str, attrs: &[(&'static str, &'static str)], children: Vec<Element>) -> Element {
        Element {
            tag,
            attrs: attrs.to_vec(),
            children,
        }
    }

    impl MarkupNode for Element {
        fn tag_name(&self) -> &str {
            self.tag
        }

        fn attribute(&self, name: &str) -> Option<&str> {
            self.attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
        }

        fn children(&self) -> impl Iterator<Item = Self> {
            self.children.clone().into_iter()
        }
    }

    #[test]
    fn size_comes_from_view_box() {
        let doc = parse(r#"<svg viewBox="0 0 24 48"></svg>"#).unwrap();
        assert_eq!(doc.size.width, "24");
        assert_eq!(doc.size.height, "48");
        assert!(doc.shapes.is_empty());
    }

    #[test]
    fn missing_view_box_is_an_error() {
        let err = parse(r#"<svg width="10"><path d="M0 0"/></svg>"#).unwrap_err();
        assert!(matches!(err, DocumentError::MissingViewBox { .. }));
    }

    #[test]
    fn invalid_view_box_is_an_error() {
        let err = parse(r#"<svg viewBox="0 0 auto"></svg>"#).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidViewBox { .. }));
    }

    #[test]
    fn broken_markup_is_an_error() {
        let err = parse("<svg viewBox=\"0 0 1 1\">\n<path d=\"M0 0\">\n</svg>").unwrap_err();
        assert!(matches!(err, DocumentError::Markup { .. }));
    }

    #[test]
    fn path_without_d_is_an_error() {
        let source = r##"<svg viewBox="0 0 1 1"><path fill="#000"/></svg>"##;
        match parse(source).unwrap_err() {
            DocumentError::MissingPathData { span, .. } => {
                assert_eq!(&source[span.offset()..span.offset() + span.len()], r##"<path fill="#000"/>"##);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn shapes_in_document_order() {
        let doc = parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">
                <path d="M1 1"/>
                <g>
                    <path d="M2 2"/>
                    <g><path d="M3 3"/></g>
                    <path d="M4 4"/>
                </g>
                <rect width="1" height="1"/>
                <path d="M5 5"/>
            </svg>"#,
        )
        .unwrap();
        let order: Vec<&str> = doc.shapes.iter().map(|s| s.path_data.as_str()).collect();
        assert_eq!(order, ["M1 1", "M2 2", "M3 3", "M4 4", "M5 5"]);
    }

    #[test]
    fn attributes_are_collected() {
        let doc = parse(
            r##"<svg viewBox="0 0 10 10"><path d="M0 0" fill="#fff" stroke="#000" stroke-width="2" transform="rotate(45)"/></svg>"##,
        )
        .unwrap();
        let shape = &doc.shapes[0];
        assert_eq!(shape.fill.as_deref(), Some("#fff"));
        assert_eq!(shape.stroke.as_deref(), Some("#000"));
        assert_eq!(shape.stroke_width.as_deref(), Some("2"));
        assert_eq!(shape.transform.as_deref(), Some("rotate(45)"));
    }

    #[test]
    fn empty_attributes_count_as_absent() {
        let doc = parse(r#"<svg viewBox="0 0 1 1"><path d="" fill="" transform=""/></svg>"#).unwrap();
        assert_eq!(doc.shapes[0], Shape::new(""));
    }

    #[test]
    fn doctype_is_accepted() {
        let doc = parse(
            r#"<?xml version="1.0"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg viewBox="0 0 2 2"><path d="M0 0"/></svg>"#,
        )
        .unwrap();
        assert_eq!(doc.shapes.len(), 1);
    }

    #[test]
    fn only_hex_colors_are_active() {
        let mut shape = Shape::new("M0 0");
        shape.fill = Some("red".into());
        shape.stroke = Some("none".into());
        assert_eq!(shape.active_fill(), None);
        assert_eq!(shape.active_stroke(), None);

        shape.fill = Some("#ff0000".into());
        shape.stroke = Some("#00f".into());
        assert_eq!(shape.active_fill(), Some("#ff0000"));
        assert_eq!(shape.active_stroke(), Some("#00f"));
    }

    #[test]
    fn extract_works_on_any_markup_tree() {
        let root = el(
            "svg",
            &[("viewBox", "0 0 5 6")],
            vec![
                el("g", &[], vec![el("path", &[("d", "M1 1"), ("fill", "#111")], vec![])]),
                el("path", &[("d", "M2 2")], vec![]),
            ],
        );
        let doc = Document::extract(&root, &SourceContext::new("<tree>", "")).unwrap();
        assert_eq!(doc.size.width, "5");
        assert_eq!(doc.size.height, "6");
        assert_eq!(doc.shapes.len(), 2);
        assert_eq!(doc.shapes[0].active_fill(), Some("#111"));
        assert_eq!(doc.shapes[1].path_data, "M2 2");
    }
}
