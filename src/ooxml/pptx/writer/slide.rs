/// Slide model and its PresentationML serialization.
use crate::error::Result;
use crate::ooxml::opc::constants::namespace;

use super::shape::{Bounds, Geometry, Shape};
use super::table::Table;

/// A slide in a presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Slide ID (unique within the presentation, 256 and up)
    pub(crate) slide_id: u32,
    /// Shapes in z-order, back to front
    pub(crate) shapes: Vec<Shape>,
    /// Heading listed in the document properties
    pub(crate) title: Option<String>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            title: None,
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    // IDs: 1 = the slide's group shape, 2+ = shapes
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    /// Add an auto shape (rectangle, rounded rectangle, ellipse).
    pub fn add_shape(&mut self, geometry: Geometry, bounds: Bounds) -> &mut Shape {
        let shape = Shape::new_auto_shape(self.next_shape_id(), geometry, bounds);
        self.push(shape)
    }

    /// Add an empty text box; fill it with [`Shape::paragraph`].
    pub fn add_text_box(&mut self, bounds: Bounds) -> &mut Shape {
        let shape = Shape::new_text_box(self.next_shape_id(), bounds);
        self.push(shape)
    }

    /// Add a `rows` x `cols` table spanning `bounds`.
    pub fn add_table(&mut self, rows: usize, cols: usize, bounds: Bounds) -> Result<&mut Shape> {
        let table = Table::new(rows, cols, bounds.width, bounds.height)?;
        let shape = Shape::new_table(self.next_shape_id(), table, bounds);
        Ok(self.push(shape))
    }

    fn push(&mut self, shape: Shape) -> &mut Shape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// All paragraph texts on the slide, in shape order.
    pub fn texts(&self) -> Vec<String> {
        self.shapes.iter().flat_map(Shape::texts).collect()
    }

    /// Set the heading reported by [`Slide::title`].
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// The slide's heading: the one given to [`Slide::set_title`], or else
    /// the first non-empty text on the slide.
    pub fn title(&self) -> Option<String> {
        self.title
            .clone()
            .or_else(|| self.texts().into_iter().find(|t| !t.is_empty()))
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(&format!(
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        ));

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}
