/// Shape types and their PresentationML serialization.
use crate::common::RGBColor;
use crate::common::unit::centipoints;
use crate::common::xml::escape_xml;
use crate::error::{DeckError, Result};
use std::fmt::Write as FmtWrite;

pub use super::super::format::{Alignment, Bounds, Geometry, LineStyle, Paragraph, TextFormat};
use super::table::Table;

/// Language tag written on every run.
const RUN_LANG: &str = "zh-TW";

/// Text content of a text box or table cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBody {
    pub paragraphs: Vec<Paragraph>,
    pub word_wrap: bool,
}

/// A shape on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub(crate) shape_id: u32,
    pub(crate) name: String,
    pub(crate) bounds: Bounds,
    pub(crate) kind: ShapeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    AutoShape {
        geometry: Geometry,
        fill: Option<RGBColor>,
        line: LineStyle,
    },
    TextBox {
        body: TextBody,
    },
    Table(Table),
}

impl Shape {
    pub(crate) fn new_auto_shape(shape_id: u32, geometry: Geometry, bounds: Bounds) -> Self {
        Self {
            shape_id,
            name: format!("{} {}", geometry.display_name(), shape_id - 1),
            bounds,
            kind: ShapeKind::AutoShape {
                geometry,
                fill: None,
                line: LineStyle::Default,
            },
        }
    }

    pub(crate) fn new_text_box(shape_id: u32, bounds: Bounds) -> Self {
        Self {
            shape_id,
            name: format!("TextBox {}", shape_id - 1),
            bounds,
            kind: ShapeKind::TextBox {
                body: TextBody::default(),
            },
        }
    }

    pub(crate) fn new_table(shape_id: u32, table: Table, bounds: Bounds) -> Self {
        Self {
            shape_id,
            name: format!("Table {}", shape_id - 1),
            bounds,
            kind: ShapeKind::Table(table),
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Builder method: solid fill (auto shapes only).
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeKind::AutoShape { fill: ref mut f, .. } = self.kind {
            *f = Some(color);
        }
        self
    }

    /// Builder method: solid outline (auto shapes only).
    pub fn line(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeKind::AutoShape { line: ref mut l, .. } = self.kind {
            *l = LineStyle::Solid(color);
        }
        self
    }

    /// Builder method: hide the outline (auto shapes only).
    pub fn no_line(&mut self) -> &mut Self {
        if let ShapeKind::AutoShape { line: ref mut l, .. } = self.kind {
            *l = LineStyle::NoLine;
        }
        self
    }

    /// Builder method: wrap text at the box width (text boxes only).
    pub fn word_wrap(&mut self, wrap: bool) -> &mut Self {
        if let ShapeKind::TextBox { ref mut body } = self.kind {
            body.word_wrap = wrap;
        }
        self
    }

    /// Builder method: append a paragraph (text boxes only).
    pub fn paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        if let ShapeKind::TextBox { ref mut body } = self.kind {
            body.paragraphs.push(paragraph);
        }
        self
    }

    pub fn table(&self) -> Option<&Table> {
        match &self.kind {
            ShapeKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.kind {
            ShapeKind::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Paragraph texts of this shape, in reading order.
    ///
    /// Tables yield their cells row by row.
    pub fn texts(&self) -> Vec<String> {
        match &self.kind {
            ShapeKind::AutoShape { .. } => Vec::new(),
            ShapeKind::TextBox { body } => {
                body.paragraphs.iter().map(|p| p.text.clone()).collect()
            },
            ShapeKind::Table(table) => table
                .rows_iter()
                .flat_map(|row| row.iter().map(|cell| cell.text.clone()))
                .collect(),
        }
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.kind {
            ShapeKind::AutoShape {
                geometry,
                fill,
                line,
            } => {
                xml.push_str("<p:sp>");
                self.write_nv_sp_pr(xml, false)?;

                xml.push_str("<p:spPr>");
                write_xfrm(xml, "a:xfrm", &self.bounds)?;
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    geometry.preset()
                )
                .map_err(|e| DeckError::Xml(e.to_string()))?;

                if let Some(color) = fill {
                    write_solid_fill(xml, color)?;
                }

                match line {
                    LineStyle::Default => {},
                    LineStyle::NoLine => xml.push_str("<a:ln><a:noFill/></a:ln>"),
                    LineStyle::Solid(color) => {
                        xml.push_str("<a:ln>");
                        write_solid_fill(xml, color)?;
                        xml.push_str("</a:ln>");
                    },
                }

                xml.push_str("</p:spPr>");
                xml.push_str("</p:sp>");
            },
            ShapeKind::TextBox { body } => {
                xml.push_str("<p:sp>");
                self.write_nv_sp_pr(xml, true)?;

                xml.push_str("<p:spPr>");
                write_xfrm(xml, "a:xfrm", &self.bounds)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                let wrap = if body.word_wrap { "square" } else { "none" };
                write!(xml, r#"<a:bodyPr wrap="{}" rtlCol="0">"#, wrap)
                    .map_err(|e| DeckError::Xml(e.to_string()))?;
                xml.push_str("<a:spAutoFit/>");
                xml.push_str("</a:bodyPr>");
                xml.push_str("<a:lstStyle/>");
                write_paragraphs(xml, &body.paragraphs)?;
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeKind::Table(table) => {
                xml.push_str("<p:graphicFrame>");
                xml.push_str("<p:nvGraphicFramePr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{}"/>"#,
                    self.shape_id,
                    escape_xml(&self.name)
                )
                .map_err(|e| DeckError::Xml(e.to_string()))?;
                xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvGraphicFramePr>");
                write_xfrm(xml, "p:xfrm", &self.bounds)?;
                xml.push_str("<a:graphic>");
                xml.push_str(
                    r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#,
                );
                table.to_xml(xml)?;
                xml.push_str("</a:graphicData>");
                xml.push_str("</a:graphic>");
                xml.push_str("</p:graphicFrame>");
            },
        }

        Ok(())
    }

    fn write_nv_sp_pr(&self, xml: &mut String, text_box: bool) -> Result<()> {
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )
        .map_err(|e| DeckError::Xml(e.to_string()))?;
        if text_box {
            xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
        } else {
            xml.push_str("<p:cNvSpPr/>");
        }
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");
        Ok(())
    }
}

fn write_xfrm(xml: &mut String, tag: &str, bounds: &Bounds) -> Result<()> {
    write!(
        xml,
        r#"<{tag}><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></{tag}>"#,
        bounds.x, bounds.y, bounds.width, bounds.height
    )
    .map_err(|e| DeckError::Xml(e.to_string()))
}

pub(crate) fn write_solid_fill(xml: &mut String, color: &RGBColor) -> Result<()> {
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        color.to_hex()
    )
    .map_err(|e| DeckError::Xml(e.to_string()))
}

/// Write `a:p` elements. An empty body still gets one empty paragraph,
/// since a text body must hold at least one.
pub(crate) fn write_paragraphs(xml: &mut String, paragraphs: &[Paragraph]) -> Result<()> {
    if paragraphs.is_empty() {
        xml.push_str("<a:p/>");
        return Ok(());
    }

    for paragraph in paragraphs {
        write_paragraph(xml, paragraph)?;
    }
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    if paragraph.alignment.is_some() || paragraph.space_after.is_some() {
        xml.push_str("<a:pPr");
        if let Some(alignment) = paragraph.alignment {
            write!(xml, r#" algn="{}""#, alignment.as_attr())
                .map_err(|e| DeckError::Xml(e.to_string()))?;
        }
        xml.push('>');
        if let Some(space) = paragraph.space_after {
            write!(
                xml,
                r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                centipoints(space)
            )
            .map_err(|e| DeckError::Xml(e.to_string()))?;
        }
        xml.push_str("</a:pPr>");
    }

    if !paragraph.text.is_empty() {
        xml.push_str("<a:r>");
        write_run_properties(xml, "a:rPr", &paragraph.format)?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(&paragraph.text))
            .map_err(|e| DeckError::Xml(e.to_string()))?;
        xml.push_str("</a:r>");
    }

    // Keeps the formatting on empty lines and at the caret after the last run
    write_run_properties(xml, "a:endParaRPr", &paragraph.format)?;

    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_properties(xml: &mut String, tag: &str, format: &TextFormat) -> Result<()> {
    write!(xml, r#"<{} lang="{}""#, tag, RUN_LANG).map_err(|e| DeckError::Xml(e.to_string()))?;

    if let Some(size) = format.size {
        write!(xml, r#" sz="{}""#, centipoints(size)).map_err(|e| DeckError::Xml(e.to_string()))?;
    }

    if format.bold {
        xml.push_str(r#" b="1""#);
    }

    xml.push_str(r#" dirty="0""#);

    match format.color {
        Some(ref color) => {
            xml.push('>');
            write_solid_fill(xml, color)?;
            write!(xml, "</{}>", tag).map_err(|e| DeckError::Xml(e.to_string()))?;
        },
        None => xml.push_str("/>"),
    }

    Ok(())
}
