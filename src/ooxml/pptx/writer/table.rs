/// Table model and DrawingML table serialization.
use crate::common::RGBColor;
use crate::common::unit::Emu;
use crate::error::{DeckError, Result};
use std::fmt::Write as FmtWrite;

use super::shape::{Paragraph, TextFormat, write_paragraphs, write_solid_fill};

/// Built-in "Medium Style 2 - Accent 1" table style.
const DEFAULT_TABLE_STYLE_ID: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

/// One table cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCell {
    pub text: String,
    pub format: TextFormat,
    pub fill: Option<RGBColor>,
}

impl TableCell {
    /// Builder method: set the cell text.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn set_format(&mut self, format: TextFormat) -> &mut Self {
        self.format = format;
        self
    }

    pub fn set_fill(&mut self, color: RGBColor) -> &mut Self {
        self.fill = Some(color);
        self
    }
}

/// A grid of cells with explicit column widths and row heights.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    cells: Vec<Vec<TableCell>>,
    col_widths: Vec<Emu>,
    row_heights: Vec<Emu>,
    first_row: bool,
    band_row: bool,
}

impl Table {
    /// Create a `rows` x `cols` table filling `width` x `height`.
    ///
    /// Columns and rows start evenly sized (integer division of the extent).
    pub fn new(rows: usize, cols: usize, width: Emu, height: Emu) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(DeckError::EmptyTable);
        }

        Ok(Self {
            cells: vec![vec![TableCell::default(); cols]; rows],
            col_widths: vec![width / cols as i64; cols],
            row_heights: vec![height / rows as i64; rows],
            first_row: true,
            band_row: true,
        })
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn column_widths(&self) -> &[Emu] {
        &self.col_widths
    }

    pub fn row_heights(&self) -> &[Emu] {
        &self.row_heights
    }

    pub fn set_column_width(&mut self, col: usize, width: Emu) {
        if let Some(w) = self.col_widths.get_mut(col) {
            *w = width;
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.cells.get(row)?.get(col)
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[TableCell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Write the `a:tbl` element.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:tbl>");
        write!(
            xml,
            r#"<a:tblPr firstRow="{}" bandRow="{}"><a:tableStyleId>{}</a:tableStyleId></a:tblPr>"#,
            u8::from(self.first_row),
            u8::from(self.band_row),
            DEFAULT_TABLE_STYLE_ID
        )
        .map_err(|e| DeckError::Xml(e.to_string()))?;

        xml.push_str("<a:tblGrid>");
        for width in &self.col_widths {
            write!(xml, r#"<a:gridCol w="{}"/>"#, width)
                .map_err(|e| DeckError::Xml(e.to_string()))?;
        }
        xml.push_str("</a:tblGrid>");

        for (row, height) in self.cells.iter().zip(&self.row_heights) {
            write!(xml, r#"<a:tr h="{}">"#, height).map_err(|e| DeckError::Xml(e.to_string()))?;
            for cell in row {
                xml.push_str("<a:tc>");
                xml.push_str("<a:txBody><a:bodyPr/><a:lstStyle/>");
                let paragraph = Paragraph {
                    text: cell.text.clone(),
                    format: cell.format,
                    alignment: None,
                    space_after: None,
                };
                write_paragraphs(xml, std::slice::from_ref(&paragraph))?;
                xml.push_str("</a:txBody>");
                match cell.fill {
                    Some(ref color) => {
                        xml.push_str("<a:tcPr>");
                        write_solid_fill(xml, color)?;
                        xml.push_str("</a:tcPr>");
                    },
                    None => xml.push_str("<a:tcPr/>"),
                }
                xml.push_str("</a:tc>");
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl>");
        Ok(())
    }
}
