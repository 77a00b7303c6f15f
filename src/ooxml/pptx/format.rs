//! Format types for PPTX shapes and text.

use crate::common::RGBColor;
use crate::common::unit::Emu;

/// Position and size of a shape, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: Emu,
    pub y: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Bounds {
    pub const fn new(x: Emu, y: Emu, width: Emu, height: Emu) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Preset geometry of an auto shape (`a:prstGeom/@prst`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rectangle,
    RoundedRectangle,
    Ellipse,
}

impl Geometry {
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Ellipse => "ellipse",
        }
    }

    /// Base for the shape's `cNvPr/@name`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Ellipse => "Oval",
        }
    }
}

/// Outline of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// No `a:ln` element; the viewer's default outline applies.
    #[default]
    Default,
    /// Outline explicitly hidden.
    NoLine,
    Solid(RGBColor),
}

/// Paragraph alignment (`a:pPr/@algn`). Paragraphs without one are
/// left-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
}

impl Alignment {
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Center => "ctr",
        }
    }
}

/// Run-level text formatting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextFormat {
    /// Font size in points
    pub size: Option<f64>,
    pub bold: bool,
    pub color: Option<RGBColor>,
}

impl TextFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, points: f64) -> Self {
        self.size = Some(points);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// A paragraph holding a single run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub format: TextFormat,
    pub alignment: Option<Alignment>,
    /// Space after the paragraph, in points
    pub space_after: Option<f64>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::default(),
            alignment: None,
            space_after: None,
        }
    }

    pub fn size(mut self, points: f64) -> Self {
        self.format.size = Some(points);
        self
    }

    pub fn bold(mut self) -> Self {
        self.format.bold = true;
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.format.color = Some(color);
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn space_after(mut self, points: f64) -> Self {
        self.space_after = Some(points);
        self
    }
}
