//! PowerPoint (.pptx) presentations.
//!
//! - `format`: geometry, bounds and text formatting values
//! - `writer`: the presentation → slide → shape model and its serialization
//! - `reader`: reads slide text back from a written package
//! - `template`: the fixed parts every package carries (master, layout, theme)
pub mod format;
pub mod reader;
pub mod template;
pub mod writer;

pub use format::{Alignment, Bounds, Geometry, LineStyle, Paragraph, TextFormat};
pub use reader::PackageReader;
pub use writer::{Presentation, Shape, ShapeKind, Slide, Table, TableCell};
