//! Presentation writer.
//!
//! Slides are appended through [`Presentation::add_slide`] and filled with
//! shapes; [`Presentation::save`] serializes the whole package at once.
pub mod pres;
pub mod shape;
pub mod slide;
pub mod table;

pub use pres::Presentation;
pub use shape::{Shape, ShapeKind, TextBody};
pub use slide::Slide;
pub use table::{Table, TableCell};
