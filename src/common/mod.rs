//! Common types and utilities shared by the writer, the reader, and the deck
//! templates.

// Submodule declarations
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use style::{RGBColor, palette};
pub use unit::{Emu, inches};
