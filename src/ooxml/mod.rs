//! Office Open XML (OOXML) packaging and PresentationML.
//!
//! The module is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): part names, relationships, content types and the ZIP container
//! 2. **PresentationML** (`pptx`): the slide document model, its serialization, and a
//!    reader for checking written files
//!
//! # Example
//!
//! ```rust,no_run
//! use deckwright::common::{inches, palette};
//! use deckwright::ooxml::pptx::{Bounds, Paragraph, Presentation};
//!
//! let mut pres = Presentation::widescreen();
//! pres.add_slide()
//!     .add_text_box(Bounds::new(inches(0.5), inches(0.5), inches(12.0), inches(1.0)))
//!     .paragraph(Paragraph::new("Hello").size(36.0).color(palette::WHITE));
//! pres.save("hello.pptx")?;
//! # Ok::<(), deckwright::DeckError>(())
//! ```
pub mod opc;
pub mod pptx;

pub use opc::PackURI;
