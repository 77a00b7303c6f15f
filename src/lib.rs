//! Deckwright - builds the "AI 助力公務效率提升" training deck as a
//! PowerPoint (.pptx) file.
//!
//! # Features
//!
//! - **Slide templates**: title, section, content, steps, tool cards, table and warning slides
//! - **PPTX writer**: a presentation → slide → shape model serialized to PresentationML
//! - **OPC packaging**: content types, relationships and the ZIP container
//! - **Read-back**: slide text extraction from written packages
//!
//! # Example
//!
//! ```no_run
//! use deckwright::config::DeckConfig;
//! use deckwright::deck::build_course_deck;
//!
//! # fn main() -> Result<(), deckwright::DeckError> {
//! let config = DeckConfig::from_env()?;
//! let pres = build_course_deck(&config)?;
//! pres.save(&config.output_path)?;
//! println!("{} slides", pres.slide_count());
//! # Ok(())
//! # }
//! ```
pub mod common;
pub mod config;
pub mod deck;
pub mod error;
pub mod ooxml;

pub use config::DeckConfig;
pub use error::{DeckError, Result};
pub use ooxml::pptx::{PackageReader, Presentation};
