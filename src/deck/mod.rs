//! Deck building: typed slide payloads, the templates that render them, and
//! the fixed course script.
//!
//! # Example
//!
//! ```rust
//! use deckwright::deck::{ContentSlide, add_content_slide};
//! use deckwright::ooxml::pptx::Presentation;
//!
//! let mut pres = Presentation::widescreen();
//! add_content_slide(&mut pres, &ContentSlide::new("Agenda", ["Intro", "", "Demo"]))?;
//! assert_eq!(pres.slide_count(), 1);
//! # Ok::<(), deckwright::DeckError>(())
//! ```
pub mod course;
mod payload;
mod templates;

pub use course::{COURSE_TITLE, build_course_deck, course_slides};
pub use payload::{
    ContentSlide, DeckSlide, SectionSlide, Step, StepSlide, TOOL_CARDS, TableSlide, TitleSlide,
    ToolCard, ToolSlide,
};
pub use templates::{
    WARNING_TITLE, WARNINGS, add_content_slide, add_section_slide, add_step_slide,
    add_table_slide, add_title_slide, add_tool_slide, add_warning_slide,
};
