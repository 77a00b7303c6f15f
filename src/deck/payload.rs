//! Typed content for each slide template.
use crate::error::{DeckError, Result};
use crate::ooxml::pptx::Presentation;

use super::templates;

/// Number of cards on a tool slide (a 2x2 grid).
pub const TOOL_CARDS: usize = 4;

/// Cover or closing slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSlide {
    pub title: String,
    pub subtitle: String,
    /// Third line under the subtitle; omitted when `None` or empty
    pub meta: Option<String>,
}

impl TitleSlide {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }
}

/// Section divider with a large ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSlide {
    pub number: u32,
    pub title: String,
    pub time_info: String,
}

impl SectionSlide {
    pub fn new(number: u32, title: impl Into<String>, time_info: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            time_info: time_info.into(),
        }
    }

    /// Ordinal as displayed: `1` → `"01"`.
    pub fn ordinal(&self) -> String {
        format!("{:02}", self.number)
    }
}

/// Title plus a bulleted body, one paragraph per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSlide {
    pub title: String,
    /// Empty strings are kept as blank spacer lines
    pub items: Vec<String>,
}

impl ContentSlide {
    pub fn new<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub heading: String,
    pub description: String,
}

impl Step {
    pub fn new(heading: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            description: description.into(),
        }
    }
}

/// Numbered procedure. Steps are stacked 1.2" apart; more than four run
/// past the bottom of the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSlide {
    pub title: String,
    pub steps: Vec<Step>,
}

impl StepSlide {
    pub fn new<I>(title: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator<Item = Step>,
    {
        Self {
            title: title.into(),
            steps: steps.into_iter().collect(),
        }
    }
}

/// One card of a tool slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCard {
    pub name: String,
    pub description: String,
    pub url: String,
    pub tag: String,
}

impl ToolCard {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            tag: tag.into(),
        }
    }
}

/// Four tool cards in a 2x2 grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSlide {
    pub title: String,
    pub tools: [ToolCard; TOOL_CARDS],
}

impl ToolSlide {
    pub fn from_cards(title: impl Into<String>, tools: [ToolCard; TOOL_CARDS]) -> Self {
        Self {
            title: title.into(),
            tools,
        }
    }

    /// Build from a list of cards.
    ///
    /// Fewer than four cards is an error. Cards past the fourth have no
    /// place in the grid and are dropped.
    pub fn new(title: impl Into<String>, tools: Vec<ToolCard>) -> Result<Self> {
        let title = title.into();
        let got = tools.len();
        if got < TOOL_CARDS {
            return Err(DeckError::ToolCount {
                expected: TOOL_CARDS,
                got,
            });
        }
        if got > TOOL_CARDS {
            tracing::warn!(
                title = %title,
                dropped = got - TOOL_CARDS,
                "tool slide holds {} cards, ignoring the rest",
                TOOL_CARDS
            );
        }

        let mut tools = tools;
        tools.truncate(TOOL_CARDS);
        let tools: [ToolCard; TOOL_CARDS] = tools.try_into().map_err(|_| DeckError::ToolCount {
            expected: TOOL_CARDS,
            got,
        })?;

        Ok(Self { title, tools })
    }
}

/// Header row plus data rows, all of the same width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSlide {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableSlide {
    /// Build a table payload, rejecting an empty header or a row whose width
    /// differs from it.
    pub fn new(title: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let slide = Self {
            title: title.into(),
            headers,
            rows,
        };
        slide.validate()?;
        Ok(slide)
    }

    /// Check the shape of the table. Rows are numbered from 1 (the header is row 0).
    pub fn validate(&self) -> Result<()> {
        if self.headers.is_empty() {
            return Err(DeckError::EmptyTable);
        }
        let expected = self.headers.len();
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(DeckError::RaggedTable {
                    row: i + 1,
                    expected,
                    got: row.len(),
                });
            }
        }
        Ok(())
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Rows including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// One slide of a deck script, tagged by template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSlide {
    Title(TitleSlide),
    Section(SectionSlide),
    Content(ContentSlide),
    Steps(StepSlide),
    Tools(ToolSlide),
    Table(TableSlide),
    Warning,
}

impl DeckSlide {
    /// Append this slide to `pres` using the matching template.
    pub fn render(&self, pres: &mut Presentation) -> Result<()> {
        match self {
            DeckSlide::Title(s) => templates::add_title_slide(pres, s),
            DeckSlide::Section(s) => templates::add_section_slide(pres, s),
            DeckSlide::Content(s) => templates::add_content_slide(pres, s),
            DeckSlide::Steps(s) => templates::add_step_slide(pres, s),
            DeckSlide::Tools(s) => templates::add_tool_slide(pres, s),
            DeckSlide::Table(s) => templates::add_table_slide(pres, s),
            DeckSlide::Warning => templates::add_warning_slide(pres),
        }
    }

    /// The heading the slide will show.
    pub fn heading(&self) -> &str {
        match self {
            DeckSlide::Title(s) => &s.title,
            DeckSlide::Section(s) => &s.title,
            DeckSlide::Content(s) => &s.title,
            DeckSlide::Steps(s) => &s.title,
            DeckSlide::Tools(s) => &s.title,
            DeckSlide::Table(s) => &s.title,
            DeckSlide::Warning => templates::WARNING_TITLE,
        }
    }
}
