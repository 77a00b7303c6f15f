//! The seven slide templates.
//!
//! Each template appends exactly one slide to the presentation it is given.
//! Payloads are checked before the slide is added, so a rejected payload
//! leaves the presentation untouched. Positions are in inches and sizes in
//! points, converted to EMUs at the call site.
use crate::common::unit::inches;
use crate::common::{RGBColor, palette};
use crate::error::Result;
use crate::ooxml::pptx::{
    Alignment, Bounds, Geometry, Paragraph, Presentation, Slide, Table, TextFormat,
};

use super::payload::{
    ContentSlide, SectionSlide, StepSlide, TOOL_CARDS, TableSlide, TitleSlide, ToolSlide,
};

/// Left margin shared by every slide.
const MARGIN: f64 = 0.5;
/// Width of full-width boxes (canvas width minus both margins).
const CONTENT_WIDTH: f64 = 12.333;

/// Banner height on content, step, tool, table and warning slides.
const BANNER_HEIGHT: f64 = 0.8;
const BANNER_SIZE: f64 = 36.0;
/// Content slides place the banner slightly lower than the other templates.
const CONTENT_BANNER_Y: f64 = 0.5;
const BANNER_Y: f64 = 0.4;

const STEP_TOP: f64 = 1.4;
const STEP_PITCH: f64 = 1.2;

/// Top-left corners of the tool cards, row-major.
const TOOL_CARD_ORIGINS: [(f64, f64); TOOL_CARDS] = [(0.5, 1.4), (6.5, 1.4), (0.5, 4.2), (6.5, 4.2)];
const TOOL_CARD_WIDTH: f64 = 5.8;
const TOOL_CARD_HEIGHT: f64 = 2.5;

const TABLE_TOP: f64 = 1.4;
const TABLE_HEIGHT: f64 = 5.0;

const WARNING_TOP: f64 = 1.5;
const WARNING_PITCH: f64 = 1.8;

/// Heading of the fixed warning slide.
pub const WARNING_TITLE: &str = "⚠️ 公務使用注意事項";

/// Panels of the warning slide: heading and description.
pub const WARNINGS: [(&str, &str); 3] = [
    ("🔒 資訊安全", "不要上傳機密文件或個人資料到 AI 工具"),
    ("✅ 人工審核", "AI 生成內容可能有錯誤，務必人工確認後才能使用"),
    ("©️ 著作權", "AI 生成圖片/文字的著作權問題仍有爭議，正式發布前請確認"),
];

fn bounds(x: f64, y: f64, width: f64, height: f64) -> Bounds {
    Bounds::new(inches(x), inches(y), inches(width), inches(height))
}

/// Add a slide headed `title` whose first shape is the full-bleed dark
/// background.
fn new_slide<'a>(pres: &'a mut Presentation, title: &str) -> &'a mut Slide {
    let full = Bounds::new(0, 0, pres.slide_width(), pres.slide_height());
    let slide = pres.add_slide();
    slide.set_title(title);
    slide
        .add_shape(Geometry::Rectangle, full)
        .fill(palette::DARK_BG)
        .no_line();
    slide
}

/// One-paragraph text box.
fn add_text(slide: &mut Slide, at: Bounds, paragraph: Paragraph) {
    slide.add_text_box(at).paragraph(paragraph);
}

fn add_banner(slide: &mut Slide, y: f64, title: &str) {
    add_text(
        slide,
        bounds(MARGIN, y, CONTENT_WIDTH, BANNER_HEIGHT),
        Paragraph::new(title)
            .size(BANNER_SIZE)
            .bold()
            .color(palette::WHITE),
    );
}

fn centered(text: &str, size: f64, color: RGBColor) -> Paragraph {
    Paragraph::new(text)
        .size(size)
        .color(color)
        .align(Alignment::Center)
}

/// Cover slide: large centered title, subtitle, and an optional meta line.
pub fn add_title_slide(pres: &mut Presentation, payload: &TitleSlide) -> Result<()> {
    let slide = new_slide(pres, &payload.title);

    add_text(
        slide,
        bounds(MARGIN, 2.5, CONTENT_WIDTH, 1.5),
        centered(&payload.title, 54.0, palette::WHITE).bold(),
    );
    add_text(
        slide,
        bounds(MARGIN, 4.0, CONTENT_WIDTH, 0.8),
        centered(&payload.subtitle, 28.0, palette::LIGHT_PURPLE),
    );
    if let Some(meta) = payload.meta.as_deref().filter(|m| !m.is_empty()) {
        add_text(
            slide,
            bounds(MARGIN, 5.0, CONTENT_WIDTH, 0.6),
            centered(meta, 18.0, palette::GRAY),
        );
    }

    tracing::debug!(title = %payload.title, "added title slide");
    Ok(())
}

/// Section divider: zero-padded ordinal, title, and a time caption.
pub fn add_section_slide(pres: &mut Presentation, payload: &SectionSlide) -> Result<()> {
    let slide = new_slide(pres, &payload.title);

    add_text(
        slide,
        bounds(MARGIN, 1.5, CONTENT_WIDTH, 2.0),
        centered(&payload.ordinal(), 120.0, palette::SECTION_NUMBER).bold(),
    );
    add_text(
        slide,
        bounds(MARGIN, 3.5, CONTENT_WIDTH, 1.2),
        centered(&payload.title, 48.0, palette::WHITE).bold(),
    );
    add_text(
        slide,
        bounds(MARGIN, 5.0, CONTENT_WIDTH, 0.6),
        centered(&payload.time_info, 20.0, palette::GRAY),
    );

    tracing::debug!(number = payload.number, title = %payload.title, "added section slide");
    Ok(())
}

/// Banner plus one word-wrapped box with a paragraph per item.
pub fn add_content_slide(pres: &mut Presentation, payload: &ContentSlide) -> Result<()> {
    let slide = new_slide(pres, &payload.title);
    add_banner(slide, CONTENT_BANNER_Y, &payload.title);

    let body = slide.add_text_box(bounds(MARGIN, 1.5, CONTENT_WIDTH, 5.5));
    body.word_wrap(true);
    for item in &payload.items {
        body.paragraph(
            Paragraph::new(item.as_str())
                .size(24.0)
                .color(palette::GRAY)
                .space_after(12.0),
        );
    }

    tracing::debug!(title = %payload.title, items = payload.items.len(), "added content slide");
    Ok(())
}

/// Banner plus numbered steps, each a purple disc, a heading and a description.
pub fn add_step_slide(pres: &mut Presentation, payload: &StepSlide) -> Result<()> {
    let slide = new_slide(pres, &payload.title);
    add_banner(slide, BANNER_Y, &payload.title);

    for (i, step) in payload.steps.iter().enumerate() {
        let y = STEP_TOP + STEP_PITCH * i as f64;

        slide
            .add_shape(Geometry::Ellipse, bounds(MARGIN, y, 0.6, 0.6))
            .fill(palette::PURPLE)
            .no_line();
        add_text(
            slide,
            bounds(MARGIN, y + 0.1, 0.6, 0.5),
            centered(&(i + 1).to_string(), 24.0, palette::WHITE).bold(),
        );
        add_text(
            slide,
            bounds(1.3, y, 11.0, 0.5),
            Paragraph::new(step.heading.as_str())
                .size(24.0)
                .bold()
                .color(palette::WHITE),
        );
        add_text(
            slide,
            bounds(1.3, y + 0.45, 11.0, 0.4),
            Paragraph::new(step.description.as_str())
                .size(18.0)
                .color(palette::GRAY),
        );
    }

    tracing::debug!(title = %payload.title, steps = payload.steps.len(), "added step slide");
    Ok(())
}

/// Banner plus four rounded cards in a 2x2 grid.
pub fn add_tool_slide(pres: &mut Presentation, payload: &ToolSlide) -> Result<()> {
    let slide = new_slide(pres, &payload.title);
    add_banner(slide, BANNER_Y, &payload.title);

    for (tool, &(x, y)) in payload.tools.iter().zip(TOOL_CARD_ORIGINS.iter()) {
        slide
            .add_shape(
                Geometry::RoundedRectangle,
                bounds(x, y, TOOL_CARD_WIDTH, TOOL_CARD_HEIGHT),
            )
            .fill(palette::CARD_FILL)
            .line(palette::PURPLE);

        add_text(
            slide,
            bounds(x + 0.3, y + 0.3, 5.2, 0.5),
            Paragraph::new(tool.name.as_str())
                .size(24.0)
                .bold()
                .color(palette::WHITE),
        );
        slide
            .add_text_box(bounds(x + 0.3, y + 0.8, 5.2, 0.8))
            .word_wrap(true)
            .paragraph(
                Paragraph::new(tool.description.as_str())
                    .size(16.0)
                    .color(palette::GRAY),
            );
        add_text(
            slide,
            bounds(x + 0.3, y + 1.5, 5.2, 0.4),
            Paragraph::new(tool.url.as_str())
                .size(14.0)
                .color(palette::PURPLE),
        );
        add_text(
            slide,
            bounds(x + 0.3, y + 1.9, 2.0, 0.4),
            Paragraph::new(tool.tag.as_str())
                .size(14.0)
                .bold()
                .color(palette::GREEN),
        );
    }

    tracing::debug!(title = %payload.title, "added tool slide");
    Ok(())
}

/// Banner plus a table with a purple header row.
pub fn add_table_slide(pres: &mut Presentation, payload: &TableSlide) -> Result<()> {
    payload.validate()?;

    let slide = new_slide(pres, &payload.title);
    add_banner(slide, BANNER_Y, &payload.title);

    let cols = payload.column_count();
    let shape = slide.add_table(
        payload.row_count(),
        cols,
        bounds(MARGIN, TABLE_TOP, CONTENT_WIDTH, TABLE_HEIGHT),
    )?;
    if let Some(table) = shape.table_mut() {
        fill_table(table, payload);
    }

    tracing::debug!(
        title = %payload.title,
        rows = payload.row_count(),
        cols,
        "added table slide"
    );
    Ok(())
}

fn fill_table(table: &mut Table, payload: &TableSlide) {
    let column_width = inches(CONTENT_WIDTH / payload.column_count() as f64);
    for col in 0..payload.column_count() {
        table.set_column_width(col, column_width);
    }

    let header_format = TextFormat::new().size(18.0).bold().color(palette::WHITE);
    for (col, header) in payload.headers.iter().enumerate() {
        if let Some(cell) = table.cell_mut(0, col) {
            cell.set_text(header.as_str())
                .set_fill(palette::PURPLE)
                .set_format(header_format);
        }
    }

    let data_format = TextFormat::new().size(16.0).color(palette::GRAY);
    for (row, values) in payload.rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            if let Some(cell) = table.cell_mut(row + 1, col) {
                cell.set_text(value.as_str())
                    .set_fill(palette::TABLE_ROW_FILL)
                    .set_format(data_format);
            }
        }
    }
}

/// Fixed slide of three red-bordered caution panels.
pub fn add_warning_slide(pres: &mut Presentation) -> Result<()> {
    let slide = new_slide(pres, WARNING_TITLE);
    add_banner(slide, BANNER_Y, WARNING_TITLE);

    for (i, (heading, description)) in WARNINGS.iter().enumerate() {
        let y = WARNING_TOP + WARNING_PITCH * i as f64;

        slide
            .add_shape(
                Geometry::RoundedRectangle,
                bounds(MARGIN, y, CONTENT_WIDTH, 1.5),
            )
            .fill(palette::WARNING_FILL)
            .line(palette::WARNING_BORDER);
        add_text(
            slide,
            bounds(0.8, y + 0.2, 11.7, 0.5),
            Paragraph::new(*heading)
                .size(22.0)
                .bold()
                .color(palette::WARNING_HEADING),
        );
        add_text(
            slide,
            bounds(0.8, y + 0.7, 11.7, 0.6),
            Paragraph::new(*description)
                .size(18.0)
                .color(palette::GRAY),
        );
    }

    tracing::debug!("added warning slide");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::payload::{Step, ToolCard};
    use crate::ooxml::pptx::{LineStyle, ShapeKind};

    fn assert_background(slide: &Slide, pres: &Presentation) {
        let bg = &slide.shapes()[0];
        assert_eq!(
            bg.bounds(),
            Bounds::new(0, 0, pres.slide_width(), pres.slide_height())
        );
        match bg.kind() {
            ShapeKind::AutoShape {
                geometry,
                fill,
                line,
            } => {
                assert_eq!(*geometry, Geometry::Rectangle);
                assert_eq!(*fill, Some(palette::DARK_BG));
                assert_eq!(*line, LineStyle::NoLine);
            },
            other => panic!("expected background rectangle, got {:?}", other),
        }
    }

    #[test]
    fn test_title_slide_meta_optional() {
        let mut pres = Presentation::widescreen();
        add_title_slide(&mut pres, &TitleSlide::new("T", "S")).unwrap();
        add_title_slide(&mut pres, &TitleSlide::new("T", "S").with_meta("")).unwrap();
        add_title_slide(&mut pres, &TitleSlide::new("T", "S").with_meta("M")).unwrap();

        let counts: Vec<usize> = pres.slides().iter().map(Slide::shape_count).collect();
        assert_eq!(counts, vec![3, 3, 4]);
        for slide in pres.slides() {
            assert_background(slide, &pres);
        }
    }

    #[test]
    fn test_section_slide_texts() {
        let mut pres = Presentation::widescreen();
        add_section_slide(&mut pres, &SectionSlide::new(3, "Video", "30 min")).unwrap();
        let slide = &pres.slides()[0];
        assert_eq!(slide.texts(), vec!["03", "Video", "30 min"]);
        assert_eq!(slide.title().as_deref(), Some("Video"));
    }

    #[test]
    fn test_content_slide_keeps_blank_items() {
        let mut pres = Presentation::widescreen();
        let payload = ContentSlide::new("Heading", ["a", "", "b"]);
        add_content_slide(&mut pres, &payload).unwrap();

        let slide = &pres.slides()[0];
        assert_eq!(slide.texts(), vec!["Heading", "a", "", "b"]);
        assert_eq!(slide.shapes()[1].bounds().y, inches(0.5));
    }

    #[test]
    fn test_step_slide_geometry() {
        let mut pres = Presentation::widescreen();
        let payload = StepSlide::new(
            "Steps",
            (0..3).map(|i| Step::new(format!("h{i}"), format!("d{i}"))),
        );
        add_step_slide(&mut pres, &payload).unwrap();

        let slide = &pres.slides()[0];
        // background, banner, then four shapes per step
        assert_eq!(slide.shape_count(), 2 + 3 * 4);
        let third_disc = &slide.shapes()[2 + 2 * 4];
        assert_eq!(third_disc.bounds().y, inches(1.4 + 1.2 * 2.0));
        assert_eq!(slide.shapes()[3].texts(), vec!["1"]);
    }

    #[test]
    fn test_tool_slide_grid() {
        let mut pres = Presentation::widescreen();
        let cards = std::array::from_fn(|i| ToolCard::new(format!("t{i}"), "d", "u", "g"));
        add_tool_slide(&mut pres, &ToolSlide::from_cards("Tools", cards)).unwrap();

        let slide = &pres.slides()[0];
        assert_eq!(slide.shape_count(), 2 + 4 * 5);
        let card_origins: Vec<(i64, i64)> = slide
            .shapes()
            .iter()
            .filter(|s| {
                matches!(
                    s.kind(),
                    ShapeKind::AutoShape {
                        geometry: Geometry::RoundedRectangle,
                        ..
                    }
                )
            })
            .map(|s| (s.bounds().x, s.bounds().y))
            .collect();
        assert_eq!(
            card_origins,
            vec![
                (inches(0.5), inches(1.4)),
                (inches(6.5), inches(1.4)),
                (inches(0.5), inches(4.2)),
                (inches(6.5), inches(4.2)),
            ]
        );
    }

    #[test]
    fn test_table_slide_dimensions() {
        let mut pres = Presentation::widescreen();
        let payload = TableSlide::new(
            "Table",
            vec!["a".into(), "b".into(), "c".into()],
            vec![vec!["1".into(), "2".into(), "3".into()]; 5],
        )
        .unwrap();
        add_table_slide(&mut pres, &payload).unwrap();

        let table = pres.slides()[0].shapes()[2].table().unwrap();
        assert_eq!(table.row_count(), 6);
        assert_eq!(table.column_count(), 3);
        assert!(table.column_widths().iter().all(|&w| w == inches(12.333 / 3.0)));
        assert!(table.row_heights().iter().all(|&h| h == inches(5.0) / 6));

        let header = table.cell(0, 0).unwrap();
        assert_eq!(header.fill, Some(palette::PURPLE));
        assert!(header.format.bold);
        assert_eq!(table.cell(5, 2).unwrap().fill, Some(palette::TABLE_ROW_FILL));
    }

    #[test]
    fn test_ragged_table_adds_nothing() {
        let mut pres = Presentation::widescreen();
        let payload = TableSlide {
            title: "Bad".into(),
            headers: vec!["a".into(), "b".into()],
            rows: vec![vec!["1".into()]],
        };
        assert!(add_table_slide(&mut pres, &payload).is_err());
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_warning_slide_panels() {
        let mut pres = Presentation::widescreen();
        add_warning_slide(&mut pres).unwrap();

        let slide = &pres.slides()[0];
        assert_eq!(slide.title().as_deref(), Some(WARNING_TITLE));
        let panel_tops: Vec<i64> = slide
            .shapes()
            .iter()
            .filter(|s| matches!(s.kind(), ShapeKind::AutoShape { line: LineStyle::Solid(_), .. }))
            .map(|s| s.bounds().y)
            .collect();
        let expected: Vec<i64> = (0..3)
            .map(|i| inches(WARNING_TOP + WARNING_PITCH * i as f64))
            .collect();
        assert_eq!(panel_tops, expected);
    }
}
