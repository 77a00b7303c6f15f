use deckwright::common::inches;
use deckwright::config::DeckConfig;
use deckwright::deck::{
    ContentSlide, DeckSlide, SectionSlide, Step, StepSlide, TableSlide, TitleSlide, ToolCard,
    ToolSlide, WARNING_TITLE, WARNINGS, add_content_slide, add_section_slide, add_step_slide,
    add_table_slide, add_title_slide, add_tool_slide, add_warning_slide, build_course_deck,
    course_slides,
};
use deckwright::ooxml::pptx::{Geometry, PackageReader, Presentation, ShapeKind};
use deckwright::DeckError;
use proptest::prelude::*;
use std::io::Read;

fn course_deck() -> Presentation {
    build_course_deck(&DeckConfig::default()).unwrap()
}

fn card(i: usize) -> ToolCard {
    ToolCard::new(format!("tool {i}"), "desc", format!("tool{i}.example"), "tag")
}

/// Every heading of the course, in presentation order.
const COURSE_HEADINGS: [&str; 21] = [
    "🤖 AI 助力公務效率提升",
    "📋 課程大綱",
    "Google Gemini",
    "什麼是 Google Gemini？",
    "實作步驟：開始使用 Gemini",
    "實作：計劃構思",
    "提示詞技巧",
    "AI 生成圖片與表格",
    "圖片生成工具推薦",
    "實作：用 Canva 製作活動海報",
    "Gamma：AI 自動生成簡報",
    "AI 生成影片與字幕",
    "AI 影片生成工具",
    "字幕生成工具",
    "實作：用剪映自動上字幕",
    "AI 整理會議記錄",
    "會議記錄工具",
    "本地方案（資安優先）",
    "📌 工具速查表",
    WARNING_TITLE,
    "🙋 Q&A 時間",
];

/// Section dividers: slide index and ordinal.
const SECTION_ORDINALS: [(usize, &str); 4] = [(2, "01"), (7, "02"), (11, "03"), (15, "04")];

#[test]
fn test_course_script_order() {
    let headings: Vec<String> = course_slides()
        .unwrap()
        .iter()
        .map(|s| s.heading().to_string())
        .collect();
    assert_eq!(headings, COURSE_HEADINGS);
}

#[test]
fn test_course_slide_titles_in_order() {
    let pres = course_deck();
    assert_eq!(pres.slide_count(), 21);

    let titles: Vec<String> = pres
        .slides()
        .iter()
        .map(|s| s.title().unwrap_or_default())
        .collect();
    assert_eq!(titles, COURSE_HEADINGS);
}

#[test]
fn test_course_headings_read_back_in_order() {
    let bytes = course_deck().to_bytes().unwrap();
    let texts = PackageReader::from_bytes(bytes).unwrap().slide_texts().unwrap();
    assert_eq!(texts.len(), COURSE_HEADINGS.len());

    for (index, (slide, heading)) in texts.iter().zip(COURSE_HEADINGS).enumerate() {
        match SECTION_ORDINALS.iter().find(|(i, _)| *i == index) {
            Some((_, ordinal)) => {
                assert_eq!(slide[0], *ordinal, "slide {}", index + 1);
                assert_eq!(slide[1], heading, "slide {}", index + 1);
            },
            None => assert_eq!(slide[0], heading, "slide {}", index + 1),
        }
    }
}

#[test]
fn test_saved_deck_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("course.pptx");
    let pres = course_deck();
    pres.save(&path).unwrap();

    let mut reader = PackageReader::open(&path).unwrap();
    assert_eq!(reader.slide_count().unwrap(), 21);
    assert_eq!(
        reader.slide_size().unwrap(),
        (inches(13.333), inches(7.5))
    );

    let texts = reader.slide_texts().unwrap();
    let expected: Vec<Vec<String>> = pres.slides().iter().map(|s| s.texts()).collect();
    assert_eq!(texts, expected);

    // Outline table, row by row
    assert!(texts[1].contains(&"Q&A + 總結".to_string()));
    assert!(texts[8].contains(&"bing.com/create".to_string()));
}

#[test]
fn test_two_builds_have_identical_text() {
    let first = course_deck().to_bytes().unwrap();
    let second = course_deck().to_bytes().unwrap();

    let first = PackageReader::from_bytes(first).unwrap().slide_texts().unwrap();
    let second = PackageReader::from_bytes(second).unwrap().slide_texts().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_package_contains_required_parts() {
    let bytes = course_deck().to_bytes().unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();

    for name in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/theme/theme1.xml",
        "ppt/presProps.xml",
        "ppt/viewProps.xml",
        "ppt/tableStyles.xml",
        "ppt/slides/slide1.xml",
        "ppt/slides/slide21.xml",
        "ppt/slides/_rels/slide21.xml.rels",
    ] {
        assert!(archive.by_name(name).is_ok(), "missing part {name}");
    }
    assert!(archive.by_name("ppt/slides/slide22.xml").is_err());

    let mut content_types = String::new();
    archive
        .by_name("[Content_Types].xml")
        .unwrap()
        .read_to_string(&mut content_types)
        .unwrap();
    assert_eq!(content_types.matches("/ppt/slides/slide").count(), 21);

    let mut app = String::new();
    archive
        .by_name("docProps/app.xml")
        .unwrap()
        .read_to_string(&mut app)
        .unwrap();
    for heading in COURSE_HEADINGS {
        let escaped = heading.replace('&', "&amp;");
        assert!(app.contains(&format!("<vt:lpstr>{escaped}</vt:lpstr>")), "{heading}");
    }
}

#[test]
fn test_each_template_adds_one_slide() {
    let mut pres = Presentation::widescreen();
    let before_title = {
        add_title_slide(&mut pres, &TitleSlide::new("Cover", "Sub")).unwrap();
        pres.slides()[0].clone()
    };

    add_section_slide(&mut pres, &SectionSlide::new(1, "Part", "10 min")).unwrap();
    assert_eq!(pres.slide_count(), 2);
    add_content_slide(&mut pres, &ContentSlide::new("Body", ["x"])).unwrap();
    assert_eq!(pres.slide_count(), 3);
    add_step_slide(&mut pres, &StepSlide::new("Steps", [Step::new("a", "b")])).unwrap();
    assert_eq!(pres.slide_count(), 4);
    add_tool_slide(
        &mut pres,
        &ToolSlide::from_cards("Tools", std::array::from_fn(card)),
    )
    .unwrap();
    assert_eq!(pres.slide_count(), 5);
    let table = TableSlide::new("T", vec!["h".into()], vec![vec!["v".into()]]).unwrap();
    add_table_slide(&mut pres, &table).unwrap();
    assert_eq!(pres.slide_count(), 6);
    add_warning_slide(&mut pres).unwrap();
    assert_eq!(pres.slide_count(), 7);

    assert_eq!(pres.slides()[0], before_title);
}

#[test]
fn test_every_slide_starts_with_background() {
    let pres = course_deck();
    for slide in pres.slides() {
        let bg = &slide.shapes()[0];
        assert_eq!(bg.bounds().width, pres.slide_width());
        assert_eq!(bg.bounds().height, pres.slide_height());
        assert!(matches!(
            bg.kind(),
            ShapeKind::AutoShape {
                geometry: Geometry::Rectangle,
                ..
            }
        ));
    }
}

#[test]
fn test_outline_table_dimensions() {
    let pres = course_deck();
    let table = pres.slides()[1]
        .shapes()
        .iter()
        .find_map(|s| s.table())
        .unwrap();
    assert_eq!(table.row_count(), 6);
    assert_eq!(table.column_count(), 3);
    for &width in table.column_widths() {
        assert_eq!(width, inches(12.333 / 3.0));
    }
    assert_eq!(table.cell(5, 1).unwrap().text, "Q&A + 總結");
}

#[test]
fn test_tool_slide_ignores_fifth_card() {
    let slide = ToolSlide::new("Tools", (0..5).map(card).collect()).unwrap();
    let mut pres = Presentation::widescreen();
    add_tool_slide(&mut pres, &slide).unwrap();

    let texts = pres.slides()[0].texts();
    assert!(texts.contains(&"tool 3".to_string()));
    assert!(!texts.contains(&"tool 4".to_string()));
}

#[test]
fn test_rejected_payloads_leave_deck_unchanged() {
    assert!(matches!(
        ToolSlide::new("Tools", (0..3).map(card).collect()),
        Err(DeckError::ToolCount { expected: 4, got: 3 })
    ));

    let mut pres = Presentation::widescreen();
    let ragged = DeckSlide::Table(TableSlide {
        title: "Bad".into(),
        headers: vec!["a".into(), "b".into()],
        rows: vec![vec!["1".into(), "2".into()], vec!["3".into()]],
    });
    assert!(matches!(
        ragged.render(&mut pres),
        Err(DeckError::RaggedTable { row: 2, .. })
    ));
    assert_eq!(pres.slide_count(), 0);
}

#[test]
fn test_warning_slide_content() {
    let mut pres = Presentation::widescreen();
    add_warning_slide(&mut pres).unwrap();

    let texts = pres.slides()[0].texts();
    assert_eq!(texts[0], WARNING_TITLE);
    for (heading, description) in WARNINGS {
        assert!(texts.iter().any(|t| t == heading));
        assert!(texts.iter().any(|t| t == description));
    }
}

#[test]
fn test_special_characters_survive_write_and_read() {
    let mut pres = Presentation::widescreen();
    let items = ["a & b", "<tag>", r#"say "hi""#, "it's"];
    add_content_slide(&mut pres, &ContentSlide::new("Q&A <1>", items)).unwrap();

    let mut reader = PackageReader::from_bytes(pres.to_bytes().unwrap()).unwrap();
    let texts = reader.slide_texts().unwrap();
    assert_eq!(texts[0], vec!["Q&A <1>", "a & b", "<tag>", r#"say "hi""#, "it's"]);
}

proptest! {
    #[test]
    fn test_step_rows_are_evenly_spaced(count in 1usize..8) {
        let mut pres = Presentation::widescreen();
        let steps = (0..count).map(|i| Step::new(format!("h{i}"), format!("d{i}")));
        add_step_slide(&mut pres, &StepSlide::new("Steps", steps)).unwrap();

        let discs: Vec<i64> = pres.slides()[0]
            .shapes()
            .iter()
            .filter(|s| matches!(s.kind(), ShapeKind::AutoShape { geometry: Geometry::Ellipse, .. }))
            .map(|s| s.bounds().y)
            .collect();
        prop_assert_eq!(discs.len(), count);
        for (i, y) in discs.iter().enumerate() {
            prop_assert_eq!(*y, inches(1.4 + 1.2 * i as f64));
        }
    }

    #[test]
    fn test_table_columns_split_width(cols in 1usize..8, rows in 0usize..8) {
        let headers: Vec<String> = (0..cols).map(|c| format!("h{c}")).collect();
        let body: Vec<Vec<String>> = (0..rows)
            .map(|r| (0..cols).map(|c| format!("{r},{c}")).collect())
            .collect();
        let mut pres = Presentation::widescreen();
        add_table_slide(&mut pres, &TableSlide::new("T", headers, body).unwrap()).unwrap();

        let table = pres.slides()[0].shapes().iter().find_map(|s| s.table()).unwrap();
        prop_assert_eq!(table.row_count(), rows + 1);
        prop_assert_eq!(table.column_count(), cols);
        for &w in table.column_widths() {
            prop_assert_eq!(w, inches(12.333 / cols as f64));
        }
    }
}
