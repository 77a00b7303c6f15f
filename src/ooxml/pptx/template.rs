//! Fixed package parts for new presentations.
//!
//! A new deck uses one slide master with a single blank layout and a plain
//! Office theme; every slide draws its own background. The static parts live
//! under `resources/` and are embedded at compile time. Document property
//! parts depend on the deck and are generated here.

use crate::common::xml::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};

macro_rules! resource {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/", $path))
    };
}

/// Slide master with no placeholders and one layout (`rId1`).
pub fn default_slide_master_xml() -> &'static str {
    resource!("slideMasters/slideMaster1.xml")
}

/// Blank slide layout.
pub fn blank_slide_layout_xml() -> &'static str {
    resource!("slideLayouts/slideLayout1.xml")
}

pub fn default_theme_xml() -> &'static str {
    resource!("theme/theme1.xml")
}

pub fn default_table_styles_xml() -> &'static str {
    resource!("tableStyles.xml")
}

pub fn default_view_props_xml() -> &'static str {
    resource!("viewProps.xml")
}

pub fn default_pres_props_xml() -> &'static str {
    resource!("presProps.xml")
}

/// Core properties (`docProps/core.xml`).
pub fn core_props_xml(title: &str, creator: &str, timestamp: DateTime<Utc>) -> String {
    let stamp = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut xml = String::with_capacity(1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(creator)));
    xml.push_str(&format!(
        "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
        escape_xml(creator)
    ));
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str(&format!(
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
        stamp
    ));
    xml.push_str(&format!(
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
        stamp
    ));
    xml.push_str("</cp:coreProperties>");

    xml
}

/// Extended properties (`docProps/app.xml`): slide count and slide titles.
pub fn app_props_xml(slide_titles: &[String]) -> String {
    let mut xml = String::with_capacity(512 + slide_titles.len() * 64);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
    ));
    xml.push_str("<Application>deckwright</Application>");
    xml.push_str("<PresentationFormat>Widescreen</PresentationFormat>");
    xml.push_str(&format!("<Slides>{}</Slides>", slide_titles.len()));
    xml.push_str(&format!(
        r#"<TitlesOfParts><vt:vector size="{}" baseType="lpstr">"#,
        slide_titles.len()
    ));
    for title in slide_titles {
        xml.push_str(&format!("<vt:lpstr>{}</vt:lpstr>", escape_xml(title)));
    }
    xml.push_str("</vt:vector></TitlesOfParts>");
    xml.push_str("</Properties>");

    xml
}
