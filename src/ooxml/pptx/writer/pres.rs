/// Presentation writer for PPTX.
use crate::common::unit::{Emu, inches};
use crate::error::{DeckError, Result};
use crate::ooxml::opc::PackURI;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::pkgwriter::{PackageWriter, Part};
use crate::ooxml::opc::rel::Relationships;
use crate::ooxml::pptx::template;
use chrono::Utc;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::slide::Slide;

/// Author written to the core properties.
const CREATOR: &str = "deckwright";

/// First slide ID; PowerPoint requires IDs of 256 and up.
const FIRST_SLIDE_ID: u32 = 256;

/// An in-memory PowerPoint presentation.
///
/// Slides are appended in order and serialized together by [`save`] or
/// [`to_bytes`].
///
/// [`save`]: Presentation::save
/// [`to_bytes`]: Presentation::to_bytes
#[derive(Debug, Clone)]
pub struct Presentation {
    slides: Vec<Slide>,
    /// Slide width in EMUs
    slide_width: Emu,
    /// Slide height in EMUs
    slide_height: Emu,
    title: String,
}

impl Presentation {
    /// Create an empty presentation with the given canvas size in EMUs.
    pub fn new(slide_width: Emu, slide_height: Emu) -> Self {
        Self {
            slides: Vec::new(),
            slide_width,
            slide_height,
            title: String::new(),
        }
    }

    /// Create an empty 13.333" x 7.5" (16:9) presentation.
    pub fn widescreen() -> Self {
        Self::new(inches(13.333), inches(7.5))
    }

    /// Append a new, empty slide and return it.
    pub fn add_slide(&mut self) -> &mut Slide {
        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(Slide::new(slide_id));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }

    /// Set the document title (core properties).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Write the presentation to a `.pptx` file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        tracing::info!(
            path = %path.display(),
            slides = self.slides.len(),
            bytes = bytes.len(),
            "presentation saved"
        );
        Ok(())
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = PackageWriter::new();

        let pkg_rels = writer.pkg_rels_mut();
        pkg_rels.relate_to("ppt/presentation.xml", rt::OFFICE_DOCUMENT);
        pkg_rels.relate_to("docProps/core.xml", rt::CORE_PROPERTIES);
        pkg_rels.relate_to("docProps/app.xml", rt::EXTENDED_PROPERTIES);

        // Presentation relationships; slide IDs are collected for sldIdLst
        let mut pres_rels = Relationships::new();
        pres_rels.relate_to("slideMasters/slideMaster1.xml", rt::SLIDE_MASTER);
        pres_rels.relate_to("presProps.xml", rt::PRES_PROPS);
        pres_rels.relate_to("viewProps.xml", rt::VIEW_PROPS);
        pres_rels.relate_to("theme/theme1.xml", rt::THEME);
        pres_rels.relate_to("tableStyles.xml", rt::TABLE_STYLES);
        let slide_rel_ids: Vec<String> = (1..=self.slides.len())
            .map(|n| pres_rels.relate_to(format!("slides/slide{}.xml", n), rt::SLIDE))
            .collect();

        let pres_xml = self.generate_presentation_xml(&slide_rel_ids)?;
        writer.add_part(
            Part::new(
                PackURI::new("/ppt/presentation.xml")?,
                ct::PML_PRESENTATION_MAIN,
                pres_xml.into_bytes(),
            )
            .with_rels(pres_rels),
        );

        let mut master_rels = Relationships::new();
        master_rels.relate_to("../slideLayouts/slideLayout1.xml", rt::SLIDE_LAYOUT);
        master_rels.relate_to("../theme/theme1.xml", rt::THEME);
        writer.add_part(
            Part::new(
                PackURI::new("/ppt/slideMasters/slideMaster1.xml")?,
                ct::PML_SLIDE_MASTER,
                template::default_slide_master_xml().as_bytes().to_vec(),
            )
            .with_rels(master_rels),
        );

        let mut layout_rels = Relationships::new();
        layout_rels.relate_to("../slideMasters/slideMaster1.xml", rt::SLIDE_MASTER);
        writer.add_part(
            Part::new(
                PackURI::new("/ppt/slideLayouts/slideLayout1.xml")?,
                ct::PML_SLIDE_LAYOUT,
                template::blank_slide_layout_xml().as_bytes().to_vec(),
            )
            .with_rels(layout_rels),
        );

        for (index, slide) in self.slides.iter().enumerate() {
            let mut slide_rels = Relationships::new();
            slide_rels.relate_to("../slideLayouts/slideLayout1.xml", rt::SLIDE_LAYOUT);
            writer.add_part(
                Part::new(
                    PackURI::new(format!("/ppt/slides/slide{}.xml", index + 1))?,
                    ct::PML_SLIDE,
                    slide.to_xml()?.into_bytes(),
                )
                .with_rels(slide_rels),
            );
        }

        let static_parts = [
            ("/ppt/theme/theme1.xml", ct::OFC_THEME, template::default_theme_xml()),
            ("/ppt/presProps.xml", ct::PML_PRES_PROPS, template::default_pres_props_xml()),
            ("/ppt/viewProps.xml", ct::PML_VIEW_PROPS, template::default_view_props_xml()),
            (
                "/ppt/tableStyles.xml",
                ct::PML_TABLE_STYLES,
                template::default_table_styles_xml(),
            ),
        ];
        for (partname, content_type, xml) in static_parts {
            writer.add_part(Part::new(
                PackURI::new(partname)?,
                content_type,
                xml.as_bytes().to_vec(),
            ));
        }

        let slide_titles: Vec<String> = self
            .slides
            .iter()
            .map(|s| s.title().unwrap_or_default())
            .collect();
        writer.add_part(Part::new(
            PackURI::new("/docProps/core.xml")?,
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(&self.title, CREATOR, Utc::now()).into_bytes(),
        ));
        writer.add_part(Part::new(
            PackURI::new("/docProps/app.xml")?,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(&slide_titles).into_bytes(),
        ));

        tracing::debug!(parts = writer.parts().len(), "serializing package");
        writer.to_bytes()
    }

    /// Generate presentation.xml content.
    ///
    /// `slide_rel_ids` holds the relationship ID of each slide, in order.
    pub(crate) fn generate_presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(DeckError::Xml(format!(
                "expected {} slide relationship IDs, got {}",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )
        .map_err(|e| DeckError::Xml(e.to_string()))?;

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )
                .map_err(|e| DeckError::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )
        .map_err(|e| DeckError::Xml(e.to_string()))?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::widescreen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::phys_pkg::PhysPkgReader;
    use crate::ooxml::pptx::format::{Bounds, Paragraph};

    #[test]
    fn test_create_presentation() {
        let pres = Presentation::widescreen();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 12_191_695);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_slide_ids() {
        let mut pres = Presentation::widescreen();
        assert_eq!(pres.add_slide().slide_id(), 256);
        assert_eq!(pres.add_slide().slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = Presentation::widescreen();
        pres.add_slide();
        pres.add_slide();

        let xml = pres
            .generate_presentation_xml(&["rId6".to_string(), "rId7".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId6"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId7"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));

        assert!(pres.generate_presentation_xml(&[]).is_err());
    }

    #[test]
    fn test_package_parts() {
        let mut pres = Presentation::widescreen();
        pres.set_title("Deck");
        pres.add_slide()
            .add_text_box(Bounds::new(0, 0, 100, 100))
            .paragraph(Paragraph::new("Hello"));

        let bytes = pres.to_bytes().unwrap();
        let reader = PhysPkgReader::from_bytes(bytes).unwrap();
        let names = reader.member_names();

        for required in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(names.iter().any(|n| n == required), "missing {required}");
        }
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("deck.pptx");

        let mut pres = Presentation::widescreen();
        pres.add_slide();
        assert!(matches!(pres.save(&path), Err(DeckError::Io(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_app_props_use_slide_titles() {
        let mut pres = Presentation::widescreen();
        let slide = pres.add_slide();
        slide
            .add_text_box(Bounds::new(0, 0, 100, 100))
            .paragraph(Paragraph::new("02"));
        slide.set_title("Images");

        let mut reader = PhysPkgReader::from_bytes(pres.to_bytes().unwrap()).unwrap();
        let app = reader
            .blob_for(&PackURI::new("/docProps/app.xml").unwrap())
            .unwrap();
        let app = String::from_utf8(app).unwrap();
        assert!(app.contains("<vt:lpstr>Images</vt:lpstr>"));
        assert!(!app.contains("<vt:lpstr>02</vt:lpstr>"));
    }
}
