//! Package writer for OPC packages.
//!
//! Serializes a set of parts into a ZIP archive, writing `[Content_Types].xml`
//! first, then the package relationships, then every part followed by its
//! own relationships.

use crate::common::xml::escape_xml;
use crate::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;

/// A part queued for writing.
#[derive(Debug)]
pub struct Part {
    partname: PackURI,
    content_type: &'static str,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn new(partname: PackURI, content_type: &'static str, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type,
            blob,
            rels: Relationships::new(),
        }
    }

    /// Attach the part's outgoing relationships.
    pub fn with_rels(mut self, rels: Relationships) -> Self {
        self.rels = rels;
        self
    }

    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    pub fn content_type(&self) -> &str {
        self.content_type
    }
}

/// Package writer that serializes parts to a ZIP file.
///
/// # Example
///
/// ```
/// use deckwright::ooxml::opc::constants::content_type as ct;
/// use deckwright::ooxml::opc::pkgwriter::{PackageWriter, Part};
/// use deckwright::ooxml::opc::PackURI;
///
/// let mut writer = PackageWriter::new();
/// writer.add_part(Part::new(
///     PackURI::new("/docProps/app.xml")?,
///     ct::OFC_EXTENDED_PROPERTIES,
///     b"<Properties/>".to_vec(),
/// ));
/// let bytes = writer.to_bytes()?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok::<(), deckwright::DeckError>(())
/// ```
#[derive(Debug, Default)]
pub struct PackageWriter {
    pkg_rels: Relationships,
    parts: Vec<Part>,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Package-level relationships (`_rels/.rels`).
    pub fn pkg_rels_mut(&mut self) -> &mut Relationships {
        &mut self.pkg_rels
    }

    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        self.write_content_types(&mut phys_writer)?;
        self.write_pkg_rels(&mut phys_writer)?;
        self.write_parts(&mut phys_writer)?;

        phys_writer.finish()
    }

    fn write_content_types(&self, phys_writer: &mut PhysPkgWriter) -> Result<()> {
        let cti = ContentTypesItem::from_parts(&self.parts);
        phys_writer.write(&PackURI::new(CONTENT_TYPES_URI)?, cti.to_xml().as_bytes())
    }

    fn write_pkg_rels(&self, phys_writer: &mut PhysPkgWriter) -> Result<()> {
        let rels_uri = PackURI::new(PACKAGE_URI)?.rels_uri()?;
        phys_writer.write(&rels_uri, self.pkg_rels.to_xml().as_bytes())
    }

    fn write_parts(&self, phys_writer: &mut PhysPkgWriter) -> Result<()> {
        for part in &self.parts {
            phys_writer.write(&part.partname, &part.blob)?;

            if !part.rels.is_empty() {
                let rels_uri = part.partname.rels_uri()?;
                phys_writer.write(&rels_uri, part.rels.to_xml().as_bytes())?;
            }
        }

        Ok(())
    }
}

/// Builder for `[Content_Types].xml`.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,
    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_parts(parts: &[Part]) -> Self {
        let mut cti = Self::new();
        for part in parts {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext();
        if self.defaults.get(ext).map(String::as_str) == Some(content_type) {
            return;
        }
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::phys_pkg::PhysPkgReader;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type(
            &PackURI::new("/ppt/slides/slide1.xml").unwrap(),
            ct::PML_SLIDE,
        );

        let xml = cti.to_xml();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
    }

    #[test]
    fn test_generic_xml_uses_default() {
        let mut cti = ContentTypesItem::new();
        cti.add_content_type(&PackURI::new("/custom.xml").unwrap(), ct::XML);
        assert!(cti.overrides.is_empty());
    }

    #[test]
    fn test_parts_and_rels_are_written() {
        let mut writer = PackageWriter::new();
        writer
            .pkg_rels_mut()
            .relate_to("ppt/presentation.xml", "urn:test");

        let mut rels = Relationships::new();
        rels.relate_to("slides/slide1.xml", "urn:test");
        writer.add_part(
            Part::new(
                PackURI::new("/ppt/presentation.xml").unwrap(),
                ct::PML_PRESENTATION_MAIN,
                b"<p:presentation/>".to_vec(),
            )
            .with_rels(rels),
        );

        let bytes = writer.to_bytes().unwrap();
        let reader = PhysPkgReader::from_bytes(bytes).unwrap();
        let names = reader.member_names();

        assert_eq!(names[0], "[Content_Types].xml");
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert!(names.contains(&"ppt/presentation.xml".to_string()));
        assert!(names.contains(&"ppt/_rels/presentation.xml.rels".to_string()));
    }
}
