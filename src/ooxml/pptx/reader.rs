/// Reading written presentations back.
///
/// Only what is needed to check a deck after it is written: the slide order,
/// the canvas size, and the paragraph texts of each slide.
use crate::common::xml::unescape_xml;
use crate::error::{DeckError, Result};
use crate::ooxml::opc::PackURI;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::packuri::PACKAGE_URI;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::path::Path;

/// A relationship entry as read from a `.rels` part.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RelEntry {
    r_id: String,
    reltype: String,
    target: String,
}

/// Reader for `.pptx` packages.
///
/// # Examples
///
/// ```rust,no_run
/// use deckwright::ooxml::pptx::PackageReader;
///
/// let mut reader = PackageReader::open("deck.pptx")?;
/// for (index, texts) in reader.slide_texts()?.iter().enumerate() {
///     println!("slide {}: {:?}", index + 1, texts);
/// }
/// # Ok::<(), deckwright::DeckError>(())
/// ```
pub struct PackageReader {
    phys: PhysPkgReader,
}

impl PackageReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self {
            phys: PhysPkgReader::from_bytes(data)?,
        })
    }

    /// Part name of the main presentation part.
    fn presentation_uri(&mut self) -> Result<PackURI> {
        let package_uri = PackURI::new(PACKAGE_URI)?;
        let rels = self.rels_for(&package_uri)?;
        let main = rels
            .into_iter()
            .find(|rel| rel.reltype == rt::OFFICE_DOCUMENT)
            .ok_or_else(|| DeckError::PartNotFound("main presentation part".to_string()))?;
        PackURI::from_rel_ref(package_uri.base_uri(), &main.target)
    }

    fn rels_for(&mut self, source: &PackURI) -> Result<Vec<RelEntry>> {
        match self.phys.rels_xml_for(source)? {
            Some(xml) => parse_rels(&xml),
            None => Ok(Vec::new()),
        }
    }

    /// Slide part names in presentation order (`p:sldIdLst`).
    pub fn slide_partnames(&mut self) -> Result<Vec<PackURI>> {
        let pres_uri = self.presentation_uri()?;
        let pres_xml = self.phys.blob_for(&pres_uri)?;
        let rels = self.rels_for(&pres_uri)?;

        parse_slide_rel_ids(&pres_xml)?
            .into_iter()
            .map(|r_id| {
                let rel = rels
                    .iter()
                    .find(|rel| rel.r_id == r_id && rel.reltype == rt::SLIDE)
                    .ok_or_else(|| DeckError::PartNotFound(format!("slide relationship {r_id}")))?;
                PackURI::from_rel_ref(pres_uri.base_uri(), &rel.target)
            })
            .collect()
    }

    pub fn slide_count(&mut self) -> Result<usize> {
        Ok(self.slide_partnames()?.len())
    }

    /// Canvas size `(cx, cy)` in EMUs from `p:sldSz`.
    pub fn slide_size(&mut self) -> Result<(i64, i64)> {
        let pres_uri = self.presentation_uri()?;
        let xml = self.phys.blob_for(&pres_uri)?;

        let mut reader = Reader::from_reader(&xml[..]);
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"sldSz" => {
                    let mut cx = None;
                    let mut cy = None;
                    for attr in e.attributes() {
                        let attr = attr?;
                        let value = std::str::from_utf8(&attr.value)
                            .map_err(|e| DeckError::Xml(e.to_string()))?;
                        match attr.key.as_ref() {
                            b"cx" => cx = value.parse::<i64>().ok(),
                            b"cy" => cy = value.parse::<i64>().ok(),
                            _ => {},
                        }
                    }
                    return cx
                        .zip(cy)
                        .ok_or_else(|| DeckError::Xml("malformed p:sldSz".to_string()));
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Err(DeckError::Xml("presentation has no p:sldSz".to_string()))
    }

    /// Paragraph texts of every slide, in presentation order.
    pub fn slide_texts(&mut self) -> Result<Vec<Vec<String>>> {
        let partnames = self.slide_partnames()?;
        let mut slides = Vec::with_capacity(partnames.len());
        for partname in &partnames {
            let xml = self.phys.blob_for(partname)?;
            slides.push(paragraph_texts(&xml)?);
        }
        Ok(slides)
    }
}

fn parse_rels(xml: &[u8]) -> Result<Vec<RelEntry>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut rels = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"Relationship" => {
                let mut entry = RelEntry {
                    r_id: String::new(),
                    reltype: String::new(),
                    target: String::new(),
                };
                for attr in e.attributes() {
                    let attr = attr?;
                    let value = std::str::from_utf8(&attr.value)
                        .map_err(|e| DeckError::Xml(e.to_string()))?;
                    let value = unescape_xml(value);
                    match attr.key.as_ref() {
                        b"Id" => entry.r_id = value,
                        b"Type" => entry.reltype = value,
                        b"Target" => entry.target = value,
                        _ => {},
                    }
                }
                rels.push(entry);
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(rels)
}

fn parse_slide_rel_ids(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut ids = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"sldId" => {
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.as_ref() == b"r:id" {
                        let value = std::str::from_utf8(&attr.value)
                            .map_err(|e| DeckError::Xml(e.to_string()))?;
                        ids.push(value.to_string());
                    }
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(ids)
}

/// Collect the text of every `a:p` in a part, in document order.
fn paragraph_texts(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    // Decoded text of the paragraph being read
    let mut current: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => current = Some(String::new()),
                b"t" => in_text = true,
                _ => {},
            },
            Event::Empty(e) if e.local_name().as_ref() == b"p" => {
                paragraphs.push(String::new());
            },
            Event::Text(e) if in_text => {
                let text = std::str::from_utf8(&e).map_err(|e| DeckError::Xml(e.to_string()))?;
                if let Some(ref mut p) = current {
                    p.push_str(text);
                }
            },
            Event::GeneralRef(e) if in_text => {
                let decoded = match e.resolve_char_ref()? {
                    Some(ch) => ch.to_string(),
                    None => {
                        let name =
                            std::str::from_utf8(&e).map_err(|e| DeckError::Xml(e.to_string()))?;
                        unescape_xml(&format!("&{};", name))
                    },
                };
                if let Some(ref mut p) = current {
                    p.push_str(&decoded);
                }
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(p) = current.take() {
                        paragraphs.push(p);
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(paragraphs)
}
