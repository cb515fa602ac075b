//! Reading generated presentations back.
//!
//! [`PresentationSummary`] walks a `.pptx` the way PowerPoint does (package
//! relationships, presentation part, `p:sldIdLst` order, slide parts) and
//! collects the text of every slide and its speaker notes.

use crate::common::style::RGBColor;
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::packuri::PACKAGE_URI;
use crate::ooxml::opc::{PackURI, PhysPkgReader, Relationships};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Text content of one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSummary {
    /// 1-based position in the deck
    pub number: usize,
    pub partname: String,
    /// First paragraph of the first shape that carries text
    pub title: Option<String>,
    /// Every non-empty paragraph, in document order; line breaks as `\n`
    pub texts: Vec<String>,
    pub shape_count: usize,
    /// Solid background color set on the slide itself
    pub background: Option<RGBColor>,
    /// Text of the notes body placeholder
    pub notes: Option<String>,
}

/// Slide size and per-slide text of a presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationSummary {
    /// EMUs
    pub slide_width: i64,
    /// EMUs
    pub slide_height: i64,
    pub slides: Vec<SlideSummary>,
}

impl PresentationSummary {
    /// Read a `.pptx` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let phys = PhysPkgReader::open(path)?;
        Self::from_phys_reader(&phys)
    }

    /// Read a `.pptx` held in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let phys = PhysPkgReader::from_bytes(bytes)?;
        Self::from_phys_reader(&phys)
    }

    fn from_phys_reader(phys: &PhysPkgReader) -> Result<Self> {
        let package_uri = PackURI::new(PACKAGE_URI).map_err(OoxmlError::InvalidFormat)?;
        let pkg_rels_xml = phys
            .rels_xml_for(&package_uri)?
            .ok_or_else(|| OoxmlError::PartNotFound("/_rels/.rels".to_string()))?;
        let pkg_rels = Relationships::from_xml(PACKAGE_URI, &pkg_rels_xml)?;

        let pres_uri = pkg_rels
            .part_with_reltype(rt::OFFICE_DOCUMENT)
            .and_then(|rel| rel.target_partname())
            .map_err(|e| OoxmlError::PartNotFound(format!("main presentation part: {}", e)))?;

        let content_type = override_content_type(&phys.content_types_xml()?, pres_uri.as_str())?;
        if content_type.as_deref() != Some(ct::PML_PRESENTATION_MAIN) {
            return Err(OoxmlError::InvalidContentType {
                expected: ct::PML_PRESENTATION_MAIN.to_string(),
                got: content_type.unwrap_or_else(|| "none".to_string()),
            });
        }

        let pres_xml = read_part(phys, &pres_uri)?;
        let pres_rels = read_rels(phys, &pres_uri)?;
        let layout = parse_presentation(&pres_xml)?;

        let mut slides = Vec::with_capacity(layout.slide_rel_ids.len());
        for (index, r_id) in layout.slide_rel_ids.iter().enumerate() {
            let rel = pres_rels.get(r_id).ok_or_else(|| {
                OoxmlError::PartNotFound(format!("slide relationship {} in {}", r_id, pres_uri))
            })?;
            let slide_uri = rel.target_partname()?;
            slides.push(read_slide(phys, index + 1, &slide_uri)?);
        }

        tracing::debug!(slides = slides.len(), "read presentation");

        Ok(Self {
            slide_width: layout.width,
            slide_height: layout.height,
            slides,
        })
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide titles in order; untitled slides yield an empty string.
    pub fn titles(&self) -> Vec<&str> {
        self.slides
            .iter()
            .map(|s| s.title.as_deref().unwrap_or(""))
            .collect()
    }
}

fn read_part(phys: &PhysPkgReader, uri: &PackURI) -> Result<Vec<u8>> {
    phys.blob_for(uri).map_err(|_| OoxmlError::PartNotFound(uri.to_string()))
}

fn read_rels(phys: &PhysPkgReader, uri: &PackURI) -> Result<Relationships> {
    match phys.rels_xml_for(uri)? {
        Some(xml) => Ok(Relationships::from_xml(uri.base_uri(), &xml)?),
        None => Ok(Relationships::new(uri.base_uri().to_string())),
    }
}

fn read_slide(phys: &PhysPkgReader, number: usize, uri: &PackURI) -> Result<SlideSummary> {
    let parsed = parse_shapes(&read_part(phys, uri)?)?;

    let notes = match read_rels(phys, uri)?.part_with_reltype(rt::NOTES_SLIDE) {
        Ok(rel) => {
            let notes_uri = rel.target_partname()?;
            let notes = parse_shapes(&read_part(phys, &notes_uri)?)?;
            Some(notes.body_text())
        },
        Err(_) => None,
    };

    let title = parsed
        .shapes
        .iter()
        .find(|shape| shape.paragraphs.iter().any(|p| !p.trim().is_empty()))
        .and_then(|shape| shape.paragraphs.first().cloned());

    Ok(SlideSummary {
        number,
        partname: uri.to_string(),
        title,
        texts: parsed
            .shapes
            .iter()
            .flat_map(|shape| shape.paragraphs.iter())
            .filter(|p| !p.trim().is_empty())
            .cloned()
            .collect(),
        shape_count: parsed.shapes.len(),
        background: parsed.background,
        notes,
    })
}

/// `Override` content type for a partname in `[Content_Types].xml`.
fn override_content_type(xml: &[u8], partname: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(xml);

    loop {
        match reader.read_event()? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"Override" => {
                let name = attr_value(e, b"PartName")?;
                if name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(partname)) {
                    return attr_value(e, b"ContentType");
                }
            },
            Event::Eof => return Ok(None),
            _ => {},
        }
    }
}

struct PresentationLayout {
    width: i64,
    height: i64,
    slide_rel_ids: Vec<String>,
}

fn parse_presentation(xml: &[u8]) -> Result<PresentationLayout> {
    let mut reader = Reader::from_reader(xml);
    let mut layout = PresentationLayout {
        width: 0,
        height: 0,
        slide_rel_ids: Vec::new(),
    };

    loop {
        match reader.read_event()? {
            Event::Start(ref e) | Event::Empty(ref e) => match e.local_name().as_ref() {
                b"sldId" => {
                    let r_id = attr_value(e, b"r:id")?.ok_or_else(|| {
                        OoxmlError::InvalidFormat("p:sldId without r:id".to_string())
                    })?;
                    layout.slide_rel_ids.push(r_id);
                },
                b"sldSz" => {
                    layout.width = attr_int(e, b"cx")?;
                    layout.height = attr_int(e, b"cy")?;
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(layout)
}

#[derive(Default)]
struct ParsedShape {
    placeholder: Option<String>,
    paragraphs: Vec<String>,
}

#[derive(Default)]
struct ParsedSlide {
    shapes: Vec<ParsedShape>,
    background: Option<RGBColor>,
}

impl ParsedSlide {
    /// Paragraphs of the body placeholder, as on a notes slide.
    fn body_text(&self) -> String {
        let body = self
            .shapes
            .iter()
            .filter(|shape| shape.placeholder.as_deref() == Some("body"))
            .flat_map(|shape| shape.paragraphs.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n");
        body.trim_end().to_string()
    }
}

/// Collect `p:sp` shapes with their paragraph text, plus the slide background color.
fn parse_shapes(xml: &[u8]) -> Result<ParsedSlide> {
    let mut reader = Reader::from_reader(xml);
    let mut slide = ParsedSlide::default();

    let mut shape: Option<ParsedShape> = None;
    let mut paragraph: Option<String> = None;
    let mut in_text = false;
    let mut in_background = false;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"sp" => shape = Some(ParsedShape::default()),
                b"p" if shape.is_some() => paragraph = Some(String::new()),
                b"t" => in_text = paragraph.is_some(),
                b"br" => push_break(&mut paragraph),
                b"bg" => in_background = true,
                b"ph" => set_placeholder(&mut shape, e)?,
                _ => {},
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"p" => {
                    if let Some(ref mut shape) = shape {
                        shape.paragraphs.push(String::new());
                    }
                },
                b"br" => push_break(&mut paragraph),
                b"ph" => set_placeholder(&mut shape, e)?,
                b"srgbClr" if in_background && slide.background.is_none() => {
                    slide.background = attr_value(e, b"val")?.and_then(|v| RGBColor::from_hex(&v));
                },
                _ => {},
            },
            Event::End(ref e) => match e.local_name().as_ref() {
                b"sp" => {
                    if let Some(done) = shape.take() {
                        slide.shapes.push(done);
                    }
                },
                b"p" => {
                    if let (Some(text), Some(shape)) = (paragraph.take(), shape.as_mut()) {
                        shape.paragraphs.push(text);
                    }
                },
                b"t" => in_text = false,
                b"bg" => in_background = false,
                _ => {},
            },
            Event::Text(ref e) if in_text => {
                if let Some(ref mut text) = paragraph {
                    text.push_str(std::str::from_utf8(e)?);
                }
            },
            Event::GeneralRef(ref e) if in_text => {
                if let Some(ref mut text) = paragraph {
                    push_entity(text, std::str::from_utf8(e)?);
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(slide)
}

fn push_break(paragraph: &mut Option<String>) {
    if let Some(text) = paragraph {
        text.push('\n');
    }
}

fn set_placeholder(shape: &mut Option<ParsedShape>, e: &BytesStart<'_>) -> Result<()> {
    if let Some(shape) = shape {
        // A placeholder without a type is a content ("obj") placeholder
        shape.placeholder = Some(attr_value(e, b"type")?.unwrap_or_else(|| "obj".to_string()));
    }
    Ok(())
}

/// Append the text an entity reference (`name` without `&` and `;`) stands for.
fn push_entity(text: &mut String, name: &str) {
    let numeric = name.strip_prefix('#').and_then(|code| {
        let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        value.and_then(char::from_u32)
    });

    match numeric {
        Some(ch) => text.push(ch),
        None => text.push_str(&unescape_xml(&format!("&{};", name))),
    }
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            let raw = std::str::from_utf8(&attr.value)?;
            return Ok(Some(unescape_xml(raw)));
        }
    }
    Ok(None)
}

fn attr_int(e: &BytesStart<'_>, key: &[u8]) -> Result<i64> {
    let value = attr_value(e, key)?.ok_or_else(|| {
        OoxmlError::InvalidFormat(format!(
            "missing attribute {}",
            String::from_utf8_lossy(key)
        ))
    })?;
    atoi_simd::parse::<i64>(value.as_bytes())
        .map_err(|_| OoxmlError::InvalidFormat(format!("not an integer: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::backgrounds::SlideBackground;
    use crate::ooxml::pptx::format::Bounds;
    use crate::ooxml::pptx::writer::{MutablePresentation, Paragraph};
    use crate::ooxml::pptx::Package;

    fn build() -> Vec<u8> {
        let mut pres = MutablePresentation::new();

        let slide = pres.add_slide();
        slide.set_background(SlideBackground::solid(RGBColor::new(20, 20, 35)));
        slide
            .add_text_box(Bounds::inches(0.5, 2.0, 9.0, 1.5))
            .add_paragraph(Paragraph::new("ParallaxPay").size(72.0));
        slide
            .add_text_box(Bounds::inches(0.5, 3.5, 9.0, 1.0))
            .add_paragraph(Paragraph::new("Line one\nLine two & more"));

        let slide = pres.add_slide();
        slide.add_rectangle(Bounds::inches(0.5, 1.4, 2.0, 0.05), RGBColor::WHITE);
        slide.add_text_box(Bounds::default()).set_text("🏆 Wins");
        slide.set_notes("First line\nSecond line");

        Package::from_presentation(&pres).unwrap().to_bytes().unwrap()
    }

    #[test]
    fn test_read_back_titles_and_texts() {
        let summary = PresentationSummary::from_bytes(build()).unwrap();

        assert_eq!(summary.slide_count(), 2);
        assert_eq!(summary.slide_width, 9144000);
        assert_eq!(summary.titles(), vec!["ParallaxPay", "🏆 Wins"]);

        let first = &summary.slides[0];
        assert_eq!(first.texts, vec!["ParallaxPay", "Line one\nLine two & more"]);
        assert_eq!(first.background, Some(RGBColor::new(20, 20, 35)));
        assert_eq!(first.notes, None);

        let second = &summary.slides[1];
        assert_eq!(second.shape_count, 2);
        assert_eq!(second.background, None);
        assert_eq!(second.notes.as_deref(), Some("First line\nSecond line"));
    }

    #[test]
    fn test_open_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        std::fs::write(&path, build()).unwrap();

        let summary = PresentationSummary::open(&path).unwrap();
        assert_eq!(summary.slides[1].partname, "/ppt/slides/slide2.xml");
    }

    #[test]
    fn test_rejects_package_without_presentation() {
        let empty = crate::ooxml::opc::OpcPackage::new();
        let bytes = crate::ooxml::opc::PackageWriter::to_bytes(&empty).unwrap();
        assert!(matches!(
            PresentationSummary::from_bytes(bytes),
            Err(OoxmlError::PartNotFound(_))
        ));
    }

    #[test]
    fn test_entities() {
        let mut text = String::new();
        push_entity(&mut text, "amp");
        push_entity(&mut text, "#x1F680");
        push_entity(&mut text, "#65");
        assert_eq!(text, "&🚀A");
    }
}
