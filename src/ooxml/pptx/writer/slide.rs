/// Slide types and implementation for PPTX presentations.
use crate::common::style::RGBColor;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::pptx::backgrounds::SlideBackground;
use crate::ooxml::pptx::format::{AutoShapeType, Bounds};
use std::fmt::Write as FmtWrite;

use super::shape::MutableShape;

/// A mutable slide in a presentation.
///
/// Slides always use the blank layout; everything visible is an explicit shape.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier, 256 and up)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Speaker notes for the slide
    pub(crate) notes: Option<String>,
    /// Slide background
    pub(crate) background: SlideBackground,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            notes: None,
            background: SlideBackground::None,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set a background for the slide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deckgen::common::RGBColor;
    /// use deckgen::ooxml::pptx::{MutablePresentation, SlideBackground};
    ///
    /// let mut pres = MutablePresentation::new();
    /// let slide = pres.add_slide();
    /// slide.set_background(SlideBackground::solid(RGBColor::new(20, 20, 35)));
    /// ```
    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = background;
    }

    pub fn background(&self) -> SlideBackground {
        self.background
    }

    /// Set speaker notes for the slide.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = Some(notes.to_string());
    }

    /// Get the speaker notes for the slide.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Check if the slide has speaker notes.
    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }

    fn next_shape_id(&self) -> u32 {
        // 1 is the slide's group shape
        self.shapes.len() as u32 + 2
    }

    /// Add an empty text box and return it for formatting.
    pub fn add_text_box(&mut self, bounds: Bounds) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(self.next_shape_id(), bounds);
        self.push_shape(shape)
    }

    /// Add a preset auto shape and return it for formatting.
    pub fn add_auto_shape(
        &mut self,
        shape_type: AutoShapeType,
        bounds: Bounds,
    ) -> &mut MutableShape {
        let shape = MutableShape::new_auto_shape(self.next_shape_id(), shape_type, bounds);
        self.push_shape(shape)
    }

    /// Add a filled rectangle without outline.
    pub fn add_rectangle(&mut self, bounds: Bounds, fill: RGBColor) -> &mut MutableShape {
        let shape = self.add_auto_shape(AutoShapeType::Rectangle, bounds);
        shape.fill(fill).no_line();
        shape
    }

    fn push_shape(&mut self, shape: MutableShape) -> &mut MutableShape {
        let index = self.shapes.len();
        self.shapes.push(shape);
        &mut self.shapes[index]
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// First paragraph of the first shape that carries text.
    pub fn title(&self) -> Option<&str> {
        self.shapes
            .iter()
            .find(|shape| shape.has_text())
            .and_then(|shape| shape.text_frame().paragraphs().first())
            .map(|p| p.text())
    }

    /// Generate the slide part XML.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write_root_open(&mut xml, "p:sld");

        xml.push_str("<p:cSld>");
        self.background.write_xml(&mut xml);
        xml.push_str("<p:spTree>");
        write_group_properties(&mut xml);

        for shape in &self.shapes {
            shape.write_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate the notes slide XML, if the slide has notes.
    ///
    /// Each line of the notes becomes its own paragraph in the body placeholder.
    pub(crate) fn notes_to_xml(&self) -> Result<Option<String>> {
        let Some(notes_text) = self.notes.as_deref() else {
            return Ok(None);
        };

        let mut xml = String::with_capacity(2048 + notes_text.len());

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write_root_open(&mut xml, "p:notes");

        xml.push_str("<p:cSld><p:spTree>");
        write_group_properties(&mut xml);

        // Slide image placeholder
        xml.push_str("<p:sp><p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="2" name="Slide Image Placeholder 1"/>"#);
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr>"#);
        xml.push_str(r#"<p:nvPr><p:ph type="sldImg"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr><p:spPr/></p:sp>");

        // Notes body placeholder
        xml.push_str("<p:sp><p:nvSpPr>");
        xml.push_str(r#"<p:cNvPr id="3" name="Notes Placeholder 2"/>"#);
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str(r#"<p:nvPr><p:ph type="body" idx="1"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr><p:spPr/>");
        xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
        for line in notes_text.lines() {
            xml.push_str("<a:p>");
            if !line.is_empty() {
                write!(
                    xml,
                    r#"<a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r>"#,
                    escape_xml(line)
                )
                .map_err(|e| crate::ooxml::error::OoxmlError::Xml(e.to_string()))?;
            }
            xml.push_str(r#"<a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
        }
        if notes_text.is_empty() {
            xml.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
        }
        xml.push_str("</p:txBody></p:sp>");

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:notes>");

        Ok(Some(xml))
    }
}

/// Open a PresentationML root element with the a/r/p namespaces.
fn write_root_open(xml: &mut String, tag: &str) {
    xml.push('<');
    xml.push_str(tag);
    xml.push_str(" xmlns:a=\"");
    xml.push_str(namespace::DML_MAIN);
    xml.push_str("\" xmlns:r=\"");
    xml.push_str(namespace::OFC_RELATIONSHIPS);
    xml.push_str("\" xmlns:p=\"");
    xml.push_str(namespace::PML_MAIN);
    xml.push_str("\">");
}

/// The required non-visual and visual properties of the root group shape.
fn write_group_properties(xml: &mut String) {
    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str(r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::writer::text::Paragraph;

    #[test]
    fn test_shape_ids_start_at_two() {
        let mut slide = MutableSlide::new(256);
        let a = slide.add_text_box(Bounds::inches(0.5, 0.5, 9.0, 0.8)).shape_id();
        let b = slide
            .add_rectangle(Bounds::inches(0.5, 1.4, 2.0, 0.05), RGBColor::WHITE)
            .shape_id();
        let c = slide
            .add_auto_shape(AutoShapeType::RoundedRectangle, Bounds::default())
            .shape_id();

        assert_eq!((a, b, c), (2, 3, 4));
        assert_eq!(slide.shape_count(), 3);
    }

    #[test]
    fn test_title_is_first_text() {
        let mut slide = MutableSlide::new(256);
        slide.add_rectangle(Bounds::default(), RGBColor::BLACK);
        slide
            .add_text_box(Bounds::default())
            .add_paragraph(Paragraph::new("Key Features"))
            .add_paragraph(Paragraph::new("second"));

        assert_eq!(slide.title(), Some("Key Features"));
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(SlideBackground::solid(RGBColor::new(20, 20, 35)));
        slide.add_text_box(Bounds::default()).set_text("hello");

        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<p:sld xmlns:a="));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_notes_xml() {
        let mut slide = MutableSlide::new(256);
        assert!(slide.notes_to_xml().unwrap().is_none());

        slide.set_notes("Open with the problem.\nPause & breathe.");
        assert!(slide.has_notes());

        let xml = slide.notes_to_xml().unwrap().unwrap();
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert!(xml.contains("<a:t>Open with the problem.</a:t>"));
        assert!(xml.contains("<a:t>Pause &amp; breathe.</a:t>"));
    }
}
