/// Text frames and paragraphs for PPTX shapes.
use crate::common::style::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::ooxml::pptx::format::{Alignment, TextFormat, VerticalAnchor};

/// A paragraph with uniform formatting.
///
/// A `\n` in the text becomes a line break (`a:br`) inside the paragraph, so
/// every line keeps the paragraph's formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    text: String,
    alignment: Option<Alignment>,
    level: Option<u8>,
    format: TextFormat,
    /// Points
    space_before: Option<f64>,
    /// Points
    space_after: Option<f64>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Font size in points.
    pub fn size(mut self, size: f64) -> Self {
        self.format.size = Some(size);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.format.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.format.italic = Some(italic);
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.format.color = Some(color);
        self
    }

    pub fn font(mut self, font: &str) -> Self {
        self.format.font = Some(font.to_string());
        self
    }

    /// Outline level, 0-8.
    pub fn level(mut self, level: u8) -> Self {
        self.level = Some(level.min(8));
        self
    }

    pub fn space_before(mut self, points: f64) -> Self {
        self.space_before = Some(points);
        self
    }

    pub fn space_after(mut self, points: f64) -> Self {
        self.space_after = Some(points);
        self
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    #[inline]
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub(crate) fn write_xml(&self, xml: &mut String) {
        xml.push_str("<a:p>");
        self.write_properties(xml);

        for (i, line) in self.text.split('\n').enumerate() {
            if i > 0 {
                xml.push_str("<a:br>");
                self.write_run_properties(xml, "a:rPr");
                xml.push_str("</a:br>");
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            self.write_run_properties(xml, "a:rPr");
            xml.push_str("<a:t>");
            xml.push_str(&escape_xml(line));
            xml.push_str("</a:t></a:r>");
        }

        self.write_run_properties(xml, "a:endParaRPr");
        xml.push_str("</a:p>");
    }

    fn write_properties(&self, xml: &mut String) {
        let has_attrs = self.alignment.is_some() || self.level.is_some();
        let has_children = self.space_before.is_some() || self.space_after.is_some();
        if !has_attrs && !has_children {
            return;
        }

        xml.push_str("<a:pPr");
        if let Some(level) = self.level {
            xml.push_str(" lvl=\"");
            xml.push_str(itoa::Buffer::new().format(level));
            xml.push('"');
        }
        if let Some(alignment) = self.alignment {
            xml.push_str(" algn=\"");
            xml.push_str(alignment.as_str());
            xml.push('"');
        }

        if !has_children {
            xml.push_str("/>");
            return;
        }
        xml.push('>');
        // spcBef precedes spcAft in CT_TextParagraphProperties
        if let Some(points) = self.space_before {
            write_spacing(xml, "a:spcBef", points);
        }
        if let Some(points) = self.space_after {
            write_spacing(xml, "a:spcAft", points);
        }
        xml.push_str("</a:pPr>");
    }

    fn write_run_properties(&self, xml: &mut String, tag: &str) {
        let format = &self.format;

        xml.push('<');
        xml.push_str(tag);
        xml.push_str(" lang=\"en-US\"");
        if let Some(sz) = format.size_centipoints() {
            xml.push_str(" sz=\"");
            xml.push_str(itoa::Buffer::new().format(sz));
            xml.push('"');
        }
        if let Some(bold) = format.bold {
            xml.push_str(if bold { " b=\"1\"" } else { " b=\"0\"" });
        }
        if let Some(italic) = format.italic {
            xml.push_str(if italic { " i=\"1\"" } else { " i=\"0\"" });
        }
        xml.push_str(" dirty=\"0\"");

        if format.color.is_none() && format.font.is_none() {
            xml.push_str("/>");
            return;
        }
        xml.push('>');

        // Fill before font in CT_TextCharacterProperties
        if let Some(color) = format.color {
            xml.push_str("<a:solidFill><a:srgbClr val=\"");
            xml.push_str(&color.to_hex());
            xml.push_str("\"/></a:solidFill>");
        }
        if let Some(ref font) = format.font {
            xml.push_str("<a:latin typeface=\"");
            xml.push_str(&escape_xml(font));
            xml.push_str("\"/>");
        }

        xml.push_str("</");
        xml.push_str(tag);
        xml.push('>');
    }
}

fn write_spacing(xml: &mut String, tag: &str, points: f64) {
    xml.push('<');
    xml.push_str(tag);
    xml.push_str("><a:spcPts val=\"");
    xml.push_str(itoa::Buffer::new().format(pt_to_centipoints(points)));
    xml.push_str("\"/></");
    xml.push_str(tag);
    xml.push('>');
}

/// The text body of a shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    word_wrap: Option<bool>,
    anchor: Option<VerticalAnchor>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// Replace all paragraphs with a single unformatted one.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.paragraphs.clear();
        self.paragraphs.push(Paragraph::new(text));
        self
    }

    pub fn set_word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.word_wrap = Some(wrap);
        self
    }

    pub fn set_vertical_anchor(&mut self, anchor: VerticalAnchor) -> &mut Self {
        self.anchor = Some(anchor);
        self
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    #[inline]
    pub fn word_wrap(&self) -> Option<bool> {
        self.word_wrap
    }

    /// All paragraph text joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn has_text(&self) -> bool {
        self.paragraphs.iter().any(|p| !p.text().trim().is_empty())
    }

    /// Append `p:txBody`.
    ///
    /// `auto_fit` adds `a:spAutoFit` (text boxes grow to fit their text).
    /// `default_wrap` is used when no explicit wrap was set.
    pub(crate) fn write_xml(&self, xml: &mut String, auto_fit: bool, default_wrap: bool) {
        xml.push_str("<p:txBody><a:bodyPr wrap=\"");
        let wrap = self.word_wrap.unwrap_or(default_wrap);
        xml.push_str(if wrap { "square" } else { "none" });
        xml.push_str("\" rtlCol=\"0\"");
        if let Some(anchor) = self.anchor {
            xml.push_str(" anchor=\"");
            xml.push_str(anchor.as_str());
            xml.push('"');
        }
        if auto_fit {
            xml.push_str("><a:spAutoFit/></a:bodyPr>");
        } else {
            xml.push_str("/>");
        }
        xml.push_str("<a:lstStyle/>");

        if self.paragraphs.is_empty() {
            xml.push_str("<a:p><a:endParaRPr lang=\"en-US\" dirty=\"0\"/></a:p>");
        }
        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml);
        }

        xml.push_str("</p:txBody>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph_xml(p: &Paragraph) -> String {
        let mut xml = String::new();
        p.write_xml(&mut xml);
        xml
    }

    #[test]
    fn test_fill_precedes_latin() {
        let xml = paragraph_xml(
            &Paragraph::new("ParallaxPay")
                .size(72.0)
                .bold(true)
                .color(RGBColor::new(0, 255, 163))
                .font("Calibri"),
        );

        let fill = xml.find("<a:solidFill>").unwrap();
        let latin = xml.find("<a:latin").unwrap();
        assert!(fill < latin);
        assert!(xml.contains(r#"<a:rPr lang="en-US" sz="7200" b="1" dirty="0">"#));
        assert!(xml.contains(r#"<a:srgbClr val="00FFA3"/>"#));
    }

    #[test]
    fn test_spacing_order_and_units() {
        let xml = paragraph_xml(
            &Paragraph::new("bullet")
                .level(0)
                .space_after(12.0)
                .space_before(12.0),
        );
        assert!(xml.contains(
            r#"<a:pPr lvl="0"><a:spcBef><a:spcPts val="1200"/></a:spcBef><a:spcAft><a:spcPts val="1200"/></a:spcAft></a:pPr>"#
        ));
    }

    #[test]
    fn test_newline_becomes_line_break() {
        let xml = paragraph_xml(&Paragraph::new("The Future of\nAutonomous AI").size(52.0));

        assert_eq!(xml.matches("<a:r>").count(), 2);
        assert_eq!(xml.matches("<a:br>").count(), 1);
        assert_eq!(xml.matches("<a:p>").count(), 1);
        assert!(xml.contains("<a:t>Autonomous AI</a:t>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = paragraph_xml(&Paragraph::new("Gradient Parallax & Solana <x402>"));
        assert!(xml.contains("<a:t>Gradient Parallax &amp; Solana &lt;x402&gt;</a:t>"));
    }

    #[test]
    fn test_plain_paragraph_has_no_ppr() {
        let xml = paragraph_xml(&Paragraph::new("plain"));
        assert!(!xml.contains("<a:pPr"));
        assert!(xml.ends_with(r#"<a:endParaRPr lang="en-US" dirty="0"/></a:p>"#));
    }

    #[test]
    fn test_empty_frame_still_has_paragraph() {
        let mut xml = String::new();
        TextFrame::new().write_xml(&mut xml, true, false);
        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));
        assert!(xml.contains("<a:p>"));
    }

    #[test]
    fn test_frame_text_and_wrap() {
        let mut frame = TextFrame::new();
        frame
            .add_paragraph(Paragraph::new("one"))
            .add_paragraph(Paragraph::new("two"))
            .set_word_wrap(true)
            .set_vertical_anchor(VerticalAnchor::Middle);

        assert_eq!(frame.text(), "one\ntwo");
        assert!(frame.has_text());

        let mut xml = String::new();
        frame.write_xml(&mut xml, false, false);
        assert!(xml.starts_with(r#"<p:txBody><a:bodyPr wrap="square" rtlCol="0" anchor="ctr"/>"#));

        frame.set_text("replaced");
        assert_eq!(frame.paragraphs().len(), 1);
    }
}
