/// Shape types and implementation for PPTX presentations.
use crate::common::style::RGBColor;
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::format::{AutoShapeType, Bounds, LineFormat, VerticalAnchor};
use std::fmt::Write as FmtWrite;

use super::text::{Paragraph, TextFrame};

/// What kind of `p:sp` a shape is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Text box (`txBox="1"`), sized to its text
    TextBox,
    /// Preset geometry with the default theme style
    AutoShape(AutoShapeType),
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    name: String,
    kind: ShapeKind,
    bounds: Bounds,
    fill: Option<RGBColor>,
    line: LineFormat,
    text_frame: TextFrame,
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, bounds: Bounds) -> Self {
        Self {
            shape_id,
            name: format!("TextBox {}", shape_id - 1),
            kind: ShapeKind::TextBox,
            bounds,
            fill: None,
            line: LineFormat::Inherit,
            text_frame: TextFrame::new(),
        }
    }

    pub(crate) fn new_auto_shape(shape_id: u32, shape_type: AutoShapeType, bounds: Bounds) -> Self {
        Self {
            shape_id,
            name: format!("{} {}", shape_type.base_name(), shape_id - 1),
            kind: ShapeKind::AutoShape(shape_type),
            bounds,
            fill: None,
            line: LineFormat::Inherit,
            text_frame: TextFrame::new(),
        }
    }

    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn fill_color(&self) -> Option<RGBColor> {
        self.fill
    }

    #[inline]
    pub fn line_format(&self) -> LineFormat {
        self.line
    }

    #[inline]
    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text_frame
    }

    /// Builder method: append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.text_frame.add_paragraph(paragraph);
        self
    }

    /// Builder method: replace the text with one unformatted paragraph.
    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text_frame.set_text(text);
        self
    }

    /// Builder method: solid fill.
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        self.fill = Some(color);
        self
    }

    /// Builder method: solid outline, width in points.
    pub fn line(&mut self, color: RGBColor, width_pt: f64) -> &mut Self {
        self.line = LineFormat::solid(color, width_pt);
        self
    }

    /// Builder method: remove the outline.
    pub fn no_line(&mut self) -> &mut Self {
        self.line = LineFormat::None;
        self
    }

    pub fn word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.text_frame.set_word_wrap(wrap);
        self
    }

    pub fn vertical_anchor(&mut self, anchor: VerticalAnchor) -> &mut Self {
        self.text_frame.set_vertical_anchor(anchor);
        self
    }

    /// Text of all paragraphs, newline-separated.
    pub fn text(&self) -> String {
        self.text_frame.text()
    }

    #[inline]
    pub fn has_text(&self) -> bool {
        self.text_frame.has_text()
    }

    /// Append the `p:sp` element for this shape.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        let is_text_box = self.kind == ShapeKind::TextBox;

        xml.push_str("<p:sp><p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str(if is_text_box {
            r#"<p:cNvSpPr txBox="1"/>"#
        } else {
            "<p:cNvSpPr/>"
        });
        xml.push_str("<p:nvPr/></p:nvSpPr>");

        xml.push_str("<p:spPr><a:xfrm>");
        write!(
            xml,
            r#"<a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/>"#,
            self.bounds.x, self.bounds.y, self.bounds.width, self.bounds.height
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        xml.push_str("</a:xfrm>");

        let preset = match self.kind {
            ShapeKind::TextBox => "rect",
            ShapeKind::AutoShape(shape_type) => shape_type.preset(),
        };
        write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, preset)
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        match self.fill {
            Some(color) => {
                xml.push_str("<a:solidFill><a:srgbClr val=\"");
                xml.push_str(&color.to_hex());
                xml.push_str("\"/></a:solidFill>");
            },
            None if is_text_box => xml.push_str("<a:noFill/>"),
            None => {},
        }

        match self.line {
            LineFormat::Inherit => {},
            LineFormat::None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
            LineFormat::Solid { color, width } => {
                write!(
                    xml,
                    r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                    width,
                    color.to_hex()
                )
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            },
        }
        xml.push_str("</p:spPr>");

        if !is_text_box {
            xml.push_str(AUTO_SHAPE_STYLE);
        }

        // Text boxes grow to fit and do not wrap unless asked to; auto shapes
        // wrap inside their geometry.
        self.text_frame.write_xml(xml, is_text_box, !is_text_box);

        xml.push_str("</p:sp>");

        Ok(())
    }
}

/// Theme references PowerPoint attaches to newly inserted auto shapes.
const AUTO_SHAPE_STYLE: &str = concat!(
    "<p:style>",
    r#"<a:lnRef idx="1"><a:schemeClr val="accent1"/></a:lnRef>"#,
    r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#,
    r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#,
    r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef>"#,
    "</p:style>",
);

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_xml(shape: &MutableShape) -> String {
        let mut xml = String::new();
        shape.write_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_text_box_xml() {
        let mut shape = MutableShape::new_text_box(2, Bounds::inches(0.5, 0.5, 9.0, 0.8));
        shape.add_paragraph(Paragraph::new("The Problem").size(40.0).bold(true));

        let xml = shape_xml(&shape);
        assert!(xml.contains(r#"<p:cNvPr id="2" name="TextBox 1"/>"#));
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:off x="457200" y="457200"/><a:ext cx="8229600" cy="731520"/>"#));
        assert!(xml.contains("<a:noFill/>"));
        assert!(xml.contains("<a:spAutoFit/>"));
        assert!(!xml.contains("<p:style>"));
        assert_eq!(shape.text(), "The Problem");
    }

    #[test]
    fn test_auto_shape_fill_and_line() {
        let mut shape = MutableShape::new_auto_shape(
            3,
            AutoShapeType::RoundedRectangle,
            Bounds::inches(2.0, 2.0, 6.0, 0.8),
        );
        shape
            .fill(RGBColor::new(138, 43, 226))
            .line(RGBColor::WHITE, 2.0)
            .vertical_anchor(VerticalAnchor::Middle)
            .set_text("AI Agents");

        let xml = shape_xml(&shape);
        assert!(xml.contains(r#"name="Rounded Rectangle 2""#));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="8A2BE2"/></a:solidFill>"#));
        assert!(xml.contains(r#"<a:ln w="25400"><a:solidFill><a:srgbClr val="FFFFFF"/>"#));
        assert!(xml.contains(r#"anchor="ctr""#));
        assert!(xml.contains(r#"wrap="square""#));

        // p:style sits between spPr and txBody
        let sp_pr = xml.find("</p:spPr>").unwrap();
        let style = xml.find("<p:style>").unwrap();
        let body = xml.find("<p:txBody>").unwrap();
        assert!(sp_pr < style && style < body);
    }

    #[test]
    fn test_no_line() {
        let bounds = Bounds::inches(4.5, 2.85, 1.0, 0.25);
        let mut shape = MutableShape::new_auto_shape(4, AutoShapeType::DownArrow, bounds);
        shape.fill(RGBColor::new(180, 180, 200)).no_line();

        let xml = shape_xml(&shape);
        assert!(xml.contains(r#"<a:prstGeom prst="downArrow">"#));
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
        assert!(!shape.has_text());
    }
}
