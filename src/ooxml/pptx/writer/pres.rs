//! The root of a presentation being written.
use crate::common::unit::inches;
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

use super::slide::MutableSlide;

/// First `p:sldId/@id`; lower values are reserved.
const FIRST_SLIDE_ID: u32 = 256;

/// `p:sldMasterId/@id` of the single slide master.
pub(crate) const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// Relationship IDs the presentation part refers to from its XML.
#[derive(Debug, Clone, Default)]
pub(crate) struct PresentationRelIds {
    pub slide_master: String,
    pub notes_master: Option<String>,
    pub slides: Vec<String>,
}

/// A mutable PowerPoint presentation for writing.
#[derive(Debug)]
pub struct MutablePresentation {
    pub(crate) slides: Vec<MutableSlide>,
    /// EMUs
    slide_width: i64,
    /// EMUs
    slide_height: i64,
    properties: DocumentProperties,
}

impl MutablePresentation {
    /// An empty 10 x 7.5 inch (4:3) presentation.
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inches(10.0),
            slide_height: inches(7.5),
            properties: DocumentProperties::new(),
        }
    }

    /// Append a new blank slide.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let index = self.slides.len();
        let slide_id = FIRST_SLIDE_ID + index as u32;
        self.slides.push(MutableSlide::new(slide_id));
        &mut self.slides[index]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Slide at a 0-based position.
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    /// Whether any slide carries speaker notes.
    pub fn has_notes(&self) -> bool {
        self.slides.iter().any(MutableSlide::has_notes)
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Serialize `ppt/presentation.xml` against the relationship ids the package allocated.
    pub(crate) fn to_xml(&self, rel_ids: &PresentationRelIds) -> Result<String> {
        if rel_ids.slides.len() != self.slides.len() {
            return Err(OoxmlError::Other(format!(
                "{} slide relationships for {} slides",
                rel_ids.slides.len(),
                self.slides.len()
            )));
        }

        let mut xml = String::with_capacity(2048 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        write!(
            xml,
            r#"<p:sldMasterIdLst><p:sldMasterId id="{}" r:id="{}"/></p:sldMasterIdLst>"#,
            SLIDE_MASTER_ID, rel_ids.slide_master
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        if let Some(ref notes_master) = rel_ids.notes_master {
            write!(
                xml,
                r#"<p:notesMasterIdLst><p:notesMasterId r:id="{}"/></p:notesMasterIdLst>"#,
                notes_master
            )
            .map_err(|e| OoxmlError::Xml(e.to_string()))?;
        }

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(&rel_ids.slides) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )
                .map_err(|e| OoxmlError::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )
        .map_err(|e| OoxmlError::Xml(e.to_string()))?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
