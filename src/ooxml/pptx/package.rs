/// Package assembly for PowerPoint presentations.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part, Relationships, XmlPart};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::MutablePresentation;
use crate::ooxml::pptx::writer::pres::PresentationRelIds;
use std::path::Path;

const PRESENTATION_PARTNAME: &str = "/ppt/presentation.xml";

/// A PowerPoint (.pptx) package built from a [`MutablePresentation`].
///
/// # Examples
///
/// ```rust,no_run
/// use deckgen::ooxml::pptx::{MutablePresentation, Package};
///
/// let mut pres = MutablePresentation::new();
/// pres.add_slide();
///
/// Package::from_presentation(&pres)?.save("deck.pptx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Package {
    /// The underlying OPC package
    opc: OpcPackage,
}

impl Package {
    /// Assemble every part of the presentation into an OPC package.
    pub fn from_presentation(pres: &MutablePresentation) -> Result<Self> {
        let mut opc = OpcPackage::new();
        let has_notes = pres.has_notes();

        opc.relate_to("ppt/presentation.xml", rt::OFFICE_DOCUMENT);
        opc.relate_to("docProps/core.xml", rt::CORE_PROPERTIES);
        opc.relate_to("docProps/app.xml", rt::EXTENDED_PROPERTIES);

        add_part(
            &mut opc,
            "/docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            pres.properties().to_xml(),
        )?;

        let titles: Vec<&str> = pres
            .slides()
            .iter()
            .map(|s| s.title().unwrap_or(""))
            .collect();
        let notes_count = pres.slides().iter().filter(|s| s.has_notes()).count();
        add_part(
            &mut opc,
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(&titles, notes_count),
        )?;

        // Presentation relationships are allocated up front because
        // presentation.xml refers to them by rId.
        let mut pres_rels = Relationships::new("/ppt".to_string());
        let mut rel_ids = PresentationRelIds {
            slide_master: r_id(&mut pres_rels, rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
            ..Default::default()
        };
        for index in 1..=pres.slide_count() {
            let target = format!("slides/slide{}.xml", index);
            rel_ids.slides.push(r_id(&mut pres_rels, rt::SLIDE, &target));
        }
        if has_notes {
            rel_ids.notes_master = Some(r_id(
                &mut pres_rels,
                rt::NOTES_MASTER,
                "notesMasters/notesMaster1.xml",
            ));
        }
        r_id(&mut pres_rels, rt::PRES_PROPS, "presProps.xml");
        r_id(&mut pres_rels, rt::VIEW_PROPS, "viewProps.xml");
        r_id(&mut pres_rels, rt::THEME, "theme/theme1.xml");
        r_id(&mut pres_rels, rt::TABLE_STYLES, "tableStyles.xml");

        opc.add_part(Box::new(XmlPart::with_rels(
            partname(PRESENTATION_PARTNAME)?,
            ct::PML_PRESENTATION_MAIN,
            pres.to_xml(&rel_ids)?,
            pres_rels,
        )));

        for (name, content_type, xml) in [
            ("/ppt/presProps.xml", ct::PML_PRES_PROPS, template::PRES_PROPS_XML),
            ("/ppt/viewProps.xml", ct::PML_VIEW_PROPS, template::VIEW_PROPS_XML),
            ("/ppt/tableStyles.xml", ct::PML_TABLE_STYLES, template::TABLE_STYLES_XML),
            ("/ppt/theme/theme1.xml", ct::OFC_THEME, template::THEME_XML),
        ] {
            add_part(&mut opc, name, content_type, xml.to_string())?;
        }

        let mut master = XmlPart::new(
            partname("/ppt/slideMasters/slideMaster1.xml")?,
            ct::PML_SLIDE_MASTER,
            template::SLIDE_MASTER_XML.to_string(),
        );
        // SLIDE_MASTER_XML refers to its layout as rId1
        master.relate_to("../slideLayouts/slideLayout1.xml", rt::SLIDE_LAYOUT);
        master.relate_to("../theme/theme1.xml", rt::THEME);
        opc.add_part(Box::new(master));

        let mut layout = XmlPart::new(
            partname("/ppt/slideLayouts/slideLayout1.xml")?,
            ct::PML_SLIDE_LAYOUT,
            template::BLANK_LAYOUT_XML.to_string(),
        );
        layout.relate_to("../slideMasters/slideMaster1.xml", rt::SLIDE_MASTER);
        opc.add_part(Box::new(layout));

        if has_notes {
            let mut notes_master = XmlPart::new(
                partname("/ppt/notesMasters/notesMaster1.xml")?,
                ct::PML_NOTES_MASTER,
                template::NOTES_MASTER_XML.to_string(),
            );
            notes_master.relate_to("../theme/theme2.xml", rt::THEME);
            opc.add_part(Box::new(notes_master));
            add_part(
                &mut opc,
                "/ppt/theme/theme2.xml",
                ct::OFC_THEME,
                template::THEME_XML.to_string(),
            )?;
        }

        for (index, slide) in pres.slides().iter().enumerate() {
            let number = index + 1;

            let mut slide_part = XmlPart::new(
                partname(&format!("/ppt/slides/slide{}.xml", number))?,
                ct::PML_SLIDE,
                slide.to_xml()?,
            );
            slide_part.relate_to("../slideLayouts/slideLayout1.xml", rt::SLIDE_LAYOUT);

            if let Some(notes_xml) = slide.notes_to_xml()? {
                let notes_target = format!("../notesSlides/notesSlide{}.xml", number);
                slide_part.relate_to(&notes_target, rt::NOTES_SLIDE);

                let mut notes_part = XmlPart::new(
                    partname(&format!("/ppt/notesSlides/notesSlide{}.xml", number))?,
                    ct::PML_NOTES_SLIDE,
                    notes_xml,
                );
                notes_part.relate_to("../notesMasters/notesMaster1.xml", rt::NOTES_MASTER);
                notes_part.relate_to(&format!("../slides/slide{}.xml", number), rt::SLIDE);
                opc.add_part(Box::new(notes_part));
            }

            tracing::debug!(
                slide = number,
                shapes = slide.shape_count(),
                notes = slide.has_notes(),
                "assembled slide"
            );
            opc.add_part(Box::new(slide_part));
        }

        Ok(Self { opc })
    }

    /// Serialize the package to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(PackageWriter::to_bytes(&self.opc)?)
    }

    /// Write the package to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;

        tracing::info!(
            path = %path.display(),
            parts = self.opc.part_count(),
            bytes = bytes.len(),
            "saved presentation"
        );
        Ok(())
    }

    /// Get the underlying OPC package.
    #[inline]
    pub fn opc_package(&self) -> &OpcPackage {
        &self.opc
    }
}

fn partname(name: &str) -> Result<PackURI> {
    PackURI::new(name).map_err(OoxmlError::InvalidFormat)
}

fn add_part(opc: &mut OpcPackage, name: &str, content_type: &str, xml: String) -> Result<()> {
    opc.add_part(Box::new(XmlPart::new(partname(name)?, content_type, xml)));
    Ok(())
}

fn r_id(rels: &mut Relationships, reltype: &str, target: &str) -> String {
    rels.get_or_add(reltype, target).r_id().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::style::RGBColor;
    use crate::ooxml::pptx::format::Bounds;

    fn sample(with_notes: bool) -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        for title in ["One", "Two"] {
            let slide = pres.add_slide();
            slide
                .add_text_box(Bounds::inches(0.5, 0.5, 9.0, 0.8))
                .set_text(title);
            if with_notes {
                slide.set_notes("speaker notes");
            }
        }
        pres
    }

    fn partnames(pkg: &Package) -> Vec<String> {
        pkg.opc_package()
            .iter_parts()
            .map(|p| p.partname().to_string())
            .collect()
    }

    #[test]
    fn test_parts_without_notes() {
        let pkg = Package::from_presentation(&sample(false)).unwrap();
        let names = partnames(&pkg);

        assert!(names.contains(&"/ppt/slides/slide2.xml".to_string()));
        assert!(names.contains(&"/ppt/slideLayouts/slideLayout1.xml".to_string()));
        assert!(!names.iter().any(|n| n.contains("notes")));
        assert!(!names.contains(&"/ppt/theme/theme2.xml".to_string()));
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_parts_with_notes() {
        let pkg = Package::from_presentation(&sample(true)).unwrap();
        let names = partnames(&pkg);

        assert!(names.contains(&"/ppt/notesMasters/notesMaster1.xml".to_string()));
        assert!(names.contains(&"/ppt/notesSlides/notesSlide1.xml".to_string()));
        assert!(names.contains(&"/ppt/theme/theme2.xml".to_string()));

        let pres = pkg.opc_package().main_document_part().unwrap();
        let xml = std::str::from_utf8(pres.blob()).unwrap();
        assert!(xml.contains("<p:notesMasterIdLst>"));
    }

    #[test]
    fn test_every_relationship_target_exists() {
        let pkg = Package::from_presentation(&sample(true)).unwrap();
        let opc = pkg.opc_package();

        for rel in opc.rels().iter() {
            assert!(opc.contains_part(&rel.target_partname().unwrap()));
        }
        for part in opc.iter_parts() {
            for rel in part.rels().iter() {
                let target = rel.target_partname().unwrap();
                assert!(opc.contains_part(&target), "{} -> {}", part.partname(), target);
            }
        }
    }

    #[test]
    fn test_save_writes_zip() {
        let mut pres = sample(false);
        pres.slide_mut(0)
            .unwrap()
            .add_rectangle(Bounds::inches(0.5, 1.4, 2.0, 0.05), RGBColor::WHITE);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pptx");
        Package::from_presentation(&pres).unwrap().save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
