//! Presentation template parts.
//!
//! The fixed parts every generated deck shares: one slide master with a single
//! blank layout, the Office theme, a notes master and the presentation-level
//! property parts. Slides never use placeholders, so the master only carries
//! what PowerPoint needs to open the file and edit it afterwards.

use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

macro_rules! pml_part {
    ($($piece:expr),+ $(,)?) => {
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
            $($piece),+
        )
    };
}

macro_rules! pml_ns {
    () => {
        concat!(
            r#" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main""#,
            r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
            r#" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
        )
    };
}

macro_rules! empty_group {
    () => {
        concat!(
            r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
            r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
            r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
        )
    };
}

macro_rules! default_color_map {
    () => {
        concat!(
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
            r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
        )
    };
}

/// `p:sldMaster` with title and body placeholders. Its layout is `rId1`.
pub const SLIDE_MASTER_XML: &str = pml_part!(
    "<p:sldMaster", pml_ns!(), ">",
    "<p:cSld>",
    r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
    "<p:spTree>", empty_group!(),
    r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title Placeholder 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
    r#"<p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#,
    r#"<p:spPr><a:xfrm><a:off x="457200" y="274638"/><a:ext cx="8229600" cy="1143000"/></a:xfrm>"#,
    r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
    r#"<p:txBody><a:bodyPr vert="horz" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0" anchor="ctr"><a:normAutofit/></a:bodyPr>"#,
    r#"<a:lstStyle/><a:p><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master title style</a:t></a:r><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
    r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Text Placeholder 2"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
    r#"<p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr>"#,
    r#"<p:spPr><a:xfrm><a:off x="457200" y="1600200"/><a:ext cx="8229600" cy="4525963"/></a:xfrm>"#,
    r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
    r#"<p:txBody><a:bodyPr vert="horz" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0"><a:normAutofit/></a:bodyPr>"#,
    r#"<a:lstStyle/><a:p><a:pPr lvl="0"/><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master text styles</a:t></a:r></a:p></p:txBody></p:sp>"#,
    "</p:spTree></p:cSld>",
    default_color_map!(),
    r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
    "<p:txStyles>",
    r#"<p:titleStyle><a:lvl1pPr algn="ctr" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/><a:defRPr sz="4400" kern="1200">"#,
    r#"<a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/>"#,
    "</a:defRPr></a:lvl1pPr></p:titleStyle>",
    r#"<p:bodyStyle><a:lvl1pPr marL="342900" indent="-342900" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/><a:defRPr sz="3200" kern="1200">"#,
    r#"<a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/>"#,
    "</a:defRPr></a:lvl1pPr></p:bodyStyle>",
    r#"<p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr><a:lvl1pPr marL="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
    "</a:lvl1pPr></p:otherStyle>",
    "</p:txStyles>",
    "</p:sldMaster>",
);

/// The blank layout: no placeholders. Its master is `rId1`.
pub const BLANK_LAYOUT_XML: &str = pml_part!(
    "<p:sldLayout", pml_ns!(), r#" type="blank" preserve="1">"#,
    r#"<p:cSld name="Blank"><p:spTree>"#, empty_group!(), "</p:spTree></p:cSld>",
    "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>",
    "</p:sldLayout>",
);

/// `p:notesMaster` with slide image and notes body placeholders. Its theme is `rId1`.
pub const NOTES_MASTER_XML: &str = pml_part!(
    "<p:notesMaster", pml_ns!(), ">",
    "<p:cSld>",
    r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
    "<p:spTree>", empty_group!(),
    r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Slide Image Placeholder 1"/>"#,
    r#"<p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr>"#,
    r#"<p:nvPr><p:ph type="sldImg" idx="2"/></p:nvPr></p:nvSpPr>"#,
    r#"<p:spPr><a:xfrm><a:off x="1143000" y="685800"/><a:ext cx="4572000" cy="3429000"/></a:xfrm>"#,
    r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/><a:ln w="12700"><a:solidFill><a:prstClr val="black"/></a:solidFill></a:ln></p:spPr></p:sp>"#,
    r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Notes Placeholder 2"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
    r#"<p:nvPr><p:ph type="body" sz="quarter" idx="3"/></p:nvPr></p:nvSpPr>"#,
    r#"<p:spPr><a:xfrm><a:off x="685800" y="4343400"/><a:ext cx="5486400" cy="4114800"/></a:xfrm>"#,
    r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
    r#"<p:txBody><a:bodyPr vert="horz" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0"/>"#,
    r#"<a:lstStyle/><a:p><a:pPr lvl="0"/><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master text styles</a:t></a:r></a:p></p:txBody></p:sp>"#,
    "</p:spTree></p:cSld>",
    default_color_map!(),
    r#"<p:notesStyle><a:lvl1pPr marL="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:defRPr sz="1200" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
    "</a:lvl1pPr></p:notesStyle>",
    "</p:notesMaster>",
);

macro_rules! fill_style {
    () => {
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#
    };
}

macro_rules! line_style {
    ($w:literal) => {
        concat!(
            r#"<a:ln w=""#, $w, r#"" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
            r#"<a:prstDash val="solid"/></a:ln>"#,
        )
    };
}

/// The Office theme, shared by the slide master and the notes master.
pub const THEME_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
    "<a:themeElements>",
    r#"<a:clrScheme name="Office">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
    r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    r#"<a:dk2><a:srgbClr val="1F497D"/></a:dk2><a:lt2><a:srgbClr val="EEECE1"/></a:lt2>"#,
    r#"<a:accent1><a:srgbClr val="4F81BD"/></a:accent1><a:accent2><a:srgbClr val="C0504D"/></a:accent2>"#,
    r#"<a:accent3><a:srgbClr val="9BBB59"/></a:accent3><a:accent4><a:srgbClr val="8064A2"/></a:accent4>"#,
    r#"<a:accent5><a:srgbClr val="4BACC6"/></a:accent5><a:accent6><a:srgbClr val="F79646"/></a:accent6>"#,
    r#"<a:hlink><a:srgbClr val="0000FF"/></a:hlink><a:folHlink><a:srgbClr val="800080"/></a:folHlink>"#,
    "</a:clrScheme>",
    r#"<a:fontScheme name="Office">"#,
    r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    "</a:fontScheme>",
    r#"<a:fmtScheme name="Office">"#,
    "<a:fillStyleLst>", fill_style!(), fill_style!(), fill_style!(), "</a:fillStyleLst>",
    "<a:lnStyleLst>", line_style!("9525"), line_style!("25400"), line_style!("38100"), "</a:lnStyleLst>",
    "<a:effectStyleLst>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "</a:effectStyleLst>",
    "<a:bgFillStyleLst>", fill_style!(), fill_style!(), fill_style!(), "</a:bgFillStyleLst>",
    "</a:fmtScheme>",
    "</a:themeElements>",
    "<a:objectDefaults/><a:extraClrSchemeLst/>",
    "</a:theme>",
);

pub const PRES_PROPS_XML: &str = pml_part!("<p:presentationPr", pml_ns!(), "/>");

pub const VIEW_PROPS_XML: &str = pml_part!(
    "<p:viewPr", pml_ns!(), ">",
    r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
    r#"<p:gridSpacing cx="76200" cy="76200"/>"#,
    "</p:viewPr>",
);

pub const TABLE_STYLES_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    r#"<a:tblStyleLst xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}"/>"#,
);

/// Extended properties (`docProps/app.xml`) with slide and note counts.
pub fn app_props_xml(slide_titles: &[&str], notes: usize) -> String {
    let slides = slide_titles.len();
    let mut xml = String::with_capacity(1024 + slides * 64);

    xml.push_str(XML_DECL);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    xml.push_str("<TotalTime>0</TotalTime><Words>0</Words>");
    xml.push_str("<Application>deckgen</Application>");
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
    xml.push_str("<Paragraphs>0</Paragraphs>");
    let _ = write!(xml, "<Slides>{}</Slides><Notes>{}</Notes>", slides, notes);
    xml.push_str("<HiddenSlides>0</HiddenSlides><MMClips>0</MMClips><ScaleCrop>false</ScaleCrop>");

    xml.push_str(r#"<HeadingPairs><vt:vector size="4" baseType="variant">"#);
    xml.push_str("<vt:variant><vt:lpstr>Theme</vt:lpstr></vt:variant><vt:variant><vt:i4>1</vt:i4></vt:variant>");
    let _ = write!(
        xml,
        "<vt:variant><vt:lpstr>Slide Titles</vt:lpstr></vt:variant><vt:variant><vt:i4>{}</vt:i4></vt:variant>",
        slides
    );
    xml.push_str("</vt:vector></HeadingPairs>");

    let _ = write!(
        xml,
        r#"<TitlesOfParts><vt:vector size="{}" baseType="lpstr"><vt:lpstr>Office Theme</vt:lpstr>"#,
        slides + 1
    );
    for title in slide_titles {
        xml.push_str("<vt:lpstr>");
        xml.push_str(&escape_xml(&title.replace(['\r', '\n'], " ")));
        xml.push_str("</vt:lpstr>");
    }
    xml.push_str("</vt:vector></TitlesOfParts>");

    xml.push_str("<LinksUpToDate>false</LinksUpToDate><SharedDoc>false</SharedDoc>");
    xml.push_str("<HyperlinksChanged>false</HyperlinksChanged><AppVersion>16.0000</AppVersion>");
    xml.push_str("</Properties>");

    xml
}
