//! Document core properties (`docProps/core.xml`).

use crate::common::xml::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};

/// Dublin Core metadata written to `docProps/core.xml`.
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    /// `dc:creator`
    pub creator: Option<String>,
    /// Comma-separated
    pub keywords: Option<String>,
    pub last_modified_by: Option<String>,
    pub revision: Option<u32>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the document creator. Also records it as the last modifier.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self.last_modified_by = Some(creator.to_string());
        self
    }

    pub fn keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Stamp both created and modified with the same instant.
    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.created = Some(at);
        self.modified = Some(at);
        self.revision = Some(1);
        self
    }

    /// Serialize as the `docProps/core.xml` part. Unset fields are omitted.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let text_fields = [
            ("dc:title", &self.title),
            ("dc:subject", &self.subject),
            ("dc:creator", &self.creator),
            ("cp:keywords", &self.keywords),
            ("cp:lastModifiedBy", &self.last_modified_by),
        ];
        for (tag, value) in text_fields {
            if let Some(value) = value {
                xml.push('<');
                xml.push_str(tag);
                xml.push('>');
                xml.push_str(&escape_xml(value));
                xml.push_str("</");
                xml.push_str(tag);
                xml.push('>');
            }
        }

        if let Some(revision) = self.revision {
            xml.push_str("<cp:revision>");
            xml.push_str(itoa::Buffer::new().format(revision));
            xml.push_str("</cp:revision>");
        }

        if let Some(ref created) = self.created {
            xml.push_str("<dcterms:created xsi:type=\"dcterms:W3CDTF\">");
            xml.push_str(&created.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:created>");
        }

        if let Some(ref modified) = self.modified {
            xml.push_str("<dcterms:modified xsi:type=\"dcterms:W3CDTF\">");
            xml.push_str(&modified.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</dcterms:modified>");
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_properties_builder() {
        let props = DocumentProperties::new()
            .title("ParallaxPay")
            .creator("ParallaxPay Team")
            .keywords("x402, solana");

        assert_eq!(props.title.as_deref(), Some("ParallaxPay"));
        assert_eq!(props.last_modified_by.as_deref(), Some("ParallaxPay Team"));
        assert_eq!(props.keywords.as_deref(), Some("x402, solana"));
    }

    #[test]
    fn test_xml_generation() {
        let at = Utc.with_ymd_and_hms(2024, 11, 1, 9, 30, 0).unwrap();
        let props = DocumentProperties::new()
            .title("My Deck")
            .creator("Test Author")
            .timestamp(at);

        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>My Deck</dc:title>"));
        assert!(xml.contains("<dc:creator>Test Author</dc:creator>"));
        assert!(xml.contains("<cp:revision>1</cp:revision>"));
        assert!(xml.contains(">2024-11-01T09:30:00Z</dcterms:created>"));
    }

    #[test]
    fn test_xml_escaping() {
        let props = DocumentProperties::new().title("Test & <Special> \"Characters\"");

        let xml = props.to_xml();
        assert!(xml.contains("Test &amp; &lt;Special&gt; &quot;Characters&quot;"));
    }
}
