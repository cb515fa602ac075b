//! Deck definitions as YAML.
//!
//! ```yaml
//! title: Demo Day
//! file_name: demo.pptx
//! slides:
//!   - announce: "🎨 Creating title slide..."
//!     layout:
//!       kind: title
//!       title: Demo Day
//!       subtitle: Ten minutes, three demos
//!       tagline: Hall B
//!   - layout:
//!       kind: content
//!       title: Agenda
//!       accent: "#FFD700"
//!       bullets: [Intro, Demos, Q&A]
//! ```

use super::Deck;
use crate::common::error::{Error, Result};
use std::path::Path;

impl Deck {
    /// Parse and validate a YAML deck definition.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let deck: Deck = serde_saphyr::from_str(yaml).map_err(|e| Error::Yaml(e.to_string()))?;
        deck.validate()?;
        Ok(deck)
    }

    /// Serialize the deck definition as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| Error::Yaml(e.to_string()))
    }

    /// Read a YAML deck definition from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let deck = Self::from_yaml(&yaml)?;
        tracing::debug!(path = %path.display(), slides = deck.slide_count(), "loaded deck");
        Ok(deck)
    }

    /// Write the deck definition to a YAML file.
    pub fn save_yaml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::style::RGBColor;
    use crate::deck::{DEFAULT_WIDTH_IN, Palette, SlideLayout, builtin};

    const AGENDA: &str = r##"
title: Demo Day
file_name: demo.pptx
slides:
  - announce: "🎨 Creating title slide..."
    layout:
      kind: title
      title: Demo Day
      subtitle: Ten minutes, three demos
      tagline: Hall B
  - layout:
      kind: content
      title: Agenda
      accent: "#FFD700"
      bullets: [Intro, Demos, Q&A]
    notes: Keep it short.
"##;

    #[test]
    fn test_parse_with_defaults() {
        let deck = Deck::from_yaml(AGENDA).unwrap();
        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.width_in, DEFAULT_WIDTH_IN);
        assert_eq!(deck.palette, Palette::PARALLAX);
        assert_eq!(deck.author, None);
        assert_eq!(deck.slides[1].announce, "");
        assert_eq!(deck.slides[1].notes.as_deref(), Some("Keep it short."));
        match &deck.slides[1].layout {
            SlideLayout::Content {
                bullets, accent, ..
            } => {
                assert_eq!(bullets.len(), 3);
                assert_eq!(*accent, Some(RGBColor::new(255, 215, 0)));
            },
            other => panic!("unexpected layout {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_is_a_yaml_error() {
        let yaml = AGENDA.replace("kind: content", "kind: gallery");
        assert!(matches!(Deck::from_yaml(&yaml), Err(Error::Yaml(_))));
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let yaml = AGENDA.replace("#FFD700", "gold");
        assert!(matches!(Deck::from_yaml(&yaml), Err(Error::Yaml(_))));
    }

    #[test]
    fn test_parsed_deck_is_validated() {
        let yaml = AGENDA.replace("file_name: demo.pptx", "file_name: demo.key");
        assert!(matches!(Deck::from_yaml(&yaml), Err(Error::InvalidDeck(_))));
    }

    #[test]
    fn test_out_of_range_size_is_rejected() {
        let yaml = AGENDA.replace("file_name: demo.pptx", "file_name: demo.pptx\nwidth_in: 0.01");
        assert!(matches!(Deck::from_yaml(&yaml), Err(Error::InvalidDeck(_))));
    }

    #[test]
    fn test_control_character_is_rejected() {
        let yaml = AGENDA.replace("[Intro, Demos, Q&A]", r#"[Intro, "bell\x07here"]"#);
        assert!(matches!(Deck::from_yaml(&yaml), Err(Error::InvalidDeck(_))));
    }

    #[test]
    fn test_builtin_decks_survive_yaml() {
        for name in ["hackathon", "pitch"] {
            let deck = builtin(name).unwrap();
            let yaml = deck.to_yaml().unwrap();
            assert!(yaml.contains("architecture"));
            assert_eq!(Deck::from_yaml(&yaml).unwrap(), deck);
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pitch.yaml");
        let deck = builtin("pitch").unwrap();

        deck.save_yaml(&path).unwrap();
        assert_eq!(Deck::load(&path).unwrap(), deck);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Deck::load(dir.path().join("absent.yaml")),
            Err(Error::Io(_))
        ));
    }
}
