//! Declarative slide decks.
//!
//! A [`Deck`] is plain data: a palette plus an ordered list of [`Slide`]s,
//! each naming one of five fixed layouts. [`render`] turns a deck into a
//! [`MutablePresentation`](crate::ooxml::pptx::MutablePresentation) by calling
//! one layout helper per slide; [`generate`] does that and writes the `.pptx`.
//!
//! Two decks are built in ([`builtin`]); any other deck can be loaded from YAML
//! with [`Deck::from_yaml`] or [`Deck::load`].
//!
//! # Example
//!
//! ```rust,no_run
//! use deckgen::deck;
//!
//! let hackathon = deck::builtin("hackathon")?;
//! let path = deck::generate(&hackathon, None, |slide| println!("{}", slide.announce))?;
//! println!("saved {}", path.display());
//! # Ok::<(), deckgen::Error>(())
//! ```

pub mod hackathon;
pub mod palette;
pub mod pitch;
pub mod render;
pub mod source;

pub use palette::Palette;
pub use render::{generate, output_path, render};

use crate::common::error::{Error, Result};
use crate::common::style::RGBColor;
use serde::{Deserialize, Serialize};

/// Names accepted by [`builtin`], in listing order.
pub const BUILTIN_DECKS: &[&str] = &["hackathon", "pitch"];

/// Default slide width in inches (4:3).
pub const DEFAULT_WIDTH_IN: f64 = 10.0;
/// Default slide height in inches (4:3).
pub const DEFAULT_HEIGHT_IN: f64 = 7.5;

/// Smallest slide edge PresentationML accepts (914400 EMU).
pub const MIN_SLIDE_SIZE_IN: f64 = 1.0;
/// Largest slide edge PresentationML accepts (51206400 EMU).
pub const MAX_SLIDE_SIZE_IN: f64 = 56.0;

/// Feature cards sit 3 inches apart on a 10 inch slide.
pub const MAX_FEATURE_CARDS: usize = 3;

/// A complete deck definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Document title, also the name shown in the generator banner
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// File name used when no output path is given
    pub file_name: String,
    #[serde(default = "default_width")]
    pub width_in: f64,
    #[serde(default = "default_height")]
    pub height_in: f64,
    #[serde(default)]
    pub palette: Palette,
    /// Line printed after the deck has been written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_off: Option<String>,
    pub slides: Vec<Slide>,
}

fn default_width() -> f64 {
    DEFAULT_WIDTH_IN
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT_IN
}

/// One slide: what to draw, and what to say about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Progress line printed before the slide is rendered
    #[serde(default)]
    pub announce: String,
    pub layout: SlideLayout,
    /// Speaker notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Slide {
    pub fn new(announce: &str, layout: SlideLayout) -> Self {
        Self {
            announce: announce.to_string(),
            layout,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    /// The text the rendered slide starts with.
    #[inline]
    pub fn title(&self) -> &str {
        self.layout.title()
    }
}

/// The five slide layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideLayout {
    /// Centred deck name, subtitle and tagline
    Title {
        title: String,
        subtitle: String,
        tagline: String,
    },
    /// Title, underline bar and one paragraph per bullet
    Content {
        title: String,
        bullets: Vec<String>,
        /// Title and bar color; the palette accent when absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accent: Option<RGBColor>,
    },
    /// Stacked layers joined by down arrows
    Architecture {
        title: String,
        layers: Vec<ArchitectureLayer>,
    },
    /// Up to three feature cards and a footer line
    Features {
        title: String,
        features: Vec<FeatureCard>,
        footer: String,
    },
    Closing {
        headline: String,
        subtitle: String,
        call_to_action: String,
    },
}

impl SlideLayout {
    /// Title text; the headline for closing slides.
    pub fn title(&self) -> &str {
        match self {
            SlideLayout::Title { title, .. }
            | SlideLayout::Content { title, .. }
            | SlideLayout::Architecture { title, .. }
            | SlideLayout::Features { title, .. } => title,
            SlideLayout::Closing { headline, .. } => headline,
        }
    }

    /// The serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            SlideLayout::Title { .. } => "title",
            SlideLayout::Content { .. } => "content",
            SlideLayout::Architecture { .. } => "architecture",
            SlideLayout::Features { .. } => "features",
            SlideLayout::Closing { .. } => "closing",
        }
    }

    /// Every string the layout writes onto the slide.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            SlideLayout::Title {
                title,
                subtitle,
                tagline,
            } => vec![title.as_str(), subtitle, tagline],
            SlideLayout::Content { title, bullets, .. } => std::iter::once(title.as_str())
                .chain(bullets.iter().map(String::as_str))
                .collect(),
            SlideLayout::Architecture { title, layers } => std::iter::once(title.as_str())
                .chain(layers.iter().map(|layer| layer.label.as_str()))
                .collect(),
            SlideLayout::Features {
                title,
                features,
                footer,
            } => {
                let mut texts = vec![title.as_str(), footer.as_str()];
                for card in features {
                    texts.push(&card.title);
                    texts.push(&card.description);
                }
                texts
            },
            SlideLayout::Closing {
                headline,
                subtitle,
                call_to_action,
            } => vec![headline.as_str(), subtitle, call_to_action],
        }
    }
}

/// One box of an architecture diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureLayer {
    pub label: String,
    pub color: RGBColor,
}

impl ArchitectureLayer {
    pub fn new(label: &str, color: RGBColor) -> Self {
        Self {
            label: label.to_string(),
            color,
        }
    }
}

/// One card of a features slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    /// `\n` breaks the line inside the card
    pub description: String,
}

impl FeatureCard {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

impl Deck {
    /// Slide titles in order.
    pub fn slide_titles(&self) -> Vec<&str> {
        self.slides.iter().map(Slide::title).collect()
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Check that the deck can be rendered.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidDeck("deck title is empty".to_string()));
        }
        if !self.file_name.to_ascii_lowercase().ends_with(".pptx") || self.file_name.len() <= 5 {
            return Err(Error::InvalidDeck(format!(
                "file name '{}' must end in .pptx",
                self.file_name
            )));
        }
        for (name, value) in [("width_in", self.width_in), ("height_in", self.height_in)] {
            if !(MIN_SLIDE_SIZE_IN..=MAX_SLIDE_SIZE_IN).contains(&value) {
                return Err(Error::InvalidDeck(format!(
                    "{} must be between {} and {} inches, got {}",
                    name, MIN_SLIDE_SIZE_IN, MAX_SLIDE_SIZE_IN, value
                )));
            }
        }
        if self.slides.is_empty() {
            return Err(Error::InvalidDeck("deck has no slides".to_string()));
        }
        check_xml_chars("deck title", &self.title)?;
        if let Some(author) = &self.author {
            check_xml_chars("author", author)?;
        }

        for (index, slide) in self.slides.iter().enumerate() {
            let number = index + 1;
            if slide.title().trim().is_empty() {
                return Err(Error::InvalidDeck(format!(
                    "slide {} ({}) has an empty title",
                    number,
                    slide.layout.kind()
                )));
            }
            match &slide.layout {
                SlideLayout::Content { bullets, .. } if bullets.is_empty() => {
                    return Err(Error::InvalidDeck(format!("slide {} has no bullets", number)));
                },
                SlideLayout::Architecture { layers, .. } if layers.is_empty() => {
                    return Err(Error::InvalidDeck(format!("slide {} has no layers", number)));
                },
                SlideLayout::Features { features, .. }
                    if features.is_empty() || features.len() > MAX_FEATURE_CARDS =>
                {
                    return Err(Error::InvalidDeck(format!(
                        "slide {} has {} feature cards, expected 1 to {}",
                        number,
                        features.len(),
                        MAX_FEATURE_CARDS
                    )));
                },
                _ => {},
            }
            let place = format!("slide {}", number);
            for text in slide.layout.texts() {
                check_xml_chars(&place, text)?;
            }
            if let Some(notes) = &slide.notes {
                check_xml_chars(&format!("slide {} notes", number), notes)?;
            }
        }
        Ok(())
    }
}

/// Reject characters XML 1.0 cannot carry, not even escaped.
fn check_xml_chars(place: &str, text: &str) -> Result<()> {
    let bad = text.chars().find(|&c| {
        matches!(
            c,
            '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
        )
    });
    match bad {
        Some(c) => Err(Error::InvalidDeck(format!(
            "{} contains U+{:04X}, which XML cannot represent",
            place, c as u32
        ))),
        None => Ok(()),
    }
}

/// Look up a built-in deck by name.
pub fn builtin(name: &str) -> Result<Deck> {
    match name {
        "hackathon" => Ok(hackathon::deck()),
        "pitch" => Ok(pitch::deck()),
        other => Err(Error::UnknownDeck(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_slide_deck(layout: SlideLayout) -> Deck {
        Deck {
            title: "Test".to_string(),
            author: None,
            file_name: "test.pptx".to_string(),
            width_in: DEFAULT_WIDTH_IN,
            height_in: DEFAULT_HEIGHT_IN,
            palette: Palette::default(),
            sign_off: None,
            slides: vec![Slide::new("", layout)],
        }
    }

    fn content(bullets: &[&str]) -> SlideLayout {
        SlideLayout::Content {
            title: "Bullets".to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            accent: None,
        }
    }

    #[test]
    fn test_builtin_registry() {
        for name in BUILTIN_DECKS {
            let deck = builtin(name).unwrap();
            deck.validate().unwrap();
        }
        assert!(matches!(builtin("keynote"), Err(Error::UnknownDeck(ref n)) if n == "keynote"));
    }

    #[test]
    fn test_builtin_slide_counts() {
        assert_eq!(builtin("hackathon").unwrap().slide_count(), 10);
        assert_eq!(builtin("pitch").unwrap().slide_count(), 8);
    }

    #[test]
    fn test_layout_title_uses_headline_for_closing() {
        let closing = SlideLayout::Closing {
            headline: "Thanks".to_string(),
            subtitle: String::new(),
            call_to_action: String::new(),
        };
        assert_eq!(closing.title(), "Thanks");
        assert_eq!(closing.kind(), "closing");
    }

    #[test]
    fn test_validate_accepts_minimal_deck() {
        one_slide_deck(content(&["one"])).validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_empty_deck() {
        let mut deck = one_slide_deck(content(&["one"]));
        deck.slides.clear();
        assert!(matches!(deck.validate(), Err(Error::InvalidDeck(_))));
    }

    #[test]
    fn test_validate_rejects_empty_parts() {
        assert!(one_slide_deck(content(&[])).validate().is_err());

        let layers = SlideLayout::Architecture {
            title: "Stack".to_string(),
            layers: Vec::new(),
        };
        assert!(one_slide_deck(layers).validate().is_err());

        let untitled = SlideLayout::Content {
            title: "  ".to_string(),
            bullets: vec!["x".to_string()],
            accent: None,
        };
        assert!(one_slide_deck(untitled).validate().is_err());
    }

    #[test]
    fn test_validate_limits_feature_cards() {
        let features = |n: usize| SlideLayout::Features {
            title: "Demo".to_string(),
            features: (0..n).map(|i| FeatureCard::new(&i.to_string(), "d")).collect(),
            footer: String::new(),
        };
        one_slide_deck(features(3)).validate().unwrap();
        assert!(one_slide_deck(features(4)).validate().is_err());
        assert!(one_slide_deck(features(0)).validate().is_err());
    }

    #[test]
    fn test_validate_checks_file_name_and_size() {
        let mut deck = one_slide_deck(content(&["one"]));
        deck.file_name = "deck.ppt".to_string();
        assert!(deck.validate().is_err());
        deck.file_name = ".pptx".to_string();
        assert!(deck.validate().is_err());

        let mut deck = one_slide_deck(content(&["one"]));
        deck.height_in = 0.0;
        assert!(deck.validate().is_err());
        deck.height_in = f64::NAN;
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_slide_size() {
        let mut deck = one_slide_deck(content(&["one"]));
        deck.width_in = 0.01;
        assert!(matches!(deck.validate(), Err(Error::InvalidDeck(_))));
        deck.width_in = 57.0;
        assert!(matches!(deck.validate(), Err(Error::InvalidDeck(_))));

        deck.width_in = MIN_SLIDE_SIZE_IN;
        deck.height_in = MAX_SLIDE_SIZE_IN;
        deck.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_control_characters() {
        assert!(matches!(
            one_slide_deck(content(&["bell\u{7}here"])).validate(),
            Err(Error::InvalidDeck(ref msg)) if msg.contains("U+0007")
        ));

        let card = SlideLayout::Features {
            title: "Demo".to_string(),
            features: vec![FeatureCard::new("Oracle", "form\u{C}feed")],
            footer: String::new(),
        };
        assert!(one_slide_deck(card).validate().is_err());

        let deck = one_slide_deck(content(&["one"]));
        let mut noted = deck.clone();
        noted.slides[0] = noted.slides[0].clone().with_notes("\u{1B}[1m");
        assert!(noted.validate().is_err());

        let mut titled = deck;
        titled.title = "Null\u{0}".to_string();
        assert!(titled.validate().is_err());

        one_slide_deck(content(&["tab\tand\nnewline"])).validate().unwrap();
    }

    #[test]
    fn test_layout_texts_cover_every_field() {
        let layers = SlideLayout::Architecture {
            title: "Stack".to_string(),
            layers: vec![ArchitectureLayer::new("Agents", RGBColor::new(1, 2, 3))],
        };
        assert_eq!(layers.texts(), vec!["Stack", "Agents"]);
        assert_eq!(content(&["a", "b"]).texts(), vec!["Bullets", "a", "b"]);
    }
}
