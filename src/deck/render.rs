//! Turning a [`Deck`] into a presentation.
//!
//! One helper per layout; each places its shapes at fixed positions on a
//! 10 x 7.5 inch slide.

use super::{ArchitectureLayer, Deck, FeatureCard, Palette, Slide, SlideLayout};
use crate::common::error::Result;
use crate::common::style::RGBColor;
use crate::common::unit::inches;
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::pptx::{
    Alignment, AutoShapeType, Bounds, MutablePresentation, MutableSlide, Package, Paragraph,
    SlideBackground, VerticalAnchor,
};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Title text box shared by the content, architecture and features layouts.
const HEADING_BOUNDS: (f64, f64, f64, f64) = (0.5, 0.5, 9.0, 0.8);
const HEADING_SIZE: f64 = 40.0;

const LAYER_TOP: f64 = 2.0;
const LAYER_STEP: f64 = 1.2;
const FEATURE_LEFT: f64 = 0.5;
const FEATURE_STEP: f64 = 3.0;

fn bounds((x, y, width, height): (f64, f64, f64, f64)) -> Bounds {
    Bounds::inches(x, y, width, height)
}

fn heading(slide: &mut MutableSlide, text: &str, color: RGBColor, alignment: Option<Alignment>) {
    let mut paragraph = Paragraph::new(text).size(HEADING_SIZE).bold(true).color(color);
    if let Some(alignment) = alignment {
        paragraph = paragraph.align(alignment);
    }
    slide.add_text_box(bounds(HEADING_BOUNDS)).add_paragraph(paragraph);
}

fn centered_line(slide: &mut MutableSlide, at: Bounds, text: &str, size: f64, color: RGBColor) {
    slide.add_text_box(at).add_paragraph(
        Paragraph::new(text)
            .align(Alignment::Center)
            .size(size)
            .color(color),
    );
}

/// Deck name, subtitle and tagline, centred.
pub fn title_slide(
    slide: &mut MutableSlide,
    palette: &Palette,
    title: &str,
    subtitle: &str,
    tagline: &str,
) {
    slide.add_text_box(Bounds::inches(0.5, 2.0, 9.0, 1.5)).add_paragraph(
        Paragraph::new(title)
            .align(Alignment::Center)
            .size(72.0)
            .bold(true)
            .color(palette.accent),
    );
    centered_line(slide, Bounds::inches(0.5, 3.5, 9.0, 1.0), subtitle, 28.0, palette.white);
    centered_line(slide, Bounds::inches(0.5, 5.5, 9.0, 0.8), tagline, 20.0, palette.gray);
}

/// Left-aligned title over a short bar, then one paragraph per bullet.
pub fn content_slide(
    slide: &mut MutableSlide,
    palette: &Palette,
    title: &str,
    bullets: &[String],
    accent: Option<RGBColor>,
) {
    let accent = accent.unwrap_or(palette.accent);
    heading(slide, title, accent, Some(Alignment::Left));
    slide.add_rectangle(Bounds::inches(0.5, 1.4, 2.0, 0.05), accent);

    let body = slide.add_text_box(Bounds::inches(0.8, 2.0, 8.5, 5.0));
    body.word_wrap(true);
    for bullet in bullets {
        body.add_paragraph(
            Paragraph::new(bullet.as_str())
                .level(0)
                .size(20.0)
                .color(palette.white)
                .space_before(12.0)
                .space_after(12.0),
        );
    }
}

/// Layers stacked top to bottom, a down arrow between each pair.
pub fn architecture_slide(
    slide: &mut MutableSlide,
    palette: &Palette,
    title: &str,
    layers: &[ArchitectureLayer],
) {
    heading(slide, title, palette.accent, None);

    for (index, layer) in layers.iter().enumerate() {
        let y = LAYER_TOP + LAYER_STEP * index as f64;
        slide
            .add_auto_shape(AutoShapeType::RoundedRectangle, Bounds::inches(2.0, y, 6.0, 0.8))
            .fill(layer.color)
            .line(palette.white, 2.0)
            .vertical_anchor(VerticalAnchor::Middle)
            .add_paragraph(
                Paragraph::new(layer.label.as_str())
                    .align(Alignment::Center)
                    .size(24.0)
                    .bold(true)
                    .color(palette.white),
            );

        if index + 1 < layers.len() {
            slide
                .add_auto_shape(AutoShapeType::DownArrow, Bounds::inches(4.5, y + 0.85, 1.0, 0.25))
                .fill(palette.gray)
                .no_line();
        }
    }
}

/// Side-by-side cards with a footer line underneath.
pub fn features_slide(
    slide: &mut MutableSlide,
    palette: &Palette,
    title: &str,
    features: &[FeatureCard],
    footer: &str,
) {
    heading(slide, title, palette.accent, None);

    for (index, feature) in features.iter().enumerate() {
        let x = FEATURE_LEFT + FEATURE_STEP * index as f64;
        slide
            .add_auto_shape(AutoShapeType::RoundedRectangle, Bounds::inches(x, 2.5, 2.8, 2.5))
            .fill(palette.primary)
            .line(palette.accent, 3.0)
            .vertical_anchor(VerticalAnchor::Middle)
            .add_paragraph(
                Paragraph::new(feature.title.as_str())
                    .align(Alignment::Center)
                    .size(22.0)
                    .bold(true)
                    .color(palette.accent)
                    .space_after(10.0),
            )
            .add_paragraph(
                Paragraph::new(feature.description.as_str())
                    .align(Alignment::Center)
                    .size(16.0)
                    .color(palette.white),
            );
    }

    centered_line(slide, Bounds::inches(0.5, 6.0, 9.0, 1.0), footer, 18.0, palette.gray);
}

pub fn closing_slide(
    slide: &mut MutableSlide,
    palette: &Palette,
    headline: &str,
    subtitle: &str,
    call_to_action: &str,
) {
    slide.add_text_box(Bounds::inches(0.5, 2.5, 9.0, 1.5)).add_paragraph(
        Paragraph::new(headline)
            .align(Alignment::Center)
            .size(52.0)
            .bold(true)
            .color(palette.accent),
    );
    centered_line(slide, Bounds::inches(0.5, 4.5, 9.0, 1.0), subtitle, 24.0, palette.white);
    centered_line(slide, Bounds::inches(0.5, 6.0, 9.0, 0.8), call_to_action, 20.0, palette.gray);
}

fn render_slide(target: &mut MutableSlide, palette: &Palette, slide: &Slide) {
    target.set_background(SlideBackground::solid(palette.dark));

    match &slide.layout {
        SlideLayout::Title {
            title,
            subtitle,
            tagline,
        } => title_slide(target, palette, title, subtitle, tagline),
        SlideLayout::Content {
            title,
            bullets,
            accent,
        } => content_slide(target, palette, title, bullets, *accent),
        SlideLayout::Architecture { title, layers } => {
            architecture_slide(target, palette, title, layers)
        },
        SlideLayout::Features {
            title,
            features,
            footer,
        } => features_slide(target, palette, title, features, footer),
        SlideLayout::Closing {
            headline,
            subtitle,
            call_to_action,
        } => closing_slide(target, palette, headline, subtitle, call_to_action),
    }

    if let Some(notes) = &slide.notes {
        target.set_notes(notes);
    }
}

/// Build a presentation from a deck.
///
/// `on_slide` is called with each slide just before it is rendered.
pub fn render<F>(deck: &Deck, mut on_slide: F) -> Result<MutablePresentation>
where
    F: FnMut(&Slide),
{
    deck.validate()?;

    let mut pres = MutablePresentation::new();
    pres.set_slide_width(inches(deck.width_in));
    pres.set_slide_height(inches(deck.height_in));

    let mut properties = DocumentProperties::new()
        .title(&deck.title)
        .timestamp(Utc::now());
    if let Some(author) = &deck.author {
        properties = properties.creator(author);
    }
    *pres.properties_mut() = properties;

    for slide in &deck.slides {
        on_slide(slide);
        let target = pres.add_slide();
        render_slide(target, &deck.palette, slide);
        tracing::debug!(
            kind = slide.layout.kind(),
            shapes = target.shape_count(),
            notes = target.has_notes(),
            "rendered slide"
        );
    }

    Ok(pres)
}

/// Where [`generate`] writes: `output` itself, `output/<file_name>` when
/// `output` is a directory (existing, or spelled with a trailing separator),
/// or `file_name` in the working directory.
pub fn output_path(deck: &Deck, output: Option<&Path>) -> PathBuf {
    match output {
        Some(dir) if names_directory(dir) => dir.join(&deck.file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(&deck.file_name),
    }
}

fn names_directory(path: &Path) -> bool {
    let raw = path.to_string_lossy();
    raw.ends_with('/') || raw.ends_with('\\') || path.is_dir()
}

/// Render a deck and write it as a `.pptx`, returning the path written.
pub fn generate<F>(deck: &Deck, output: Option<&Path>, on_slide: F) -> Result<PathBuf>
where
    F: FnMut(&Slide),
{
    let pres = render(deck, on_slide)?;
    let path = output_path(deck, output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Package::from_presentation(&pres)?.save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::builtin;
    use crate::ooxml::pptx::{LineFormat, PresentationSummary, ShapeKind};

    fn read_back(deck: &Deck) -> PresentationSummary {
        let pres = render(deck, |_| {}).unwrap();
        let bytes = Package::from_presentation(&pres).unwrap().to_bytes().unwrap();
        PresentationSummary::from_bytes(bytes).unwrap()
    }

    #[test]
    fn test_hackathon_reads_back() {
        let deck = builtin("hackathon").unwrap();
        let summary = read_back(&deck);

        assert_eq!(summary.slide_count(), 10);
        assert_eq!(summary.titles(), deck.slide_titles());
        assert_eq!(summary.slide_width, 9_144_000);
        assert_eq!(summary.slide_height, 6_858_000);
        assert!(summary.slides.iter().all(|s| s.notes.is_none()));
        assert!(
            summary
                .slides
                .iter()
                .all(|s| s.background == Some(Palette::PARALLAX.dark))
        );

        let problem = &summary.slides[1];
        assert_eq!(problem.texts.len(), 6);
        assert_eq!(
            problem.texts[5],
            "⚡ Existing solutions are centralized, manual, and don't scale"
        );
    }

    #[test]
    fn test_pitch_reads_back_with_notes() {
        let deck = builtin("pitch").unwrap();
        let summary = read_back(&deck);

        assert_eq!(summary.slide_count(), 8);
        assert_eq!(summary.titles(), deck.slide_titles());
        for (slide, expected) in summary.slides.iter().zip(&deck.slides) {
            assert_eq!(slide.notes, expected.notes);
        }
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let deck = builtin("hackathon").unwrap();
        assert_eq!(read_back(&deck).slides, read_back(&deck).slides);
    }

    #[test]
    fn test_progress_callback_sees_every_slide() {
        let deck = builtin("pitch").unwrap();
        let mut seen = Vec::new();
        render(&deck, |slide| seen.push(slide.announce.clone())).unwrap();
        assert_eq!(seen.len(), 8);
        assert_eq!(seen[0], "🎨 Creating title slide...");
    }

    #[test]
    fn test_content_slide_layout() {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        let gold = RGBColor::new(255, 215, 0);
        let bullets = vec!["one".to_string(), "two".to_string()];
        content_slide(slide, &Palette::PARALLAX, "Wins", &bullets, Some(gold));

        let shapes = slide.shapes();
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[1].kind(), ShapeKind::AutoShape(AutoShapeType::Rectangle));
        assert_eq!(shapes[1].fill_color(), Some(gold));
        assert_eq!(shapes[1].line_format(), LineFormat::None);
        assert_eq!(shapes[1].bounds(), Bounds::inches(0.5, 1.4, 2.0, 0.05));
        assert_eq!(shapes[2].text_frame().paragraphs().len(), 2);
        assert_eq!(shapes[2].text_frame().word_wrap(), Some(true));
        assert_eq!(
            shapes[0].text_frame().paragraphs()[0].format().color,
            Some(gold)
        );
    }

    #[test]
    fn test_architecture_arrows_between_layers() {
        let palette = Palette::PARALLAX;
        let layers = vec![
            ArchitectureLayer::new("A", palette.highlight),
            ArchitectureLayer::new("B", palette.accent),
            ArchitectureLayer::new("C", palette.primary),
        ];
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        architecture_slide(slide, &palette, "Stack", &layers);

        let arrows: Vec<_> = slide
            .shapes()
            .iter()
            .filter(|s| s.kind() == ShapeKind::AutoShape(AutoShapeType::DownArrow))
            .collect();
        assert_eq!(slide.shape_count(), 1 + 3 + 2);
        assert_eq!(arrows.len(), 2);
        assert_eq!(arrows[1].bounds(), Bounds::inches(4.5, 3.2 + 0.85, 1.0, 0.25));
        assert_eq!(
            slide.shapes()[5].bounds(),
            Bounds::inches(2.0, 4.4, 6.0, 0.8)
        );
        assert_eq!(
            slide.shapes()[1].line_format(),
            LineFormat::solid(palette.white, 2.0)
        );
    }

    #[test]
    fn test_feature_cards_positions() {
        let palette = Palette::PARALLAX;
        let cards = vec![FeatureCard::new("A", "x\ny"), FeatureCard::new("B", "z")];
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide();
        features_slide(slide, &palette, "Demo", &cards, "footer");

        assert_eq!(slide.shape_count(), 4);
        assert_eq!(slide.shapes()[2].bounds(), Bounds::inches(3.5, 2.5, 2.8, 2.5));
        assert_eq!(slide.shapes()[1].text(), "A\nx\ny");
        assert_eq!(slide.shapes()[3].text(), "footer");
    }

    #[test]
    fn test_generate_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let deck = builtin("hackathon").unwrap();

        let path = generate(&deck, Some(dir.path()), |_| {}).unwrap();
        assert_eq!(path, dir.path().join("ParallaxPay_Hackathon_Presentation.pptx"));
        assert_eq!(PresentationSummary::open(&path).unwrap().slide_count(), 10);
    }

    #[test]
    fn test_generate_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let deck = builtin("pitch").unwrap();
        let target = format!("{}/decks/", dir.path().display());

        let path = generate(&deck, Some(Path::new(&target)), |_| {}).unwrap();
        assert!(path.ends_with("decks/ParallaxPay_Pitch_Deck.pptx"));
        assert!(path.is_file());
    }

    #[test]
    fn test_output_path_rules() {
        let deck = builtin("pitch").unwrap();
        assert_eq!(
            output_path(&deck, None),
            PathBuf::from("ParallaxPay_Pitch_Deck.pptx")
        );
        assert_eq!(
            output_path(&deck, Some(Path::new("out/custom.pptx"))),
            PathBuf::from("out/custom.pptx")
        );
    }

    #[test]
    fn test_invalid_deck_is_not_rendered() {
        let mut deck = builtin("pitch").unwrap();
        deck.slides.clear();
        assert!(render(&deck, |_| {}).is_err());
    }
}
