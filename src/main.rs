//! `deckgen` - build, export and inspect slide decks.
//!
//! With no arguments the hackathon deck is written to the working directory:
//! ```sh
//! deckgen
//! ```
//!
//! Other decks, custom definitions and output locations:
//! ```sh
//! deckgen build --deck pitch -o out/
//! deckgen export --deck pitch -o pitch.yaml
//! deckgen build --spec pitch.yaml
//! deckgen inspect ParallaxPay_Pitch_Deck.pptx
//! ```

use clap::{Parser, Subcommand};
use deckgen::common::unit::emu_to_inches;
use deckgen::deck::{self, BUILTIN_DECKS, Deck};
use deckgen::ooxml::pptx::PresentationSummary;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_DECK: &str = "hackathon";

/// Generate PowerPoint decks from declarative slide definitions
#[derive(Parser, Debug)]
#[command(name = "deckgen", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a deck to .pptx
    Build {
        /// Built-in deck to render
        #[arg(long, default_value = DEFAULT_DECK, conflicts_with = "spec")]
        deck: String,

        /// YAML deck definition to render instead of a built-in deck
        #[arg(long, value_name = "FILE")]
        spec: Option<PathBuf>,

        /// Output file, or a directory to place the deck's file name in
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Write a built-in deck definition as YAML
    Export {
        #[arg(long)]
        deck: String,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the slide titles of a .pptx file
    Inspect {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// List the built-in decks
    List,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Build {
        deck: DEFAULT_DECK.to_string(),
        spec: None,
        output: None,
    });

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(command: Command) -> deckgen::Result<()> {
    match command {
        Command::Build {
            deck: name,
            spec,
            output,
        } => {
            let deck = match spec {
                Some(path) => Deck::load(path)?,
                None => deck::builtin(&name)?,
            };
            build(&deck, output.as_deref())
        },
        Command::Export { deck: name, output } => {
            let deck = deck::builtin(&name)?;
            match output {
                Some(path) => {
                    deck.save_yaml(&path)?;
                    println!("✅ Deck definition saved: {}", path.display());
                },
                None => print!("{}", deck.to_yaml()?),
            }
            Ok(())
        },
        Command::Inspect { path } => inspect(&path),
        Command::List => {
            for name in BUILTIN_DECKS {
                let deck = deck::builtin(name)?;
                println!("{:<10} {:>2} slides  {}", name, deck.slide_count(), deck.file_name);
            }
            Ok(())
        },
    }
}

fn build(deck: &Deck, output: Option<&Path>) -> deckgen::Result<()> {
    println!("🚀 {} Presentation Generator", deck.title);
    println!("{}", "=".repeat(50));

    let path = deck::generate(deck, output, |slide| {
        if !slide.announce.is_empty() {
            println!("{}", slide.announce);
        }
    })?;

    println!("\n✅ Presentation saved: {}", path.display());
    println!("📊 Total slides: {}", deck.slide_count());
    println!("\n{}", deck.sign_off.as_deref().unwrap_or("🎉 Done!"));
    Ok(())
}

fn inspect(path: &Path) -> deckgen::Result<()> {
    let summary = PresentationSummary::open(path)?;

    println!(
        "📊 {}: {} slides, {} x {} in",
        path.display(),
        summary.slide_count(),
        emu_to_inches(summary.slide_width),
        emu_to_inches(summary.slide_height)
    );
    for slide in &summary.slides {
        let title = slide.title.as_deref().unwrap_or("(untitled)").replace('\n', " ");
        let notes = if slide.notes.is_some() { "  [notes]" } else { "" };
        println!("{:>3}. {}{}", slide.number, title, notes);
    }
    Ok(())
}
