use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::{Parser, Subcommand};
use log::{error, info, warn};

use chess_flashcards_lib::{
    chess::board::decode,
    config::ExtractorConfig,
    deck::{export::import_json, sample::SAMPLE_PGN},
    error::Result,
    extract::{GeminiExtractor, ReplayExtractor},
    fs::{read_text, write_atomic},
    print::{capacity_from, PAGE_CAPACITY},
    render::{html::print_document, text::{board_text, card_text}},
    session::{Session, SubmitOutcome},
};

#[derive(Parser)]
#[command(
    name = "chess-flashcards",
    about = "Turn annotated PGN into printable two-sided chess flashcards",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract flashcards from a PGN file and write a printable deck
    Generate {
        /// PGN file (defaults to the bundled sample game)
        transcript: Option<PathBuf>,
        /// Printable HTML output
        #[arg(long, short, default_value = "flashcards.html")]
        out: PathBuf,
        /// Also save the deck as JSON
        #[arg(long)]
        json: Option<PathBuf>,
        /// Replay a saved JSON deck instead of calling the parsing engine
        #[arg(long)]
        cards: Option<PathBuf>,
        /// Cards per printed page
        #[arg(long, default_value_t = PAGE_CAPACITY)]
        capacity: usize,
        /// Gemini model name
        #[arg(long)]
        model: Option<String>,
        /// Gemini API key (overrides GEMINI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Render a saved JSON deck as printable HTML
    Print {
        deck: PathBuf,
        #[arg(long, short, default_value = "flashcards.html")]
        out: PathBuf,
        #[arg(long, default_value_t = PAGE_CAPACITY)]
        capacity: usize,
    },

    /// Show both sides of every card in a saved deck
    Show { deck: PathBuf },

    /// Draw a single FEN position
    Board { fen: String },

    /// Print the bundled sample game
    Sample,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate {
            transcript,
            out,
            json,
            cards,
            capacity,
            model,
            api_key,
            timeout_secs,
        } => {
            let capacity = capacity_from(capacity)?;
            let mut session = Session::new();
            if let Some(path) = transcript {
                session.load_file(&path).await?;
            } else {
                info!("No PGN given, using the sample game");
            }
            if !session.can_submit() {
                warn!("Transcript is empty, nothing to generate");
                return Ok(());
            }

            let outcome = match cards {
                Some(saved) => session.submit(&ReplayExtractor::new(saved)).await?,
                None => {
                    let mut config = ExtractorConfig::from_env();
                    if let Some(model) = model {
                        config.model = model;
                    }
                    if api_key.is_some() {
                        config.api_key = api_key;
                    }
                    if let Some(secs) = timeout_secs.filter(|s| *s > 0) {
                        config.timeout = Duration::from_secs(secs);
                    }
                    session.submit(&GeminiExtractor::new(config)?).await?
                }
            };

            if outcome == SubmitOutcome::Skipped {
                warn!("Transcript is empty, nothing to generate");
                return Ok(());
            }

            let pages = session.print_pages(capacity);
            write_atomic(&out, &print_document(&pages))?;
            println!(
                "Wrote {} cards on {} sheets to {}",
                session.cards().len(),
                pages.len(),
                out.display()
            );

            if let Some(json_path) = json {
                write_atomic(&json_path, &session.export_json()?)?;
                println!("Saved deck to {}", json_path.display());
            }
        }

        Command::Print {
            deck,
            out,
            capacity,
        } => {
            let capacity = capacity_from(capacity)?;
            let mut session = Session::new();
            session.replace_cards(import_json(&read_text(&deck).await?)?);

            let pages = session.print_pages(capacity);
            write_atomic(&out, &print_document(&pages))?;
            println!(
                "Wrote {} cards on {} sheets to {}",
                session.cards().len(),
                pages.len(),
                out.display()
            );
        }

        Command::Show { deck } => {
            let mut session = Session::new();
            session.replace_cards(import_json(&read_text(&deck).await?)?);

            let views = session.screen_views();
            if views.is_empty() {
                println!("No flashcards yet.");
            }
            for view in &views {
                println!("{}", card_text(view));
            }
        }

        Command::Board { fen } => print!("{}", board_text(&decode(&fen))),

        Command::Sample => println!("{}", SAMPLE_PGN),
    }

    Ok(())
}
