//! Lessonkit CLI - writes the Ex 1K lesson deck and worksheet.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use lessonkit::lesson::{deck, worksheet};

/// Generate the Ex 1K lesson deck (.pptx) and worksheet (.docx)
#[derive(Parser, Debug)]
#[command(name = "lessonkit", version, about)]
struct Cli {
    /// Directory the files are written to
    #[arg(short, long, env = "LESSONKIT_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Only write one of the two files
    #[arg(long, value_enum)]
    only: Option<Artifact>,

    /// File name of the deck
    #[arg(long, default_value = deck::FILE_NAME)]
    deck_name: String,

    /// File name of the worksheet
    #[arg(long, default_value = worksheet::FILE_NAME)]
    worksheet_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Artifact {
    Deck,
    Worksheet,
}

fn run(cli: &Cli) -> lessonkit::Result<()> {
    if cli.only != Some(Artifact::Worksheet) {
        let path = cli.out_dir.join(&cli.deck_name);
        deck::build()?.save(&path)?;
        println!("PowerPoint saved successfully: {}", path.display());
    }
    if cli.only != Some(Artifact::Deck) {
        let path = cli.out_dir.join(&cli.worksheet_name);
        worksheet::build()?.save(&path)?;
        println!("Worksheet saved successfully: {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
