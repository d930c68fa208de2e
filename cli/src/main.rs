#![allow(missing_docs)]

use std::{process::ExitCode, time::Instant};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use env_logger::Env;
use five_letter_words::WordsBuild;
use log::{LevelFilter, error, info};

fn main() -> ExitCode {
    match _main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            match unlogged_diagnostic(&why, log::max_level()) {
                Some(diagnostic) => eprintln!("{diagnostic}"),
                None => error!("{why:#}"),
            }
            ExitCode::FAILURE
        },
    }
}

// Failures must always say something, even with logging silenced
fn unlogged_diagnostic(
    why: &anyhow::Error,
    max_level: LevelFilter,
) -> Option<String> {
    (max_level < LevelFilter::Error).then(|| format!("Error: {why:?}"))
}

// Default to debug logs on debug builds, info otherwise
#[cfg(debug_assertions)]
type WordsVerbosity = Verbosity<clap_verbosity_flag::DebugLevel>;
#[cfg(not(debug_assertions))]
type WordsVerbosity = Verbosity<clap_verbosity_flag::InfoLevel>;

/// Download SCOWL and ENABLE and write their five-letter words to words.json
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    verbosity: WordsVerbosity,
}

fn _main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbosity.into())
        .parse_env(Env::new().filter("WORDS_LOG"))
        .init();

    let start = Instant::now();
    let summary = WordsBuild::default()
        .run()
        .context("failed to build the word list")?;
    info!(
        "{} from the flat list, {} from {} SCOWL lists",
        summary.flat_list_words, summary.archive_words, summary.candidates_found,
    );
    println!("{summary}");
    info!("Took {:?}", start.elapsed());
    Ok(())
}
