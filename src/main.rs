//! Compare a transcript attempt against a reference passage and print a
//! per-word match report.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tasmee::quran::QuranClient;
use tasmee::{align, extract_words, match_report, report_accuracy, DEFAULT_THRESHOLD};

#[derive(Parser)]
#[command(
    name = "tasmee",
    about = "Recitation accuracy report for a transcript attempt"
)]
struct Args {
    /// Reference passage as a UTF-8 text file.
    #[arg(long, conflicts_with = "chapter")]
    reference: Option<PathBuf>,

    /// Chapter number to fetch from the reference API instead.
    #[arg(long)]
    chapter: Option<u32>,

    /// 1-indexed inclusive verse range, e.g. "1:7" or a single "3".
    #[arg(long, requires = "chapter")]
    verses: Option<String>,

    /// Transcript attempt file; read from stdin when omitted.
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// Per-word similarity threshold.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
}

fn parse_verse_range(spec: &str) -> Result<(u32, u32)> {
    let (start, end) = match spec.split_once(':') {
        Some((start, end)) => (start.parse()?, end.parse()?),
        None => {
            let single: u32 = spec.parse()?;
            (single, single)
        }
    };
    if start == 0 || end < start {
        anyhow::bail!("verse range {spec:?} is not a valid 1-indexed range");
    }
    Ok((start, end))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let reference_text = match (&args.reference, args.chapter) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("reading reference file {}", path.display()))?,
        (None, Some(chapter)) => {
            let range = args
                .verses
                .as_deref()
                .map(parse_verse_range)
                .transpose()?;
            QuranClient::new()?.fetch_passage(chapter, range).await?
        }
        (None, None) => anyhow::bail!("pass --reference FILE or --chapter N"),
    };

    let transcript = match &args.transcript {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading transcript file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading transcript from stdin")?;
            buffer
        }
    };

    let reference = extract_words(&reference_text);
    let candidate = extract_words(&transcript);
    tracing::info!(
        reference_words = reference.len(),
        candidate_words = candidate.len(),
        "aligning transcript"
    );

    let records = match_report(&reference, &candidate, args.threshold)?;
    for record in &records {
        let mark = if record.matched { "✓" } else { "✗" };
        let best = record.best_candidate.as_deref().unwrap_or("—");
        println!(
            "{mark} {:.2}  {}  →  {}",
            record.similarity, record.reference_word, best
        );
    }
    println!("accuracy: {:.1}%", report_accuracy(&records) * 100.0);

    let result = align(&reference, &candidate, args.threshold)?;
    println!(
        "covered {}/{} reference words{}",
        result.matched_count,
        result.total_words,
        if result.perfect_match { " (perfect)" } else { "" }
    );

    Ok(())
}
