//! Command-line front end for KindleClip
//!
//! Loads a clippings source, applies the filters given as flags through the
//! same events a graphical view would send, and prints the rows followed by
//! the status line.
//!
//! Run: cargo run --bin kindleclip-cli -- clippings.json --book "Dune" --text spice

use anyhow::{bail, Context, Result};
use clap::Parser;
use kindleclip::{
    ClipKind, ClipSession, JsonClippingsParser, Listing, Reaction, SessionConfig, UiEvent,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Clippings source (JSON array of extracted clippings)
    source: PathBuf,

    /// Session config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only show clippings from this book (exact title)
    #[arg(short, long)]
    book: Option<String>,

    /// Only show clippings whose text contains this (case-sensitive)
    #[arg(short, long)]
    text: Option<String>,

    /// Show or hide highlights
    #[arg(long)]
    highlights: Option<bool>,

    /// Show or hide notes
    #[arg(long)]
    notes: Option<bool>,

    /// Show or hide bookmarks
    #[arg(long)]
    bookmarks: Option<bool>,

    /// List the books in the source and exit
    #[arg(long)]
    books: bool,

    /// Print the details of the Nth visible row (0-based) instead of the list
    #[arg(long)]
    detail: Option<usize>,

    /// Print the listing as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn filter_events(args: &Args) -> Vec<UiEvent> {
    let mut events = Vec::new();
    let toggles = [
        (ClipKind::Highlight, args.highlights),
        (ClipKind::Note, args.notes),
        (ClipKind::Bookmark, args.bookmarks),
    ];
    for (kind, shown) in toggles {
        if let Some(shown) = shown {
            events.push(UiEvent::SetKindShown { kind, shown });
        }
    }
    if let Some(book) = &args.book {
        events.push(UiEvent::SelectBook(Some(book.clone())));
    }
    if let Some(text) = &args.text {
        events.push(UiEvent::SubmitTextQuery(text.clone()));
    }
    events
}

fn print_listing(listing: &Listing, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(listing)?);
        return Ok(());
    }
    for row in &listing.rows {
        println!(
            "{}\t{}\t{}\t{}",
            row.kind, row.formatted_timestamp, row.book, row.preview_text
        );
    }
    println!("{}", listing.status);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => SessionConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SessionConfig::default(),
    };

    let mut session = ClipSession::new(config, Box::new(JsonClippingsParser));
    let mut listing = match session
        .handle(UiEvent::LoadPath(args.source.clone()))
        .with_context(|| format!("Failed to load {}", args.source.display()))?
    {
        Reaction::Repaint(listing) => listing,
        Reaction::FormatError { reason, listing } => {
            eprintln!("Clippings file format not recognized ({}), showing nothing", reason);
            listing
        }
        other => bail!("Unexpected reaction to load: {:?}", other),
    };

    if args.books {
        for book in &listing.books {
            println!("{}", book);
        }
        return Ok(());
    }

    for event in filter_events(&args) {
        if let Reaction::Repaint(updated) = session.handle(event)? {
            listing = updated;
        }
    }

    if let Some(row) = args.detail {
        match session.handle(UiEvent::SelectRow(Some(row)))? {
            Reaction::Detail(text) if !text.is_empty() => println!("{}", text),
            _ => bail!("No visible row {} ({})", row, listing.status),
        }
        return Ok(());
    }

    print_listing(&listing, args.json)
}
