// In app/src/main.rs

use analytics::Window;
use anyhow::{Context, Result};
use app_config::Settings;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};
use core_types::TradeDraft;
use engine::Session;
use events::{DashboardMessage, DashboardTiles, FeedEntry, WindowTable};
use std::path::{Path, PathBuf};
use tracing_subscriber::prelude::*;

mod input;
mod render;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A personal trading-journal dashboard.")]
struct Cli {
    /// Directory holding base.toml and the per-environment overrides.
    #[arg(long, global = true, default_value = "config")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarizes a journal file by window, platform and instrument.
    Report {
        /// JSON array of trade entries.
        #[arg(short, long)]
        input: PathBuf,

        /// Reference day in YYYY-MM-DD format. Defaults to today.
        #[arg(long)]
        now: Option<NaiveDate>,

        /// Show a single window (daily, weekly, monthly, quarterly, yearly, all).
        #[arg(short, long)]
        window: Option<Window>,

        /// Emit JSON messages instead of tables.
        #[arg(long)]
        json: bool,
    },

    /// Prints the journal newest first.
    Feed {
        #[arg(short, long)]
        input: PathBuf,

        /// Only show this many entries.
        #[arg(short, long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Seeds a synthetic journal and prints its dashboard.
    Demo {
        /// Number of synthetic trades. Overrides the configured count.
        #[arg(long)]
        count: Option<usize>,

        /// RNG seed. Overrides the configured seed.
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        now: Option<NaiveDate>,

        #[arg(long)]
        json: bool,
    },
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings_in(&cli.config_dir)
        .with_context(|| format!("Failed to load settings from {}", cli.config_dir.display()))?;

    // --- Tracing Setup ---
    // Logs go to stderr so stdout carries only the rendered dashboard.
    let level = settings.app.log_level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();

    tracing::info!(environment = %settings.app.environment, "Starting trading journal");

    // Match on the parsed command and call the appropriate handler.
    match cli.command {
        Commands::Report { input, now, window, json } => {
            handle_report(&settings, &input, now, window, json)?;
        }
        Commands::Feed { input, limit, json } => {
            handle_feed(&settings, &input, limit, json)?;
        }
        Commands::Demo { count, seed, now, json } => {
            handle_demo(&settings, count, seed, now, json)?;
        }
    }

    Ok(())
}

/// The reference instant: noon of `date` on the journal's calendar, or the current time.
fn reference_instant(offset: FixedOffset, date: Option<NaiveDate>) -> Result<DateTime<Utc>> {
    let Some(date) = date else {
        return Ok(Utc::now());
    };
    let noon = date.and_hms_opt(12, 0, 0).context("Invalid reference time")?;
    let local = offset
        .from_local_datetime(&noon)
        .single()
        .context("Ambiguous reference time")?;
    Ok(local.with_timezone(&Utc))
}

/// Builds a session from drafts and reports anything that was turned away.
fn build_session(settings: &Settings, drafts: Vec<TradeDraft>, now: DateTime<Utc>) -> Result<Session> {
    input::note_unknown_venues(&drafts, &settings.journal.catalog());

    let mut session = Session::new(settings.journal.offset()?);
    let outcome = session.ingest_batch(drafts, now)?;
    for rejected in &outcome.rejected {
        tracing::warn!(entry = rejected.index, reason = %rejected.reason, "Skipped journal entry.");
    }
    Ok(session)
}

fn print_dashboard(settings: &Settings, session: &Session, only: Option<Window>, json: bool) -> Result<()> {
    let report = session.report().context("Report was not computed")?;
    let currency = &settings.journal.settlement_currency;
    let windows: Vec<Window> = match only {
        Some(window) => vec![window],
        None => Window::ALL.to_vec(),
    };

    let tiles = DashboardTiles::from_report(report);
    let tables: Vec<WindowTable> = windows
        .iter()
        .map(|w| WindowTable::from_summary(*w, report.summary(*w)))
        .collect();

    if json {
        println!("{}", serde_json::to_string(&DashboardMessage::ReportUpdated(tiles))?);
        for table in tables {
            println!("{}", serde_json::to_string(&DashboardMessage::Window(table))?);
        }
    } else {
        print!("{}", render::render_tiles(&tiles, currency));
        for table in &tables {
            print!("{}", render::render_window(table, currency));
        }
    }
    Ok(())
}

// --- Subcommand Logic ---

fn handle_report(
    settings: &Settings,
    input: &Path,
    now: Option<NaiveDate>,
    window: Option<Window>,
    json: bool,
) -> Result<()> {
    let now = reference_instant(settings.journal.offset()?, now)?;
    let drafts = input::load_drafts(input)?;
    let session = build_session(settings, drafts, now)?;
    print_dashboard(settings, &session, window, json)
}

fn handle_feed(settings: &Settings, input: &Path, limit: Option<usize>, json: bool) -> Result<()> {
    let now = Utc::now();
    let drafts = input::load_drafts(input)?;
    let session = build_session(settings, drafts, now)?;

    let currency = &settings.journal.settlement_currency;
    let entries: Vec<FeedEntry> = session
        .feed()
        .take(limit.unwrap_or(usize::MAX))
        .map(|r| FeedEntry::from_record(r, currency))
        .collect();

    if json {
        println!("{}", serde_json::to_string(&DashboardMessage::Feed(entries))?);
    } else {
        print!("{}", render::render_feed(&entries));
    }
    Ok(())
}

fn handle_demo(
    settings: &Settings,
    count: Option<usize>,
    seed: Option<u64>,
    now: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let offset = settings.journal.offset()?;
    let now = reference_instant(offset, now)?;
    let today = now.with_timezone(&offset).date_naive();

    let mut demo = settings.demo.clone();
    if let Some(count) = count {
        demo.record_count = count;
    }
    if let Some(seed) = seed {
        demo.seed = seed;
    }

    tracing::info!(seed = demo.seed, count = demo.record_count, "Seeding demo journal.");
    let drafts = engine::seed::demo_drafts(&demo, &settings.journal.catalog(), today);
    let session = build_session(settings, drafts, now)?;
    print_dashboard(settings, &session, None, json)
}
