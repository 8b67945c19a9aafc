mod engine;
mod extractor;
mod models;
mod storage;
mod types;

use std::io::stderr;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::Converter;

/// Converts saved IC card statement pages (`YYYY/MM/*.html`) into a single deduplicated CSV.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Root folder holding the saved statement pages.
    input_folder: PathBuf,

    /// CSV file to create or overwrite.
    output: PathBuf,

    /// Text encoding of the saved pages, as a WHATWG label.
    #[arg(long, default_value = "shift_jis")]
    encoding: String,

    /// One of error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log and skip pages that cannot be parsed instead of aborting.
    #[arg(long)]
    skip_invalid: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(parse_log_level(&args.log_level));

    let converter = Converter::new()
        .with_encoding_label(&args.encoding)?
        .with_skip_invalid(args.skip_invalid);

    info!("Reading pages as {}", converter.encoding().name());

    let timer = Instant::now();
    let summary = converter.run(&args.input_folder, &args.output)?;
    let duration = timer.elapsed();

    info!(
        "Converted {} files ({} skipped) into {} rows in: {duration:?}",
        summary.files_read, summary.files_skipped, summary.entries
    );

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
