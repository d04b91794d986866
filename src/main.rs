//! # chatroster CLI
//!
//! Command-line interface for the chatroster library.

use std::path::PathBuf;
use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatroster::cli::Args;
use chatroster::core::models::OutputConfig;
use chatroster::core::{OutputShape, ingest_files, select_shape, to_listing};
use chatroster::format::{OutputFormat, write_to_format};
use chatroster::session::{PendingFile, PendingQueue, UserId};
use chatroster::{Participant, RosterError};

/// The command line runs a single batch on behalf of one local user.
const LOCAL_USER: UserId = 0;

fn main() {
    let args = <Args as ClapParser>::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), RosterError> {
    let queue = PendingQueue::with_config(args.queue_config());
    for path in &args.inputs {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        queue.add(LOCAL_USER, PendingFile::new(name, path.display().to_string()))?;
    }

    let batch: Vec<PathBuf> = queue
        .drain(LOCAL_USER)?
        .into_iter()
        .map(|file| PathBuf::from(file.handle))
        .collect();

    let roster = ingest_files(&batch)?;
    let shape = select_shape(roster.len());
    tracing::info!(participants = roster.len(), %shape, "roster ready");

    match shape {
        OutputShape::InlineList => {
            println!("{}", to_listing(&roster).trim_end());
            Ok(())
        }
        OutputShape::Spreadsheet => write_spreadsheet(&roster, args),
    }
}

fn write_spreadsheet(roster: &[Participant], args: &Args) -> Result<(), RosterError> {
    let now = chrono::Local::now();
    let format: OutputFormat = match &args.output {
        Some(path) => OutputFormat::from_path(path).unwrap_or_else(|_| args.format.into()),
        None => args.format.into(),
    };
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| format.default_file_name(now.timestamp()));

    let mut config = OutputConfig::new().with_export_date(now);
    if args.keys {
        config = config.with_keys();
    }

    write_to_format(roster, &path, format, &config)?;
    println!("Participants found: {}. Saved to {}", roster.len(), path);
    Ok(())
}
