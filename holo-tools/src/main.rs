//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod config;
mod error;
mod record;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use clap::{App, Arg};
use config::{Config, LoggingFileRotation, LoggingFmtStyle, OutputFormat};
use error::{Error, with_source};
use holo_isis_filter::inspect;
use holo_isis_filter::packet::header::EthHdr;
use record::{FrameRecord, FrameReport, Summary};
use tracing::level_filters::LevelFilter;
use tracing::{debug, debug_span, info};
use tracing_appender::rolling;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};

fn init_tracing(config: &config::Logging) {
    // Enable logging to a file.
    let file = config.file.enabled.then(|| {
        let file_appender = match config.file.rotation {
            LoggingFileRotation::Never => {
                rolling::never(&config.file.dir, &config.file.name)
            }
            LoggingFileRotation::Hourly => {
                rolling::hourly(&config.file.dir, &config.file.name)
            }
            LoggingFileRotation::Daily => {
                rolling::daily(&config.file.dir, &config.file.name)
            }
        };

        let log_level_filter = LevelFilter::from_level(tracing::Level::TRACE);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(file_appender)
            .with_target(false)
            .with_thread_ids(config.file.fmt.show_thread_id)
            .with_file(config.file.fmt.show_source)
            .with_line_number(config.file.fmt.show_source)
            .with_ansi(config.file.fmt.colors);
        let layer = match config.file.fmt.style {
            LoggingFmtStyle::Compact => layer.compact().boxed(),
            LoggingFmtStyle::Full => layer.boxed(),
            LoggingFmtStyle::Json => layer.json().boxed(),
            LoggingFmtStyle::Pretty => layer.pretty().boxed(),
        };
        layer.with_filter(log_level_filter)
    });

    // Enable logging to stderr, keeping stdout for the replay output.
    let stderr = config.stderr.enabled.then(|| {
        let log_level_filter = LevelFilter::from_level(tracing::Level::TRACE);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(config.stderr.fmt.show_thread_id)
            .with_file(config.stderr.fmt.show_source)
            .with_line_number(config.stderr.fmt.show_source)
            .with_ansi(config.stderr.fmt.colors);
        let layer = match config.stderr.fmt.style {
            LoggingFmtStyle::Compact => layer.compact().boxed(),
            LoggingFmtStyle::Full => layer.boxed(),
            LoggingFmtStyle::Json => layer.json().boxed(),
            LoggingFmtStyle::Pretty => layer.pretty().boxed(),
        };
        layer.with_filter(log_level_filter)
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("holo_isis_filter=debug,isis_filter_replay=debug")
    });
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file)
        .with(stderr)
        .init();
}

// Dumps the bytes following the Ethernet header of a frame.
fn dump_header(index: usize, frame: &[u8], size: usize) {
    debug_span!("frame", %index).in_scope(|| {
        let end = EthHdr::LEN.saturating_add(size);
        match frame.get(EthHdr::LEN..end) {
            Some(bytes) => {
                let bytes = bytes
                    .iter()
                    .map(|byte| format!("{byte:02x}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                debug!(%size, %bytes, "header dump");
            }
            None => {
                let len = frame.len();
                debug!(%len, %size, "frame too short for header dump");
            }
        }
    })
}

fn replay(filename: &str, config: &config::Replay) -> Result<Summary, Error> {
    let file = File::open(filename)
        .map_err(|error| Error::RecordRead(filename.to_owned(), error))?;
    let mut output = BufWriter::new(std::io::stdout().lock());
    let mut summary = Summary::default();

    for (line_idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line
            .map_err(|error| Error::RecordRead(filename.to_owned(), error))?;
        let Some(record) = FrameRecord::parse(line_idx + 1, &line)? else {
            continue;
        };
        let index = summary.frames;

        if config.header_dump_size != 0 {
            dump_header(index, &record.frame, config.header_dump_size);
        }

        // Classify frame.
        let inspection = inspect(&record.frame);
        summary.add(inspection.verdict());

        // Report result.
        let report = FrameReport::new(index, &record, &inspection);
        let result = match config.output {
            OutputFormat::Text => writeln!(output, "{}", report),
            OutputFormat::Json => serde_json::to_writer(&mut output, &report)
                .map_err(std::io::Error::from)
                .and_then(|_| writeln!(output)),
        };
        result.map_err(Error::OutputWrite)?;
    }
    output.flush().map_err(Error::OutputWrite)?;

    Ok(summary)
}

// ===== main =====

fn main() {
    // Parse command-line parameters.
    let matches = App::new("IS-IS LSP filter replay")
        .about("Classify captured frames from a record file")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("file")
                .help("Specify an alternative configuration file."),
        )
        .arg(
            Arg::with_name("FILENAME")
                .help("Frame record file path")
                .required(true)
                .index(1),
        )
        .get_matches();

    // Read configuration file.
    let config_file = matches.value_of("config");
    let config = match Config::load(config_file) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", with_source(&error));
            std::process::exit(1);
        }
    };

    // Initialize tracing.
    init_tracing(&config.logging);

    // Replay frames.
    let filename = matches.value_of("FILENAME").unwrap_or_default();
    match replay(filename, &config.replay) {
        Ok(summary) => {
            info!(
                frames = %summary.frames,
                passed = %summary.passed,
                dropped = %summary.dropped,
                "replay finished"
            );
            eprintln!("{}", summary);
        }
        Err(error) => {
            error.log();
            eprintln!("{}", with_source(&error));
            std::process::exit(1);
        }
    }
}
