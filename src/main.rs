//! @ai:module:intent CLI entry point for merging and rendering annotation batches
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on merge, output, wire

use clap::{Parser, Subcommand, ValueEnum};
use schemacheck_annotations::{
    collect_batches, format_annotations, merge_batches, read_batch, sort_annotations, OutputFormat,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "schemacheck")]
#[command(author, version, about = "schemacheck - rule-failure annotation tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge per-rule annotation batches into one deterministic sequence
    Merge {
        /// Batch file, or directory of .json batch files
        path: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,

        /// Fail with exit code 1 if the merged batch contains any failure
        #[arg(long, default_value = "true")]
        fail_on_failure: bool,
    },

    /// Sort and render a single annotation batch
    Render {
        /// Path to a batch file
        path: PathBuf,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Merge {
            path,
            format,
            fail_on_failure,
        } => match collect_batches(&path) {
            Ok(batches) => {
                let merged = merge_batches(batches);
                println!("{}", format_annotations(&merged, format.into()));

                if fail_on_failure && !merged.is_empty() {
                    ExitCode::from(1)
                } else {
                    ExitCode::SUCCESS
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },

        Commands::Render { path, format } => match read_batch(&path) {
            Ok(mut batch) => {
                sort_annotations(&mut batch);
                println!("{}", format_annotations(&batch, format.into()));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(2)
            }
        },
    }
}
