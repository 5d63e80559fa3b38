use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sql_dictionary::commands::config::read_config;
use sql_dictionary::commands::scan::{scan_command, ScanArgs, ScanOptions};
use sql_dictionary::{display, validators};

/// sqldict CLI - SQL data dictionary generator
#[derive(Parser)]
#[clap(name = "sqldict", about = "Build a data dictionary from SQL files", version)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan SQL files and write the data dictionary
    Scan {
        /// Directory containing the SQL files
        #[clap(short, long)]
        source_dir: Option<PathBuf>,

        /// Output path (file for json, directory for csv)
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Output format (text, json, csv)
        #[clap(short, long)]
        format: Option<String>,

        /// Also scan subdirectories
        #[clap(short, long)]
        recursive: bool,

        /// Path to project configuration file (defaults to ./sqldict.yaml)
        #[clap(short, long)]
        config: Option<PathBuf>,
    },

    /// Check that every SQL file can be read and contains SQL
    Validate {
        /// Directory containing the SQL files
        #[clap(short, long)]
        source_dir: Option<PathBuf>,

        /// Also check subdirectories
        #[clap(short, long)]
        recursive: bool,

        /// Path to project configuration file (defaults to ./sqldict.yaml)
        #[clap(short, long)]
        config: Option<PathBuf>,

        /// Quiet mode - only output errors
        #[clap(short, long)]
        quiet: bool,
    },

    /// Show version information
    Version,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Scan {
            source_dir,
            output,
            format,
            recursive,
            config,
        } => {
            let args = ScanArgs {
                source_dir,
                output,
                format,
                recursive,
            };
            let result = read_config(config.as_deref())
                .map_err(anyhow::Error::from)
                .and_then(|config| ScanOptions::resolve(args, config))
                .and_then(|options| {
                    display::display_scan_welcome();
                    scan_command(&options)
                });

            if let Err(err) = result {
                eprintln!("Error: {:#}", err);
                process::exit(1);
            }
        }
        Command::Validate {
            source_dir,
            recursive,
            config,
            quiet,
        } => {
            let config = match read_config(config.as_deref()) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("Error: {:#}", anyhow::Error::from(err));
                    process::exit(1);
                }
            };
            let Some(source_dir) = source_dir.or(config.source_dir.clone()) else {
                eprintln!("Error: No source directory given (use --source-dir or set source_dir in sqldict.yaml)");
                process::exit(1);
            };
            let mut options = config.source_options();
            options.recursive |= recursive;

            let results = validators::validate_source_directory(&source_dir, &options);

            let mut error_count = 0;
            let mut success_count = 0;

            for result in &results {
                if result.is_valid {
                    success_count += 1;
                    if !quiet {
                        println!("✅ Valid SQL file: {}", result.path.display());
                    }
                } else {
                    error_count += 1;
                    eprintln!("❌ Invalid: {}", result.path.display());
                    for error in &result.errors {
                        eprintln!("   - {}", error);
                    }
                }
            }

            if !quiet || error_count > 0 {
                println!("\nValidation summary:");
                println!("  Valid files: {}", success_count);
                println!("  Invalid: {}", error_count);
                println!("  Total checked: {}", results.len());
            }

            if error_count > 0 {
                process::exit(1);
            }
        }
        Command::Version => {
            display::display_version();
        }
    }
}
