use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::commands::config::DictionaryConfig;
use crate::error::SourceError;
use crate::report::{render_json, render_text, write_csv_sheets, DataDictionary, ReportFormat};
use crate::source::{load_sources, SourceFile, SourceOptions};
use crate::sql_engine::{reconcile, Catalog};

/// Arguments for `sqldict scan` as given on the command line
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    pub source_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub recursive: bool,
}

/// Fully resolved scan settings
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    pub source_dir: PathBuf,
    pub source: SourceOptions,
    pub format: ReportFormat,
    pub output: PathBuf,
}

impl ScanOptions {
    /// Command-line values win over the config file.
    pub fn resolve(args: ScanArgs, config: DictionaryConfig) -> Result<Self> {
        let source_dir = args
            .source_dir
            .or(config.source_dir.clone())
            .ok_or_else(|| {
                anyhow!("No source directory given (use --source-dir or set source_dir in sqldict.yaml)")
            })?;

        let format_name = args.format.unwrap_or_else(|| config.format.clone());
        let format = ReportFormat::from_name(&format_name).unwrap_or_else(|| {
            println!(
                "Unsupported output format: {}. Using text format instead.",
                format_name
            );
            ReportFormat::Text
        });

        let mut source = config.source_options();
        source.recursive |= args.recursive;

        Ok(Self {
            source_dir,
            source,
            format,
            output: args.output.unwrap_or(config.output),
        })
    }
}

/// Load every SQL file in `dir` and fold them into one catalog, in file order.
pub fn scan_directory(
    dir: &Path,
    options: &SourceOptions,
) -> Result<(Vec<SourceFile>, Catalog), SourceError> {
    let sources = load_sources(dir, options)?;

    let catalog = Catalog::merge_all(sources.iter().map(|source| {
        let file_catalog = Catalog::from_sql(&source.contents);
        debug!(
            path = %source.relative_path.display(),
            tables = file_catalog.tables.len(),
            columns = file_catalog.columns.len(),
            relationships = file_catalog.relationships.len(),
            "extracted file"
        );
        file_catalog
    }));

    Ok((sources, catalog))
}

/// Run the scan command
pub fn scan_command(options: &ScanOptions) -> Result<()> {
    let start_time = Instant::now();

    println!(
        "{}",
        format!("Processing SQL files in: {}", options.source_dir.display()).green()
    );

    let (sources, catalog) = scan_directory(&options.source_dir, &options.source)
        .with_context(|| format!("Cannot scan {}", options.source_dir.display()))?;

    info!(
        files = sources.len(),
        databases = catalog.databases.len(),
        tables = catalog.tables.len(),
        columns = catalog.columns.len(),
        relationships = catalog.relationships.len(),
        format = options.format.name(),
        "scan complete"
    );
    println!(
        "Processed {} SQL files in {:.2?}",
        sources.len(),
        start_time.elapsed()
    );

    let reconciled = reconcile(&catalog);
    let dictionary = DataDictionary::build(&catalog, &reconciled, &sources);

    if let Some(path) = write_report(&dictionary, options.format, &options.output)? {
        println!("Data dictionary saved to {}", path.display());
    }

    Ok(())
}

/// Emit the dictionary. Returns where it was written, or `None` for stdout.
pub fn write_report(
    dictionary: &DataDictionary,
    format: ReportFormat,
    output: &Path,
) -> Result<Option<PathBuf>> {
    match format {
        ReportFormat::Text => {
            println!("{}", render_text(dictionary));
            Ok(None)
        }
        ReportFormat::Json => {
            let path = json_output_path(output);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Error creating directory {}", parent.display()))?;
            }
            std::fs::write(&path, render_json(dictionary)?)
                .with_context(|| format!("Error writing to {}", path.display()))?;
            Ok(Some(path))
        }
        ReportFormat::Csv => {
            let written = write_csv_sheets(dictionary, output)?;
            debug!(files = written.len(), "wrote CSV sheets");
            Ok(Some(output.to_path_buf()))
        }
    }
}

fn json_output_path(output: &Path) -> PathBuf {
    if output.extension().is_some() {
        output.to_path_buf()
    } else {
        output.with_extension("json")
    }
}
