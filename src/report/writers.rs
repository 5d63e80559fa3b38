use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::{DataDictionary, Sheet};

/// Output formats for the data dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Colored tables on stdout
    Text,
    /// A single JSON document
    Json,
    /// One CSV file per sheet
    Csv,
}

impl ReportFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

/// Render every sheet as an aligned, colored text table
pub fn render_text(dictionary: &DataDictionary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", dictionary.title.bold()));

    for sheet in &dictionary.sheets {
        out.push_str(&format!("\n--- {} ---\n", sheet.name.green()));
        if sheet.rows.is_empty() {
            out.push_str("  (none)\n");
            continue;
        }
        render_text_table(sheet, &mut out);
    }

    out
}

fn render_text_table(sheet: &Sheet, out: &mut String) {
    let mut widths: Vec<usize> = sheet.headers.iter().map(|h| h.chars().count()).collect();
    for row in &sheet.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = pad_cells(&sheet.headers, &widths);
    out.push_str(&format!("  {}\n", header.bold()));
    for row in &sheet.rows {
        out.push_str(&format!("  {}\n", pad_cells(row, &widths)));
    }
}

fn pad_cells(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

pub fn render_json(dictionary: &DataDictionary) -> Result<String> {
    serde_json::to_string_pretty(dictionary).context("Failed to serialize data dictionary")
}

/// Write `<Sheet name>.csv` for every sheet into `dir`, creating it if needed.
pub fn write_csv_sheets(dictionary: &DataDictionary, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut written = Vec::with_capacity(dictionary.sheets.len());
    for sheet in &dictionary.sheets {
        let path = dir.join(format!("{}.csv", sheet.name));
        write_csv_sheet(sheet, &path)?;
        written.push(path);
    }

    Ok(written)
}

fn write_csv_sheet(sheet: &Sheet, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    writer.write_record(&sheet.headers)?;
    for row in &sheet.rows {
        writer.write_record(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    Ok(())
}
