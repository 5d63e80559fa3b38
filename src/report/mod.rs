//! Data dictionary document built from a merged catalog
//!
//! The document mirrors a spreadsheet: an overview of counts followed by one
//! sheet each for databases, tables, columns and relationships. Description
//! and data type cells are left blank for people to fill in.

pub mod writers;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::source::SourceFile;
use crate::sql_engine::{Catalog, Reconciliation};

pub use writers::{render_json, render_text, write_csv_sheets, ReportFormat};

pub const OVERVIEW_TITLE: &str = "Data Dictionary Overview";

/// One tab of the data dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn push_row<const N: usize>(&mut self, cells: [&str; N]) {
        self.rows.push(cells.iter().map(|c| c.to_string()).collect());
    }
}

/// A scanned file, listed for provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    pub path: String,
    pub checksum: String,
}

impl From<&SourceFile> for SourceSummary {
    fn from(source: &SourceFile) -> Self {
        Self {
            path: source.relative_path.to_string_lossy().to_string(),
            checksum: source.checksum.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DataDictionary {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub sources: Vec<SourceSummary>,
    pub sheets: Vec<Sheet>,
}

impl DataDictionary {
    /// Lay out the catalog as sheets. Reads the catalog, never changes it.
    pub fn build(
        catalog: &Catalog,
        reconciled: &Reconciliation<'_>,
        sources: &[SourceFile],
    ) -> Self {
        Self {
            title: OVERVIEW_TITLE.to_string(),
            generated_at: Utc::now(),
            sources: sources.iter().map(SourceSummary::from).collect(),
            sheets: vec![
                overview_sheet(catalog),
                databases_sheet(catalog),
                tables_sheet(reconciled),
                columns_sheet(reconciled),
                relationships_sheet(catalog),
            ],
        }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

fn overview_sheet(catalog: &Catalog) -> Sheet {
    let mut sheet = Sheet::new("Overview", &["Metric", "Count"]);
    sheet.push_row([OVERVIEW_TITLE, ""]);
    let counts = [
        ("Total Databases:", catalog.databases.len()),
        ("Total Tables:", catalog.tables.len()),
        ("Total Columns:", catalog.columns.len()),
        ("Total Relationships:", catalog.relationships.len()),
    ];
    for (label, count) in counts {
        sheet.push_row([label, count.to_string().as_str()]);
    }
    sheet
}

fn databases_sheet(catalog: &Catalog) -> Sheet {
    let mut sheet = Sheet::new("Databases", &["Database Name", "Description"]);
    for database in &catalog.databases {
        sheet.push_row([database.as_str(), ""]);
    }
    sheet
}

/// Database-qualified tables first, then tables never seen with a database.
fn tables_sheet(reconciled: &Reconciliation<'_>) -> Sheet {
    let mut sheet = Sheet::new("Tables", &["Table Name", "Database", "Description"]);
    for pair in &reconciled.table_db_pairs {
        sheet.push_row([pair.table, pair.database, ""]);
    }
    for &table in &reconciled.standalone_tables {
        sheet.push_row([table, "", ""]);
    }
    sheet
}

fn columns_sheet(reconciled: &Reconciliation<'_>) -> Sheet {
    let mut sheet = Sheet::new(
        "Columns",
        &["Column Name", "Table", "Database", "Data Type", "Description"],
    );
    for rel in &reconciled.col_relationships {
        sheet.push_row([rel.column, rel.table, rel.database, "", ""]);
    }
    for &column in &reconciled.standalone_columns {
        sheet.push_row([column, "", "", "", ""]);
    }
    sheet
}

/// Every raw occurrence, sorted, duplicates included.
fn relationships_sheet(catalog: &Catalog) -> Sheet {
    let mut sheet = Sheet::new("Relationships", &["Database", "Table", "Column"]);
    let mut relationships: Vec<_> = catalog.relationships.iter().collect();
    relationships.sort();
    for rel in relationships {
        sheet.push_row([rel.database.as_str(), rel.table.as_str(), rel.column.as_str()]);
    }
    sheet
}
