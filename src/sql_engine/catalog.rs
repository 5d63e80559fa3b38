//! Per-file catalogs and the cross-file merge

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::extractors::{extract_all, Extraction};
use super::normalizer::normalize_sql;

/// One observed `database.table.column` reference.
///
/// `database` is empty for unqualified `table.column` references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Relationship {
    pub database: String,
    pub table: String,
    pub column: String,
}

impl Relationship {
    pub fn new(
        database: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            table: table.into(),
            column: column.into(),
        }
    }

    pub fn is_qualified(&self) -> bool {
        !self.database.is_empty()
    }
}

/// Identifiers and relationships extracted from one file or a whole corpus.
///
/// The identifier sets deduplicate. `relationships` keeps every occurrence
/// in extraction order: file order first, then pass order within a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    #[serde(rename = "database")]
    pub databases: BTreeSet<String>,
    #[serde(rename = "table")]
    pub tables: BTreeSet<String>,
    #[serde(rename = "column")]
    pub columns: BTreeSet<String>,
    pub relationships: Vec<Relationship>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize, extract and aggregate a single file's text.
    pub fn from_sql(raw_sql: &str) -> Self {
        let normalized = normalize_sql(raw_sql);
        Self::from_extraction(extract_all(&normalized))
    }

    /// Fold many files' texts into one catalog, in the order given.
    pub fn from_sql_texts<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::merge_all(texts.into_iter().map(Self::from_sql))
    }

    /// Aggregate the raw pass output of one file.
    ///
    /// Only triples and surviving pairs become relationships. FROM/JOIN
    /// tables and SELECT columns just enrich the identifier sets.
    pub fn from_extraction(extraction: Extraction) -> Self {
        let mut catalog = Self::new();

        for triple in extraction.triples {
            catalog.databases.insert(triple.database.clone());
            catalog.tables.insert(triple.table.clone());
            catalog.columns.insert(triple.column.clone());
            catalog.relationships.push(Relationship::new(
                triple.database,
                triple.table,
                triple.column,
            ));
        }

        for pair in extraction.pairs {
            catalog.tables.insert(pair.table.clone());
            catalog.columns.insert(pair.column.clone());
            catalog
                .relationships
                .push(Relationship::new("", pair.table, pair.column));
        }

        for table_ref in extraction
            .from_tables
            .into_iter()
            .chain(extraction.join_tables)
        {
            catalog.tables.insert(table_ref.table);
            if let Some(database) = table_ref.database {
                catalog.databases.insert(database);
            }
        }

        catalog
            .columns
            .extend(extraction.select_columns.into_iter().map(|c| c.column));

        catalog
    }

    /// Union the identifier sets and append `other`'s relationships after ours.
    pub fn merged(mut self, other: Catalog) -> Self {
        self.databases.extend(other.databases);
        self.tables.extend(other.tables);
        self.columns.extend(other.columns);
        self.relationships.extend(other.relationships);
        self
    }

    pub fn merge_all<I>(catalogs: I) -> Self
    where
        I: IntoIterator<Item = Catalog>,
    {
        catalogs.into_iter().fold(Self::new(), Self::merged)
    }

    /// Relationship multiset; independent of the order files were processed in.
    pub fn relationship_counts(&self) -> BTreeMap<&Relationship, usize> {
        let mut counts = BTreeMap::new();
        for relationship in &self.relationships {
            *counts.entry(relationship).or_insert(0) += 1;
        }
        counts
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
            && self.tables.is_empty()
            && self.columns.is_empty()
            && self.relationships.is_empty()
    }
}
