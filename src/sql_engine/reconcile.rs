//! Report-ready groupings derived from a merged catalog

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

use super::catalog::Catalog;

/// A table seen qualified by a database in some relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TableDbPair<'a> {
    pub table: &'a str,
    pub database: &'a str,
}

/// A distinct `(column, table, database)` combination; `database` may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ColumnRelationship<'a> {
    pub column: &'a str,
    pub table: &'a str,
    pub database: &'a str,
}

/// Sorted, deduplicated views over a [`Catalog`].
///
/// Borrows from the catalog and holds no state of its own; building it twice
/// from the same catalog gives equal values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation<'a> {
    pub table_db_pairs: Vec<TableDbPair<'a>>,
    pub standalone_tables: Vec<&'a str>,
    pub col_relationships: Vec<ColumnRelationship<'a>>,
    pub standalone_columns: Vec<&'a str>,
}

pub fn reconcile(catalog: &Catalog) -> Reconciliation<'_> {
    let table_db_pairs = table_db_pairs(catalog);
    let related_tables: HashSet<&str> = table_db_pairs.iter().map(|p| p.table).collect();
    let standalone_tables = catalog
        .tables
        .iter()
        .map(String::as_str)
        .filter(|table| !related_tables.contains(table))
        .collect();

    let col_relationships = col_relationships(catalog);
    let related_columns: HashSet<&str> = col_relationships.iter().map(|r| r.column).collect();
    let standalone_columns = catalog
        .columns
        .iter()
        .map(String::as_str)
        .filter(|column| !related_columns.contains(column))
        .collect();

    Reconciliation {
        table_db_pairs: table_db_pairs.into_iter().collect(),
        standalone_tables,
        col_relationships: col_relationships.into_iter().collect(),
        standalone_columns,
    }
}

fn table_db_pairs(catalog: &Catalog) -> BTreeSet<TableDbPair<'_>> {
    catalog
        .relationships
        .iter()
        .filter(|r| r.is_qualified() && !r.table.is_empty())
        .map(|r| TableDbPair {
            table: &r.table,
            database: &r.database,
        })
        .collect()
}

fn col_relationships(catalog: &Catalog) -> BTreeSet<ColumnRelationship<'_>> {
    catalog
        .relationships
        .iter()
        .map(|r| ColumnRelationship {
            column: &r.column,
            table: &r.table,
            database: &r.database,
        })
        .collect()
}
