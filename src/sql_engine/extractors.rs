//! Lexical identifier extraction for normalized SQL
//!
//! Five independent passes run over the same normalized text. None of them
//! understands SQL grammar; each is a greedy pattern over `[A-Za-z0-9_]+`
//! tokens joined by `.`. Their outputs overlap freely and are combined by
//! the catalog aggregator.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Tokens that a greedy FROM/JOIN/SELECT match can swallow by accident.
pub const RESERVED_WORDS: [&str; 4] = ["SELECT", "FROM", "WHERE", "JOIN"];

static TRIPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9_]+)\.([A-Za-z0-9_]+)\.([A-Za-z0-9_]+)").unwrap()
});

static PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z0-9_]+)\.([A-Za-z0-9_]+)").unwrap());

static FROM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)FROM\s+(?:([A-Za-z0-9_]+)\.)?([A-Za-z0-9_]+)").unwrap()
});

static JOIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)JOIN\s+(?:([A-Za-z0-9_]+)\.)?([A-Za-z0-9_]+)").unwrap()
});

static SELECT_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SELECT\s+(.*?)\s+FROM").unwrap());

/// `[qualifier.]column [AS alias]` inside one comma-separated select fragment.
static SELECT_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:([A-Za-z0-9_]+)\.)?([A-Za-z0-9_]+)(?:\s+[aA][sS]\s+([A-Za-z0-9_]+))?")
        .unwrap()
});

/// `db.table.column`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripleRef {
    pub database: String,
    pub table: String,
    pub column: String,
}

/// `table.column`, unqualified by database
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairRef {
    pub table: String,
    pub column: String,
}

/// Table named after FROM or JOIN, with its optional `db.` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub database: Option<String>,
    pub table: String,
}

/// One item of the first SELECT list. Any `AS alias` has already been dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectColumn {
    pub qualifier: Option<String>,
    pub column: String,
}

/// Raw output of all five passes for one normalized text.
///
/// `pairs` has already been through [`discard_triple_tails`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub triples: Vec<TripleRef>,
    pub pairs: Vec<PairRef>,
    pub from_tables: Vec<TableRef>,
    pub join_tables: Vec<TableRef>,
    pub select_columns: Vec<SelectColumn>,
}

/// Case-insensitive membership in [`RESERVED_WORDS`]
pub fn is_reserved_word(token: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(token))
}

/// Pass 1: every `a.b.c` match is a relationship triple.
pub fn extract_triples(sql: &str) -> Vec<TripleRef> {
    TRIPLE_RE
        .captures_iter(sql)
        .map(|caps| TripleRef {
            database: caps[1].to_string(),
            table: caps[2].to_string(),
            column: caps[3].to_string(),
        })
        .collect()
}

/// Pass 2, unfiltered: every `a.b` match.
pub fn extract_pairs(sql: &str) -> Vec<PairRef> {
    PAIR_RE
        .captures_iter(sql)
        .map(|caps| PairRef {
            table: caps[1].to_string(),
            column: caps[2].to_string(),
        })
        .collect()
}

/// Database names observed in pass 1, across the whole text.
pub fn known_databases(triples: &[TripleRef]) -> HashSet<&str> {
    triples.iter().map(|t| t.database.as_str()).collect()
}

/// Drop pairs whose leading token is a known database name.
///
/// This is a heuristic: such a pair is assumed to be the front of a triple
/// that pass 1 already recorded, e.g. `orders.customers` out of
/// `orders.customers.id`. A table that happens to share a name with a
/// database anywhere in the file is dropped too.
pub fn discard_triple_tails(pairs: Vec<PairRef>, databases: &HashSet<&str>) -> Vec<PairRef> {
    pairs
        .into_iter()
        .filter(|pair| !databases.contains(pair.table.as_str()))
        .collect()
}

/// Pass 3: tables following FROM.
pub fn extract_from_tables(sql: &str) -> Vec<TableRef> {
    extract_keyword_tables(&FROM_RE, sql)
}

/// Pass 4: tables following JOIN (any join flavour ends in the literal word).
pub fn extract_join_tables(sql: &str) -> Vec<TableRef> {
    extract_keyword_tables(&JOIN_RE, sql)
}

fn extract_keyword_tables(pattern: &Regex, sql: &str) -> Vec<TableRef> {
    pattern
        .captures_iter(sql)
        .filter_map(|caps| {
            let table = caps.get(2)?.as_str();
            if is_reserved_word(table) {
                return None;
            }
            Some(TableRef {
                database: caps.get(1).map(|m| m.as_str().to_string()),
                table: table.to_string(),
            })
        })
        .collect()
}

/// Pass 5: columns of the first `SELECT ... FROM` span in the text.
///
/// Later statements are not inspected. Fragments that carry no identifier
/// at all (`*`, empty) are skipped; for expressions the first identifier
/// wins, so `COUNT(x)` yields `COUNT`.
pub fn extract_select_columns(sql: &str) -> Vec<SelectColumn> {
    let Some(select_list) = SELECT_LIST_RE.captures(sql).and_then(|caps| caps.get(1)) else {
        return Vec::new();
    };

    select_list
        .as_str()
        .split(',')
        .filter_map(|fragment| {
            let caps = SELECT_ITEM_RE.captures(fragment.trim())?;
            let column = caps.get(2)?.as_str();
            if is_reserved_word(column) {
                return None;
            }
            Some(SelectColumn {
                qualifier: caps.get(1).map(|m| m.as_str().to_string()),
                column: column.to_string(),
            })
        })
        .collect()
}

/// Run every pass over already-normalized text.
pub fn extract_all(sql: &str) -> Extraction {
    let triples = extract_triples(sql);
    let pairs = {
        let databases = known_databases(&triples);
        discard_triple_tails(extract_pairs(sql), &databases)
    };

    Extraction {
        pairs,
        from_tables: extract_from_tables(sql),
        join_tables: extract_join_tables(sql),
        select_columns: extract_select_columns(sql),
        triples,
    }
}
