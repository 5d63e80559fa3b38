//! Comment stripping and whitespace normalization for raw SQL text

use regex::Regex;
use std::sync::LazyLock;

/// Line comments, block comments (non-greedy, may span lines), newlines and tabs.
/// Alternation order matters: whichever construct starts first wins, so `--`
/// inside a block comment is swallowed by the block comment and vice versa.
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[^\n]*|/\*[\s\S]*?\*/|\n|\t").unwrap());

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip comments and collapse whitespace so every pattern pass sees a single line.
///
/// Always succeeds; empty input gives an empty string.
pub fn normalize_sql(raw: &str) -> String {
    let without_comments = COMMENT_RE.replace_all(raw, " ");
    WHITESPACE_RE
        .replace_all(&without_comments, " ")
        .trim()
        .to_string()
}
