//! Grammar scanner: turn config text into an [`EntryTable`].
//!
//! The format has two entry shapes, extracted in two passes over the same
//! text:
//!
//! ```text
//! MaxConnections = 64
//! Database = [host: db.local, port: 5433]
//! Cache = [
//!     size: 0x400,
//!     policy: "lru",
//! ]
//! ```
//!
//! 1. **Groups**: `key = [ ... ]`, where the body may span lines but holds no
//!    brackets, and only a trailing comma may follow the `]` on its line. A
//!    line like `Motd = [beta] welcome` is therefore a scalar. The body is
//!    split on commas and line breaks; each `sub-key: sub-value` piece is
//!    kept (split at the first colon, so values such as URLs survive).
//! 2. **Scalars**: `key = value` lines that don't fall inside a group match.
//!
//! A key must start with a word character, so blank lines and `#`/`;`
//! comments never match. The key stops at the first `=`. Keys and values are
//! trimmed of whitespace, commas, double quotes and line terminators.
//!
//! Within a pass, later entries replace earlier ones. The scalar pass runs
//! after the group pass, so a separate `key = value` line for a key that was
//! also written as a group replaces the group. Every replacement is reported.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::table::{Diagnostic, EntryTable, EntryValue, Group, insert_sub};

static GROUP_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\w[^=\r\n]*)=\s*\[([^\[\]]*)\][ \t,\r]*$")
        .expect("group entry pattern is valid")
});

static SCALAR_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\w[^=\r\n]*)=[ \t]*(.*)$").expect("scalar entry pattern is valid")
});

/// Scan `text` into an entry table, appending duplicate notices to `diagnostics`.
pub fn scan(text: &str, diagnostics: &mut Vec<Diagnostic>) -> EntryTable {
    let mut table = EntryTable::new();
    let mut consumed: Vec<Range<usize>> = Vec::new();

    for caps in GROUP_ENTRY.captures_iter(text) {
        let (Some(whole), Some(key), Some(body)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        consumed.push(whole.range());

        let key = clean(key.as_str());
        if key.is_empty() {
            continue;
        }
        let group = parse_group_body(key, body.as_str(), diagnostics);
        table.insert(key.to_string(), EntryValue::Group(group), diagnostics);
    }

    for caps in SCALAR_ENTRY.captures_iter(text) {
        let (Some(whole), Some(key), Some(value)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        if consumed.iter().any(|r| r.contains(&whole.start())) {
            continue;
        }

        let key = clean(key.as_str());
        if key.is_empty() {
            continue;
        }
        let value = clean(value.as_str());
        table.insert(
            key.to_string(),
            EntryValue::Scalar(value.to_string()),
            diagnostics,
        );
    }

    log::debug!("scanned {} config entries", table.len());
    table
}

fn parse_group_body(key: &str, body: &str, diagnostics: &mut Vec<Diagnostic>) -> Group {
    let mut group = Group::new();
    for piece in body.split([',', '\n']) {
        let Some((sub_key, sub_value)) = piece.split_once(':') else {
            continue;
        };
        let sub_key = clean(sub_key);
        if sub_key.is_empty() {
            continue;
        }
        insert_sub(
            &mut group,
            key,
            sub_key.to_string(),
            clean(sub_value).to_string(),
            diagnostics,
        );
    }
    group
}

/// Strip surrounding whitespace, commas, quotes and line terminators.
fn clean(raw: &str) -> &str {
    raw.trim()
        .trim_matches([',', '"', '\r', '\n'])
        .trim()
}
