//! # Dictionary Output Writing
//!
//! Final stage of a run: takes the accumulated [`TranslationTable`], applies
//! the skip list and a set of quality heuristics, and writes the categorized
//! flat files consumed by downstream conversion tooling:
//!
//! 1. **Accepted mapping** — entries that survived every filter.
//! 2. **Excluded mapping** — entries routed away by a heuristic.
//! 3. **Conflicts (filtered)** — conflict pairs minus skip-listed variants.
//! 4. **Conflicts (all)** — every conflict pair, verbatim.
//!
//! All four files are written in one pass at the end of a run; an
//! interrupted run leaves no dictionary output behind.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

use log::{debug, info, warn};
use regex::Regex;

use super::models::WriteReport;
use super::skiplist::SkipList;
use super::table::TranslationTable;

/// Accepted variant\tcanonical pairs.
pub const OUTPUT_ACCEPTED: &str = "wiki.opencc.txt";
/// Pairs excluded by a heuristic.
pub const OUTPUT_EXCLUDED: &str = "wiki2.opencc.txt";
/// Conflict pairs minus skip-listed variants.
pub const OUTPUT_CONFLICTS_FILTERED: &str = "wiki3.opencc.txt";
/// Every conflict pair.
pub const OUTPUT_CONFLICTS_ALL: &str = "wiki4.opencc.txt";
/// Optional traditional → simplified character table (OpenCC text format).
pub const TS_TABLE_FILE: &str = "TSCharacters.txt";

/// Character-level traditional → simplified conversion table.
pub type TsTable = HashMap<char, char>;

/// Matches strings made only of Latin letters, including the accented range
/// used by pinyin romanizations (e.g. "pīnyīn", "Běijīng").
static LATIN_ONLY: OnceLock<Regex> = OnceLock::new();

fn latin_only_regex() -> &'static Regex {
    LATIN_ONLY.get_or_init(|| {
        Regex::new(r"^[a-zA-Z\x{00C0}-\x{024F}]+$").expect("Invalid Latin-letter pattern")
    })
}

/// Load the optional traditional → simplified character table.
///
/// OpenCC text-table format: `trad<TAB>simp [simp2 ...]` per line, first
/// value authoritative. A missing or unreadable file is non-fatal; the
/// redundancy check is simply skipped for the run.
pub fn load_ts_table(path: &Path) -> Option<TsTable> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(
                "Conversion table {} unavailable, redundancy check disabled: {}",
                path.display(),
                e
            );
            return None;
        }
    };
    let mut table = TsTable::new();
    for line in content.lines() {
        let Some((trad, simp)) = line.split_once('\t') else {
            continue;
        };
        let Some(trad) = trad.chars().next() else {
            continue;
        };
        // First listed simplified form wins.
        let Some(simp) = simp.split_whitespace().next().and_then(|s| s.chars().next()) else {
            continue;
        };
        table.insert(trad, simp);
    }
    info!("Loaded {} conversion pairs from {}", table.len(), path.display());
    Some(table)
}

/// Convert a string character-by-character through the table.
fn convert_ts(table: &TsTable, text: &str) -> String {
    text.chars()
        .map(|c| table.get(&c).copied().unwrap_or(c))
        .collect()
}

fn contains_parenthesis(s: &str) -> bool {
    s.chars().any(|c| matches!(c, '(' | ')' | '（' | '）'))
}

fn contains_digit(s: &str) -> bool {
    s.chars()
        .any(|c| c.is_ascii_digit() || ('０'..='９').contains(&c))
}

/// Decide whether an entry is routed to the excluded output, and why.
///
/// Returns `None` for entries that belong in the accepted mapping.
pub fn exclusion_reason(
    variant: &str,
    canonical: &str,
    ts_table: Option<&TsTable>,
) -> Option<&'static str> {
    if contains_parenthesis(variant) || contains_parenthesis(canonical) {
        return Some("parenthesis");
    }
    if variant.chars().any(char::is_whitespace) || canonical.chars().any(char::is_whitespace) {
        return Some("whitespace");
    }
    if variant.is_ascii() || canonical.is_ascii() {
        return Some("ascii-only");
    }
    if latin_only_regex().is_match(variant) || latin_only_regex().is_match(canonical) {
        return Some("latin-only");
    }
    if contains_digit(variant) != contains_digit(canonical) {
        return Some("digit-mismatch");
    }
    if let Some(table) = ts_table {
        if convert_ts(table, variant) == canonical {
            return Some("redundant");
        }
    }
    None
}

/// Write the four categorized output files into `out_dir`.
///
/// Entries whose variant string appears in the skip list are dropped
/// entirely. Individual file write failures are logged and do not abort the
/// remaining outputs.
pub fn write_outputs(
    out_dir: &Path,
    table: &TranslationTable,
    skip: &SkipList,
    ts_table: Option<&TsTable>,
) -> super::error::Result<WriteReport> {
    fs::create_dir_all(out_dir)?;

    let conflict_lines: Vec<String> = table
        .conflicts()
        .iter()
        .map(|(variant, canonical)| format!("{}\t{}", variant, canonical))
        .collect();
    write_file(
        &out_dir.join(OUTPUT_CONFLICTS_ALL),
        "# Every (variant, canonical) pair that disagreed with an earlier mapping.\n\
         # The mapping itself keeps the first-seen canonical value.",
        &conflict_lines,
    );

    let filtered_lines: Vec<String> = table
        .conflicts()
        .iter()
        .filter(|(variant, _)| !skip.contains(variant))
        .map(|(variant, canonical)| format!("{}\t{}", variant, canonical))
        .collect();
    write_file(
        &out_dir.join(OUTPUT_CONFLICTS_FILTERED),
        "# Conflict pairs, minus variants already covered by the block/allow lists.",
        &filtered_lines,
    );

    // Sort by canonical value, variant as tie-break, for stable output.
    let mut entries: Vec<(&String, &String)> = table.mapping().iter().collect();
    entries.sort_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));

    let mut accepted = Vec::new();
    let mut excluded = Vec::new();
    for (variant, canonical) in entries {
        if skip.contains(variant) {
            debug!("Dropping skip-listed variant: {}", variant);
            continue;
        }
        match exclusion_reason(variant, canonical, ts_table) {
            Some(reason) => {
                debug!("Excluding {} -> {} ({})", variant, canonical, reason);
                excluded.push(format!("{}\t{}", variant, canonical));
            }
            None => accepted.push(format!("{}\t{}", variant, canonical)),
        }
    }

    write_file(&out_dir.join(OUTPUT_ACCEPTED), "", &accepted);
    write_file(
        &out_dir.join(OUTPUT_EXCLUDED),
        "# Entries excluded from the accepted mapping by heuristic:\n\
         # parentheses, whitespace, ASCII-only or Latin/pinyin-only strings,\n\
         # a digit on exactly one side, or a pair the standard traditional->\n\
         # simplified table already covers.",
        &excluded,
    );

    let report = WriteReport {
        written: accepted.len(),
        total: table.len(),
    };
    info!(
        "Dictionary outputs written to {}: {}/{} accepted, {} excluded, {} conflicts",
        out_dir.display(),
        report.written,
        report.total,
        excluded.len(),
        conflict_lines.len()
    );
    Ok(report)
}

/// Write one output file; failures are logged, not raised.
fn write_file(path: &Path, header: &str, lines: &[String]) {
    let result = fs::File::create(path).and_then(|file| {
        let mut out = std::io::BufWriter::new(file);
        if !header.is_empty() {
            writeln!(out, "{}", header)?;
        }
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    });
    if let Err(e) = result {
        warn!("Unable to write {}: {}", path.display(), e);
    }
}
