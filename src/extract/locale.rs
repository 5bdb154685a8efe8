//! # Locale Block Extraction & Rewriting
//!
//! A flattened section string may embed locale blocks: brace-delimited lists
//! of the same concept spelled in several Chinese script variants, e.g.
//!
//! ```text
//! {H|zh-cn:计算机; zh-sg:电脑; zh-tw:電腦;}
//! ```
//!
//! This module finds every such block, extracts a variant → canonical
//! (simplified-Chinese) mapping from it, and rewrites the section text so the
//! block is replaced by a plain variant token. Blocks that fail the
//! acceptance thresholds are left in the text untouched.

use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use log::{trace, warn};
use regex::Regex;

/// Structural pattern for a candidate locale block: a brace pair containing
/// the literal tag `zh` and no nested braces, brackets, or equals signs.
static LOCALE_BLOCK: OnceLock<Regex> = OnceLock::new();

fn locale_block_regex() -> &'static Regex {
    LOCALE_BLOCK.get_or_init(|| {
        Regex::new(r"\{[^{}\[\]=]+zh[^{}\[\]=]+\}").expect("Invalid locale block pattern")
    })
}

/// Pattern capturing the canonical simplified-Chinese value of a block.
static CANONICAL_TAG: OnceLock<Regex> = OnceLock::new();

fn canonical_tag_regex() -> &'static Regex {
    CANONICAL_TAG
        .get_or_init(|| Regex::new(r"(zh-hans|zh-cn):([^;]+)").expect("Invalid canonical pattern"))
}

/// Longest canonical value accepted, in characters.
const MAX_VALUE_CHARS: usize = 30;

/// Shortest variant value accepted, in characters.
const MIN_VALUE_CHARS: usize = 2;

/// CJK punctuation ignored when judging whether a canonical value has any
/// meaningful content left.
const CJK_PUNCTUATION: &[char] = &[
    '，', '。', '、', '；', '：', '？', '！', '「', '」', '『', '』', '（', '）', '《', '》',
    '〈', '〉', '【', '】', '〔', '〕', '…', '—', '～', '·', '“', '”', '‘', '’', '＂', '＇',
    '．', '､', '｡', '｢', '｣', '　',
];

/// Everything extracted from one flattened section string.
#[derive(Debug, Default)]
pub struct SectionExtraction {
    /// variant → canonical mappings discovered in this section.
    pub mapping: HashMap<String, String>,
    /// The section text with each qualifying block replaced by its token.
    pub text: String,
    /// (variant, canonical) pairs that disagreed within this section.
    pub conflicts: BTreeSet<(String, String)>,
}

/// Scan one flattened section string for locale blocks.
///
/// Each structural match is parsed into `locale:value` pairs keyed by the
/// block's canonical value (`zh-hans`/`zh-cn`). Qualifying pairs enter the
/// section mapping (first write wins, disagreements recorded as conflicts)
/// and register a substitution of the block's raw text by the pair's variant
/// token. Rewriting happens in a single pass keyed by block text, replacing
/// only the first occurrence, so two blocks sharing identical raw text are
/// never substituted twice.
pub fn split_article(text: &str) -> SectionExtraction {
    let mut mapping: HashMap<String, String> = HashMap::new();
    let mut conflicts: BTreeSet<(String, String)> = BTreeSet::new();
    // block raw text -> variant token to substitute for it
    let mut substitutions: HashMap<String, String> = HashMap::new();

    for block in locale_block_regex().find_iter(text) {
        let raw = block.as_str();
        let inner = raw[1..raw.len() - 1].trim();
        let inner = inner.strip_prefix("H|").unwrap_or(inner);

        let Some(caps) = canonical_tag_regex().captures(inner) else {
            trace!("No canonical tag in candidate block: {}", inner);
            continue;
        };
        let canonical = caps[2].trim().to_string();
        if !canonical_acceptable(&canonical) {
            trace!("Rejecting block, canonical value fails thresholds: {}", canonical);
            continue;
        }

        let segments: Vec<&str> = inner.split(';').collect();
        if segments.len() < 2 {
            warn!("Skipping block with fewer than 2 locale segments: {}", inner);
            continue;
        }

        for segment in segments {
            if segment.chars().count() < MIN_VALUE_CHARS {
                continue;
            }
            let Some((_, value)) = segment.split_once(':') else {
                trace!("Skipping unparseable locale pair: {}", segment);
                continue;
            };
            let value = value.trim();
            if value == canonical {
                continue;
            }
            let value_chars = value.chars().count();
            if !(MIN_VALUE_CHARS..=MAX_VALUE_CHARS).contains(&value_chars) {
                continue;
            }

            match mapping.get(value) {
                Some(previous) if *previous != canonical => {
                    // Re-mapped within the same section: keep the first
                    // canonical value, report both associations.
                    conflicts.insert((value.to_string(), previous.clone()));
                    conflicts.insert((value.to_string(), canonical.clone()));
                }
                Some(_) => {}
                None => {
                    mapping.insert(value.to_string(), canonical.clone());
                    substitutions.insert(raw.to_string(), value.to_string());
                }
            }
        }
    }

    let mut rewritten = text.to_string();
    for (block, token) in &substitutions {
        rewritten = rewritten.replacen(block.as_str(), token, 1);
    }

    SectionExtraction {
        mapping,
        text: rewritten,
        conflicts,
    }
}

/// Acceptance thresholds for a canonical value: at most 30 raw characters,
/// at least one character outside the 7-bit range, and at least 2 characters
/// remaining once CJK/ASCII punctuation is stripped.
fn canonical_acceptable(value: &str) -> bool {
    if value.chars().count() > MAX_VALUE_CHARS {
        return false;
    }
    if value.chars().all(|c| (c as u32) < 128) {
        return false;
    }
    let meaningful = value
        .chars()
        .filter(|c| !c.is_ascii_punctuation() && !CJK_PUNCTUATION.contains(c))
        .count();
    meaningful >= MIN_VALUE_CHARS
}
