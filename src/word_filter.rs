//! Per-word corpus occurrence counting
//!
//! For every word of a dictionary file, counts how many lines of a corpus
//! file contain it as a substring, and writes a `word<TAB>count` CSV next to
//! the corpus (`<corpus>.filted.csv`) for words that occur at all. These
//! CSVs are the inputs later summed by the key-count merger.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use encoding_rs::UTF_8;
use log::{info, warn};
use regex::Regex;

use crate::extract::error::Result;

static WHITESPACE: OnceLock<Regex> = OnceLock::new();

fn whitespace_regex() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace pattern"))
}

/// Outcome of one filtering run.
#[derive(Debug, Clone, Copy)]
pub struct FilterReport {
    /// Lines in the corpus file.
    pub corpus_lines: usize,
    /// Usable dictionary words (single-character words are skipped).
    pub dict_words: usize,
    /// Words that occurred in at least one corpus line.
    pub matched: usize,
}

/// Output path for a corpus file: the corpus path with `.filted.csv`
/// appended.
pub fn output_path(corpus: &Path) -> PathBuf {
    let mut name = OsString::from(corpus.as_os_str());
    name.push(".filted.csv");
    PathBuf::from(name)
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let (text, _, had_errors) = UTF_8.decode(&bytes);
    if had_errors {
        warn!(
            "{} contains invalid UTF-8; decoding with replacement characters",
            path.display()
        );
    }
    Ok(text.into_owned())
}

/// Count corpus-line occurrences for every dictionary word.
///
/// Dictionary lines have all whitespace stripped; what remains is skipped
/// when it is a single character or empty. A word's count is the number of
/// corpus LINES containing it, not the number of occurrences.
pub fn filter_words(dict_path: &Path, corpus_path: &Path) -> Result<FilterReport> {
    let corpus = read_lossy(corpus_path)?;
    let lines: Vec<&str> = corpus.lines().collect();
    info!("Corpus {}: {} lines", corpus_path.display(), lines.len());

    let dict = read_lossy(dict_path)?;
    let words: Vec<String> = dict
        .lines()
        .map(|line| whitespace_regex().replace_all(line, "").into_owned())
        .filter(|word| word.chars().count() > 1)
        .collect();
    info!("Dictionary {}: {} words", dict_path.display(), words.len());

    let out_path = output_path(corpus_path);
    let mut out = std::io::BufWriter::new(fs::File::create(&out_path)?);
    let mut matched = 0usize;
    for word in &words {
        let count = lines.iter().filter(|line| line.contains(word.as_str())).count();
        if count > 0 {
            matched += 1;
            writeln!(out, "{}\t{}", word, count)?;
        }
    }
    out.flush()?;

    info!(
        "{}: {}/{} words matched",
        out_path.display(),
        matched,
        words.len()
    );
    Ok(FilterReport {
        corpus_lines: lines.len(),
        dict_words: words.len(),
        matched,
    })
}
