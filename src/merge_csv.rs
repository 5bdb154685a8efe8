//! Key-count CSV merging
//!
//! Sums per-key counts across every `key<TAB>count` file in a folder that
//! matches a suffix filter, then writes the merged table, a lexicographically
//! sorted list of keys above a count threshold, and a count-frequency
//! histogram with a running cumulative fraction.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use log::{info, warn};

use crate::extract::error::{Result, WikiccError};

/// Outcome of one merge run.
#[derive(Debug, Clone, Copy)]
pub struct MergeReport {
    /// Input files that matched the suffix filter.
    pub files_merged: usize,
    /// Distinct keys across all inputs.
    pub total_keys: usize,
    /// Keys whose summed count exceeded the threshold.
    pub kept_keys: usize,
}

/// Merge every `*{suffix}` file in `input_folder`.
///
/// Outputs (written into the input folder, skipped entirely when no keys
/// were found):
/// - `{output_name}.csv` — merged `key<TAB>count` table, sorted by key.
/// - `{output_name}.txt` — keys with count > `min_count`, sorted.
/// - `{output_name}.freq.csv` — `count, keys-with-that-count, cumulative
///   fraction` rows in ascending count order.
///
/// Lines without a tab are reported and skipped; so are lines whose count
/// does not parse.
pub fn merge_csv(
    input_folder: &Path,
    output_name: &str,
    min_count: u64,
    suffix: &str,
) -> Result<MergeReport> {
    if !input_folder.is_dir() {
        return Err(WikiccError::NotADirectory(input_folder.to_path_buf()));
    }

    let mut key_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut files_merged = 0usize;

    let mut names: Vec<String> = fs::read_dir(input_folder)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(suffix))
        .collect();
    names.sort();

    for name in &names {
        info!("Merging {}", name);
        files_merged += 1;
        let content = fs::read_to_string(input_folder.join(name))?;
        for line in content.lines() {
            match line.split_once('\t') {
                Some((key, value)) => match value.trim().parse::<u64>() {
                    Ok(count) => {
                        *key_counts.entry(key.to_string()).or_insert(0) += count;
                    }
                    Err(_) => warn!("Unparseable count in {}: {}", name, line),
                },
                None => {
                    if !line.trim().is_empty() {
                        warn!("Malformed line in {} (no tab): {}", name, line);
                    }
                }
            }
        }
    }

    let total_keys = key_counts.len();
    if total_keys == 0 {
        info!("No keys found, skipping output files");
        return Ok(MergeReport {
            files_merged,
            total_keys: 0,
            kept_keys: 0,
        });
    }

    // Merged table, sorted by key.
    let merged_path = input_folder.join(format!("{}.csv", output_name));
    let mut merged = std::io::BufWriter::new(fs::File::create(&merged_path)?);
    let mut kept: Vec<&String> = Vec::new();
    let mut count_freq: BTreeMap<u64, u64> = BTreeMap::new();
    for (key, count) in &key_counts {
        writeln!(merged, "{}\t{}", key, count)?;
        if *count > min_count {
            kept.push(key);
        }
        *count_freq.entry(*count).or_insert(0) += 1;
    }
    merged.flush()?;

    // Threshold list; BTreeMap iteration already yields lexicographic order.
    let keys_path = input_folder.join(format!("{}.txt", output_name));
    let mut keys_out = std::io::BufWriter::new(fs::File::create(&keys_path)?);
    for key in &kept {
        writeln!(keys_out, "{}", key)?;
    }
    keys_out.flush()?;

    // Histogram with running cumulative fraction of keys covered.
    let freq_path = input_folder.join(format!("{}.freq.csv", output_name));
    let mut freq_out = std::io::BufWriter::new(fs::File::create(&freq_path)?);
    writeln!(freq_out, "词频, 词条数, 累积比例")?;
    let mut cumulative = 0u64;
    for (count, freq) in &count_freq {
        cumulative += freq;
        writeln!(
            freq_out,
            "{}, {}, {}",
            count,
            freq,
            cumulative as f64 / total_keys as f64
        )?;
    }
    freq_out.flush()?;

    info!(
        "Merged {} files: {} keys, {} above threshold {}",
        files_merged,
        total_keys,
        kept.len(),
        min_count
    );
    Ok(MergeReport {
        files_merged,
        total_keys,
        kept_keys: kept.len(),
    })
}
