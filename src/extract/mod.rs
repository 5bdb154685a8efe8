//! Wikipedia-dump extraction pipeline
//!
//! Ties the pipeline stages together: section scanning, locale-block
//! extraction, run-wide accumulation, and categorized dictionary output.

pub mod error;
pub mod locale;
pub mod models;
pub mod sections;
pub mod skiplist;
pub mod table;
pub mod writer;

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

pub use error::{Result, WikiccError};
use models::FileStats;
use sections::SectionReader;
use table::TranslationTable;

/// Driver for one extraction run over a folder of dump files.
///
/// Owns the run-wide [`TranslationTable`]; each processed file contributes
/// its mappings and conflicts to it.
pub struct Extractor {
    min_length: usize,
    table: TranslationTable,
}

impl Extractor {
    /// Create an extractor keeping only sections longer than `min_length`
    /// bytes.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            table: TranslationTable::new(),
        }
    }

    /// Process one dump file.
    ///
    /// Every kept section is rewritten (locale blocks replaced by their
    /// variant tokens) and appended as one line to `output`. The section
    /// mappings are merged into the run-wide table.
    ///
    /// # Errors
    /// Returns an error if the input cannot be opened or the output cannot
    /// be written.
    pub fn process_file(&mut self, input: &Path, output: &Path) -> Result<FileStats> {
        info!("Processing dump file: {}", input.display());
        let reader = BufReader::new(File::open(input)?);
        let mut section_reader = SectionReader::new(reader, self.min_length);

        let out_file = OpenOptions::new().create(true).append(true).open(output)?;
        let mut out = BufWriter::new(out_file);

        // Per-file table so callers can report how much this file added.
        let mut file_table = TranslationTable::new();
        while let Some(section) = section_reader.next_section()? {
            let extraction = locale::split_article(&section);
            writeln!(out, "{}", extraction.text)?;
            file_table.merge_section(&extraction);
        }
        out.flush()?;

        self.table.merge(&file_table);

        let stats = FileStats {
            total_sections: section_reader.total_sections(),
            kept_sections: section_reader.kept_sections(),
            dict_entries: file_table.len(),
        };
        info!(
            "{}: {} sections, {} kept, {} mappings",
            input.display(),
            stats.total_sections,
            stats.kept_sections,
            stats.dict_entries
        );
        Ok(stats)
    }

    /// The run-wide table accumulated so far.
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Consume the extractor, yielding the run-wide table.
    pub fn into_table(self) -> TranslationTable {
        self.table
    }
}
