//! Data structures shared across the extraction pipeline

/// Per-file section statistics reported by the extraction pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStats {
    /// Sections seen (every `<doc` start marker).
    pub total_sections: u64,
    /// Sections long enough to be kept and rewritten.
    pub kept_sections: u64,
    /// Distinct variant mappings discovered in this file.
    pub dict_entries: usize,
}

impl FileStats {
    /// Kept-to-total ratio as a percentage, rounded to two decimals.
    /// Returns 0.0 when the file contained no sections.
    pub fn percentage(&self) -> f64 {
        if self.total_sections == 0 {
            return 0.0;
        }
        let ratio = self.kept_sections as f64 / self.total_sections as f64 * 100.0;
        (ratio * 100.0).round() / 100.0
    }
}

/// Outcome of writing the categorized dictionary outputs.
#[derive(Debug, Clone, Copy)]
pub struct WriteReport {
    /// Entries that made it into the accepted output file.
    pub written: usize,
    /// Total entries in the run-wide mapping.
    pub total: usize,
}
