//! Run-wide mapping accumulation with conflict bookkeeping

use std::collections::{BTreeSet, HashMap};

use log::trace;

use super::locale::SectionExtraction;

/// The run-wide variant → canonical mapping and its conflict side-table.
///
/// Merge policy: the first canonical value written for a variant stays
/// authoritative. A later write with a different canonical value leaves the
/// mapping untouched but records both the old and the new association in the
/// conflict set. The two are distinct containers on purpose; conflicts are
/// only ever added to, never consulted during merging.
#[derive(Debug, Default)]
pub struct TranslationTable {
    mapping: HashMap<String, String>,
    conflicts: BTreeSet<(String, String)>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one variant → canonical association.
    pub fn insert(&mut self, variant: &str, canonical: &str) {
        match self.mapping.get(variant) {
            Some(previous) if previous != canonical => {
                trace!(
                    "Conflicting mapping for {}: kept {}, also saw {}",
                    variant, previous, canonical
                );
                self.conflicts
                    .insert((variant.to_string(), previous.clone()));
                self.conflicts
                    .insert((variant.to_string(), canonical.to_string()));
            }
            Some(_) => {}
            None => {
                self.mapping
                    .insert(variant.to_string(), canonical.to_string());
            }
        }
    }

    /// Merge everything one section produced, conflicts included.
    pub fn merge_section(&mut self, extraction: &SectionExtraction) {
        for (variant, canonical) in &extraction.mapping {
            self.insert(variant, canonical);
        }
        for pair in &extraction.conflicts {
            self.conflicts.insert(pair.clone());
        }
    }

    /// Merge another table into this one (used to fold per-file tables into
    /// the run-wide one).
    pub fn merge(&mut self, other: &TranslationTable) {
        for (variant, canonical) in &other.mapping {
            self.insert(variant, canonical);
        }
        for pair in &other.conflicts {
            self.conflicts.insert(pair.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn get(&self, variant: &str) -> Option<&str> {
        self.mapping.get(variant).map(String::as_str)
    }

    pub fn mapping(&self) -> &HashMap<String, String> {
        &self.mapping
    }

    pub fn conflicts(&self) -> &BTreeSet<(String, String)> {
        &self.conflicts
    }
}
