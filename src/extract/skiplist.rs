//! Skip list loading (block lists and the authoritative allow list)

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{info, warn};

/// Immutable union of every key appearing in the configured block/allow
/// list files. Built once per run and passed by reference into the writer;
/// entries whose variant string is in here never reach the accepted output.
#[derive(Debug, Default)]
pub struct SkipList {
    keys: HashSet<String>,
}

impl SkipList {
    /// Load and union the given list files.
    ///
    /// Each line's first tab-delimited field is the key. A missing file is
    /// non-fatal: it is logged and contributes nothing.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut keys = HashSet::new();
        for path in paths {
            let path = path.as_ref();
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("Filter list {} unavailable, treated as empty: {}", path.display(), e);
                    continue;
                }
            };
            let before = keys.len();
            for line in content.lines() {
                let key = line.split('\t').next().unwrap_or("").trim();
                if !key.is_empty() {
                    keys.insert(key.to_string());
                }
            }
            info!(
                "Loaded {} keys from filter list {}",
                keys.len() - before,
                path.display()
            );
        }
        Self { keys }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
