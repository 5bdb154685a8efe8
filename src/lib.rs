//! # wikicc
//!
//! Offline batch tools that preprocess a wikiextractor text dump for
//! building a Chinese input-method / OpenCC character-conversion dictionary.
//!
//! The core pipeline scans dump sections, extracts locale-tagged translation
//! blocks into a variant → simplified-Chinese mapping (with conflict
//! bookkeeping), rewrites the article text, and writes categorized flat-file
//! dictionaries. Independent batch utilities cover word-occurrence counting,
//! key-count CSV merging, and byte-budget file splitting.
pub mod extract;
pub mod merge_csv;
pub mod split;
pub mod word_filter;

// Re-export the main types for convenience
pub use extract::{
    error::{Result, WikiccError},
    models::{FileStats, WriteReport},
    skiplist::SkipList,
    table::TranslationTable,
    Extractor,
};
