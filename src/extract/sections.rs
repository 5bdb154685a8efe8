//! Dump section scanning and line normalization
//!
//! A wikiextractor dump is a plain text stream in which every article sits
//! between a `<doc` start marker line and a `</doc>` end marker line. This
//! module walks that stream, buffers the lines of the current section, and
//! hands back one flattened single-line string per section whose raw buffered
//! size exceeds the caller's minimum. Everything else is dropped silently.

use std::io::BufRead;
use std::sync::OnceLock;

use encoding_rs::UTF_8;
use log::{debug, warn};
use regex::Regex;

/// Compiled regex for isolated printable-ASCII runs.
///
/// Matches a run of printable-ASCII characters (tab through tilde) enclosed
/// in whitespace. Such runs are markup or foreign-token noise between CJK
/// text and are collapsed to a single space so that tokens on either side do
/// not fuse when the section is flattened.
static ASCII_RUN: OnceLock<Regex> = OnceLock::new();

fn ascii_run_regex() -> &'static Regex {
    ASCII_RUN.get_or_init(|| Regex::new(r"\s[\x09-~]+\s").expect("Invalid ASCII-run pattern"))
}

/// Middle-dot glyphs that appear interchangeably in zh-wiki article text.
/// All of them are normalized to U+00B7 before any further processing.
const MIDDLE_DOTS: &[char] = &['\u{2027}', '\u{2022}', '\u{30FB}', '\u{2219}', '\u{22C5}'];

const CANONICAL_DOT: char = '\u{00B7}';

/// Streaming reader over the sections of one dump file.
///
/// Pull-based: `next_section` advances the underlying stream until the next
/// kept section (or end of input) and returns its flattened text. Section
/// counters are available at any point and are final once `next_section`
/// returns `None`.
pub struct SectionReader<R: BufRead> {
    input: R,
    min_length: usize,
    buffer: String,
    line_bytes: Vec<u8>,
    total_sections: u64,
    kept_sections: u64,
    saw_invalid_utf8: bool,
}

impl<R: BufRead> SectionReader<R> {
    /// Create a reader over `input` keeping only sections whose buffered
    /// byte length exceeds `min_length`.
    pub fn new(input: R, min_length: usize) -> Self {
        Self {
            input,
            min_length,
            buffer: String::new(),
            line_bytes: Vec::new(),
            total_sections: 0,
            kept_sections: 0,
            saw_invalid_utf8: false,
        }
    }

    /// Number of start markers seen so far.
    pub fn total_sections(&self) -> u64 {
        self.total_sections
    }

    /// Number of sections that passed the length threshold so far.
    pub fn kept_sections(&self) -> u64 {
        self.kept_sections
    }

    /// Advance to the next section that passes the length threshold and
    /// return its flattened text, or `None` at end of input.
    pub fn next_section(&mut self) -> std::io::Result<Option<String>> {
        loop {
            self.line_bytes.clear();
            let n = self.input.read_until(b'\n', &mut self.line_bytes)?;
            if n == 0 {
                return Ok(None);
            }

            // Best-effort decode; invalid sequences become replacement chars.
            let (line, _, had_errors) = UTF_8.decode(&self.line_bytes);
            if had_errors && !self.saw_invalid_utf8 {
                self.saw_invalid_utf8 = true;
                warn!("Input contains invalid UTF-8; decoding with replacement characters");
            }

            if line.starts_with("<doc") {
                // Start marker: reset the buffer. Marker ordering is not
                // validated; a stray start marker simply discards whatever
                // was buffered.
                self.total_sections += 1;
                self.buffer.clear();
                continue;
            }

            if line.starts_with("</doc>") {
                if self.buffer.len() > self.min_length {
                    self.kept_sections += 1;
                    let flattened = self.buffer.replace('\n', " ");
                    debug!(
                        "Section {} kept ({} bytes buffered)",
                        self.total_sections,
                        self.buffer.len()
                    );
                    return Ok(Some(flattened));
                }
                continue;
            }

            // Lines made entirely of 7-bit characters are markup noise.
            if line.bytes().all(|b| b < 0x80) {
                continue;
            }

            self.buffer.push_str(&normalize_line(&line));
        }
    }
}

/// Normalize one raw section line before buffering it: unify middle-dot
/// glyphs, then collapse isolated printable-ASCII runs to a single space.
fn normalize_line(line: &str) -> String {
    let unified: String = line
        .chars()
        .map(|c| if MIDDLE_DOTS.contains(&c) { CANONICAL_DOT } else { c })
        .collect();
    ascii_run_regex().replace_all(&unified, " ").into_owned()
}
