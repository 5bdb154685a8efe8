//! Line-preserving file splitting
//!
//! Partitions a large text file into N numbered chunk files of roughly equal
//! byte size. Only whole lines are ever moved, so concatenating the chunks
//! in order reproduces the input byte for byte.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::extract::error::{Result, WikiccError};

fn chunk_path(out_dir: &Path, index: usize) -> PathBuf {
    out_dir.join(format!("wiki_{:02}.txt", index))
}

/// Split `input` into `chunk_count` files named `wiki_00.txt`, `wiki_01.txt`,
/// ... inside `out_dir`.
///
/// The per-chunk byte budget is the input size divided by the requested
/// count; a chunk rolls over once a whole line pushes it to or past the
/// budget, so chunk sizes are approximate and the final chunk absorbs the
/// remainder. Returns the number of chunk files written.
pub fn split_file(input: &Path, out_dir: &Path, chunk_count: usize) -> Result<usize> {
    if chunk_count == 0 {
        return Err(WikiccError::InvalidChunkCount(chunk_count));
    }
    fs::create_dir_all(out_dir)?;

    let input_size = fs::metadata(input)?.len();
    let budget = input_size / chunk_count as u64;
    info!(
        "Splitting {} ({} bytes) into ~{} chunks of ~{} bytes",
        input.display(),
        input_size,
        chunk_count,
        budget
    );

    let mut reader = BufReader::new(File::open(input)?);
    let mut line = Vec::new();
    let mut index = 0usize;
    let mut current: Option<BufWriter<File>> = None;
    let mut current_size = 0u64;
    let mut written = 0usize;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        // Open chunks lazily so a budget boundary at end of input does not
        // leave a trailing empty file.
        if current.is_none() {
            let path = chunk_path(out_dir, index);
            debug!("Opening chunk {}", path.display());
            written += 1;
            current = Some(BufWriter::new(File::create(path)?));
        }
        if let Some(out) = current.as_mut() {
            out.write_all(&line)?;
        }
        current_size += line.len() as u64;
        if current_size >= budget {
            if let Some(mut out) = current.take() {
                out.flush()?;
            }
            index += 1;
            current_size = 0;
        }
    }
    if let Some(mut out) = current.take() {
        out.flush()?;
    }

    info!("Wrote {} chunk files to {}", written, out_dir.display());
    Ok(written)
}
