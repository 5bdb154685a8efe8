use std::env;
use std::path::Path;

use wikicc::extract::{skiplist::SkipList, writer, Extractor};

/// Folder holding the filter lists and receiving the dictionary outputs.
const SCRIPTS_DIR: &str = "scripts";

/// Block/allow list files consulted at write time (first tab field = key).
const FILTER_LISTS: &[&str] = &[
    "blacklist.opencc.txt",
    "blacklist2.opencc.txt",
    "Translation.txt",
];

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!("Usage: {} <folder-path> <min-length>", args[0]);
        println!("  folder-path: folder of dump files to scan");
        println!("  min-length: sections with fewer buffered bytes are dropped");
        return;
    }

    let folder = Path::new(&args[1]);
    let min_length: usize = match args[2].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("ERROR: min-length must be an integer, got {:?}", args[2]);
            return;
        }
    };

    let entries = match folder.read_dir() {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("ERROR: Unable to read folder {}: {}", folder.display(), e);
            return;
        }
    };

    let mut extractor = Extractor::new(min_length);
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        // Dump files carry no extension; skip everything already produced.
        .filter(|name| !name.contains('.'))
        .collect();
    names.sort();

    for name in &names {
        let input = folder.join(name);
        let output = folder.join(format!("{}.txt", name));
        match extractor.process_file(&input, &output) {
            Ok(stats) => println!(
                "Input: {}, Output: {}, Percentage: {}%, dict: {} File: {}",
                stats.total_sections,
                stats.kept_sections,
                stats.percentage(),
                stats.dict_entries,
                name
            ),
            Err(e) => eprintln!("ERROR: Failed to process {}: {}", input.display(), e),
        }
    }

    let scripts = Path::new(SCRIPTS_DIR);
    let list_paths: Vec<_> = FILTER_LISTS.iter().map(|name| scripts.join(name)).collect();
    let skip = SkipList::load(&list_paths);
    let ts_table = writer::load_ts_table(&scripts.join(writer::TS_TABLE_FILE));

    match writer::write_outputs(scripts, extractor.table(), &skip, ts_table.as_ref()) {
        Ok(report) => println!("Write OpenCC: {}/{}", report.written, report.total),
        Err(e) => eprintln!("ERROR: Failed to write dictionary outputs: {}", e),
    }
}
