use std::env;
use std::path::Path;

use wikicc::word_filter::{filter_words, output_path};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!("Usage: {} <dict-file> <text-file>", args[0]);
        println!("  dict-file: word list, one word per line (single chars skipped)");
        println!("  text-file: corpus whose lines are searched for each word");
        return;
    }

    let dict = Path::new(&args[1]);
    let corpus = Path::new(&args[2]);

    match filter_words(dict, corpus) {
        Ok(report) => {
            println!("Corpus lines: {}", report.corpus_lines);
            println!("Dictionary words: {}", report.dict_words);
            println!(
                "Matched {} words -> {}",
                report.matched,
                output_path(corpus).display()
            );
        }
        Err(e) => eprintln!("ERROR: Filtering failed: {}", e),
    }
}
