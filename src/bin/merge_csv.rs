use std::env;
use std::path::Path;

use wikicc::merge_csv::merge_csv;

const DEFAULT_SUFFIX: &str = ".filted.csv";

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!(
            "Usage: {} <input-folder> <output-name> [min-count=0] [input-suffix={}]",
            args[0], DEFAULT_SUFFIX
        );
        println!("  input-folder: folder scanned for key\\tcount files");
        println!("  output-name: base name of the merged csv/txt outputs");
        println!("  min-count: keys summing to more than this go into the .txt list");
        println!("  input-suffix: only file names ending in this are merged");
        return;
    }

    let input_folder = Path::new(&args[1]);
    let output_name = &args[2];
    let min_count: u64 = match args.get(3) {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("ERROR: min-count must be an integer, got {:?}", raw);
                return;
            }
        },
        None => 0,
    };
    let suffix = args.get(4).map(String::as_str).unwrap_or(DEFAULT_SUFFIX);

    match merge_csv(input_folder, output_name, min_count, suffix) {
        Ok(report) => {
            println!("Contains {} keys", report.total_keys);
            if report.total_keys > 0 {
                println!(
                    "Output dict {} {}%",
                    report.kept_keys,
                    100 * report.kept_keys / report.total_keys
                );
            }
        }
        Err(e) => eprintln!("ERROR: Merge failed: {}", e),
    }
}
