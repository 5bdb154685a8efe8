use std::env;
use std::path::Path;

use wikicc::split::split_file;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!("Usage: {} <input-path> <output-folder> [chunk-count=1]", args[0]);
        println!("  input-path: text file to split");
        println!("  output-folder: folder receiving the wiki_NN.txt chunks");
        println!("  chunk-count: approximate number of equally sized chunks");
        return;
    }

    let input = Path::new(&args[1]);
    let out_dir = Path::new(&args[2]);
    let chunk_count: usize = match args.get(3) {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("ERROR: chunk-count must be an integer, got {:?}", raw);
                return;
            }
        },
        None => 1,
    };

    match split_file(input, out_dir, chunk_count) {
        Ok(written) => println!("Split into {} files in {}", written, out_dir.display()),
        Err(e) => eprintln!("ERROR: Split failed: {}", e),
    }
}
