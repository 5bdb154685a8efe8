use std::fs;
use std::path::PathBuf;

use wikicc::merge_csv::merge_csv;
use wikicc::split::split_file;
use wikicc::word_filter::{filter_words, output_path};
use wikicc::WikiccError;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wikicc-batch-{}-{}", name, std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("clear scratch dir");
    }
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn merge_csv_sums_counts_and_writes_all_outputs() {
    let dir = scratch_dir("merge");
    fs::write(dir.join("a.filted.csv"), "苹果\t3\n梨\t2\n").expect("write input a");
    fs::write(dir.join("b.filted.csv"), "苹果\t4\nmalformed line without tab\n")
        .expect("write input b");
    fs::write(dir.join("c.other.csv"), "苹果\t100\n").expect("write ignored input");

    let report = merge_csv(&dir, "merged", 2, ".filted.csv").expect("merge");
    assert_eq!(report.files_merged, 2, "suffix filter selects two files");
    assert_eq!(report.total_keys, 2);
    assert_eq!(report.kept_keys, 1, "only 苹果 (7) exceeds the threshold 2");

    let merged = fs::read_to_string(dir.join("merged.csv")).expect("read merged table");
    assert_eq!(merged, "梨\t2\n苹果\t7\n", "counts summed, sorted by key");

    let kept = fs::read_to_string(dir.join("merged.txt")).expect("read threshold list");
    assert_eq!(kept, "苹果\n");

    let freq = fs::read_to_string(dir.join("merged.freq.csv")).expect("read histogram");
    let lines: Vec<&str> = freq.lines().collect();
    assert_eq!(lines[0], "词频, 词条数, 累积比例");
    assert_eq!(lines[1], "2, 1, 0.5");
    assert_eq!(lines[2], "7, 1, 1");
    assert_eq!(lines.len(), 3);
}

#[test]
fn merge_csv_is_idempotent_across_runs() {
    let dir = scratch_dir("merge-idem");
    fs::write(dir.join("a.filted.csv"), "词\t5\n条\t1\n").expect("write input");

    merge_csv(&dir, "merged", 0, ".filted.csv").expect("first merge");
    let first = fs::read_to_string(dir.join("merged.csv")).expect("read first result");

    // The outputs do not match the input suffix, so a rerun sees the same
    // inputs and must produce the same sums.
    merge_csv(&dir, "merged", 0, ".filted.csv").expect("second merge");
    let second = fs::read_to_string(dir.join("merged.csv")).expect("read second result");
    assert_eq!(first, second, "re-merging must not double counts");
}

#[test]
fn merge_csv_with_no_matching_files_writes_nothing() {
    let dir = scratch_dir("merge-empty");
    let report = merge_csv(&dir, "merged", 0, ".filted.csv").expect("merge empty folder");
    assert_eq!(report.total_keys, 0);
    assert!(!dir.join("merged.csv").exists(), "no outputs for zero keys");
}

#[test]
fn split_chunks_concatenate_back_to_the_original() {
    let dir = scratch_dir("split");
    let input = dir.join("input.txt");
    let mut content = String::new();
    for i in 0..50 {
        content.push_str(&format!("第{}行：一些多字节文本内容。\n", i));
    }
    content.push_str("最后一行没有换行符");
    fs::write(&input, &content).expect("write split input");

    let out_dir = dir.join("chunks");
    let written = split_file(&input, &out_dir, 3).expect("split");
    assert!(written >= 2, "a 3-way split of this input yields multiple files");

    let mut reassembled = Vec::new();
    for i in 0..written {
        let chunk = out_dir.join(format!("wiki_{:02}.txt", i));
        reassembled.extend(fs::read(&chunk).expect("read chunk"));
    }
    assert_eq!(
        reassembled,
        content.as_bytes(),
        "concatenated chunks must reproduce the input byte for byte"
    );
}

#[test]
fn split_rejects_zero_chunks() {
    let dir = scratch_dir("split-zero");
    let input = dir.join("input.txt");
    fs::write(&input, "内容\n").expect("write input");
    match split_file(&input, &dir.join("chunks"), 0) {
        Err(WikiccError::InvalidChunkCount(0)) => {}
        other => panic!("expected InvalidChunkCount, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn word_filter_counts_lines_not_occurrences() {
    let dir = scratch_dir("word-filter");
    let dict = dir.join("words.txt");
    let corpus = dir.join("corpus.txt");
    fs::write(&dict, "电脑\n苹果\n空 格\n字\n").expect("write dict");
    fs::write(
        &corpus,
        "我买了一台电脑，电脑很快。\n苹果很好吃。\n这行提到空格这个词。\n",
    )
    .expect("write corpus");

    let report = filter_words(&dict, &corpus).expect("filter");
    assert_eq!(report.corpus_lines, 3);
    assert_eq!(report.dict_words, 3, "single-character words are skipped");
    assert_eq!(report.matched, 3);

    let out = fs::read_to_string(output_path(&corpus)).expect("read counts");
    let lines: Vec<&str> = out.lines().collect();
    assert!(
        lines.contains(&"电脑\t1"),
        "two occurrences on one line count once: {:?}",
        lines
    );
    assert!(lines.contains(&"苹果\t1"));
    assert!(
        lines.contains(&"空格\t1"),
        "dictionary-side whitespace is stripped before matching: {:?}",
        lines
    );
}
