//! Build script to generate embedded word lists
//!
//! Reads the per-language dictionaries and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words_en.txt",
        &Path::new(&out_dir).join("words_en.rs"),
        "WORDS_EN",
        "English dictionary of valid five-letter words",
    );

    generate_word_list(
        "data/words_es.txt",
        &Path::new(&out_dir).join("words_es.rs"),
        "WORDS_ES",
        "Spanish dictionary of valid five-letter words (includes Ñ)",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/words_en.txt");
    println!("cargo:rerun-if-changed=data/words_es.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|line| !line.is_empty())
        .collect();

    for word in &words {
        assert!(
            word.chars().count() == 5,
            "{input_path}: '{word}' is not five letters"
        );
    }

    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
