//! Build script to generate the bundled wordlists
//!
//! Reads every `data/wordlists/<category>.txt` file and generates Rust source
//! with one const table of `(category, entries)` pairs.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let input_dir = Path::new("data/wordlists");

    let mut categories: Vec<(String, Vec<String>)> = fs::read_dir(input_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", input_dir.display()))
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .map(|path| {
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            (name, read_entries(&path))
        })
        .collect();

    // read_dir order is platform dependent
    categories.sort();

    generate_wordlists(&Path::new(&out_dir).join("defaults.rs"), &categories);

    println!("cargo:rerun-if-changed=data/wordlists");
    for (name, _) in &categories {
        println!("cargo:rerun-if-changed=data/wordlists/{name}.txt");
    }
}

fn read_entries(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn generate_wordlists(output_path: &Path, categories: &[(String, Vec<String>)]) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated wordlists").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Wordlists bundled with the binary, written by `init`").unwrap();
    writeln!(output, "pub const DEFAULT_WORDLISTS: &[(&str, &[&str])] = &[").unwrap();

    for (name, entries) in categories {
        writeln!(output, "    ({name:?}, &[").unwrap();
        for entry in entries {
            writeln!(output, "        {entry:?},").unwrap();
        }
        writeln!(output, "    ]),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of bundled categories").unwrap();
    writeln!(
        output,
        "pub const DEFAULT_CATEGORY_COUNT: usize = {};",
        categories.len()
    )
    .unwrap();
}
