//! Build script to embed the default word-cube collection
//!
//! Reads the block-formatted cube file and generates Rust source code with
//! a const array of row quadruples.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_cube_list(
        "data/word_cubes.txt",
        &Path::new(&out_dir).join("cubes.rs"),
        "CUBES",
        "Default word-cube collection shipped with the binary",
    );

    // Rebuild if the cube file changes
    println!("cargo:rerun-if-changed=data/word_cubes.txt");
}

fn generate_cube_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Blocks are separated by blank lines; each block is 4 lines of
    // space-separated letters.
    let cubes: Vec<Vec<String>> = content
        .split("\n\n")
        .filter_map(|block| {
            let rows: Vec<String> = block
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| line.replace(' ', "").to_lowercase())
                .collect();

            if rows.len() == 4 && rows.iter().all(|r| r.len() == 4) {
                Some(rows)
            } else {
                None
            }
        })
        .collect();

    if cubes.is_empty() {
        panic!("No valid cubes found in {input_path}");
    }

    let count = cubes.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated cube list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[[&str; 4]] = &[").unwrap();

    for cube in &cubes {
        writeln!(
            output,
            "    [\"{}\", \"{}\", \"{}\", \"{}\"],",
            cube[0], cube[1], cube[2], cube[3]
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of cubes in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
