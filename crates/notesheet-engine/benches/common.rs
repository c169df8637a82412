// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_note(size: usize) -> String {
    let base = "CS 101: Algorithms\n# Lecture\n**Overview**\nA paragraph of notes that runs on for a while.\nIt has a second line.\n\n## Sorting\n1. bubble\n2. merge\nWhy sort at all?\n| n | cost |\n|---|---|\n| 10 | 100 |\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_paragraph(words: usize) -> String {
    let mut content = String::new();
    for i in 0..words {
        content.push_str(&format!("word{} ", i));
        if i % 12 == 11 {
            content.push('\n');
        }
    }
    content
}
