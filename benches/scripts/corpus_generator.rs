//! Corpus generator for benchmark runs.
//!
//! Generates layout documents on-demand. Generated files are NOT committed to git.
//! Run: cargo run --bin corpus-generator
//!
//! Then compare traversal modes, e.g.:
//! `treeform render --mode parallel benches/corpus/wide_grid.json`

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const CORPUS_DIR: &str = "benches/corpus";
const DEEP_CHAIN_FILE: &str = "deep_chain.jsonc";
const WIDE_GRID_FILE: &str = "wide_grid.json";
const MANY_SCREENS_DIR: &str = "many_screens";

/// Nodes in the deep chain. Each stack costs two bracket levels, so 64
/// nodes is the deepest chain the parsers accept.
const CHAIN_DEPTH: usize = 64;
const GRID_ROWS: usize = 2_000;
const GRID_COLUMNS: usize = 50;
const SCREEN_COUNT: usize = 1_000;

/// Leaf templates for generating realistic screens.
const LEAVES: &[&str] = &[
    r#"{ "type": "text", "text": "Welcome back" }"#,
    r#"{ "type": "widget", "id": "promo-banner" }"#,
    r#"{ "type": "image", "src": "https://cdn.invalid/hero.png" }"#,
    r#"{ "type": "spacer" }"#,
    r#"{ "type": "text", "text": "Recommended for you" }"#,
    r#"{ "type": "widget", "id": "cart-badge" }"#,
];

const STACKS: &[&str] = &["hStack", "vStack", "zStack"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating benchmark corpus...");

    fs::create_dir_all(CORPUS_DIR)?;

    generate_deep_chain()?;
    generate_wide_grid()?;
    generate_many_screens()?;

    println!("Corpus generation complete!");
    println!(
        "  - Deep chain: {}/{} ({} levels)",
        CORPUS_DIR, DEEP_CHAIN_FILE, CHAIN_DEPTH
    );
    println!(
        "  - Wide grid: {}/{} ({} x {} widgets)",
        CORPUS_DIR, WIDE_GRID_FILE, GRID_ROWS, GRID_COLUMNS
    );
    println!(
        "  - Many screens: {}/{} ({} files)",
        CORPUS_DIR, MANY_SCREENS_DIR, SCREEN_COUNT
    );

    Ok(())
}

/// Generates a single chain of nested stacks ending in one text leaf.
fn generate_deep_chain() -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(CORPUS_DIR).join(DEEP_CHAIN_FILE);
    let mut file = BufWriter::new(File::create(&path)?);

    writeln!(file, "// {} nested stacks", CHAIN_DEPTH)?;
    for level in 0..CHAIN_DEPTH - 1 {
        let kind = STACKS[level % STACKS.len()];
        write!(file, r#"{{ "type": "{}", "children": ["#, kind)?;
    }
    write!(file, r#"{{ "type": "text", "text": "bottom" }}"#)?;
    for _ in 0..CHAIN_DEPTH - 1 {
        write!(file, "] }}")?;
    }
    writeln!(file)?;
    file.flush()?;

    println!("  Generated: {} ✓", DEEP_CHAIN_FILE);

    Ok(())
}

/// Generates one vStack of many hStack rows, wide enough to fan out.
fn generate_wide_grid() -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(CORPUS_DIR).join(WIDE_GRID_FILE);
    let mut file = BufWriter::new(File::create(&path)?);

    writeln!(file, r#"{{ "type": "vStack", "spacing": 4, "children": ["#)?;
    for row in 0..GRID_ROWS {
        write!(file, r#"  {{ "type": "hStack", "spacing": 8, "children": ["#)?;
        for column in 0..GRID_COLUMNS {
            if column > 0 {
                write!(file, ", ")?;
            }
            write!(file, "{}", LEAVES[(row + column) % LEAVES.len()])?;
        }
        let separator = if row + 1 < GRID_ROWS { "," } else { "" };
        writeln!(file, "] }}{}", separator)?;

        // Progress indicator
        if (row + 1) % 500 == 0 {
            print!("\r  Generated: {}/{} rows", row + 1, GRID_ROWS);
            std::io::stdout().flush()?;
        }
    }
    writeln!(file, "] }}")?;
    file.flush()?;

    println!("\r  Generated: {} ✓          ", WIDE_GRID_FILE);

    let actual_size = fs::metadata(&path)?.len();
    println!(
        "  Actual size: {:.2} MB",
        actual_size as f64 / (1024.0 * 1024.0)
    );

    Ok(())
}

/// Generates many small screens of varying shape.
fn generate_many_screens() -> Result<(), Box<dyn std::error::Error>> {
    let dir_path = Path::new(CORPUS_DIR).join(MANY_SCREENS_DIR);
    fs::create_dir_all(&dir_path)?;

    for i in 1..=SCREEN_COUNT {
        let filename = format!("screen_{:04}.json", i);
        let mut file = File::create(dir_path.join(&filename))?;

        writeln!(file, r#"{{ "type": "vStack", "id": "screen-{}", "children": ["#, i)?;

        // 3-5 sections, each a short row
        let sections = 3 + (i % 3);
        for j in 0..sections {
            let kind = STACKS[(i + j) % STACKS.len()];
            let first = LEAVES[(i + j) % LEAVES.len()];
            let second = LEAVES[(i + j + 1) % LEAVES.len()];
            let separator = if j + 1 < sections { "," } else { "" };
            writeln!(
                file,
                r#"  {{ "type": "{}", "children": [{}, {}] }}{}"#,
                kind, first, second, separator
            )?;
        }
        writeln!(file, "] }}")?;

        // Progress indicator
        if i % 100 == 0 {
            print!("\r  Generated: {}/{} files", i, SCREEN_COUNT);
            std::io::stdout().flush()?;
        }
    }

    println!("\r  Generated: {}/{} files ✓", SCREEN_COUNT, SCREEN_COUNT);

    Ok(())
}
