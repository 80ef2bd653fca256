use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  bless    Rewrite every tests/fixtures/*.canvas from the current output");
        eprintln!("  check    Report fixtures whose output differs from their .canvas file");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "bless" => bless(),
        "check" => check(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn fixtures_dir() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/fixtures")
}

/// All `.svg` fixtures, sorted by name
fn fixtures() -> Vec<Utf8PathBuf> {
    let dir = fixtures_dir();
    let mut paths: Vec<Utf8PathBuf> = dir
        .read_dir_utf8()
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", dir, e))
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.extension() == Some("svg"))
        .collect();
    paths.sort();
    paths
}

/// Convert one fixture; errors are rendered into the result text
fn render(path: &Utf8Path) -> Result<String, String> {
    let source = fs::read_to_string(path).map_err(|e| format!("read error: {}", e))?;
    let options = svg2canvas::ConvertOptions::default().with_source_name(path.as_str());
    svg2canvas::convert(&source, &options).map_err(describe)
}

/// Error message followed by its chain of causes
fn describe(e: svg2canvas::ConvertError) -> String {
    let mut message = e.to_string();
    let mut cause = std::error::Error::source(&e);
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}

fn bless() {
    let results: Vec<_> = fixtures()
        .par_iter()
        .map(|path| (path.clone(), render(path)))
        .collect();

    let mut failed = 0;
    for (path, result) in results {
        let name = path.file_name().unwrap_or(path.as_str());
        match result {
            Ok(code) => {
                let target = path.with_extension("canvas");
                let mut text = code;
                if !text.ends_with('\n') {
                    text.push('\n');
                }
                fs::write(&target, text)
                    .unwrap_or_else(|e| panic!("Failed to write {}: {}", target, e));
                eprintln!("blessed {}", name);
            }
            Err(e) => {
                failed += 1;
                eprintln!("FAILED {}: {}", name, e);
            }
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

fn check() {
    let results: Vec<_> = fixtures()
        .par_iter()
        .map(|path| {
            let expected = fs::read_to_string(path.with_extension("canvas")).ok();
            (path.clone(), expected, render(path))
        })
        .collect();

    let total = results.len();
    let mut passed = 0;
    for (path, expected, actual) in &results {
        let name = path.file_name().unwrap_or(path.as_str());
        match (expected, actual) {
            (None, _) => println!("  MISSING  {}", name),
            (Some(_), Err(e)) => println!("  ERROR    {}: {}", name, e),
            (Some(expected), Ok(actual)) => {
                if expected.trim_end_matches('\n') == actual.trim_end_matches('\n') {
                    passed += 1;
                    println!("  ok       {}", name);
                } else {
                    println!("  MISMATCH {}", name);
                }
            }
        }
    }

    println!();
    println!("{} / {} fixtures match", passed, total);
    if passed != total {
        std::process::exit(1);
    }
}
