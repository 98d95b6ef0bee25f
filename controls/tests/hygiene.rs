//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the controls crate source for antipatterns that violate
//! project standards. Each has a budget (ideally zero). If you must add one,
//! you have to fix an existing one first — the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics — these crash the process.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss — discards errors without inspecting.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Style / structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `controls/src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile {
                    path: path_str,
                    content,
                });
            }
        }
    }
}

fn assert_budget(pattern: &str, max: usize) {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found; wrong test cwd?");

    let mut hits = Vec::new();
    let mut total = 0;
    for file in &files {
        let count = file
            .content
            .lines()
            .filter(|line| line.contains(pattern))
            .count();
        if count > 0 {
            hits.push(format!("  {}: {count}", file.path));
            total += count;
        }
    }

    assert!(
        total <= max,
        "`{pattern}` budget exceeded: found {total}, max {max}.\n{}",
        hits.join("\n")
    );
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}
