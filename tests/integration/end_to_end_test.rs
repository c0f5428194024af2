//! End-to-end tests for imports-graph
//!
//! Each test lays out a small source tree on disk and checks the graph
//! built from it.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::{tempdir, TempDir};
use imports_graph::{
    core::heights::BASE_HEIGHT, imports_graph_dot, GraphOutput, ImportsGraph, ImportsGraphError,
    Settings,
};

/// Create a project with the given files under a fresh temporary directory
fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }
    dir
}

fn settings(root: &Path) -> Settings {
    Settings {
        root: root.to_path_buf(),
        use_git: false,
        show_progress: false,
        ..Settings::default()
    }
}

fn build(root: &Path, ignore: &[&str]) -> GraphOutput {
    let settings = Settings {
        ignore_patterns: ignore.iter().map(|s| s.to_string()).collect(),
        ..settings(root)
    };
    ImportsGraph::new(settings).build().unwrap()
}

fn dot(root: &Path, ignore: &[&str]) -> String {
    let settings = Settings {
        ignore_patterns: ignore.iter().map(|s| s.to_string()).collect(),
        ..settings(root)
    };
    let graph = ImportsGraph::new(settings);
    graph.build().unwrap().to_dot(&graph.render_options())
}

#[test]
fn test_single_named_import() {
    let dir = project(&[("a.ts", "import {b} from \"./b.ts\";\n"), ("b.ts", "")]);
    let output = build(dir.path(), &[]);

    assert_eq!(output.edges.len(), 1);
    let edge = &output.edges[0];
    assert_eq!(edge.importer.as_str(), "a.ts");
    assert_eq!(edge.imported.as_str(), "b.ts");
    assert_eq!(edge.label(), "b");

    // One edge of weight 1.5 on each side
    assert_eq!(output.heights["a.ts"], 0.875);
    assert_eq!(output.heights["b.ts"], 0.875);

    let dot = output.to_dot(&Default::default());
    assert!(dot.contains("\t\"a.ts\" -> \"b.ts\" [label=\"b\"];\n"));
}

#[test]
fn test_import_of_unknown_file_is_dropped() {
    let dir = project(&[("a.ts", "import { m } from './missing.ts';\n")]);
    let output = build(dir.path(), &[]);

    assert!(output.edges.is_empty());
    assert!(!output.files.contains("missing.ts"));
    assert!(!dot(dir.path(), &[]).contains("missing.ts"));
}

#[test]
fn test_bare_dynamic_import_has_no_label() {
    let dir = project(&[
        ("a.ts", "export async function load() {\n  return import(\"./b.ts\");\n}\n"),
        ("b.ts", "export const b = 1;\n"),
    ]);

    let dot = dot(dir.path(), &[]);
    assert!(dot.contains("\t\"a.ts\" -> \"b.ts\";\n"));
    assert!(!dot.contains("label=\"\""));
}

#[test]
fn test_ignored_file_leaves_the_graph() {
    let dir = project(&[("a.ts", "import { b } from './b.ts';\n"), ("b.ts", "")]);
    let output = build(dir.path(), &["b.ts"]);

    assert!(!output.files.contains("b.ts"));
    assert!(output.files.contains("a.ts"));
    assert!(output.edges.is_empty());
}

#[test]
fn test_directories_become_clusters() {
    let dir = project(&[
        ("a/x.ts", "import { y } from '../b/y.ts';\n"),
        ("b/y.ts", "export const y = 2;\n"),
    ]);

    let dot = dot(dir.path(), &[]);
    assert!(dot.contains(
        "\tsubgraph cluster_a {\n\t\tlabel=\"a\"; fontsize=24;\n\t\t\"a/x.ts\" [label=\"x.ts\";"
    ));
    assert!(dot.contains(
        "\tsubgraph cluster_b {\n\t\tlabel=\"b\"; fontsize=24;\n\t\t\"b/y.ts\" [label=\"y.ts\";"
    ));
    assert!(dot.contains("\t\"a/x.ts\" -> \"b/y.ts\" [label=\"y\"];\n"));
}

#[test]
fn test_repeated_imports_merge_into_one_edge() {
    let dir = project(&[
        (
            "a.ts",
            "import { x } from './b.ts';\nimport './b.ts';\nimport { y as z } from \"./b.ts\";\n",
        ),
        ("b.ts", ""),
    ]);
    let output = build(dir.path(), &[]);

    assert_eq!(output.edges.len(), 1);
    assert_eq!(output.edges[0].fragments, vec!["x", "", "y as z"]);
    assert_eq!(output.edges[0].label(), "x\ny as z");
}

#[test]
fn test_output_is_deterministic() {
    let dir = project(&[
        ("src/index.ts", "import { a } from './lib/a.ts';\nimport { b } from './lib/b.ts';\n"),
        ("src/lib/a.ts", "import { b } from './b.ts';\n"),
        ("src/lib/b.ts", "export * from '../index.ts';\n"),
        ("scripts/run.mjs", "import('../src/index.ts');\n"),
    ]);

    let parallel = dot(dir.path(), &[]);
    let again = dot(dir.path(), &[]);
    let sequential = {
        let graph = ImportsGraph::new(Settings {
            parallel: false,
            ..settings(dir.path())
        });
        graph.build().unwrap().to_dot(&graph.render_options())
    };

    assert_eq!(parallel, again);
    assert_eq!(parallel, sequential);
}

#[test]
fn test_edges_only_connect_known_files() {
    let dir = project(&[
        ("a.ts", "import { b } from './b.ts';\nimport { c } from './c.ts';\nimport React from 'react';\n"),
        ("b.ts", "import { a } from './a.ts';\nimport { gone } from '../outside.ts';\n"),
        ("c.ts", "export const c = 3;\n"),
    ]);
    let output = build(dir.path(), &["c.ts"]);

    for edge in &output.edges {
        assert!(output.files.contains(edge.importer.as_str()));
        assert!(output.files.contains(edge.imported.as_str()));
    }
    assert_eq!(output.edges.len(), 2);
}

#[test]
fn test_every_file_is_one_leaf() {
    let dir = project(&[
        ("index.ts", ""),
        ("a/one.ts", ""),
        ("a/b/two.js", ""),
        ("a/b/c/three.mjs", ""),
        ("d/four.ts", ""),
    ]);
    let output = build(dir.path(), &[]);

    assert_eq!(output.files.len(), 5);
    assert_eq!(output.tree.leaf_count(), output.files.len());

    let leaves: BTreeSet<&str> = output.tree.leaves().into_iter().map(|f| f.as_str()).collect();
    let files: BTreeSet<&str> = output.files.iter().map(|f| f.as_str()).collect();
    assert_eq!(leaves, files);
}

#[test]
fn test_heights_grow_with_imports() {
    let dir = project(&[
        ("hub.ts", "import { a } from './a.ts';\nimport { b, c } from './b.ts';\n"),
        ("a.ts", ""),
        ("b.ts", ""),
        ("lonely.ts", ""),
    ]);
    let output = build(dir.path(), &[]);

    assert_eq!(output.heights["lonely.ts"], BASE_HEIGHT);
    for height in output.heights.values() {
        assert!(*height >= BASE_HEIGHT);
    }
    assert!(output.heights["hub.ts"] > output.heights["a.ts"]);
    assert!(output.heights["b.ts"] > output.heights["a.ts"]);
}

#[test]
fn test_cycles_and_self_imports_are_kept() {
    let dir = project(&[
        ("a.ts", "import { b } from './b.ts';\nimport { me } from './a.ts';\n"),
        ("b.ts", "import { a } from './a.ts';\n"),
    ]);
    let output = build(dir.path(), &[]);

    assert_eq!(output.edges.len(), 3);
    assert_eq!(output.stats.self_loops, 1);
    assert_eq!(output.stats.cycles.len(), 1);
    let cycle: Vec<&str> = output.stats.cycles[0].iter().map(|f| f.as_str()).collect();
    assert_eq!(cycle, vec!["a.ts", "b.ts"]);
}

#[test]
fn test_ignore_glob_matches_across_directories() {
    let dir = project(&[
        ("src/main.ts", ""),
        ("tests/unit/main.test.ts", ""),
        ("src/util.test.ts", ""),
    ]);
    let output = build(dir.path(), &["tests/*", "*.test.ts"]);

    let files: Vec<&str> = output.files.iter().map(|f| f.as_str()).collect();
    assert_eq!(files, vec!["src/main.ts"]);
}

#[test]
fn test_invalid_ignore_pattern_fails() {
    let dir = project(&[("a.ts", "")]);
    let settings = Settings {
        ignore_patterns: vec!["src/[".to_string()],
        ..settings(dir.path())
    };

    match ImportsGraph::new(settings).build() {
        Err(ImportsGraphError::IgnorePattern { pattern, .. }) => assert_eq!(pattern, "src/["),
        other => panic!("Expected IgnorePattern error, got {:?}", other.map(|o| o.files.len())),
    }
}

#[test]
fn test_unreadable_file_stays_a_node() {
    let dir = project(&[("a.ts", "import { b } from './b.ts';\n"), ("b.ts", "")]);
    fs::write(dir.path().join("broken.ts"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let output = build(dir.path(), &[]);
    assert_eq!(output.unreadable, 1);
    assert!(output.files.contains("broken.ts"));
    assert_eq!(output.edges.len(), 1);
}

#[test]
fn test_walk_skips_git_dir_and_other_extensions() {
    let dir = project(&[
        ("a.ts", ""),
        ("b.tsx", ""),
        ("README.md", ""),
        (".git/hooks/pre-commit.js", ""),
    ]);
    let output = build(dir.path(), &[]);

    let files: Vec<&str> = output.files.iter().map(|f| f.as_str()).collect();
    assert_eq!(files, vec!["a.ts"]);

    let with_tsx = ImportsGraph::new(Settings {
        extensions: vec!["ts".to_string(), ".tsx".to_string()],
        ..settings(dir.path())
    })
    .build()
    .unwrap();
    assert_eq!(with_tsx.files.len(), 2);
}

#[test]
fn test_max_depth_limits_the_walk() {
    let dir = project(&[("top.ts", ""), ("nested/deep.ts", "")]);
    let output = ImportsGraph::new(Settings {
        max_depth: Some(1),
        ..settings(dir.path())
    })
    .build()
    .unwrap();

    let files: Vec<&str> = output.files.iter().map(|f| f.as_str()).collect();
    assert_eq!(files, vec!["top.ts"]);
}

#[test]
fn test_outside_git_falls_back_to_all_files() {
    let dir = project(&[("a.ts", "import { b } from './b.ts';\n"), ("b.ts", "")]);

    // Git tracking is on here; a plain temp directory is not a repository
    let dot = imports_graph_dot(dir.path(), &[], false, false).unwrap();
    assert!(dot.contains("\"a.ts\" -> \"b.ts\" [label=\"b\"];"));
}

/// Run git in `dir`; false when git is missing or the command fails
fn git(dir: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .args(["-c", "user.name=imports-graph", "-c", "user.email=imports-graph@localhost"])
        .args(["-c", "commit.gpgsign=false"])
        .args(args)
        .current_dir(dir)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[test]
fn test_git_ignored_files_leave_a_nested_root() {
    let dir = project(&[
        (".gitignore", "generated.ts
"),
        ("app/a.ts", "import { b } from './lib/b.ts';
import { g } from './generated.ts';
"),
        ("app/lib/b.ts", "export const b = 1;
"),
        ("app/generated.ts", "export const g = 1;
"),
        ("app/fresh.ts", "import { a } from './a.ts';
"),
        ("other/c.ts", ""),
    ]);
    if !git(dir.path(), &["init", "-q"]) {
        eprintln!("git unavailable, skipping");
        return;
    }
    assert!(git(dir.path(), &["add", ".gitignore", "app/a.ts", "app/lib/b.ts"]));
    assert!(git(dir.path(), &["commit", "-q", "-m", "init"]));

    let output = ImportsGraph::new(Settings {
        use_git: true,
        ..settings(&dir.path().join("app"))
    })
    .build()
    .unwrap();

    // Tracked and untracked-but-not-ignored files, relative to the nested root
    let files: Vec<&str> = output.files.iter().map(|f| f.as_str()).collect();
    assert_eq!(files, vec!["a.ts", "fresh.ts", "lib/b.ts"]);

    let edges: Vec<(&str, &str)> = output
        .edges
        .iter()
        .map(|e| (e.importer.as_str(), e.imported.as_str()))
        .collect();
    assert_eq!(edges, vec![("a.ts", "lib/b.ts"), ("fresh.ts", "a.ts")]);
}

#[test]
fn test_missing_root_is_rejected() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    assert!(matches!(
        imports_graph_dot(&missing, &[], false, false),
        Err(ImportsGraphError::InvalidPath { .. })
    ));
}
