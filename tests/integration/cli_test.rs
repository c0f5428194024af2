use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use imports_graph::cli::{args::OutputFormat, Args, Command};

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["imports-graph"]);
    assert_eq!(args.root, None);
    assert!(args.ignore.is_empty());
    assert_eq!(args.max_depth, None);
    assert_eq!(args.format, None);
    assert!(!args.quiet);
    assert!(!args.verbose);

    let args = Args::parse_from([
        "imports-graph",
        "/test/path",
        "--ignore",
        "b.ts",
        "--max-depth",
        "5",
        "--format",
        "json",
        "--output-file",
        "graph.json",
        "--no-git",
        "--quiet",
    ]);

    assert_eq!(args.root, Some(PathBuf::from("/test/path")));
    assert_eq!(args.ignore, vec!["b.ts".to_string()]);
    assert_eq!(args.max_depth, Some(5));
    assert_eq!(args.format, Some(OutputFormat::Json));
    assert_eq!(args.output_file, Some(PathBuf::from("graph.json")));
    assert!(args.no_git);
    assert!(args.quiet);
}

#[test]
fn test_cli_help_and_version() {
    let help = Args::try_parse_from(["imports-graph", "--help"]).unwrap_err();
    assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

    let version = Args::try_parse_from(["imports-graph", "--version"]).unwrap_err();
    assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn test_generate_command_writes_output_file() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/a.ts"), "import { b } from './b.ts';\n").unwrap();
    fs::write(dir.path().join("src/b.ts"), "").unwrap();
    let out = dir.path().join("graph.dot");

    let root = dir.path().to_string_lossy().to_string();
    let out_arg = out.to_string_lossy().to_string();
    let args = Args::parse_from([
        "imports-graph",
        root.as_str(),
        "--no-git",
        "--no-progress",
        "--reverse",
        "-o",
        out_arg.as_str(),
    ]);

    assert_eq!(Command::from_args(args).run(), 0);

    let dot = fs::read_to_string(&out).unwrap();
    assert!(dot.contains("\tsubgraph cluster_src {\n"));
    assert!(dot.contains("\t\"src/b.ts\" -> \"src/a.ts\" [label=\"b\"];\n"));
}

#[test]
fn test_config_file_is_applied() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "").unwrap();
    let config = dir.path().join("graph.toml");
    fs::write(&config, "graph_name = \"deps\"\ncluster_directories = false\n").unwrap();
    let out = dir.path().join("graph.dot");

    let root = dir.path().to_string_lossy().to_string();
    let config_arg = config.to_string_lossy().to_string();
    let out_arg = out.to_string_lossy().to_string();
    let args = Args::parse_from([
        "imports-graph",
        root.as_str(),
        "--no-git",
        "--no-progress",
        "--config",
        config_arg.as_str(),
        "--output-file",
        out_arg.as_str(),
    ]);

    assert_eq!(Command::from_args(args).run(), 0);

    let dot = fs::read_to_string(&out).unwrap();
    assert!(dot.starts_with("strict digraph deps {\n"));
    assert!(dot.contains("\tclusterrank=\"none\";\n"));
}

#[test]
fn test_bad_ignore_pattern_exits_critical() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "").unwrap();

    let root = dir.path().to_string_lossy().to_string();
    let args = Args::parse_from(["imports-graph", root.as_str(), "--no-progress", "-i", "src/["]);

    assert_eq!(Command::from_args(args).run(), 2);
}

#[test]
fn test_missing_output_directory_exits_critical() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "").unwrap();
    let out = dir.path().join("missing").join("graph.dot");

    let root = dir.path().to_string_lossy().to_string();
    let out_arg = out.to_string_lossy().to_string();
    let args = Args::parse_from(["imports-graph", root.as_str(), "--no-progress", "-o", out_arg.as_str()]);

    assert_eq!(Command::from_args(args).run(), 2);
    assert!(!out.exists());
}
