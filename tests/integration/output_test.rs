use std::fs;
use tempfile::tempdir;
use imports_graph::{
    output::{create_formatter, format_report_json, FileWriter, OutputWriter},
    GraphOutput, ImportsGraph, ImportsGraphError, OutputFormat, Settings,
};

fn sample_project() -> (tempfile::TempDir, GraphOutput) {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("lib")).unwrap();
    fs::write(
        dir.path().join("main.ts"),
        "import { parse, format } from './lib/text.ts';\nimport('./lib/lazy.ts');\n",
    )
    .unwrap();
    fs::write(dir.path().join("lib/text.ts"), "export * from './lazy.ts';\n").unwrap();
    fs::write(dir.path().join("lib/lazy.ts"), "import { parse } from './text.ts';\n").unwrap();
    fs::write(dir.path().join("lib/unused.ts"), "").unwrap();

    let output = ImportsGraph::new(Settings {
        root: dir.path().to_path_buf(),
        use_git: false,
        show_progress: false,
        ..Settings::default()
    })
    .build()
    .unwrap();

    (dir, output)
}

#[test]
fn test_json_report() {
    let (_dir, output) = sample_project();
    let json = format_report_json(&output, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value["files"],
        serde_json::json!(["lib/lazy.ts", "lib/text.ts", "lib/unused.ts", "main.ts"])
    );

    let edges = value["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[0]["importer"], "lib/lazy.ts");
    assert_eq!(edges[0]["imported"], "lib/text.ts");
    assert_eq!(edges[0]["labels"], serde_json::json!(["parse"]));

    assert_eq!(value["heights"]["lib/unused.ts"], 0.5);
    assert_eq!(value["stats"]["files"], 4);
    assert_eq!(value["stats"]["isolated"], 1);
    assert_eq!(
        value["stats"]["cycles"],
        serde_json::json!([["lib/lazy.ts", "lib/text.ts"]])
    );
    assert_eq!(value["unreadable"], 0);
}

#[test]
fn test_formatter_follows_settings() {
    let (dir, output) = sample_project();

    let dot_settings = Settings {
        root: dir.path().to_path_buf(),
        graph_name: "sample".to_string(),
        ..Settings::default()
    };
    let dot = create_formatter(&dot_settings).format(&output).unwrap();
    assert!(dot.starts_with("strict digraph sample {\n"));
    assert!(dot.contains("\t\"main.ts\" -> \"lib/text.ts\" [label=\"parse\\nformat\"];\n"));
    assert!(dot.contains("\t\"main.ts\" -> \"lib/lazy.ts\";\n"));

    let json_settings = Settings {
        output_format: OutputFormat::Json,
        ..dot_settings
    };
    let json = create_formatter(&json_settings).format(&output).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
}

#[test]
fn test_svg_without_layout_engine() {
    let (dir, output) = sample_project();
    let settings = Settings {
        root: dir.path().to_path_buf(),
        output_format: OutputFormat::Svg,
        graphviz_command: "imports-graph-no-such-dot-binary".to_string(),
        ..Settings::default()
    };

    assert!(matches!(
        create_formatter(&settings).format(&output),
        Err(ImportsGraphError::Render { .. })
    ));
}

#[test]
fn test_file_writer_round_trip() {
    let (dir, output) = sample_project();
    let path = dir.path().join("graph.dot");
    let dot = output.to_dot(&Default::default());

    FileWriter::new(&path).write(&dot).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), dot);
}
