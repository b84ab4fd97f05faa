// 設定からレポート出力までの一連の流れ
use crate::fixtures::{run, testing_config};
use invocation_bench::{BenchConfig, CallArguments};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_full_run_with_default_arguments() {
    let report = run(&testing_config(1_000, CallArguments::new(1, 2, false)));

    assert_eq!(report.results().len(), 5);
    assert!(report.results().iter().all(|r| r.return_value() == 1));
    assert!(report
        .results()
        .windows(2)
        .all(|pair| pair[0].next_calls() <= pair[1].next_calls()));

    let fastest = report.fastest().unwrap();
    assert_eq!(fastest.name(), report.results()[0].name());
}

#[test]
fn test_table_output() {
    let report = run(&testing_config(1_000, CallArguments::default()));
    let table = report.render_table();

    assert!(table.contains("Name"));
    assert!(table.contains("FirstCall"));
    assert!(table.contains("NextCalls"));
    assert!(table.contains(" Count: 5"));
    for name in ["direct", "reflective", "dynamic", "delegate", "compiled"] {
        assert!(table.contains(name), "missing row for {name}");
    }
}

#[test]
fn test_config_file_drives_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "iterations": 200,
            "arguments": { "a": 10, "b": 5, "c": true },
            "strategies": ["compiled", "delegate"],
            "cache_modes": ["non_cached", "cached"]
        }"#,
    )
    .unwrap();

    let config = BenchConfig::from_json_file(&path).unwrap();
    let report = run(&config);

    assert_eq!(report.results().len(), 4);
    assert!(report.results().iter().all(|r| r.return_value() == 15));
    assert!(report.get("compiled (cached)").is_some());
    assert!(report.get("delegate").is_some());
}
