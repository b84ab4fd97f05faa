// バイナリの起動テスト
use std::process::{Command, Output};

fn bench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_invocation_bench"))
        .args(args)
        .output()
        .expect("failed to launch binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help() {
    let output = bench(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("run"));
    assert!(stdout(&output).contains("verify"));
}

#[test]
fn test_version() {
    let output = bench(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_list() {
    let output = bench(&["list"]);
    assert!(output.status.success());
    for name in ["direct", "reflective", "dynamic", "delegate", "compiled"] {
        assert!(stdout(&output).contains(name));
    }
}

#[test]
fn test_verify() {
    let output = bench(&["verify", "-c"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("reflective (cached)"));
    let rows: Vec<&str> = text.lines().filter(|line| line.starts_with("   ✅")).collect();
    assert_eq!(rows.len(), 10);
    assert!(rows.iter().all(|row| row.ends_with(" 3")));
}

#[test]
fn test_run_testing_preset() {
    let output = bench(&["run", "--preset", "testing", "--no-wait"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("building dataset on 1000 iterations..."));
    assert!(text.contains("Name"));
    assert!(text.contains("FirstCall"));
    assert!(text.contains("NextCalls"));
    assert!(text.contains(" Count: 5"));
    assert!(!text.contains("press a key to exit"));
}

#[test]
fn test_run_both_cache_modes() {
    let output = bench(&["run", "--preset", "testing", "--cache-mode", "both", "--no-wait"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains(" Count: 10"));
    assert!(text.contains("dynamic (cached)"));
}

#[test]
fn test_json_flag_is_not_accepted() {
    let output = bench(&["run", "--preset", "testing", "--no-wait", "--json", "report.json"]);
    assert!(!output.status.success());
}

#[test]
fn test_run_rejects_zero_iterations() {
    let output = bench(&["run", "-n", "0", "--no-wait"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("iterations"));
}
