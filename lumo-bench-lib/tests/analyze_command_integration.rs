//! Integration tests for the `analyze` and `badge` commands.
//!
//! Each test builds a benchmarks directory by running `parse` over synthetic
//! transcripts, the same way a benchmark pipeline would.

use camino::{Utf8Path, Utf8PathBuf};
use lumo_bench_lib::Host;
use std::fs;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, _code: i32) {}
}

fn temp_root(tmp: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()
}

fn run(args: &[&str]) -> (lumo_bench_lib::Result<()>, String) {
    let mut host = TestHost::new();
    let mut argv = vec!["lumo-bench"];
    argv.extend_from_slice(args);
    let result = lumo_bench_lib::run(&mut host, argv);
    (result, host.output_str())
}

/// Parse `transcript` (or a missing log when `None`) into the artifact of `edition`.
fn add_edition(benchmarks: &Utf8Path, edition: &str, transcript: Option<&str>) {
    fs::create_dir_all(benchmarks).unwrap();
    let log_file = benchmarks.join(format!("{edition}.log"));
    if let Some(text) = transcript {
        fs::write(&log_file, text).unwrap();
    }
    let output = benchmarks.join(format!("benchmark-{edition}")).join(format!("{edition}-results.json"));
    let (result, _) = run(&["parse", log_file.as_str(), output.as_str()]);
    result.unwrap();
}

fn tps_line(tps_1m: f64) -> String {
    format!("Done (10.0s)!\nTPS from last 5s, 10s, 1m, 5m, 15m: 20.0, 20.0, {tps_1m:.1}, 20.0, 20.0\nMemory: 2048 MB / 4096 MB\n")
}

fn write_config(root: &Utf8Path, text: &str) -> Utf8PathBuf {
    let path = root.join("bench.toml");
    fs::write(&path, text).unwrap();
    path
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_analyze_writes_all_reports() {
    let tmp = tempfile::tempdir().unwrap();
    let root = temp_root(&tmp);
    let benchmarks = root.join("benchmarks");
    let out = root.join("out");

    add_edition(&benchmarks, "a", Some(&tps_line(18.0)));
    add_edition(&benchmarks, "b", Some(&tps_line(19.0)));
    add_edition(&benchmarks, "c", None);
    let config = write_config(&root, "report_title = \"Edition Shootout\"\nexpected_editions = [\"d\"]\n");

    let (result, output) = run(&["analyze", benchmarks.as_str(), out.as_str(), "--config", config.as_str(), "--color", "never"]);
    result.unwrap();

    assert!(output.contains("Found 3 edition results"), "got: {output}");
    assert!(output.contains("Best Overall: b (Score: 95.0)"), "got: {output}");
    assert!(output.contains("  b: 95.0/100\n  a: 90.0/100\n"), "got: {output}");

    let markdown = fs::read_to_string(out.join("summary.md")).unwrap();
    assert!(markdown.starts_with("# Edition Shootout\n"));
    assert!(markdown.contains("| 🥇 b | 95.0 |"));
    assert!(markdown.contains("| 🥈 a | 90.0 |"));
    assert!(markdown.contains("| c | N/A | N/A | N/A | N/A | - |"));
    assert!(markdown.contains("| d | N/A | N/A | N/A | N/A | - |"));

    let summary: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary["best"]["overall"], "b");
    assert_eq!(summary["best"]["tps"], "b");
    assert_eq!(summary["best"]["memory"], "a");
    assert_eq!(summary["editions"]["c"]["status"], "no_logs");
    assert!(summary["editions"]["c"]["score"].is_null());
    assert!(summary["editions"].get("d").is_none());

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("raw-results.json")).unwrap()).unwrap();
    assert_eq!(raw["a"]["score"], 90.0);
    assert_eq!(raw["c"]["status"], "no_logs");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_analyze_then_badge() {
    let tmp = tempfile::tempdir().unwrap();
    let root = temp_root(&tmp);
    let benchmarks = root.join("benchmarks");
    let out = root.join("out");

    add_edition(&benchmarks, "lite", Some(&tps_line(20.0)));
    add_edition(&benchmarks, "heavy", Some(&tps_line(10.0)));
    let config = write_config(&root, "");

    let (result, _) = run(&["analyze", benchmarks.as_str(), out.as_str(), "-c", config.as_str()]);
    result.unwrap();

    let (result, output) = run(&["badge", out.join("summary.json").as_str()]);
    result.unwrap();
    assert!(output.contains("Generated badges for 2 editions"), "got: {output}");

    let overall: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("badge.json")).unwrap()).unwrap();
    assert_eq!(overall["schemaVersion"], 1);
    assert_eq!(overall["label"], "benchmark");
    assert_eq!(overall["message"], "lite: 100.0/100");
    assert_eq!(overall["color"], "brightgreen");

    let heavy: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("badge-heavy.json")).unwrap()).unwrap();
    assert_eq!(heavy["label"], "heavy");
    assert_eq!(heavy["message"], "50.0/100");
    assert_eq!(heavy["color"], "orange");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_analyze_with_only_no_logs() {
    let tmp = tempfile::tempdir().unwrap();
    let root = temp_root(&tmp);
    let benchmarks = root.join("benchmarks");
    let out = root.join("out");

    add_edition(&benchmarks, "broken", None);
    let config = write_config(&root, "");

    let (result, output) = run(&["analyze", benchmarks.as_str(), out.as_str(), "-c", config.as_str(), "--color", "never"]);
    result.unwrap();
    assert!(output.contains("No usable results"), "got: {output}");

    let summary: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert!(summary["best"]["overall"].is_null());

    let (result, _) = run(&["badge", out.join("summary.json").as_str()]);
    result.unwrap();
    let overall: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("badge.json")).unwrap()).unwrap();
    assert_eq!(overall["message"], "none: N/A");
    assert_eq!(overall["color"], "red");

    let broken: serde_json::Value = serde_json::from_str(&fs::read_to_string(out.join("badge-broken.json")).unwrap()).unwrap();
    assert_eq!(broken["message"], "N/A");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_analyze_without_results_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let root = temp_root(&tmp);
    let benchmarks = root.join("benchmarks");
    fs::create_dir_all(&benchmarks).unwrap();
    let config = write_config(&root, "");

    let (result, _) = run(&["analyze", benchmarks.as_str(), root.join("out").as_str(), "-c", config.as_str()]);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("no benchmark results"), "got: {err}");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_badge_without_summary_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let root = temp_root(&tmp);

    let (result, _) = run(&["badge", root.join("summary.json").as_str()]);
    let _ = result.unwrap_err();
}
