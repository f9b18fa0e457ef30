//! Integration tests for the `parse` command.

use camino::Utf8PathBuf;
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

const TRANSCRIPT: &str = r#"[09:00:00] [main/INFO]: Loading Minecraft 1.21.1 with Fabric Loader 0.16.5
[09:00:04] [Worker-Main-2/INFO]: Preparing spawn area: 0%
[09:00:06] [Server thread/INFO]: Done (12.345s)! For help, type "help"
[09:01:06] [Server thread/WARN]: Can't keep up! Is the server overloaded? Running 2041ms or 40 ticks behind
[09:01:07] [Server thread/WARN]: Ambiguity between arguments [teleport, destination] and [teleport, targets]
[09:01:10] [Server thread/INFO]: TPS from last 5s, 10s, 1m, 5m, 15m: 20.0, 20.0, 19.0, 20.0, 20.0
[09:01:11] [Server thread/INFO]: CPU Process: 35.5% (1m avg), System: 60.25% (1m avg)
[09:01:12] [Server thread/INFO]: Memory: 1843 MB / 4096 MB
[09:01:13] [Server thread/INFO]: Tick durations (last 1m): min: 1.2 ms, avg: 60.0 ms, max: 148.1 ms
"#;

fn temp_root(tmp: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_parse_writes_scored_record() {
    let tmp = tempfile::tempdir().unwrap();
    let root = temp_root(&tmp);
    let log_file = root.join("server.log");
    let output = root.join("benchmark-vanilla").join("vanilla-results.json");
    fs::write(&log_file, TRANSCRIPT).unwrap();

    let mut host = TestHost::new();
    lumo_bench_lib::run(&mut host, ["lumo-bench", "parse", log_file.as_str(), output.as_str()]).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["status"], "completed");
    assert_eq!(json["startup_time_s"], 12.345);
    assert_eq!(json["tps"]["tps_1m"], 19.0);
    assert_eq!(json["health"]["memory_used_mb"], 1843);
    assert_eq!(json["tick_times"]["min_tick_ms"], 1.2);
    assert_eq!(json["chunks"]["chunks_generated"], 1);
    assert!(json["chunks"]["chunks_loaded"].is_null());
    assert_eq!(json["error_count"], 1);

    // 100 - (20 - 19) * 5 - (60 - 50) * 0.5 - 1 * 2
    assert_eq!(json["score"], 88.0);

    let out = host.output_str();
    assert!(out.contains("Results written to"), "got: {out}");
    assert!(out.contains("Score: 88.0/100"), "got: {out}");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_parse_missing_log_writes_no_logs() {
    let tmp = tempfile::tempdir().unwrap();
    let root = temp_root(&tmp);
    let output = root.join("missing-results.json");

    let mut host = TestHost::new();
    lumo_bench_lib::run(&mut host, ["lumo-bench", "parse", root.join("nope.log").as_str(), output.as_str()]).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["status"], "no_logs");
    assert_eq!(json.as_object().unwrap().len(), 2);
    assert!(host.output_str().contains("Log file not found"));
}
