use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub out_dir: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let out_dir = tmp.path().join("outputs");
        let work = tmp.path().to_path_buf();
        Self {
            _tmp: tmp,
            out_dir,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("qrmatrix");
        cmd.arg("--out-dir").arg(&self.out_dir);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Write a catalog file into the test sandbox and return its path.
    pub fn write_catalog(&self, vectors: Value) -> PathBuf {
        let path = self.work.join("catalog.json");
        fs::write(
            &path,
            serde_json::to_string_pretty(&vectors).expect("serialize catalog"),
        )
        .expect("write catalog");
        path
    }

    pub fn artifact_names(&self) -> Vec<String> {
        if !self.out_dir.exists() {
            return Vec::new();
        }
        let mut names: Vec<String> = fs::read_dir(&self.out_dir)
            .expect("read out dir")
            .map(|e| {
                e.expect("dir entry")
                    .file_name()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        names.sort();
        names
    }
}

pub fn numbers_catalog() -> Value {
    serde_json::json!([
        {"title": "numbers", "segments": [{"content": "123456", "mode": "numeric"}]}
    ])
}

/// Two vectors where the second only fits up to correction level Q:
/// 3500 digits exceed the level-H numeric capacity of the largest
/// symbol version, so exactly task 0001-H fails.
pub fn h_overflow_catalog() -> Value {
    serde_json::json!([
        {"title": "numbers", "segments": [{"content": "123456", "mode": "numeric"}]},
        {"title": "big numbers", "segments": [{"content": "7".repeat(3500), "mode": "numeric"}]}
    ])
}

pub fn artifact_exists(out_dir: &Path, id: &str) -> bool {
    out_dir.join(format!("{id}.png")).exists()
}
