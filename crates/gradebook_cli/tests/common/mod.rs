use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub data_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let data_dir = tmp.path().join("data");
        Self {
            _tmp: tmp,
            data_dir,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gradebook").expect("gradebook binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn add_student(&self, name: &str, id: &str, section: &str, score: Option<&str>) {
        let mut cmd = self.cmd();
        cmd.args([
            "add",
            "--name",
            name,
            "--id",
            id,
            "--section",
            section,
            "--contact",
            "0170000000",
        ]);
        if let Some(score) = score {
            cmd.args(["--score", score]);
        }
        cmd.assert().success();
    }
}
