use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tempfile::TempDir;

const SCRUBBED_ENV: &[&str] = &[
    "HANDSORT_CONFIG",
    "HANDSORT_TIE_POLICY",
    "HANDSORT_ON_ERROR",
    "HANDSORT_SEED",
    "HANDSORT_LOG",
];

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
    temp_dir: TempDir,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

#[allow(dead_code)]
impl CliRunner {
    pub fn new() -> Self {
        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_handsort")),
            temp_dir: TempDir::new().expect("failed to create temporary CLI workspace"),
        }
    }

    /// Working directory of the spawned binary; relative paths resolve here.
    pub fn workdir(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input))
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)], input: &str) -> CliResult {
        self.run_inner(args, env, Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env.iter() {
            cmd.env(key, value);
        }

        let start = Instant::now();
        let mut child = cmd.spawn().expect("failed to spawn CLI binary");

        if let Some(payload) = input {
            use std::io::Write as _;
            if let Some(mut stdin) = child.stdin.take() {
                let _ = stdin.write_all(payload.as_bytes());
            }
        }

        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration: start.elapsed(),
        }
    }
}
