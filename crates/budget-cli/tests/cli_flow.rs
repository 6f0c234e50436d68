use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_budget"))
}

/// Isolated config and export directories for one test.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create tempdir"),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn export_dir(&self) -> &Path {
        self.dir.path()
    }

    fn command(&self, extra_args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.arg("--format")
            .arg("plain")
            .args(extra_args)
            .env("BUDGET_CONFIG", self.config_path())
            .env("BUDGET_EXPORT_DIR", self.export_dir())
            .env_remove("BUDGET_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    fn run(&self, extra_args: &[&str], script: &str) -> Output {
        let mut child = self
            .command(extra_args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn budget");
        // The binary may exit before reading stdin (e.g. on a bad config).
        if let Err(err) = child
            .stdin
            .take()
            .expect("stdin")
            .write_all(script.as_bytes())
        {
            assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe, "write script: {err}");
        }
        child.wait_with_output().expect("wait for budget")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn is_date(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    parts.len() == 3
        && parts[0].len() == 2
        && parts[1].len() == 2
        && parts[2].len() == 4
        && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
}

#[test]
fn test_full_session_exports_csv() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(
        &[],
        "1\n100\nSalary\nincome\n\n1\n50.5\nFood\nexpense\nlunch\n3\n4\n2\n5\nledger.csv\n6\n",
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let text = stdout(&output);
    assert!(text.contains("1. Add Transaction"));
    assert!(text.contains("total_income=100.00"));
    assert!(text.contains("total_expense=50.50"));
    assert!(text.contains("ID\tAmount\tCategory\tDate\tType\tMessage"));
    assert!(text.contains("rows=2"));

    let contents =
        std::fs::read_to_string(sandbox.export_dir().join("ledger.csv")).expect("export written");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ID,Amount,Category,Date,Type,Message");

    let first: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(first[0], "0");
    assert_eq!(first[1], "100.00");
    assert_eq!(first[2], "Salary");
    assert!(is_date(first[3]), "unexpected date {}", first[3]);
    assert_eq!(first[4], "income");
    assert_eq!(first[5], "");

    let second: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(second[0], "1");
    assert_eq!(second[1], "50.50");
    assert_eq!(second[5], "lunch");
}

#[test]
fn test_invalid_input_does_not_end_session() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[], "7\nhello\n1\nabc\n3\n6\n");
    assert!(output.status.success());

    let text = stdout(&output);
    assert_eq!(text.matches("error=Invalid choice").count(), 2);
    assert!(text.contains("error=Invalid amount: abc"));
    assert!(text.contains("total_income=0.00"));
}

#[test]
fn test_end_of_input_exits_cleanly_without_saving() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[], "1\n10\nBooks\nexpense\n\n");
    assert!(output.status.success());

    let exported = std::fs::read_dir(sandbox.export_dir())
        .expect("read dir")
        .count();
    assert_eq!(exported, 0);
}

#[test]
fn test_blank_filename_uses_config_default_and_format() {
    let sandbox = Sandbox::new();
    std::fs::write(
        sandbox.config_path(),
        "[export]\ndefault_file = \"budget.jsonl\"\n",
    )
    .expect("write config");

    let output = sandbox.run(&["--quiet"], "1\n42\nRent\nexpense\nJune\n5\n\n6\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");

    let contents = std::fs::read_to_string(sandbox.export_dir().join("budget.jsonl"))
        .expect("export written");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("\"Amount\":\"42.00\""));
    assert!(lines[0].contains("\"Message\":\"June\""));
}

#[test]
fn test_export_to_missing_directory_reports_error() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[], "1\n1\nTea\nexpense\n\n5\nnope/out.csv\n6\n");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("error=Could not save to"));
    assert!(text.contains("hint=Check that the directory exists"));
    assert!(!sandbox.export_dir().join("nope").exists());
}

#[test]
fn test_invalid_config_exits_with_code() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.config_path(), "[export]\nformat = \"xml\"\n").expect("write config");

    let output = sandbox.run(&[], "6\n");
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid [export] format"));
}

#[test]
fn test_init_config_writes_defaults() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--init-config"], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Wrote default config"));

    let contents = std::fs::read_to_string(sandbox.config_path()).expect("config written");
    assert!(contents.contains("default_file = \"transactions.csv\""));
}
