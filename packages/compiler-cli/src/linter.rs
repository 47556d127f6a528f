//! External Linter
//!
//! Generated text goes through the project's ESLint setup when a config is
//! given. A failing linter never fails the compile; callers log and keep
//! the unlinted text.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{anyhow, bail, Context};
use serde::Deserialize;

pub trait Linter: Send + Sync {
    /// Returns the fixed text, or the input unchanged when nothing applies.
    fn lint_text(&self, text: &str) -> anyhow::Result<String>;

    /// Fixes a file in place.
    fn lint_file(&self, path: &Path) -> anyhow::Result<()>;
}

/// Leaves everything as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLinter;

impl Linter for NoopLinter {
    fn lint_text(&self, text: &str) -> anyhow::Result<String> {
        Ok(text.to_string())
    }

    fn lint_file(&self, _path: &Path) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Runs `npx eslint` with the given config file.
#[derive(Debug, Clone)]
pub struct EslintLinter {
    config: PathBuf,
    /// File name reported to ESLint for stdin input, so TypeScript rules apply.
    stdin_filename: String,
}

#[derive(Debug, Deserialize)]
struct EslintResult {
    output: Option<String>,
}

impl EslintLinter {
    pub fn new(config: impl Into<PathBuf>) -> Self {
        Self {
            config: config.into(),
            stdin_filename: "component.ts".to_string(),
        }
    }

    fn command(&self) -> Command {
        let mut command = Command::new("npx");
        command.arg("eslint").arg("--config").arg(&self.config);
        command
    }
}

impl Linter for EslintLinter {
    fn lint_text(&self, text: &str) -> anyhow::Result<String> {
        let mut child = self
            .command()
            .args(["--stdin", "--stdin-filename", self.stdin_filename.as_str()])
            .args(["--fix-dry-run", "--format", "json"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("failed to start eslint")?;

        child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("eslint stdin unavailable"))?
            .write_all(text.as_bytes())?;

        // eslint exits 1 when problems remain after fixing; the JSON is still valid
        let output = child.wait_with_output()?;
        if output.stdout.is_empty() {
            bail!(
                "eslint produced no output: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        parse_fix_output(&output.stdout, text)
    }

    fn lint_file(&self, path: &Path) -> anyhow::Result<()> {
        let output = self
            .command()
            .arg("--fix")
            .arg(path)
            .output()
            .context("failed to start eslint")?;
        // exit code 2 is a config or crash error, 1 only means unfixed problems
        if output.status.code() == Some(2) {
            bail!(
                "eslint failed on {}: {}",
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

/// Reads `[0].output` from ESLint's JSON report. The key is absent when no
/// fix applied.
fn parse_fix_output(stdout: &[u8], original: &str) -> anyhow::Result<String> {
    let results: Vec<EslintResult> =
        serde_json::from_slice(stdout).context("unexpected eslint report")?;
    Ok(results
        .into_iter()
        .next()
        .and_then(|r| r.output)
        .unwrap_or_else(|| original.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_fixed_output_from_report() {
        let report = br#"[{"filePath":"a.vue","messages":[],"output":"fixed\n"}]"#;
        assert_eq!(parse_fix_output(report, "raw\n").unwrap(), "fixed\n");
    }

    #[test]
    fn keeps_input_when_nothing_was_fixed() {
        let report = br#"[{"filePath":"a.vue","messages":[]}]"#;
        assert_eq!(parse_fix_output(report, "raw\n").unwrap(), "raw\n");
    }

    #[test]
    fn rejects_non_json_report() {
        assert!(parse_fix_output(b"Oops", "raw").is_err());
    }

    #[test]
    fn noop_returns_input() {
        assert_eq!(NoopLinter.lint_text("x").unwrap(), "x");
    }
}
