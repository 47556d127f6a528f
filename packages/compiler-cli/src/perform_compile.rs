//! Perform Compile
//!
//! Batch entry point: discover, compile in parallel, write, lint. One
//! file's failure is recorded in the report and never stops the batch.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use d2o_compiler::{analyze, compile, parse_sfc, CompileError};

use crate::config::ProjectConfig;
use crate::file_controller::{discover_files, output_path, read_file, write_file};
use crate::linter::{EslintLinter, Linter, NoopLinter};

/// Options for one `d2o` run.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Paths, directories or glob patterns.
    pub files: Vec<String>,
    /// Replace each input instead of writing `Name.<suffix>.vue` beside it.
    pub overwrite: bool,
    /// ESLint config; no linting when absent.
    pub linter_config: Option<PathBuf>,
    /// Attach each component's symbol table as JSON to the report.
    pub dump_ir: bool,
    pub config: ProjectConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted { output: PathBuf },
    /// The file has no script block.
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub outcome: Outcome,
    /// Pretty-printed symbol table, with `dump_ir`.
    pub ir: Option<String>,
}

/// Compilation result.
#[derive(Debug, Clone, Default)]
pub struct CompilationReport {
    /// One entry per discovered file, in discovery order.
    pub files: Vec<FileReport>,
}

impl CompilationReport {
    pub fn converted(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Converted { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.files.iter().filter(|f| predicate(&f.outcome)).count()
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed() > 0 {
            1
        } else {
            0
        }
    }
}

pub fn perform_compilation(options: &CompileOptions) -> anyhow::Result<CompilationReport> {
    match &options.linter_config {
        Some(config) => perform_compilation_with_linter(options, &EslintLinter::new(config)),
        None => perform_compilation_with_linter(options, &NoopLinter),
    }
}

pub fn perform_compilation_with_linter(
    options: &CompileOptions,
    linter: &dyn Linter,
) -> anyhow::Result<CompilationReport> {
    let start = Instant::now();
    let files: Vec<PathBuf> = discover_files(&options.files)?
        .into_iter()
        .filter(|path| options.overwrite || !is_generated(path, &options.config.generated_file_suffix))
        .collect();
    info!("compiling {} file(s)", files.len());

    let files: Vec<FileReport> = files
        .par_iter()
        .map(|input| compile_file(input, options, linter))
        .collect();

    for report in &files {
        match &report.outcome {
            Outcome::Converted { output } => {
                if let Err(e) = linter.lint_file(output) {
                    warn!("lint skipped for {}: {:#}", output.display(), e);
                }
                info!("{} -> {}", report.input.display(), output.display());
            }
            Outcome::Skipped => info!("{} skipped: no script block", report.input.display()),
            Outcome::Failed(message) => warn!("{} failed: {}", report.input.display(), message),
        }
    }

    let report = CompilationReport { files };
    info!(
        "{} converted, {} skipped, {} failed in {:?}",
        report.converted(),
        report.skipped(),
        report.failed(),
        start.elapsed()
    );
    Ok(report)
}

fn compile_file(input: &Path, options: &CompileOptions, linter: &dyn Linter) -> FileReport {
    debug!("compiling {}", input.display());
    let mut ir = None;
    let outcome = convert(input, options, linter, &mut ir)
        .unwrap_or_else(|e| Outcome::Failed(format!("{:#}", e)));
    FileReport {
        input: input.to_path_buf(),
        outcome,
        ir,
    }
}

fn convert(
    input: &Path,
    options: &CompileOptions,
    linter: &dyn Linter,
    ir: &mut Option<String>,
) -> anyhow::Result<Outcome> {
    let dialect = &options.config.dialect;
    let text = read_file(input)?;
    let descriptor = parse_sfc(&text);

    if options.dump_ir {
        if let Some(script) = descriptor.script.as_ref().filter(|s| !s.content.trim().is_empty()) {
            let table = analyze(&script.content, dialect)
                .with_context(|| format!("cannot analyze {}", input.display()))?;
            *ir = Some(serde_json::to_string_pretty(&table)?);
        }
    }

    let mut compiled = match compile(&descriptor, dialect) {
        Ok(compiled) => compiled,
        Err(CompileError::NoScript) => return Ok(Outcome::Skipped),
        Err(e) => return Err(e.into()),
    };

    if let Some(script) = compiled.script.as_mut() {
        lint_script(&mut script.content, linter, input);
    }

    let output = output_path(input, options.overwrite, &options.config.generated_file_suffix);
    write_file(&output, &compiled.to_source())?;
    Ok(Outcome::Converted { output })
}

/// Runs the generated script through the linter, keeping the unlinted
/// text when it fails.
fn lint_script(content: &mut String, linter: &dyn Linter, input: &Path) {
    match linter.lint_text(content) {
        Ok(linted) => *content = format!("\n{}", linted.trim_start()),
        Err(e) => warn!("lint skipped for script of {}: {:#}", input.display(), e),
    }
}

/// `Name.<suffix>.vue` files are outputs of an earlier run.
fn is_generated(path: &Path, suffix: &str) -> bool {
    path.file_stem()
        .and_then(|stem| Path::new(stem).extension())
        .is_some_and(|ext| ext == suffix)
}
