//! Duration lint.
//!
//! Flags unit-less numbers that end up in `time.Duration` slots, where they
//! are silently read as nanoseconds:
//!
//! ```text
//! var timeout time.Duration = 5       // L0001: 5 nanoseconds, not seconds
//! time.Sleep(10)                      // L0002
//! d := time.Duration(n)               // L0003 (strict conversions)
//! d := time.Duration(n) * time.Second // fine
//! ```
//!
//! # Pipeline
//!
//! 1. [`resolve`] links identifier uses to their declarations
//! 2. [`lint::FileLinter`] walks the file once, keeping a
//!    [`context::ContextStack`] that mirrors the ancestor chain
//! 3. [`checks`] run per assignment, typed declaration, struct field and
//!    call argument, asking the [`classify::Classifier`] whether a value
//!    carries a unit
//! 4. Conversion findings are deferred up the stack until an enclosing
//!    multiplication redeems them or the repair path ends
//!
//! Files are independent: [`lint_package`] lints them in parallel.

pub mod checks;
pub mod classify;
pub mod config;
pub mod context;
mod error;
pub mod lint;
pub mod resolve;

use std::sync::Once;

use dur_diagnostic::Diagnostic;
use dur_ir::{walk_file, SourceFile};
use dur_types::Pool;
use rayon::prelude::*;

pub use classify::Classifier;
pub use config::{ConfigError, LintConfig, FORBID_IMPROPER_CONVERSIONS};
pub use context::{Context, ContextStack, Resolution};
pub use error::LintError;
pub use lint::FileLinter;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset; safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Findings for one file, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Lint one file.
#[tracing::instrument(level = "debug", skip_all, fields(path = %file.path))]
pub fn lint_file(
    file: &SourceFile,
    pool: &Pool,
    config: &LintConfig,
) -> Result<FileReport, LintError> {
    let resolutions = resolve::resolve_file(file);
    let classifier = Classifier::new(file, pool, &resolutions);
    let mut linter = FileLinter::new(classifier, *config);

    walk_file(&mut linter, file)?;
    let diagnostics = linter.finish()?;

    tracing::debug!(findings = diagnostics.len(), "file linted");
    Ok(FileReport {
        path: file.path.clone(),
        diagnostics,
    })
}

/// Lint every file of a package, in parallel.
///
/// Reports come back in the order of `files`. The first internal error
/// aborts the run.
#[tracing::instrument(level = "debug", skip_all, fields(files = files.len()))]
pub fn lint_package(
    files: &[SourceFile],
    pool: &Pool,
    config: &LintConfig,
) -> Result<Vec<FileReport>, LintError> {
    let reports = files
        .par_iter()
        .map(|file| lint_file(file, pool, config))
        .collect::<Result<Vec<_>, LintError>>()?;

    tracing::debug!(
        findings = reports.iter().map(|r| r.diagnostics.len()).sum::<usize>(),
        "package linted"
    );
    Ok(reports)
}
