//! Helpers shared by the fixture tests.

use dur_diagnostic::LintCode;
use dur_ir::SourceFile;
use dur_lint::FileReport;

/// Each finding as its code and the source text it points at.
pub fn findings(file: &SourceFile, report: &FileReport) -> Vec<(LintCode, String)> {
    report
        .diagnostics
        .iter()
        .map(|d| {
            let span = d.primary_span().expect("every finding has a primary label");
            (d.code, file.snippet(span).to_string())
        })
        .collect()
}
