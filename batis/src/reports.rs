//! Machine-readable summaries for the `--json` flag.

use serde::Serialize;

/// Summary of one generated file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub lines: usize,
    /// False in dry-run mode or when an if-missing write was skipped.
    pub written: bool,
}

/// Summary of a generate run.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub table_count: usize,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

/// Summary of a check run.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub ok: bool,
    pub targets: Vec<String>,
    pub tables: Vec<String>,
}
