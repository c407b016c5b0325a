// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-workspace phase log sink (spec §4.8: "open a per-workspace log sink
//! (either stream to the measurement context or a file at
//! `<logs>/<workspace>.log`)"). Mirrors the teacher's append-only
//! `JobLogger`: each call opens, writes, and closes the file — acceptable
//! given the low write frequency of phase events.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where a [`WorkspaceLogger`] writes: either the process's own tracing
/// output (`console = true` in the worker's runtime options) or a
/// per-workspace file under the configured logs directory.
pub enum WorkspaceLogger {
    Console,
    File { logs_dir: PathBuf },
}

impl WorkspaceLogger {
    pub fn new(logs_dir: Option<PathBuf>) -> Self {
        match logs_dir {
            Some(logs_dir) => WorkspaceLogger::File { logs_dir },
            None => WorkspaceLogger::Console,
        }
    }

    /// Append one line: `<workspace>.log` gets timestamp-free lines since
    /// `tracing` already timestamps console output and the file sink
    /// mirrors its own wall-clock via the OS, matching the low-ceremony
    /// style of the teacher's per-job log files.
    pub fn append(&self, workspace: &str, line: &str) {
        match self {
            WorkspaceLogger::Console => {
                tracing::info!(workspace, "{}", line);
            }
            WorkspaceLogger::File { logs_dir } => {
                if let Err(err) = Self::write_line(logs_dir, workspace, line) {
                    tracing::warn!(workspace, error = %err, "failed to write workspace log");
                }
            }
        }
    }

    fn write_line(logs_dir: &Path, workspace: &str, line: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(logs_dir)?;
        let path = logs_dir.join(format!("{workspace}.log"));
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{line}")
    }
}
