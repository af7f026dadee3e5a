//! JSON report writer.
//!
//! Serializes the full list of topic reports once, at the end of a run,
//! as a single indented JSON array. Any existing file at the output path
//! is replaced.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::{Result, StudyError};
use crate::models::TopicReport;

/// Default report file name, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "study_assistant_output.json";

const INDENT: &[u8] = b"    ";

/// Writes topic reports to a JSON file.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Creates a writer targeting `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes all reports, overwriting the target file.
    ///
    /// The file is flushed before returning; on error the handle is
    /// dropped (and closed) as the error propagates.
    pub fn write(&self, reports: &[TopicReport]) -> Result<()> {
        let file = File::create(&self.path).map_err(|source| self.io_error(source))?;
        let mut writer = BufWriter::new(file);

        write_json(&mut writer, reports)?;
        writer.flush().map_err(|source| self.io_error(source))?;

        info!(path = %self.path.display(), topics = reports.len(), "report written");
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StudyError {
        StudyError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PATH)
    }
}

/// Serializes `value` as 4-space indented JSON.
pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<()> {
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(())
}
