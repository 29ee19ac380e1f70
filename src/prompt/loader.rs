//! Streaming CSV prompt loader.

use super::Prompt;
use super::header::ColumnIndex;
use crate::error::{PipelineError, Result};
use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Single-pass producer of prompts from a CSV source.
///
/// Yields prompts in row order. Blank rows and comment rows are filtered out;
/// a row that survives the filters but lacks a title or hook yields a
/// `ValidationError`, and callers are expected to stop there.
pub struct PromptReader<R> {
    records: StringRecordsIntoIter<R>,
    columns: ColumnIndex,
}

/// Open a prompt CSV and validate its header row.
///
/// # Returns
///
/// * `Ok(PromptReader)` - Header contains `title` and `hook`
/// * `Err(PipelineError::Io)` - The file could not be opened
/// * `Err(PipelineError::FormatError)` - No header row, or required columns missing
pub fn load_prompts<P: AsRef<Path>>(path: P) -> Result<PromptReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        PipelineError::Io(format!(
            "failed to open prompt CSV '{}': {}",
            path.display(),
            e
        ))
    })?;

    debug!(path = %path.display(), "reading prompts");
    PromptReader::from_reader(file)
}

impl<R: Read> PromptReader<R> {
    /// Wrap any reader, consuming and validating the header row up front.
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers().map_err(|e| {
            PipelineError::FormatError(format!("failed to read prompt CSV header: {}", e))
        })?;
        let columns = ColumnIndex::from_headers(headers)?;

        Ok(Self {
            records: csv_reader.into_records(),
            columns,
        })
    }

    fn prompt_from_record(&self, record: &StringRecord) -> Result<Prompt> {
        Prompt::from_mapping(&self.columns.mapping(record)).map_err(|e| match e {
            PipelineError::ValidationError(msg) => PipelineError::ValidationError(format!(
                "malformed prompt row at line {}: {}",
                record_line(record),
                msg
            )),
            other => other,
        })
    }
}

impl<R: Read> Iterator for PromptReader<R> {
    type Item = Result<Prompt>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => {
                    return Some(Err(PipelineError::FormatError(format!(
                        "malformed prompt CSV: {}",
                        e
                    ))));
                }
            };

            if is_blank_row(&record) {
                trace!(line = record_line(&record), "skipping blank row");
                continue;
            }
            if is_comment_row(&record) {
                debug!(line = record_line(&record), "skipping comment row");
                continue;
            }

            return Some(self.prompt_from_record(&record));
        }
    }
}

/// True when every cell is empty or whitespace.
pub(crate) fn is_blank_row(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

/// True when the first non-blank cell, in column order, starts with `#`.
pub(crate) fn is_comment_row(record: &StringRecord) -> bool {
    record
        .iter()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .is_some_and(|value| value.starts_with('#'))
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or(0)
}
