use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::LabelError;
use crate::trace::trace::PrintRecord;

/// Append-only JSONL print log, one `PrintRecord` per line.
///
/// Opening and appending report their errors; callers decide whether a failed
/// write matters. `print_label` only logs it.
pub struct PrintLog {
    sink: Option<Sink>,
}

struct Sink {
    path: PathBuf,
    file: Mutex<File>,
}

impl PrintLog {
    /// Open (or create) the log at `path` for appending.
    pub fn open(path: &Path) -> Result<Self, LabelError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LabelError::Io {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self {
            sink: Some(Sink {
                path: path.to_path_buf(),
                file: Mutex::new(file),
            }),
        })
    }

    /// A log that records nothing.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.sink.as_ref().map(|s| s.path.as_path())
    }

    /// Append one record. Returns `Ok(false)` when the log is disabled.
    pub fn append(&self, record: &PrintRecord) -> Result<bool, LabelError> {
        let Some(sink) = &self.sink else {
            return Ok(false);
        };

        let mut line = serde_json::to_vec(record).map_err(|source| LabelError::Json {
            context: "print record".into(),
            source,
        })?;
        line.push(b'\n');

        let io_error = |source: io::Error| LabelError::Io {
            path: sink.path.display().to_string(),
            source,
        };

        // one write per line
        let mut file = sink
            .file
            .lock()
            .map_err(|_| io_error(io::Error::other("print log lock poisoned")))?;
        file.write_all(&line).map_err(io_error)?;
        Ok(true)
    }
}
