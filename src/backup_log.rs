use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::error::BackupError;

pub const DEFAULT_LOG_FILE: &str = "logs/backup.log";

/// Somewhere a run can record what it did. One call, one entry.
pub trait BackupLog {
	fn append(&mut self, message: &str) -> Result<(), BackupError>;
}

/// Append-only text log, one `[YYYY-MM-DD HH:MM:SS] MESSAGE` line per entry.
/// The file and its parent folders are created on first write.
#[derive(Debug, Clone)]
pub struct FileLog {
	path: PathBuf,
}

impl FileLog {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		FileLog { path: path.into() }
	}

	fn write_line(&self, line: &str) -> std::io::Result<()> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent)?;
		}
		let mut file = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&self.path)?;
		file.write_all(line.as_bytes())
	}
}

impl BackupLog for FileLog {
	fn append(&mut self, message: &str) -> Result<(), BackupError> {
		let line = format_entry(Local::now(), message);
		self.write_line(&line).map_err(|source| BackupError::Log {
			path: self.path.clone(),
			source,
		})
	}
}

/// Formats a log line, newline included. Line breaks inside the message are
/// flattened so each entry stays on one line.
pub fn format_entry(time: DateTime<Local>, message: &str) -> String {
	let message = message.replace(['\r', '\n'], " ");
	format!("[{}] {}\n", time.format("%Y-%m-%d %H:%M:%S"), message)
}
