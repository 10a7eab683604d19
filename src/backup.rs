use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;

use crate::backup_log::BackupLog;
use crate::backup_sets::set_namer::generate_name;
use crate::config::BackupConfig;
use crate::copier::copy_file::copy_file;
use crate::error::BackupError;

/// How a run ended, when it didn't fail outright
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// Nothing was done because the source folder is missing or isn't a folder
	SourceNotFound(PathBuf),
	Success(BackupSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupSummary {
	/// Files actually copied, always 0 for a dry run
	pub copied: usize,
	/// The timestamped folder, which a dry run never creates
	pub destination: PathBuf,
	/// Names of the files copied, or that would have been
	pub files: Vec<OsString>,
	pub dry_run: bool,
}

/// Copies every top-level regular file of `config.source` into a new
/// `<dest_root>/<YYYYMMDD-HHMMSS>` folder, or just says what it would copy on a dry run.
/// Writes exactly one entry to `log` whatever the outcome, unless an error aborts the run.
pub fn run<L, F>(config: &BackupConfig, log: &mut L, get_time: F) -> Result<Outcome, BackupError>
where
	L: BackupLog,
	F: Fn() -> DateTime<Local>,
{
	let source = &config.source;
	if !source.is_dir() {
		log.append(&format!(
			"ERROR: source folder not found: {}",
			source.display()
		))?;
		println!("Source folder not found: {}", source.display());
		return Ok(Outcome::SourceNotFound(source.clone()));
	}

	let set_name = generate_name(get_time);
	let destination = config.dest_root.join(&set_name);

	if config.dry_run {
		println!("[DRY-RUN] No files will be copied.");
	} else {
		fs::create_dir_all(&destination).map_err(|source| BackupError::CreateDestination {
			path: destination.clone(),
			source,
		})?;
		debug!("created backup folder {}", destination.display());
	}

	let files = list_regular_files(source)?;
	let mut copied = 0;
	for name in &files {
		if config.dry_run {
			println!("[DRY-RUN] Would copy: {}", name.to_string_lossy());
			continue;
		}
		let bytes = copy_file(&source.join(name), &destination.join(name))?;
		debug!("copied {} ({} bytes)", name.to_string_lossy(), bytes);
		copied += 1;
	}

	if config.dry_run {
		log.append(&format!(
			"DRY-RUN: simulated backup from {} to {}",
			source.display(),
			destination.display()
		))?;
		println!("[DRY-RUN] Done.");
	} else {
		log.append(&format!(
			"OK: copied {} file(s) from {} to {}",
			copied,
			source.display(),
			destination.display()
		))?;
		println!(
			"Backup complete: {} file(s) -> {}",
			copied,
			destination.display()
		);
	}

	Ok(Outcome::Success(BackupSummary {
		copied,
		destination,
		files,
		dry_run: config.dry_run,
	}))
}

/// Names of the entries directly inside `folder` that are, or link to, regular files,
/// sorted by name. Everything else is skipped without comment.
fn list_regular_files(folder: &Path) -> Result<Vec<OsString>, BackupError> {
	let read_error = |source: std::io::Error| BackupError::ReadSource {
		path: folder.to_path_buf(),
		source,
	};

	let mut files = Vec::new();
	for entry in fs::read_dir(folder).map_err(read_error)? {
		let entry = entry.map_err(read_error)?;
		let path = entry.path();
		match fs::metadata(&path) {
			Ok(metadata) if metadata.is_file() => files.push(entry.file_name()),
			Ok(_) => debug!("skipping {}, not a regular file", path.display()),
			Err(e) => debug!("skipping {}: {}", path.display(), e),
		}
	}
	files.sort();
	Ok(files)
}
