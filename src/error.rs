use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a backup run. A missing source folder is not one of these,
/// it is reported through [`crate::backup::Outcome::SourceNotFound`].
#[derive(Debug, Error)]
pub enum BackupError {
	#[error("could not read source folder {}: {source}", path.display())]
	ReadSource {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("could not create backup folder {}: {source}", path.display())]
	CreateDestination {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("could not copy {} to {}: {source}", from.display(), to.display())]
	Copy {
		from: PathBuf,
		to: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("could not write to log file {}: {source}", path.display())]
	Log {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}
