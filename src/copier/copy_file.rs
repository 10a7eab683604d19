use std::fs;
use std::path::Path;

use crate::error::BackupError;

/// Copies one file's bytes to `dst_path`, then carries over its permissions and timestamps.
/// Returns the number of bytes copied.
pub fn copy_file(src_path: &Path, dst_path: &Path) -> Result<u64, BackupError> {
	let copy_error = |source: std::io::Error| BackupError::Copy {
		from: src_path.to_path_buf(),
		to: dst_path.to_path_buf(),
		source,
	};

	let bytes = fs::copy(src_path, dst_path).map_err(copy_error)?;
	copy_file_metadata(src_path, dst_path).map_err(copy_error)?;
	Ok(bytes)
}

fn copy_file_metadata(src_path: &Path, dst_path: &Path) -> std::io::Result<()> {
	let src_metadata = fs::metadata(src_path)?;

	// Timestamps first: the copy may be read-only once permissions are applied
	let atime = filetime::FileTime::from_last_access_time(&src_metadata);
	let mtime = filetime::FileTime::from_last_modification_time(&src_metadata);
	filetime::set_file_times(dst_path, atime, mtime)?;

	fs::set_permissions(dst_path, src_metadata.permissions())?;

	Ok(())
}
