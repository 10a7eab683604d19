use std::path::{Path, PathBuf};

use clap::Parser;

use crate::backup_log::DEFAULT_LOG_FILE;

#[derive(Parser, Debug)]
#[command(about = "Copies the files of a folder into a timestamped backup folder", long_about = None)]
#[clap(author, version)]
pub struct Args {
	/// Source folder to back up [default: ~/Documents/backup-source]
	#[arg(long)]
	pub source: Option<PathBuf>,

	/// Destination root folder, each backup goes in a timestamped folder inside it
	#[arg(long, default_value = "backups")]
	pub dest: PathBuf,

	/// Show what would happen, but don't copy files
	#[arg(long)]
	pub dry_run: bool,

	/// Log file that gets one line per run
	#[arg(long, default_value = DEFAULT_LOG_FILE)]
	pub log_file: PathBuf,
}

/// Everything a run needs, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupConfig {
	pub source: PathBuf,
	pub dest_root: PathBuf,
	pub log_file: PathBuf,
	pub dry_run: bool,
}

impl BackupConfig {
	pub fn from_args(args: Args) -> Self {
		let home = dirs::home_dir();
		let source = args
			.source
			.unwrap_or_else(|| default_source(home.as_deref()));

		BackupConfig {
			source: expand_home(&source, home.as_deref()),
			dest_root: expand_home(&args.dest, home.as_deref()),
			log_file: expand_home(&args.log_file, home.as_deref()),
			dry_run: args.dry_run,
		}
	}
}

fn default_source(home: Option<&Path>) -> PathBuf {
	home.map(Path::to_path_buf)
		.unwrap_or_default()
		.join("Documents")
		.join("backup-source")
}

/// Replaces a leading `~` with the home folder. Paths like `~user/x` are left alone.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
	let Some(home) = home else {
		return path.to_path_buf();
	};
	match path.strip_prefix("~") {
		Ok(rest) => home.join(rest),
		Err(_) => path.to_path_buf(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> Args {
		Args::try_parse_from(std::iter::once("stamp-backup").chain(args.iter().copied()))
			.expect("arguments should parse")
	}

	#[test]
	fn test_defaults() {
		let args = parse(&[]);
		assert_eq!(args.source, None);
		assert_eq!(args.dest, PathBuf::from("backups"));
		assert_eq!(args.log_file, PathBuf::from("logs/backup.log"));
		assert!(!args.dry_run);
	}

	#[test]
	fn test_all_flags() {
		let args = parse(&[
			"--source",
			"/data/in",
			"--dest",
			"/data/out",
			"--dry-run",
			"--log-file",
			"/tmp/b.log",
		]);
		let config = BackupConfig::from_args(args);
		assert_eq!(
			config,
			BackupConfig {
				source: PathBuf::from("/data/in"),
				dest_root: PathBuf::from("/data/out"),
				log_file: PathBuf::from("/tmp/b.log"),
				dry_run: true,
			}
		);
	}

	#[test]
	fn test_default_source_is_under_home() {
		let home = Path::new("/home/sam");
		assert_eq!(
			default_source(Some(home)),
			PathBuf::from("/home/sam/Documents/backup-source")
		);
		assert_eq!(
			default_source(None),
			PathBuf::from("Documents/backup-source")
		);
	}

	#[test]
	fn test_expand_home() {
		let home = Some(Path::new("/home/sam"));
		assert_eq!(
			expand_home(Path::new("~/stuff"), home),
			PathBuf::from("/home/sam/stuff")
		);
		assert_eq!(expand_home(Path::new("~"), home), PathBuf::from("/home/sam"));
		assert_eq!(
			expand_home(Path::new("~other/stuff"), home),
			PathBuf::from("~other/stuff")
		);
		assert_eq!(
			expand_home(Path::new("backups"), home),
			PathBuf::from("backups")
		);
		assert_eq!(expand_home(Path::new("~/x"), None), PathBuf::from("~/x"));
	}

	#[test]
	fn test_rejects_unknown_flag() {
		let result = Args::try_parse_from(["stamp-backup", "--recursive"]);
		assert!(result.is_err());
	}
}
