mod backup;
mod backup_log;
mod backup_sets;
mod config;
mod copier;
mod error;
mod logging;

use crate::backup::{Outcome, run};
use crate::backup_log::FileLog;
use crate::config::{Args, BackupConfig};
use chrono::Local;
use clap::Parser;
use std::process;
use tracing::debug;

fn main() {
	logging::init_tracing();

	let config = BackupConfig::from_args(Args::parse());
	debug!(?config, "starting backup");

	let mut log = FileLog::new(&config.log_file);
	match run(&config, &mut log, Local::now) {
		Ok(Outcome::Success(summary)) => debug!(
			copied = summary.copied,
			listed = summary.files.len(),
			dry_run = summary.dry_run,
			destination = %summary.destination.display(),
			"backup finished"
		),
		// Reported already, and still exits 0
		Ok(Outcome::SourceNotFound(source)) => {
			debug!(source = %source.display(), "nothing to back up")
		}
		Err(e) => {
			eprintln!("\nBackup failed: {}", e);
			process::exit(1);
		}
	}
}
