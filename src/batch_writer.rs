// src/batch_writer.rs

use crate::config::LINE_ENDING;
use crate::error::AppError;
use crate::jobs::Job;
use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Write},
    path::Path,
};

/// Replaces the batch file at `batch_path` with one block per job: the invocation
/// line followed by a blank line. Any previous file is deleted first, never appended to.
///
/// # Errors
///
/// * `StaleBatchFileDeletionFailed` if an existing file cannot be removed.
/// * `BatchFileWriteFailed` if the file cannot be created or fully written. A partially
///   written file may remain on disk in that case.
pub fn write_batch_file(batch_path: &Path, jobs: &[Job]) -> Result<(), AppError> {
    if batch_path.exists() {
        fs::remove_file(batch_path).map_err(|source| AppError::StaleBatchFileDeletionFailed {
            path: batch_path.to_path_buf(),
            source,
        })?;
        log::debug!("An old batch file was deleted.");
    }

    write_jobs(batch_path, jobs).map_err(|source| AppError::BatchFileWriteFailed {
        path: batch_path.to_path_buf(),
        source,
    })
}

fn write_jobs(batch_path: &Path, jobs: &[Job]) -> io::Result<()> {
    if let Some(parent) = batch_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(batch_path)?;
    // The handle is closed when `writer` drops, on the error paths too.
    let mut writer = BufWriter::new(file);
    for job in jobs {
        writer.write_all(job.invocation_line.as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
        writer.write_all(LINE_ENDING.as_bytes())?;
    }
    writer.flush()
}
