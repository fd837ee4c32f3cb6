// src/error.rs

use std::{io, path::PathBuf, time::Duration};
use thiserror::Error;

use crate::config::USAGE;

/// Every way a run can end early. None of these are retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Incorrect number of arguments ({count}). Correct usage is {}.", USAGE)]
    InvalidArgumentCount { count: usize },

    #[error("INPUT_PATH '{}' does not exist. Check and try again.", .0.display())]
    InputPathNotFound(PathBuf),

    #[error("OUTPUT_PATH '{}' could not be created: {source}", .path.display())]
    OutputPathNotCreatable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "No Avidemux project files (*.py) found in '{}'. Check the directory contains the script you want to process.",
        .0.display()
    )]
    NoScriptsFound(PathBuf),

    #[error("SCRIPT '{}' could not be found. Check and try again.", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("Could not list directory '{}': {source}", .path.display())]
    DirectoryListingFailed {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Old batch file '{}' could not be deleted: {source}", .path.display())]
    StaleBatchFileDeletionFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Batch file '{}' could not be written: {source}", .path.display())]
    BatchFileWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input was closed before a valid response was given.")]
    InputCancelled,

    #[error("Console input/output failed: {0}")]
    ConsoleIo(#[source] io::Error),

    #[error("Prompt failed: {0}")]
    Interaction(#[from] dialoguer::Error),

    #[error("Failed to run batch file '{}': {source}", .path.display())]
    LaunchFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "Batch file '{}' was still running after {} seconds; it has been left running.",
        .path.display(),
        .timeout.as_secs()
    )]
    LaunchTimedOut { path: PathBuf, timeout: Duration },
}

impl AppError {
    /// Process exit code for this failure. Zero is reserved for success.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidArgumentCount { .. } => 2,
            AppError::InputPathNotFound(_) => 3,
            AppError::OutputPathNotCreatable { .. } => 4,
            AppError::NoScriptsFound(_) => 5,
            AppError::ScriptNotFound(_) => 6,
            AppError::DirectoryListingFailed { .. } => 7,
            AppError::StaleBatchFileDeletionFailed { .. } => 8,
            AppError::BatchFileWriteFailed { .. } => 9,
            AppError::InputCancelled => 10,
            AppError::ConsoleIo(_) | AppError::Interaction(_) => 11,
            AppError::LaunchFailed { .. } => 12,
            AppError::LaunchTimedOut { .. } => 13,
        }
    }
}
