// src/file_utils.rs

use crate::config::{
    APP_ROOT_ENV_VAR, BATCH_DIR_NAME, BATCH_FILE_NAME, SCRIPTS_DIR_NAME, TOOL_DIR_NAME,
    TOOL_EXECUTABLE_NAME,
};
use crate::error::AppError;
use std::{
    env,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Locations the tool needs, all rooted under the application's install directory
/// so that behaviour does not depend on the caller's working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub root: PathBuf,
    pub scripts_dir: PathBuf,
    pub tool_executable: PathBuf,
    pub batch_file: PathBuf,
}

impl AppPaths {
    /// Derives every path from an explicit install root.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        AppPaths {
            scripts_dir: root.join(SCRIPTS_DIR_NAME),
            tool_executable: root.join(TOOL_DIR_NAME).join(TOOL_EXECUTABLE_NAME),
            batch_file: root.join(BATCH_DIR_NAME).join(BATCH_FILE_NAME),
            root,
        }
    }

    /// Resolves the install root from `AVIDEMUX_BATCH_HOME`, falling back to the
    /// directory holding the running executable, then to the current directory.
    pub fn resolve() -> Self {
        if let Ok(home) = env::var(APP_ROOT_ENV_VAR) {
            let root = PathBuf::from(shellexpand::tilde(&home).into_owned());
            log::debug!("Using {}={}", APP_ROOT_ENV_VAR, root.display());
            return Self::from_root(absolutize(&root));
        }

        let root = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| {
                log::warn!(
                    "Could not determine the executable's location; using the current directory."
                );
                absolutize(Path::new("."))
            });
        Self::from_root(root)
    }
}

/// Expands `~` and returns the absolute form of a path given on the command line.
pub fn expand_user_path(raw: &str) -> PathBuf {
    absolutize(Path::new(shellexpand::tilde(raw).as_ref()))
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Lists the files directly inside `folder_path`, in the order the directory returns them.
/// Subdirectories are skipped and never descended into.
///
/// # Errors
///
/// Returns `AppError::DirectoryListingFailed` if the directory or one of its entries
/// cannot be read.
pub fn list_files(folder_path: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();

    for entry_result in WalkDir::new(folder_path).min_depth(1).max_depth(1) {
        let entry = entry_result.map_err(|source| AppError::DirectoryListingFailed {
            path: folder_path.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_file() {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}
