// src/run_config.rs

use crate::config::DEBUG_TOKEN;
use crate::error::AppError;
use crate::file_utils::expand_user_path;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// How the processing script is chosen for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptChoice {
    /// Show the numbered menu and ask the operator.
    Menu,
    /// Use the named file from the scripts directory.
    Named(String),
}

/// Result of validating the positional arguments, before a script is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedArgs {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub script_choice: ScriptChoice,
    pub debug: bool,
}

/// Everything one run needs. Built once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub script_path: PathBuf,
    pub debug: bool,
}

impl RunConfig {
    pub fn new(args: ValidatedArgs, script_path: PathBuf) -> Self {
        RunConfig {
            input_path: args.input_path,
            output_path: args.output_path,
            script_path,
            debug: args.debug,
        }
    }
}

/// Checks the positional arguments and prepares the input and output directories.
///
/// Accepted shapes:
/// * `INPUT OUTPUT` - menu selection.
/// * `INPUT OUTPUT DEBUGON` - menu selection with debug output.
/// * `INPUT OUTPUT SCRIPT_NAME` - the named script, no menu.
///
/// The input directory is checked before anything touches the disk; the output
/// directory is created when it does not exist yet.
///
/// # Errors
///
/// * `InvalidArgumentCount` for fewer than 2 or more than 3 arguments.
/// * `InputPathNotFound` if the input directory does not exist.
/// * `OutputPathNotCreatable` if the output directory cannot be created.
pub fn validate_args(positional: &[String], debug_flag: bool) -> Result<ValidatedArgs, AppError> {
    if !(2..=3).contains(&positional.len()) {
        for (index, arg) in positional.iter().enumerate() {
            log::debug!("arg{}: {}", index, arg);
        }
        return Err(AppError::InvalidArgumentCount {
            count: positional.len(),
        });
    }

    let (script_choice, debug) = match positional.get(2).map(String::as_str) {
        Some(DEBUG_TOKEN) => (ScriptChoice::Menu, true),
        Some(name) => (ScriptChoice::Named(name.to_string()), debug_flag),
        None => (ScriptChoice::Menu, debug_flag),
    };

    let input_path = expand_user_path(&positional[0]);
    if !input_path.is_dir() {
        log::debug!("INPUT_PATH={}", input_path.display());
        return Err(AppError::InputPathNotFound(input_path));
    }

    let output_path = expand_user_path(&positional[1]);
    ensure_output_dir(&output_path)?;

    Ok(ValidatedArgs {
        input_path,
        output_path,
        script_choice,
        debug,
    })
}

fn ensure_output_dir(output_path: &Path) -> Result<(), AppError> {
    if output_path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(output_path).map_err(|source| {
        log::debug!("OUTPUT_PATH={}", output_path.display());
        AppError::OutputPathNotCreatable {
            path: output_path.to_path_buf(),
            source,
        }
    })?;
    log::info!("Created output directory {}", output_path.display());
    Ok(())
}
