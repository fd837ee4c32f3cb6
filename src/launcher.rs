// src/launcher.rs

use crate::config::{SHELL_ARGS, SHELL_PROGRAM};
use crate::console::Console;
use crate::error::AppError;
use std::{
    path::Path,
    process::{Child, Command, ExitStatus},
    sync::mpsc,
    thread,
    time::Duration,
};

/// Asks whether to run the batch file now. Only the exact answers `y` and `n` end the loop.
///
/// # Errors
///
/// Returns `InputCancelled` if the input closes before either answer is given.
pub fn ask_to_launch(console: &mut dyn Console) -> Result<bool, AppError> {
    loop {
        let response = console
            .ask("Run batch file? [y/n]")?
            .ok_or(AppError::InputCancelled)?;

        match response.as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => {
                log::debug!("response={}", response);
                console.tell("Response not recognised, try again...")?;
            }
        }
    }
}

/// Starts a new shell running the batch file.
///
/// # Errors
///
/// Returns `LaunchFailed` if the shell cannot be started.
pub fn spawn_batch(batch_path: &Path) -> Result<Child, AppError> {
    spawn_with_shell(SHELL_PROGRAM, batch_path)
}

fn spawn_with_shell(shell: &str, batch_path: &Path) -> Result<Child, AppError> {
    let child = Command::new(shell)
        .args(SHELL_ARGS)
        .arg(batch_path)
        .spawn()
        .map_err(|source| AppError::LaunchFailed {
            path: batch_path.to_path_buf(),
            source,
        })?;
    log::info!("Started {} (pid {})", shell, child.id());
    Ok(child)
}

/// Blocks until the shell started by [`spawn_batch`] exits.
///
/// The exit status is logged but not judged: a failing batch still counts as
/// completed. With `timeout` set, the wait gives up after that long and leaves
/// the shell running.
///
/// # Errors
///
/// * `LaunchFailed` if waiting on the shell fails.
/// * `LaunchTimedOut` if the shell is still running when `timeout` expires.
pub fn wait_for_batch(
    mut child: Child,
    batch_path: &Path,
    timeout: Option<Duration>,
) -> Result<ExitStatus, AppError> {
    let launch_failed = |source| AppError::LaunchFailed {
        path: batch_path.to_path_buf(),
        source,
    };

    let status = match timeout {
        None => child.wait().map_err(launch_failed)?,
        Some(limit) => {
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                let _ = tx.send(child.wait());
            });
            match rx.recv_timeout(limit) {
                Ok(result) => result.map_err(launch_failed)?,
                Err(_) => {
                    return Err(AppError::LaunchTimedOut {
                        path: batch_path.to_path_buf(),
                        timeout: limit,
                    })
                }
            }
        }
    };

    if status.success() {
        log::info!("Batch process finished: {}", status);
    } else {
        log::warn!("Batch process finished with {}", status);
    }
    Ok(status)
}
