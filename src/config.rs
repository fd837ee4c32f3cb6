// src/config.rs

/// Media file extensions that produce a job (all lowercase, compared case-insensitively).
pub const MEDIA_EXTENSIONS: &[&str] = &["mov", "avi", "mp4", "mkv"];
/// Processing scripts are recognised by this substring in their file name.
pub const SCRIPT_NAME_MARKER: &str = ".py";
/// Literal third positional argument that switches on debug output.
pub const DEBUG_TOKEN: &str = "DEBUGON";
/// Overrides the install root the paths are derived from.
pub const APP_ROOT_ENV_VAR: &str = "AVIDEMUX_BATCH_HOME";

pub const APP_TITLE: &str = "<<<<< AviDemuxBat, v0.3 >>>>>";
pub const USAGE: &str = "avidemux_batch <INPUT_PATH> <OUTPUT_PATH> [SCRIPT_NAME | DEBUGON]";

pub const SCRIPTS_DIR_NAME: &str = "scripts";
pub const TOOL_DIR_NAME: &str = "avidemux";
pub const TOOL_EXECUTABLE_NAME: &str = "AvidemuxPortable.exe";
pub const BATCH_DIR_NAME: &str = "output";
pub const BATCH_FILE_NAME: &str = "AviDemuxBatProcess.bat";

/// The shell used to run the generated batch file, which is platform-dependent.
#[cfg(windows)]
pub const SHELL_PROGRAM: &str = "cmd";
#[cfg(windows)]
pub const SHELL_ARGS: &[&str] = &["/C"];
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

#[cfg(not(windows))]
pub const SHELL_PROGRAM: &str = "sh";
#[cfg(not(windows))]
pub const SHELL_ARGS: &[&str] = &[];
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";
