// src/script_selector.rs

use crate::config::SCRIPT_NAME_MARKER;
use crate::console::Console;
use crate::error::AppError;
use crate::file_utils::list_files;
use std::path::{Path, PathBuf};

/// A processing script found in the scripts directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCandidate {
    pub file_path: PathBuf,
    pub display_name: String,
}

impl ScriptCandidate {
    fn new(file_path: PathBuf) -> Self {
        let display_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_path.to_string_lossy().into_owned());
        ScriptCandidate {
            file_path,
            display_name,
        }
    }
}

/// A file counts as a processing script when its name contains `.py`, ignoring case.
fn is_script_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            name.to_string_lossy()
                .to_lowercase()
                .contains(SCRIPT_NAME_MARKER)
        })
        .unwrap_or(false)
}

/// Lists the processing scripts directly inside `scripts_dir`, in directory order.
///
/// # Errors
///
/// Returns `NoScriptsFound` if the directory is missing or holds no scripts, and
/// `DirectoryListingFailed` if it exists but cannot be read.
pub fn find_scripts(scripts_dir: &Path) -> Result<Vec<ScriptCandidate>, AppError> {
    if !scripts_dir.is_dir() {
        log::debug!("SCRIPTS_DIR={}", scripts_dir.display());
        return Err(AppError::NoScriptsFound(scripts_dir.to_path_buf()));
    }

    let candidates: Vec<ScriptCandidate> = list_files(scripts_dir)?
        .into_iter()
        .filter(|path| is_script_file(path))
        .inspect(|path| log::debug!("Found script file {}", path.display()))
        .map(ScriptCandidate::new)
        .collect();

    if candidates.is_empty() {
        log::debug!("SCRIPTS_DIR={}", scripts_dir.display());
        return Err(AppError::NoScriptsFound(scripts_dir.to_path_buf()));
    }
    Ok(candidates)
}

/// Prints the numbered menu and asks until the operator enters a number in `1..=len`.
///
/// # Errors
///
/// Returns `InputCancelled` if the input closes before a valid selection.
pub fn choose_from_menu<'a>(
    candidates: &'a [ScriptCandidate],
    console: &mut dyn Console,
) -> Result<&'a ScriptCandidate, AppError> {
    console.tell("Select the script to use from the following options:")?;
    for (index, candidate) in candidates.iter().enumerate() {
        console.tell(&format!("{}. {}", index + 1, candidate.display_name))?;
    }

    let prompt = format!("Input selection [1-{}]", candidates.len());
    loop {
        let response = console.ask(&prompt)?.ok_or(AppError::InputCancelled)?;

        match parse_selection(&response, candidates.len()) {
            Some(index) => {
                let chosen = &candidates[index];
                console.tell(&format!("Using script {}.", chosen.display_name))?;
                return Ok(chosen);
            }
            None => {
                log::debug!("Unusable selection {:?}", response);
                console.tell("Response not recognised, try again...")?;
            }
        }
    }
}

/// Maps a 1-based menu response to a 0-based index.
fn parse_selection(response: &str, count: usize) -> Option<usize> {
    match response.trim().parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Some(number - 1),
        _ => None,
    }
}

/// Resolves a script name given on the command line against the scripts directory.
pub fn resolve_named(scripts_dir: &Path, name: &str) -> Result<PathBuf, AppError> {
    let script_path = scripts_dir.join(name);
    ensure_script_exists(&script_path)?;
    Ok(script_path)
}

/// Final check that the chosen script is still a file on disk.
pub fn ensure_script_exists(script_path: &Path) -> Result<(), AppError> {
    if script_path.is_file() {
        Ok(())
    } else {
        log::debug!("pathToScript={}", script_path.display());
        Err(AppError::ScriptNotFound(script_path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::StreamConsole;
    use std::{fs, io::Cursor};
    use tempfile::tempdir;

    fn scripts_dir_with(names: &[&str]) -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"adm = Avidemux()").unwrap();
        }
        dir
    }

    #[test]
    fn test_only_py_named_files_are_candidates() {
        let dir = scripts_dir_with(&["a.py", "b.py", "notes.txt"]);

        let mut names: Vec<String> = find_scripts(dir.path())
            .unwrap()
            .into_iter()
            .map(|c| c.display_name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["a.py", "b.py"]);
    }

    #[test]
    fn test_candidates_follow_directory_listing_order() {
        let dir = scripts_dir_with(&["zeta.py", "alpha.py", "readme.md", "mid.PY"]);
        let listed: Vec<PathBuf> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| is_script_file(path))
            .collect();

        let found: Vec<PathBuf> = find_scripts(dir.path())
            .unwrap()
            .into_iter()
            .map(|c| c.file_path)
            .collect();

        assert_eq!(found, listed);
    }

    #[test]
    fn test_marker_match_is_case_insensitive_substring() {
        assert!(is_script_file(Path::new("/s/CROP.PY")));
        assert!(is_script_file(Path::new("/s/old.py.bak")));
        assert!(!is_script_file(Path::new("/s.py/notes.txt")));
    }

    #[test]
    fn test_no_scripts_found() {
        let dir = scripts_dir_with(&["notes.txt"]);
        let err = find_scripts(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::NoScriptsFound(_)));

        let missing = dir.path().join("scripts");
        let err = find_scripts(&missing).unwrap_err();
        assert!(matches!(err, AppError::NoScriptsFound(ref p) if *p == missing));
    }

    #[test]
    fn test_first_entry_is_first_listed_candidate() {
        let dir = scripts_dir_with(&["zeta.py", "alpha.py"]);
        let candidates = find_scripts(dir.path()).unwrap();

        let mut out = Vec::new();
        let mut console = StreamConsole::new(Cursor::new("1\n"), &mut out);
        let chosen = choose_from_menu(&candidates, &mut console).unwrap();

        assert_eq!(chosen, &candidates[0]);
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains(&format!("1. {}", candidates[0].display_name)));
        assert!(shown.contains(&format!("2. {}", candidates[1].display_name)));
    }

    #[test]
    fn test_invalid_selections_keep_prompting() {
        let dir = scripts_dir_with(&["a.py", "b.py"]);
        let candidates = find_scripts(dir.path()).unwrap();

        let mut out = Vec::new();
        let mut console = StreamConsole::new(Cursor::new("abc\n0\n99\n-1\n\n2\n"), &mut out);
        let chosen = choose_from_menu(&candidates, &mut console).unwrap();

        assert_eq!(chosen, &candidates[1]);
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Response not recognised, try again...").count(), 5);
        assert_eq!(shown.matches("Input selection [1-2]").count(), 6);
    }

    #[test]
    fn test_closed_input_cancels_menu() {
        let dir = scripts_dir_with(&["a.py"]);
        let candidates = find_scripts(dir.path()).unwrap();

        let mut out = Vec::new();
        let mut console = StreamConsole::new(Cursor::new("abc\n"), &mut out);
        let err = choose_from_menu(&candidates, &mut console).unwrap_err();

        assert!(matches!(err, AppError::InputCancelled));
    }

    #[test]
    fn test_resolve_named_script() {
        let dir = scripts_dir_with(&["proc.py"]);

        let path = resolve_named(dir.path(), "proc.py").unwrap();
        assert_eq!(path, dir.path().join("proc.py"));

        let err = resolve_named(dir.path(), "missing.py").unwrap_err();
        assert!(matches!(err, AppError::ScriptNotFound(_)));
    }
}
