// src/jobs.rs

use crate::config::MEDIA_EXTENSIONS;
use crate::error::AppError;
use crate::file_utils::list_files;
use crate::run_config::RunConfig;
use std::path::{Path, PathBuf};

/// One media file and the external-tool command line that processes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source_file: PathBuf,
    pub invocation_line: String,
}

/// Text after the last `.` of the file name, so a bare `.mp4` has the extension `mp4`.
fn file_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext.to_lowercase()),
        _ => None,
    }
}

/// Checks the file extension against the recognised media extensions, ignoring case.
pub fn is_media_file(path: &Path) -> bool {
    match file_extension(path) {
        Some(ext) => {
            log::debug!("Current file has extension: .{}", ext);
            MEDIA_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Formats the command that loads `source`, runs `script` on it and saves to `destination`.
pub fn format_invocation(tool: &Path, source: &Path, script: &Path, destination: &Path) -> String {
    format!(
        "START /B /WAIT \"\" \"{}\" --load \"{}\" --run \"{}\" --save \"{}\" --quit",
        tool.display(),
        source.display(),
        script.display(),
        destination.display()
    )
}

/// Builds one job per media file directly inside the input directory, in directory order.
/// The output keeps the source's file name, so an existing file of that name is overwritten
/// by the external tool.
///
/// # Errors
///
/// Returns `DirectoryListingFailed` if the input directory cannot be read.
pub fn build_jobs(tool: &Path, config: &RunConfig) -> Result<Vec<Job>, AppError> {
    let jobs = list_files(&config.input_path)?
        .into_iter()
        .filter(|path| is_media_file(path))
        .filter_map(|source_file| {
            let file_name = source_file.file_name()?.to_os_string();
            let destination = config.output_path.join(file_name);
            let invocation_line =
                format_invocation(tool, &source_file, &config.script_path, &destination);
            Some(Job {
                source_file,
                invocation_line,
            })
        })
        .collect();
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn config_for(input: &Path, output: &Path) -> RunConfig {
        RunConfig {
            input_path: input.to_path_buf(),
            output_path: output.to_path_buf(),
            script_path: PathBuf::from("/app/scripts/proc.py"),
            debug: false,
        }
    }

    #[test]
    fn test_only_recognised_extensions_become_jobs() {
        let dir = tempdir().unwrap();
        for name in [
            "a.mov", "b.AVI", "c.Mp4", "d.mkv", "e.txt", "f.mp3", "noext", "g.mp4.part",
        ] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("folder.mp4")).unwrap();

        let out = tempdir().unwrap();
        let jobs = build_jobs(Path::new("/app/tool.exe"), &config_for(dir.path(), out.path())).unwrap();

        let mut names: Vec<String> = jobs
            .iter()
            .map(|j| j.source_file.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.mov", "b.AVI", "c.Mp4", "d.mkv"]);
    }

    #[test]
    fn test_extension_is_taken_after_last_dot() {
        assert!(is_media_file(Path::new("/in/.mp4")));
        assert!(is_media_file(Path::new("/in/holiday.2023.MKV")));
        assert!(!is_media_file(Path::new("/in/clip.")));
        assert!(!is_media_file(Path::new("/in/mp4")));
    }

    #[test]
    fn test_jobs_follow_directory_listing_order() {
        let dir = tempdir().unwrap();
        for name in ["z.mp4", "a.mkv", "notes.txt", "m.avi", "b.MOV"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let listed: Vec<PathBuf> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| is_media_file(path))
            .collect();

        let out = tempdir().unwrap();
        let jobs = build_jobs(Path::new("/app/tool.exe"), &config_for(dir.path(), out.path())).unwrap();
        let built: Vec<PathBuf> = jobs.into_iter().map(|j| j.source_file).collect();

        assert_eq!(built, listed);
    }

    #[test]
    fn test_empty_input_dir_yields_no_jobs() {
        let dir = tempdir().unwrap();
        let out = tempdir().unwrap();

        let jobs = build_jobs(Path::new("/app/tool.exe"), &config_for(dir.path(), out.path())).unwrap();
        assert!(jobs.is_empty());
    }

    #[test]
    fn test_invocation_line_format() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("clip.mp4"), b"").unwrap();
        let output = PathBuf::from("/data/out");

        let jobs = build_jobs(Path::new("/app/tool.exe"), &config_for(dir.path(), &output)).unwrap();
        assert_eq!(jobs.len(), 1);

        let expected = format!(
            "START /B /WAIT \"\" \"/app/tool.exe\" --load \"{}\" --run \"/app/scripts/proc.py\" --save \"{}\" --quit",
            dir.path().join("clip.mp4").display(),
            output.join("clip.mp4").display()
        );
        assert_eq!(jobs[0].invocation_line, expected);
        assert_eq!(jobs[0].source_file, dir.path().join("clip.mp4"));
    }
}
