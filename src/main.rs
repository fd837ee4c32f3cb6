// src/main.rs

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;
use std::time::Duration;

// Module declarations
mod batch_writer;
mod cli;
mod config;
mod console;
mod error;
mod file_utils;
mod jobs;
mod launcher;
mod run_config;
mod script_selector;

// Crate imports for convenience
use crate::batch_writer::write_batch_file;
use crate::cli::Cli;
use crate::config::APP_TITLE;
use crate::console::{Console, StreamConsole, TerminalConsole};
use crate::error::AppError;
use crate::file_utils::AppPaths;
use crate::jobs::build_jobs;
use crate::launcher::{ask_to_launch, spawn_batch, wait_for_batch};
use crate::run_config::{validate_args, RunConfig, ScriptChoice};
use crate::script_selector::{choose_from_menu, ensure_script_exists, find_scripts, resolve_named};

fn main() {
    dotenvy::dotenv().ok();
    let cli_args = Cli::parse();
    init_logging(cli_args.debug_requested());

    if let Err(err) = run_app(&cli_args) {
        eprintln!("\nApplication Error: {}", err);
        eprintln!("Exiting.");
        process::exit(err.exit_code());
    }
}

fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
    if debug {
        log::debug!("DEBUG outputs are turned on.");
    }
}

fn run_app(cli_args: &Cli) -> Result<(), AppError> {
    let paths = AppPaths::resolve();
    log::debug!("Application root: {}", paths.root.display());

    if io::stdin().is_terminal() {
        run(cli_args, &paths, &mut TerminalConsole::default())
    } else {
        let stdin = io::stdin();
        let mut console = StreamConsole::new(stdin.lock(), io::stdout());
        run(cli_args, &paths, &mut console)
    }
}

/// Runs every stage in order, stopping at the first failure.
fn run(cli_args: &Cli, paths: &AppPaths, console: &mut dyn Console) -> Result<(), AppError> {
    console.tell(APP_TITLE)?;

    let validated = validate_args(&cli_args.positional, cli_args.debug)?;

    let script_path = match &validated.script_choice {
        ScriptChoice::Named(name) => resolve_named(&paths.scripts_dir, name)?,
        ScriptChoice::Menu => {
            let candidates = find_scripts(&paths.scripts_dir)?;
            choose_from_menu(&candidates, console)?.file_path.clone()
        }
    };
    ensure_script_exists(&script_path)?;
    let config = RunConfig::new(validated, script_path);
    if config.debug {
        console.tell(&format!(
            "DEBUG: INPUT_PATH={} OUTPUT_PATH={} SCRIPT={}",
            config.input_path.display(),
            config.output_path.display(),
            config.script_path.display()
        ))?;
    }

    console.tell("Started generating batch file...")?;
    let jobs = build_jobs(&paths.tool_executable, &config)?;
    for job in &jobs {
        log::debug!("Queued {}", job.source_file.display());
    }
    console.tell(&format!("Found {} files to process.", jobs.len()))?;

    write_batch_file(&paths.batch_file, &jobs)?;
    console.tell(&format!(
        "Output complete, batch file written to {}.",
        paths.batch_file.display()
    ))?;

    let launch = match cli_args.launch_preset() {
        Some(decision) => decision,
        None => ask_to_launch(console)?,
    };
    if launch {
        console.tell(&format!(
            "Launching process {}...",
            paths.batch_file.display()
        ))?;
        let child = spawn_batch(&paths.batch_file)?;
        console.tell("Process started. DO NOT CLOSE THIS WINDOW UNTIL IT HAS FINISHED!")?;
        wait_for_batch(child, &paths.batch_file, cli_args.timeout.map(Duration::from_secs))?;
    } else {
        console.tell(&format!(
            "Batch file can be launched manually using the file located in {}",
            paths.batch_file.display()
        ))?;
    }

    console.tell("Exiting.")?;
    Ok(())
}
