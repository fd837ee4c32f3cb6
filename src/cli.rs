// src/cli.rs

use clap::Parser;

use crate::config::DEBUG_TOKEN;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Builds a batch file that runs an Avidemux project script over every video in a folder.",
    long_about = None
)]
pub struct Cli {
    /// INPUT_PATH OUTPUT_PATH [SCRIPT_NAME | DEBUGON]. Without a script name a menu is shown.
    #[clap(value_name = "ARGS", num_args = 0..)]
    pub positional: Vec<String>,

    /// Print debug output (same as passing DEBUGON).
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub debug: bool,

    /// Run the batch file without asking.
    #[clap(long, action = clap::ArgAction::SetTrue, conflicts_with = "no_launch")]
    pub launch: bool,

    /// Only write the batch file, never run it.
    #[clap(long = "no-launch", action = clap::ArgAction::SetTrue)]
    pub no_launch: bool,

    /// Give up waiting for the launched batch file after this many seconds.
    #[clap(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// True when debug output was requested by flag or by the `DEBUGON` token.
    pub fn debug_requested(&self) -> bool {
        self.debug || (self.positional.len() == 3 && self.positional[2] == DEBUG_TOKEN)
    }

    /// The launch decision given on the command line, if any.
    pub fn launch_preset(&self) -> Option<bool> {
        match (self.launch, self.no_launch) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_token_only_counts_in_third_position() {
        let cli = Cli::parse_from(["avidemux_batch", "in", "out", "DEBUGON"]);
        assert!(cli.debug_requested());

        let cli = Cli::parse_from(["avidemux_batch", "DEBUGON", "out"]);
        assert!(!cli.debug_requested());

        let cli = Cli::parse_from(["avidemux_batch", "in", "out", "proc.py", "--debug"]);
        assert!(cli.debug_requested());
    }

    #[test]
    fn test_launch_preset() {
        let cli = Cli::parse_from(["avidemux_batch", "in", "out"]);
        assert_eq!(cli.launch_preset(), None);

        let cli = Cli::parse_from(["avidemux_batch", "in", "out", "--no-launch"]);
        assert_eq!(cli.launch_preset(), Some(false));

        let cli = Cli::parse_from(["avidemux_batch", "--launch", "in", "out"]);
        assert_eq!(cli.launch_preset(), Some(true));
    }

    #[test]
    fn test_launch_flags_conflict() {
        let result = Cli::try_parse_from(["avidemux_batch", "in", "out", "--launch", "--no-launch"]);
        assert!(result.is_err());
    }
}
