use clap::Parser;

use budget_core::VERSION;

/// Budget - a console-first personal income and expense tracker
#[derive(Parser, Debug, Default)]
#[command(name = "budget")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, env = "BUDGET_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Directory that relative export filenames resolve against
    #[arg(long, env = "BUDGET_EXPORT_DIR", value_name = "DIR")]
    pub export_dir: Option<String>,

    /// Output format (pretty, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Use ASCII symbols and table borders
    #[arg(long)]
    pub ascii: bool,

    /// Read menu input line by line even on a terminal
    #[arg(long)]
    pub no_input: bool,

    /// Write a default config file (if none exists) and exit
    #[arg(long)]
    pub init_config: bool,

    /// Quiet mode (no banner or receipts)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_flags() {
        let cli = Cli::parse_from([
            "budget",
            "--export-dir",
            "/tmp/out",
            "--format",
            "plain",
            "-vv",
            "--quiet",
        ]);
        assert_eq!(cli.export_dir.as_deref(), Some("/tmp/out"));
        assert_eq!(cli.format.as_deref(), Some("plain"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(!cli.no_color);
    }
}
