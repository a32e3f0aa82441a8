//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Pitwall - check a workstation is ready to collect F1 session data.
#[derive(Debug, Parser)]
#[command(name = "pitwall")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to settings file (overrides default .pitwall.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Base URL of the session data service
    #[arg(long, env = "PITWALL_API_URL")]
    pub api_url: Option<String>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn runs_without_arguments() {
        let cli = Cli::try_parse_from(["pitwall"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.project.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn parses_global_flags() {
        let cli = Cli::try_parse_from([
            "pitwall",
            "--project",
            "/work/f1",
            "--config",
            "ci.yml",
            "--api-url",
            "http://localhost:8000/ergast/f1",
            "-v",
            "--no-color",
            "--debug",
        ])
        .unwrap();

        assert_eq!(cli.project, Some(PathBuf::from("/work/f1")));
        assert_eq!(cli.config, Some(PathBuf::from("ci.yml")));
        assert_eq!(
            cli.api_url.as_deref(),
            Some("http://localhost:8000/ergast/f1")
        );
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["pitwall", "run"]).is_err());
    }
}
