use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "stylelint-junit",
    version,
    about = "Convert stylelint JSON results into a JUnit XML report"
)]
pub struct Cli {
    /// stylelint JSON report to convert ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Omit test suites for files that passed linting
    #[arg(long, overrides_with = "no_hide_passed")]
    pub hide_passed: bool,

    /// Keep passing test suites even if the config file hides them
    #[arg(long, overrides_with = "hide_passed")]
    pub no_hide_passed: bool,

    /// Name test suites after the file name only, without its directory
    #[arg(long, overrides_with = "no_hide_path")]
    pub hide_path: bool,

    /// Keep full paths in suite names even if the config file strips them
    #[arg(long, overrides_with = "hide_path")]
    pub no_hide_path: bool,

    /// Write the report to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Custom config file path (CLI flags take precedence over its values)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when any file failed linting
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolves a boolean option: an explicit flag wins, otherwise the
    /// config file value is kept.
    pub fn toggle(on: bool, off: bool, configured: bool) -> bool {
        if on {
            true
        } else if off {
            false
        } else {
            configured
        }
    }

    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_prefers_explicit_flags() {
        assert!(Cli::toggle(true, false, false));
        assert!(!Cli::toggle(false, true, true));
        assert!(Cli::toggle(false, false, true));
        assert!(!Cli::toggle(false, false, false));
    }

    #[test]
    fn negated_flag_given_last_wins() {
        let cli = Cli::parse_from(["stylelint-junit", "--hide-path", "--no-hide-path"]);
        assert!(!cli.hide_path);
        assert!(cli.no_hide_path);
    }
}
