mod cli;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use stylelint_junit::config::FormatterConfig;
use stylelint_junit::lint_result::{self, LintFileResult};
use stylelint_junit::output::JunitFormatter;
use stylelint_junit::Error;

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    let mut config = FormatterConfig::load(cli.config.as_deref()).unwrap_or_else(|e| fail(&e));
    config.hide_passed = Cli::toggle(cli.hide_passed, cli.no_hide_passed, config.hide_passed);
    config.hide_path = Cli::toggle(cli.hide_path, cli.no_hide_path, config.hide_path);
    if let Some(path) = &cli.output {
        config.output = Some(path.clone());
    }

    let results = read_results(cli.input.as_deref()).unwrap_or_else(|e| fail(&e));
    let formatter = JunitFormatter::new(config);
    let xml = formatter.format(&results).unwrap_or_else(|e| fail(&e));

    match &formatter.config().output {
        Some(path) => eprintln!("Output written to {}", path.display()),
        None => println!("{xml}"),
    }

    let any_errored = results.iter().any(|r| r.errored);
    std::process::exit(if cli.strict && any_errored { 1 } else { 0 });
}

/// Reads and decodes the lint report from `path`, or stdin when `path` is
/// absent or `-`.
fn read_results(path: Option<&Path>) -> Result<Vec<LintFileResult>, Error> {
    let content = match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).map_err(|source| Error::Read {
                path: p.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            buf
        }
    };

    lint_result::parse_results(&content)
}

fn fail(err: &Error) -> ! {
    eprintln!("{} {err}", "Error:".red().bold());
    std::process::exit(2);
}
