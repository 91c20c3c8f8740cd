use clap::{Parser, Subcommand, ValueEnum};
use crossterm::style;
use std::io::IsTerminal;
use tracing::warn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{Error, Result};
use crate::filter::NameFilter;
use crate::problems::{listing, PROBLEMS};
use crate::renderer::renderer;
use crate::runner::{self, Mode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose mode
    #[clap(short, long)]
    verbose: bool,
    /// When to color the output
    #[clap(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Color when standard output is a terminal
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the solutions against their worked examples.
    ///
    /// Every problem with a worked example runs at the example's size and
    /// its answer is compared with the known one. Exits with an error if
    /// any comparison fails.
    Check {
        /// Name filter, only problems whose name contains this are run.
        name_filter: Option<String>,
    },
    /// Solve the problems at full size and print the answers.
    Solve {
        /// Name filter, only problems whose name contains this are run.
        name_filter: Option<String>,
    },
    /// List the problems.
    List,
}

pub fn cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    let color = init_color(cli.color);

    let (mode, name_filter) = match cli.command {
        Commands::Check { name_filter } => (Mode::Check, name_filter),
        Commands::Solve { name_filter } => (Mode::Solve, name_filter),
        Commands::List => {
            println!("{}", listing());
            return Ok(());
        }
    };
    let filter = NameFilter::new(name_filter);
    let renderer = renderer(cli.verbose, color);
    let mut out = std::io::stdout();
    let outcomes = runner::run(PROBLEMS, &filter, mode, &mut out, renderer.as_ref())?;
    let failed = outcomes.failed();
    if failed > 0 {
        warn!(failing = ?outcomes.failing_names(), "checks failed");
        return Err(Error::ChecksFailed {
            failed,
            total: outcomes.total(),
        });
    }
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG`; warnings and errors only when
/// it isn't set.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Decide whether output is coloured, and tell crossterm.
fn init_color(choice: ColorChoice) -> bool {
    let enabled = match choice {
        ColorChoice::Auto => std::io::stdout().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };
    style::force_color_output(enabled);
    enabled
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["lazyq-euler", "-v", "check", "025"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(matches!(
            cli.command,
            Commands::Check { name_filter: Some(ref name) } if name == "025"
        ));
    }

    #[test]
    fn test_parse_color() {
        let cli = Cli::try_parse_from(["lazyq-euler", "--color", "never", "solve"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(matches!(cli.command, Commands::Solve { name_filter: None }));
    }
}
