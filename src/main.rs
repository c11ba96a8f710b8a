//! Tickdown CLI - a countdown timer with a small desk-utility toolbox
//!
//! The timer runs in a background daemon that owns the single tick source;
//! the CLI sends it commands over a Unix domain socket. The utility
//! subcommands (tip, bmi, convert, password) compute locally.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use tickdown::cli::commands::{BmiArgs, ConvertArgs, PasswordArgs, TipArgs};
use tickdown::cli::{Cli, Commands, Display, IpcClient};
use tickdown::daemon;
use tickdown::widgets;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Set { seconds }) => {
            let client = IpcClient::new()?;
            let response = client.set(seconds).await?;
            Display::show_set_success(&response);
        }
        Some(Commands::Start) => {
            let client = IpcClient::new()?;
            let response = client.start().await?;
            Display::show_start_success(&response);
        }
        Some(Commands::Pause) => {
            let client = IpcClient::new()?;
            let response = client.pause().await?;
            Display::show_pause_success(&response);
        }
        Some(Commands::Reset) => {
            let client = IpcClient::new()?;
            let response = client.reset().await?;
            Display::show_reset_success(&response);
        }
        Some(Commands::Status) => {
            let client = IpcClient::new()?;
            let response = client.status().await?;
            Display::show_status(&response);
        }
        Some(Commands::Daemon) => {
            let socket_path = daemon::default_socket_path()?;
            daemon::run(&socket_path).await?;
        }
        Some(Commands::Tip(args)) => run_tip(&args)?,
        Some(Commands::Bmi(args)) => run_bmi(&args)?,
        Some(Commands::Convert(args)) => run_convert(&args)?,
        Some(Commands::Password(args)) => run_password(&args)?,
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Runs the tip calculator widget.
fn run_tip(args: &TipArgs) -> Result<()> {
    let breakdown = widgets::calculate_tip(args.bill, args.percent)?;
    Display::show_tip(&breakdown);
    Ok(())
}

/// Runs the BMI calculator widget.
fn run_bmi(args: &BmiArgs) -> Result<()> {
    let report = widgets::calculate_bmi(args.height, args.weight)?;
    Display::show_bmi(&report);
    Ok(())
}

/// Runs the unit converter widget.
fn run_convert(args: &ConvertArgs) -> Result<()> {
    let result = widgets::convert(args.value, args.from, args.to)?;
    Display::show_conversion(args.value, args.from.as_str(), args.to.as_str(), result);
    Ok(())
}

/// Runs the password generator widget.
fn run_password(args: &PasswordArgs) -> Result<()> {
    let spec = widgets::PasswordSpec {
        length: args.length as usize,
        numbers: args.numbers,
        symbols: args.symbols,
    };
    let password = widgets::generate_password(&spec)?;
    Display::show_password(&password);
    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["tickdown"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["tickdown", "status"]);
        assert!(matches!(cli.command, Some(Commands::Status)));
    }

    #[test]
    fn test_cli_parse_set() {
        let cli = Cli::parse_from(["tickdown", "set", "120"]);
        assert!(matches!(cli.command, Some(Commands::Set { seconds: 120 })));
    }

    #[test]
    fn test_run_tip() {
        let args = TipArgs {
            bill: 100.0,
            percent: 20.0,
        };
        assert!(run_tip(&args).is_ok());
    }

    #[test]
    fn test_run_tip_invalid() {
        let args = TipArgs {
            bill: -1.0,
            percent: 20.0,
        };
        assert!(run_tip(&args).is_err());
    }

    #[test]
    fn test_run_password() {
        let args = PasswordArgs {
            length: 12,
            numbers: true,
            symbols: false,
        };
        assert!(run_password(&args).is_ok());
    }
}
