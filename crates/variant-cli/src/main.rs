//! # variant CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use variant_cli::edit::{run_edit, EditArgs};
use variant_cli::show::{run_show, ShowArgs};

/// Culture variant toolkit.
///
/// Inspects variants documents and applies name edits with the same
/// change detection a content item uses.
#[derive(Parser, Debug)]
#[command(name = "variant", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the variants of a document.
    Show(ShowArgs),

    /// Add or update variant names and report what changed.
    Edit(EditArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Show(args) => run_show(&args),
        Commands::Edit(args) => run_edit(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_show() {
        let cli = Cli::try_parse_from(["variant", "show", "v.yaml"]).unwrap();
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.file.to_str(), Some("v.yaml"));
        assert!(args.format.is_none());
    }

    #[test]
    fn cli_parse_edit_with_multiple_sets() {
        let cli = Cli::try_parse_from([
            "variant", "-vv", "edit", "v.json", "--set", "en-US=Home", "--set", "da-DK=Forside",
            "--write",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Edit(args) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(args.assignments.len(), 2);
        assert_eq!(args.assignments[1], ("da-DK".to_string(), "Forside".to_string()));
        assert!(args.write);
    }

    #[test]
    fn cli_edit_requires_set() {
        assert!(Cli::try_parse_from(["variant", "edit", "v.json"]).is_err());
    }

    #[test]
    fn cli_edit_rejects_malformed_set() {
        assert!(Cli::try_parse_from(["variant", "edit", "v.json", "--set", "en-US"]).is_err());
    }

    #[test]
    fn cli_parse_format_flag() {
        let cli =
            Cli::try_parse_from(["variant", "show", "variants", "--format", "yaml"]).unwrap();
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.format, Some(variant_cli::document::DocumentFormat::Yaml));
    }
}
