use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `stock` binary.
#[derive(Debug, Parser)]
#[command(name = "stock", version, about = "Stockroom - inventory browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["stock", "--format", "json", "--verbose", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["stock", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn table_is_the_default_format() {
        let cli = Cli::try_parse_from(["stock", "ui"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Commands::Ui));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["stock", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn list_accepts_search() {
        let cli = Cli::try_parse_from(["stock", "list", "--search", "ham"])
            .expect("cli should parse");
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.search.as_deref(), Some("ham"));
    }

    #[test]
    fn edit_requires_exactly_one_change() {
        assert!(Cli::try_parse_from(["stock", "edit", "1"]).is_err());
        assert!(Cli::try_parse_from(["stock", "edit", "1", "--increment", "--decrement"]).is_err());
        assert!(Cli::try_parse_from(["stock", "edit", "1", "--amount", "-2"]).is_err());

        let cli = Cli::try_parse_from(["stock", "edit", "7", "--amount", "12"])
            .expect("cli should parse");
        let Commands::Edit(args) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(args.id, 7);
        assert_eq!(args.amount, Some(12));
        assert!(!args.increment);
    }

    #[test]
    fn delete_parses_yes_flag() {
        let cli = Cli::try_parse_from(["stock", "delete", "3", "--yes"]).expect("cli should parse");
        let Commands::Delete(args) = cli.command else {
            panic!("expected delete");
        };
        assert_eq!(args.id, 3);
        assert!(args.yes);
    }
}
