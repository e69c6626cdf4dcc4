use clap::ValueEnum;

/// How item listings and command results are printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns sized to the terminal.
    Table,
    /// Compact single-line JSON, for piping.
    Raw,
}

/// Flags accepted by every `stock` subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

impl GlobalFlags {
    /// Log filter used when `STOCK_LOG` is unset. `--quiet` wins over `--verbose`.
    #[must_use]
    pub const fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
