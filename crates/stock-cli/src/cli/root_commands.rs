use clap::{ArgGroup, Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List items, optionally filtered by name.
    List(ListArgs),
    /// Change the amount of an item.
    Edit(EditArgs),
    /// Delete an item.
    Delete(DeleteArgs),
    /// Open the interactive terminal UI.
    Ui,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of the item name.
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
#[command(group(
    ArgGroup::new("change")
        .required(true)
        .args(["amount", "increment", "decrement"])
))]
pub struct EditArgs {
    /// Item ID.
    pub id: i64,
    /// Set the amount to this value.
    #[arg(long)]
    pub amount: Option<u32>,
    /// Raise the amount by one.
    #[arg(long)]
    pub increment: bool,
    /// Lower the amount by one, never below zero.
    #[arg(long)]
    pub decrement: bool,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteArgs {
    /// Item ID.
    pub id: i64,
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}
