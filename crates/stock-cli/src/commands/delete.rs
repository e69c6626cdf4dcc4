use std::io::{BufRead, Write};

use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::commands::shared::find_item;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub id: i64,
    pub name: Option<String>,
    pub deleted: bool,
}

/// Handle `stock delete`.
pub async fn handle(
    args: &DeleteArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut input = std::io::BufReader::new(std::io::stdin());
    let mut prompt = std::io::stderr();
    let outcome = run(args, ctx, &mut input, &mut prompt).await?;
    output(&outcome, flags.format)
}

async fn run(
    args: &DeleteArgs,
    ctx: &AppContext,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> anyhow::Result<DeleteOutcome> {
    let Some(item) = find_item(ctx, args.id).await? else {
        tracing::warn!(id = args.id, "no item with this id; nothing deleted");
        return Ok(DeleteOutcome {
            id: args.id,
            name: None,
            deleted: false,
        });
    };

    let confirmed = args.yes
        || confirm(&format!("Delete '{}'?", item.name), input, prompt)
            .context("failed to read confirmation")?;
    if confirmed {
        ctx.controller.request_delete(&item).await?;
    }

    Ok(DeleteOutcome {
        id: item.id,
        name: Some(item.name),
        deleted: confirmed,
    })
}

/// Ask a yes/no question. Anything but `y`/`yes` is a no.
fn confirm(
    question: &str,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> std::io::Result<bool> {
    write!(prompt, "{question} [y/N] ")?;
    prompt.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
