use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::context::AppContext;
use crate::output::{ItemRow, output_items};

/// Handle `stock list`.
pub async fn handle(
    args: &ListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let rows = run(args.search.as_deref(), ctx).await?;
    output_items(&rows, flags.format)
}

async fn run(search: Option<&str>, ctx: &AppContext) -> anyhow::Result<Vec<ItemRow>> {
    ctx.controller
        .set_search_text(search.unwrap_or_default())
        .await?;
    Ok(ctx
        .controller
        .visible_items()
        .iter()
        .map(|item| ItemRow::new(item, ctx.date_format()))
        .collect())
}
