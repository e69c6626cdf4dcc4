use crate::context::AppContext;

/// Handle `stock ui`.
pub async fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    tracing::info!(db = %ctx.db_path.display(), "starting terminal UI");
    crate::tui::run(&ctx.controller, ctx.date_format()).await
}
