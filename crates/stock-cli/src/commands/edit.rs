use stock_core::entities::Item;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EditArgs;
use crate::commands::shared::require_item;
use crate::context::AppContext;
use crate::output::{ItemRow, output};

/// Handle `stock edit`.
pub async fn handle(
    args: &EditArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let item = run(args, ctx).await?;
    output(&ItemRow::new(&item, ctx.date_format()), flags.format)
}

async fn run(args: &EditArgs, ctx: &AppContext) -> anyhow::Result<Item> {
    let current = require_item(ctx, args.id).await?;
    let updated = apply_change(&current, args);
    if updated == current {
        tracing::debug!(id = current.id, "amount unchanged; skipping write");
        return Ok(current);
    }
    ctx.controller.request_update(&updated).await?;
    Ok(updated)
}

fn apply_change(item: &Item, args: &EditArgs) -> Item {
    if let Some(amount) = args.amount {
        item.with_amount(amount)
    } else if args.increment {
        item.incremented()
    } else {
        item.decremented()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use stock_core::errors::CoreError;

    use super::*;
    use crate::commands::shared::find_item;
    use crate::commands::shared::testing::{hammer, workshop};

    fn args(id: i64, amount: Option<u32>, increment: bool, decrement: bool) -> EditArgs {
        EditArgs {
            id,
            amount,
            increment,
            decrement,
        }
    }

    #[tokio::test]
    async fn sets_amount_and_keeps_other_fields() {
        let ctx = workshop().await;
        let updated = run(&args(1, Some(5), false, false), &ctx).await.unwrap();
        assert_eq!(updated, hammer().with_amount(5));
        assert_eq!(find_item(&ctx, 1).await.unwrap(), Some(hammer().with_amount(5)));
    }

    #[tokio::test]
    async fn increment_and_decrement_step_by_one() {
        let ctx = workshop().await;
        assert_eq!(run(&args(1, None, true, false), &ctx).await.unwrap().amount, 4);
        assert_eq!(run(&args(1, None, false, true), &ctx).await.unwrap().amount, 3);
    }

    #[tokio::test]
    async fn decrement_floors_at_zero() {
        let ctx = workshop().await;
        run(&args(1, Some(0), false, false), &ctx).await.unwrap();
        let updated = run(&args(1, None, false, true), &ctx).await.unwrap();
        assert_eq!(updated.amount, 0);
    }

    #[tokio::test]
    async fn unknown_id_is_an_error() {
        let ctx = workshop().await;
        let err = run(&args(99, Some(1), false, false), &ctx).await.unwrap_err();
        assert!(err.downcast_ref::<CoreError>().is_some());
    }
}
