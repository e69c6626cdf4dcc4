use stock_core::entities::Item;
use stock_core::errors::CoreError;

use crate::context::AppContext;

/// Look up an item by id across every stored item.
///
/// Reads the store directly; the controller's search and visible list are
/// left alone.
pub async fn find_item(ctx: &AppContext, id: i64) -> anyhow::Result<Option<Item>> {
    Ok(ctx.controller.store().get_item(id).await?)
}

/// Like [`find_item`], but a missing id is an error.
pub async fn require_item(ctx: &AppContext, id: i64) -> anyhow::Result<Item> {
    find_item(ctx, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { id }.into())
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::testing::{hammer, workshop};
    use super::*;

    #[tokio::test]
    async fn finds_item_even_when_search_excludes_it() {
        let ctx = workshop().await;
        ctx.controller.set_search_text("nail").await.unwrap();
        let visible = ctx.controller.visible_items();

        assert_eq!(find_item(&ctx, 1).await.unwrap(), Some(hammer()));
        assert_eq!(ctx.controller.search_text(), "nail");
        assert_eq!(ctx.controller.visible_items(), visible);
    }

    #[tokio::test]
    async fn missing_item_is_not_found() {
        let ctx = workshop().await;
        assert_eq!(find_item(&ctx, 42).await.unwrap(), None);
        let err = require_item(&ctx, 42).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::NotFound { id: 42 })
        ));
    }
}
