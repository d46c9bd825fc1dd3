//! Print the catalog, optionally filtered and sorted.

use anyhow::Result;
use storefront_commerce::catalog::PriceOrder;
use storefront_commerce::dispatch::Command;

use super::{open_session, CatalogArgs};
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let mut session = open_session(ctx).await?;

    if let Some(category) = args.category {
        session.dispatch(Command::SelectCategory(category)).await;
    }
    if let Some(sort) = args.sort {
        if PriceOrder::parse(&sort).is_none() {
            ctx.output
                .warn(&format!("Unknown sort order '{}', expected asc or desc", sort));
        }
        session.dispatch(Command::SelectSort(sort)).await;
    }

    let state = session.engine().catalog().state();
    if !ctx.output.is_json() {
        let mut heading = format!("Products ({})", state.filter().as_str());
        if let Some(order) = state.sort() {
            heading.push_str(&format!(", {}", order.display_name()));
        }
        ctx.output.header(&heading);
    }
    ctx.output.catalog_table(&session.project().catalog);

    Ok(())
}
