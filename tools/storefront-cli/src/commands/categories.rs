//! List the category selector options.

use anyhow::Result;
use storefront_commerce::view::project_categories;

use super::open_session;
use crate::context::Context;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let session = open_session(ctx).await?;
    let options = project_categories(session.engine().catalog().state());

    ctx.output.header("Categories");
    ctx.output.category_list(&options);
    Ok(())
}
