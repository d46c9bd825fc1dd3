//! Interactive storefront session.

use anyhow::{bail, Result};
use dialoguer::Input;
use storefront_commerce::dispatch::{Intent, Outcome};
use storefront_commerce::view::project_categories;

use super::{describe_outcome, open_session, ShellArgs};
use crate::context::Context;

const HELP: &str = "\
  category <name|all>      filter the catalog
  sort <asc|desc>          sort the listing by price
  add <id>                 add a product to the cart
  + <id> / - <id>          change a line's quantity
  remove <id>              drop a line
  reload                   fetch the catalog again
  catalog | cart | categories
  help | quit";

/// Words handled by the shell itself rather than the dispatcher.
#[derive(Debug, PartialEq, Eq)]
enum ShellAction {
    Catalog,
    Cart,
    Categories,
    Help,
    Quit,
}

impl ShellAction {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "catalog" | "ls" => Some(Self::Catalog),
            "cart" => Some(Self::Cart),
            "categories" => Some(Self::Categories),
            "help" | "?" => Some(Self::Help),
            "quit" | "exit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the shell command.
pub async fn run(args: ShellArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shell is interactive and does not support --json");
    }

    let mut session = open_session(ctx).await?;
    if !args.no_catalog {
        ctx.output.header("Products");
        ctx.output.catalog_table(&session.project().catalog);
    }
    ctx.output.info("Type `help` for commands.");

    loop {
        let line = match Input::<String>::new()
            .with_prompt("storefront")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(e) => {
                ctx.output.debug(&format!("Input closed: {}", e));
                break;
            }
        };

        if let Some(action) = ShellAction::parse(&line) {
            match action {
                ShellAction::Catalog => {
                    ctx.output.header("Products");
                    ctx.output.catalog_table(&session.project().catalog);
                }
                ShellAction::Cart => ctx.output.cart_summary(&session.project().cart),
                ShellAction::Categories => {
                    let options = project_categories(session.engine().catalog().state());
                    ctx.output.category_list(&options);
                }
                ShellAction::Help => println!("{}", HELP),
                ShellAction::Quit => break,
            }
            continue;
        }

        let Some(intent) = Intent::parse_line(&line) else {
            continue;
        };
        let Some(dispatched) = session.dispatch_intent(&intent).await else {
            ctx.output.warn(&format!("Unknown command '{}'. Type `help`.", intent));
            continue;
        };

        match &dispatched.outcome {
            Outcome::Applied => {}
            Outcome::NoChange => ctx.output.info(&describe_outcome(&dispatched.outcome)),
            Outcome::Rejected(_) | Outcome::ReloadFailed(_) => {
                ctx.output.warn(&describe_outcome(&dispatched.outcome))
            }
        }

        if matches!(intent.action.as_str(), "category" | "filter" | "sort" | "reload") {
            ctx.output.header("Products");
            ctx.output.catalog_table(&dispatched.projection.catalog);
        }
        ctx.output.cart_summary(&dispatched.projection.cart);
    }

    Ok(())
}
