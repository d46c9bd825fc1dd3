//! Replay a script of intents against a fresh session.

use anyhow::{Context as _, Result};
use serde::Serialize;
use storefront_commerce::dispatch::{Dispatched, Intent, Outcome};
use storefront_commerce::view::Projection;
use tokio::io::AsyncReadExt;

use super::{describe_outcome, open_session, RunArgs};
use crate::context::Context;

/// A script line that produced a command.
#[derive(Debug, Serialize)]
struct Step {
    line: usize,
    intent: Intent,
    #[serde(flatten)]
    dispatched: Dispatched,
}

#[derive(Debug, Serialize)]
struct RunReport {
    /// Only filled with --trace-steps.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    steps: Vec<Step>,
    ignored: Vec<usize>,
    projection: Projection,
}

/// Run the run command.
pub async fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let script = match &args.script {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read script: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read script from stdin")?;
            buf
        }
    };

    let intents = parse_script(&script);
    tracing::debug!(intents = intents.len(), "script parsed");
    let mut session = open_session(ctx).await?;
    let mut steps = Vec::new();
    let mut ignored = Vec::new();

    for (line, intent) in intents {
        let Some(dispatched) = session.dispatch_intent(&intent).await else {
            ctx.output.warn(&format!("line {}: ignored '{}'", line, intent));
            ignored.push(line);
            continue;
        };

        if args.trace_steps {
            if !ctx.output.is_json() {
                println!(
                    "{:>4}  {:<28} {}",
                    line,
                    dispatched.command.to_string(),
                    describe_outcome(&dispatched.outcome)
                );
                println!("      {}", dispatched.projection.cart.total_label);
            }
            steps.push(Step {
                line,
                intent,
                dispatched,
            });
        } else if let Outcome::Rejected(e) = &dispatched.outcome {
            ctx.output.warn(&format!("line {}: {}", line, e));
        }
    }

    let projection = session.project();
    if ctx.output.is_json() {
        ctx.output.json(&RunReport {
            steps,
            ignored,
            projection,
        });
        return Ok(());
    }

    ctx.output.header("Products");
    ctx.output.catalog_table(&projection.catalog);
    ctx.output.cart_summary(&projection.cart);
    Ok(())
}

/// Parse a script into intents, keeping 1-based line numbers.
fn parse_script(script: &str) -> Vec<(usize, Intent)> {
    script
        .lines()
        .enumerate()
        .filter_map(|(i, line)| Intent::parse_line(line).map(|intent| (i + 1, intent)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = "# warm up\n\ncategory men's clothing\nsort desc\n  add 1  \nADD 2\n";
        let intents = parse_script(script);

        let lines: Vec<usize> = intents.iter().map(|(line, _)| *line).collect();
        assert_eq!(lines, vec![3, 4, 5, 6]);
        assert_eq!(
            intents[0].1,
            Intent::new("category", Some("men's clothing".to_string()))
        );
        assert_eq!(intents[2].1, Intent::new("add", Some("1".to_string())));
        assert_eq!(intents[3].1.action, "add");
    }

    #[test]
    fn test_parse_empty_script() {
        assert!(parse_script("# nothing here\n\n").is_empty());
    }
}
