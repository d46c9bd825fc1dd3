//! Command dispatcher: one command in, one mutation, one projection out.

use serde::Serialize;

use crate::cart::QuantityChange;
use crate::catalog::PriceOrder;
use crate::dispatch::{Command, Intent};
use crate::engine::Storefront;
use crate::error::CommerceError;
use crate::source::{CatalogSource, SourceError};
use crate::view::Projection;

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// State changed.
    Applied,
    /// Valid command that found nothing to change.
    NoChange,
    /// The engine refused the command; state is unchanged.
    Rejected(CommerceError),
    /// The source failed; the previous catalog is kept.
    ReloadFailed(SourceError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Result of dispatching one command.
#[derive(Debug, Clone, Serialize)]
pub struct Dispatched {
    pub command: Command,
    pub outcome: Outcome,
    /// Views after the command ran.
    pub projection: Projection,
}

/// Routes commands to the engine strictly in the order they arrive.
///
/// Every command runs to completion before the next is looked at; only
/// [`Command::Reload`] awaits, and it mutates nothing until the fetch
/// has finished.
pub struct CommandDispatcher<S: CatalogSource> {
    engine: Storefront,
    source: S,
}

impl<S: CatalogSource> CommandDispatcher<S> {
    /// Create a dispatcher over an empty engine. Nothing is fetched until
    /// the first [`Command::Reload`].
    pub fn new(source: S) -> Self {
        Self {
            engine: Storefront::new(),
            source,
        }
    }

    /// Create a dispatcher over an existing engine.
    pub fn with_engine(engine: Storefront, source: S) -> Self {
        Self { engine, source }
    }

    pub fn engine(&self) -> &Storefront {
        &self.engine
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the dispatcher, keeping the engine.
    pub fn into_engine(self) -> Storefront {
        self.engine
    }

    /// Current views without running a command.
    pub fn project(&self) -> Projection {
        self.engine.project()
    }

    /// Run one command and re-project.
    pub async fn dispatch(&mut self, command: Command) -> Dispatched {
        tracing::debug!(command = %command, "dispatching");

        let outcome = match &command {
            Command::SelectCategory(category) => {
                let visible = self.engine.filter_by_category(category).len();
                tracing::debug!(category = %category, visible, "category selected");
                Outcome::Applied
            }
            Command::SelectSort(order) => {
                let was_sorted = self.engine.catalog().state().sort().is_some();
                self.engine.sort_by_price(order);
                if PriceOrder::parse(order).is_some() {
                    Outcome::Applied
                } else {
                    tracing::debug!(order = %order, "unrecognized sort order");
                    // An unknown order still drops an active sort.
                    if was_sorted {
                        Outcome::Applied
                    } else {
                        Outcome::NoChange
                    }
                }
            }
            Command::AddToCart(id) => match self.engine.add_item(*id) {
                Ok(_) => Outcome::Applied,
                Err(e) => Outcome::Rejected(e),
            },
            Command::IncreaseQuantity(id) => match self.engine.increase_quantity(*id) {
                Ok(QuantityChange::Absent) => Outcome::NoChange,
                Ok(_) => Outcome::Applied,
                Err(e) => Outcome::Rejected(e),
            },
            Command::DecreaseQuantity(id) => match self.engine.decrease_quantity(*id) {
                QuantityChange::Absent => Outcome::NoChange,
                _ => Outcome::Applied,
            },
            Command::RemoveFromCart(id) => {
                if self.engine.remove_item(*id) {
                    Outcome::Applied
                } else {
                    Outcome::NoChange
                }
            }
            Command::Reload => self.reload().await,
        };

        if let Outcome::Rejected(e) = &outcome {
            tracing::info!(command = %command, error = %e, "command rejected");
        }

        let projection = self.engine.project();
        for id in &projection.cart.orphaned {
            tracing::warn!(product_id = %id, "cart line does not resolve against the catalog");
        }

        Dispatched {
            command,
            outcome,
            projection,
        }
    }

    /// Parse and run a raw intent. Unknown intents are logged and ignored.
    pub async fn dispatch_intent(&mut self, intent: &Intent) -> Option<Dispatched> {
        match Command::from_intent(intent) {
            Some(command) => Some(self.dispatch(command).await),
            None => {
                tracing::warn!(intent = %intent, "ignoring unknown intent");
                None
            }
        }
    }

    /// Run commands one after another, in order.
    pub async fn dispatch_all(
        &mut self,
        commands: impl IntoIterator<Item = Command>,
    ) -> Vec<Dispatched> {
        let mut results = Vec::new();
        for command in commands {
            results.push(self.dispatch(command).await);
        }
        results
    }

    async fn reload(&mut self) -> Outcome {
        match self.source.fetch_products().await {
            Ok(products) => {
                self.engine.load(products);
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(source = %self.source.describe(), error = %e, "catalog reload failed, keeping previous catalog");
                Outcome::ReloadFailed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::ids::ProductId;
    use crate::money::Money;
    use crate::source::StaticCatalogSource;

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Shirt", "men's clothing", Money::new(1000)).unwrap(),
            Product::new(2, "Ring", "jewelery", Money::new(2000)).unwrap(),
            Product::new(3, "SSD", "electronics", Money::new(500)).unwrap(),
        ]
    }

    async fn loaded() -> CommandDispatcher<StaticCatalogSource> {
        let mut dispatcher = CommandDispatcher::new(StaticCatalogSource::new(products()));
        let first = dispatcher.dispatch(Command::Reload).await;
        assert!(first.outcome.is_applied());
        dispatcher
    }

    #[tokio::test]
    async fn test_commands_before_load_see_empty_catalog() {
        let mut dispatcher = CommandDispatcher::new(StaticCatalogSource::new(products()));
        let result = dispatcher.dispatch(Command::AddToCart(ProductId::new(1))).await;
        assert_eq!(
            result.outcome,
            Outcome::Rejected(CommerceError::ProductNotFound(ProductId::new(1)))
        );
        assert!(result.projection.catalog.is_empty());
    }

    #[tokio::test]
    async fn test_reload_populates_catalog() {
        let dispatcher = loaded().await;
        assert_eq!(dispatcher.project().catalog.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_state() {
        let mut dispatcher = loaded().await;
        dispatcher.dispatch(Command::AddToCart(ProductId::new(2))).await;

        let mut dispatcher =
            CommandDispatcher::with_engine(dispatcher.into_engine(), StaticCatalogSource::failing("down"));
        let result = dispatcher.dispatch(Command::Reload).await;

        assert!(matches!(result.outcome, Outcome::ReloadFailed(_)));
        assert_eq!(result.projection.catalog.len(), 3);
        assert_eq!(result.projection.cart.total, Money::new(2000));
    }

    #[tokio::test]
    async fn test_outcomes() {
        let mut dispatcher = loaded().await;
        let id = ProductId::new(1);

        let r = dispatcher.dispatch(Command::IncreaseQuantity(id)).await;
        assert_eq!(r.outcome, Outcome::NoChange);
        assert!(r.projection.cart.is_empty());

        let r = dispatcher.dispatch(Command::AddToCart(id)).await;
        assert_eq!(r.outcome, Outcome::Applied);

        let r = dispatcher.dispatch(Command::DecreaseQuantity(id)).await;
        assert_eq!(r.outcome, Outcome::Applied);
        assert!(r.projection.cart.is_empty());

        let r = dispatcher.dispatch(Command::RemoveFromCart(id)).await;
        assert_eq!(r.outcome, Outcome::NoChange);

        let r = dispatcher.dispatch(Command::SelectSort("newest".to_string())).await;
        assert_eq!(r.outcome, Outcome::NoChange);
    }

    #[tokio::test]
    async fn test_commands_run_in_order() {
        let mut dispatcher = loaded().await;
        let results = dispatcher
            .dispatch_all(vec![
                Command::AddToCart(ProductId::new(1)),
                Command::AddToCart(ProductId::new(2)),
                Command::IncreaseQuantity(ProductId::new(1)),
                Command::SelectCategory("jewelery".to_string()),
                Command::SelectSort("asc".to_string()),
            ])
            .await;

        assert_eq!(results.len(), 5);
        assert_eq!(results[1].projection.cart.lines.len(), 2);
        assert_eq!(results[2].projection.cart.total, Money::new(4000));

        let last = &results[4].projection;
        let ids: Vec<u64> = last.catalog.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(last.cart.total_label, "Total: $40.00");
    }

    #[tokio::test]
    async fn test_unknown_sort_after_sort_reverts_listing() {
        let mut dispatcher = loaded().await;
        let sorted = dispatcher.dispatch(Command::SelectSort("asc".to_string())).await;
        let ids: Vec<u64> = sorted.projection.catalog.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        let reverted = dispatcher.dispatch(Command::SelectSort("newest".to_string())).await;
        let ids: Vec<u64> = reverted.projection.catalog.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(reverted.outcome, Outcome::Applied);
        assert_eq!(dispatcher.engine().catalog().state().sort(), None);

        let again = dispatcher.dispatch(Command::SelectSort("newest".to_string())).await;
        assert_eq!(again.outcome, Outcome::NoChange);
    }

    #[tokio::test]
    async fn test_sort_then_filter() {
        let mut dispatcher = loaded().await;
        let sorted = dispatcher.dispatch(Command::SelectSort("asc".to_string())).await;
        let ids: Vec<u64> = sorted.projection.catalog.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        let all = dispatcher.dispatch(Command::SelectCategory("all".to_string())).await;
        let ids: Vec<u64> = all.projection.catalog.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_unknown_intent_is_ignored() {
        let mut dispatcher = loaded().await;
        let intent = Intent::new("checkout", None);
        assert!(dispatcher.dispatch_intent(&intent).await.is_none());

        let intent = Intent::parse_line("add 3").unwrap();
        let result = dispatcher.dispatch_intent(&intent).await.unwrap();
        assert_eq!(result.projection.cart.total, Money::new(500));
    }
}
