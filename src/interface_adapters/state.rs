use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{CardRegistry, RegistryError};

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any registry implementation (dependency injection).
    pub registry: Arc<dyn CardRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<dyn CardRegistry>) -> Self {
        Self { registry }
    }

    // State backed by an in-memory registry seeded with `cards`.
    pub fn with_cards<I, S>(cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Arc::new(InMemoryCardRegistry::with_cards(cards)))
    }
}

// In-memory card registry adapter for the validate endpoint.
#[derive(Clone, Default)]
pub struct InMemoryCardRegistry {
    cards: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryCardRegistry {
    pub fn with_cards<I, S>(cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cards: Arc::new(RwLock::new(cards.into_iter().map(Into::into).collect())),
        }
    }

    pub async fn register(&self, card: impl Into<String>) -> bool {
        let mut cards = self.cards.write().await;
        cards.insert(card.into())
    }
}

#[async_trait]
impl CardRegistry for InMemoryCardRegistry {
    async fn is_registered(&self, card: &str) -> Result<bool, RegistryError> {
        let cards = self.cards.read().await;
        Ok(cards.contains(card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn when_card_is_registered_then_registry_reports_it() {
        let registry = InMemoryCardRegistry::with_cards(["4111111111111111"]);

        assert!(registry.is_registered("4111111111111111").await.expect("lookup"));
        assert!(!registry.is_registered("5500000000000004").await.expect("lookup"));

        assert!(registry.register("5500000000000004").await);
        assert!(registry.is_registered("5500000000000004").await.expect("lookup"));
    }

    #[tokio::test]
    async fn when_state_is_seeded_then_its_registry_sees_the_cards() {
        let state = AppState::with_cards(["4111111111111111"]);

        assert!(state.registry.is_registered("4111111111111111").await.expect("lookup"));
    }
}
