//! This module defines the `CardRepository` trait, which provides an
//! interface for interacting with the underlying data store for cards.
//! It abstracts the database operations for persistence and retrieval.
use crate::errors::CardsRepositoryError;
use card_votes_shared::types::{Card, CardId, CardSortField, CardStats, SortOrder};

/// A trait that defines the interface for interacting with the card store.
///
/// Implementors provide CRUD operations on cards plus the consensus
/// write-back (`set_card_value`) and catalog statistics.
#[async_trait::async_trait]
pub trait CardRepository: Send + Sync {
    /// Inserts a new `Card` into the repository.
    ///
    /// # Arguments
    ///
    /// * `card` - The card to be inserted.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success or a `CardsRepositoryError` if the
    /// insertion fails.
    async fn insert_card(&self, card: &Card) -> Result<(), CardsRepositoryError>;

    /// Fetches a card by id.
    ///
    /// # Returns
    ///
    /// `Ok(Some(Card))` if the card exists, `Ok(None)` otherwise.
    async fn get_card(&self, card_id: CardId) -> Result<Option<Card>, CardsRepositoryError>;

    /// Lists all cards ordered by the given field and direction.
    async fn list_cards(
        &self,
        sort_by: CardSortField,
        order: SortOrder,
    ) -> Result<Vec<Card>, CardsRepositoryError>;

    /// Overwrites a card's name and value through the administrative edit
    /// path.
    async fn update_card(
        &self,
        card_id: CardId,
        name: &str,
        value: f64,
    ) -> Result<(), CardsRepositoryError>;

    /// Persists a freshly computed consensus value as the card's display
    /// value.
    async fn set_card_value(&self, card_id: CardId, value: f64)
        -> Result<(), CardsRepositoryError>;

    /// Deletes a card. The card's votes are removed by the store's cascade.
    async fn delete_card(&self, card_id: CardId) -> Result<(), CardsRepositoryError>;

    /// Computes the tier distribution over the whole catalog.
    async fn card_stats(&self) -> Result<CardStats, CardsRepositoryError>;
}
