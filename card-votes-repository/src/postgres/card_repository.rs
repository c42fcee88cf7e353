//! PostgreSQL implementation of the card repository.
//!
//! Provides a PostgreSQL backend for the `CardRepository` trait with
//! connection pooling and type-safe runtime-bound queries.
//!
//! ## Database Tables
//!
//! - `cards`: Card catalog with the persisted consensus display value
use crate::{CardRepository, CardsRepositoryError};
use async_trait::async_trait;
use card_votes_shared::types::{Card, CardId, CardSortField, CardStats, SortOrder};
use chrono::{DateTime, Utc};
use sqlx::Row;

/// PostgreSQL implementation of the card repository.
///
/// Owns a `sqlx::PgPool`; every operation is a single statement, so
/// statement-level atomicity is sufficient.
pub struct PostgresCardRepository {
    pool: sqlx::PgPool,
}

impl PostgresCardRepository {
    /// Creates a new PostgreSQL card repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with required schema
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    fn card_from_row(row: &sqlx::postgres::PgRow) -> Card {
        Card {
            id: row.get("id"),
            name: row.get("name"),
            value: row.get("value"),
            created_at: row.get::<DateTime<Utc>, _>("created_at"),
            updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
        }
    }
}

#[async_trait]
impl CardRepository for PostgresCardRepository {
    async fn insert_card(&self, card: &Card) -> Result<(), CardsRepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO cards (id, name, value, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(card.id)
        .bind(&card.name)
        .bind(card.value)
        .bind(card.created_at)
        .bind(card.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_card(&self, card_id: CardId) -> Result<Option<Card>, CardsRepositoryError> {
        let row = sqlx::query("SELECT id, name, value, created_at, updated_at FROM cards WHERE id = $1")
            .bind(card_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(Self::card_from_row))
    }

    async fn list_cards(
        &self,
        sort_by: CardSortField,
        order: SortOrder,
    ) -> Result<Vec<Card>, CardsRepositoryError> {
        // Identifiers cannot be bound, so the ORDER BY clause is assembled
        // from the validated enums only.
        let field = match sort_by {
            CardSortField::Name => "name",
            CardSortField::Value => "value",
            CardSortField::UpdatedAt => "updated_at",
        };
        let direction = match order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };

        let mut query_builder = sqlx::QueryBuilder::new(
            "SELECT id, name, value, created_at, updated_at FROM cards ORDER BY ",
        );
        query_builder.push(field).push(" ").push(direction);

        let rows = query_builder.build().fetch_all(&self.pool).await?;
        Ok(rows.iter().map(Self::card_from_row).collect())
    }

    async fn update_card(
        &self,
        card_id: CardId,
        name: &str,
        value: f64,
    ) -> Result<(), CardsRepositoryError> {
        sqlx::query("UPDATE cards SET name = $2, value = $3, updated_at = now() WHERE id = $1")
            .bind(card_id)
            .bind(name)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn set_card_value(
        &self,
        card_id: CardId,
        value: f64,
    ) -> Result<(), CardsRepositoryError> {
        sqlx::query("UPDATE cards SET value = $2, updated_at = now() WHERE id = $1")
            .bind(card_id)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_card(&self, card_id: CardId) -> Result<(), CardsRepositoryError> {
        sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(card_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn card_stats(&self) -> Result<CardStats, CardsRepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE value = -1) AS unvalued,
                COUNT(*) FILTER (WHERE value = 0.25) AS low,
                COUNT(*) FILTER (WHERE value = 0.5) AS mid,
                COUNT(*) FILTER (WHERE value = 0.75) AS high,
                COUNT(*) FILTER (WHERE value = 1.0) AS one_mm_plus
            FROM cards
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(CardStats {
            total: row.get("total"),
            unvalued: row.get("unvalued"),
            low: row.get("low"),
            mid: row.get("mid"),
            high: row.get("high"),
            one_mm_plus: row.get("one_mm_plus"),
        })
    }
}
