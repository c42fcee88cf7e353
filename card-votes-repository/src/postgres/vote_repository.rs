//! PostgreSQL implementation of the vote repository.
//!
//! Provides a PostgreSQL backend for the `VoteRepository` trait with upsert
//! support through `ON CONFLICT DO UPDATE` on the `(card_id, user_id)`
//! composite key.
//!
//! ## Database Tables
//!
//! - `votes`: Individual voting records, one row per `(card, user)` pair
use crate::postgres::role_from_i16;
use crate::{VoteRepository, VotesRepositoryError};
use async_trait::async_trait;
use card_votes_shared::types::{CardId, CastVote, UserId, UserVoteView, Vote};
use chrono::{DateTime, Utc};
use sqlx::Row;

/// PostgreSQL implementation of the vote repository.
///
/// The `(card_id, user_id)` primary key enforces the one-vote-per-user
/// invariant at the storage level regardless of caller behavior.
pub struct PostgresVoteRepository {
    pool: sqlx::PgPool,
}

impl PostgresVoteRepository {
    /// Creates a new PostgreSQL vote repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with required schema
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PostgresVoteRepository {
    async fn get_vote(
        &self,
        card_id: CardId,
        user_id: UserId,
    ) -> Result<Option<Vote>, VotesRepositoryError> {
        let row = sqlx::query(
            "SELECT card_id, user_id, value, updated_at FROM votes WHERE card_id = $1 AND user_id = $2",
        )
        .bind(card_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Vote {
            card_id: row.get("card_id"),
            user_id: row.get("user_id"),
            value: row.get("value"),
            updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
        }))
    }

    async fn upsert_vote(&self, vote: &Vote) -> Result<(), VotesRepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO votes (card_id, user_id, value, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (card_id, user_id)
            DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(vote.card_id)
        .bind(vote.user_id)
        .bind(vote.value)
        .bind(vote.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_vote(
        &self,
        card_id: CardId,
        user_id: UserId,
    ) -> Result<(), VotesRepositoryError> {
        sqlx::query("DELETE FROM votes WHERE card_id = $1 AND user_id = $2")
            .bind(card_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_card_votes(
        &self,
        card_id: CardId,
    ) -> Result<Vec<CastVote>, VotesRepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT v.user_id, v.value, v.updated_at, u.role
            FROM votes v
            JOIN voters u ON u.id = v.user_id
            WHERE v.card_id = $1
            ORDER BY v.updated_at DESC
            "#,
        )
        .bind(card_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let raw_role: i16 = row.get("role");
                let role =
                    role_from_i16(raw_role).ok_or(VotesRepositoryError::InvalidRole(raw_role))?;
                Ok(CastVote {
                    user_id: row.get("user_id"),
                    role,
                    value: row.get("value"),
                    updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
                })
            })
            .collect()
    }

    async fn list_user_votes(
        &self,
        user_id: UserId,
        limit: i64,
    ) -> Result<Vec<UserVoteView>, VotesRepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT v.card_id, c.name AS card_name, v.value, v.updated_at
            FROM votes v
            JOIN cards c ON c.id = v.card_id
            WHERE v.user_id = $1
            ORDER BY v.updated_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| UserVoteView {
                card_id: row.get("card_id"),
                card_name: row.get("card_name"),
                value: row.get("value"),
                updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
            })
            .collect())
    }
}
