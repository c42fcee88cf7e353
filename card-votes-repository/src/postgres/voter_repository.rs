//! PostgreSQL implementation of the voter repository.
//!
//! Stores the local projection of external identities in a `voters` table;
//! first-contact creation uses `ON CONFLICT DO NOTHING` so repeated upserts
//! never rewrite an existing record.
use crate::postgres::{role_from_i16, role_to_i16};
use crate::{VoterRepository, VotersRepositoryError};
use async_trait::async_trait;
use card_votes_shared::types::{UserId, Voter};
use sqlx::Row;

/// PostgreSQL implementation of the voter repository.
pub struct PostgresVoterRepository {
    pool: sqlx::PgPool,
}

impl PostgresVoterRepository {
    /// Creates a new PostgreSQL voter repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with required schema
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoterRepository for PostgresVoterRepository {
    async fn upsert_voter(&self, voter: &Voter) -> Result<(), VotersRepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO voters (id, name, role)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(voter.id)
        .bind(&voter.name)
        .bind(role_to_i16(voter.role))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_voter(&self, user_id: UserId) -> Result<Option<Voter>, VotersRepositoryError> {
        let row = sqlx::query("SELECT id, name, role FROM voters WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| {
            let raw_role: i16 = row.get("role");
            let role =
                role_from_i16(raw_role).ok_or(VotersRepositoryError::InvalidRole(raw_role))?;
            Ok(Voter {
                id: row.get("id"),
                name: row.get("name"),
                role,
            })
        })
        .transpose()
    }
}
