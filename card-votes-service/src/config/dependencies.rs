use crate::errors::ServiceError;
use crate::service::VotingService;
use card_votes_repository::{
    PostgresCardRepository, PostgresVoteRepository, PostgresVoterRepository,
};
use dotenv::dotenv;
use std::sync::Arc;

/// `Dependencies` holds the fully wired components of the voting service.
///
/// It owns the connection pool and the `VotingService` built over the
/// PostgreSQL repositories.
pub struct Dependencies {
    pub pool: sqlx::PgPool,
    pub service: VotingService,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance.
    ///
    /// This asynchronous function reads the environment (via dotenv) and
    /// wires up the repositories and the voting service.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `ServiceError` if the database connection fails.
    pub async fn new() -> Result<Self, ServiceError> {
        dotenv().ok();
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let pool = sqlx::PgPool::connect(&database_url).await?;

        let service = VotingService::new(
            Arc::new(PostgresCardRepository::new(pool.clone())),
            Arc::new(PostgresVoteRepository::new(pool.clone())),
            Arc::new(PostgresVoterRepository::new(pool.clone())),
        );

        Ok(Dependencies { pool, service })
    }
}
