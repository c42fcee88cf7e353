//! Integration tests for the PostgreSQL repository implementations.
//!
//! These tests require a real PostgreSQL database and use SQLx test macros
//! to ensure proper test isolation and cleanup. They are ignored by default;
//! run them with a `DATABASE_URL` pointing at a disposable instance:
//! `cargo test --test postgres_integration -- --ignored`

use card_votes_repository::{
    CardRepository, PostgresCardRepository, PostgresVoteRepository, PostgresVoterRepository,
    VoteRepository, VoterRepository,
};
use card_votes_shared::types::{Card, Vote, Voter, VoterRole, NO_CONSENSUS};
use chrono::Utc;
use sqlx::Row;
use uuid::Uuid;

/// Creates a test card with default values.
fn make_card(name: &str) -> Card {
    let now = Utc::now();
    Card {
        id: Uuid::new_v4(),
        name: name.to_string(),
        value: NO_CONSENSUS,
        created_at: now,
        updated_at: now,
    }
}

/// Creates a test voter with default values.
fn make_voter(role: VoterRole) -> Voter {
    Voter {
        id: Uuid::new_v4(),
        name: Some("test voter".to_string()),
        role,
    }
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn test_insert_and_get_card(pool: sqlx::PgPool) {
    let repository = PostgresCardRepository::new(pool);
    let card = make_card("Black Lotus");

    repository.insert_card(&card).await.unwrap();

    let fetched = repository.get_card(card.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, card.id);
    assert_eq!(fetched.name, "Black Lotus");
    assert_eq!(fetched.value, NO_CONSENSUS);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn test_get_missing_card_returns_none(pool: sqlx::PgPool) {
    let repository = PostgresCardRepository::new(pool);
    assert!(repository.get_card(Uuid::new_v4()).await.unwrap().is_none());
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn test_set_card_value(pool: sqlx::PgPool) {
    let repository = PostgresCardRepository::new(pool);
    let card = make_card("Mox Emerald");
    repository.insert_card(&card).await.unwrap();

    repository.set_card_value(card.id, 0.75).await.unwrap();

    let fetched = repository.get_card(card.id).await.unwrap().unwrap();
    assert_eq!(fetched.value, 0.75);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn test_upsert_vote_keeps_single_row(pool: sqlx::PgPool) {
    let cards = PostgresCardRepository::new(pool.clone());
    let voters = PostgresVoterRepository::new(pool.clone());
    let votes = PostgresVoteRepository::new(pool.clone());

    let card = make_card("Ancestral Recall");
    let voter = make_voter(VoterRole::User);
    cards.insert_card(&card).await.unwrap();
    voters.upsert_voter(&voter).await.unwrap();

    let mut vote = Vote {
        card_id: card.id,
        user_id: voter.id,
        value: 0.5,
        updated_at: Utc::now(),
    };
    votes.upsert_vote(&vote).await.unwrap();

    vote.value = 0.75;
    vote.updated_at = Utc::now();
    votes.upsert_vote(&vote).await.unwrap();

    let rows = sqlx::query("SELECT value FROM votes WHERE card_id = $1")
        .bind(card.id)
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get::<f64, _>("value"), 0.75);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn test_list_card_votes_joins_roles(pool: sqlx::PgPool) {
    let cards = PostgresCardRepository::new(pool.clone());
    let voters = PostgresVoterRepository::new(pool.clone());
    let votes = PostgresVoteRepository::new(pool);

    let card = make_card("Time Walk");
    let admin = make_voter(VoterRole::Admin);
    let member = make_voter(VoterRole::User);
    cards.insert_card(&card).await.unwrap();
    voters.upsert_voter(&admin).await.unwrap();
    voters.upsert_voter(&member).await.unwrap();

    for (voter_id, value) in [(admin.id, 0.5), (member.id, 0.25)] {
        votes
            .upsert_vote(&Vote {
                card_id: card.id,
                user_id: voter_id,
                value,
                updated_at: Utc::now(),
            })
            .await
            .unwrap();
    }

    let cast = votes.list_card_votes(card.id).await.unwrap();
    assert_eq!(cast.len(), 2);
    let admin_vote = cast.iter().find(|v| v.user_id == admin.id).unwrap();
    assert_eq!(admin_vote.role, VoterRole::Admin);
    assert_eq!(admin_vote.value, 0.5);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn test_delete_card_cascades_votes(pool: sqlx::PgPool) {
    let cards = PostgresCardRepository::new(pool.clone());
    let voters = PostgresVoterRepository::new(pool.clone());
    let votes = PostgresVoteRepository::new(pool.clone());

    let card = make_card("Timetwister");
    let voter = make_voter(VoterRole::User);
    cards.insert_card(&card).await.unwrap();
    voters.upsert_voter(&voter).await.unwrap();
    votes
        .upsert_vote(&Vote {
            card_id: card.id,
            user_id: voter.id,
            value: 1.0,
            updated_at: Utc::now(),
        })
        .await
        .unwrap();

    cards.delete_card(card.id).await.unwrap();

    let remaining = sqlx::query("SELECT * FROM votes WHERE card_id = $1")
        .bind(card.id)
        .fetch_all(&pool)
        .await
        .unwrap();
    assert!(remaining.is_empty());
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn test_upsert_voter_is_idempotent(pool: sqlx::PgPool) {
    let voters = PostgresVoterRepository::new(pool);
    let admin = make_voter(VoterRole::Admin);

    voters.upsert_voter(&admin).await.unwrap();

    // A later first-contact upsert with a default role must not downgrade.
    let downgraded = Voter {
        role: VoterRole::User,
        ..admin.clone()
    };
    voters.upsert_voter(&downgraded).await.unwrap();

    let fetched = voters.get_voter(admin.id).await.unwrap().unwrap();
    assert_eq!(fetched.role, VoterRole::Admin);
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn test_card_stats_counts_tiers(pool: sqlx::PgPool) {
    let cards = PostgresCardRepository::new(pool);

    for (name, value) in [
        ("a", NO_CONSENSUS),
        ("b", 0.25),
        ("c", 0.5),
        ("d", 0.5),
        ("e", 1.0),
    ] {
        let mut card = make_card(name);
        card.value = value;
        cards.insert_card(&card).await.unwrap();
    }

    let stats = cards.card_stats().await.unwrap();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.unvalued, 1);
    assert_eq!(stats.low, 1);
    assert_eq!(stats.mid, 2);
    assert_eq!(stats.high, 0);
    assert_eq!(stats.one_mm_plus, 1);
}
