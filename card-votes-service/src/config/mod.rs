//! Configuration module for the card votes service.
//! Defines and manages application-wide settings and dependencies.
mod dependencies;

pub use dependencies::Dependencies;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` for the service crates when the
/// variable is unset.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "card_votes_service=info,card_votes_repository=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
