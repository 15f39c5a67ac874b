//! The reference scenario: three users, two posts, likes and one moderator removal.

use std::sync::Arc;

use agora_core::domain::{ModerationRecord, NewUser, PostHandle, UserId};
use agora_core::ports::{AuditSink, Clock};
use agora_core::{DomainError, Network};

/// A populated network plus the ids the report needs.
pub struct Scenario {
    pub network: Network,
    pub users: Vec<UserId>,
    pub posts: Vec<PostHandle>,
    pub moderation: Vec<ModerationRecord>,
}

/// Build the network step by step.
pub fn run(clock: Arc<dyn Clock>, audit: Arc<dyn AuditSink>) -> Result<Scenario, DomainError> {
    let mut network = Network::new(clock, audit);

    let alice = network
        .register(NewUser::new(1, "Alice").with_credentials("alice@mail.com", "pass123"))?;
    let bob = network.register(NewUser::new(2, "Bob"))?;
    let eve = network.register(
        NewUser::new(3, "Eve")
            .with_credentials("eve@mail.com", "modpass")
            .moderator(),
    )?;
    tracing::debug!(users = network.users().len(), "Users registered");

    network.add_friend(alice, bob)?;
    network.add_friend(alice, eve)?;

    let first = network.create_post(alice, "my first post!")?;
    let second = network.create_post(bob, "hi here.")?;

    network.add_like(first, bob)?;
    network.add_like(first, eve)?;
    network.add_like(second, alice)?;
    tracing::debug!(
        first_likes = network.post(first)?.likes().len(),
        second_likes = network.post(second)?.likes().len(),
        "Likes applied"
    );

    let record = network.moderator_delete_post(eve, second)?;

    tracing::info!(stats = ?network.stats(), "Scenario complete");

    Ok(Scenario {
        network,
        users: vec![alice, bob, eve],
        posts: vec![first, second],
        moderation: vec![record],
    })
}
