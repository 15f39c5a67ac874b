//! # Agora Core
//!
//! The domain layer of the Agora social network.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! users, friendships, posts, likes, moderation and aggregate statistics, all
//! owned by the [`Network`] arena.

pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{Network, NetworkStats};
pub use error::DomainError;
