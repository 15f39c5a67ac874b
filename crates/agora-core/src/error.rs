//! Domain-level error types.

use thiserror::Error;

use crate::domain::{PostHandle, UserId};

/// Domain errors - business logic failures.
///
/// Rule violations such as self-friending or liking a deleted post are not
/// errors: those operations leave the state unchanged and return `Ok`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Unauthorized: user {actor} may not {action}")]
    Unauthorized { actor: UserId, action: &'static str },
}

impl DomainError {
    pub(crate) fn user_not_found(id: UserId) -> Self {
        Self::NotFound {
            entity_type: "user",
            id: id.to_string(),
        }
    }

    pub(crate) fn post_not_found(handle: PostHandle) -> Self {
        Self::NotFound {
            entity_type: "post",
            id: handle.to_string(),
        }
    }
}
