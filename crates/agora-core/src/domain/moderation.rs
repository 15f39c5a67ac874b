use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::network::Network;
use super::post::PostHandle;
use super::user::UserId;
use crate::error::DomainError;

/// Audit record of a moderator removing a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationRecord {
    pub moderator: UserId,
    pub moderator_name: String,
    pub author: UserId,
    /// Per-author id of the removed post.
    pub post_id: u64,
    pub at: DateTime<Utc>,
}

impl fmt::Display for ModerationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "moderator {} deleted post #{} by user {}",
            self.moderator_name, self.post_id, self.author
        )
    }
}

impl Network {
    /// Tombstone any post on behalf of a moderator and emit an audit record.
    ///
    /// Repeating the call on a deleted post is allowed and audited again.
    pub fn moderator_delete_post(
        &mut self,
        moderator: UserId,
        handle: PostHandle,
    ) -> Result<ModerationRecord, DomainError> {
        let actor = self.user(moderator)?;
        if !actor.is_moderator() {
            return Err(DomainError::Unauthorized {
                actor: moderator,
                action: "moderate posts",
            });
        }
        let moderator_name = actor.username().to_owned();
        let at = self.clock().now();

        let post = self.post_mut(handle)?;
        post.delete();
        let record = ModerationRecord {
            moderator,
            moderator_name,
            author: post.author(),
            post_id: post.id(),
            at,
        };

        self.audit().record(&record);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewUser;
    use crate::testing::test_network;

    #[test]
    fn test_moderator_deletes_any_post() {
        let (mut network, _, audit) = test_network();
        let bob = network.register(NewUser::new(2, "Bob")).unwrap();
        let eve = network
            .register(NewUser::new(3, "Eve").with_credentials("eve@mail.com", "modpass").moderator())
            .unwrap();
        let post = network.create_post(bob, "hi here.").unwrap();

        let record = network.moderator_delete_post(eve, post).unwrap();

        assert!(network.post(post).unwrap().is_deleted());
        assert_eq!(record.moderator, eve);
        assert_eq!(record.author, bob);
        assert_eq!(record.post_id, 1);
        assert_eq!(record.to_string(), "moderator Eve deleted post #1 by user 2");
        assert_eq!(audit.records(), vec![record]);
    }

    #[test]
    fn test_regular_user_cannot_moderate() {
        let (mut network, _, audit) = test_network();
        let alice = network.register(NewUser::new(1, "Alice")).unwrap();
        let bob = network.register(NewUser::new(2, "Bob")).unwrap();
        let post = network.create_post(bob, "hi here.").unwrap();

        let err = network.moderator_delete_post(alice, post).unwrap_err();

        assert!(matches!(err, DomainError::Unauthorized { .. }));
        assert!(!network.post(post).unwrap().is_deleted());
        assert!(audit.records().is_empty());
    }

    #[test]
    fn test_repeat_moderation_is_idempotent_but_audited() {
        let (mut network, _, audit) = test_network();
        let eve = network.register(NewUser::new(3, "Eve").moderator()).unwrap();
        let post = network.create_post(eve, "rules").unwrap();

        network.moderator_delete_post(eve, post).unwrap();
        network.moderator_delete_post(eve, post).unwrap();

        assert!(network.post(post).unwrap().is_deleted());
        assert_eq!(audit.records().len(), 2);
    }
}
