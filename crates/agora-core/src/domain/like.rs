use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserId;

/// A user liked a post at a point in time. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    user: UserId,
    at: DateTime<Utc>,
}

impl Like {
    pub(crate) fn new(user: UserId, at: DateTime<Utc>) -> Self {
        Self { user, at }
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }
}
