//! Read-only renderings of users and posts.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::Role;

/// Snapshot of a user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub username: String,
    pub role: Role,
    pub friends: usize,
    /// Visible posts only.
    pub posts: usize,
    pub active: bool,
}

impl ProfileView {
    fn write_base(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "user profile: {}", self.username)?;
        writeln!(f, "friends: {}", self.friends)?;
        writeln!(f, "posts: {}", self.posts)?;
        write!(f, "active: {}", if self.active { "yes" } else { "no" })
    }
}

impl fmt::Display for ProfileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_base(f)?;
        match self.role {
            Role::Regular => Ok(()),
            Role::Moderator => write!(f, "\nrole: moderator"),
        }
    }
}

/// Snapshot of a single post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: u64,
    pub author: String,
    pub text: String,
    pub likes: usize,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
}

impl fmt::Display for PostView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post #{} from {}", self.id, self.author)?;
        if self.deleted {
            write!(f, " (deleted)")?;
        }
        writeln!(f)?;
        writeln!(f, "text: {}", self.text)?;
        writeln!(f, "likes: {}", self.likes)?;
        write!(f, "created: {}", self.created_at.format("%Y-%m-%d %H:%M:%S UTC"))
    }
}
