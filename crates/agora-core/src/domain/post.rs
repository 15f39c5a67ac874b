use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::like::Like;
use super::user::UserId;

/// Position of a post in the network arena.
///
/// Unlike [`Post::id`], which restarts at 1 for every author, a handle is
/// unique within its network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostHandle(pub(crate) usize);

impl fmt::Display for PostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of content. Only `Post` is produced today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Post,
    Photo,
    Video,
}

/// Post entity - authored text with likes and a tombstone flag.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    id: u64,
    author: UserId,
    text: String,
    content_type: ContentType,
    created_at: DateTime<Utc>,
    likes: Vec<Like>,
    is_deleted: bool,
}

impl Post {
    pub(crate) fn new(id: u64, author: UserId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            author,
            text,
            content_type: ContentType::Post,
            created_at,
            likes: Vec::new(),
            is_deleted: false,
        }
    }

    /// Per-author sequence number, starting at 1.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Likes in the order they were accepted.
    pub fn likes(&self) -> &[Like] {
        &self.likes
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Whole minutes elapsed between creation and `now`, never negative.
    pub fn age_in_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_minutes().max(0)
    }

    /// Appends a like only if the post is live and the liker is active.
    pub(crate) fn add_like(&mut self, user: UserId, user_is_active: bool, at: DateTime<Utc>) {
        if !self.is_deleted && user_is_active {
            self.likes.push(Like::new(user, at));
        }
    }

    /// Sets the tombstone. There is no way back.
    pub(crate) fn delete(&mut self) {
        self.is_deleted = true;
    }
}
