use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::post::PostHandle;

/// Numeric user identifier, chosen by the caller at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of user kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Regular,
    /// May soft-delete any post, not only its own.
    Moderator,
}

/// Registration request for a new user.
///
/// Email and password default to empty strings.
#[derive(Clone)]
pub struct NewUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    email: String,
    password: String,
}

impl NewUser {
    pub fn new(id: u64, username: impl Into<String>) -> Self {
        Self {
            id: UserId(id),
            username: username.into(),
            role: Role::Regular,
            email: String::new(),
            password: String::new(),
        }
    }

    pub fn with_credentials(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.email = email.into();
        self.password = password.into();
        self
    }

    pub fn moderator(mut self) -> Self {
        self.role = Role::Moderator;
        self
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .field("email", &self.email)
            .field("password", &redacted(&self.password))
            .finish()
    }
}

/// User entity - a member of the network.
///
/// Users never hold references to each other or to their posts. Friends are
/// stored as [`UserId`]s and authored posts as [`PostHandle`]s into the
/// owning [`Network`](super::Network), which is also the only place that can
/// mutate a user.
#[derive(Clone)]
pub struct User {
    id: UserId,
    username: String,
    role: Role,
    email: String,
    password: String,
    friends: BTreeSet<UserId>,
    posts: Vec<PostHandle>,
}

impl User {
    pub(crate) fn from_registration(new_user: NewUser) -> Self {
        Self {
            id: new_user.id,
            username: new_user.username,
            role: new_user.role,
            email: new_user.email,
            password: new_user.password,
            friends: BTreeSet::new(),
            posts: Vec::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_moderator(&self) -> bool {
        self.role == Role::Moderator
    }

    /// Whether a password was supplied at registration. The password itself
    /// never leaves this struct.
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }

    pub fn friends(&self) -> &BTreeSet<UserId> {
        &self.friends
    }

    pub fn is_friend(&self, other: UserId) -> bool {
        self.friends.contains(&other)
    }

    /// Every post this user created, tombstoned ones included, in creation order.
    pub fn authored(&self) -> &[PostHandle] {
        &self.posts
    }

    /// One side of a friendship edge. The network inserts the other side.
    pub(crate) fn insert_friend(&mut self, other: UserId) -> bool {
        self.friends.insert(other)
    }

    pub(crate) fn push_post(&mut self, handle: PostHandle) {
        self.posts.push(handle);
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .field("email", &self.email)
            .field("password", &redacted(&self.password))
            .field("friends", &self.friends)
            .field("posts", &self.posts)
            .finish()
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() { "<empty>" } else { "<redacted>" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::from_registration(NewUser::new(2, "Bob"));
        assert_eq!(user.id(), UserId(2));
        assert_eq!(user.username(), "Bob");
        assert_eq!(user.role(), Role::Regular);
        assert!(!user.has_password());
        assert!(user.friends().is_empty());
        assert!(user.authored().is_empty());
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = User::from_registration(
            NewUser::new(1, "Alice").with_credentials("alice@mail.com", "pass123"),
        );
        let rendered = format!("{user:?}");
        assert!(rendered.contains("alice@mail.com"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("pass123"));
        assert!(user.has_password());
    }

    #[test]
    fn test_insert_friend_is_idempotent() {
        let mut user = User::from_registration(NewUser::new(1, "Alice"));
        assert!(user.insert_friend(UserId(2)));
        assert!(!user.insert_friend(UserId(2)));
        assert_eq!(user.friends().len(), 1);
        assert!(user.is_friend(UserId(2)));
    }

    #[test]
    fn test_moderator_builder() {
        let user = User::from_registration(NewUser::new(3, "Eve").moderator());
        assert!(user.is_moderator());
    }
}
