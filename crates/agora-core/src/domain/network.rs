use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::post::{Post, PostHandle};
use super::stats::NetworkStats;
use super::user::{NewUser, User, UserId};
use super::view::{PostView, ProfileView};
use crate::error::DomainError;
use crate::ports::{AuditSink, Clock};

/// The social network aggregate.
///
/// Owns every user and post in two arenas. Relations between them are ids:
/// friendships are `UserId` sets on each user, authorship is a `UserId` on the
/// post plus a list of [`PostHandle`]s on the author.
///
/// Rule violations are silent. Self-friending, repeating a friendship, liking
/// a deleted post and liking as an inactive user all return `Ok(())` without
/// touching state. Errors are reserved for ids that do not exist and for
/// actors without the right to delete a post.
pub struct Network {
    clock: Arc<dyn Clock>,
    audit: Arc<dyn AuditSink>,
    users: Vec<User>,
    index: HashMap<UserId, usize>,
    posts: Vec<Post>,
}

impl Network {
    pub fn new(clock: Arc<dyn Clock>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            clock,
            audit,
            users: Vec::new(),
            index: HashMap::new(),
            posts: Vec::new(),
        }
    }

    /// Add a user. Ids must be unique within the network.
    pub fn register(&mut self, new_user: NewUser) -> Result<UserId, DomainError> {
        let id = new_user.id;
        if self.index.contains_key(&id) {
            return Err(DomainError::Duplicate(format!("user {id}")));
        }

        self.index.insert(id, self.users.len());
        self.users.push(User::from_registration(new_user));
        Ok(id)
    }

    pub fn user(&self, id: UserId) -> Result<&User, DomainError> {
        let slot = self.slot(id)?;
        Ok(&self.users[slot])
    }

    /// Users in registration order.
    pub fn users(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    pub fn post(&self, handle: PostHandle) -> Result<&Post, DomainError> {
        self.posts
            .get(handle.0)
            .ok_or_else(|| DomainError::post_not_found(handle))
    }

    pub fn friends(&self, id: UserId) -> Result<&BTreeSet<UserId>, DomainError> {
        Ok(self.user(id)?.friends())
    }

    /// The user's posts that are not tombstoned, in creation order.
    pub fn visible_posts(&self, id: UserId) -> Result<Vec<&Post>, DomainError> {
        let user = self.user(id)?;
        Ok(user
            .authored()
            .iter()
            .map(|handle| &self.posts[handle.0])
            .filter(|post| !post.is_deleted())
            .collect())
    }

    /// A user is active once they have a friend or a visible post.
    pub fn is_active(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.user_is_active(self.user(id)?))
    }

    /// Link two users in both directions.
    pub fn add_friend(&mut self, a: UserId, b: UserId) -> Result<(), DomainError> {
        let first = self.slot(a)?;
        let second = self.slot(b)?;

        if first == second || self.users[first].is_friend(b) {
            return Ok(());
        }

        self.users[first].insert_friend(b);
        self.users[second].insert_friend(a);
        Ok(())
    }

    /// Create a post owned by `author`. Its id is the author's post count
    /// (tombstoned posts included) plus one.
    pub fn create_post(
        &mut self,
        author: UserId,
        text: impl Into<String>,
    ) -> Result<PostHandle, DomainError> {
        let slot = self.slot(author)?;
        let id = self.users[slot].authored().len() as u64 + 1;
        let handle = PostHandle(self.posts.len());

        self.posts
            .push(Post::new(id, author, text.into(), self.clock.now()));
        self.users[slot].push_post(handle);
        Ok(handle)
    }

    /// Like a post. Accepted only while the post is live and the liker is active.
    pub fn add_like(&mut self, handle: PostHandle, liker: UserId) -> Result<(), DomainError> {
        let active = self.is_active(liker)?;
        let at = self.clock.now();
        self.post_mut(handle)?.add_like(liker, active, at);
        Ok(())
    }

    /// Tombstone one of the actor's own posts. Idempotent.
    ///
    /// Any other actor is `Unauthorized`, moderators included: removing
    /// someone else's post goes through
    /// [`Network::moderator_delete_post`] so the action is audited.
    pub fn delete_post(&mut self, actor: UserId, handle: PostHandle) -> Result<(), DomainError> {
        self.user(actor)?;
        let post = self.post_mut(handle)?;
        if post.author() != actor {
            return Err(DomainError::Unauthorized {
                actor,
                action: "delete another user's post",
            });
        }

        post.delete();
        Ok(())
    }

    /// Minutes since the post was created, measured against the network clock.
    pub fn post_age_minutes(&self, handle: PostHandle) -> Result<i64, DomainError> {
        Ok(self.post(handle)?.age_in_minutes(self.clock.now()))
    }

    pub fn profile(&self, id: UserId) -> Result<ProfileView, DomainError> {
        let user = self.user(id)?;
        Ok(ProfileView {
            username: user.username().to_owned(),
            role: user.role(),
            friends: user.friends().len(),
            posts: self.visible_post_count(user),
            active: self.user_is_active(user),
        })
    }

    pub fn post_view(&self, handle: PostHandle) -> Result<PostView, DomainError> {
        let post = self.post(handle)?;
        let author = self.user(post.author())?;
        Ok(PostView {
            id: post.id(),
            author: author.username().to_owned(),
            text: post.text().to_owned(),
            likes: post.likes().len(),
            created_at: post.created_at(),
            deleted: post.is_deleted(),
        })
    }

    pub fn stats(&self) -> NetworkStats {
        NetworkStats::collect(self)
    }

    pub(crate) fn visible_post_count(&self, user: &User) -> usize {
        user.authored()
            .iter()
            .filter(|handle| !self.posts[handle.0].is_deleted())
            .count()
    }

    pub(crate) fn user_is_active(&self, user: &User) -> bool {
        !user.friends().is_empty() || self.visible_post_count(user) > 0
    }

    pub(super) fn post_mut(&mut self, handle: PostHandle) -> Result<&mut Post, DomainError> {
        self.posts
            .get_mut(handle.0)
            .ok_or_else(|| DomainError::post_not_found(handle))
    }

    pub(super) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub(super) fn audit(&self) -> &dyn AuditSink {
        self.audit.as_ref()
    }

    fn slot(&self, id: UserId) -> Result<usize, DomainError> {
        self.index
            .get(&id)
            .copied()
            .ok_or_else(|| DomainError::user_not_found(id))
    }
}
