//! Domain entities - the core business objects.

mod like;
mod moderation;
mod network;
mod post;
mod stats;
mod user;
mod view;


pub use like::Like;
pub use moderation::ModerationRecord;
pub use network::Network;
pub use post::{ContentType, Post, PostHandle};
pub use stats::NetworkStats;
pub use user::{NewUser, Role, User, UserId};
pub use view::{PostView, ProfileView};
