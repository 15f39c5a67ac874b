use serde::{Deserialize, Serialize};

use super::network::Network;

/// Aggregate counts over a network, computed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub total_users: usize,
    /// Posts that are not tombstoned.
    pub total_posts: usize,
    pub active_users: usize,
}

impl NetworkStats {
    pub fn collect(network: &Network) -> Self {
        network.users().fold(Self::default(), |mut stats, user| {
            stats.total_users += 1;
            stats.total_posts += network.visible_post_count(user);
            if network.user_is_active(user) {
                stats.active_users += 1;
            }
            stats
        })
    }
}
