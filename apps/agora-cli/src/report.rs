//! Final report rendering, as text blocks or JSON.

use std::fmt;

use agora_core::domain::{ModerationRecord, PostView, ProfileView};
use agora_core::{DomainError, NetworkStats};
use serde::Serialize;

use crate::scenario::Scenario;

/// Everything printed at the end of a run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub profiles: Vec<ProfileView>,
    pub posts: Vec<PostView>,
    pub moderation: Vec<ModerationRecord>,
    pub stats: NetworkStats,
}

impl Report {
    pub fn build(scenario: &Scenario) -> Result<Self, DomainError> {
        let network = &scenario.network;

        let profiles = scenario
            .users
            .iter()
            .map(|&id| network.profile(id))
            .collect::<Result<Vec<_>, _>>()?;
        let posts = scenario
            .posts
            .iter()
            .map(|&handle| network.post_view(handle))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            profiles,
            posts,
            moderation: scenario.moderation.clone(),
            stats: network.stats(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.moderation {
            writeln!(f, "{record}")?;
        }
        for profile in &self.profiles {
            writeln!(f, "\n{profile}")?;
        }
        for post in &self.posts {
            writeln!(f, "\n{post}")?;
        }
        writeln!(f)?;
        writeln!(f, "total users: {}", self.stats.total_users)?;
        writeln!(f, "total posts: {}", self.stats.total_posts)?;
        write!(f, "active users: {}", self.stats.active_users)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use agora_infra::{InMemoryAuditLog, ManualClock};
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::scenario;

    fn report() -> Report {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        ));
        let scenario = scenario::run(clock, Arc::new(InMemoryAuditLog::new())).unwrap();
        Report::build(&scenario).unwrap()
    }

    #[test]
    fn test_text_report() {
        let text = report().to_string();
        assert!(text.starts_with("moderator Eve deleted post #1 by user 2"));
        assert!(text.contains("user profile: Alice\nfriends: 2\nposts: 1\nactive: yes"));
        assert!(text.contains("user profile: Eve"));
        assert!(text.contains("role: moderator"));
        assert!(text.contains("post #1 from Bob (deleted)"));
        assert!(text.ends_with("active users: 3"));
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(json["stats"]["total_posts"], 1);
        assert_eq!(json["profiles"][2]["role"], "moderator");
        assert_eq!(json["posts"][0]["likes"], 2);
        assert_eq!(json["moderation"][0]["moderator_name"], "Eve");
    }
}
