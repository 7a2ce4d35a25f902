//! Announcement models for the Freshservice API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::QueryFilter;

/// A broadcast message shown to agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Announcement {
    /// Unique announcement ID (read-only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Plain-text body (read-only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_from: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_till: Option<DateTime<Utc>>,

    /// `everyone`, `agents_only` or `agents_and_groups`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<u64>,

    /// `active`, `archived` or `scheduled` (read-only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_emails: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response wrapper for single announcement operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAnnouncementResponse {
    /// The announcement.
    pub announcement: Announcement,
}

/// Response wrapper for the announcement list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListAnnouncementsResponse {
    /// All matching announcements.
    #[serde(default)]
    pub announcements: Vec<Announcement>,
}

/// Announcement lifecycle states that can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementState {
    Active,
    Archived,
    Scheduled,
}

impl AnnouncementState {
    /// The query value Freshservice expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementState::Active => "active",
            AnnouncementState::Archived => "archived",
            AnnouncementState::Scheduled => "scheduled",
        }
    }
}

/// Filter for listing announcements by state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnouncementListFilter {
    /// State to list.
    pub state: AnnouncementState,
}

impl AnnouncementListFilter {
    /// Lists announcements in `state`.
    pub fn new(state: AnnouncementState) -> Self {
        Self { state }
    }
}

impl QueryFilter for AnnouncementListFilter {
    fn query_string(&self) -> String {
        format!("state={}", self.state.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_filter() {
        assert_eq!(
            AnnouncementListFilter::new(AnnouncementState::Archived).query_string(),
            "state=archived"
        );
        assert_eq!(
            AnnouncementListFilter::new(AnnouncementState::Active).query_string(),
            "state=active"
        );
    }

    #[test]
    fn test_announcement_payload() {
        let announcement = Announcement {
            title: Some("Maintenance window".to_string()),
            body_html: Some("<p>Saturday 02:00 UTC</p>".to_string()),
            visibility: Some("everyone".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&announcement).unwrap(),
            serde_json::json!({
                "title": "Maintenance window",
                "body_html": "<p>Saturday 02:00 UTC</p>",
                "visibility": "everyone"
            })
        );
    }
}
