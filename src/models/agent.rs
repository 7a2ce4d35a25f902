//! Agent models for the Freshservice API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::CustomFields;
use crate::error::FreshserviceError;
use crate::filter::{join_pairs, pair, QueryFilter};

/// Assignment scopes an [`AgentRole`] may use.
pub const ASSIGNMENT_SCOPES: [&str; 4] = [
    "entire_helpdesk",
    "member_groups",
    "assigned_items",
    "specified_groups",
];

/// The only scope that accepts an explicit group list.
const SPECIFIED_GROUPS: &str = "specified_groups";

/// A Freshservice agent (a member of the support staff).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Agent {
    /// Unique agent ID (read-only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Primary email address, unique per account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// True for occasional (day-pass) agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasional: Option<bool>,

    /// False once the agent is deactivated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_manager_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// `12h` or `24h`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_information: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoreboard_level_id: Option<u64>,

    /// Groups the agent is a member of.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub member_of: Vec<u64>,

    /// Groups the agent observes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observer_of: Vec<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<AgentRole>,

    /// Superseded by `member_of`; still returned by older accounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_ids: Vec<u64>,

    /// Superseded by `roles`; still returned by older accounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role_ids: Vec<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_logged_in: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// A role granted to an agent, with the scope it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AgentRole {
    pub role_id: u64,

    /// One of [`ASSIGNMENT_SCOPES`].
    pub assignment_scope: String,

    /// Group IDs, only with the `specified_groups` scope.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<u64>,
}

impl AgentRole {
    /// Checks the assignment scope and group list before the role is sent.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::Validation` if the scope is unknown, or if
    /// groups are given with any scope other than `specified_groups`.
    pub fn validate(&self) -> Result<(), FreshserviceError> {
        if !ASSIGNMENT_SCOPES.contains(&self.assignment_scope.as_str()) {
            return Err(FreshserviceError::validation(format!(
                "agent assignment scope '{}' is invalid; choose from {}",
                self.assignment_scope,
                ASSIGNMENT_SCOPES.join(",")
            )));
        }

        if !self.groups.is_empty() && self.assignment_scope != SPECIFIED_GROUPS {
            return Err(FreshserviceError::validation(format!(
                "agent role groups are only applicable with {}, not {}",
                SPECIFIED_GROUPS, self.assignment_scope
            )));
        }

        Ok(())
    }
}

/// Response wrapper for single agent operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAgentResponse {
    /// The agent.
    pub agent: Agent,
}

/// Response wrapper for the agent list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListAgentsResponse {
    /// Agents on this page.
    #[serde(default)]
    pub agents: Vec<Agent>,
}

/// The single attribute an agent list can be narrowed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentFilterBy {
    /// `email=<address>`
    Email(String),
    /// `mobile_phone_number=<number>`
    MobilePhone(String),
    /// `work_phone_number=<number>`
    WorkPhone(String),
    /// `active=true`
    Active,
    /// `state=fulltime`
    FullTime,
    /// `state=occasional`
    Occasional,
}

/// Filter for listing agents.
///
/// Freshservice accepts one narrowing attribute per call; `by` holds it.
#[derive(Debug, Clone, Default)]
pub struct AgentListFilter {
    /// Next-page token from a previous call.
    pub page: Option<String>,
    /// Narrowing attribute.
    pub by: Option<AgentFilterBy>,
}

impl AgentListFilter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrows the list by one attribute, replacing any earlier choice.
    pub fn by(by: AgentFilterBy) -> Self {
        Self {
            page: None,
            by: Some(by),
        }
    }

    /// Continues from a next-page token.
    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.page = Some(token.into());
        self
    }
}

impl QueryFilter for AgentListFilter {
    fn query_string(&self) -> String {
        let mut pairs = Vec::new();

        if let Some(page) = &self.page {
            pairs.push(page.clone());
        }

        if let Some(by) = &self.by {
            pairs.push(match by {
                AgentFilterBy::Email(email) => pair("email", email),
                AgentFilterBy::MobilePhone(number) => pair("mobile_phone_number", number),
                AgentFilterBy::WorkPhone(number) => pair("work_phone_number", number),
                AgentFilterBy::Active => "active=true".to_string(),
                AgentFilterBy::FullTime => "state=fulltime".to_string(),
                AgentFilterBy::Occasional => "state=occasional".to_string(),
            });
        }

        join_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(scope: &str, groups: Vec<u64>) -> AgentRole {
        AgentRole {
            role_id: 5,
            assignment_scope: scope.to_string(),
            groups,
        }
    }

    #[test]
    fn test_role_scopes_are_accepted() {
        for scope in ASSIGNMENT_SCOPES {
            assert!(role(scope, vec![]).validate().is_ok(), "{}", scope);
        }
        assert!(role("specified_groups", vec![1, 2]).validate().is_ok());
    }

    #[test]
    fn test_role_unknown_scope() {
        let err = role("everything", vec![]).validate().unwrap_err();
        assert!(matches!(err, FreshserviceError::Validation(_)));
        assert!(err.to_string().contains("everything"));
    }

    #[test]
    fn test_role_groups_need_specified_scope() {
        let err = role("member_groups", vec![3]).validate().unwrap_err();
        assert!(matches!(err, FreshserviceError::Validation(_)));
    }

    #[test]
    fn test_filter_rendering() {
        assert_eq!(AgentListFilter::new().query_string(), "");
        assert_eq!(
            AgentListFilter::by(AgentFilterBy::Email("ops@example.com".into())).query_string(),
            "email=ops%40example.com"
        );
        assert_eq!(
            AgentListFilter::by(AgentFilterBy::MobilePhone("+44 7700".into())).query_string(),
            "mobile_phone_number=%2B44%207700"
        );
        assert_eq!(
            AgentListFilter::by(AgentFilterBy::Active).query_string(),
            "active=true"
        );
        assert_eq!(
            AgentListFilter::by(AgentFilterBy::Occasional)
                .with_page_token("page=2")
                .query_string(),
            "page=2&state=occasional"
        );
    }

    #[test]
    fn test_agent_deserialize() {
        let json = r#"{
            "agent": {
                "id": 19000,
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "active": true,
                "occasional": false,
                "member_of": [7, 8],
                "roles": [{"role_id": 1, "assignment_scope": "entire_helpdesk", "groups": []}],
                "last_login_at": "2024-01-15T09:00:00Z",
                "custom_fields": {"house": "Ravenclaw"}
            }
        }"#;
        let response: GetAgentResponse = serde_json::from_str(json).unwrap();
        let agent = response.agent;
        assert_eq!(agent.id, Some(19000));
        assert_eq!(agent.member_of, vec![7, 8]);
        assert_eq!(agent.roles[0].assignment_scope, "entire_helpdesk");
        assert!(agent.last_login_at.is_some());
        assert!(agent.group_ids.is_empty());
    }
}
