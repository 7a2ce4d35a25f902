//! Ticket models for the Freshservice API.
//!
//! This module defines the ticket entity, its list/detail envelopes, the
//! numeric status, priority and source codes, and the options accepted by
//! the ticket list endpoint.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Attachment, CustomFields, SortOrder};
use crate::filter::{join_pairs, pair, QueryFilter};

/// Ticket status codes.
pub mod ticket_status {
    /// Open.
    pub const OPEN: u32 = 2;
    /// Pending.
    pub const PENDING: u32 = 3;
    /// Resolved.
    pub const RESOLVED: u32 = 4;
    /// Closed.
    pub const CLOSED: u32 = 5;
}

/// Ticket priority codes.
pub mod ticket_priority {
    /// Low.
    pub const LOW: u32 = 1;
    /// Medium.
    pub const MEDIUM: u32 = 2;
    /// High.
    pub const HIGH: u32 = 3;
    /// Urgent.
    pub const URGENT: u32 = 4;
}

/// Channels a ticket can be raised through.
pub mod ticket_source {
    /// Email.
    pub const EMAIL: u32 = 1;
    /// Self-service portal.
    pub const PORTAL: u32 = 2;
    /// Phone.
    pub const PHONE: u32 = 3;
    /// Chat.
    pub const CHAT: u32 = 4;
    /// Feedback widget.
    pub const FEEDBACK_WIDGET: u32 = 5;
    /// Yammer.
    pub const YAMMER: u32 = 6;
    /// AWS CloudWatch.
    pub const AWS_CLOUDWATCH: u32 = 7;
    /// PagerDuty.
    pub const PAGERDUTY: u32 = 8;
    /// Walk-up.
    pub const WALKUP: u32 = 9;
    /// Slack.
    pub const SLACK: u32 = 10;
}

/// A Freshservice ticket.
///
/// Every field is optional so the same type serves as a create/update
/// payload (only set fields are sent) and as a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Ticket {
    /// Unique ticket ID (read-only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Subject line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// HTML description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Plain-text description (read-only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_text: Option<String>,

    /// Requester email, used when creating a ticket for a new requester.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Status code, see [`ticket_status`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,

    /// Priority code, see [`ticket_priority`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    /// Source code, see [`ticket_source`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<u32>,

    /// Urgency (1 low to 3 high).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<u32>,

    /// Impact (1 low to 3 high).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<u32>,

    /// Ticket type, e.g. `Incident` or `Service Request`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,

    /// Agent the ticket is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responder_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_config_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_policy_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc_emails: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fwd_emails: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reply_cc_emails: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_emails: Vec<String>,

    /// First-response escalation flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr_escalated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_escalated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spam: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    /// Resolution due time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_by: Option<DateTime<Utc>>,

    /// First-response due time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr_due_by: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,

    /// Attachments (read-only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// Response wrapper for single ticket operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetTicketResponse {
    /// The ticket.
    pub ticket: Ticket,
}

/// Response wrapper for the ticket list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTicketsResponse {
    /// Tickets on this page.
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

/// Predefined ticket views (`filter=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketView {
    /// New tickets and tickets assigned to the caller that are open.
    NewAndMyOpen,
    /// Tickets the caller watches.
    Watching,
    /// Tickets marked as spam.
    Spam,
    /// Deleted tickets.
    Deleted,
}

impl TicketView {
    fn as_str(&self) -> &'static str {
        match self {
            TicketView::NewAndMyOpen => "new_and_my_open",
            TicketView::Watching => "watching",
            TicketView::Spam => "spam",
            TicketView::Deleted => "deleted",
        }
    }
}

/// Restricts the ticket list to one requester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequesterFilter {
    /// `requester_id=<id>`
    Id(u64),
    /// `email=<address>`
    Email(String),
}

/// Options for listing tickets.
///
/// Use the builder methods to construct the query. The options also work
/// for a single ticket fetch, where only the embeds matter.
///
/// # Example
///
/// ```ignore
/// let options = TicketListOptions::new()
///     .with_requester_email("test-account@example.com")
///     .with_sort(SortOrder::Descending);
/// // email=test-account%40example.com&order_type=desc
/// ```
#[derive(Debug, Clone, Default)]
pub struct TicketListOptions {
    /// Next-page token from a previous call.
    pub page: Option<String>,
    /// Predefined view.
    pub view: Option<TicketView>,
    /// Requester restriction.
    pub requester: Option<RequesterFilter>,
    /// Only tickets updated since this time.
    pub updated_since: Option<DateTime<Utc>>,
    /// Only tickets of this type.
    pub ticket_type: Option<String>,
    /// Sort direction.
    pub sort: Option<SortOrder>,
    /// Embed requester details (costs extra API credits).
    pub include_requester: bool,
    /// Embed ticket stats (costs extra API credits).
    pub include_stats: bool,
}

impl TicketListOptions {
    /// Creates empty options (the default ticket list).
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues from a next-page token.
    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.page = Some(token.into());
        self
    }

    /// Restricts to a predefined view.
    pub fn with_view(mut self, view: TicketView) -> Self {
        self.view = Some(view);
        self
    }

    /// Restricts to tickets raised by a requester ID.
    pub fn with_requester_id(mut self, id: u64) -> Self {
        self.requester = Some(RequesterFilter::Id(id));
        self
    }

    /// Restricts to tickets raised by a requester email.
    pub fn with_requester_email(mut self, email: impl Into<String>) -> Self {
        self.requester = Some(RequesterFilter::Email(email.into()));
        self
    }

    /// Restricts to tickets updated since a point in time.
    pub fn with_updated_since(mut self, since: DateTime<Utc>) -> Self {
        self.updated_since = Some(since);
        self
    }

    /// Restricts to a ticket type.
    pub fn with_type(mut self, ticket_type: impl Into<String>) -> Self {
        self.ticket_type = Some(ticket_type.into());
        self
    }

    /// Sets the sort direction.
    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    /// Embeds requester details.
    pub fn with_requester_info(mut self) -> Self {
        self.include_requester = true;
        self
    }

    /// Embeds ticket stats.
    pub fn with_stats(mut self) -> Self {
        self.include_stats = true;
        self
    }
}

impl QueryFilter for TicketListOptions {
    fn query_string(&self) -> String {
        let mut pairs = Vec::new();

        if let Some(page) = &self.page {
            pairs.push(page.clone());
        }

        if let Some(view) = self.view {
            pairs.push(format!("filter={}", view.as_str()));
        }

        match &self.requester {
            Some(RequesterFilter::Id(id)) => pairs.push(pair("requester_id", id)),
            Some(RequesterFilter::Email(email)) => pairs.push(pair("email", email)),
            None => {}
        }

        if let Some(since) = &self.updated_since {
            pairs.push(pair(
                "updated_since",
                since.to_rfc3339_opts(SecondsFormat::Secs, true),
            ));
        }

        if let Some(ticket_type) = &self.ticket_type {
            pairs.push(pair("type", ticket_type));
        }

        if let Some(order) = self.sort {
            pairs.push(format!("order_type={}", order.as_str()));
        }

        let mut includes = Vec::new();
        if self.include_requester {
            includes.push("requester");
        }
        if self.include_stats {
            includes.push("stats");
        }
        if !includes.is_empty() {
            pairs.push(format!("include={}", includes.join(",")));
        }

        join_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_options_render_nothing() {
        assert_eq!(TicketListOptions::new().query_string(), "");
    }

    #[test]
    fn test_requester_email_and_sort() {
        let options = TicketListOptions::new()
            .with_requester_email("test-account@example.com")
            .with_sort(SortOrder::Descending);
        assert_eq!(
            options.query_string(),
            "email=test-account%40example.com&order_type=desc"
        );
    }

    #[test]
    fn test_full_options_order() {
        let since = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let options = TicketListOptions::new()
            .with_page_token("page=3")
            .with_view(TicketView::Watching)
            .with_requester_id(42)
            .with_updated_since(since)
            .with_type("Incident")
            .with_sort(SortOrder::Ascending)
            .with_requester_info()
            .with_stats();
        assert_eq!(
            options.query_string(),
            "page=3&filter=watching&requester_id=42&updated_since=2024-03-01T08%3A30%3A00Z\
             &type=Incident&order_type=asc&include=requester,stats"
        );
    }

    #[test]
    fn test_last_requester_wins() {
        let options = TicketListOptions::new()
            .with_requester_email("a@example.com")
            .with_requester_id(7);
        assert_eq!(options.query_string(), "requester_id=7");
    }

    #[test]
    fn test_ticket_deserialize() {
        let json = r#"{
            "id": 101,
            "subject": "VPN is down",
            "status": 2,
            "priority": 3,
            "type": "Incident",
            "requester_id": 9001,
            "cc_emails": ["boss@example.com"],
            "due_by": "2024-03-02T10:00:00Z",
            "custom_fields": {"site": "HQ"},
            "attachments": []
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, Some(101));
        assert_eq!(ticket.status, Some(ticket_status::OPEN));
        assert_eq!(ticket.priority, Some(ticket_priority::HIGH));
        assert_eq!(ticket.ticket_type.as_deref(), Some("Incident"));
        assert_eq!(ticket.cc_emails, vec!["boss@example.com".to_string()]);
        assert_eq!(
            ticket.due_by,
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap())
        );
        assert_eq!(
            ticket.custom_fields.unwrap().get("site"),
            Some(&serde_json::json!("HQ"))
        );
    }

    #[test]
    fn test_ticket_payload_skips_unset_fields() {
        let ticket = Ticket {
            subject: Some("New laptop".to_string()),
            email: Some("dev@example.com".to_string()),
            priority: Some(ticket_priority::LOW),
            status: Some(ticket_status::OPEN),
            ..Default::default()
        };
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "subject": "New laptop",
                "email": "dev@example.com",
                "priority": 1,
                "status": 2
            })
        );
    }
}
