//! Common types shared across Freshservice API models.
//!
//! This module defines the structured error payload, list pages, sort
//! order and attachments used by several endpoints.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Arbitrary account-defined fields attached to tickets, agents and others.
pub type CustomFields = serde_json::Map<String, serde_json::Value>;

/// Error body returned by Freshservice on a non-2xx response.
///
/// ```json
/// {"description": "Validation failed",
///  "errors": [{"field": "email", "message": "...", "code": "invalid_value"}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ErrorResponse {
    /// Summary of the failure. Required: bodies without it are not
    /// structured error payloads.
    pub description: String,

    /// Individual problems, one per offending field.
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

/// A single entry in [`ErrorResponse::errors`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ErrorDetail {
    /// The offending field. Only present on HTTP 400-class validation errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Human-readable message.
    #[serde(default)]
    pub message: String,

    /// Machine-readable code (e.g. `invalid_value`, `missing_field`).
    #[serde(default)]
    pub code: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)?;
        for (i, detail) in self.errors.iter().enumerate() {
            f.write_str(if i == 0 { " (" } else { "; " })?;
            if let Some(field) = &detail.field {
                write!(f, "{}: ", field)?;
            }
            write!(f, "{} [{}]", detail.message, detail.code)?;
        }
        if !self.errors.is_empty() {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// One page of a paginated list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,

    /// Token for the next page, to be passed back as the list filter.
    /// Empty when this is the last page.
    pub next_page: String,
}

impl<T> Page<T> {
    /// Creates a page from its items and next-page token.
    pub fn new(items: Vec<T>, next_page: String) -> Self {
        Self { items, next_page }
    }

    /// Returns true if another page can be fetched.
    pub fn has_next_page(&self) -> bool {
        !self.next_page.is_empty()
    }
}

/// Sort direction for list endpoints (`order_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// `order_type=asc`
    Ascending,
    /// `order_type=desc`
    Descending,
}

impl SortOrder {
    /// The query value Freshservice expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

/// A file attached to a ticket or note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Attachment {
    /// MIME type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// File name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Download URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,

    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
