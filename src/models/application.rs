//! Software application models for the Freshservice API.
//!
//! Applications are the software inventory tracked by Freshservice SAM,
//! together with their licenses, users and installations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::filter::{join_pairs, QueryFilter};

/// A software application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Application {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form; Freshservice returns `null`, a string or an object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_id: Option<u64>,

    /// `desktop`, `saas` or `mobile`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,

    /// `managed`, `ignored`, `blacklisted` and so on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_by_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<AdditionalData>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Usage data attached to an application. Its shape varies by source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AdditionalData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync_date: Option<Value>,
}

/// A license held for an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct License {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<DateTime<Utc>>,
}

/// A user an application license is allocated to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApplicationUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocated_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_used: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A machine an application is installed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Installation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_machine_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response wrapper for a single application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetApplicationResponse {
    /// The application.
    pub application: Application,
}

/// Response wrapper for the application list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListApplicationsResponse {
    /// Applications on this page.
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// Response wrapper for an application's licenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListLicensesResponse {
    #[serde(default)]
    pub licenses: Vec<License>,
}

/// Response wrapper for an application's users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListApplicationUsersResponse {
    #[serde(default)]
    pub application_users: Vec<ApplicationUser>,
}

/// Response wrapper for an application's installations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListInstallationsResponse {
    #[serde(default)]
    pub installations: Vec<Installation>,
}

/// Options for listing applications.
#[derive(Debug, Clone, Default)]
pub struct ApplicationListOptions {
    /// Next-page token from a previous call.
    pub page: Option<String>,
}

impl ApplicationListOptions {
    /// Continues from a next-page token.
    pub fn with_page_token(token: impl Into<String>) -> Self {
        Self {
            page: Some(token.into()),
        }
    }
}

impl QueryFilter for ApplicationListOptions {
    fn query_string(&self) -> String {
        join_pairs(self.page.iter().cloned().collect())
    }
}
