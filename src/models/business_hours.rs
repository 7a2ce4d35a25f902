//! Business hours models for the Freshservice API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business hours configuration used for SLA timers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BusinessHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// True for the account-wide default configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_desk_hours: Option<ServiceDeskHours>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_of_holidays: Vec<Holiday>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Working hours per weekday. A missing day is not a working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ServiceDeskHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<WorkdayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<WorkdayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<WorkdayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<WorkdayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<WorkdayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<WorkdayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<WorkdayHours>,
}

/// Start and end of a working day, e.g. `8:00 am` and `5:00 pm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WorkdayHours {
    pub beginning_of_workday: String,
    pub end_of_workday: String,
}

/// A yearly holiday. Dates use the ISO `--MM-DD` form, which has no year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Holiday {
    pub holiday_date: String,
    pub holiday_name: String,
}

/// Response wrapper for a single configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetBusinessHoursResponse {
    pub business_hours: BusinessHours,
}

/// Response wrapper for the configuration list (same key as the single form).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListBusinessHoursResponse {
    #[serde(default)]
    pub business_hours: Vec<BusinessHours>,
}
