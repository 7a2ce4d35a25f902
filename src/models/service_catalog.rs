//! Service catalog models for the Freshservice API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::filter::{pair, QueryFilter};

/// An orderable item in the service catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServiceItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_type_id: Option<u64>,

    /// Delivery time in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time_visibility: Option<bool>,

    /// Decimal string, e.g. `"1299.0"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_visibility: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_quantity: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_attachments: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bundle: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_child: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub botified: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_visibility: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<serde_json::Map<String, Value>>,

    /// Requester-facing form fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_items: Vec<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A service catalog category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServiceCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response wrapper for a single service item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetServiceItemResponse {
    pub service_item: ServiceItem,
}

/// Response wrapper for the service item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListServiceItemsResponse {
    #[serde(default)]
    pub service_items: Vec<ServiceItem>,
}

/// Response wrapper for the category list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListServiceCategoriesResponse {
    #[serde(default)]
    pub service_categories: Vec<ServiceCategory>,
}

/// Restricts the service item list to one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceItemListFilter {
    pub category_id: u64,
}

impl ServiceItemListFilter {
    /// Lists the items of `category_id`.
    pub fn new(category_id: u64) -> Self {
        Self { category_id }
    }
}

impl QueryFilter for ServiceItemListFilter {
    fn query_string(&self) -> String {
        pair("category_id", self.category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter() {
        assert_eq!(ServiceItemListFilter::new(12).query_string(), "category_id=12");
    }

    #[test]
    fn test_service_item_deserialize() {
        let json = r#"{
            "service_item": {
                "id": 1,
                "display_id": 9,
                "name": "MacBook Pro",
                "category_id": 12,
                "cost": "1299.0",
                "configs": {"attachment_mandatory": "false"},
                "custom_fields": [],
                "child_items": []
            }
        }"#;
        let item = serde_json::from_str::<GetServiceItemResponse>(json)
            .unwrap()
            .service_item;
        assert_eq!(item.cost.as_deref(), Some("1299.0"));
        assert_eq!(
            item.configs.unwrap().get("attachment_mandatory"),
            Some(&serde_json::json!("false"))
        );
        assert!(item.custom_fields.is_empty());
    }
}
