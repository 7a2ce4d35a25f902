//! Asset models for the Freshservice API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{CustomFields, SortOrder};
use crate::filter::{join_pairs, QueryFilter};

/// A hardware or software asset in the CMDB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Asset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The number shown in the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type_id: Option<u64>,

    /// `low`, `medium` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_type: Option<String>,

    /// `permanent` or `loaner`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_on: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Type-specific fields, present with `include=type_fields`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_fields: Option<CustomFields>,
}

/// Response wrapper for a single asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAssetResponse {
    /// The asset.
    pub asset: Asset,
}

/// Response wrapper for the asset list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListAssetsResponse {
    /// Assets on this page.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// Options for listing assets.
///
/// Embeds cost extra API credits per call.
#[derive(Debug, Clone, Default)]
pub struct AssetListOptions {
    /// Next-page token from a previous call.
    pub page: Option<String>,
    /// Sort direction.
    pub sort: Option<SortOrder>,
    /// Embed type-specific fields.
    pub include_type_fields: bool,
    /// List assets in the trash instead.
    pub trashed: bool,
}

impl AssetListOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues from a next-page token.
    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.page = Some(token.into());
        self
    }

    /// Sets the sort direction.
    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.sort = Some(order);
        self
    }

    /// Embeds type-specific fields.
    pub fn with_type_fields(mut self) -> Self {
        self.include_type_fields = true;
        self
    }

    /// Lists trashed assets.
    pub fn trashed(mut self) -> Self {
        self.trashed = true;
        self
    }
}

impl QueryFilter for AssetListOptions {
    fn query_string(&self) -> String {
        let mut pairs = Vec::new();

        if let Some(page) = &self.page {
            pairs.push(page.clone());
        }
        if let Some(order) = self.sort {
            pairs.push(format!("order_type={}", order.as_str()));
        }
        if self.include_type_fields {
            pairs.push("include=type_fields".to_string());
        }
        if self.trashed {
            pairs.push("trashed=true".to_string());
        }

        join_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_rendering() {
        assert_eq!(AssetListOptions::new().query_string(), "");
        assert_eq!(
            AssetListOptions::new()
                .with_page_token("page=2")
                .with_sort(SortOrder::Descending)
                .with_type_fields()
                .trashed()
                .query_string(),
            "page=2&order_type=desc&include=type_fields&trashed=true"
        );
    }

    #[test]
    fn test_asset_with_type_fields() {
        let json = r#"{
            "asset": {
                "id": 3,
                "display_id": 14,
                "name": "MBP-0014",
                "asset_tag": "ASSET-14",
                "usage_type": "permanent",
                "assigned_on": "2023-11-20T12:00:00Z",
                "type_fields": {"product_7000": 12, "serial_number_7000": "C02XYZ"}
            }
        }"#;
        let asset = serde_json::from_str::<GetAssetResponse>(json).unwrap().asset;
        assert_eq!(asset.display_id, Some(14));
        assert_eq!(
            asset.type_fields.unwrap().get("serial_number_7000"),
            Some(&serde_json::json!("C02XYZ"))
        );
    }
}
