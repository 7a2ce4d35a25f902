//! Service catalog endpoints (`/api/v2/service_catalog`).

use crate::client::Client;
use crate::error::FreshserviceError;
use crate::filter::QueryFilter;
use crate::models::{
    GetServiceItemResponse, ListServiceCategoriesResponse, ListServiceItemsResponse,
    ServiceCategory, ServiceItem,
};

/// Accessor for service catalog endpoints. Obtained with [`Client::service_catalog`].
#[derive(Debug, Clone, Copy)]
pub struct ServiceCatalog<'a> {
    client: &'a Client,
}

impl<'a> ServiceCatalog<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists service items, optionally within one category
    /// ([`ServiceItemListFilter`](crate::models::ServiceItemListFilter)).
    pub async fn list(
        &self,
        filter: Option<&dyn QueryFilter>,
    ) -> Result<Vec<ServiceItem>, FreshserviceError> {
        let response = self
            .client
            .get::<ListServiceItemsResponse>("service_catalog/items", filter)
            .await?;

        Ok(response.data.service_items)
    }

    /// Lists service catalog categories.
    pub async fn categories(&self) -> Result<Vec<ServiceCategory>, FreshserviceError> {
        let response = self
            .client
            .get::<ListServiceCategoriesResponse>("service_catalog/categories", None)
            .await?;

        Ok(response.data.service_categories)
    }

    /// Gets a single service item by its display ID.
    pub async fn get(&self, display_id: u64) -> Result<ServiceItem, FreshserviceError> {
        let response = self
            .client
            .get::<GetServiceItemResponse>(&format!("service_catalog/items/{}", display_id), None)
            .await?;

        Ok(response.data.service_item)
    }
}
