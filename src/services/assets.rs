//! Asset endpoints (`/api/v2/assets`).

use crate::client::Client;
use crate::error::FreshserviceError;
use crate::filter::QueryFilter;
use crate::models::{Asset, GetAssetResponse, ListAssetsResponse, Page};

/// Accessor for asset endpoints. Obtained with [`Client::assets`].
#[derive(Debug, Clone, Copy)]
pub struct Assets<'a> {
    client: &'a Client,
}

impl<'a> Assets<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists one page of assets.
    ///
    /// See [`AssetListOptions`](crate::models::AssetListOptions) for sorting,
    /// embeds and the trash.
    pub async fn list(
        &self,
        filter: Option<&dyn QueryFilter>,
    ) -> Result<Page<Asset>, FreshserviceError> {
        let response = self
            .client
            .get::<ListAssetsResponse>("assets", filter)
            .await?;

        Ok(Page::new(response.data.assets, response.next_page))
    }

    /// Gets a single asset by its display ID.
    pub async fn get(&self, display_id: u64) -> Result<Asset, FreshserviceError> {
        let response = self
            .client
            .get::<GetAssetResponse>(&format!("assets/{}", display_id), None)
            .await?;

        Ok(response.data.asset)
    }
}
