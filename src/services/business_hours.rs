//! Business hours endpoints (`/api/v2/business_hours`).

use crate::client::Client;
use crate::error::FreshserviceError;
use crate::models::{BusinessHours, GetBusinessHoursResponse, ListBusinessHoursResponse};

/// Accessor for business hours endpoints. Obtained with [`Client::business_hours`].
#[derive(Debug, Clone, Copy)]
pub struct BusinessHoursService<'a> {
    client: &'a Client,
}

impl<'a> BusinessHoursService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists all business hours configurations.
    pub async fn list(&self) -> Result<Vec<BusinessHours>, FreshserviceError> {
        let response = self
            .client
            .get::<ListBusinessHoursResponse>("business_hours", None)
            .await?;

        Ok(response.data.business_hours)
    }

    /// Gets a single configuration.
    pub async fn get(&self, id: u64) -> Result<BusinessHours, FreshserviceError> {
        let response = self
            .client
            .get::<GetBusinessHoursResponse>(&format!("business_hours/{}", id), None)
            .await?;

        Ok(response.data.business_hours)
    }
}
