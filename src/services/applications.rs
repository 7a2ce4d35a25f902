//! Software application endpoints (`/api/v2/applications`).

use crate::client::Client;
use crate::error::FreshserviceError;
use crate::filter::QueryFilter;
use crate::models::{
    Application, ApplicationUser, GetApplicationResponse, Installation, License,
    ListApplicationUsersResponse, ListApplicationsResponse, ListInstallationsResponse,
    ListLicensesResponse, Page,
};

/// Accessor for application endpoints. Obtained with [`Client::applications`].
#[derive(Debug, Clone, Copy)]
pub struct Applications<'a> {
    client: &'a Client,
}

impl<'a> Applications<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists one page of applications.
    pub async fn list(
        &self,
        filter: Option<&dyn QueryFilter>,
    ) -> Result<Page<Application>, FreshserviceError> {
        let response = self
            .client
            .get::<ListApplicationsResponse>("applications", filter)
            .await?;

        Ok(Page::new(response.data.applications, response.next_page))
    }

    /// Gets a single application.
    pub async fn get(&self, id: u64) -> Result<Application, FreshserviceError> {
        let response = self
            .client
            .get::<GetApplicationResponse>(&format!("applications/{}", id), None)
            .await?;

        Ok(response.data.application)
    }

    /// Lists the licenses held for an application.
    pub async fn licenses(&self, id: u64) -> Result<Vec<License>, FreshserviceError> {
        let response = self
            .client
            .get::<ListLicensesResponse>(&format!("applications/{}/licenses", id), None)
            .await?;

        Ok(response.data.licenses)
    }

    /// Lists the users of an application.
    pub async fn users(&self, id: u64) -> Result<Vec<ApplicationUser>, FreshserviceError> {
        let response = self
            .client
            .get::<ListApplicationUsersResponse>(&format!("applications/{}/users", id), None)
            .await?;

        Ok(response.data.application_users)
    }

    /// Lists the installations of an application.
    pub async fn installations(&self, id: u64) -> Result<Vec<Installation>, FreshserviceError> {
        let response = self
            .client
            .get::<ListInstallationsResponse>(&format!("applications/{}/installations", id), None)
            .await?;

        Ok(response.data.installations)
    }
}
