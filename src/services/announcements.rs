//! Announcement endpoints (`/api/v2/announcements`).

use crate::client::Client;
use crate::error::FreshserviceError;
use crate::filter::QueryFilter;
use crate::models::{Announcement, GetAnnouncementResponse, ListAnnouncementsResponse};

/// Accessor for announcement endpoints. Obtained with [`Client::announcements`].
#[derive(Debug, Clone, Copy)]
pub struct Announcements<'a> {
    client: &'a Client,
}

impl<'a> Announcements<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists announcements, optionally by state
    /// ([`AnnouncementListFilter`](crate::models::AnnouncementListFilter)).
    pub async fn list(
        &self,
        filter: Option<&dyn QueryFilter>,
    ) -> Result<Vec<Announcement>, FreshserviceError> {
        let response = self
            .client
            .get::<ListAnnouncementsResponse>("announcements", filter)
            .await?;

        Ok(response.data.announcements)
    }

    /// Gets a single announcement.
    pub async fn get(&self, id: u64) -> Result<Announcement, FreshserviceError> {
        let response = self
            .client
            .get::<GetAnnouncementResponse>(&format!("announcements/{}", id), None)
            .await?;

        Ok(response.data.announcement)
    }

    /// Creates an announcement.
    pub async fn create(
        &self,
        announcement: &Announcement,
    ) -> Result<Announcement, FreshserviceError> {
        let response: GetAnnouncementResponse =
            self.client.post("announcements", announcement).await?;
        Ok(response.announcement)
    }

    /// Updates an announcement.
    pub async fn update(
        &self,
        id: u64,
        announcement: &Announcement,
    ) -> Result<Announcement, FreshserviceError> {
        let response: GetAnnouncementResponse = self
            .client
            .put(&format!("announcements/{}", id), announcement)
            .await?;
        Ok(response.announcement)
    }

    /// Deletes an announcement.
    pub async fn delete(&self, id: u64) -> Result<(), FreshserviceError> {
        self.client.delete(&format!("announcements/{}", id)).await
    }
}
