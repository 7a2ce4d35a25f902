//! Ticket endpoints (`/api/v2/tickets`).

use crate::client::Client;
use crate::error::FreshserviceError;
use crate::filter::QueryFilter;
use crate::models::{GetTicketResponse, ListTicketsResponse, Page, Ticket};

/// Accessor for ticket endpoints. Obtained with [`Client::tickets`].
#[derive(Debug, Clone, Copy)]
pub struct Tickets<'a> {
    client: &'a Client,
}

impl<'a> Tickets<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists one page of tickets.
    ///
    /// Without a filter Freshservice returns tickets created in the last 30
    /// days. Pass a [`TicketListOptions`](crate::models::TicketListOptions)
    /// to narrow the list, or the previous page's token to continue.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let options = TicketListOptions::new().with_requester_email("ada@example.com");
    /// let page = client.tickets().list(Some(&options)).await?;
    /// if page.has_next_page() {
    ///     let next = client.tickets().list(Some(&page.next_page)).await?;
    /// }
    /// ```
    pub async fn list(
        &self,
        filter: Option<&dyn QueryFilter>,
    ) -> Result<Page<Ticket>, FreshserviceError> {
        let response = self
            .client
            .get::<ListTicketsResponse>("tickets", filter)
            .await?;

        Ok(Page::new(response.data.tickets, response.next_page))
    }

    /// Gets a single ticket.
    ///
    /// The filter may request embeds (requester, stats).
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::NotFound` if the ticket doesn't exist.
    pub async fn get(
        &self,
        id: u64,
        filter: Option<&dyn QueryFilter>,
    ) -> Result<Ticket, FreshserviceError> {
        let response = self
            .client
            .get::<GetTicketResponse>(&format!("tickets/{}", id), filter)
            .await?;

        Ok(response.data.ticket)
    }

    /// Creates a ticket. Only the fields set on `ticket` are sent.
    pub async fn create(&self, ticket: &Ticket) -> Result<Ticket, FreshserviceError> {
        let response: GetTicketResponse = self.client.post("tickets", ticket).await?;
        Ok(response.ticket)
    }

    /// Updates a ticket with the fields set on `ticket`.
    pub async fn update(&self, id: u64, ticket: &Ticket) -> Result<Ticket, FreshserviceError> {
        let response: GetTicketResponse =
            self.client.put(&format!("tickets/{}", id), ticket).await?;
        Ok(response.ticket)
    }
}
