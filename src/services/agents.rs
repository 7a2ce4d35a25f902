//! Agent endpoints (`/api/v2/agents`).

use reqwest::Method;

use crate::client::Client;
use crate::error::FreshserviceError;
use crate::filter::QueryFilter;
use crate::models::{Agent, GetAgentResponse, ListAgentsResponse, Page};

/// Accessor for agent endpoints. Obtained with [`Client::agents`].
#[derive(Debug, Clone, Copy)]
pub struct Agents<'a> {
    client: &'a Client,
}

impl<'a> Agents<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists one page of agents.
    ///
    /// Pass an [`AgentListFilter`](crate::models::AgentListFilter) to narrow
    /// the list, or the previous page's token to continue.
    pub async fn list(
        &self,
        filter: Option<&dyn QueryFilter>,
    ) -> Result<Page<Agent>, FreshserviceError> {
        let response = self
            .client
            .get::<ListAgentsResponse>("agents", filter)
            .await?;

        Ok(Page::new(response.data.agents, response.next_page))
    }

    /// Gets a single agent.
    pub async fn get(&self, id: u64) -> Result<Agent, FreshserviceError> {
        let response = self
            .client
            .get::<GetAgentResponse>(&format!("agents/{}", id), None)
            .await?;

        Ok(response.data.agent)
    }

    /// Creates an agent.
    ///
    /// # Errors
    ///
    /// Returns `FreshserviceError::Validation` without sending anything if
    /// one of the agent's roles has an invalid scope.
    pub async fn create(&self, agent: &Agent) -> Result<Agent, FreshserviceError> {
        validate_roles(agent)?;
        let response: GetAgentResponse = self.client.post("agents", agent).await?;
        Ok(response.agent)
    }

    /// Updates an agent with the fields set on `agent`.
    ///
    /// Roles are validated as in [`create`](Self::create).
    pub async fn update(&self, id: u64, agent: &Agent) -> Result<Agent, FreshserviceError> {
        validate_roles(agent)?;
        let response: GetAgentResponse =
            self.client.put(&format!("agents/{}", id), agent).await?;
        Ok(response.agent)
    }

    /// Permanently deletes an agent and their data. This cannot be undone.
    pub async fn delete(&self, id: u64) -> Result<(), FreshserviceError> {
        self.client.delete(&format!("agents/{}/forget", id)).await
    }

    /// Deactivates an agent. The agent is kept and can be reactivated.
    pub async fn deactivate(&self, id: u64) -> Result<Agent, FreshserviceError> {
        let response: GetAgentResponse = self
            .client
            .send(Method::DELETE, &format!("agents/{}", id))
            .await?;
        Ok(response.agent)
    }

    /// Reactivates a deactivated agent.
    pub async fn reactivate(&self, id: u64) -> Result<Agent, FreshserviceError> {
        let response: GetAgentResponse = self
            .client
            .send(Method::PUT, &format!("agents/{}/reactivate", id))
            .await?;
        Ok(response.agent)
    }

    /// Converts an agent into a requester, freeing their agent seat.
    pub async fn convert_to_requester(&self, id: u64) -> Result<Agent, FreshserviceError> {
        let response: GetAgentResponse = self
            .client
            .send(Method::PUT, &format!("agents/{}/convert_to_requester", id))
            .await?;
        Ok(response.agent)
    }
}

fn validate_roles(agent: &Agent) -> Result<(), FreshserviceError> {
    agent.roles.iter().try_for_each(|role| role.validate())
}
