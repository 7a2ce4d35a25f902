//! Ticket task endpoints (`/api/v2/tickets/{id}/tasks`).

use crate::client::Client;
use crate::error::FreshserviceError;
use crate::models::{GetTaskResponse, ListTasksResponse, Task};

/// Accessor for the tasks of a ticket. Obtained with [`Client::tasks`].
#[derive(Debug, Clone, Copy)]
pub struct Tasks<'a> {
    client: &'a Client,
}

impl<'a> Tasks<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists all tasks of a ticket.
    pub async fn list(&self, ticket_id: u64) -> Result<Vec<Task>, FreshserviceError> {
        let response = self
            .client
            .get::<ListTasksResponse>(&tasks_path(ticket_id), None)
            .await?;

        Ok(response.data.tasks)
    }

    /// Gets one task of a ticket.
    pub async fn get(&self, ticket_id: u64, task_id: u64) -> Result<Task, FreshserviceError> {
        let response = self
            .client
            .get::<GetTaskResponse>(&task_path(ticket_id, task_id), None)
            .await?;

        Ok(response.data.task)
    }

    /// Adds a task to a ticket.
    pub async fn create(&self, ticket_id: u64, task: &Task) -> Result<Task, FreshserviceError> {
        let response: GetTaskResponse = self.client.post(&tasks_path(ticket_id), task).await?;
        Ok(response.task)
    }

    /// Updates a task of a ticket.
    pub async fn update(
        &self,
        ticket_id: u64,
        task_id: u64,
        task: &Task,
    ) -> Result<Task, FreshserviceError> {
        let response: GetTaskResponse = self
            .client
            .put(&task_path(ticket_id, task_id), task)
            .await?;
        Ok(response.task)
    }

    /// Deletes a task of a ticket.
    pub async fn delete(&self, ticket_id: u64, task_id: u64) -> Result<(), FreshserviceError> {
        self.client.delete(&task_path(ticket_id, task_id)).await
    }
}

fn tasks_path(ticket_id: u64) -> String {
    format!("tickets/{}/tasks", ticket_id)
}

fn task_path(ticket_id: u64, task_id: u64) -> String {
    format!("tickets/{}/tasks/{}", ticket_id, task_id)
}
