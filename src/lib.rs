//! # freshservice
//!
//! A typed async client for the Freshservice v2 REST API.
//!
//! ## Features
//!
//! - **Resources**: tickets, tasks, agents, announcements, applications,
//!   assets, business hours and the service catalog
//! - **Pagination**: list calls return the next-page token from the `Link`
//!   header, which is passed back as the next call's filter
//! - **Errors**: structured Freshservice error payloads are surfaced intact
//!   in [`FreshserviceError::Api`]
//! - **Security**: the API key is never logged or printed by `Debug`
//!
//! ## Architecture
//!
//! - [`config`] - Client configuration, from code or environment variables
//! - [`error`] - The error type returned by every operation
//! - [`client`] - The request pipeline and the [`Client`] handle
//! - [`filter`] - The [`QueryFilter`] capability accepted by list calls
//! - [`pagination`] - `Link` header parsing
//! - [`services`] - One accessor per Freshservice resource
//! - [`models`] - Entities, response envelopes and list filters
//!
//! ## Configuration
//!
//! [`Config::from_env`] reads:
//!
//! - `FRESHSERVICE_DOMAIN`: account domain, e.g. `acme.freshservice.com`
//! - `FRESHSERVICE_API_KEY`: agent API key
//!
//! Optional:
//! - `FRESHSERVICE_USERNAME`: account username
//! - `FRESHSERVICE_TIMEOUT_SECS`: request timeout (default 300)
//!
//! ## Retries and cancellation
//!
//! Every call performs exactly one HTTP request and never retries. To bound
//! or cancel a call, drop its future or wrap it in `tokio::time::timeout`.
//!
//! ## Example
//!
//! ```ignore
//! use freshservice::models::{AgentFilterBy, AgentListFilter};
//! use freshservice::{Client, Config};
//!
//! async fn example() -> Result<(), freshservice::FreshserviceError> {
//!     let config = Config::new("acme.freshservice.com", "your-api-key");
//!     let client = Client::new(&config)?;
//!
//!     let filter = AgentListFilter::by(AgentFilterBy::Active);
//!     let mut page = client.agents().list(Some(&filter)).await?;
//!     loop {
//!         for agent in &page.items {
//!             println!("{:?} {:?}", agent.id, agent.email);
//!         }
//!         if !page.has_next_page() {
//!             break;
//!         }
//!         page = client.agents().list(Some(&page.next_page)).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod services;

pub use client::{ApiRequest, ApiResponse, Client};
pub use config::Config;
pub use error::FreshserviceError;
pub use filter::QueryFilter;
