//! Data models for the Freshservice API.
//!
//! This module contains the entity types for each resource, the list and
//! detail envelopes Freshservice wraps them in, the query filters list
//! endpoints accept, and common types such as the error payload.

mod agent;
mod announcement;
mod application;
mod asset;
mod business_hours;
mod common;
mod service_catalog;
mod task;
mod ticket;

pub use agent::*;
pub use announcement::*;
pub use application::*;
pub use asset::*;
pub use business_hours::*;
pub use common::*;
pub use service_catalog::*;
pub use task::*;
pub use ticket::*;
