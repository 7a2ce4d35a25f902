//! Resource accessors.
//!
//! Each accessor borrows a [`Client`](crate::Client) and maps one Freshservice
//! resource onto the request pipeline. They hold no state of their own, so
//! they are obtained per call:
//!
//! ```ignore
//! let agent = client.agents().get(19000).await?;
//! let tasks = client.tasks().list(101).await?;
//! ```

mod agents;
mod announcements;
mod applications;
mod assets;
mod business_hours;
mod service_catalog;
mod tasks;
mod tickets;

pub use agents::Agents;
pub use announcements::Announcements;
pub use applications::Applications;
pub use assets::Assets;
pub use business_hours::BusinessHoursService;
pub use service_catalog::ServiceCatalog;
pub use tasks::Tasks;
pub use tickets::Tickets;
