//! freshservice - list recent Freshservice tickets
//!
//! A small command-line check that the client can reach an account: it
//! prints the first page of tickets and the token for the next one.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `FRESHSERVICE_DOMAIN`: account domain, e.g. `acme.freshservice.com`
//! - `FRESHSERVICE_API_KEY`: agent API key
//! - `FRESHSERVICE_REQUESTER_EMAIL` (optional): only list this requester's tickets
//!
//! # Usage
//!
//! ```bash
//! FRESHSERVICE_DOMAIN=acme.freshservice.com FRESHSERVICE_API_KEY=xxx ./freshservice
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use freshservice::models::TicketListOptions;
use freshservice::{Client, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Logs go to stderr so the ticket listing on stdout stays clean
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("freshservice=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::debug!(?config, "Configuration loaded");

    let client = Client::new(&config).context("Failed to create Freshservice client")?;

    let mut options = TicketListOptions::new();
    if let Ok(email) = std::env::var("FRESHSERVICE_REQUESTER_EMAIL") {
        tracing::info!(requester = %email, "Filtering tickets by requester");
        options = options.with_requester_email(email);
    }

    let page = client
        .tickets()
        .list(Some(&options))
        .await
        .with_context(|| format!("Failed to list tickets on {}", client.domain()))?;

    tracing::info!(count = page.items.len(), "Tickets fetched");

    for ticket in &page.items {
        println!(
            "#{}\t{}\t{}",
            ticket.id.unwrap_or_default(),
            ticket.status.unwrap_or_default(),
            ticket.subject.as_deref().unwrap_or("(no subject)")
        );
    }

    if page.has_next_page() {
        println!("next page: {}", page.next_page);
    }

    Ok(())
}
