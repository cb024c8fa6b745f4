use std::time::Instant;

use reqwest::{Client, ClientBuilder};

use crate::config::Config;
use crate::error::{AppError, Result};

/// Number of characters returned to the caller from a fetched page.
pub const EXCERPT_CHARS: usize = 200;

/// Builds the shared client so connections are pooled across requests.
pub fn build_client(config: &Config) -> Result<Client> {
    ClientBuilder::new()
        .timeout(config.fetch_timeout)
        .connect_timeout(config.connect_timeout)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Issues a single GET and reads the whole body as text.
///
/// The status code is not inspected: an error page is content like any other.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let started = Instant::now();
    let response = client.get(url).send().await?;
    let status = response.status();
    let text = response.text().await?;
    tracing::info!(
        url,
        status = status.as_u16(),
        bytes = text.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fetched page"
    );
    Ok(text)
}

/// Returns the first `max_chars` Unicode scalar values of `text`.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
