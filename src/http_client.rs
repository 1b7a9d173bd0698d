use std::time::Duration;

use anyhow::{Context, Result, bail};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// GET a JSON endpoint and return the raw body. Any non-success status is an
/// error; callers decide whether that fails the whole batch or a single game.
pub fn fetch_json(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().context("request failed")?;
    let status = response.status();
    if !status.is_success() {
        bail!("http status {status}");
    }
    response.text().context("failed to read response body")
}
