use crate::api::Fetch;
use crate::libs::error::FetchError;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::Semaphore;

/// HTTP GET fetcher with a cap on concurrent downloads.
///
/// Redirects follow the `reqwest` default policy. There is no retry.
pub struct HttpFetcher {
    client: Client,
    permits: Semaphore,
}

impl HttpFetcher {
    /// `max_in_flight` is clamped to at least one; `timeout` applies per request.
    pub fn new(max_in_flight: usize, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            permits: Semaphore::new(max_in_flight.max(1)),
        })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        // The semaphore is never closed, so acquire cannot fail.
        let _permit = self.permits.acquire().await.ok();

        let res = self.client.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(res.bytes().await?.to_vec())
    }
}
