//! Outbound access to the source service.
//!
//! The only traffic a migration generates is downloading attachment payloads.
//! [`Fetch`] is the seam between the pipeline and the transport: production
//! code uses [`crate::libs::http::HttpFetcher`], tests plug in an in-memory
//! implementation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taskmig::api::AttachmentResolver;
//! use taskmig::libs::http::HttpFetcher;
//!
//! let resolver = AttachmentResolver::new(HttpFetcher::new(4, None)?);
//! let attachment = resolver.resolve(&file).await?;
//! ```

use crate::libs::error::FetchError;

pub mod attachments;

pub use attachments::AttachmentResolver;

/// Retrieves the raw bytes behind a URL.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    /// Downloads the full body of `url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] for transport failures and
    /// [`FetchError::Status`] when the response status is not a success.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url).await
    }
}
