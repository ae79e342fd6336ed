//! Turns source file records into self-contained attachments.

use super::Fetch;
use crate::libs::error::MigrationError;
use crate::libs::source::File;
use crate::libs::task::{Attachment, AttachmentFile};
use crate::libs::timestamp::to_epoch;

/// Downloads attachment payloads and assembles [`Attachment`]s.
///
/// Each call handles exactly one file; a failure is reported for that file
/// only and never retried here.
#[derive(Debug)]
pub struct AttachmentResolver<F> {
    fetcher: F,
}

impl<F: Fetch> AttachmentResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetches the payload of `file` and combines it with the file metadata.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::AttachmentFetch`] carrying the file URL when
    /// the download fails or the server answers with a non-success status.
    pub async fn resolve(&self, file: &File) -> Result<Attachment, MigrationError> {
        tracing::debug!(file_id = file.id, url = %file.url, "fetching attachment");
        let content = self
            .fetcher
            .fetch(&file.url)
            .await
            .map_err(|e| MigrationError::attachment_fetch(&file.url, e))?;

        let created = to_epoch(&file.created_at);
        Ok(Attachment {
            file: AttachmentFile {
                name: file.file_name.clone(),
                mime: file.content_type.clone(),
                size: file.file_size,
                created,
                content,
            },
            created,
        })
    }
}
