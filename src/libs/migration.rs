//! Assembly of the namespace hierarchy from a flat export.
//!
//! ## Process Flow
//!
//! 1. **Validation**: every id reference must resolve, otherwise the run stops
//!    before any download starts
//! 2. **Indexing**: children are grouped by owner once
//! 3. **Folders**: each folder becomes a namespace whose lists follow the
//!    folder's declared member order
//! 4. **Orphans**: lists no folder claimed are collected, in source order, under
//!    one synthetic namespace that only appears when it has lists
//!
//! The run is all-or-nothing: the first failure aborts it and no partial
//! hierarchy is returned.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taskmig::libs::http::HttpFetcher;
//! use taskmig::libs::migration::Migrator;
//!
//! let migrator = Migrator::new(HttpFetcher::new(4, None)?, "Migrated from wunderlist");
//! let namespaces = migrator.build(&export).await?;
//! ```

use super::converter::TaskConverter;
use super::error::MigrationError;
use super::hierarchy::{List, Namespace};
use super::index::ReferenceIndex;
use super::source::{self, Export};
use super::timestamp::to_epoch;
use crate::api::{AttachmentResolver, Fetch};
use futures::{stream, StreamExt, TryStreamExt};
use std::collections::HashSet;
use std::future::Future;

/// Number of tasks and attachments converted concurrently when not configured.
pub const DEFAULT_CONCURRENCY: usize = 4;

pub struct Migrator<F> {
    resolver: AttachmentResolver<F>,
    fallback_namespace: String,
    concurrency: usize,
}

impl<F: Fetch> Migrator<F> {
    /// `fallback_namespace` names the namespace that receives orphan lists.
    pub fn new(fetcher: F, fallback_namespace: impl Into<String>) -> Self {
        Self {
            resolver: AttachmentResolver::new(fetcher),
            fallback_namespace: fallback_namespace.into(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Converts `export` into an ordered sequence of namespaces.
    ///
    /// # Errors
    ///
    /// - [`MigrationError::MissingReference`] for the first dangling id
    /// - [`MigrationError::TimestampFormat`] for a malformed due date
    /// - [`MigrationError::AttachmentFetch`] for the first failed download in
    ///   source order
    pub async fn build(&self, export: &Export) -> Result<Vec<Namespace>, MigrationError> {
        if let Some(dangling) = ReferenceIndex::dangling_references(export).into_iter().next() {
            return Err(MigrationError::MissingReference(dangling));
        }

        let index = ReferenceIndex::build(export);
        let converter = TaskConverter::new(&self.resolver, self.concurrency);
        let mut claimed: HashSet<i64> = HashSet::new();
        let mut namespaces = Vec::with_capacity(export.folders.len() + 1);

        for folder in &export.folders {
            tracing::debug!(folder_id = folder.id, title = %folder.title, "converting folder");
            let mut namespace = Namespace {
                name: folder.title.clone(),
                created: to_epoch(&folder.created_at),
                updated: to_epoch(&folder.updated_at),
                lists: Vec::with_capacity(folder.list_ids.len()),
            };

            // Every member id resolves; dangling ones were rejected above.
            for list in folder.list_ids.iter().filter_map(|&id| index.list(id)) {
                // A list named by several folders stays with the first one.
                if !claimed.insert(list.id) {
                    tracing::warn!(folder_id = folder.id, list_id = list.id, "list already claimed by an earlier folder");
                    continue;
                }
                namespace.lists.push(self.convert_list(list, &index, &converter).await?);
            }

            namespaces.push(namespace);
        }

        let mut fallback = Namespace {
            name: self.fallback_namespace.clone(),
            ..Default::default()
        };
        for list in &export.lists {
            if claimed.insert(list.id) {
                tracing::debug!(list_id = list.id, "list has no folder");
                fallback.lists.push(self.convert_list(list, &index, &converter).await?);
            }
        }
        if !fallback.lists.is_empty() {
            namespaces.push(fallback);
        }

        Ok(namespaces)
    }

    /// Runs [`Migrator::build`] until `shutdown` resolves.
    ///
    /// When `shutdown` wins, every in-flight download is dropped and the call
    /// fails with [`MigrationError::Cancelled`].
    pub async fn build_until(
        &self,
        export: &Export,
        shutdown: impl Future<Output = ()>,
    ) -> Result<Vec<Namespace>, MigrationError> {
        tokio::select! {
            result = self.build(export) => result,
            _ = shutdown => Err(MigrationError::Cancelled),
        }
    }

    async fn convert_list(
        &self,
        list: &source::List,
        index: &ReferenceIndex<'_>,
        converter: &TaskConverter<'_, F>,
    ) -> Result<List, MigrationError> {
        tracing::debug!(list_id = list.id, title = %list.title, "converting list");
        let tasks = stream::iter(index.tasks_of(list.id).iter().copied())
            .map(|task| converter.convert(task, index))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        Ok(List {
            title: list.title.clone(),
            created: to_epoch(&list.created_at),
            tasks,
        })
    }
}
