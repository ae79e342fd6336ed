//! Core library modules for taskmig.
//!
//! ## Features
//!
//! - **Source Model**: Typed records of a flat task-service export
//! - **Reference Index**: Owner-to-children lookups built once per run
//! - **Conversion**: Timestamp normalization, task conversion, hierarchy assembly
//! - **Infrastructure**: Configuration, data storage, messaging, terminal views
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taskmig::libs::{http::HttpFetcher, migration::Migrator, source::Export};
//!
//! let export = Export::from_json(&std::fs::read_to_string("export.json")?)?;
//! let migrator = Migrator::new(HttpFetcher::new(4, None)?, "Migrated from wunderlist");
//! let namespaces = migrator.build(&export).await?;
//! ```

pub mod config;
pub mod converter;
pub mod data_storage;
pub mod error;
pub mod hierarchy;
pub mod http;
pub mod index;
pub mod messages;
pub mod migration;
pub mod source;
pub mod task;
pub mod timestamp;
pub mod view;
