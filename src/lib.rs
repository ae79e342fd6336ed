//! # Taskmig - task export migration
//!
//! Converts the flat, id-linked export of a task-management service into a
//! nested namespace → list → task hierarchy, downloading attachment payloads
//! along the way.
//!
//! ## Features
//!
//! - **Reference Resolution**: Folder, list, task and child records linked by id
//!   become an owned tree
//! - **Orphan Handling**: Lists without a folder land in one synthetic namespace
//! - **Timestamp Normalization**: Every date becomes epoch seconds
//! - **Attachments**: Payloads fetched over HTTP with bounded, order-preserving concurrency
//! - **All-or-nothing**: The first failure aborts the run with a typed error
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmig::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
