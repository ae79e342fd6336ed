//! Export conversion command.
//!
//! Loads a JSON export dump, runs the migration pipeline (downloading every
//! attachment) and writes the resulting hierarchy as JSON, `hierarchy.json` by
//! default. Attachment payloads are base64 encoded in the output. Ctrl-C aborts
//! the run; nothing is written unless the whole export converted.

use super::load_export;
use crate::{
    libs::{
        config::Config,
        error::MigrationError,
        hierarchy::{Namespace, Summary},
        http::HttpFetcher,
        messages::Message,
        migration::Migrator,
    },
    msg_bail_anyhow, msg_debug, msg_error, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Path to the JSON export dump
    export: PathBuf,

    /// Where to write the hierarchy
    #[arg(short, long, default_value = "hierarchy.json")]
    output: PathBuf,

    /// Source service name used to label the namespace for lists without a folder
    #[arg(long)]
    source_name: Option<String>,

    /// Maximum concurrent attachment downloads
    #[arg(short, long)]
    concurrency: Option<usize>,

    /// Per-download timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,
}

impl ConvertArgs {
    /// Applies command-line overrides on top of the stored configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(source_name) = &self.source_name {
            config.source_name = source_name.clone();
            config.fallback_namespace = None;
        }
        if let Some(concurrency) = self.concurrency {
            config.fetch_concurrency = concurrency.max(1);
        }
        // Zero means no timeout, as in the config file.
        if let Some(timeout) = self.timeout {
            config.fetch_timeout_secs = (timeout > 0).then_some(timeout);
        }
        config
    }
}

pub async fn cmd(args: ConvertArgs) -> Result<()> {
    let config = match Config::read() {
        Ok(config) => config,
        Err(e) => {
            msg_error!(Message::ConfigLoadFailed(e.to_string()));
            Config::default()
        }
    };
    let config = args.apply(config);
    msg_debug!(format!("effective configuration: {:?}", config));

    let export = load_export(&args.export)?;
    msg_info!(Message::ExportLoaded {
        folders: export.folders.len(),
        lists: export.lists.len(),
        tasks: export.tasks.len(),
    });

    let fetcher = HttpFetcher::new(config.fetch_concurrency, config.fetch_timeout())
        .map_err(|e| msg_error_anyhow!(Message::HttpClientFailed(e.to_string())))?;
    let fallback = config.fallback_namespace();
    msg_info!(Message::MigrationStarted(fallback.clone()));

    let migrator = Migrator::new(fetcher, fallback).with_concurrency(config.fetch_concurrency);
    let shutdown = async {
        // If the signal handler cannot be installed the run simply cannot be interrupted.
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    let namespaces = match migrator.build_until(&export, shutdown).await {
        Ok(namespaces) => namespaces,
        Err(MigrationError::Cancelled) => msg_bail_anyhow!(Message::MigrationCancelled),
        Err(e) => {
            if e.is_retryable() {
                msg_info!(Message::MigrationRetryHint);
            }
            msg_bail_anyhow!(Message::MigrationFailed(e.to_string()));
        }
    };

    write_hierarchy(&args.output, &namespaces)?;

    let summary = Summary::of(&namespaces);
    msg_success!(Message::MigrationCompleted {
        namespaces: summary.namespaces,
        lists: summary.lists,
        tasks: summary.tasks,
        attachments: summary.attachments,
        reminders: summary.reminders,
    });
    Ok(())
}

/// Writes `namespaces` as pretty JSON to `output`.
///
/// A write that fails halfway removes the partial file.
pub fn write_hierarchy(output: &Path, namespaces: &[Namespace]) -> Result<()> {
    let output_path = output.display().to_string();
    let written = File::create(output).and_then(|file| {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, namespaces)?;
        writer.flush()
    });

    if let Err(e) = written {
        if output.exists() {
            let _ = fs::remove_file(output);
        }
        return Err(msg_error_anyhow!(Message::HierarchyWriteFailed(output_path, e.to_string())));
    }

    msg_success!(Message::HierarchyWritten(output_path));
    Ok(())
}
