//! Offline inspection of an export.
//!
//! Shows how folders group lists, which lists would land in the fallback
//! namespace, and every id reference that would make `convert` fail. Nothing
//! is downloaded.

use super::load_export;
use crate::{
    libs::{index::ReferenceIndex, messages::Message, view::View},
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the JSON export dump
    export: PathBuf,
}

pub fn cmd(args: CheckArgs) -> Result<()> {
    let export = load_export(&args.export)?;
    msg_info!(Message::ExportLoaded {
        folders: export.folders.len(),
        lists: export.lists.len(),
        tasks: export.tasks.len(),
    });

    let index = ReferenceIndex::build(&export);

    msg_print!(Message::CheckFoldersHeader, true);
    View::folders(&export, &index);

    let orphans = ReferenceIndex::orphan_lists(&export);
    if orphans.is_empty() {
        msg_success!(Message::NoOrphanLists);
    } else {
        msg_print!(Message::CheckOrphansHeader, true);
        View::orphans(&orphans, &index);
    }

    let dangling = ReferenceIndex::dangling_references(&export);
    if dangling.is_empty() {
        msg_success!(Message::NoDanglingReferences);
    } else {
        msg_print!(Message::CheckDanglingHeader, true);
        View::dangling(&dangling);
        msg_warning!(Message::DanglingReferencesFound(dangling.len()));
    }

    Ok(())
}
