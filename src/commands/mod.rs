pub mod check;
pub mod convert;
pub mod init;

use crate::libs::messages::Message;
use crate::libs::source::Export;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure migration settings")]
    Init(init::InitArgs),
    #[command(about = "Inspect an export without converting it")]
    Check(check::CheckArgs),
    #[command(about = "Convert an export into a namespace hierarchy")]
    Convert(convert::ConvertArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Check(args) => check::cmd(args),
            Commands::Convert(args) => convert::cmd(args).await,
        }
    }
}

/// Reads and parses a JSON export dump.
pub(crate) fn load_export(path: &Path) -> Result<Export> {
    let export_path = path.display().to_string();
    let json =
        fs::read_to_string(path).map_err(|e| msg_error_anyhow!(Message::ExportReadFailed(export_path.clone(), e.to_string())))?;
    Export::from_json(&json).map_err(|e| msg_error_anyhow!(Message::ExportParseFailed(export_path, e.to_string())))
}
