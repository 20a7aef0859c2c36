use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::GlobalConfig;
use crate::invite::InviteFile;

pub fn run(file: &Path, output: Option<PathBuf>, stdout: bool, config: &GlobalConfig) -> Result<()> {
    let doc = InviteFile::load(file)?.into_document(config)?;
    let output = output.unwrap_or_else(|| config.default_output.clone());

    tracing::debug!(events = doc.events().len(), "Loaded invite");
    super::emit(&doc, &output, stdout)
}
