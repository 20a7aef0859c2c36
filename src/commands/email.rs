use std::path::Path;

use anyhow::Result;
use invite_core::export::generate_boundary;

use crate::config::GlobalConfig;
use crate::invite::InviteFile;

pub fn run(file: &Path, boundary: Option<String>, config: &GlobalConfig) -> Result<()> {
    let doc = InviteFile::load(file)?.into_document(config)?;
    let boundary = boundary.unwrap_or_else(generate_boundary);

    tracing::debug!(%boundary, "Composing email body");
    print!("{}", doc.to_email_body(&boundary)?);

    Ok(())
}
