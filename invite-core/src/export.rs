//! Wrappers that hand rendered invitations to the outside world.
//!
//! Both operate on the output of [`CalendarDocument::render`] as an opaque
//! payload.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use uuid::Uuid;

use crate::calendar::CalendarDocument;
use crate::error::InviteResult;
use crate::ics::CRLF;

/// File name used when the caller does not pick one.
pub const DEFAULT_FILE_NAME: &str = "invite.ics";

/// Name of the attachment part in email bodies.
pub const ATTACHMENT_NAME: &str = "invite.ics";

/// Maximum base64 line length in MIME bodies (RFC 2045 §6.8).
const BASE64_LINE_LEN: usize = 76;

impl CalendarDocument {
    /// Writes the rendered document to `path`, adding `.ics` when the path
    /// has no extension.
    ///
    /// Returns whether any bytes were written.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> InviteResult<bool> {
        let ics = self.render()?;
        let path = ics_file_path(path.as_ref());

        std::fs::write(&path, ics.as_bytes())?;
        tracing::debug!(path = %path.display(), bytes = ics.len(), "Wrote invite file");

        Ok(!ics.is_empty())
    }

    /// Builds a MIME multipart body carrying the invite twice: inline as
    /// `text/calendar` and as a base64 `application/ics` attachment.
    pub fn to_email_body(&self, boundary: &str) -> InviteResult<String> {
        let invite = self.render()?;
        let mut msg = String::new();

        msg.push_str(&format!("--{boundary}{CRLF}"));
        msg.push_str(&format!(
            "Content-Type: text/calendar; charset=\"UTF-8\"; method={}{CRLF}",
            self.identity().method
        ));
        msg.push_str(&format!("Content-Transfer-Encoding: 7bit{CRLF}{CRLF}"));
        msg.push_str(&invite);
        msg.push_str(CRLF);

        msg.push_str(&format!("--{boundary}{CRLF}"));
        msg.push_str(&format!(
            "Content-Type: application/ics; name=\"{ATTACHMENT_NAME}\"{CRLF}"
        ));
        msg.push_str(&format!(
            "Content-Disposition: attachment; filename=\"{ATTACHMENT_NAME}\"{CRLF}"
        ));
        msg.push_str(&format!("Content-Transfer-Encoding: base64{CRLF}{CRLF}"));
        msg.push_str(&wrap_base64(&STANDARD.encode(invite.as_bytes())));
        msg.push_str(CRLF);

        msg.push_str(&format!("--{boundary}--{CRLF}"));

        Ok(msg)
    }
}

/// Generates a random multipart boundary token.
#[must_use]
pub fn generate_boundary() -> String {
    format!("invite-{}", Uuid::new_v4().simple())
}

/// The path [`CalendarDocument::write_to_file`] actually writes to: `path`
/// itself, or `path` with `.ics` when it has no extension.
#[must_use]
pub fn ics_file_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("ics")
    }
}

/// base64 output is ASCII, so splitting on bytes is safe.
fn wrap_base64(encoded: &str) -> String {
    encoded
        .as_bytes()
        .chunks(BASE64_LINE_LEN)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(CRLF)
}
