pub mod email;
pub mod init;
pub mod new;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::Result;
use invite_core::export::ics_file_path;
use invite_core::CalendarDocument;

/// Write a rendered document to `path`, or print it when `stdout` is set.
pub fn emit(doc: &CalendarDocument, path: &Path, stdout: bool) -> Result<()> {
    if stdout {
        print!("{}", doc.render()?);
        return Ok(());
    }

    let written = write(doc, path)?;
    println!("Wrote {}", written.display());

    Ok(())
}

/// Writes `doc` and returns the path that now holds it.
fn write(doc: &CalendarDocument, path: &Path) -> Result<PathBuf> {
    let path = ics_file_path(path);
    if !doc.write_to_file(&path)? {
        anyhow::bail!("Nothing was written to {}", path.display());
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use invite_core::Event;

    fn make_test_document() -> CalendarDocument {
        let mut event = Event::new();
        event.set_summary("Standup");
        event.set_organizer("alice@example.com", None);
        event.add_attendee("bob@example.com", None);

        let mut doc = CalendarDocument::new();
        doc.add_event(event);
        doc
    }

    #[test]
    fn write_reports_path_with_added_extension() {
        let dir = tempfile::tempdir().unwrap();

        let written = write(&make_test_document(), &dir.path().join("standup")).unwrap();

        assert_eq!(written, dir.path().join("standup.ics"));
        assert!(written.exists());
        assert!(!dir.path().join("standup").exists());
    }

    #[test]
    fn write_keeps_explicit_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("standup.ics");

        assert_eq!(write(&make_test_document(), &path).unwrap(), path);
    }
}
