use std::path::Path;

use anyhow::{Context, Result};

/// Starter invite file written by `invite init`.
pub const SAMPLE_INVITE: &str = r#"# invite file
#
# Render with:   invite render invite.toml
# Email body:    invite email invite.toml

[calendar]
name = "Team Sync"
description = "Weekly team sync"

[[events]]
summary = "Standup"
description = "Daily check-in"
location = "Room 1"

# Integer = Unix seconds, string = written verbatim
start = 1767261600
end = "20260101T101500Z"

organizer = { email = "alice@example.com", name = "Alice" }
attendees = [
    { email = "bob@example.com", name = "Bob" },
]

# Reminders, e.g. "10m", "1h", "1day"
alarms = [{ before = "10m" }]
"#;

pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!(
            "{} already exists.\n\
            Remove it first or pick another path: invite init <PATH>",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, SAMPLE_INVITE)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalConfig;
    use crate::invite::InviteFile;

    #[test]
    fn sample_invite_renders() {
        let doc = InviteFile::parse(SAMPLE_INVITE)
            .unwrap()
            .into_document(&GlobalConfig::default())
            .unwrap();

        let ics = doc.render().unwrap();
        assert!(ics.contains("X-WR-CALNAME:Team Sync\r\n"));
        assert!(ics.contains("TRIGGER:-P0DT0H10M0S\r\n"));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invite.toml");

        run(&path).unwrap();
        assert!(run(&path).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), SAMPLE_INVITE);
    }
}
