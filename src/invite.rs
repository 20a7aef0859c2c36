//! TOML invite files and their conversion into a `CalendarDocument`.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use invite_core::{CalendarDocument, CalendarIdentity, Event, EventTime};

use crate::config::GlobalConfig;

/// An invite file, e.g. `standup.toml`
#[derive(Debug, Deserialize)]
pub struct InviteFile {
    #[serde(default)]
    pub calendar: CalendarSection,

    #[serde(default)]
    pub events: Vec<EventSpec>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CalendarSection {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EventSpec {
    pub summary: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Integer = Unix seconds, string = pre-formatted value
    pub start: Option<EventTime>,
    pub end: Option<EventTime>,
    pub organizer: Option<ParticipantSpec>,
    #[serde(default)]
    pub attendees: Vec<ParticipantSpec>,
    #[serde(default)]
    pub alarms: Vec<AlarmSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantSpec {
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlarmSpec {
    /// How long before the start, e.g. "10m" or "1day"
    pub before: String,
    pub title: Option<String>,
}

impl InviteFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read invite file at {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse invite file at {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Builds the document. Validation (missing organizer, attendees,
    /// events) is left to rendering.
    pub fn into_document(self, config: &GlobalConfig) -> Result<CalendarDocument> {
        let mut doc = new_document(config);

        if let Some(name) = self.calendar.name {
            doc.set_name(name);
        }
        if let Some(description) = self.calendar.description {
            doc.set_description(description);
        }

        for (index, spec) in self.events.into_iter().enumerate() {
            let event = spec
                .into_event(config)
                .with_context(|| format!("Invalid event #{}", index + 1))?;
            doc.add_event(event);
        }

        Ok(doc)
    }
}

impl EventSpec {
    pub fn into_event(self, config: &GlobalConfig) -> Result<Event> {
        let mut event = Event::new();

        if let Some(summary) = self.summary {
            event.set_summary(summary);
        }
        event.set_description(self.description);
        event.set_location(self.location);

        if let Some(start) = self.start {
            event.set_start(start)?;
        }
        if let Some(end) = self.end {
            event.set_end(end)?;
        }

        if let Some(organizer) = self.organizer {
            event.set_organizer(organizer.email, organizer.name);
        }
        for attendee in self.attendees {
            event.add_attendee(attendee.email, attendee.name);
        }

        for alarm in self.alarms {
            event.add_alarm(parse_lead(&alarm.before)?, alarm.title);
        }
        if event.alarms().is_empty() {
            if let Some(default_alarm) = &config.default_alarm {
                event.add_alarm(parse_lead(default_alarm)?, None);
            }
        }

        Ok(event)
    }
}

/// A document carrying the configured identity.
pub fn new_document(config: &GlobalConfig) -> CalendarDocument {
    match &config.product_id {
        Some(product_id) => {
            CalendarDocument::with_identity(CalendarIdentity::with_product_id(product_id))
        }
        None => CalendarDocument::new(),
    }
}

/// Parse an alarm lead time such as "10m", "1h 30m" or "2days".
pub fn parse_lead(input: &str) -> Result<Duration> {
    humantime::parse_duration(input)
        .with_context(|| format!("Could not parse alarm lead time: \"{}\"", input))
}

/// Integers are Unix seconds; anything else is passed through verbatim.
pub fn parse_event_time(input: &str) -> EventTime {
    match input.trim().parse::<i64>() {
        Ok(secs) => EventTime::Instant(secs),
        Err(_) => EventTime::Literal(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invite_core::InviteError;

    const TEAM_SYNC: &str = r#"
[calendar]
name = "Team Sync"
description = "Weekly sync"

[[events]]
summary = "Standup"
location = "Room 1"
start = 1767261600
end = "20260101T101500Z"
organizer = { email = "alice@example.com", name = "Alice" }
attendees = [{ email = "bob@example.com" }]
alarms = [{ before = "10m", title = "Soon" }]
"#;

    #[test]
    fn parse_times_as_instant_or_literal() {
        let invite = InviteFile::parse(TEAM_SYNC).unwrap();
        let event = &invite.events[0];

        assert_eq!(event.start, Some(EventTime::Instant(1_767_261_600)));
        assert_eq!(
            event.end,
            Some(EventTime::Literal("20260101T101500Z".to_string()))
        );
    }

    #[test]
    fn team_sync_file_renders() {
        let doc = InviteFile::parse(TEAM_SYNC)
            .unwrap()
            .into_document(&GlobalConfig::default())
            .unwrap();

        assert_eq!(doc.name(), "Team Sync");
        let event = &doc.events()[0];
        assert_eq!(event.summary(), "Standup");
        assert_eq!(event.dt_end(), "20260101T101500Z");
        assert_eq!(event.alarms()[0].lead, Duration::from_secs(600));
        assert_eq!(event.attendees()[0].name, "bob@example.com");

        let ics = doc.render().unwrap();
        assert!(ics.contains("TRIGGER:-P0DT0H10M0S\r\n"));
        assert!(ics.contains("DESCRIPTION:Soon\r\n"));
    }

    #[test]
    fn file_without_events_fails_at_render() {
        let doc = InviteFile::parse("[calendar]\nname = \"Empty\"\n")
            .unwrap()
            .into_document(&GlobalConfig::default())
            .unwrap();

        let err = doc.render().unwrap_err();
        assert!(matches!(err, InviteError::MissingEvent));
    }

    #[test]
    fn default_alarm_applies_only_without_alarms() {
        let config = GlobalConfig {
            default_alarm: Some("15m".to_string()),
            ..GlobalConfig::default()
        };
        let contents = r#"
[[events]]
organizer = { email = "alice@example.com" }
attendees = [{ email = "bob@example.com" }]

[[events]]
organizer = { email = "alice@example.com" }
attendees = [{ email = "bob@example.com" }]
alarms = [{ before = "1h" }]
"#;

        let doc = InviteFile::parse(contents)
            .unwrap()
            .into_document(&config)
            .unwrap();

        assert_eq!(doc.events()[0].alarms()[0].lead, Duration::from_secs(900));
        assert_eq!(doc.events()[1].alarms().len(), 1);
        assert_eq!(doc.events()[1].alarms()[0].lead, Duration::from_secs(3600));
    }

    #[test]
    fn product_id_from_config() {
        let config = GlobalConfig {
            product_id: Some("-//Acme//Invites//EN".to_string()),
            ..GlobalConfig::default()
        };

        let doc = new_document(&config);
        assert_eq!(doc.identity().product_id, "-//Acme//Invites//EN");
    }

    #[test]
    fn bad_alarm_lead_names_the_event() {
        let contents = r#"
[[events]]
alarms = [{ before = "soonish" }]
"#;
        let err = InviteFile::parse(contents)
            .unwrap()
            .into_document(&GlobalConfig::default())
            .unwrap_err();

        assert!(format!("{err:#}").contains("Invalid event #1"));
        assert!(format!("{err:#}").contains("soonish"));
    }

    #[test]
    fn parse_event_time_variants() {
        assert_eq!(parse_event_time("1767261600"), EventTime::Instant(1_767_261_600));
        assert_eq!(
            parse_event_time("20260101T090000Z"),
            EventTime::Literal("20260101T090000Z".to_string())
        );
    }
}
