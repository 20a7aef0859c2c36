//! The `VCALENDAR` document that wraps one or more events.

use crate::error::{InviteError, InviteResult};
use crate::event::Event;
use crate::ics::{escape_text, CRLF};

/// Default display name and description for a new document.
pub const DEFAULT_CALENDAR_NAME: &str = "New Calendar Event";

pub const DEFAULT_PRODUCT_ID: &str = "-//invite//iCalendar Invite Builder//EN";

/// Fixed identifying properties written into every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarIdentity {
    pub product_id: String,
    pub version: String,
    pub calendar_scale: String,
    pub method: String,
}

impl Default for CalendarIdentity {
    fn default() -> Self {
        CalendarIdentity {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            version: "2.0".to_string(),
            calendar_scale: "GREGORIAN".to_string(),
            method: "REQUEST".to_string(),
        }
    }
}

impl CalendarIdentity {
    /// Default identity with a custom `PRODID`.
    pub fn with_product_id(product_id: impl Into<String>) -> Self {
        CalendarIdentity {
            product_id: product_id.into(),
            ..Self::default()
        }
    }
}

/// An ordered collection of events rendered as one `VCALENDAR`.
#[derive(Debug, Clone)]
pub struct CalendarDocument {
    identity: CalendarIdentity,
    name: String,
    description: String,
    events: Vec<Event>,
}

impl Default for CalendarDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarDocument {
    pub fn new() -> Self {
        Self::with_identity(CalendarIdentity::default())
    }

    pub fn with_identity(identity: CalendarIdentity) -> Self {
        CalendarDocument {
            identity,
            name: DEFAULT_CALENDAR_NAME.to_string(),
            description: DEFAULT_CALENDAR_NAME.to_string(),
            events: Vec::new(),
        }
    }

    pub fn identity(&self) -> &CalendarIdentity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Renders the full document, events in insertion order.
    #[tracing::instrument(skip(self), fields(name = %self.name, events = self.events.len()))]
    pub fn render(&self) -> InviteResult<String> {
        if self.events.is_empty() {
            return Err(InviteError::MissingEvent);
        }

        let name = escape_text(&self.name);
        let description = escape_text(&self.description);

        let mut out = String::new();
        for line in [
            "BEGIN:VCALENDAR".to_string(),
            format!("PRODID:{}", self.identity.product_id),
            format!("VERSION:{}", self.identity.version),
            format!("NAME:{name}"),
            format!("X-WR-CALNAME:{name}"),
            format!("DESCRIPTION:{description}"),
            format!("X-WR-CALDESC:{description}"),
            format!("CALSCALE:{}", self.identity.calendar_scale),
            format!("METHOD:{}", self.identity.method),
        ] {
            out.push_str(&line);
            out.push_str(CRLF);
        }

        for event in &self.events {
            out.push_str(&event.render()?);
        }

        out.push_str("END:VCALENDAR");
        out.push_str(CRLF);

        tracing::debug!(bytes = out.len(), "Rendered VCALENDAR");

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_event(summary: &str) -> Event {
        let mut event = Event::new();
        event.set_summary(summary);
        event.set_organizer("alice@example.com", Some("Alice".to_string()));
        event.add_attendee("bob@example.com", None);
        event
    }

    #[test]
    fn render_without_events_fails_until_one_is_added() {
        let mut doc = CalendarDocument::new();
        assert!(matches!(doc.render(), Err(InviteError::MissingEvent)));

        doc.add_event(make_test_event("Standup"));
        assert!(doc.render().is_ok());
    }

    #[test]
    fn header_lines_in_order() {
        let mut doc = CalendarDocument::new();
        doc.set_name("Team Sync");
        doc.set_description("Weekly sync");
        doc.add_event(make_test_event("Standup"));

        let ics = doc.render().unwrap();
        let expected_header = "BEGIN:VCALENDAR\r\n\
            PRODID:-//invite//iCalendar Invite Builder//EN\r\n\
            VERSION:2.0\r\n\
            NAME:Team Sync\r\n\
            X-WR-CALNAME:Team Sync\r\n\
            DESCRIPTION:Weekly sync\r\n\
            X-WR-CALDESC:Weekly sync\r\n\
            CALSCALE:GREGORIAN\r\n\
            METHOD:REQUEST\r\n\
            BEGIN:VEVENT\r\n";

        assert!(ics.starts_with(expected_header), "ICS:\n{ics}");
        assert!(ics.ends_with("END:VEVENT\r\nEND:VCALENDAR\r\n"));
    }

    #[test]
    fn defaults() {
        let doc = CalendarDocument::new();
        assert_eq!(doc.name(), "New Calendar Event");
        assert_eq!(doc.description(), "New Calendar Event");
        assert_eq!(doc.identity(), &CalendarIdentity::default());
    }

    #[test]
    fn custom_product_id() {
        let mut doc =
            CalendarDocument::with_identity(CalendarIdentity::with_product_id("-//Acme//Invites//EN"));
        doc.add_event(make_test_event("Standup"));

        let ics = doc.render().unwrap();
        assert!(ics.contains("PRODID:-//Acme//Invites//EN\r\n"));
        assert!(ics.contains("METHOD:REQUEST\r\n"));
    }

    #[test]
    fn events_render_in_insertion_order() {
        let mut doc = CalendarDocument::new();
        doc.add_event(make_test_event("First"));
        doc.add_event(make_test_event("Second"));

        let ics = doc.render().unwrap();
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert!(ics.find("SUMMARY:First").unwrap() < ics.find("SUMMARY:Second").unwrap());
    }

    #[test]
    fn invalid_event_fails_whole_document() {
        let mut doc = CalendarDocument::new();
        doc.add_event(make_test_event("Fine"));
        doc.add_event(Event::new());

        assert!(matches!(doc.render(), Err(InviteError::MissingOrganizer)));
    }

    #[test]
    fn calendar_name_is_escaped() {
        let mut doc = CalendarDocument::new();
        doc.set_name("Ops, Infra");
        doc.add_event(make_test_event("Standup"));

        let ics = doc.render().unwrap();
        assert!(ics.contains("X-WR-CALNAME:Ops\\, Infra\r\n"));
    }
}
