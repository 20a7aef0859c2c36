//! A single calendar event and its `VEVENT` serialization.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{InviteError, InviteResult};
use crate::ics::time::{format_stamp, format_utc, local_offset_seconds, trigger_duration};
use crate::ics::{chunk_text, escape_param_value, escape_text, fold_line, CRLF, MAX_LINE_OCTETS};
use crate::uid::generate_uid;

/// Summary given to events that were never named.
pub const DEFAULT_SUMMARY: &str = "New Calendar Event";

/// Alarm description used when none is supplied.
pub const DEFAULT_ALARM_TITLE: &str = "This is an event reminder";

/// Participation status written to `PARTSTAT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipationStatus {
    Accepted,
    NeedsAction,
}

impl ParticipationStatus {
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            ParticipationStatus::Accepted => "ACCEPTED",
            ParticipationStatus::NeedsAction => "NEEDS-ACTION",
        }
    }
}

/// An organizer or attendee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Display name (falls back to the email address)
    pub name: String,
    pub email: String,
    pub status: ParticipationStatus,
}

impl Participant {
    fn new(email: String, name: Option<String>, status: ParticipationStatus) -> Self {
        let name = name.filter(|n| !n.is_empty()).unwrap_or_else(|| email.clone());
        Participant {
            name,
            email,
            status,
        }
    }

    /// The unfolded `ATTENDEE` content line for this participant.
    fn attendee_line(&self) -> String {
        format!(
            "ATTENDEE;CUTYPE=INDIVIDUAL;ROLE=REQ-PARTICIPANT;PARTSTAT={};RSVP=TRUE;CN={};X-NUM-GUESTS=0:mailto:{}",
            self.status.as_ics_str(),
            escape_param_value(&self.name),
            self.email
        )
    }
}

/// A display reminder shown `lead` before the event starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alarm {
    pub lead: Duration,
    pub title: String,
}

/// Start or end time as supplied by the caller.
///
/// Deserializes untagged: an integer is an `Instant`, a string a `Literal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    /// Unix seconds, converted to a UTC stamp when set
    Instant(i64),
    /// An already formatted value, written verbatim
    Literal(String),
}

impl EventTime {
    /// Resolves to the string written after `DTSTART:` / `DTEND:`, using
    /// the host's current UTC offset.
    pub fn to_ics_value(&self) -> InviteResult<String> {
        self.to_ics_value_at(local_offset_seconds())
    }

    /// Like [`EventTime::to_ics_value`] with an explicit offset in seconds
    /// east of UTC.
    pub fn to_ics_value_at(&self, offset_seconds: i32) -> InviteResult<String> {
        match self {
            EventTime::Instant(secs) => {
                format_utc(*secs, offset_seconds).ok_or(InviteError::InvalidTimestamp(*secs))
            }
            EventTime::Literal(value) => Ok(value.clone()),
        }
    }
}

/// A calendar event with its organizer, attendees and alarms.
#[derive(Debug, Clone)]
pub struct Event {
    summary: String,
    description: String,
    location: String,
    organizer: Option<Participant>,
    attendees: Vec<Participant>,
    created: DateTime<Utc>,
    dt_stamp: String,
    dt_start: String,
    dt_end: String,
    alarms: Vec<Alarm>,
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

impl Event {
    /// Creates an empty event stamped with the current time.
    pub fn new() -> Self {
        let created = Utc::now();
        Event {
            summary: DEFAULT_SUMMARY.to_string(),
            description: String::new(),
            location: String::new(),
            organizer: None,
            attendees: Vec::new(),
            dt_stamp: format_stamp(&created),
            created,
            dt_start: String::new(),
            dt_end: String::new(),
            alarms: Vec::new(),
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn organizer(&self) -> Option<&Participant> {
        self.organizer.as_ref()
    }

    /// Sets the organizer. A missing name falls back to the email address.
    pub fn set_organizer(&mut self, email: impl Into<String>, name: Option<String>) {
        self.organizer = Some(Participant::new(
            email.into(),
            name,
            ParticipationStatus::Accepted,
        ));
    }

    pub fn attendees(&self) -> &[Participant] {
        &self.attendees
    }

    /// Appends an attendee awaiting a response.
    pub fn add_attendee(&mut self, email: impl Into<String>, name: Option<String>) {
        self.attendees.push(Participant::new(
            email.into(),
            name,
            ParticipationStatus::NeedsAction,
        ));
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn dt_stamp(&self) -> &str {
        &self.dt_stamp
    }

    pub fn dt_start(&self) -> &str {
        &self.dt_start
    }

    /// Sets `DTSTART`. Instants are converted using the current local offset.
    pub fn set_start(&mut self, time: EventTime) -> InviteResult<()> {
        self.dt_start = time.to_ics_value()?;
        Ok(())
    }

    pub fn dt_end(&self) -> &str {
        &self.dt_end
    }

    /// Sets `DTEND`. Instants are converted using the current local offset.
    pub fn set_end(&mut self, time: EventTime) -> InviteResult<()> {
        self.dt_end = time.to_ics_value()?;
        Ok(())
    }

    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    /// Adds a display alarm `lead` before the start.
    pub fn add_alarm(&mut self, lead: Duration, title: Option<String>) {
        self.alarms.push(Alarm {
            lead,
            title: title.unwrap_or_else(|| DEFAULT_ALARM_TITLE.to_string()),
        });
    }

    /// Renders this event as a `VEVENT` block, CRLF-terminated.
    ///
    /// The organizer is written as the last `ATTENDEE` without being added
    /// to the stored attendee list. `CREATED` and `UID` are regenerated on
    /// every call.
    #[tracing::instrument(skip(self), fields(summary = %self.summary))]
    pub fn render(&self) -> InviteResult<String> {
        self.render_at(Utc::now().timestamp(), local_offset_seconds())
    }

    /// Renders with `CREATED` derived from `now` under `offset_seconds`.
    fn render_at(&self, now: i64, offset_seconds: i32) -> InviteResult<String> {
        let organizer = self.organizer.as_ref().ok_or(InviteError::MissingOrganizer)?;
        if self.attendees.is_empty() {
            return Err(InviteError::MissingAttendee);
        }

        let created = format_utc(now, offset_seconds).ok_or(InviteError::InvalidTimestamp(now))?;

        let mut out = String::new();
        push_line(&mut out, "BEGIN:VEVENT");
        push_line(&mut out, &format!("DTSTART:{}", self.dt_start));
        push_line(&mut out, &format!("DTEND:{}", self.dt_end));
        push_line(&mut out, &format!("DTSTAMP:{}", self.dt_stamp));
        push_line(
            &mut out,
            &format!(
                "ORGANIZER;CN={}:mailto:{}",
                escape_param_value(&organizer.name),
                organizer.email
            ),
        );
        push_line(&mut out, &format!("UID:{}", generate_uid()));

        for attendee in self.attendees.iter().chain(std::iter::once(organizer)) {
            push_line(&mut out, &fold_line(&attendee.attendee_line()));
        }

        push_line(&mut out, &format!("CREATED:{created}"));

        let description = escape_text(&self.description);
        out.push_str("DESCRIPTION:");
        push_line(&mut out, &chunk_text(&description, MAX_LINE_OCTETS).join(CRLF));

        // Known defect kept for output compatibility: LAST-MODIFIED has no
        // terminator, so LOCATION follows on the same physical line.
        out.push_str("LAST-MODIFIED:");
        out.push_str(&self.dt_stamp);

        push_line(&mut out, &format!("LOCATION:{}", escape_text(&self.location)));
        push_line(&mut out, "SEQUENCE:0");
        push_line(&mut out, "STATUS:CONFIRMED");
        push_line(&mut out, &format!("SUMMARY:{}", escape_text(&self.summary)));
        push_line(&mut out, "TRANSP:OPAQUE");

        for alarm in &self.alarms {
            push_line(&mut out, "BEGIN:VALARM");
            push_line(&mut out, "ACTION:DISPLAY");
            push_line(&mut out, &format!("DESCRIPTION:{}", escape_text(&alarm.title)));
            push_line(&mut out, &format!("TRIGGER:-P{}", trigger_duration(alarm.lead)));
            push_line(&mut out, "END:VALARM");
        }

        push_line(&mut out, "END:VEVENT");

        tracing::debug!(
            attendees = self.attendees.len() + 1,
            alarms = self.alarms.len(),
            "Rendered VEVENT"
        );

        Ok(out)
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str(CRLF);
}
