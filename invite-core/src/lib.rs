//! Core types for building iCalendar invitations.
//!
//! This crate provides the in-memory model and its serializer:
//! - `CalendarDocument` renders the `VCALENDAR` envelope
//! - `Event` renders one `VEVENT` with its attendees and `VALARM` blocks
//! - `export` wraps rendered text for files and MIME email bodies

pub mod calendar;
pub mod error;
pub mod event;
pub mod export;
pub mod ics;
pub mod uid;

pub use calendar::{CalendarDocument, CalendarIdentity};
pub use error::{InviteError, InviteResult};
pub use event::{Alarm, Event, EventTime, Participant, ParticipationStatus};
