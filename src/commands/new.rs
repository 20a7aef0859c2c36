use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::config::GlobalConfig;
use crate::invite::{new_document, parse_event_time, parse_lead};
use invite_core::Event;

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Event title
    #[arg(long)]
    pub summary: String,

    /// Organizer email address
    #[arg(long)]
    pub organizer: String,

    /// Organizer display name (defaults to the email)
    #[arg(long)]
    pub organizer_name: Option<String>,

    /// Attendee email address (repeatable)
    #[arg(short, long = "attendee", required = true)]
    pub attendees: Vec<String>,

    /// Start as Unix seconds (e.g. 1767261600) or a formatted value (e.g. "20260101T090000Z")
    #[arg(short, long)]
    pub start: String,

    /// End, same forms as --start
    #[arg(short, long)]
    pub end: String,

    /// Event description
    #[arg(long)]
    pub description: Option<String>,

    /// Event location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Reminder before the start, e.g. "10m" (repeatable)
    #[arg(long = "alarm")]
    pub alarms: Vec<String>,

    /// Calendar name
    #[arg(long)]
    pub calendar_name: Option<String>,

    /// Output file (defaults to default_output from config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

pub fn run(args: NewArgs, config: &GlobalConfig) -> Result<()> {
    let mut event = Event::new();
    event.set_summary(args.summary);

    if let Some(description) = args.description {
        event.set_description(description);
    }
    if let Some(location) = args.location {
        event.set_location(location);
    }

    event
        .set_start(parse_event_time(&args.start))
        .context("Invalid --start")?;
    event
        .set_end(parse_event_time(&args.end))
        .context("Invalid --end")?;

    event.set_organizer(args.organizer, args.organizer_name);
    for email in args.attendees {
        event.add_attendee(email, None);
    }

    for lead in &args.alarms {
        event.add_alarm(parse_lead(lead)?, None);
    }
    if event.alarms().is_empty() {
        if let Some(default_alarm) = &config.default_alarm {
            event.add_alarm(parse_lead(default_alarm)?, None);
        }
    }

    let mut doc = new_document(config);
    if let Some(name) = args.calendar_name {
        doc.set_name(name.clone());
        doc.set_description(name);
    }
    doc.add_event(event);

    let output = args.output.unwrap_or_else(|| config.default_output.clone());
    super::emit(&doc, &output, args.stdout)
}
