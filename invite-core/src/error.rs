//! Error types for invite rendering.

use thiserror::Error;

/// Errors that can occur while rendering or exporting an invitation.
#[derive(Error, Debug)]
pub enum InviteError {
    #[error("At least one event is required.")]
    MissingEvent,

    #[error("An organizer is required.")]
    MissingOrganizer,

    #[error("At least one attendee is required.")]
    MissingAttendee,

    #[error("Timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for invite operations.
pub type InviteResult<T> = Result<T, InviteError>;
