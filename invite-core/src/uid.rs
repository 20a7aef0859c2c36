//! Unique identifiers for `UID` properties.

use uuid::Uuid;

/// Generates a random version-4 GUID in uppercase hyphenated form,
/// e.g. `1B4E28BA-2FA1-41D2-883F-0016D3CCA427`.
///
/// Uniqueness is probabilistic; there is no collision detection.
#[must_use]
pub fn generate_uid() -> String {
    Uuid::new_v4().hyphenated().to_string().to_uppercase()
}
