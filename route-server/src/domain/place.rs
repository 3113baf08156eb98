//! Place identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix the directions provider expects in front of a place identifier.
const PLACE_ID_PREFIX: &str = "place_id:";

/// An opaque location identifier supplied by the caller.
///
/// The value is never inspected or geocoded. It is handed to the provider
/// verbatim, wrapped in the provider's `place_id:` reference form.
///
/// # Examples
///
/// ```
/// use route_server::domain::PlaceId;
///
/// let stop = PlaceId::new("ChIJK-0sC0Fl1oYRFccWTTgtw3M");
/// assert_eq!(stop.reference(), "place_id:ChIJK-0sC0Fl1oYRFccWTTgtw3M");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(String);

impl PlaceId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the provider reference for this place (`place_id:<id>`).
    pub fn reference(&self) -> String {
        format!("{PLACE_ID_PREFIX}{}", self.0)
    }
}

impl fmt::Debug for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlaceId({})", self.0)
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PlaceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_is_prefixed() {
        let place = PlaceId::new("ChIJgdL4flSKrYcRnTpP0XQSojM");
        assert_eq!(place.reference(), "place_id:ChIJgdL4flSKrYcRnTpP0XQSojM");
    }

    #[test]
    fn identifier_is_passed_through_verbatim() {
        // No trimming, no case folding, no validation.
        let place = PlaceId::new("  odd Id|with pipe ");
        assert_eq!(place.as_str(), "  odd Id|with pipe ");
        assert_eq!(place.reference(), "place_id:  odd Id|with pipe ");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let place: PlaceId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(place, PlaceId::from("abc"));
    }
}
