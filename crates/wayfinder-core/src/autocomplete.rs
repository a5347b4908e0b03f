//! Suggestion lists for the two location inputs.

use crate::domain::Room;

/// Which location input a value or suggestion list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationField {
    /// "You are here".
    Current,
    /// "Take me to".
    Destination,
}

impl LocationField {
    /// Label for logs and CLI parsing.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Destination => "destination",
        }
    }
}

impl std::str::FromStr for LocationField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "current" | "from" => Ok(Self::Current),
            "destination" | "to" => Ok(Self::Destination),
            other => Err(format!("unknown location field '{other}'")),
        }
    }
}

/// Display names of every room whose name contains `query`, ignoring case.
///
/// Order is catalog order. An empty query matches every room.
pub fn filter_rooms(query: &str, rooms: &[Room]) -> Vec<String> {
    let needle = query.to_lowercase();
    rooms
        .iter()
        .filter(|room| room.key().contains(needle.as_str()))
        .map(|room| room.display_name().to_string())
        .collect()
}

/// Current suggestion list for each location input.
///
/// Each refresh replaces that input's list wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteFilter {
    current: Vec<String>,
    destination: Vec<String>,
}

impl AutocompleteFilter {
    /// Create a filter with no suggestions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute `field`'s suggestions for `query`.
    pub fn refresh(&mut self, field: LocationField, query: &str, rooms: &[Room]) -> &[String] {
        let slot = self.slot_mut(field);
        *slot = filter_rooms(query, rooms);
        slot
    }

    /// Empty both lists (e.g. on an unmapped floor).
    pub fn clear(&mut self) {
        self.current.clear();
        self.destination.clear();
    }

    /// The suggestions last computed for `field`.
    pub fn suggestions(&self, field: LocationField) -> &[String] {
        match field {
            LocationField::Current => &self.current,
            LocationField::Destination => &self.destination,
        }
    }

    fn slot_mut(&mut self, field: LocationField) -> &mut Vec<String> {
        match field {
            LocationField::Current => &mut self.current,
            LocationField::Destination => &mut self.destination,
        }
    }
}
