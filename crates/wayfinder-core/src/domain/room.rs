//! Room identity and block geometry.

use serde::{Deserialize, Serialize};

/// A navigable room.
///
/// Identity is the lower-cased name; two rooms whose names differ only in
/// case are the same room. The display form is title-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Room {
    key: String,
    display: String,
}

impl Room {
    /// Create a room from a name as delivered by the backend.
    pub fn new(name: &str) -> Self {
        let key = name.to_lowercase();
        let display = title_case(&key);
        Self { key, display }
    }

    /// Case-insensitive identity key (lower-cased name).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Title-cased name for display in inputs and suggestion lists.
    pub fn display_name(&self) -> &str {
        &self.display
    }

    /// Whether this room's name occurs inside an already lower-cased text.
    pub fn is_mentioned_in(&self, lowered_text: &str) -> bool {
        lowered_text.contains(self.key.as_str())
    }
}

/// Upper-case the first word character following a non-word boundary.
///
/// Word characters are ASCII alphanumerics and `_`; everything else, including
/// whitespace and punctuation, starts a new word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !in_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }
    out
}

/// Rectangular footprint of a room on the grid.
///
/// Decoded from the wire form `[row, column, height, width]`. The core keeps
/// it for adapters that draw room outlines; nothing in routing depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 4]", into = "[u32; 4]")]
pub struct RoomBlock {
    /// Top row of the block.
    pub row: u32,
    /// Left column of the block.
    pub column: u32,
    /// Height in grid cells.
    pub height: u32,
    /// Width in grid cells.
    pub width: u32,
}

impl From<[u32; 4]> for RoomBlock {
    fn from([row, column, height, width]: [u32; 4]) -> Self {
        Self {
            row,
            column,
            height,
            width,
        }
    }
}

impl From<RoomBlock> for [u32; 4] {
    fn from(block: RoomBlock) -> Self {
        [block.row, block.column, block.height, block.width]
    }
}
