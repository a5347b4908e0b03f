//! Room catalog and its load lifecycle.
//!
//! ```text
//!   Uninitialized → Loading → Ready(catalog)
//!                          └→ Failed(reason)
//! ```
//!
//! The room list and the block geometry are fetched concurrently and joined:
//! the state only leaves `Loading` once both requests have finished, and it
//! becomes `Ready` only if both succeeded. Re-loading replaces both.
//!
//! Readers never need to match on the state: [`CatalogState::rooms`] is empty
//! for every state but `Ready`.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::domain::{Room, RoomBlock};
use crate::ports::{ApiError, NavigationApiPort};

/// The authoritative set of known rooms plus their block geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
    blocks: BTreeMap<String, RoomBlock>,
}

impl RoomCatalog {
    /// Build a catalog, keeping backend order. Blank names and names that
    /// repeat an earlier one case-insensitively are dropped.
    pub fn new<I, S>(names: I, blocks: BTreeMap<String, RoomBlock>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut rooms = Vec::new();
        for name in names {
            let name = name.as_ref();
            if name.trim().is_empty() {
                tracing::warn!(room = ?name, "Dropping blank room name");
                continue;
            }
            let room = Room::new(name);
            if seen.insert(room.key().to_string()) {
                rooms.push(room);
            } else {
                tracing::warn!(room = %room.key(), "Dropping duplicate room name");
            }
        }
        Self { rooms, blocks }
    }

    /// Rooms in catalog order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the catalog has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Look a room up by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Room> {
        let key = name.to_lowercase();
        self.rooms.iter().find(|room| room.key() == key)
    }

    /// Block geometry keyed by the backend's label.
    pub const fn blocks(&self) -> &BTreeMap<String, RoomBlock> {
        &self.blocks
    }
}

/// Load lifecycle of the process-wide catalog.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// Nothing requested yet.
    #[default]
    Uninitialized,
    /// Both loads in flight.
    Loading,
    /// Both loads succeeded.
    Ready(Arc<RoomCatalog>),
    /// At least one load failed.
    Failed {
        /// The first failure, for display.
        reason: ApiError,
    },
}

impl CatalogState {
    /// Known rooms; empty unless `Ready`.
    pub fn rooms(&self) -> &[Room] {
        match self {
            Self::Ready(catalog) => catalog.rooms(),
            _ => &[],
        }
    }

    /// The catalog, if ready.
    pub fn catalog(&self) -> Option<&Arc<RoomCatalog>> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Whether the catalog is ready.
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Short state label for logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Fetch rooms and blocks concurrently and join both results.
///
/// Both requests always run to completion; if both fail, the room-list error
/// is reported.
pub async fn load_catalog(api: &dyn NavigationApiPort) -> Result<RoomCatalog, ApiError> {
    let (rooms, blocks) = tokio::join!(api.get_rooms(), api.get_room_blocks());

    match (rooms, blocks) {
        (Ok(rooms), Ok(blocks)) => Ok(RoomCatalog::new(rooms, blocks)),
        (Err(e), _) => {
            tracing::warn!(error = %e, "Room list failed to load");
            Err(e)
        }
        (Ok(_), Err(e)) => {
            tracing::warn!(error = %e, "Room blocks failed to load");
            Err(e)
        }
    }
}
