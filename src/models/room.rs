use serde::{Deserialize, Serialize};

/// A room in the museum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    pub room_id: String,
    /// Name shown on kiosk maps (e.g., "Roberts Room").
    pub name: String,
    /// Ids of directly connected rooms. `None` when the room lists no connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connects_to: Option<Vec<String>>,
    /// Ids of the dinosaurs exhibited in this room.
    #[serde(default)]
    pub dinosaurs: Vec<String>,
}

impl Room {
    pub fn exhibits(&self, dinosaur_id: &str) -> bool {
        self.dinosaurs.iter().any(|id| id == dinosaur_id)
    }
}
