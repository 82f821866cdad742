//! Consistency checks for room datasets.
//!
//! Datasets are accepted as-is; these findings are informational only.

use std::collections::{BTreeMap, HashSet};

use crate::core::types::Room;

/// Report structural problems in a room list:
/// - Duplicate room ids
/// - `connects_to` entries that reference no known room
/// - Dinosaur ids exhibited in more than one room
///
/// Messages are stable and ordered by room position, then by dinosaur id.
pub fn validate_rooms(rooms: &[Room]) -> Vec<String> {
    let mut errors = Vec::new();
    let known_ids: HashSet<&str> = rooms.iter().map(|room| room.room_id.as_str()).collect();
    let mut seen = HashSet::new();
    let mut exhibited_in: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for room in rooms {
        if !seen.insert(room.room_id.as_str()) {
            errors.push(format!("duplicate room id '{}'", room.room_id));
        }

        for target in &room.connects_to {
            if !known_ids.contains(target.as_str()) {
                errors.push(format!(
                    "room '{}' connects to unknown room '{}'",
                    room.room_id, target
                ));
            }
        }

        for dino_id in &room.dinosaurs {
            exhibited_in
                .entry(dino_id.as_str())
                .or_default()
                .push(room.room_id.as_str());
        }
    }

    for (dino_id, room_ids) in exhibited_in {
        if room_ids.len() > 1 {
            errors.push(format!(
                "dinosaur '{}' is listed in multiple rooms: {}",
                dino_id,
                room_ids.join(", ")
            ));
        }
    }

    errors
}
