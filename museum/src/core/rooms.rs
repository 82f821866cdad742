//! Dinosaur and room lookups.

use std::collections::HashSet;

use crate::core::error::LookupError;
use crate::core::types::{Dinosaur, Room};

/// Return the name of the room exhibiting the dinosaur called `dinosaur_name`.
///
/// Names match exactly (case-sensitive). The ids of every roster entry with
/// that name are concatenated in roster order into a single lookup key, so a
/// name shared by several dinosaurs only resolves if some room lists the
/// combined key. The first room listing the key wins.
pub fn room_by_dinosaur_name<'a>(
    dinosaurs: &[Dinosaur],
    rooms: &'a [Room],
    dinosaur_name: &str,
) -> Result<&'a str, LookupError> {
    let lookup_key: String = dinosaurs
        .iter()
        .filter(|dino| dino.name == dinosaur_name)
        .map(|dino| dino.dinosaur_id.as_str())
        .collect();

    if lookup_key.is_empty() {
        return Err(LookupError::DinosaurNotFound(dinosaur_name.to_string()));
    }

    rooms
        .iter()
        .find(|room| room.dinosaurs.iter().any(|id| *id == lookup_key))
        .map(|room| room.name.as_str())
        .ok_or_else(|| LookupError::DinosaurNotInAnyRoom(dinosaur_name.to_string()))
}

/// Return the names of rooms whose `connects_to` lists room `id`.
///
/// This is a reverse-adjacency query; output follows input order. The target
/// room's own connections must all reference known rooms, otherwise the first
/// dangling id is reported instead.
pub fn connected_room_names_by_id<'a>(
    rooms: &'a [Room],
    id: &str,
) -> Result<Vec<&'a str>, LookupError> {
    if !rooms.iter().any(|room| room.room_id == id) {
        return Err(LookupError::RoomNotFound(id.to_string()));
    }

    let known_ids: HashSet<&str> = rooms.iter().map(|room| room.room_id.as_str()).collect();
    let mut connected = Vec::new();

    for room in rooms {
        if room.connects_to.iter().any(|target| target == id) {
            connected.push(room.name.as_str());
        }
        if room.room_id != id {
            continue;
        }
        if let Some(dangling) = room
            .connects_to
            .iter()
            .find(|target| !known_ids.contains(target.as_str()))
        {
            return Err(LookupError::RoomNotFound(dangling.clone()));
        }
    }

    Ok(connected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{dinosaur, room};

    fn roster() -> Vec<Dinosaur> {
        vec![
            dinosaur("d-rex", "Tyrannosaurus"),
            dinosaur("d-tri", "Triceratops"),
            dinosaur("d-ste", "Stegosaurus"),
        ]
    }

    fn floor_plan() -> Vec<Room> {
        vec![
            room("lobby", "Lobby", &[], &["hall"]),
            room("hall", "Great Hall", &["d-rex"], &["lobby", "wing"]),
            room("wing", "East Wing", &["d-tri"], &["hall"]),
            room("annex", "Annex", &[], &["hall"]),
        ]
    }

    #[test]
    fn resolves_room_for_placed_dinosaur() {
        let rooms = floor_plan();
        assert_eq!(
            room_by_dinosaur_name(&roster(), &rooms, "Tyrannosaurus"),
            Ok("Great Hall")
        );
        assert_eq!(
            room_by_dinosaur_name(&roster(), &rooms, "Triceratops"),
            Ok("East Wing")
        );
    }

    #[test]
    fn unknown_name_is_not_found() {
        let rooms = floor_plan();
        let err = room_by_dinosaur_name(&roster(), &rooms, "Pterodactyl").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dinosaur with name 'Pterodactyl' cannot be found."
        );
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let rooms = floor_plan();
        assert_eq!(
            room_by_dinosaur_name(&roster(), &rooms, "tyrannosaurus"),
            Err(LookupError::DinosaurNotFound("tyrannosaurus".to_string()))
        );
    }

    #[test]
    fn unplaced_dinosaur_is_not_in_any_room() {
        let rooms = floor_plan();
        let err = room_by_dinosaur_name(&roster(), &rooms, "Stegosaurus").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dinosaur with name 'Stegosaurus' cannot be found in any rooms."
        );
    }

    /// Shared names concatenate ids; rooms listing only one of them do not match.
    #[test]
    fn duplicate_names_use_concatenated_key() {
        let dinosaurs = vec![dinosaur("a1", "Twin"), dinosaur("b2", "Twin")];
        let rooms = vec![room("r1", "Single", &["a1"], &[])];
        assert_eq!(
            room_by_dinosaur_name(&dinosaurs, &rooms, "Twin"),
            Err(LookupError::DinosaurNotInAnyRoom("Twin".to_string()))
        );

        let rooms = vec![
            room("r1", "Single", &["a1"], &[]),
            room("r2", "Combined", &["a1b2"], &[]),
        ];
        assert_eq!(
            room_by_dinosaur_name(&dinosaurs, &rooms, "Twin"),
            Ok("Combined")
        );
    }

    #[test]
    fn first_room_listing_the_dinosaur_wins() {
        let rooms = vec![
            room("r1", "First", &["d-rex"], &[]),
            room("r2", "Second", &["d-rex"], &[]),
        ];
        assert_eq!(
            room_by_dinosaur_name(&roster(), &rooms, "Tyrannosaurus"),
            Ok("First")
        );
    }

    #[test]
    fn connected_names_follow_input_order() {
        let rooms = floor_plan();
        assert_eq!(
            connected_room_names_by_id(&rooms, "hall"),
            Ok(vec!["Lobby", "East Wing", "Annex"])
        );
    }

    /// Only incoming edges count: the lobby points at the hall, not vice versa.
    #[test]
    fn connected_names_are_reverse_adjacency() {
        let rooms = vec![
            room("a", "A", &[], &["b"]),
            room("b", "B", &[], &[]),
        ];
        assert_eq!(connected_room_names_by_id(&rooms, "b"), Ok(vec!["A"]));
        assert_eq!(connected_room_names_by_id(&rooms, "a"), Ok(Vec::new()));
    }

    #[test]
    fn room_without_incoming_connections_is_empty() {
        let rooms = floor_plan();
        assert_eq!(connected_room_names_by_id(&rooms, "annex"), Ok(Vec::new()));
    }

    #[test]
    fn unknown_room_id_is_not_found() {
        let rooms = floor_plan();
        let err = connected_room_names_by_id(&rooms, "nope").unwrap_err();
        assert_eq!(err.to_string(), "Room with ID of 'nope' could not be found.");
    }

    #[test]
    fn dangling_connection_on_target_is_reported() {
        let rooms = vec![
            room("a", "A", &[], &["b", "ghost", "phantom"]),
            room("b", "B", &[], &["a"]),
        ];
        assert_eq!(
            connected_room_names_by_id(&rooms, "a"),
            Err(LookupError::RoomNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn dangling_connection_elsewhere_is_ignored() {
        let rooms = vec![
            room("a", "A", &[], &["b", "ghost"]),
            room("b", "B", &[], &["a"]),
        ];
        assert_eq!(connected_room_names_by_id(&rooms, "b"), Ok(vec!["A"]));
    }

    #[test]
    fn lookups_are_idempotent() {
        let rooms = floor_plan();
        let dinosaurs = roster();
        assert_eq!(
            room_by_dinosaur_name(&dinosaurs, &rooms, "Triceratops"),
            room_by_dinosaur_name(&dinosaurs, &rooms, "Triceratops")
        );
        assert_eq!(
            connected_room_names_by_id(&rooms, "hall"),
            connected_room_names_by_id(&rooms, "hall")
        );
    }
}
