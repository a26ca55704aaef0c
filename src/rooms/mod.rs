//! Room cross-reference: where a dinosaur is exhibited and which rooms
//! connect to a given room.

use crate::error::{KioskError, KioskResult};
use crate::models::dinosaur::Dinosaur;
use crate::models::room::Room;
use tracing::debug;

fn find_room<'a>(rooms: &'a [Room], room_id: &str) -> Option<&'a Room> {
    rooms.iter().find(|room| room.room_id == room_id)
}

/// Name of the room exhibiting the dinosaur called `dinosaur_name`.
pub fn room_by_dinosaur_name(
    dinosaurs: &[Dinosaur],
    rooms: &[Room],
    dinosaur_name: &str,
) -> KioskResult<String> {
    let dinosaur = dinosaurs
        .iter()
        .find(|dinosaur| dinosaur.name == dinosaur_name)
        .ok_or_else(|| KioskError::DinosaurNameNotFound(dinosaur_name.to_string()))?;

    let room = rooms
        .iter()
        .find(|room| room.exhibits(&dinosaur.dinosaur_id))
        .ok_or_else(|| {
            debug!(dinosaur_id = %dinosaur.dinosaur_id, "dinosaur_not_exhibited");
            KioskError::DinosaurNotInAnyRoom(dinosaur_name.to_string())
        })?;

    Ok(room.name.clone())
}

/// Names of the rooms connected to room `id`, in `connectsTo` order.
///
/// Fails with [`KioskError::RoomNotFound`] naming the first connected id that
/// does not resolve, and with [`KioskError::NoConnections`] when the room has
/// no `connectsTo` list. An empty list yields an empty result.
pub fn connected_room_names_by_id(rooms: &[Room], id: &str) -> KioskResult<Vec<String>> {
    let room = find_room(rooms, id).ok_or_else(|| KioskError::RoomNotFound(id.to_string()))?;
    let connects_to = room.connects_to.as_ref().ok_or(KioskError::NoConnections)?;

    connects_to
        .iter()
        .map(|connected_id| {
            find_room(rooms, connected_id)
                .map(|connected| connected.name.clone())
                .ok_or_else(|| {
                    debug!(room_id = %id, connected_id = %connected_id, "dangling_room_connection");
                    KioskError::RoomNotFound(connected_id.clone())
                })
        })
        .collect()
}
