use std::collections::HashSet;

use thiserror::Error;

use super::model::World;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
        return errors;
    }

    if world.start_room.0 >= world.rooms.len() {
        errors.push(ValidationError::new(format!(
            "start room index {} is out of range",
            world.start_room.0
        )));
    }

    let mut keys: HashSet<&str> = HashSet::new();
    let mut item_ids = HashSet::new();

    for room in &world.rooms {
        if !keys.insert(room.key.as_str()) {
            errors.push(ValidationError::new(format!(
                "room key '{}' is used more than once",
                room.key
            )));
        }

        if room.name.trim().is_empty() {
            errors.push(ValidationError::new(format!(
                "room '{}' has an empty name",
                room.key
            )));
        }

        for (direction, target) in &room.exits {
            if direction.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an exit with an empty direction",
                    room.key
                )));
            }
            if *direction != direction.to_lowercase() {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' is not lowercased",
                    room.key, direction
                )));
            }
            if target.0 >= world.rooms.len() {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets a missing room",
                    room.key, direction
                )));
            }
        }

        for item in &room.items {
            if !item_ids.insert(item.id) {
                errors.push(ValidationError::new(format!(
                    "item '{}' in room '{}' shares its id with another item",
                    item.name, room.key
                )));
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::model::{Item, ItemId, Room, RoomId};

    fn world_with(rooms: Vec<Room>) -> World {
        World {
            name: "Test".to_string(),
            desc: String::new(),
            start_room: RoomId(0),
            rooms,
        }
    }

    #[test]
    fn empty_world_is_rejected() {
        let errors = validate_world(&world_with(Vec::new()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "world has no rooms");
    }

    #[test]
    fn dangling_exit_is_reported() {
        let mut cell = Room::new("cell", "Cell", "");
        cell.add_exit("north", RoomId(7));
        let errors = validate_world(&world_with(vec![cell]));
        assert!(errors.iter().any(|e| e.message.contains("targets a missing room")));
    }

    #[test]
    fn duplicated_item_ids_are_reported() {
        let coin = Item {
            id: ItemId(0),
            name: "Coin".to_string(),
            aliases: Vec::new(),
            desc: String::new(),
            takeable: true,
        };
        let mut hall = Room::new("hall", "Hall", "");
        hall.add_item(coin.clone());
        hall.add_item(coin);
        let errors = validate_world(&world_with(vec![hall]));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn well_formed_world_passes() {
        let mut a = Room::new("a", "A", "");
        let mut b = Room::new("b", "B", "");
        a.add_exit("east", RoomId(1));
        b.add_exit("west", RoomId(0));
        assert!(validate_world(&world_with(vec![a, b])).is_empty());
    }
}
