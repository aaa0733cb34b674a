use log::info;

use super::error::WorldError;
use super::model::{Item, ItemId, Room, RoomId, World};
use super::validator::validate_world;

/// Assembles a [`World`] room by room. Used once at startup; the world is
/// structurally frozen after [`WorldBuilder::build`].
#[derive(Debug, Default)]
pub struct WorldBuilder {
    name: String,
    desc: String,
    rooms: Vec<Room>,
    start_room: Option<RoomId>,
    next_item_id: usize,
}

impl WorldBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        WorldBuilder {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn add_room(
        &mut self,
        key: &str,
        name: impl Into<String>,
        desc: impl Into<String>,
    ) -> Result<RoomId, WorldError> {
        if self.room_id(key).is_some() {
            return Err(WorldError::DuplicateRoom(key.to_string()));
        }
        self.rooms.push(Room::new(key, name, desc));
        Ok(RoomId(self.rooms.len() - 1))
    }

    pub fn room_id(&self, key: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.key == key).map(RoomId)
    }

    /// Wires `from --direction--> to`. Re-wiring the same direction overwrites it.
    pub fn add_exit(
        &mut self,
        from: RoomId,
        direction: &str,
        to: RoomId,
    ) -> Result<(), WorldError> {
        self.check_room(to, || format!("exit '{direction}'"))?;
        let room = self.room_slot(from, || format!("exit '{direction}'"))?;
        room.add_exit(direction, to);
        Ok(())
    }

    /// Same as [`WorldBuilder::add_exit`] but addressed by room keys.
    pub fn link(&mut self, from: &str, direction: &str, to: &str) -> Result<(), WorldError> {
        let from_id = self.require_room(from, || format!("exit '{direction}'"))?;
        let to_id = self.require_room(to, || format!("exit '{direction}' of room '{from}'"))?;
        self.add_exit(from_id, direction, to_id)
    }

    /// Creates an item in `room`, returning its freshly assigned id.
    pub fn add_item(
        &mut self,
        room: RoomId,
        name: impl Into<String>,
        aliases: Vec<String>,
        desc: impl Into<String>,
        takeable: bool,
    ) -> Result<ItemId, WorldError> {
        let name = name.into();
        let slot = self.room_slot(room, || format!("item '{name}'"))?;
        if name.trim().is_empty() {
            return Err(WorldError::EmptyItemName(slot.key.clone()));
        }

        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;

        self.rooms[room.0].add_item(Item {
            id,
            name,
            aliases,
            desc: desc.into(),
            takeable,
        });
        Ok(id)
    }

    pub fn set_start(&mut self, room: RoomId) {
        self.start_room = Some(room);
    }

    pub fn build(self) -> Result<World, WorldError> {
        let world = World {
            name: self.name,
            desc: self.desc,
            // first room added is the default starting point
            start_room: self.start_room.unwrap_or(RoomId(0)),
            rooms: self.rooms,
        };

        let errors = validate_world(&world);
        if !errors.is_empty() {
            return Err(WorldError::Invalid(errors));
        }

        info!(
            "built world '{}' with {} rooms and {} items",
            world.name,
            world.rooms.len(),
            world.items_in_rooms().count()
        );
        Ok(world)
    }

    fn check_room(&self, id: RoomId, context: impl FnOnce() -> String) -> Result<(), WorldError> {
        if id.0 < self.rooms.len() {
            Ok(())
        } else {
            Err(WorldError::UnknownRoom {
                context: context(),
                key: format!("#{}", id.0),
            })
        }
    }

    /// Ids from another builder are rejected rather than indexed.
    fn room_slot(
        &mut self,
        id: RoomId,
        context: impl FnOnce() -> String,
    ) -> Result<&mut Room, WorldError> {
        self.check_room(id, context)?;
        Ok(&mut self.rooms[id.0])
    }

    fn require_room(
        &self,
        key: &str,
        context: impl FnOnce() -> String,
    ) -> Result<RoomId, WorldError> {
        self.room_id(key).ok_or_else(|| WorldError::UnknownRoom {
            context: context(),
            key: key.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_without_rooms_fails() {
        let err = WorldBuilder::new("Void").build().unwrap_err();
        assert!(matches!(err, WorldError::Invalid(_)));
        assert!(err.to_string().contains("world has no rooms"));
    }

    #[test]
    fn duplicate_room_keys_are_rejected() {
        let mut b = WorldBuilder::new("Test");
        b.add_room("cell", "Cell", "").unwrap();
        let err = b.add_room("cell", "Other Cell", "").unwrap_err();
        assert!(matches!(err, WorldError::DuplicateRoom(k) if k == "cell"));
    }

    #[test]
    fn link_to_unknown_room_fails() {
        let mut b = WorldBuilder::new("Test");
        b.add_room("cell", "Cell", "").unwrap();
        let err = b.link("cell", "north", "nowhere").unwrap_err();
        assert!(matches!(err, WorldError::UnknownRoom { ref key, .. } if key == "nowhere"));
    }

    #[test]
    fn start_defaults_to_first_room() {
        let mut b = WorldBuilder::new("Test");
        b.add_room("cell", "Cell", "").unwrap();
        b.add_room("yard", "Yard", "").unwrap();
        let world = b.build().unwrap();
        assert_eq!(world.start_room, RoomId(0));
    }

    #[test]
    fn item_ids_are_unique_and_sequential() {
        let mut b = WorldBuilder::new("Test");
        let cell = b.add_room("cell", "Cell", "").unwrap();
        let a = b.add_item(cell, "Torch", Vec::new(), "", true).unwrap();
        let c = b.add_item(cell, "Bed", Vec::new(), "", false).unwrap();
        assert_ne!(a, c);
        let world = b.build().unwrap();
        assert_eq!(world.room(cell).items.len(), 2);
    }

    #[test]
    fn foreign_room_ids_are_rejected() {
        let mut big = WorldBuilder::new("Big");
        for key in ["a", "b", "c"] {
            big.add_room(key, key, "").unwrap();
        }
        let foreign = big.room_id("c").unwrap();

        let mut small = WorldBuilder::new("Small");
        let only = small.add_room("only", "Only", "").unwrap();

        let err = small.add_exit(only, "north", foreign).unwrap_err();
        assert!(matches!(err, WorldError::UnknownRoom { ref key, .. } if key == "#2"));
        let err = small.add_exit(foreign, "south", only).unwrap_err();
        assert!(matches!(err, WorldError::UnknownRoom { .. }));
        let err = small
            .add_item(foreign, "Gold Coin", Vec::new(), "", true)
            .unwrap_err();
        assert!(matches!(err, WorldError::UnknownRoom { .. }));

        let world = small.build().unwrap();
        assert!(world.room(only).exits.is_empty());
        assert_eq!(world.items_in_rooms().count(), 0);
    }

    #[test]
    fn relinking_overwrites_direction() {
        let mut b = WorldBuilder::new("Test");
        b.add_room("corridor", "Corridor", "").unwrap();
        let hall = b.add_room("hall", "Hall", "").unwrap();
        let guard = b.add_room("guard", "Guard Room", "").unwrap();
        b.link("corridor", "north", "hall").unwrap();
        b.link("corridor", "north", "guard").unwrap();
        let world = b.build().unwrap();
        let corridor = world.room_by_key("corridor").unwrap();
        assert_eq!(world.room(corridor).exit("north"), Some(guard));
        assert_ne!(world.room(corridor).exit("north"), Some(hall));
    }
}
