use std::collections::BTreeMap;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Index of a room inside [`World::rooms`]. Stable for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// Stable identity of an item, assigned once by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// Runtime world type used by the game loop.
#[derive(Debug)]
pub struct World {
    pub name: String,
    pub desc: String,
    pub start_room: RoomId,
    pub rooms: Vec<Room>,
}

impl World {
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    /// Lookup by room key (the identifier used in the world description).
    pub fn room_by_key(&self, key: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.key == key).map(RoomId)
    }

    /// Every item currently lying in some room, in room order.
    pub fn items_in_rooms(&self) -> impl Iterator<Item = &Item> {
        self.rooms.iter().flat_map(|r| r.items.iter())
    }
}

#[derive(Debug)]
pub struct Room {
    pub key: String,
    pub name: String,
    pub desc: String,
    /// Lowercased direction -> target. Ordered so exits list alphabetically.
    pub exits: BTreeMap<String, RoomId>,
    pub items: Vec<Item>,
}

impl Room {
    pub fn new(key: impl Into<String>, name: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            key: key.into(),
            name: name.into(),
            desc: desc.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    pub fn add_exit(&mut self, direction: &str, target: RoomId) {
        self.exits.insert(direction.to_lowercase(), target);
    }

    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits.get(&direction.to_lowercase()).copied()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first item (insertion order) answering to `name`.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.answers_to(name))?;
        Some(self.items.remove(idx))
    }

    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.answers_to(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub aliases: Vec<String>,
    pub desc: String,
    pub takeable: bool,
}

impl Item {
    /// Case-insensitive exact match against the display name or any alias.
    pub fn answers_to(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.name.to_lowercase() == name || self.aliases.iter().any(|a| a.to_lowercase() == name)
    }
}
