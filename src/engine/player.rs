use log::debug;

use crate::world::{Item, Room, RoomId};

/// Why a `take` did not happen. The item stays where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TakeRefused {
    NotHere,
    NotTakeable(String),
}

#[derive(Debug)]
pub struct Player {
    pub location: RoomId,
    /// Insertion ordered; an item lives here or in exactly one room.
    pub inventory: Vec<Item>,
}

impl Player {
    pub fn new(start: RoomId) -> Self {
        Player {
            location: start,
            inventory: Vec::new(),
        }
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.carried(name).is_some()
    }

    pub fn carried(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|i| i.answers_to(name))
    }

    /// Moves one matching item out of `room` into the inventory.
    pub fn take_from(&mut self, room: &mut Room, name: &str) -> Result<&Item, TakeRefused> {
        match room.find_item(name) {
            None => return Err(TakeRefused::NotHere),
            Some(item) if !item.takeable => return Err(TakeRefused::NotTakeable(item.name.clone())),
            Some(_) => {}
        }

        let item = room.remove_item(name).ok_or(TakeRefused::NotHere)?;
        debug!("item {:?} '{}' moved from '{}' to inventory", item.id, item.name, room.key);
        self.inventory.push(item);
        Ok(&self.inventory[self.inventory.len() - 1])
    }
}
