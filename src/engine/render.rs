use crate::engine::output::Output;
use crate::world::{RoomId, World};

pub const RULE_WIDTH: usize = 50;

/// Full room description: name, text, loose items, then exits in direction order.
pub fn render_room(out: &mut Output, world: &World, room_id: RoomId) {
    let room = world.room(room_id);

    out.rule('-', RULE_WIDTH);
    out.title(format!("Location: {}", room.name));
    out.rule('-', RULE_WIDTH);
    out.say(room.desc.trim());

    if room.items.is_empty() {
        out.say("The room seems empty of loose items.");
    } else {
        out.say("You see here:");
        for item in &room.items {
            out.entry(&item.name);
        }
    }

    if room.exits.is_empty() {
        out.say("There are no obvious exits.");
    } else {
        out.say("Exits:");
        // BTreeMap iteration is already sorted by direction
        for (direction, target) in &room.exits {
            out.entry(format!("{} ({})", direction, world.room(*target).name));
        }
    }

    out.rule('-', RULE_WIDTH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::WorldBuilder;

    fn two_rooms() -> World {
        let mut b = WorldBuilder::new("Test");
        let cell = b.add_room("cell", "Damp Cell", "Cold.").unwrap();
        b.add_room("corridor", "Narrow Corridor", "Long.").unwrap();
        b.add_room("yard", "Yard", "Open.").unwrap();
        b.link("cell", "north", "corridor").unwrap();
        b.link("cell", "east", "yard").unwrap();
        b.add_item(cell, "Dim Torch", Vec::new(), "", true).unwrap();
        b.build().unwrap()
    }

    #[test]
    fn lists_items_and_sorted_exits() {
        let world = two_rooms();
        let mut out = Output::new();
        render_room(&mut out, &world, world.start_room);

        let text = out.to_text();
        assert!(text.contains("Location: Damp Cell"));
        assert!(text.contains("You see here:\n - Dim Torch\n"));
        assert!(text.contains("Exits:\n - east (Yard)\n - north (Narrow Corridor)\n"));
    }

    #[test]
    fn empty_room_messages() {
        let world = two_rooms();
        let yard = world.room_by_key("yard").unwrap();
        let mut out = Output::new();
        render_room(&mut out, &world, yard);

        let text = out.to_text();
        assert!(text.contains("The room seems empty of loose items."));
        assert!(text.contains("There are no obvious exits."));
    }
}
