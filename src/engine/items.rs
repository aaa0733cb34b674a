use crate::engine::output::Output;
use crate::engine::player::{Player, TakeRefused};
use crate::world::World;

pub const INVENTORY_RULE_WIDTH: usize = 40;

/// Describes an item by name. Carried items shadow items lying in the room.
pub fn handle_look_at(out: &mut Output, player: &Player, world: &World, target_name: &str) {
    let query = target_name.trim();

    let found = player
        .carried(query)
        .or_else(|| world.room(player.location).find_item(query));

    match found {
        Some(item) => out.say(&item.desc),
        None => out.say(format!("You don't see any '{}' here.", query)),
    }
}

pub fn handle_take(out: &mut Output, player: &mut Player, world: &mut World, target_name: &str) {
    let query = target_name.trim();
    if query.is_empty() {
        out.say("Take what?");
        return;
    }

    let room = world.room_mut(player.location);
    match player.take_from(room, query) {
        Ok(item) => out.say(format!("You picked up the {}.", item.name)),
        Err(TakeRefused::NotHere) => {
            out.say(format!("You don't see a '{}' here to take.", query))
        }
        Err(TakeRefused::NotTakeable(name)) => out.say(format!("You can't take the {}.", name)),
    }
}

pub fn handle_inventory(out: &mut Output, player: &Player) {
    out.rule('=', INVENTORY_RULE_WIDTH);
    out.say("Inventory:");
    if player.inventory.is_empty() {
        out.say("You are not carrying anything.");
    } else {
        for item in &player.inventory {
            out.entry(&item.name);
        }
    }
    out.rule('=', INVENTORY_RULE_WIDTH);
}
