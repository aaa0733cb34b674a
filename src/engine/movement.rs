use log::debug;

use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::engine::render::render_room;
use crate::world::World;

/// Follows the exit named `direction`. Returns true if the player moved.
pub fn handle_go(out: &mut Output, player: &mut Player, world: &World, direction: &str) -> bool {
    let direction = direction.trim().to_lowercase();

    let Some(next) = world.room(player.location).exit(&direction) else {
        out.say("You can't go that way.");
        return false;
    };

    debug!(
        "player moved {} from '{}' to '{}'",
        direction,
        world.room(player.location).key,
        world.room(next).key
    );
    out.say(format!("You move {}...", direction));
    player.location = next;
    render_room(out, world, next);
    true
}
