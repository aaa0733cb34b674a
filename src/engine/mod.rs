mod help;
mod items;
mod movement;
mod output;
mod parser;
mod player;
mod render;

pub use help::handle_help;

pub use items::{handle_inventory, handle_look_at, handle_take};

pub use movement::handle_go;
pub use output::{Output, OutputBlock};
pub use parser::{Command, parse_command, split_verb_noun};
pub use player::{Player, TakeRefused};
pub use render::render_room;
