mod builder;
mod error;
mod loader;
mod model;
mod validator;

pub use builder::WorldBuilder;
pub use error::WorldError;
pub use loader::{castle_world, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Item, ItemId, Room, RoomId, World};
pub use validator::{ValidationError, validate_world};
