use serde::Deserialize;

use super::builder::WorldBuilder;
use super::error::WorldError;
use super::model::World;

/// The castle the game ships with, compiled into the binary.
const CASTLE_TOML: &str = include_str!("../../public/castle.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
    #[serde(default)]
    item: Vec<ItemConfig>, // [[item]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    #[serde(default)]
    start_room: Option<String>,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    /// Display name, optionally followed by aliases: "Dim Torch|torch".
    name: String,

    /// Key of the room the item starts in.
    room: String,

    #[serde(default)]
    desc: String,

    #[serde(default = "default_true")]
    takeable: bool,
}

// Helper for serde default
fn default_true() -> bool {
    true
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// The built-in castle world.
pub fn castle_world() -> Result<World, WorldError> {
    load_world_from_str(CASTLE_TOML)
}

pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    let desc = normalize_multiline_desc(&world_file.world.desc);
    let mut builder = WorldBuilder::new(world_file.world.name).desc(desc);

    // Rooms first so exits may point forward.
    for room_cfg in &world_file.room {
        builder.add_room(
            &room_cfg.id,
            room_cfg.name.clone(),
            normalize_multiline_desc(&room_cfg.desc),
        )?;
    }

    // Exits are applied in file order; a later exit in the same direction wins.
    for room_cfg in &world_file.room {
        for exit in &room_cfg.exit {
            builder.link(&room_cfg.id, &exit.direction, &exit.target)?;
        }
    }

    for ic in world_file.item {
        let room = builder
            .room_id(&ic.room)
            .ok_or_else(|| WorldError::UnknownRoom {
                context: format!("item '{}'", ic.name),
                key: ic.room.clone(),
            })?;

        let (primary_name, aliases) = parse_name_and_aliases(&ic.name);
        builder.add_item(
            room,
            primary_name,
            aliases,
            normalize_multiline_desc(&ic.desc),
            ic.takeable,
        )?;
    }

    if let Some(start) = world_file.world.start_room {
        let id = builder.room_id(&start).ok_or_else(|| WorldError::UnknownRoom {
            context: "start_room".to_string(),
            key: start.clone(),
        })?;
        builder.set_start(id);
    }

    builder.build()
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        // Indentation inside the TOML string never reaches the player.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                // wrapped line
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}

fn parse_name_and_aliases(raw: &str) -> (String, Vec<String>) {
    let mut parts = raw
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let primary = parts.next().unwrap_or_default();
    (primary, parts.collect())
}
