use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use tracing::debug;

use super::model::{ExitKey, Item, Room, UseEffect, UseRule, World};
use crate::error::WorldError;

/// The cave world the game ships with.
pub const DEFAULT_WORLD: &str = include_str!("../../public/cave.toml");

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
    #[serde(default)]
    use_rule: Vec<UseRuleConfig>, // [[use_rule]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    #[serde(default)]
    name: String,
    start_room: String,
    #[serde(default)]
    desc: String,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    #[serde(default)]
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
    id: String,
    name: String,

    /// Where the item starts: "room:cave_entrance", "inventory", "item:chest".
    start_location: String,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    aliases: Vec<String>,

    #[serde(default)]
    locked: bool,
}

#[derive(Deserialize)]
struct UseRuleConfig {
    item: String,
    target: String,

    #[serde(default)]
    prepositions: Vec<String>,

    /// "unlock" or "message"
    effect: String,

    #[serde(default)]
    text: Option<String>,
}

enum StartLocation {
    Room(String),
    Inventory,
    Item(String),
}

fn parse_location(item_id: &str, raw: &str) -> Result<StartLocation, WorldError> {
    let raw = raw.trim();
    let bad = || WorldError::BadLocation {
        item: item_id.to_string(),
        location: raw.to_string(),
    };

    if raw.eq_ignore_ascii_case("inventory") {
        return Ok(StartLocation::Inventory);
    }

    match raw.split_once(':') {
        Some((kind, id)) if !id.trim().is_empty() => match kind.trim() {
            "room" => Ok(StartLocation::Room(id.trim().to_string())),
            "item" => Ok(StartLocation::Item(id.trim().to_string())),
            _ => Err(bad()),
        },
        _ => Err(bad()),
    }
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Public API: load a world from TOML text.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    // Basic validation
    if world_file.world.id.trim().is_empty() {
        return Err(WorldError::Empty("world.id"));
    }
    if world_file.world.start_room.trim().is_empty() {
        return Err(WorldError::Empty("world.start_room"));
    }

    // Rooms, with their exits flattened into one table
    let mut rooms: HashMap<String, Room> = HashMap::new();
    let mut exits: BTreeMap<ExitKey, String> = BTreeMap::new();

    for room_cfg in world_file.room {
        if rooms.contains_key(&room_cfg.id) {
            return Err(WorldError::DuplicateRoom(room_cfg.id));
        }

        for exit in room_cfg.exit {
            let key = ExitKey::new(room_cfg.id.clone(), exit.direction.trim().to_lowercase());
            if exits.contains_key(&key) {
                return Err(WorldError::DuplicateExit {
                    room: key.room,
                    direction: key.direction,
                });
            }
            exits.insert(key, exit.target);
        }

        let name = if room_cfg.name.trim().is_empty() {
            room_cfg.id.clone()
        } else {
            room_cfg.name
        };

        rooms.insert(
            room_cfg.id.clone(),
            Room {
                id: room_cfg.id,
                name,
                desc: room_cfg.desc,
                items: Vec::new(),
            },
        );
    }

    // Items: build every item first, then nest children into parents, then place roots.
    let mut items: HashMap<String, Item> = HashMap::new();
    let mut locations: Vec<(String, StartLocation)> = Vec::new();

    for item_cfg in world_file.item {
        if items.contains_key(&item_cfg.id) {
            return Err(WorldError::DuplicateItem(item_cfg.id));
        }
        let location = parse_location(&item_cfg.id, &item_cfg.start_location)?;
        let item = Item::new(item_cfg.id.clone(), item_cfg.name, item_cfg.desc)
            .with_aliases(&item_cfg.aliases)
            .locked(item_cfg.locked);
        locations.push((item_cfg.id.clone(), location));
        items.insert(item_cfg.id, item);
    }

    let mut children: HashMap<String, Vec<String>> = HashMap::new();
    for (id, location) in &locations {
        if let StartLocation::Item(parent) = location {
            if !items.contains_key(parent) {
                return Err(WorldError::MissingParent {
                    item: id.clone(),
                    parent: parent.clone(),
                });
            }
            children.entry(parent.clone()).or_default().push(id.clone());
        }
    }

    let mut starting_inventory = Vec::new();
    for (id, location) in &locations {
        let root = match location {
            StartLocation::Item(_) => continue,
            StartLocation::Room(room_id) => Some(room_id),
            StartLocation::Inventory => None,
        };

        let item = assemble(id, &mut items, &children)?;
        match root {
            Some(room_id) => match rooms.get_mut(room_id) {
                Some(room) => room.items.push(item),
                None => {
                    return Err(WorldError::BadLocation {
                        item: id.clone(),
                        location: format!("room:{room_id}"),
                    });
                }
            },
            None => starting_inventory.push(item),
        }
    }

    // Anything not reached from a room or the inventory hangs off a cycle.
    if let Some(id) = items.keys().min() {
        return Err(WorldError::ContainmentCycle(id.clone()));
    }

    let mut use_rules = Vec::new();
    for rule_cfg in world_file.use_rule {
        let effect_name = rule_cfg.effect.trim().to_lowercase();
        let effect = match effect_name.as_str() {
            "unlock" => UseEffect::Unlock {
                text: rule_cfg.text,
            },
            "message" => match rule_cfg.text.filter(|t| !t.trim().is_empty()) {
                Some(text) => UseEffect::Message(text),
                None => {
                    return Err(WorldError::MissingText {
                        item: rule_cfg.item,
                        target: rule_cfg.target,
                    });
                }
            },
            _ => {
                return Err(WorldError::UnknownEffect {
                    item: rule_cfg.item,
                    target: rule_cfg.target,
                    effect: rule_cfg.effect,
                });
            }
        };
        use_rules.push(UseRule {
            item: rule_cfg.item,
            target: rule_cfg.target,
            prepositions: rule_cfg
                .prepositions
                .iter()
                .map(|p| p.trim().to_lowercase())
                .collect(),
            effect,
        });
    }

    debug!(
        world = %world_file.world.id,
        rooms = rooms.len(),
        exits = exits.len(),
        rules = use_rules.len(),
        "world loaded"
    );

    Ok(World {
        id: world_file.world.id,
        name: world_file.world.name,
        desc: world_file.world.desc,
        start_room: world_file.world.start_room,
        rooms,
        exits,
        use_rules,
        starting_inventory,
    })
}

/// Take `id` out of the pool and hang all its children (recursively) inside it.
fn assemble(
    id: &str,
    items: &mut HashMap<String, Item>,
    children: &HashMap<String, Vec<String>>,
) -> Result<Item, WorldError> {
    let mut item = items
        .remove(id)
        .ok_or_else(|| WorldError::ContainmentCycle(id.to_string()))?;

    if let Some(kids) = children.get(id) {
        for child in kids {
            let child = assemble(child, items, children)?;
            item.contents.push(child);
        }
    }

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
[world]
id = "small"
name = "Small"
start_room = "hall"

[[room]]
id = "hall"
desc = "A hall."

  [[room.exit]]
  direction = "North"
  target = "attic"

[[room]]
id = "attic"
name = "Attic"
desc = "Dusty."

  [[room.exit]]
  direction = "south"
  target = "hall"

[[item]]
id = "box"
name = "box"
start_location = "room:attic"
locked = true

[[item]]
id = "gem"
name = "Red Gem"
aliases = ["gem", "Ruby"]
start_location = "item:box"

[[item]]
id = "note"
name = "note"
start_location = "inventory"

[[use_rule]]
item = "note"
target = "box"
effect = "message"
text = "The box ignores your note."
"#;

    #[test]
    fn loads_rooms_exits_and_items() {
        let world = load_world_from_str(SMALL).unwrap();
        assert_eq!(world.start_room, "hall");
        assert_eq!(world.rooms.len(), 2);
        // Room name falls back to its id.
        assert_eq!(world.room("hall").unwrap().name, "hall");
        // Directions are normalised.
        assert_eq!(world.exit("hall", "north"), Some("attic"));

        let attic = world.room("attic").unwrap();
        assert_eq!(attic.items.len(), 1);
        let chest = &attic.items[0];
        assert!(chest.locked);
        assert_eq!(chest.contents.len(), 1);
        assert_eq!(chest.contents[0].aliases, vec!["red gem", "gem", "ruby"]);

        assert_eq!(world.starting_inventory.len(), 1);
        assert_eq!(world.use_rules.len(), 1);
    }

    #[test]
    fn default_world_loads() {
        let world = load_world_from_str(DEFAULT_WORLD).unwrap();
        assert_eq!(world.start_room, "outside");
        assert_eq!(world.exit("outside", "north"), Some("cave_entrance"));
        let treasure = world.room("treasure_room").unwrap();
        let chest = treasure.items.iter().find(|i| i.name == "chest").unwrap();
        assert!(chest.locked);
        assert_eq!(chest.contents[0].name, "lantern");
    }

    #[test]
    fn rejects_duplicate_items_even_when_nested() {
        let src = r#"
[world]
id = "w"
start_room = "a"
[[room]]
id = "a"
[[item]]
id = "box"
name = "box"
start_location = "room:a"
[[item]]
id = "gem"
name = "gem"
start_location = "item:box"
[[item]]
id = "gem"
name = "other gem"
start_location = "inventory"
"#;
        match load_world_from_str(src) {
            Err(WorldError::DuplicateItem(id)) => assert_eq!(id, "gem"),
            other => panic!("expected DuplicateItem, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_rooms() {
        let src = r#"
[world]
id = "w"
start_room = "a"
[[room]]
id = "a"
[[room]]
id = "a"
"#;
        assert!(matches!(
            load_world_from_str(src),
            Err(WorldError::DuplicateRoom(id)) if id == "a"
        ));
    }

    #[test]
    fn rejects_duplicate_exit_directions() {
        let src = r#"
[world]
id = "w"
start_room = "a"
[[room]]
id = "a"
  [[room.exit]]
  direction = "north"
  target = "a"
  [[room.exit]]
  direction = "NORTH"
  target = "a"
"#;
        assert!(matches!(
            load_world_from_str(src),
            Err(WorldError::DuplicateExit { .. })
        ));
    }

    #[test]
    fn rejects_containment_cycles() {
        let src = r#"
[world]
id = "w"
start_room = "a"
[[room]]
id = "a"
[[item]]
id = "x"
name = "x"
start_location = "item:y"
[[item]]
id = "y"
name = "y"
start_location = "item:x"
"#;
        assert!(matches!(
            load_world_from_str(src),
            Err(WorldError::ContainmentCycle(_))
        ));
    }

    #[test]
    fn rejects_self_containment() {
        let src = r#"
[world]
id = "w"
start_room = "a"
[[room]]
id = "a"
[[item]]
id = "x"
name = "x"
start_location = "item:x"
"#;
        assert!(matches!(
            load_world_from_str(src),
            Err(WorldError::ContainmentCycle(_))
        ));
    }

    #[test]
    fn rejects_bad_locations_and_effects() {
        let bad_location = r#"
[world]
id = "w"
start_room = "a"
[[room]]
id = "a"
[[item]]
id = "x"
name = "x"
start_location = "pocket"
"#;
        assert!(matches!(
            load_world_from_str(bad_location),
            Err(WorldError::BadLocation { .. })
        ));

        let bad_effect = r#"
[world]
id = "w"
start_room = "a"
[[use_rule]]
item = "x"
target = "y"
effect = "explode"
"#;
        assert!(matches!(
            load_world_from_str(bad_effect),
            Err(WorldError::UnknownEffect { .. })
        ));
    }

    #[test]
    fn message_rules_need_text() {
        let rule = |text: &str| {
            format!(
                r#"
[world]
id = "w"
start_room = "a"
[[use_rule]]
item = "rock"
target = "door"
effect = "message"
{text}
"#
            )
        };

        for missing in ["", r#"text = "  ""#] {
            match load_world_from_str(&rule(missing)) {
                Err(WorldError::MissingText { item, target }) => {
                    assert_eq!((item.as_str(), target.as_str()), ("rock", "door"));
                }
                other => panic!("expected MissingText, got {other:?}"),
            }
        }

        let world = load_world_from_str(&rule(r#"text = "Thud.""#)).unwrap();
        assert_eq!(world.use_rules[0].effect, UseEffect::Message("Thud.".into()));
    }

    #[test]
    fn empty_start_room_is_rejected() {
        let src = r#"
[world]
id = "w"
start_room = " "
"#;
        assert!(matches!(
            load_world_from_str(src),
            Err(WorldError::Empty("world.start_room"))
        ));
    }
}
