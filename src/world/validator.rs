use std::collections::HashSet;

use super::model::{Item, World};

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Consistency checks that do not stop a world from loading. The game can
/// still run with these; the affected exits or rules just fail when used.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    // start_room must exist
    if !world.rooms.contains_key(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    // Validate exits
    for (key, target) in &world.exits {
        if !world.rooms.contains_key(target) {
            errors.push(ValidationError::new(format!(
                "room '{}' exit '{}' targets missing room '{}'",
                key.room, key.direction, target
            )));
        }
    }

    // Every item name, nested ones included
    let mut item_names: HashSet<String> = HashSet::new();
    let roots = world
        .rooms
        .values()
        .flat_map(|room| room.items.iter())
        .chain(world.starting_inventory.iter());
    for item in roots {
        collect_names(item, &mut item_names);
    }

    // Validate use rules
    for rule in &world.use_rules {
        for (role, name) in [("item", &rule.item), ("target", &rule.target)] {
            if !item_names.contains(&name.to_lowercase()) {
                errors.push(ValidationError::new(format!(
                    "use_rule {} '{}' does not name any item",
                    role, name
                )));
            }
        }
    }

    errors
}

fn collect_names(item: &Item, names: &mut HashSet<String>) {
    names.insert(item.name.to_lowercase());
    for child in &item.contents {
        collect_names(child, names);
    }
}
