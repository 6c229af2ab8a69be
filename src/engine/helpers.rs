use crate::error::CommandError;
use crate::world::{Item, Player, Room, World};

/// The room the player stands in. A missing room means the world data is broken.
pub fn current_room<'a>(world: &'a World, player: &Player) -> Result<&'a Room, CommandError> {
    world
        .room(&player.room)
        .ok_or_else(|| CommandError::MissingRoom(player.room.clone()))
}

pub fn current_room_mut<'a>(
    world: &'a mut World,
    player: &Player,
) -> Result<&'a mut Room, CommandError> {
    world
        .room_mut(&player.room)
        .ok_or_else(|| CommandError::MissingRoom(player.room.clone()))
}

/// "rusty key, sword" or `empty` when there is nothing to list.
pub fn name_list(items: &[Item], empty: &str) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<&str>>()
        .join(", ")
}
