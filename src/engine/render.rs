use crate::engine::helpers::{current_room, name_list};
use crate::engine::output::Output;
use crate::error::CommandResult;
use crate::parser::Command;
use crate::world;

/// Room title, description, item list and exits.
pub fn render_room(out: &mut Output, world: &world::World, room: &world::Room) {
    out.title(room.name.clone());
    out.say(room.desc.trim());
    out.say(format!("Items in the room: {}", name_list(&room.items, "none")));

    let mut dirs: Vec<&str> = world.exits_from(&room.id).collect();
    if dirs.is_empty() {
        out.set_exits("Exits: none");
    } else {
        dirs.sort();
        out.set_exits(format!("Exits: {}", dirs.join(", ")));
    }
}

/// `look` on its own describes the room; `look <thing>` examines it.
pub fn handle_look(
    world: &mut world::World,
    player: &mut world::Player,
    cmd: &Command,
    out: &mut Output,
) -> CommandResult {
    if cmd.args.iter().any(|w| w != "at") {
        return crate::engine::items::handle_examine(world, player, cmd, out);
    }

    let room = current_room(world, player)?;
    render_room(out, world, room);
    Ok(())
}
