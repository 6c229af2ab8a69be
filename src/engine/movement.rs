use tracing::{info, warn};

use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::error::{CommandError, CommandResult};
use crate::parser::Command;
use crate::world;

pub fn handle_go(
    world: &mut world::World,
    player: &mut world::Player,
    cmd: &Command,
    out: &mut Output,
) -> CommandResult {
    let direction = cmd
        .object()
        .ok_or(CommandError::MissingArgument("Go where? (north, south, etc.)"))?;

    let target = world
        .exit(&player.room, &direction)
        .ok_or(CommandError::NoExit)?
        .to_string();

    let Some(room) = world.room(&target) else {
        warn!(from = %player.room, %direction, %target, "exit leads to a missing room");
        return Err(CommandError::MissingRoom(target));
    };

    info!(from = %player.room, to = %target, "player moved");
    player.room = target;

    out.say(format!("You go {}.", direction));
    render_room(out, world, room);
    Ok(())
}
