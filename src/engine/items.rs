use tracing::info;

use crate::engine::helpers::{current_room, current_room_mut, name_list};
use crate::engine::output::Output;
use crate::engine::resolve::{Holder, Scope, resolve, resolve_exact};
use crate::error::{CommandError, CommandResult};
use crate::parser::Command;
use crate::world;

fn is_all(cmd: &Command) -> bool {
    cmd.args.len() == 1 && cmd.args[0] == "all"
}

pub fn handle_inventory(
    _world: &mut world::World,
    player: &mut world::Player,
    _cmd: &Command,
    out: &mut Output,
) -> CommandResult {
    if player.inventory.is_empty() {
        out.say("You are carrying nothing.");
        return Ok(());
    }

    out.say("You are carrying:");
    for item in &player.inventory {
        out.say(format!("  {}", item.name));
    }
    Ok(())
}

pub fn handle_take(
    world: &mut world::World,
    player: &mut world::Player,
    cmd: &Command,
    out: &mut Output,
) -> CommandResult {
    let floor = current_room(world, player)?.items.len();

    if cmd.phrases.is_empty() {
        // With nothing named, a lone item is taken implicitly.
        return match floor {
            0 => Err(CommandError::Refused("There is nothing here to take.".into())),
            1 => take_at(world, player, 0, out),
            _ => Err(CommandError::MissingArgument("Take what?")),
        };
    }

    if is_all(cmd) {
        if floor == 0 {
            return Err(CommandError::Refused("There is nothing here to take.".into()));
        }
        while !current_room(world, player)?.items.is_empty() {
            take_at(world, player, 0, out)?;
        }
        return Ok(());
    }

    for phrase in &cmd.phrases {
        let phrase = phrase.join(" ");
        let found = {
            let room = current_room(world, player)?;
            resolve_exact(Holder::Room, &room.items, &phrase)
                .into_result(&phrase, Holder::Room)
                .map(|l| l.index)
        };
        match found {
            Ok(index) => take_at(world, player, index, out)?,
            Err(err) => out.say(err.to_string()),
        }
    }
    Ok(())
}

/// Room -> inventory, one remove followed by one push.
fn take_at(
    world: &mut world::World,
    player: &mut world::Player,
    index: usize,
    out: &mut Output,
) -> CommandResult {
    let item = current_room_mut(world, player)?.items.remove(index);
    info!(item = %item.id, room = %player.room, "item taken");
    out.say(format!("You take the {}.", item.name));
    player.inventory.push(item);
    Ok(())
}

pub fn handle_drop(
    world: &mut world::World,
    player: &mut world::Player,
    cmd: &Command,
    out: &mut Output,
) -> CommandResult {
    if cmd.phrases.is_empty() {
        return Err(CommandError::MissingArgument("Drop what?"));
    }

    if is_all(cmd) {
        if player.inventory.is_empty() {
            return Err(CommandError::Refused("You aren't carrying anything.".into()));
        }
        while !player.inventory.is_empty() {
            drop_at(world, player, 0, out)?;
        }
        return Ok(());
    }

    for phrase in &cmd.phrases {
        let phrase = phrase.join(" ");
        let found = resolve_exact(Holder::Inventory, &player.inventory, &phrase)
            .into_result(&phrase, Holder::Inventory)
            .map(|l| l.index);
        match found {
            Ok(index) => drop_at(world, player, index, out)?,
            Err(err) => out.say(err.to_string()),
        }
    }
    Ok(())
}

/// Inventory -> room. The room is checked first so a broken room never eats the item.
fn drop_at(
    world: &mut world::World,
    player: &mut world::Player,
    index: usize,
    out: &mut Output,
) -> CommandResult {
    let room = current_room_mut(world, player)?;
    let item = player.inventory.remove(index);
    info!(item = %item.id, room = %room.id, "item dropped");
    out.say(format!("You drop the {}.", item.name));
    room.items.push(item);
    Ok(())
}

/// Describe a thing in the room or inventory; with no object, describe the room.
pub fn handle_examine(
    world: &mut world::World,
    player: &mut world::Player,
    cmd: &Command,
    out: &mut Output,
) -> CommandResult {
    let words: Vec<&str> = cmd
        .args
        .iter()
        .map(String::as_str)
        .skip_while(|w| *w == "at")
        .collect();

    let room = current_room(world, player)?;
    if words.is_empty() {
        crate::engine::render::render_room(out, world, room);
        return Ok(());
    }

    let phrase = words.join(" ");
    let item = resolve(room, &player.inventory, Scope::Everywhere, &phrase)
        .into_result(&phrase, Scope::Everywhere)?
        .item;

    let desc = item.desc.trim();
    if desc.is_empty() {
        out.say(format!("You see nothing special about the {}.", item.name));
    } else {
        out.say(desc);
    }

    if item.locked {
        out.say(format!("The {} is locked.", item.name));
    } else if item.is_container() {
        out.say(format!(
            "The {} contains: {}",
            item.name,
            name_list(&item.contents, "nothing")
        ));
    }
    Ok(())
}
