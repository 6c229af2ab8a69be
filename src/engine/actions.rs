use tracing::info;

use crate::engine::helpers::{current_room, current_room_mut, name_list};
use crate::engine::output::Output;
use crate::engine::resolve::{Scope, resolve};
use crate::error::{CommandError, CommandResult};
use crate::parser::{Command, split_at_preposition};
use crate::world::{self, UseEffect};

const USE_USAGE: &str = "Use what on what? Try 'use [item] on [object]'.";

/// `use <item> <preposition> <target>`: the item must be carried, the target must
/// be in the room. What happens is looked up in the world's use-rule table.
pub fn handle_use(
    world: &mut world::World,
    player: &mut world::Player,
    cmd: &Command,
    out: &mut Output,
) -> CommandResult {
    let split = split_at_preposition(&cmd.args, USE_USAGE)?;
    let item_phrase = split.item_phrase();
    let target_phrase = split.target_phrase();

    let (item_name, target_name, target_index) = {
        let room = current_room(world, player)?;
        let item = resolve(room, &player.inventory, Scope::Inventory, &item_phrase)
            .into_result(&item_phrase, Scope::Inventory)?;
        let target = resolve(room, &player.inventory, Scope::Room, &target_phrase)
            .into_result(&target_phrase, Scope::Room)?;
        (
            item.item.name.clone(),
            target.item.name.clone(),
            target.index,
        )
    };

    let effect = world
        .use_rules
        .iter()
        .find(|rule| rule.applies(&item_name, &target_name, &split.preposition))
        .map(|rule| rule.effect.clone());

    match effect {
        Some(UseEffect::Unlock { text }) => {
            unlock(world, player, target_index, &item_name, text, out)
        }
        Some(UseEffect::Message(text)) => {
            out.say(text);
            Ok(())
        }
        None => {
            out.say(format!(
                "You use the {} {} the {}. It doesn't work.",
                item_name, split.preposition, target_name
            ));
            Ok(())
        }
    }
}

/// Unlock a container in the room and move everything inside it onto the floor.
fn unlock(
    world: &mut world::World,
    player: &world::Player,
    target_index: usize,
    key_name: &str,
    text: Option<String>,
    out: &mut Output,
) -> CommandResult {
    let room = current_room_mut(world, player)?;
    let container = &mut room.items[target_index];

    if !container.locked {
        return Err(CommandError::Refused(format!(
            "The {} is already unlocked.",
            container.name
        )));
    }

    container.locked = false;
    let name = container.name.clone();
    // Detach the whole list before touching the room so nothing is seen twice.
    let spilled = std::mem::take(&mut container.contents);
    info!(container = %name, key = %key_name, items = spilled.len(), "container unlocked");

    out.say(text.unwrap_or_else(|| format!("You unlock the {} with the {}.", name, key_name)));
    if spilled.is_empty() {
        out.event(format!("The {} is empty.", name));
    } else {
        out.event(format!(
            "Inside the {} you find: {}. It falls out onto the floor.",
            name,
            name_list(&spilled, "nothing")
        ));
    }
    room.items.extend(spilled);
    Ok(())
}
