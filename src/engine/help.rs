use crate::engine::output::Output;
use crate::error::CommandResult;
use crate::parser::Command;
use crate::world;

/// Primary verbs and what they do, in the order `help` prints them.
pub const HELP_TABLE: &[(&str, &str)] = &[
    ("go", "Move in a direction (e.g., 'go north', 'n')"),
    ("take", "Pick up an item (e.g., 'take key', 'get all')"),
    ("drop", "Put down an item from inventory"),
    ("examine", "Look closely at something (e.g., 'examine chest', 'x key')"),
    ("look", "Look around the room"),
    ("inventory", "Check your inventory (or 'i')"),
    ("use", "Combine items (e.g., 'use key on chest')"),
    ("help", "Display this help message (or '?')"),
    ("quit", "Exit the game (or 'exit')"),
];

pub fn handle_help(
    _world: &mut world::World,
    _player: &mut world::Player,
    _cmd: &Command,
    out: &mut Output,
) -> CommandResult {
    out.say("Available commands:");
    for (verb, text) in HELP_TABLE {
        out.say(format!("  {:<10} {}", verb, text));
    }
    Ok(())
}
