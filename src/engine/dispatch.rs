//! Verb table: maps every verb word (and its abbreviations) to a handler.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::engine::output::Output;
use crate::engine::{actions, help, items, movement, render};
use crate::error::{CommandError, CommandResult};
use crate::parser::{Command, parse};
use crate::world::{Player, World};

/// Every verb handler has this shape.
pub type Handler = fn(&mut World, &mut Player, &Command, &mut Output) -> CommandResult;

#[derive(Clone, Copy)]
struct Route {
    verb: &'static str,
    handler: Handler,
    /// Arguments the word itself stands for, so "n" runs as "go north".
    implied: &'static [&'static str],
}

pub struct Dispatcher {
    routes: HashMap<&'static str, Route>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Builds the full verb table.
    pub fn new() -> Self {
        let mut dispatcher = Dispatcher {
            routes: HashMap::new(),
        };

        dispatcher.register("go", &[], movement::handle_go);
        dispatcher.register("take", &["get", "pickup"], items::handle_take);
        dispatcher.register("drop", &[], items::handle_drop);
        dispatcher.register("look", &["l"], render::handle_look);
        dispatcher.register("examine", &["x"], items::handle_examine);
        dispatcher.register("inventory", &["i"], items::handle_inventory);
        dispatcher.register("use", &[], actions::handle_use);
        dispatcher.register("help", &["?"], help::handle_help);

        dispatcher.register_shortcut(&["north", "n"], "go", &["north"], movement::handle_go);
        dispatcher.register_shortcut(&["south", "s"], "go", &["south"], movement::handle_go);
        dispatcher.register_shortcut(&["east", "e"], "go", &["east"], movement::handle_go);
        dispatcher.register_shortcut(&["west", "w"], "go", &["west"], movement::handle_go);

        dispatcher
    }

    /// Register a verb and its aliases.
    pub fn register(&mut self, verb: &'static str, aliases: &[&'static str], handler: Handler) {
        let route = Route {
            verb,
            handler,
            implied: &[],
        };
        self.routes.insert(verb, route);
        for alias in aliases {
            self.routes.insert(*alias, route);
        }
    }

    /// Register words that are sugar for `verb` with fixed leading arguments.
    pub fn register_shortcut(
        &mut self,
        words: &[&'static str],
        verb: &'static str,
        implied: &'static [&'static str],
        handler: Handler,
    ) {
        let route = Route {
            verb,
            handler,
            implied,
        };
        for word in words {
            self.routes.insert(*word, route);
        }
    }

    pub fn dispatch(
        &self,
        world: &mut World,
        player: &mut Player,
        cmd: &Command,
        out: &mut Output,
    ) -> CommandResult {
        let route = self
            .routes
            .get(cmd.verb.as_str())
            .ok_or_else(|| CommandError::UnknownVerb(cmd.verb.clone()))?;

        debug!(word = %cmd.verb, verb = route.verb, "dispatching");
        if route.implied.is_empty() {
            (route.handler)(world, player, cmd, out)
        } else {
            let expanded = cmd.with_leading_args(route.verb, route.implied);
            (route.handler)(world, player, &expanded, out)
        }
    }

    /// Parse one line, run it, and turn any failure into a line of output.
    pub fn execute(&self, world: &mut World, player: &mut Player, line: &str, out: &mut Output) {
        let result = parse(line).and_then(|cmd| self.dispatch(world, player, &cmd, out));
        if let Err(err) = result {
            if let CommandError::MissingRoom(room) = &err {
                warn!(%room, "command touched a room that does not exist");
            }
            out.say(err.to_string());
        }
    }
}
