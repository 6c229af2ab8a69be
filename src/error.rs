use std::io;

use thiserror::Error;

use crate::engine::Scope;

/// Failures while turning a world file into a runtime `World`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read world file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse world file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0} may not be empty")]
    Empty(&'static str),

    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),

    #[error("duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("room '{room}' has more than one exit '{direction}'")]
    DuplicateExit { room: String, direction: String },

    #[error("item '{item}' has an invalid start_location '{location}'")]
    BadLocation { item: String, location: String },

    #[error("item '{item}' starts inside missing item '{parent}'")]
    MissingParent { item: String, parent: String },

    #[error("item '{0}' is (transitively) contained in itself")]
    ContainmentCycle(String),

    #[error("use_rule for '{item}' on '{target}' has unknown effect '{effect}'")]
    UnknownEffect {
        item: String,
        target: String,
        effect: String,
    },

    #[error("use_rule for '{item}' on '{target}' is a message with no text")]
    MissingText { item: String, target: String },
}

/// Everything a single command can fail with. All of these are recoverable:
/// the message is shown to the player and the session keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Please enter a command.")]
    EmptyCommand,

    #[error("I don't know how to {0}.")]
    UnknownVerb(String),

    #[error("{0}")]
    MissingArgument(&'static str),

    #[error("{0}")]
    Usage(&'static str),

    #[error("You can't go that way!")]
    NoExit,

    /// Nothing in `scope` answers to `phrase`.
    #[error("{}", no_match(.phrase, .scope))]
    NoMatch { phrase: String, scope: Scope },

    #[error("Which do you mean, the {}?", .0.join(" or the "))]
    Ambiguous(Vec<String>),

    #[error("{0}")]
    Refused(String),

    /// An exit leads to a room the world does not define.
    #[error("Error: destination room '{0}' not found in map data.")]
    MissingRoom(String),
}

pub type CommandResult = Result<(), CommandError>;

fn no_match(phrase: &str, scope: &Scope) -> String {
    match scope {
        Scope::Inventory => format!("You don't have the {phrase}."),
        Scope::Room => format!("There is no {phrase} here."),
        Scope::Everywhere => format!("There is no {phrase} here or in your inventory."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_lists_every_candidate() {
        let err = CommandError::Ambiguous(vec!["golden key".into(), "rusty key".into()]);
        assert_eq!(
            err.to_string(),
            "Which do you mean, the golden key or the rusty key?"
        );
    }

    #[test]
    fn unknown_verb_echoes_the_word() {
        assert_eq!(
            CommandError::UnknownVerb("dance".into()).to_string(),
            "I don't know how to dance."
        );
    }

    #[test]
    fn no_match_names_the_place_that_was_searched() {
        let msg = |scope| {
            CommandError::NoMatch {
                phrase: "sword".into(),
                scope,
            }
            .to_string()
        };
        assert_eq!(msg(Scope::Inventory), "You don't have the sword.");
        assert_eq!(msg(Scope::Room), "There is no sword here.");
        assert_eq!(
            msg(Scope::Everywhere),
            "There is no sword here or in your inventory."
        );
    }

    #[test]
    fn missing_room_is_distinct_from_no_exit() {
        let missing = CommandError::MissingRoom("vault".into()).to_string();
        assert!(missing.contains("destination room"));
        assert_ne!(missing, CommandError::NoExit.to_string());
    }
}
