//! Command parsing: verb, argument words, and the two-object form.

mod tokenizer;

pub use tokenizer::{NOISE_WORDS, PREPOSITIONS, is_noise, is_preposition, strip_noise, tokenize};

use tracing::debug;

use crate::error::CommandError;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// First meaningful word, lower-cased.
    pub verb: String,
    /// Everything after the verb with noise words removed.
    pub args: Vec<String>,
    /// The arguments split into separate object phrases at "and".
    pub phrases: Vec<Vec<String>>,
}

impl Command {
    /// Argument words joined back into one phrase.
    pub fn object(&self) -> Option<String> {
        if self.args.is_empty() {
            None
        } else {
            Some(self.args.join(" "))
        }
    }

    /// Same command with `words` placed in front of the arguments. Used by
    /// shortcuts such as "n", which means "go north".
    pub fn with_leading_args(&self, verb: &str, words: &[&str]) -> Command {
        let mut args: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        args.extend(self.args.iter().cloned());
        Command {
            verb: verb.to_string(),
            phrases: vec![args.clone()],
            args,
        }
    }
}

/// Parses a raw line. Fails only when nothing meaningful is left.
pub fn parse(input: &str) -> Result<Command, CommandError> {
    let tokens = tokenize(input);

    let mut rest = tokens.iter().skip_while(|w| is_noise(w));
    let verb = rest.next().ok_or(CommandError::EmptyCommand)?.clone();
    let raw_args: Vec<&String> = rest.collect();

    let args = strip_noise(&raw_args);
    let phrases = raw_args
        .split(|w| w.as_str() == tokenizer::LIST_SEPARATOR)
        .map(strip_noise)
        .filter(|phrase| !phrase.is_empty())
        .collect();

    let command = Command {
        verb,
        args,
        phrases,
    };
    debug!(?command, "parsed input");
    Ok(command)
}

/// The two halves of "use X on Y".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectPhrases {
    pub item: Vec<String>,
    pub preposition: String,
    pub target: Vec<String>,
}

impl ObjectPhrases {
    pub fn item_phrase(&self) -> String {
        self.item.join(" ")
    }

    pub fn target_phrase(&self) -> String {
        self.target.join(" ")
    }
}

/// Splits argument words at the first preposition. Needs at least three words,
/// with something meaningful on both sides of the preposition.
pub fn split_at_preposition<S: AsRef<str>>(
    words: &[S],
    usage: &'static str,
) -> Result<ObjectPhrases, CommandError> {
    if words.len() < 3 {
        return Err(CommandError::Usage(usage));
    }

    let boundary = words
        .iter()
        .position(|w| is_preposition(w.as_ref()))
        .ok_or(CommandError::Usage(usage))?;

    let item = strip_noise(&words[..boundary]);
    let target = strip_noise(&words[boundary + 1..]);
    if item.is_empty() || target.is_empty() {
        return Err(CommandError::Usage(usage));
    }

    Ok(ObjectPhrases {
        item,
        preposition: words[boundary].as_ref().to_string(),
        target,
    })
}
