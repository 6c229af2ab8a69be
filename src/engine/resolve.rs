//! Alias resolution: which item does the player mean by "rusty key"?

use crate::error::CommandError;
use crate::parser::{strip_noise, tokenize};
use crate::world::{Item, Room};

/// Which container a candidate was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holder {
    Room,
    Inventory,
}

/// Which containers a lookup may search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Room,
    Inventory,
    Everywhere,
}

impl From<Holder> for Scope {
    fn from(holder: Holder) -> Self {
        match holder {
            Holder::Room => Scope::Room,
            Holder::Inventory => Scope::Inventory,
        }
    }
}

impl Scope {
    fn includes(self, holder: Holder) -> bool {
        match self {
            Scope::Everywhere => true,
            Scope::Room => holder == Holder::Room,
            Scope::Inventory => holder == Holder::Inventory,
        }
    }
}

/// A candidate item and where it sits, so callers can move it afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    pub holder: Holder,
    pub index: usize,
    pub item: &'a Item,
}

#[derive(Debug)]
pub enum Resolution<'a> {
    Found(Located<'a>),
    NotFound,
    Ambiguous(Vec<&'a Item>),
}

impl<'a> Resolution<'a> {
    /// Turns the two failure branches into the message shown to the player.
    /// `scope` is where the lookup searched, so "not found" can say where.
    pub fn into_result(
        self,
        phrase: &str,
        scope: impl Into<Scope>,
    ) -> Result<Located<'a>, CommandError> {
        match self {
            Resolution::Found(located) => Ok(located),
            Resolution::NotFound => Err(CommandError::NoMatch {
                phrase: phrase.to_string(),
                scope: scope.into(),
            }),
            Resolution::Ambiguous(items) => Err(CommandError::Ambiguous(
                items.into_iter().map(|i| i.name.clone()).collect(),
            )),
        }
    }
}

/// Lower-cased phrase words with noise removed.
pub fn phrase_words(phrase: &str) -> Vec<String> {
    strip_noise(&tokenize(phrase))
}

/// Every word of the phrase must be a substring of at least one alias.
pub fn matches_words(item: &Item, words: &[String]) -> bool {
    !words.is_empty()
        && words
            .iter()
            .all(|w| item.aliases.iter().any(|alias| alias.contains(w.as_str())))
}

/// Whole phrase equals one alias exactly.
pub fn matches_alias(item: &Item, words: &[String]) -> bool {
    let phrase = words.join(" ");
    !phrase.is_empty() && item.aliases.iter().any(|alias| *alias == phrase)
}

fn located(holder: Holder, items: &[Item]) -> impl Iterator<Item = Located<'_>> {
    items
        .iter()
        .enumerate()
        .map(move |(index, item)| Located {
            holder,
            index,
            item,
        })
}

fn collect<'a, F>(candidates: impl Iterator<Item = Located<'a>>, matches: F) -> Resolution<'a>
where
    F: Fn(&Item) -> bool,
{
    let mut hits: Vec<Located<'a>> = candidates.filter(|c| matches(c.item)).collect();

    match hits.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Found(hits.remove(0)),
        _ => {
            let mut items: Vec<&Item> = hits.into_iter().map(|c| c.item).collect();
            items.sort_by(|a, b| a.name.cmp(&b.name));
            Resolution::Ambiguous(items)
        }
    }
}

/// Substring resolution over the room and/or the inventory.
pub fn resolve<'a>(
    room: &'a Room,
    inventory: &'a [Item],
    scope: Scope,
    phrase: &str,
) -> Resolution<'a> {
    let words = phrase_words(phrase);
    let candidates = located(Holder::Room, &room.items)
        .chain(located(Holder::Inventory, inventory))
        .filter(|c| scope.includes(c.holder));
    collect(candidates, |item| matches_words(item, &words))
}

/// Exact-alias resolution over a single list (the room floor or the inventory).
/// Substring matching is only consulted to tell "ambiguous" apart from "not found";
/// a lone substring hit is still not found.
pub fn resolve_exact<'a>(holder: Holder, items: &'a [Item], phrase: &str) -> Resolution<'a> {
    let words = phrase_words(phrase);
    match collect(located(holder, items), |item| matches_alias(item, &words)) {
        Resolution::NotFound => {
            match collect(located(holder, items), |item| matches_words(item, &words)) {
                ambiguous @ Resolution::Ambiguous(_) => ambiguous,
                _ => Resolution::NotFound,
            }
        }
        exact => exact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rusty() -> Item {
        Item::new("rusty_key", "rusty key", "A small, rusty iron key.")
            .with_aliases(["key", "iron key", "small key", "rusty"])
    }

    fn golden() -> Item {
        Item::new("golden_key", "golden key", "A large, shiny golden key.")
            .with_aliases(["key", "gold key", "shiny key", "golden"])
    }

    fn room_with(items: Vec<Item>) -> Room {
        Room {
            id: "r".into(),
            name: "R".into(),
            desc: String::new(),
            items,
        }
    }

    fn found_name(res: Resolution<'_>) -> String {
        match res {
            Resolution::Found(l) => l.item.name.clone(),
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn substring_of_alias_matches() {
        let room = room_with(vec![rusty(), Item::new("sword", "sword", "")]);
        assert_eq!(found_name(resolve(&room, &[], Scope::Room, "rus")), "rusty key");
        assert_eq!(found_name(resolve(&room, &[], Scope::Room, "the IRON key")), "rusty key");
    }

    #[test]
    fn every_word_must_match() {
        let room = room_with(vec![rusty()]);
        assert!(matches!(
            resolve(&room, &[], Scope::Room, "rusty sword"),
            Resolution::NotFound
        ));
    }

    #[test]
    fn shared_word_is_ambiguous() {
        let room = room_with(vec![rusty(), golden()]);
        match resolve(&room, &[], Scope::Everywhere, "key") {
            Resolution::Ambiguous(items) => {
                let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
                assert_eq!(names, vec!["golden key", "rusty key"]);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
        assert_eq!(found_name(resolve(&room, &[], Scope::Room, "gold key")), "golden key");
    }

    #[test]
    fn scope_is_respected() {
        let room = room_with(vec![golden()]);
        let inventory = vec![rusty()];
        assert!(matches!(
            resolve(&room, &inventory, Scope::Inventory, "golden"),
            Resolution::NotFound
        ));
        assert!(matches!(
            resolve(&room, &inventory, Scope::Room, "rusty"),
            Resolution::NotFound
        ));
        match resolve(&room, &inventory, Scope::Inventory, "key") {
            Resolution::Found(l) => {
                assert_eq!(l.holder, Holder::Inventory);
                assert_eq!(l.index, 0);
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn noise_only_phrase_matches_nothing() {
        let room = room_with(vec![rusty()]);
        assert!(matches!(resolve(&room, &[], Scope::Room, "the"), Resolution::NotFound));
    }

    #[test]
    fn exact_alias_wins_over_substring() {
        // "sword" is a substring of "swordfish" but only one alias equals it.
        let items = vec![
            Item::new("sword", "sword", ""),
            Item::new("fish", "swordfish", ""),
        ];
        match resolve_exact(Holder::Room, &items, "sword") {
            Resolution::Found(l) => assert_eq!(l.index, 0),
            other => panic!("expected a match, got {other:?}"),
        }
        assert!(matches!(
            resolve(&room_with(items.clone()), &[], Scope::Room, "sword"),
            Resolution::Ambiguous(_)
        ));
    }

    #[test]
    fn substring_hits_do_not_count_as_exact() {
        let items = vec![rusty(), golden()];
        assert_eq!(found_name(resolve_exact(Holder::Room, &items, "iron key")), "rusty key");
        assert!(matches!(
            resolve_exact(Holder::Room, &items, "iron"),
            Resolution::NotFound
        ));
        // "ke" is no alias, but it hits both keys.
        assert!(matches!(
            resolve_exact(Holder::Room, &items, "ke"),
            Resolution::Ambiguous(_)
        ));
        assert!(matches!(
            resolve_exact(Holder::Room, &items, "lantern"),
            Resolution::NotFound
        ));
    }

    #[test]
    fn exact_ambiguity_is_reported() {
        let items = vec![rusty(), golden()];
        let err = resolve_exact(Holder::Room, &items, "key")
            .into_result("key", Holder::Room)
            .unwrap_err();
        assert_eq!(
            err,
            CommandError::Ambiguous(vec!["golden key".into(), "rusty key".into()])
        );
    }

    #[test]
    fn not_found_keeps_the_phrase() {
        let err = resolve_exact(Holder::Inventory, &[], "magic lamp")
            .into_result("magic lamp", Holder::Inventory)
            .unwrap_err();
        assert_eq!(
            err,
            CommandError::NoMatch {
                phrase: "magic lamp".into(),
                scope: Scope::Inventory,
            }
        );
    }
}
