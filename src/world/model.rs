use std::collections::{BTreeMap, HashMap};

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop.
#[derive(Debug)]
pub struct World {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub start_room: String,
    pub rooms: HashMap<String, Room>,
    pub exits: BTreeMap<ExitKey, String>,
    pub use_rules: Vec<UseRule>,
    /// Items the player starts out carrying.
    pub starting_inventory: Vec<Item>,
}

#[derive(Debug)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub desc: String,
    pub items: Vec<Item>,
}

/// Source side of an exit: (room, direction). Ordered so all exits of a room
/// sit next to each other in the exit table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExitKey {
    pub room: String,
    pub direction: String,
}

impl ExitKey {
    pub fn new(room: impl Into<String>, direction: impl Into<String>) -> Self {
        ExitKey {
            room: room.into(),
            direction: direction.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub desc: String,
    /// Lower-cased; always contains the primary name.
    pub aliases: Vec<String>,
    pub locked: bool,
    pub contents: Vec<Item>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, desc: impl Into<String>) -> Self {
        let name = name.into();
        Item {
            id: id.into(),
            aliases: vec![name.to_lowercase()],
            name,
            desc: desc.into(),
            locked: false,
            contents: Vec::new(),
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for alias in aliases {
            let alias = alias.as_ref().trim().to_lowercase();
            if !alias.is_empty() && !self.aliases.contains(&alias) {
                self.aliases.push(alias);
            }
        }
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn containing(mut self, item: Item) -> Self {
        self.contents.push(item);
        self
    }

    /// An item is a container once it can hold (or holds) other items.
    pub fn is_container(&self) -> bool {
        self.locked || !self.contents.is_empty()
    }

    /// True if the item with `id` sits anywhere below this one.
    pub fn holds(&self, id: &str) -> bool {
        self.contents
            .iter()
            .any(|child| child.id == id || child.holds(id))
    }
}

#[derive(Debug)]
pub struct Player {
    /// Key into `World::rooms`; the room itself stays owned by the world.
    pub room: String,
    pub inventory: Vec<Item>,
}

impl Player {
    pub fn new(room: impl Into<String>) -> Self {
        Player {
            room: room.into(),
            inventory: Vec::new(),
        }
    }
}

/// One row of the "use X on Y" table. Names are matched against primary item names.
#[derive(Debug, Clone, PartialEq)]
pub struct UseRule {
    pub item: String,
    pub target: String,
    /// Empty means any preposition.
    pub prepositions: Vec<String>,
    pub effect: UseEffect,
}

impl UseRule {
    pub fn applies(&self, item: &str, target: &str, preposition: &str) -> bool {
        self.item.eq_ignore_ascii_case(item)
            && self.target.eq_ignore_ascii_case(target)
            && (self.prepositions.is_empty()
                || self
                    .prepositions
                    .iter()
                    .any(|p| p.eq_ignore_ascii_case(preposition)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UseEffect {
    /// Unlock the target and spill its contents into the room.
    Unlock { text: Option<String> },
    /// Fixed response, no state change.
    Message(String),
}

impl World {
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn room_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    pub fn exit(&self, room: &str, direction: &str) -> Option<&str> {
        self.exits
            .get(&ExitKey::new(room, direction))
            .map(String::as_str)
    }

    /// Directions leading out of `room`, derived from the exit table.
    pub fn exits_from<'a>(&'a self, room: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.exits
            .range(ExitKey::new(room, "")..)
            .take_while(move |(key, _)| key.room == room)
            .map(|(key, _)| key.direction.as_str())
    }

    /// Which room, if any, directly holds the item with this id.
    pub fn room_holding(&self, item_id: &str) -> Option<&Room> {
        self.rooms
            .values()
            .find(|room| room.items.iter().any(|item| item.id == item_id))
    }
}
