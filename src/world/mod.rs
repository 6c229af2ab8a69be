mod loader;
mod model;
mod validator;

pub use loader::{DEFAULT_WORLD, load_world_from_file, load_world_from_str};

pub use model::{ExitKey, Item, Player, Room, UseEffect, UseRule, World};
pub use validator::{ValidationError, validate_world};
