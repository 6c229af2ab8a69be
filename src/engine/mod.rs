mod actions;
mod dispatch;
mod help;
mod helpers;
mod items;
mod movement;
mod output;
mod render;
mod resolve;

pub use actions::handle_use;
pub use dispatch::{Dispatcher, Handler};
pub use help::{HELP_TABLE, handle_help};
pub use items::{handle_drop, handle_examine, handle_inventory, handle_take};
pub use movement::handle_go;
pub use output::{Output, OutputBlock};
pub use render::{handle_look, render_room};
pub use resolve::{Holder, Located, Resolution, Scope, resolve, resolve_exact};
