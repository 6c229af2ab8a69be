pub mod engine;
pub mod error;
pub mod parser;
pub mod world;

use engine::{Dispatcher, Output, render_room};
use error::CommandError;
use world::{Player, World};

pub use error::WorldError;
pub use world::{DEFAULT_WORLD, load_world_from_file, load_world_from_str};

/// Everything one running game owns: the world, the player, and the verb table.
pub struct Session {
    pub world: World,
    pub player: Player,
    dispatcher: Dispatcher,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        session: Session,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from a TOML world string. Call `init()` to get the initial render.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world =
                load_world_from_str(world_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                session: Session::new(world),
            })
        }

        /// Return the welcome text and the starting room.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            to_value(&WasmStepResult {
                blocks: self.session.initialize().blocks,
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, quit) = self.session.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

/// `quit` and `exit` end the session before any parsing happens.
pub fn is_quit(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit")
}

impl Session {
    pub fn new(mut world: World) -> Self {
        let mut player = Player::new(world.start_room.clone());
        player.inventory = std::mem::take(&mut world.starting_inventory);

        Session {
            world,
            player,
            dispatcher: Dispatcher::new(),
        }
    }

    /// Welcome text plus the starting room.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        if self.world.name.trim().is_empty() {
            out.say("Welcome!");
        } else {
            out.say(format!("Welcome to {}!", self.world.name.trim()));
        }
        if !self.world.desc.trim().is_empty() {
            out.say(self.world.desc.trim());
        }

        match self.world.room(&self.player.room) {
            Some(room) => render_room(&mut out, &self.world, room),
            None => {
                tracing::warn!(room = %self.player.room, "start room is missing");
                out.say(CommandError::MissingRoom(self.player.room.clone()).to_string());
            }
        }
        out
    }

    /// Process a single player input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();

        if is_quit(input) {
            out.say("Goodbye!");
            return (out, true);
        }

        self.dispatcher
            .execute(&mut self.world, &mut self.player, input, &mut out);
        (out, false)
    }
}
