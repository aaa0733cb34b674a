pub mod engine;
pub mod world;

use log::debug;

use engine::{
    Command, Output, Player, handle_go, handle_help, handle_inventory, handle_look_at,
    handle_take, parse_command, render_room,
};
use world::World;

pub use world::{WorldError, castle_world, load_world_from_str};

/// Where the command loop is. `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterState {
    Running,
    AwaitingQuitConfirmation,
    Terminated,
}

/// One run of the game: the world, the single player, and the interpreter state.
pub struct Game {
    pub world: World,
    pub player: Player,
    state: InterpreterState,
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
        game: Game,
        initialized: bool,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game on the built-in castle. Call `init()` to get the initial render.
        #[wasm_bindgen(constructor)]
        pub fn new() -> Result<WasmGame, JsValue> {
            let world = castle_world().map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                game: Game::new(world),
                initialized: false,
            })
        }

        /// Return the description of the starting room.
        #[wasm_bindgen]
        pub fn init(&mut self) -> JsValue {
            self.initialized = true;
            let out = self.game.initialize();
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit: false,
            })
            .unwrap_or(JsValue::NULL)
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            if !self.initialized {
                let _ = self.init();
            }
            let (out, quit) = self.game.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl Game {
    pub fn new(world: World) -> Self {
        let player = Player::new(world.start_room);
        Game {
            world,
            player,
            state: InterpreterState::Running,
        }
    }

    pub fn state(&self) -> InterpreterState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == InterpreterState::Terminated
    }

    /// Describes the room the player starts in.
    pub fn initialize(&self) -> Output {
        let mut out = Output::new();
        render_room(&mut out, &self.world, self.player.location);
        out
    }

    /// Process a single line of input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();

        match self.state {
            InterpreterState::Terminated => {}
            InterpreterState::AwaitingQuitConfirmation => {
                let answer = input.trim().to_lowercase();
                if answer == "yes" || answer == "y" {
                    out.say("Goodbye! Thanks for playing.");
                    self.state = InterpreterState::Terminated;
                } else {
                    out.say("Okay, continuing game.");
                    self.state = InterpreterState::Running;
                }
            }
            InterpreterState::Running => {
                if let Some(cmd) = parse_command(input) {
                    debug!("command: {:?}", cmd);
                    self.execute(&mut out, cmd);
                }
            }
        }

        (out, self.is_terminated())
    }

    /// The input stream is exhausted: stop without asking.
    pub fn end_of_input(&mut self) -> Output {
        let mut out = Output::new();
        if !self.is_terminated() {
            out.say("Error reading input or EOF detected. Quitting.");
            self.state = InterpreterState::Terminated;
        }
        out
    }

    fn execute(&mut self, out: &mut Output, cmd: Command) {
        match cmd {
            Command::Quit => {
                out.prompt("Are you sure you want to quit? (yes/no):");
                self.state = InterpreterState::AwaitingQuitConfirmation;
            }
            Command::Look(None) => render_room(out, &self.world, self.player.location),
            Command::Look(Some(target)) => {
                handle_look_at(out, &self.player, &self.world, &target)
            }
            Command::Go(None) => out.say("Go where? (e.g., 'go north')"),
            Command::Go(Some(direction)) => {
                handle_go(out, &mut self.player, &self.world, &direction);
            }
            Command::Take(None) => out.say("Take what?"),
            Command::Take(Some(target)) => {
                handle_take(out, &mut self.player, &mut self.world, &target)
            }
            Command::Inventory => handle_inventory(out, &self.player),
            Command::Help => handle_help(out),
            Command::Unknown(verb) => out.say(format!(
                "Sorry, I don't understand '{}'. Try 'help' for commands.",
                verb
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(castle_world().unwrap())
    }

    #[test]
    fn starts_running_in_the_cell() {
        let g = game();
        assert_eq!(g.state(), InterpreterState::Running);
        assert!(g.initialize().contains("Location: Damp Cell"));
    }

    #[test]
    fn quit_then_no_keeps_running() {
        let mut g = game();
        let (out, quit) = g.step("quit");
        assert!(!quit);
        assert!(out.contains("Are you sure you want to quit? (yes/no):"));
        assert_eq!(g.state(), InterpreterState::AwaitingQuitConfirmation);

        let (out, quit) = g.step("no");
        assert!(!quit);
        assert!(out.contains("Okay, continuing game."));
        assert_eq!(g.state(), InterpreterState::Running);
    }

    #[test]
    fn exit_then_y_terminates() {
        let mut g = game();
        g.step("EXIT");
        let (out, quit) = g.step(" Y ");
        assert!(quit);
        assert!(out.contains("Goodbye! Thanks for playing."));
    }

    #[test]
    fn empty_answer_cancels_quit() {
        let mut g = game();
        g.step("quit");
        let (_, quit) = g.step("");
        assert!(!quit);
        assert_eq!(g.state(), InterpreterState::Running);
    }

    #[test]
    fn blank_lines_produce_nothing() {
        let mut g = game();
        let (out, quit) = g.step("   ");
        assert!(out.is_empty());
        assert!(!quit);
    }

    #[test]
    fn end_of_input_terminates_once() {
        let mut g = game();
        let out = g.end_of_input();
        assert!(out.contains("EOF detected"));
        assert!(g.is_terminated());
        assert!(g.end_of_input().is_empty());
    }

    #[test]
    fn terminated_is_absorbing() {
        let mut g = game();
        g.end_of_input();
        let (out, quit) = g.step("look");
        assert!(out.is_empty());
        assert!(quit);
    }

    #[test]
    fn missing_arguments_prompt() {
        let mut g = game();
        assert!(g.step("go").0.contains("Go where?"));
        assert!(g.step("take").0.contains("Take what?"));
    }

    #[test]
    fn unknown_verb_keeps_running() {
        let mut g = game();
        let (out, quit) = g.step("dance");
        assert!(!quit);
        assert_eq!(
            out.to_text(),
            "Sorry, I don't understand 'dance'. Try 'help' for commands.\n"
        );
    }
}
