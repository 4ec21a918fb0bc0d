use wasm_bindgen::prelude::*;

use crate::game::{COMPUTER_MOVE_DELAY_MS, GameInstance};
use crate::types::GameMode;

pub mod ai;
pub mod board;
pub mod error;
pub mod game;
pub mod types;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Milliseconds the page should wait before calling `computerMove`.
#[wasm_bindgen(js_name = computerMoveDelayMs)]
pub fn computer_move_delay_ms() -> u32 {
    COMPUTER_MOVE_DELAY_MS
}

/// Game handle owned by the page. Every mutating call returns the new
/// `GameState` as a plain object.
#[wasm_bindgen]
pub struct ConnectFive {
    game: GameInstance,
}

#[wasm_bindgen]
impl ConnectFive {
    #[wasm_bindgen(constructor)]
    pub fn new(vs_computer: bool) -> ConnectFive {
        let mode = if vs_computer {
            GameMode::VsComputer
        } else {
            GameMode::TwoPlayer
        };
        ConnectFive {
            game: GameInstance::new_with_default_selector(mode),
        }
    }

    pub fn place(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        self.game.place(row, col).map_err(to_js_error)?;
        self.state()
    }

    /// Plays the computer's turn. When it has no move the game ends and the
    /// returned state has `is_game_over` set.
    #[wasm_bindgen(js_name = computerMove)]
    pub fn computer_move(&mut self) -> Result<JsValue, JsValue> {
        self.game.do_ai_move().map_err(to_js_error)?;
        self.state()
    }

    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        self.game.reset();
        self.state()
    }

    #[wasm_bindgen(js_name = isComputerTurn)]
    pub fn is_computer_turn(&self) -> bool {
        self.game.is_computer_turn()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.game.to_game_state()).map_err(JsValue::from)
    }

    /// Final scores and outcome; an error until the game is over.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        if !self.game.is_game_over {
            return Err(JsValue::from_str("game is not over yet"));
        }
        serde_wasm_bindgen::to_value(&self.game.to_game_result()).map_err(JsValue::from)
    }
}

fn to_js_error(err: error::GameError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
