//! Browser host bindings
//!
//! The page runs its own physics engine and renderer. It creates a
//! `WebGame`, adds the bodies from `bodies()` to its world, then forwards
//! `collisionStart` pairs and key-downs. The win banner is revealed here.

use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::settings::Settings;
use crate::sim::{Direction, StateChange};

/// Selector of the win banner; it starts with the `hidden` class
const WINNER_SELECTOR: &str = ".winner";

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Maze Escape starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    /// New maze filling a `width x height` canvas
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<WebGame, JsError> {
        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(settings, width, height, seed)?;
        Ok(WebGame { game })
    }

    /// Bodies to add to the physics world, as JSON
    pub fn bodies(&self) -> Result<String, JsError> {
        Ok(self.game.host_bodies_json()?)
    }

    /// Current gravity y component
    #[wasm_bindgen(getter)]
    pub fn gravity_y(&self) -> f32 {
        self.game.world.gravity.y
    }

    #[wasm_bindgen(getter)]
    pub fn won(&self) -> bool {
        self.game.state.is_won()
    }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u64 {
        self.game.seed
    }

    /// Keep this maze across reloads by storing its seed
    pub fn pin_seed(&mut self) {
        self.game.settings.seed = Some(self.game.seed);
        self.game.settings.save();
    }

    /// Report one colliding pair by label. Returns true when this pair won the game;
    /// the host should then set gravity and make every "wall" body dynamic.
    pub fn on_collision(&mut self, label_a: &str, label_b: &str) -> bool {
        match self.game.handle_collision_labels(label_a, label_b) {
            Some(StateChange::Won { reveal_banner }) => {
                if reveal_banner {
                    reveal_winner();
                }
                true
            }
            None => false,
        }
    }

    /// Report a key-down by `KeyboardEvent.key`. Returns the new ball velocity
    /// `[x, y]`, or nothing if the key isn't a direction.
    pub fn on_key_down(&mut self, key: &str, vel_x: f32, vel_y: f32) -> Option<Vec<f32>> {
        let dir = Direction::from_key(key)?;
        // The host's engine owns the live velocity
        self.game.world.ball.vel = glam::Vec2::new(vel_x, vel_y);
        let vel = self.game.handle_command(dir);
        Some(vec![vel.x, vel.y])
    }
}

/// Drop the `hidden` class from the banner
fn reveal_winner() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document, cannot show win banner");
        return;
    };
    match document.query_selector(WINNER_SELECTOR) {
        Ok(Some(el)) => {
            let _ = el.class_list().remove_1("hidden");
            log::info!("You won!");
        }
        _ => log::warn!("Win banner {} not found", WINNER_SELECTOR),
    }
}
