//! Keyboard input handling

use game_core::Game;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

/// Apply a `keydown`/`keyup` event to the game's key state.
///
/// Returns whether the key is one the game reacts to.
pub fn handle_key_event(game: &mut Game, event_type: &str, key: &str) -> bool {
    match event_type {
        "keydown" => game.key_down(key),
        "keyup" => game.key_up(key),
        _ => false,
    }
}

/// Listen for key presses and releases on the window for the lifetime of
/// the page
pub fn bind_keyboard(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    for event_type in ["keydown", "keyup"] {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            // Events only arrive between frames, so the game is never borrowed here
            match game.try_borrow_mut() {
                Ok(mut game) => {
                    handle_key_event(&mut game, event_type, &event.key());
                }
                Err(_) => log::warn!("dropped {} for {:?}: game busy", event_type, event.key()),
            }
        });
        window.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Config;

    #[test]
    fn test_arrow_keys_update_key_state() {
        let mut game = Game::new(&Config::new()).unwrap();

        assert!(handle_key_event(&mut game, "keydown", "ArrowDown"));
        assert!(game.keys().down);

        assert!(handle_key_event(&mut game, "keyup", "ArrowDown"));
        assert!(!game.keys().down);
    }

    #[test]
    fn test_other_keys_and_events_are_ignored() {
        let mut game = Game::new(&Config::new()).unwrap();

        assert!(!handle_key_event(&mut game, "keydown", "s"));
        assert!(!handle_key_event(&mut game, "keypress", "ArrowUp"));
        assert!(!game.keys().up && !game.keys().down);
    }
}
