//! Browser client for multi-ball Pong
//!
//! Renders with the Canvas 2D API and drives the simulation from
//! `requestAnimationFrame`. Everything except the JS entry points also
//! builds natively so the state machine and input mapping can be tested
//! without a browser.

pub mod canvas;
pub mod fsm;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::canvas::Canvas2d;
    use crate::fsm::{FrameAction, FrameDriver};
    use crate::input::bind_keyboard;
    use game_core::{Config, Game, GameError};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    /// Everything one running frame loop needs
    struct App {
        game: Rc<RefCell<Game>>,
        canvas: Canvas2d,
        driver: FrameDriver,
    }

    fn to_js(err: GameError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    /// Install the panic hook and console logger when the module loads
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }
    }

    /// Start a game on the canvas with id `canvas_id`.
    ///
    /// `config_json` may override any subset of the default configuration;
    /// the surface size always comes from the canvas.
    #[wasm_bindgen]
    pub fn run(canvas_id: &str, config_json: Option<String>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id {canvas_id:?}")))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("Element {canvas_id:?} is not a canvas")))?;

        let config = match config_json {
            Some(json) => Config::from_json(&json).map_err(to_js)?,
            None => Config::new(),
        };
        let config = config.with_bounds(canvas.width() as f32, canvas.height() as f32);
        let game = Rc::new(RefCell::new(Game::new(&config).map_err(to_js)?));

        bind_keyboard(&window, game.clone())?;

        let mut app = App {
            game,
            canvas: Canvas2d::from_canvas(&canvas)?,
            driver: FrameDriver::new(),
        };
        let result = app.driver.transition(FrameAction::Start);
        if !result.success() {
            return Err(JsValue::from_str("Frame driver already running"));
        }
        log::info!(
            "Pong running on #{} (driver {})",
            canvas_id,
            app.driver.state_string()
        );

        // First frame runs immediately, the rest follow display refresh
        frame(app);
        Ok(())
    }

    fn frame(mut app: App) {
        {
            let mut game = app.game.borrow_mut();
            app.driver.run_frame(&mut game, &mut app.canvas);
        }
        request_animation_frame(app);
    }

    fn request_animation_frame(app: App) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, frame loop stopped");
            return;
        };
        // Frees itself once the browser has called it
        let callback = Closure::once_into_js(move |_time: f64| {
            frame(app);
        });
        if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", err);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{run, start};
