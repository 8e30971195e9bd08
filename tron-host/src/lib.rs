//! Tron in-browser host.
//!
//! Exports `run(config)` for the page to call. The host fetches the game
//! module (`tron.wasm`) through Tangle, which keeps every peer in the room
//! stepping the same simulation, and supplies the module's `env` imports:
//! a handful of canvas drawing calls plus `set_player_index`.
//!
//! Input (arrow keys, taps on either half of the screen) becomes `turn`
//! calls. Each animation frame clears the canvas and runs the module's
//! `draw` through Tangle's `callAndRevert`, so peers can render at their
//! own rate without touching shared state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod app;
pub mod config;
pub mod connection;
pub mod controller;
pub mod error;
pub mod input;
pub mod latch;
pub mod primitives;
pub mod room_name;
#[cfg(target_arch = "wasm32")]
mod tangle;

/// Boot the host.
///
/// Called once from the page bootstrap script.
///
/// # Arguments
/// * `config_json` — optional JSON overriding [`config::HostConfig`] fields.
///
/// # Returns
/// A promise that resolves once the module is running, or rejects with the
/// startup error.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn run(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = config::HostConfig::from_json(config_json.as_deref())?;
    // A second `run` keeps the logger from the first.
    let _ = console_log::init_with_level(config.level()?);
    log::info!("starting with {:?}", config);

    app::start(config).await?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use crate::room_name;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn fragment_is_written_once() {
        let location = web_sys::window().unwrap().location();
        location.set_hash("").unwrap();

        let name = room_name::ensure_location_fragment(&location).unwrap();
        assert_eq!(location.hash().unwrap(), format!("#{name}"));

        let again = room_name::ensure_location_fragment(&location).unwrap();
        assert_eq!(again, name);
    }

    #[wasm_bindgen_test]
    fn set_color_reaches_the_context() {
        use crate::primitives::Primitives;
        use wasm_bindgen::JsCast;
        use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

        let document = web_sys::window().unwrap().document().unwrap();
        let canvas = document
            .create_element("canvas")
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap();
        let context = canvas
            .get_context("2d")
            .unwrap()
            .unwrap()
            .dyn_into::<CanvasRenderingContext2d>()
            .unwrap();

        let prims = Primitives::new(context, 0.5);
        prims.set_color(255.0, 0.0, 0.0, 255.0);
        assert_eq!(prims.target().fill_style().as_string().as_deref(), Some("#ff0000"));
        assert_eq!(prims.target().stroke_style().as_string().as_deref(), Some("#ff0000"));
        prims.draw_circle(10.0, 10.0, 2.0).unwrap();
    }
}
