//! Bindings to the Tangle JS library and the module instance it returns.
//!
//! Tangle wraps a wasm module so every peer in a room runs the same export
//! calls in the same order. The host only needs `instantiateStreaming` and
//! the wrapped exports.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::controller::GameModule;
use crate::error::HostError;
use crate::input::TurnDirection;

#[wasm_bindgen(raw_module = "./tangle.js")]
extern "C" {
    pub type Tangle;

    #[wasm_bindgen(static_method_of = Tangle, js_name = instantiateStreaming, catch)]
    fn instantiate_streaming(
        source: &Promise,
        imports: &Object,
        options: &Object,
    ) -> Result<Promise, JsValue>;
}

/// The wrapped exports of an instantiated game module.
pub struct TangleInstance {
    exports: Object,
}

impl TangleInstance {
    /// Fetch, compile and instantiate `source` through Tangle.
    pub async fn instantiate(
        source: &Promise,
        imports: &Object,
        options: &Object,
    ) -> Result<Self, HostError> {
        let result = JsFuture::from(Tangle::instantiate_streaming(source, imports, options)?).await?;
        let instance = Reflect::get(&result, &JsValue::from_str("instance"))?;
        let exports = Reflect::get(&instance, &JsValue::from_str("exports"))?
            .dyn_into::<Object>()
            .map_err(|_| HostError::MissingExport("exports".to_string()))?;
        Ok(Self { exports })
    }

    fn export(&self, name: &str) -> Result<Function, HostError> {
        Reflect::get(&self.exports, &JsValue::from_str(name))?
            .dyn_into::<Function>()
            .map_err(|_| HostError::MissingExport(name.to_string()))
    }
}

impl GameModule for TangleInstance {
    fn reset(&self) -> Result<(), HostError> {
        self.export("reset")?.call0(&self.exports)?;
        Ok(())
    }

    fn turn(&self, direction: TurnDirection, player_index: u32) -> Result<(), HostError> {
        self.export("turn")?.call2(
            &self.exports,
            &JsValue::from(direction.as_flag()),
            &JsValue::from(player_index),
        )?;
        Ok(())
    }

    fn player_joined(&self) -> Result<(), HostError> {
        self.export("player_joined")?.call0(&self.exports)?;
        Ok(())
    }

    fn draw_and_revert(&self) -> Result<(), HostError> {
        let draw = self.export("draw")?;
        let call_and_revert = Reflect::get(&draw, &JsValue::from_str("callAndRevert"))?
            .dyn_into::<Function>()
            .map_err(|_| HostError::MissingExport("draw.callAndRevert".to_string()))?;
        call_and_revert.call0(&draw)?;
        Ok(())
    }
}
