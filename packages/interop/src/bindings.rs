//! Bindings over the browser-side object manager.
//!
//! The manager is the JavaScript half of this crate: it owns the table of
//! live Google Maps instances, keyed by the tokens generated on the Rust
//! side, and performs constructor-path resolution, argument revival and
//! result normalization next to the objects themselves.

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/src/js/object_manager.js")]
extern "C" {
    pub type ObjectManager;

    #[wasm_bindgen(constructor)]
    pub fn new() -> ObjectManager;

    #[wasm_bindgen(method, catch)]
    pub async fn create(
        this: &ObjectManager,
        id: &str,
        path: &str,
        args: &Array,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    pub async fn invoke(
        this: &ObjectManager,
        id: &str,
        method: &str,
        args: &Array,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = "invokeReturningRef")]
    pub async fn invoke_returning_ref(
        this: &ObjectManager,
        id: &str,
        method: &str,
        args: &Array,
        new_id: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "readProperty")]
    pub async fn read_property(
        this: &ObjectManager,
        id: &str,
        prop: &str,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = "writeProperty")]
    pub async fn write_property(
        this: &ObjectManager,
        id: &str,
        prop: &str,
        value: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    pub async fn dispose(this: &ObjectManager, id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "addListener")]
    pub async fn add_listener(
        this: &ObjectManager,
        id: &str,
        event: &str,
        handler: &Function,
        listener_id: u32,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "removeListener")]
    pub async fn remove_listener(this: &ObjectManager, listener_id: u32) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "clearListeners")]
    pub async fn clear_listeners(
        this: &ObjectManager,
        id: &str,
        event: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    pub fn count(this: &ObjectManager) -> u32;
}
