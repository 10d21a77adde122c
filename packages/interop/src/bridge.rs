//! The Rust-side call surface over the object manager.
//!
//! Every crossing is an asynchronous request against the single browser
//! runtime and completes on the cooperative wasm event loop. The manager
//! handle is a thread-local singleton; nothing here is `Send` and nothing
//! pretends to be.

use std::rc::Rc;

use js_sys::Function;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use crate::bindings::ObjectManager;
use crate::error::InteropError;
use crate::marshal::Args;
use crate::object_ref::RefId;

thread_local! {
    static MANAGER: Rc<ObjectManager> = Rc::new(ObjectManager::new());
}

fn manager() -> Rc<ObjectManager> {
    MANAGER.with(Rc::clone)
}

/// Number of instances the browser-side table currently holds. Disagreement
/// with [`crate::live_ref_count`] means refs were dropped without `dispose`.
pub fn browser_instance_count() -> usize {
    manager().count() as usize
}

pub(crate) async fn create(id: RefId, path: &str, args: &Args) -> Result<(), InteropError> {
    tracing::trace!("create {path} as ref {id}");
    manager()
        .create(&id.to_string(), path, args.as_array())
        .await
        .map_err(InteropError::from_js)
}

pub(crate) async fn invoke(id: RefId, method: &str, args: &Args) -> Result<JsValue, InteropError> {
    tracing::trace!("invoke {method} on ref {id}");
    manager()
        .invoke(&id.to_string(), method, args.as_array())
        .await
        .map_err(InteropError::from_js)
}

pub(crate) async fn invoke_returning_ref(
    id: RefId,
    method: &str,
    args: &Args,
    new_id: RefId,
) -> Result<(), InteropError> {
    tracing::trace!("invoke {method} on ref {id}, result stored as ref {new_id}");
    manager()
        .invoke_returning_ref(&id.to_string(), method, args.as_array(), &new_id.to_string())
        .await
        .map_err(InteropError::from_js)
}

pub(crate) async fn read_property(id: RefId, prop: &str) -> Result<JsValue, InteropError> {
    manager()
        .read_property(&id.to_string(), prop)
        .await
        .map_err(InteropError::from_js)
}

pub(crate) async fn write_property(
    id: RefId,
    prop: &str,
    value: &JsValue,
) -> Result<(), InteropError> {
    manager()
        .write_property(&id.to_string(), prop, value)
        .await
        .map_err(InteropError::from_js)
}

pub(crate) async fn dispose(id: RefId) -> Result<(), InteropError> {
    tracing::trace!("dispose ref {id}");
    manager()
        .dispose(&id.to_string())
        .await
        .map_err(InteropError::from_js)
}

pub(crate) async fn add_listener(
    id: RefId,
    event: &str,
    handler: &Function,
    listener_id: u32,
) -> Result<(), InteropError> {
    tracing::trace!("add listener {listener_id} for '{event}' on ref {id}");
    manager()
        .add_listener(&id.to_string(), event, handler, listener_id)
        .await
        .map_err(InteropError::from_js)
}

pub(crate) async fn remove_listener(listener_id: u32) -> Result<(), InteropError> {
    tracing::trace!("remove listener {listener_id}");
    manager()
        .remove_listener(listener_id)
        .await
        .map_err(InteropError::from_js)
}

pub(crate) async fn clear_listeners(id: RefId, event: &str) -> Result<(), InteropError> {
    tracing::trace!("clear '{event}' listeners on ref {id}");
    manager()
        .clear_listeners(&id.to_string(), event)
        .await
        .map_err(InteropError::from_js)
}

pub(crate) fn deserialize<T: DeserializeOwned>(value: JsValue) -> Result<T, InteropError> {
    serde_wasm_bindgen::from_value(value).map_err(|err| InteropError::Deserialize(err.to_string()))
}
