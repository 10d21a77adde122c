//! Callbacks and event listener registrations.
//!
//! A [`JsCallback`] turns a Rust closure into a function the browser side
//! can call directly. An [`EventListener`] is the handle for one
//! registration against `google.maps.event`. Its lifetime is explicit
//! (`remove()` or `forget()`, never garbage collection) because a dangling
//! registration keeps both the closure and the target instance alive.

use std::cell::RefCell;

use js_sys::Function;
use serde::de::DeserializeOwned;
use slab::Slab;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::bridge;
use crate::error::InteropError;
use crate::object_ref::JsObjectRef;

thread_local! {
    static ACTIVE_LISTENERS: RefCell<Slab<()>> = RefCell::new(Slab::new());
}

/// Number of listener registrations currently active.
pub fn active_listener_count() -> usize {
    ACTIVE_LISTENERS.with(|listeners| listeners.borrow().len())
}

/// A Rust closure exported as a callable JavaScript function.
pub struct JsCallback {
    closure: Closure<dyn FnMut(JsValue)>,
}

impl JsCallback {
    /// Wrap a closure receiving the raw payload.
    pub fn new(mut handler: impl FnMut(JsValue) + 'static) -> Self {
        Self {
            closure: Closure::new(move |value| handler(value)),
        }
    }

    /// Wrap a closure receiving a deserialized payload. A payload that does
    /// not fit `T` is logged and dropped; there is nobody to hand the error
    /// to once the browser has already fired.
    pub fn from_fn<T, F>(mut handler: F) -> Self
    where
        T: DeserializeOwned,
        F: FnMut(T) + 'static,
    {
        Self::new(move |value: JsValue| {
            match serde_wasm_bindgen::from_value::<T>(value) {
                Ok(payload) => handler(payload),
                Err(err) => {
                    tracing::error!("failed to deserialize callback payload - {err}");
                }
            }
        })
    }

    pub fn as_function(&self) -> &Function {
        self.closure.as_ref().unchecked_ref()
    }

    /// Leak the closure so JavaScript may call it for the life of the page.
    pub fn forget(self) {
        self.closure.forget();
    }
}

/// Handle for one event registration.
pub struct EventListener {
    id: usize,
    event: String,
    callback: Option<JsCallback>,
    removed: bool,
}

impl EventListener {
    /// The event name this registration listens for.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Unregister on the browser side and drop the closure.
    pub async fn remove(mut self) -> Result<(), InteropError> {
        bridge::remove_listener(self.id as u32).await?;
        ACTIVE_LISTENERS.with(|listeners| {
            listeners.borrow_mut().remove(self.id);
        });
        self.removed = true;
        self.callback.take();
        Ok(())
    }

    /// Keep the registration for the life of the page, discarding the
    /// handle. The leak is deliberate and silent.
    pub fn forget(mut self) {
        self.removed = true;
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        // The browser still holds the registration, so the closure must
        // outlive the handle; all we can do is make the leak visible.
        if !self.removed {
            tracing::warn!(
                "listener for '{}' dropped without remove(); the registration leaks",
                self.event
            );
            if let Some(callback) = self.callback.take() {
                callback.forget();
            }
        }
    }
}

impl JsObjectRef {
    /// Register a handler for `event`, deserializing each payload into `T`.
    /// Events that fire without a payload pair with `T = ()`.
    pub async fn add_listener<T, F>(
        &self,
        event: &str,
        handler: F,
    ) -> Result<EventListener, InteropError>
    where
        T: DeserializeOwned,
        F: FnMut(T) + 'static,
    {
        self.add_listener_callback(event, JsCallback::from_fn(handler))
            .await
    }

    /// Register a handler receiving the raw payload.
    pub async fn add_listener_raw(
        &self,
        event: &str,
        handler: impl FnMut(JsValue) + 'static,
    ) -> Result<EventListener, InteropError> {
        self.add_listener_callback(event, JsCallback::new(handler))
            .await
    }

    async fn add_listener_callback(
        &self,
        event: &str,
        callback: JsCallback,
    ) -> Result<EventListener, InteropError> {
        let listener_id = ACTIVE_LISTENERS.with(|listeners| listeners.borrow_mut().insert(()));
        match bridge::add_listener(self.id(), event, callback.as_function(), listener_id as u32)
            .await
        {
            Ok(()) => Ok(EventListener {
                id: listener_id,
                event: event.to_string(),
                callback: Some(callback),
                removed: false,
            }),
            Err(err) => {
                ACTIVE_LISTENERS.with(|listeners| {
                    listeners.borrow_mut().remove(listener_id);
                });
                Err(err)
            }
        }
    }

    /// Remove every registration for `event` on this object in one call.
    /// Outstanding [`EventListener`] handles for it should be dropped or
    /// forgotten; their browser-side registrations are already gone.
    pub async fn clear_listeners(&self, event: &str) -> Result<(), InteropError> {
        bridge::clear_listeners(self.id(), event).await
    }
}
