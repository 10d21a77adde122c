//! Bootstrap loading for the Maps JavaScript API.
//!
//! The API arrives through a script tag; everything else in this crate
//! assumes `google.maps` is already on `window`. [`load`] injects the
//! bootstrap once and resolves when the API announces itself; pages that
//! load the API through their own markup can skip it, [`is_loaded`] picks
//! the global up either way.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures_channel::oneshot;
use google_maps_interop::InteropError;
use js_sys::{Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

const BOOTSTRAP_URL: &str = "https://maps.googleapis.com/maps/api/js";
const READY_CALLBACK: &str = "__gmapsBootstrapReady";

/// Parameters for the bootstrap request.
#[derive(Clone, Debug, Default)]
pub struct LoaderOptions {
    /// API key for the project.
    pub key: String,
    /// Version channel: `weekly`, `beta`, or a pinned `3.xx`.
    pub version: Option<String>,
    /// Additional libraries to load up front (`marker`, `places`, ...).
    pub libraries: Vec<String>,
    pub language: Option<String>,
    pub region: Option<String>,
}

impl LoaderOptions {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    fn bootstrap_src(&self) -> String {
        let mut src = format!("{BOOTSTRAP_URL}?key={}&callback={READY_CALLBACK}", self.key);
        if !self.libraries.is_empty() {
            src.push_str("&libraries=");
            src.push_str(&self.libraries.join(","));
        }
        if let Some(version) = &self.version {
            src.push_str("&v=");
            src.push_str(version);
        }
        if let Some(language) = &self.language {
            src.push_str("&language=");
            src.push_str(language);
        }
        if let Some(region) = &self.region {
            src.push_str("&region=");
            src.push_str(region);
        }
        src
    }
}

thread_local! {
    static LOADED: Cell<bool> = const { Cell::new(false) };
}

fn maps_namespace() -> Option<JsValue> {
    let window = web_sys::window()?;
    let google = Reflect::get(window.as_ref(), &JsValue::from_str("google")).ok()?;
    if google.is_undefined() {
        return None;
    }
    let maps = Reflect::get(&google, &JsValue::from_str("maps")).ok()?;
    (!maps.is_undefined()).then_some(maps)
}

/// Whether `google.maps` is present on `window`, however it got there.
pub fn is_loaded() -> bool {
    if LOADED.with(Cell::get) {
        return true;
    }
    let present = maps_namespace().is_some();
    if present {
        LOADED.with(|loaded| loaded.set(true));
    }
    present
}

pub(crate) fn ensure_loaded() -> Result<(), InteropError> {
    if is_loaded() {
        Ok(())
    } else {
        Err(InteropError::ApiNotLoaded)
    }
}

/// Inject the bootstrap script and wait for the API to announce itself.
/// Idempotent: once the API is present, further calls return immediately.
pub async fn load(options: &LoaderOptions) -> Result<(), InteropError> {
    if is_loaded() {
        return Ok(());
    }

    let window = web_sys::window().ok_or(InteropError::ApiNotLoaded)?;
    let document = window.document().ok_or(InteropError::ApiNotLoaded)?;
    let head = document.head().ok_or(InteropError::ApiNotLoaded)?;

    let (tx, rx) = oneshot::channel::<Result<(), InteropError>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    // The bootstrap invokes `callback=` once the API namespace is ready.
    let ready_tx = tx.clone();
    let on_ready = Closure::once(move || {
        if let Some(tx) = ready_tx.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    });
    Reflect::set(
        window.as_ref(),
        &JsValue::from_str(READY_CALLBACK),
        on_ready.as_ref(),
    )
    .map_err(InteropError::from_js)?;
    // The browser may call back after this function's frame is gone.
    on_ready.forget();

    let script = document
        .create_element("script")
        .map_err(InteropError::from_js)?
        .dyn_into::<web_sys::HtmlScriptElement>()
        .map_err(|_| InteropError::Js("script element had an unexpected type".to_string()))?;
    // Dynamically inserted scripts load async already; only src matters.
    script.set_src(&options.bootstrap_src());

    let error_tx = tx;
    let on_error = Closure::once(move |_event: JsValue| {
        if let Some(tx) = error_tx.borrow_mut().take() {
            let _ = tx.send(Err(InteropError::Js(
                "failed to load the Google Maps bootstrap script".to_string(),
            )));
        }
    });
    script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    head.append_child(script.as_ref())
        .map_err(InteropError::from_js)?;

    rx.await
        .map_err(|_| InteropError::Js("bootstrap channel closed".to_string()))??;

    LOADED.with(|loaded| loaded.set(true));
    tracing::debug!("Google Maps API loaded");
    Ok(())
}

/// `google.maps.importLibrary` passthrough for libraries loaded on demand
/// (the `marker` library is not part of the default payload).
pub async fn import_library(name: &str) -> Result<(), InteropError> {
    ensure_loaded()?;
    let maps = maps_namespace().ok_or(InteropError::ApiNotLoaded)?;
    let import = Reflect::get(&maps, &JsValue::from_str("importLibrary"))
        .map_err(InteropError::from_js)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| InteropError::ApiNotLoaded)?;
    let promise = import
        .call1(&maps, &JsValue::from_str(name))
        .map_err(InteropError::from_js)?
        .dyn_into::<Promise>()
        .map_err(|_| {
            InteropError::Js("importLibrary did not return a promise".to_string())
        })?;
    JsFuture::from(promise)
        .await
        .map_err(InteropError::from_js)?;
    Ok(())
}
