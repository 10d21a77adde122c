use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by the interop layer.
///
/// There is deliberately no retry or timeout machinery here: calls ride the
/// browser's cooperative event loop and fail only when the script engine
/// reports a failure or a value refuses to cross the boundary.
#[derive(Error, Debug)]
pub enum InteropError {
    /// The browser side threw. Carries the stringified exception, which also
    /// covers unknown constructor paths and operations on identifiers the
    /// object manager no longer holds.
    #[error("JavaScript error: {0}")]
    Js(String),

    /// A result came back in a shape the caller's type could not absorb.
    #[error("error deserializing interop result: {0}")]
    Deserialize(String),

    /// An argument could not be serialized for the trip across.
    #[error("error serializing interop argument: {0}")]
    Serialize(String),

    /// `google.maps` is not present on `window`. The loader was never run,
    /// or was not awaited before the first call.
    #[error("the Google Maps API has not been loaded into this page")]
    ApiNotLoaded,
}

impl InteropError {
    /// Convert a thrown [`JsValue`] into the error it stands for.
    pub fn from_js(err: JsValue) -> Self {
        Self::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        let err = InteropError::Js("boom".to_string());
        assert_eq!(err.to_string(), "JavaScript error: boom");

        assert_eq!(
            InteropError::ApiNotLoaded.to_string(),
            "the Google Maps API has not been loaded into this page"
        );
    }
}
