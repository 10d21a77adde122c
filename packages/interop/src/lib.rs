//! JavaScript interop layer for the Google Maps bindings.
//!
//! The Maps API lives in the browser's script engine; Rust code compiled to
//! WebAssembly lives outside it. This crate is the marshalling layer between
//! the two: it converts Rust method calls and arguments into calls against
//! the browser-hosted API, tracks JavaScript-side instances by generated
//! token, and converts JavaScript callbacks back into Rust closure
//! invocations.
//!
//! The pieces, in the order a call crosses them:
//!
//! - [`Args`] / [`ToInteropArg`] marshal the argument list,
//! - [`JsObjectRef`] names the instance the call targets and carries the
//!   async call surface,
//! - the browser-side object manager (shipped with this crate) resolves
//!   constructor paths, revives reference tokens and normalizes results,
//! - [`JsCallback`] and [`EventListener`] carry calls in the other
//!   direction.
//!
//! Everything is single-threaded and cooperative: calls complete on the
//! wasm event loop, and no type here is `Send`.

mod bindings;
mod bridge;
mod callback;
mod error;
pub mod marshal;
mod object_ref;

pub use bridge::browser_instance_count;
pub use callback::{active_listener_count, EventListener, JsCallback};
pub use error::InteropError;
pub use marshal::{Args, ToInteropArg};
pub use object_ref::{live_ref_count, JsObjectRef, RefId, RefToken};

#[doc(hidden)]
pub use marshal::serde_arg as __serde_arg;
