//! Argument marshalling.
//!
//! A fixed dispatch from Rust values onto interop-friendly JavaScript
//! values: primitives and DOM elements pass through untouched, callbacks
//! cross as real functions, object references cross as tokens the browser
//! side revives, and everything else is serialized to a camelCase object
//! with unset fields omitted. The dispatch itself never recurses; nesting
//! is handled by serde during serialization and by the object manager
//! during revival.

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::callback::JsCallback;
use crate::error::InteropError;
use crate::object_ref::{JsObjectRef, RefToken};

/// A value that can cross into a Google Maps call.
pub trait ToInteropArg {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError>;
}

/// Serialize a value through the json-compatible profile: structs become
/// plain objects, 64-bit integers become floats, `None` becomes null.
#[doc(hidden)]
pub fn serde_arg<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, InteropError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|err| InteropError::Serialize(err.to_string()))
}

/// Implements [`ToInteropArg`] for serde-serializable option and data types.
///
/// The types themselves carry the wire contract (`rename_all = "camelCase"`,
/// `skip_serializing_if` on optional fields); this macro only wires them
/// into the argument dispatch.
#[macro_export]
macro_rules! impl_to_interop_arg_via_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::ToInteropArg for $ty {
                fn to_interop_arg(
                    &self,
                ) -> Result<::wasm_bindgen::JsValue, $crate::InteropError> {
                    $crate::__serde_arg(self)
                }
            }
        )*
    };
}

impl<T: ToInteropArg + ?Sized> ToInteropArg for &T {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        (**self).to_interop_arg()
    }
}

/// Absent values cross as null, matching what the Maps API expects for
/// "unset" positional arguments (`setMap(null)` and friends).
impl<T: ToInteropArg> ToInteropArg for Option<T> {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        match self {
            Some(value) => value.to_interop_arg(),
            None => Ok(JsValue::NULL),
        }
    }
}

impl ToInteropArg for () {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        Ok(JsValue::NULL)
    }
}

macro_rules! impl_passthrough {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToInteropArg for $ty {
                fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
                    Ok(JsValue::from(*self))
                }
            }
        )*
    };
}

impl_passthrough!(bool, i32, u32, f32, f64);

impl ToInteropArg for str {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        Ok(JsValue::from_str(self))
    }
}

impl ToInteropArg for String {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        Ok(JsValue::from_str(self))
    }
}

/// Sequences of serializable values (paths, ring lists) cross as arrays.
impl<T: Serialize> ToInteropArg for [T] {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        serde_arg(self)
    }
}

impl<T: Serialize> ToInteropArg for Vec<T> {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        serde_arg(self)
    }
}

/// Escape hatch for values that are already on the other side.
impl ToInteropArg for JsValue {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        Ok(self.clone())
    }
}

/// The map container div and marker content elements pass through as the
/// live DOM nodes they are.
impl ToInteropArg for web_sys::Element {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        Ok(AsRef::<JsValue>::as_ref(self).clone())
    }
}

/// Dates pass through as the live `Date` objects the API expects.
impl ToInteropArg for js_sys::Date {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        Ok(AsRef::<JsValue>::as_ref(self).clone())
    }
}

/// References cross as tokens; the object manager swaps the live instance
/// back in before the call.
impl ToInteropArg for JsObjectRef {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        self.ref_token().to_interop_arg()
    }
}

impl ToInteropArg for RefToken {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        serde_arg(self)
    }
}

/// Callbacks cross as the real functions their closures export.
impl ToInteropArg for JsCallback {
    fn to_interop_arg(&self) -> Result<JsValue, InteropError> {
        Ok(JsValue::from(self.as_function().clone()))
    }
}

/// Positional argument list for a single interop call.
#[derive(Default)]
pub struct Args {
    list: js_sys::Array,
}

impl Args {
    pub fn new() -> Self {
        Self {
            list: js_sys::Array::new(),
        }
    }

    /// Append one marshalled argument.
    pub fn arg(self, value: impl ToInteropArg) -> Result<Self, InteropError> {
        self.list.push(&value.to_interop_arg()?);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.list.length() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.list.length() == 0
    }

    pub(crate) fn as_array(&self) -> &js_sys::Array {
        &self.list
    }
}
