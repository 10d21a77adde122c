//! Object-reference bookkeeping.
//!
//! A [`JsObjectRef`] stands in for one live object on the browser side,
//! tracked by a generated token rather than by memory reference. Lifetime is
//! explicit on both ends: the browser-side instance exists from
//! [`JsObjectRef::create`] until [`JsObjectRef::dispose`], never collected by
//! either garbage collector. Dropping a ref without disposing it therefore
//! leaks the browser-side instance; the drop is logged so the leak is
//! findable.

use std::cell::{Cell, RefCell};
use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::bridge;
use crate::error::InteropError;
use crate::marshal::{Args, ToInteropArg};

/// The opaque token a browser-side instance is tracked under.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RefId(u64);

impl RefId {
    fn next() -> Self {
        NEXT_REF_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            RefId(id)
        })
    }
}

impl fmt::Display for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The wire form of a reference: the token object the object manager
/// revives into the live instance. Cheap to clone, safe to embed in options
/// structs (`MarkerOptions::map` and friends).
#[derive(Clone, Debug, Serialize)]
pub struct RefToken {
    #[serde(rename = "__gmapsRef")]
    id: String,
}

thread_local! {
    static NEXT_REF_ID: Cell<u64> = const { Cell::new(1) };
    static LIVE_REFS: RefCell<FxHashMap<RefId, String>> = RefCell::new(FxHashMap::default());
}

fn register(id: RefId, path: &str) {
    LIVE_REFS.with(|refs| {
        let previous = refs.borrow_mut().insert(id, path.to_string());
        debug_assert!(previous.is_none(), "duplicate object ref token {id}");
    });
}

fn unregister(id: RefId) {
    LIVE_REFS.with(|refs| {
        refs.borrow_mut().remove(&id);
    });
}

/// Number of references currently tracked as live on the Rust side.
///
/// Stays in step with [`crate::browser_instance_count`] as long as every ref
/// is disposed; a growing gap between the two is a leak.
pub fn live_ref_count() -> usize {
    LIVE_REFS.with(|refs| refs.borrow().len())
}

/// A host-side handle to one live JavaScript object.
///
/// Not `Clone`: each browser-side instance has exactly one owner, so
/// use-after-dispose and double-dispose are unrepresentable rather than
/// checked at runtime.
pub struct JsObjectRef {
    id: RefId,
    disposed: bool,
}

impl JsObjectRef {
    /// Construct a new browser-side instance from a dotted constructor path
    /// (`"google.maps.marker.AdvancedMarkerElement"`) and take ownership of
    /// its reference.
    pub async fn create(path: &str, args: Args) -> Result<Self, InteropError> {
        let id = RefId::next();
        bridge::create(id, path, &args).await?;
        register(id, path);
        Ok(Self {
            id,
            disposed: false,
        })
    }

    pub fn id(&self) -> RefId {
        self.id
    }

    /// The token form of this reference, for embedding in options structs.
    pub fn ref_token(&self) -> RefToken {
        RefToken {
            id: self.id.to_string(),
        }
    }

    /// Call a method for its effect, discarding whatever it returns.
    pub async fn invoke(&self, method: &str, args: Args) -> Result<(), InteropError> {
        bridge::invoke(self.id, method, &args).await?;
        Ok(())
    }

    /// Call a method and deserialize its result.
    pub async fn invoke_returning<T: DeserializeOwned>(
        &self,
        method: &str,
        args: Args,
    ) -> Result<T, InteropError> {
        let value = bridge::invoke(self.id, method, &args).await?;
        bridge::deserialize(value)
    }

    /// Call a method whose result is itself a live object. The result never
    /// crosses the boundary; only the new token does.
    ///
    /// Errors if the method produced nothing to reference.
    pub async fn invoke_returning_ref(
        &self,
        method: &str,
        args: Args,
    ) -> Result<JsObjectRef, InteropError> {
        let new_id = RefId::next();
        bridge::invoke_returning_ref(self.id, method, &args, new_id).await?;
        register(new_id, method);
        Ok(JsObjectRef {
            id: new_id,
            disposed: false,
        })
    }

    /// Read a property and deserialize it.
    pub async fn read<T: DeserializeOwned>(&self, prop: &str) -> Result<T, InteropError> {
        let value = bridge::read_property(self.id, prop).await?;
        bridge::deserialize(value)
    }

    /// Read a property as the raw [`JsValue`] handle (DOM elements and other
    /// values that have no literal form).
    pub async fn read_raw(&self, prop: &str) -> Result<JsValue, InteropError> {
        bridge::read_property(self.id, prop).await
    }

    /// Write a property.
    pub async fn write(
        &self,
        prop: &str,
        value: impl ToInteropArg,
    ) -> Result<(), InteropError> {
        bridge::write_property(self.id, prop, &value.to_interop_arg()?).await
    }

    /// Release the browser-side instance and consume the reference.
    pub async fn dispose(mut self) -> Result<(), InteropError> {
        bridge::dispose(self.id).await?;
        unregister(self.id);
        self.disposed = true;
        Ok(())
    }
}

impl fmt::Debug for JsObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("JsObjectRef").field(&self.id).finish()
    }
}

impl Drop for JsObjectRef {
    fn drop(&mut self) {
        // The browser-side instance outlives the ref; with the token gone
        // from the registry, browser_instance_count() exceeding
        // live_ref_count() is how the leak shows up.
        if !self.disposed {
            unregister(self.id);
            tracing::warn!(
                "object ref {} dropped without dispose(); the browser-side instance leaks",
                self.id
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_ids_are_unique_and_ordered() {
        let first = RefId::next();
        let second = RefId::next();
        assert_ne!(first, second);
        assert!(second.0 > first.0);
    }

    #[test]
    fn ref_token_serializes_to_the_marker_object() {
        let token = RefToken {
            id: "7".to_string(),
        };
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json, serde_json::json!({ "__gmapsRef": "7" }));
    }

    #[test]
    fn registry_tracks_live_refs() {
        let before = live_ref_count();
        let id = RefId::next();
        register(id, "google.maps.Map");
        assert_eq!(live_ref_count(), before + 1);
        unregister(id);
        assert_eq!(live_ref_count(), before);
    }
}
