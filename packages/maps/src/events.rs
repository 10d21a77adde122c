//! Typed event payloads and the shared entity surface.

use google_maps_interop::{Args, EventListener, InteropError, JsObjectRef, RefToken};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::geometry::LatLng;
use crate::map::Map;

/// Payload for mouse-driven map and overlay events (`click`, `dblclick`,
/// `mousemove`, ...).
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMouseEvent {
    #[serde(default)]
    pub lat_lng: Option<LatLng>,
}

/// Payload for clicks that land on a place icon.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconMouseEvent {
    #[serde(default)]
    pub lat_lng: Option<LatLng>,
    #[serde(default)]
    pub place_id: Option<String>,
}

/// Payload for mouse events on polylines and polygons, locating the hit
/// within the shape's geometry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolyMouseEvent {
    #[serde(default)]
    pub lat_lng: Option<LatLng>,
    #[serde(default)]
    pub edge: Option<u32>,
    #[serde(default)]
    pub path: Option<u32>,
    #[serde(default)]
    pub vertex: Option<u32>,
}

/// The surface every map-attached wrapper shares: markers, shapes and the
/// other overlays all hang off one [`JsObjectRef`] and manage map
/// attachment and listeners the same way.
#[allow(async_fn_in_trait)]
pub trait MapEntity {
    fn object_ref(&self) -> &JsObjectRef;

    fn into_object_ref(self) -> JsObjectRef;

    /// The token form of this entity's reference, for embedding in options
    /// structs (`MarkerOptions::map` and friends).
    fn ref_token(&self) -> RefToken {
        self.object_ref().ref_token()
    }

    /// Attach to a map, or detach with `None`.
    async fn set_map(&self, map: Option<&Map>) -> Result<(), InteropError> {
        self.object_ref()
            .invoke("setMap", Args::new().arg(map.map(Map::ref_token))?)
            .await
    }

    /// Reference to the map this entity is attached to. Errors when
    /// detached, since there is nothing to reference.
    async fn map_ref(&self) -> Result<JsObjectRef, InteropError> {
        self.object_ref()
            .invoke_returning_ref("getMap", Args::new())
            .await
    }

    /// Register a handler for `event`, deserializing each payload into `T`.
    /// Events that fire without a payload pair with `T = ()`.
    async fn add_listener<T, F>(&self, event: &str, handler: F) -> Result<EventListener, InteropError>
    where
        T: DeserializeOwned,
        F: FnMut(T) + 'static,
    {
        self.object_ref().add_listener(event, handler).await
    }

    /// Remove every registration for `event` on this entity.
    async fn clear_listeners(&self, event: &str) -> Result<(), InteropError> {
        self.object_ref().clear_listeners(event).await
    }

    /// Detach and release the browser-side instance.
    async fn dispose(self) -> Result<(), InteropError>
    where
        Self: Sized,
    {
        self.into_object_ref().dispose().await
    }
}
