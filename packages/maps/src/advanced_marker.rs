//! Advanced markers (`google.maps.marker`, beta channel).
//!
//! Advanced markers are HTML elements driven by properties rather than
//! setter methods, so most of this surface rides property reads and writes.
//! The `marker` library is not part of the default API payload; load it with
//! `loader::import_library("marker")` or list it in [`crate::LoaderOptions`].

use google_maps_interop::{Args, InteropError, JsObjectRef, RefToken};
use serde::Serialize;
use wasm_bindgen::JsCast;

use crate::enums::CollisionBehavior;
use crate::events::MapEntity;
use crate::geometry::LatLng;
use crate::impl_wire_types;
use crate::loader;
use crate::map::Map;
use crate::marker::Marker;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedMarkerElementOptions {
    /// Attach to a map at construction. The map needs a `map_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<RefToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmp_clickable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmp_draggable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision_behavior: Option<CollisionBehavior>,
}

impl_wire_types!(AdvancedMarkerElementOptions, PinElementOptions);

/// One `google.maps.marker.AdvancedMarkerElement`.
///
/// Custom content (a [`PinElement`]'s element, or any DOM node) is set
/// after construction through [`AdvancedMarkerElement::set_content`].
pub struct AdvancedMarkerElement {
    obj: JsObjectRef,
}

impl AdvancedMarkerElement {
    pub const JS_PATH: &'static str = "google.maps.marker.AdvancedMarkerElement";

    pub async fn new(options: AdvancedMarkerElementOptions) -> Result<Self, InteropError> {
        loader::ensure_loaded()?;
        let obj = JsObjectRef::create(Self::JS_PATH, Args::new().arg(&options)?).await?;
        Ok(Self { obj })
    }

    pub async fn z_index(&self) -> Result<i32, InteropError> {
        self.obj.invoke_returning("getZIndex", Args::new()).await
    }

    pub async fn position(&self) -> Result<Option<LatLng>, InteropError> {
        self.obj.read("position").await
    }

    pub async fn set_position(&self, position: LatLng) -> Result<(), InteropError> {
        self.obj.write("position", position).await
    }

    pub async fn title(&self) -> Result<String, InteropError> {
        self.obj.read("title").await
    }

    pub async fn set_title(&self, title: &str) -> Result<(), InteropError> {
        self.obj.write("title", title).await
    }

    pub async fn set_draggable(&self, draggable: bool) -> Result<(), InteropError> {
        self.obj.write("gmpDraggable", draggable).await
    }

    /// Replace the marker's rendered content with a DOM element.
    pub async fn set_content(&self, content: &web_sys::Element) -> Result<(), InteropError> {
        self.obj.write("content", content).await
    }
}

impl MapEntity for AdvancedMarkerElement {
    fn object_ref(&self) -> &JsObjectRef {
        &self.obj
    }

    fn into_object_ref(self) -> JsObjectRef {
        self.obj
    }

    /// Advanced markers attach through the `map` property, not `setMap`.
    async fn set_map(&self, map: Option<&Map>) -> Result<(), InteropError> {
        self.obj.write("map", map.map(Map::ref_token)).await
    }
}

/// Customization companion for advanced markers: a styled pin whose element
/// becomes the marker's content.
pub struct PinElement {
    obj: JsObjectRef,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinElementOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl PinElement {
    pub const JS_PATH: &'static str = "google.maps.marker.PinElement";

    pub async fn new(options: PinElementOptions) -> Result<Self, InteropError> {
        loader::ensure_loaded()?;
        let obj = JsObjectRef::create(Self::JS_PATH, Args::new().arg(&options)?).await?;
        Ok(Self { obj })
    }

    /// The pin's DOM element, for use as advanced marker content.
    pub async fn element(&self) -> Result<web_sys::Element, InteropError> {
        self.obj
            .read_raw("element")
            .await?
            .dyn_into()
            .map_err(|_| InteropError::Js("PinElement.element was not an Element".to_string()))
    }

    pub async fn dispose(self) -> Result<(), InteropError> {
        self.obj.dispose().await
    }
}

/// The pre-GA name for [`AdvancedMarkerElement`].
#[deprecated(note = "use `AdvancedMarkerElement`")]
pub struct AdvancedMarkerView;

#[allow(deprecated)]
impl AdvancedMarkerView {
    pub const JS_PATH: &'static str = "google.maps.marker.AdvancedMarkerElement";

    /// Constructs the element under its current name but hands back a
    /// classic [`Marker`]-typed wrapper, as the pre-GA surface did.
    pub async fn create(options: AdvancedMarkerViewOptions) -> Result<Marker, InteropError> {
        loader::ensure_loaded()?;
        let obj = JsObjectRef::create(Self::JS_PATH, Args::new().arg(&options)?).await?;
        Ok(Marker::from_ref(obj))
    }
}

#[deprecated(note = "use `AdvancedMarkerElementOptions`")]
pub type AdvancedMarkerViewOptions = AdvancedMarkerElementOptions;
