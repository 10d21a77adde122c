//! The map itself.

use google_maps_interop::{Args, EventListener, InteropError, JsObjectRef, RefToken};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::enums::{GestureHandling, MapTypeId};
use crate::geometry::{LatLng, LatLngBounds};
use crate::impl_wire_types;
use crate::loader;

/// Construction and `set_options` parameters for a [`Map`]. Unset fields
/// stay off the wire so the API's own defaults apply.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_type_id: Option<MapTypeId>,
    /// Required for advanced markers and cloud styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gesture_handling: Option<GestureHandling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,
    #[serde(rename = "disableDefaultUI", skip_serializing_if = "Option::is_none")]
    pub disable_default_ui: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_type_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_view_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullscreen_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickable_icons: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restriction: Option<MapRestriction>,
    /// Local style rules; maps with a `map_id` are styled in the cloud
    /// instead and ignore these.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<Vec<MapTypeStyle>>,
}

/// One styling rule: which features it selects and how to draw them.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapTypeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
    pub stylers: Vec<MapStyler>,
}

/// One styler entry; the API expects each entry to set a single knob.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStyler {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invert_lightness: Option<bool>,
}

/// Pans and zooms are clamped to stay inside `lat_lng_bounds`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRestriction {
    pub lat_lng_bounds: LatLngBounds,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_bounds: Option<bool>,
}

impl_wire_types!(MapOptions, MapRestriction, MapTypeStyle, MapStyler);

/// One `google.maps.Map` instance rendered into a container element.
pub struct Map {
    obj: JsObjectRef,
}

impl Map {
    pub const JS_PATH: &'static str = "google.maps.Map";

    /// Construct a map in `container`. The loader (or the page itself) must
    /// have put the API on `window` first.
    pub async fn new(
        container: &web_sys::Element,
        options: MapOptions,
    ) -> Result<Self, InteropError> {
        loader::ensure_loaded()?;
        let obj = JsObjectRef::create(
            Self::JS_PATH,
            Args::new().arg(container)?.arg(&options)?,
        )
        .await?;
        Ok(Self { obj })
    }

    /// Wrap a reference that is already known to be a `google.maps.Map`
    /// (for instance one obtained through `MapEntity::map_ref`).
    pub fn from_object_ref(obj: JsObjectRef) -> Self {
        Self { obj }
    }

    pub fn object_ref(&self) -> &JsObjectRef {
        &self.obj
    }

    /// The token form of this map's reference, for embedding in options
    /// structs (`MarkerOptions::map` and friends).
    pub fn ref_token(&self) -> RefToken {
        self.obj.ref_token()
    }

    pub async fn set_center(&self, center: LatLng) -> Result<(), InteropError> {
        self.obj.invoke("setCenter", Args::new().arg(center)?).await
    }

    pub async fn center(&self) -> Result<Option<LatLng>, InteropError> {
        self.obj.invoke_returning("getCenter", Args::new()).await
    }

    pub async fn set_zoom(&self, zoom: f64) -> Result<(), InteropError> {
        self.obj.invoke("setZoom", Args::new().arg(zoom)?).await
    }

    pub async fn zoom(&self) -> Result<f64, InteropError> {
        self.obj.invoke_returning("getZoom", Args::new()).await
    }

    pub async fn pan_to(&self, center: LatLng) -> Result<(), InteropError> {
        self.obj.invoke("panTo", Args::new().arg(center)?).await
    }

    /// Shift the viewport by a pixel delta.
    pub async fn pan_by(&self, x: f64, y: f64) -> Result<(), InteropError> {
        self.obj
            .invoke("panBy", Args::new().arg(x)?.arg(y)?)
            .await
    }

    pub async fn fit_bounds(&self, bounds: LatLngBounds) -> Result<(), InteropError> {
        self.obj
            .invoke("fitBounds", Args::new().arg(bounds)?)
            .await
    }

    /// Current viewport bounds; `None` until the first layout settles.
    pub async fn bounds(&self) -> Result<Option<LatLngBounds>, InteropError> {
        self.obj.invoke_returning("getBounds", Args::new()).await
    }

    pub async fn set_options(&self, options: MapOptions) -> Result<(), InteropError> {
        self.obj
            .invoke("setOptions", Args::new().arg(&options)?)
            .await
    }

    pub async fn set_map_type_id(&self, map_type_id: MapTypeId) -> Result<(), InteropError> {
        self.obj
            .invoke("setMapTypeId", Args::new().arg(map_type_id.as_str())?)
            .await
    }

    /// Current base imagery; unrecognized values fall back to the default
    /// (the API grows variants faster than this enum).
    pub async fn map_type_id(&self) -> Result<MapTypeId, InteropError> {
        let raw: String = self
            .obj
            .invoke_returning("getMapTypeId", Args::new())
            .await?;
        Ok(MapTypeId::parse_or_default(&raw))
    }

    /// Register a handler for a map event (`click`, `idle`,
    /// `center_changed`, ...). Events that fire without a payload pair with
    /// `T = ()`.
    pub async fn add_listener<T, F>(
        &self,
        event: &str,
        handler: F,
    ) -> Result<EventListener, InteropError>
    where
        T: DeserializeOwned,
        F: FnMut(T) + 'static,
    {
        self.obj.add_listener(event, handler).await
    }

    pub async fn clear_listeners(&self, event: &str) -> Result<(), InteropError> {
        self.obj.clear_listeners(event).await
    }

    /// Release the browser-side map instance.
    pub async fn dispose(self) -> Result<(), InteropError> {
        self.obj.dispose().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_serialize_camel_case_and_skip_unset_fields() {
        let options = MapOptions {
            center: Some(LatLng::new(52.5, 13.4)),
            zoom: Some(11.0),
            map_type_id: Some(MapTypeId::Terrain),
            disable_default_ui: Some(true),
            ..MapOptions::default()
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "center": { "lat": 52.5, "lng": 13.4 },
                "zoom": 11.0,
                "mapTypeId": "terrain",
                "disableDefaultUI": true,
            })
        );
    }

    #[test]
    fn style_rules_serialize_single_knob_stylers() {
        let style = MapTypeStyle {
            feature_type: Some("water".to_string()),
            stylers: vec![
                MapStyler {
                    color: Some("#00bcd4".to_string()),
                    ..MapStyler::default()
                },
                MapStyler {
                    lightness: Some(20.0),
                    ..MapStyler::default()
                },
            ],
            ..MapTypeStyle::default()
        };
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "featureType": "water",
                "stylers": [{ "color": "#00bcd4" }, { "lightness": 20.0 }],
            })
        );
    }

    #[test]
    fn restriction_nests_its_bounds_literal() {
        let options = MapOptions {
            restriction: Some(MapRestriction {
                lat_lng_bounds: LatLngBounds::new(LatLng::new(0.0, 1.0), LatLng::new(2.0, 3.0)),
                strict_bounds: None,
            }),
            ..MapOptions::default()
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "restriction": {
                    "latLngBounds": { "south": 0.0, "west": 1.0, "north": 2.0, "east": 3.0 }
                }
            })
        );
    }
}
