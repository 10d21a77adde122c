//! The classic `google.maps.Marker`.

use google_maps_interop::{Args, InteropError, JsObjectRef, RefToken};
use serde::Serialize;

use crate::enums::Animation;
use crate::events::MapEntity;
use crate::geometry::{LatLng, Point, Size};
use crate::impl_wire_types;
use crate::loader;

/// Marker image: a plain URL, a sized [`Icon`], or a vector [`Symbol`].
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum MarkerIcon {
    Url(String),
    Icon(Icon),
    Symbol(Symbol),
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaled_size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_origin: Option<Point>,
}

/// A vector path drawn in place of an image. `path` is an SVG path string
/// in the marker's own coordinate space.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Point>,
}

/// Marker label: bare text, or text with styling.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum MarkerLabelValue {
    Text(String),
    Styled(MarkerLabel),
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLabel {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LatLng>,
    /// Attach to a map at construction; [`MapEntity::set_map`] works later.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<RefToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<MarkerLabelValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<MarkerIcon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_point: Option<Point>,
}

impl_wire_types!(
    MarkerOptions,
    MarkerIcon,
    Icon,
    Symbol,
    MarkerLabelValue,
    MarkerLabel,
);

/// One classic marker. Events: `click`, `dragstart`, `dragend`,
/// `position_changed`, ... (open string set).
pub struct Marker {
    obj: JsObjectRef,
}

impl Marker {
    pub const JS_PATH: &'static str = "google.maps.Marker";

    pub async fn new(options: MarkerOptions) -> Result<Self, InteropError> {
        loader::ensure_loaded()?;
        let obj = JsObjectRef::create(Self::JS_PATH, Args::new().arg(&options)?).await?;
        Ok(Self { obj })
    }

    pub(crate) fn from_ref(obj: JsObjectRef) -> Self {
        Self { obj }
    }

    pub async fn position(&self) -> Result<Option<LatLng>, InteropError> {
        self.obj.invoke_returning("getPosition", Args::new()).await
    }

    pub async fn set_position(&self, position: LatLng) -> Result<(), InteropError> {
        self.obj
            .invoke("setPosition", Args::new().arg(position)?)
            .await
    }

    pub async fn title(&self) -> Result<Option<String>, InteropError> {
        self.obj.invoke_returning("getTitle", Args::new()).await
    }

    pub async fn set_title(&self, title: &str) -> Result<(), InteropError> {
        self.obj.invoke("setTitle", Args::new().arg(title)?).await
    }

    pub async fn draggable(&self) -> Result<bool, InteropError> {
        self.obj.invoke_returning("getDraggable", Args::new()).await
    }

    pub async fn set_draggable(&self, draggable: bool) -> Result<(), InteropError> {
        self.obj
            .invoke("setDraggable", Args::new().arg(draggable)?)
            .await
    }

    pub async fn visible(&self) -> Result<bool, InteropError> {
        self.obj.invoke_returning("getVisible", Args::new()).await
    }

    pub async fn set_visible(&self, visible: bool) -> Result<(), InteropError> {
        self.obj
            .invoke("setVisible", Args::new().arg(visible)?)
            .await
    }

    pub async fn opacity(&self) -> Result<Option<f64>, InteropError> {
        self.obj.invoke_returning("getOpacity", Args::new()).await
    }

    pub async fn set_opacity(&self, opacity: f64) -> Result<(), InteropError> {
        self.obj
            .invoke("setOpacity", Args::new().arg(opacity)?)
            .await
    }

    pub async fn z_index(&self) -> Result<Option<i32>, InteropError> {
        self.obj.invoke_returning("getZIndex", Args::new()).await
    }

    pub async fn set_z_index(&self, z_index: i32) -> Result<(), InteropError> {
        self.obj
            .invoke("setZIndex", Args::new().arg(z_index)?)
            .await
    }

    pub async fn set_label(&self, label: MarkerLabelValue) -> Result<(), InteropError> {
        self.obj.invoke("setLabel", Args::new().arg(&label)?).await
    }

    pub async fn set_icon(&self, icon: MarkerIcon) -> Result<(), InteropError> {
        self.obj.invoke("setIcon", Args::new().arg(&icon)?).await
    }

    /// Start an animation, or stop the current one with `None`.
    pub async fn set_animation(&self, animation: Option<Animation>) -> Result<(), InteropError> {
        self.obj
            .invoke("setAnimation", Args::new().arg(animation)?)
            .await
    }
}

impl MapEntity for Marker {
    fn object_ref(&self) -> &JsObjectRef {
        &self.obj
    }

    fn into_object_ref(self) -> JsObjectRef {
        self.obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_serialize_camel_case_and_skip_unset_fields() {
        let options = MarkerOptions {
            position: Some(LatLng::new(-33.9, 151.2)),
            title: Some("Sydney".to_string()),
            z_index: Some(3),
            draggable: Some(true),
            ..MarkerOptions::default()
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "position": { "lat": -33.9, "lng": 151.2 },
                "title": "Sydney",
                "zIndex": 3,
                "draggable": true,
            })
        );
    }

    #[test]
    fn icon_union_serializes_untagged() {
        let url = MarkerIcon::Url("https://example.com/pin.png".to_string());
        assert_eq!(
            serde_json::to_value(&url).unwrap(),
            serde_json::json!("https://example.com/pin.png")
        );

        let icon = MarkerIcon::Icon(Icon {
            url: "https://example.com/pin.png".to_string(),
            scaled_size: Some(Size::new(24.0, 24.0)),
            ..Icon::default()
        });
        assert_eq!(
            serde_json::to_value(&icon).unwrap(),
            serde_json::json!({
                "url": "https://example.com/pin.png",
                "scaledSize": { "width": 24.0, "height": 24.0 },
            })
        );
    }

    #[test]
    fn label_union_serializes_untagged() {
        assert_eq!(
            serde_json::to_value(MarkerLabelValue::Text("A".to_string())).unwrap(),
            serde_json::json!("A")
        );
        let styled = MarkerLabelValue::Styled(MarkerLabel {
            text: "B".to_string(),
            color: Some("#222".to_string()),
            ..MarkerLabel::default()
        });
        assert_eq!(
            serde_json::to_value(&styled).unwrap(),
            serde_json::json!({ "text": "B", "color": "#222" })
        );
    }
}
