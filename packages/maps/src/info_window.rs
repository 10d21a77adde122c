//! Info windows.

use google_maps_interop::{Args, EventListener, InteropError, JsObjectRef};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::events::MapEntity;
use crate::geometry::{LatLng, Size};
use crate::impl_wire_types;
use crate::loader;
use crate::map::Map;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoWindowOptions {
    /// HTML content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LatLng>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_auto_pan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_offset: Option<Size>,
}

impl_wire_types!(InfoWindowOptions);

/// One `google.maps.InfoWindow`. Events: `closeclick`, `content_changed`,
/// `position_changed`, ...
pub struct InfoWindow {
    obj: JsObjectRef,
}

impl InfoWindow {
    pub const JS_PATH: &'static str = "google.maps.InfoWindow";

    pub async fn new(options: InfoWindowOptions) -> Result<Self, InteropError> {
        loader::ensure_loaded()?;
        let obj = JsObjectRef::create(Self::JS_PATH, Args::new().arg(&options)?).await?;
        Ok(Self { obj })
    }

    /// Open on `map`, optionally anchored to an entity (a marker); without
    /// an anchor the window sits at its own `position`.
    pub async fn open(
        &self,
        map: &Map,
        anchor: Option<&dyn ObjectAnchor>,
    ) -> Result<(), InteropError> {
        self.obj
            .invoke(
                "open",
                Args::new()
                    .arg(map.ref_token())?
                    .arg(anchor.map(|anchor| anchor.anchor_token()))?,
            )
            .await
    }

    pub async fn close(&self) -> Result<(), InteropError> {
        self.obj.invoke("close", Args::new()).await
    }

    pub async fn set_content(&self, content: &str) -> Result<(), InteropError> {
        self.obj
            .invoke("setContent", Args::new().arg(content)?)
            .await
    }

    pub async fn set_position(&self, position: LatLng) -> Result<(), InteropError> {
        self.obj
            .invoke("setPosition", Args::new().arg(position)?)
            .await
    }

    pub async fn position(&self) -> Result<Option<LatLng>, InteropError> {
        self.obj.invoke_returning("getPosition", Args::new()).await
    }

    pub async fn set_z_index(&self, z_index: i32) -> Result<(), InteropError> {
        self.obj
            .invoke("setZIndex", Args::new().arg(z_index)?)
            .await
    }

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

    pub async fn dispose(self) -> Result<(), InteropError> {
        self.obj.dispose().await
    }
}

/// Things an info window can anchor to. Blanket-covers every map entity.
pub trait ObjectAnchor {
    fn anchor_token(&self) -> google_maps_interop::RefToken;
}

impl<T: MapEntity> ObjectAnchor for T {
    fn anchor_token(&self) -> google_maps_interop::RefToken {
        self.ref_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_serialize_camel_case_and_skip_unset_fields() {
        let options = InfoWindowOptions {
            content: Some("<b>hi</b>".to_string()),
            max_width: Some(240),
            disable_auto_pan: Some(true),
            ..InfoWindowOptions::default()
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "content": "<b>hi</b>",
                "maxWidth": 240,
                "disableAutoPan": true,
            })
        );
    }
}
