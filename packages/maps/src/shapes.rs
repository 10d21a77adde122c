//! Vector overlays: polylines, polygons, circles and rectangles.
//!
//! Geometry always crosses as literals; `getPath`/`getPaths` MVCArrays come
//! back as plain arrays (the object manager flattens them), so path reads
//! deserialize straight into `Vec<LatLng>`.

use google_maps_interop::{Args, InteropError, JsObjectRef, RefToken};
use serde::Serialize;

use crate::enums::StrokePosition;
use crate::events::MapEntity;
use crate::geometry::{LatLng, LatLngBounds};
use crate::impl_wire_types;
use crate::loader;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<LatLng>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<RefToken>,
    /// Follow great circles instead of screen-straight segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geodesic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

/// One `google.maps.Polyline`. Events: `click`, `mouseover`, ... with
/// [`crate::events::PolyMouseEvent`] payloads.
pub struct Polyline {
    obj: JsObjectRef,
}

impl Polyline {
    pub const JS_PATH: &'static str = "google.maps.Polyline";

    pub async fn new(options: PolylineOptions) -> Result<Self, InteropError> {
        loader::ensure_loaded()?;
        let obj = JsObjectRef::create(Self::JS_PATH, Args::new().arg(&options)?).await?;
        Ok(Self { obj })
    }

    pub async fn path(&self) -> Result<Vec<LatLng>, InteropError> {
        self.obj.invoke_returning("getPath", Args::new()).await
    }

    pub async fn set_path(&self, path: &[LatLng]) -> Result<(), InteropError> {
        self.obj.invoke("setPath", Args::new().arg(path)?).await
    }

    pub async fn set_visible(&self, visible: bool) -> Result<(), InteropError> {
        self.obj
            .invoke("setVisible", Args::new().arg(visible)?)
            .await
    }

    pub async fn set_editable(&self, editable: bool) -> Result<(), InteropError> {
        self.obj
            .invoke("setEditable", Args::new().arg(editable)?)
            .await
    }

    pub async fn set_options(&self, options: PolylineOptions) -> Result<(), InteropError> {
        self.obj
            .invoke("setOptions", Args::new().arg(&options)?)
            .await
    }
}

impl MapEntity for Polyline {
    fn object_ref(&self) -> &JsObjectRef {
        &self.obj
    }

    fn into_object_ref(self) -> JsObjectRef {
        self.obj
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonOptions {
    /// Outer ring first, holes after.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<Vec<LatLng>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<RefToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geodesic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_position: Option<StrokePosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

/// One `google.maps.Polygon`.
pub struct Polygon {
    obj: JsObjectRef,
}

impl Polygon {
    pub const JS_PATH: &'static str = "google.maps.Polygon";

    pub async fn new(options: PolygonOptions) -> Result<Self, InteropError> {
        loader::ensure_loaded()?;
        let obj = JsObjectRef::create(Self::JS_PATH, Args::new().arg(&options)?).await?;
        Ok(Self { obj })
    }

    pub async fn paths(&self) -> Result<Vec<Vec<LatLng>>, InteropError> {
        self.obj.invoke_returning("getPaths", Args::new()).await
    }

    pub async fn set_paths(&self, paths: &[Vec<LatLng>]) -> Result<(), InteropError> {
        self.obj.invoke("setPaths", Args::new().arg(paths)?).await
    }

    pub async fn set_visible(&self, visible: bool) -> Result<(), InteropError> {
        self.obj
            .invoke("setVisible", Args::new().arg(visible)?)
            .await
    }

    pub async fn set_editable(&self, editable: bool) -> Result<(), InteropError> {
        self.obj
            .invoke("setEditable", Args::new().arg(editable)?)
            .await
    }

    pub async fn set_options(&self, options: PolygonOptions) -> Result<(), InteropError> {
        self.obj
            .invoke("setOptions", Args::new().arg(&options)?)
            .await
    }
}

impl MapEntity for Polygon {
    fn object_ref(&self) -> &JsObjectRef {
        &self.obj
    }

    fn into_object_ref(self) -> JsObjectRef {
        self.obj
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLng>,
    /// Meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<RefToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_position: Option<StrokePosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

/// One `google.maps.Circle`.
pub struct Circle {
    obj: JsObjectRef,
}

impl Circle {
    pub const JS_PATH: &'static str = "google.maps.Circle";

    pub async fn new(options: CircleOptions) -> Result<Self, InteropError> {
        loader::ensure_loaded()?;
        let obj = JsObjectRef::create(Self::JS_PATH, Args::new().arg(&options)?).await?;
        Ok(Self { obj })
    }

    pub async fn center(&self) -> Result<Option<LatLng>, InteropError> {
        self.obj.invoke_returning("getCenter", Args::new()).await
    }

    pub async fn set_center(&self, center: LatLng) -> Result<(), InteropError> {
        self.obj.invoke("setCenter", Args::new().arg(center)?).await
    }

    pub async fn radius(&self) -> Result<f64, InteropError> {
        self.obj.invoke_returning("getRadius", Args::new()).await
    }

    pub async fn set_radius(&self, radius: f64) -> Result<(), InteropError> {
        self.obj.invoke("setRadius", Args::new().arg(radius)?).await
    }

    /// Bounds of the circle as the API computes them (spherical, not the
    /// local interval math in [`LatLngBounds`]).
    pub async fn bounds(&self) -> Result<Option<LatLngBounds>, InteropError> {
        self.obj.invoke_returning("getBounds", Args::new()).await
    }

    pub async fn set_options(&self, options: CircleOptions) -> Result<(), InteropError> {
        self.obj
            .invoke("setOptions", Args::new().arg(&options)?)
            .await
    }
}

impl MapEntity for Circle {
    fn object_ref(&self) -> &JsObjectRef {
        &self.obj
    }

    fn into_object_ref(self) -> JsObjectRef {
        self.obj
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<LatLngBounds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<RefToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_position: Option<StrokePosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

/// One `google.maps.Rectangle`.
pub struct Rectangle {
    obj: JsObjectRef,
}

impl Rectangle {
    pub const JS_PATH: &'static str = "google.maps.Rectangle";

    pub async fn new(options: RectangleOptions) -> Result<Self, InteropError> {
        loader::ensure_loaded()?;
        let obj = JsObjectRef::create(Self::JS_PATH, Args::new().arg(&options)?).await?;
        Ok(Self { obj })
    }

    pub async fn bounds(&self) -> Result<Option<LatLngBounds>, InteropError> {
        self.obj.invoke_returning("getBounds", Args::new()).await
    }

    pub async fn set_bounds(&self, bounds: LatLngBounds) -> Result<(), InteropError> {
        self.obj.invoke("setBounds", Args::new().arg(bounds)?).await
    }

    pub async fn set_options(&self, options: RectangleOptions) -> Result<(), InteropError> {
        self.obj
            .invoke("setOptions", Args::new().arg(&options)?)
            .await
    }
}

impl MapEntity for Rectangle {
    fn object_ref(&self) -> &JsObjectRef {
        &self.obj
    }

    fn into_object_ref(self) -> JsObjectRef {
        self.obj
    }
}

impl_wire_types!(
    PolylineOptions,
    PolygonOptions,
    CircleOptions,
    RectangleOptions,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_path_serializes_as_literals() {
        let options = PolylineOptions {
            path: Some(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)]),
            geodesic: Some(true),
            stroke_weight: Some(2.0),
            ..PolylineOptions::default()
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "path": [
                    { "lat": 0.0, "lng": 0.0 },
                    { "lat": 1.0, "lng": 1.0 },
                ],
                "geodesic": true,
                "strokeWeight": 2.0,
            })
        );
    }

    #[test]
    fn circle_options_carry_center_and_radius() {
        let options = CircleOptions {
            center: Some(LatLng::new(40.7, -74.0)),
            radius: Some(500.0),
            stroke_position: Some(StrokePosition::Inside),
            ..CircleOptions::default()
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "center": { "lat": 40.7, "lng": -74.0 },
                "radius": 500.0,
                "strokePosition": 1,
            })
        );
    }
}
