//! Google Maps JavaScript API bindings for Rust web apps.
//!
//! The Maps API runs in the browser's script engine; this crate lets Rust
//! code compiled to WebAssembly drive it without writing any JavaScript:
//! construct maps and overlays, call their methods, and receive their
//! events as closure invocations. The marshalling underneath lives in
//! `google-maps-interop`; this crate is the API surface.
//!
//! ```ignore
//! use google_maps_wasm::{loader, LoaderOptions, Map, MapOptions, Marker, MarkerOptions};
//! use google_maps_wasm::{LatLng, MapEntity, MapMouseEvent};
//!
//! # async fn run(container: web_sys::Element) -> Result<(), google_maps_wasm::InteropError> {
//! loader::load(&LoaderOptions::new("YOUR_API_KEY")).await?;
//!
//! let map = Map::new(
//!     &container,
//!     MapOptions {
//!         center: Some(LatLng::new(48.8566, 2.3522)),
//!         zoom: Some(12.0),
//!         ..MapOptions::default()
//!     },
//! )
//! .await?;
//!
//! let marker = Marker::new(MarkerOptions {
//!     position: Some(LatLng::new(48.8584, 2.2945)),
//!     map: Some(map.ref_token()),
//!     title: Some("Eiffel Tower".to_string()),
//!     ..MarkerOptions::default()
//! })
//! .await?;
//!
//! let clicks = marker
//!     .add_listener("click", |event: MapMouseEvent| {
//!         tracing::info!("clicked at {:?}", event.lat_lng);
//!     })
//!     .await?;
//!
//! // Lifetimes are explicit on both sides of the boundary:
//! clicks.remove().await?;
//! marker.dispose().await?;
//! map.dispose().await?;
//! # Ok(())
//! # }
//! ```

pub mod advanced_marker;
pub mod enums;
pub mod events;
pub mod geometry;
pub mod info_window;
pub mod loader;
pub mod map;
pub mod marker;
pub mod shapes;

pub(crate) use google_maps_interop::impl_to_interop_arg_via_serde as impl_wire_types;

#[allow(deprecated)]
pub use advanced_marker::{
    AdvancedMarkerElement, AdvancedMarkerElementOptions, AdvancedMarkerView,
    AdvancedMarkerViewOptions, PinElement, PinElementOptions,
};
pub use enums::{
    Animation, CollisionBehavior, ControlPosition, GestureHandling, MapTypeId, ParseEnumError,
    StrokePosition,
};
pub use events::{IconMouseEvent, MapEntity, MapMouseEvent, PolyMouseEvent};
pub use geometry::{LatLng, LatLngBounds, Point, Size};
pub use info_window::{InfoWindow, InfoWindowOptions, ObjectAnchor};
pub use loader::LoaderOptions;
pub use map::{Map, MapOptions, MapRestriction, MapStyler, MapTypeStyle};
pub use marker::{
    Icon, Marker, MarkerIcon, MarkerLabel, MarkerLabelValue, MarkerOptions, Symbol,
};
pub use shapes::{
    Circle, CircleOptions, Polygon, PolygonOptions, Polyline, PolylineOptions, Rectangle,
    RectangleOptions,
};

pub use google_maps_interop::{
    active_listener_count, browser_instance_count, live_ref_count, Args,
    EventListener as MapsEventListener, InteropError, JsCallback, JsObjectRef, RefId, RefToken,
    ToInteropArg,
};
