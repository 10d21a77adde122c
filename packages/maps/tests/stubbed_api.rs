#![cfg(target_arch = "wasm32")]

//! Drives the wrappers end to end against a stubbed `google.maps`: real
//! marshalling, real object manager, mocked API (the live one is out of
//! scope for tests).

use google_maps_wasm::{
    LatLng, Map, MapEntity, MapOptions, Marker, MarkerOptions,
};
use wasm_bindgen_test::wasm_bindgen_test;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Just enough of the API to construct, attach, and fire events: classes
/// store their options, getters mimic the method-bearing return types the
/// real API uses (`getCenter` returns an object with `toJSON`).
fn install_maps_stub() {
    js_sys::eval(
        r#"
        window.google = { maps: {
            Map: class {
                constructor(el, opts) {
                    this.el = el;
                    this.opts = opts || {};
                    this.zoom = this.opts.zoom ?? 0;
                    this.center = this.opts.center ?? null;
                    this.handlers = {};
                }
                setZoom(zoom) { this.zoom = zoom; }
                getZoom() { return this.zoom; }
                setCenter(center) { this.center = center; }
                getCenter() {
                    const center = this.center;
                    return center && { toJSON: () => center };
                }
                setOptions(opts) { Object.assign(this.opts, opts); }
            },
            Marker: class {
                constructor(opts) {
                    this.opts = opts || {};
                    this.map = this.opts.map ?? null;
                    this.handlers = {};
                }
                setMap(map) { this.map = map; }
                getMap() { return this.map; }
                getTitle() { return this.opts.title; }
                setTitle(title) { this.opts.title = title; }
                getPosition() {
                    const position = this.opts.position;
                    return position && { toJSON: () => position };
                }
                fire(event, payload) {
                    (this.handlers[event] || []).forEach((handler) => handler(payload));
                }
            },
            event: {
                addListener: (instance, event, handler) => {
                    (instance.handlers[event] ||= []).push(handler);
                    return {
                        remove: () => {
                            instance.handlers[event] =
                                instance.handlers[event].filter((h) => h !== handler);
                        },
                    };
                },
                clearListeners: (instance, event) => {
                    instance.handlers[event] = [];
                },
            },
        }};
        "#,
    )
    .unwrap();
}

fn container() -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    document.create_element("div").unwrap()
}

#[wasm_bindgen_test]
async fn map_round_trips_zoom_and_center() {
    install_maps_stub();

    let map = Map::new(
        &container(),
        MapOptions {
            center: Some(LatLng::new(1.0, 2.0)),
            zoom: Some(4.0),
            ..MapOptions::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(map.zoom().await.unwrap(), 4.0);
    assert_eq!(map.center().await.unwrap(), Some(LatLng::new(1.0, 2.0)));

    map.set_zoom(7.0).await.unwrap();
    assert_eq!(map.zoom().await.unwrap(), 7.0);

    map.set_center(LatLng::new(3.0, 4.0)).await.unwrap();
    assert_eq!(map.center().await.unwrap(), Some(LatLng::new(3.0, 4.0)));

    map.dispose().await.unwrap();
}

#[wasm_bindgen_test]
async fn marker_options_attach_to_a_live_map() {
    install_maps_stub();

    let map = Map::new(&container(), MapOptions::default()).await.unwrap();
    map.set_zoom(9.0).await.unwrap();

    let marker = Marker::new(MarkerOptions {
        position: Some(LatLng::new(5.0, 6.0)),
        map: Some(map.ref_token()),
        title: Some("pin".to_string()),
        ..MarkerOptions::default()
    })
    .await
    .unwrap();

    // The `map` token revived into the live Map instance, so the marker can
    // hand back a working reference to it.
    let map_ref = marker.map_ref().await.unwrap();
    let zoom: f64 = map_ref
        .invoke_returning("getZoom", google_maps_wasm::Args::new())
        .await
        .unwrap();
    assert_eq!(zoom, 9.0);
    map_ref.dispose().await.unwrap();

    assert_eq!(marker.title().await.unwrap(), Some("pin".to_string()));
    assert_eq!(
        marker.position().await.unwrap(),
        Some(LatLng::new(5.0, 6.0))
    );

    marker.dispose().await.unwrap();
    map.dispose().await.unwrap();
}

#[wasm_bindgen_test]
async fn detaching_goes_through_set_map_null() {
    install_maps_stub();

    let map = Map::new(&container(), MapOptions::default()).await.unwrap();
    let marker = Marker::new(MarkerOptions {
        map: Some(map.ref_token()),
        ..MarkerOptions::default()
    })
    .await
    .unwrap();

    marker.set_map(None).await.unwrap();
    // Detached: there is no map left to reference.
    assert!(marker.map_ref().await.is_err());

    marker.set_map(Some(&map)).await.unwrap();
    let reattached = marker.map_ref().await.unwrap();
    reattached.dispose().await.unwrap();

    marker.dispose().await.unwrap();
    map.dispose().await.unwrap();
}

#[wasm_bindgen_test]
async fn marker_events_reach_typed_handlers() {
    use google_maps_wasm::MapMouseEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    install_maps_stub();

    let marker = Marker::new(MarkerOptions::default()).await.unwrap();

    let seen: Rc<RefCell<Vec<Option<LatLng>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let listener = marker
        .add_listener("click", move |event: MapMouseEvent| {
            sink.borrow_mut().push(event.lat_lng);
        })
        .await
        .unwrap();

    // The stub's fire() plays the role of a user click; the payload mimics
    // the real MapMouseEvent carrying a method-bearing LatLng.
    let payload = js_sys::eval(
        r#"({ latLng: { toJSON: () => ({ lat: 10.0, lng: 20.0 }) } })"#,
    )
    .unwrap();
    marker
        .object_ref()
        .invoke(
            "fire",
            google_maps_wasm::Args::new()
                .arg("click")
                .unwrap()
                .arg(payload)
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(*seen.borrow(), vec![Some(LatLng::new(10.0, 20.0))]);

    listener.remove().await.unwrap();
    marker.dispose().await.unwrap();
}
