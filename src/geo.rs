//! Geometry helpers
//!
//! Delivery areas travel as GeoJSON polygons with `[lon, lat]` positions and
//! a closed outer ring; the pickers work with plain `Location` vertices.

use serde_json::{json, Value};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::models::Location;

/// Smallest vertex count that encloses an area.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Encodes vertices as a GeoJSON `Polygon`, closing the ring.
pub fn to_geojson_polygon(vertices: &[Location]) -> Option<Value> {
    if vertices.len() < MIN_POLYGON_VERTICES {
        return None;
    }
    let mut ring: Vec<[f64; 2]> = vertices.iter().map(|v| [v.longitude, v.latitude]).collect();
    if ring.first() != ring.last() {
        ring.push(ring[0]);
    }
    Some(json!({ "type": "Polygon", "coordinates": [ring] }))
}

/// Outer-ring vertices of a GeoJSON `Polygon`, without the closing point.
pub fn from_geojson_polygon(value: &Value) -> Vec<Location> {
    let Some(ring) = value
        .get("coordinates")
        .and_then(Value::as_array)
        .and_then(|rings| rings.first())
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut out: Vec<Location> = ring
        .iter()
        .filter_map(|pos| {
            let pos = pos.as_array()?;
            Some(Location {
                longitude: pos.first()?.as_f64()?,
                latitude: pos.get(1)?.as_f64()?,
            })
        })
        .collect();
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

pub fn format_location(loc: &Location) -> String {
    format!("{:.5}, {:.5}", loc.latitude, loc.longitude)
}

/// Parses manually typed coordinates, rejecting out-of-range values.
pub fn parse_location(lat: &str, lon: &str) -> Option<Location> {
    let latitude: f64 = lat.trim().parse().ok()?;
    let longitude: f64 = lon.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude))
        .then_some(Location { latitude, longitude })
}

/// Asks the browser for the device position.
pub async fn current_position() -> Result<Location, String> {
    let geolocation = web_sys::window()
        .ok_or("no window")?
        .navigator()
        .geolocation()
        .map_err(|_| "geolocation unavailable".to_string())?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    let value = JsFuture::from(promise)
        .await
        .map_err(|_| "location permission denied".to_string())?;
    // Read through Reflect; the typed position bindings are unstable in web-sys.
    let coords = js_sys::Reflect::get(&value, &JsValue::from_str("coords"))
        .map_err(|_| "unexpected geolocation result".to_string())?;
    let number = |key: &str| {
        js_sys::Reflect::get(&coords, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .ok_or_else(|| format!("geolocation result has no {key}"))
    };
    Ok(Location {
        latitude: number("latitude")?,
        longitude: number("longitude")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(latitude: f64, longitude: f64) -> Location {
        Location { latitude, longitude }
    }

    #[test]
    fn test_polygon_ring_is_closed_lon_lat() {
        let area = to_geojson_polygon(&[loc(33.0, 36.0), loc(33.1, 36.0), loc(33.1, 36.2)]).unwrap();
        assert_eq!(
            area,
            json!({
                "type": "Polygon",
                "coordinates": [[[36.0, 33.0], [36.0, 33.1], [36.2, 33.1], [36.0, 33.0]]]
            })
        );
        assert!(to_geojson_polygon(&[loc(1.0, 1.0), loc(2.0, 2.0)]).is_none());
    }

    #[test]
    fn test_decode_drops_closing_point() {
        let vertices = vec![loc(33.0, 36.0), loc(33.1, 36.0), loc(33.1, 36.2)];
        let area = to_geojson_polygon(&vertices).unwrap();
        assert_eq!(from_geojson_polygon(&area), vertices);
        assert!(from_geojson_polygon(&json!({"type": "Point"})).is_empty());
    }

    #[test]
    fn test_parse_location() {
        assert_eq!(parse_location("33.5", " 36.3 "), Some(loc(33.5, 36.3)));
        assert_eq!(parse_location("95", "36"), None);
        assert_eq!(parse_location("abc", "36"), None);
    }
}
