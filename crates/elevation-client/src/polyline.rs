//! Encoded polyline format (precision 1e-5, latitude first).
//!
//! Used to pack a batch of locations into a single compact query value.

use terrain_common::GeoPoint;

const PRECISION: f64 = 1e5;

/// Encode points as an encoded polyline string.
pub fn encode_polyline(points: &[GeoPoint]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    let (mut prev_lat, mut prev_lng) = (0i64, 0i64);

    for p in points {
        let lat = (p.lat * PRECISION).round() as i64;
        let lng = (p.lng * PRECISION).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

/// Decode an encoded polyline string. Returns `None` on truncated input.
pub fn decode_polyline(encoded: &str) -> Option<Vec<GeoPoint>> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let (mut lat, mut lng) = (0i64, 0i64);
    let mut points = Vec::new();

    while index < bytes.len() {
        lat += decode_value(bytes, &mut index)?;
        lng += decode_value(bytes, &mut index)?;
        points.push(GeoPoint::new(
            lat as f64 / PRECISION,
            lng as f64 / PRECISION,
        ));
    }

    Some(points)
}

fn encode_value(value: i64, out: &mut String) {
    let mut v = if value < 0 { !(value << 1) } else { value << 1 };
    while v >= 0x20 {
        out.push(char::from((((v & 0x1f) | 0x20) + 63) as u8));
        v >>= 5;
    }
    out.push(char::from((v + 63) as u8));
}

fn decode_value(bytes: &[u8], index: &mut usize) -> Option<i64> {
    let mut result = 0i64;
    let mut shift = 0;

    loop {
        let byte = i64::from(*bytes.get(*index)?) - 63;
        *index += 1;
        result |= (byte & 0x1f) << shift;
        shift += 5;
        if byte < 0x20 {
            break;
        }
    }

    Some(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}
