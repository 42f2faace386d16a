use crate::model::GeoPoint;

/// Mean Earth radius used by the spherical model, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers (Haversine formula)
///
/// Spherical Earth, no ellipsoidal correction. Coordinates are expected to be
/// finite; the graph builder rejects anything else before calling this.
///
/// The intermediate `h` is clamped to `[0, 1]`: rounding can push it past 1
/// for near-antipodal pairs, which would make `asin` return NaN.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.clamp(0.0, 1.0).sqrt().asin()
}
