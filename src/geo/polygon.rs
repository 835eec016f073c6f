//! Point-in-polygon and point-to-polygon distance.
//!
//! Containment treats (lat, lon) as planar x/y, which holds for boundaries with
//! a small angular extent such as a city ring road. Points on the boundary are
//! reported as outside.

use super::{distance, round_km, GeoPoint, GeometryError};

/// Cross products below this magnitude count as collinear
const COLLINEAR_EPSILON: f64 = 1e-12;

/// Check whether `point` lies strictly inside `polygon`.
///
/// The polygon is implicitly closed; a repeated closing vertex is harmless.
pub fn contains(point: &GeoPoint, polygon: &[GeoPoint]) -> Result<bool, GeometryError> {
    if polygon.len() < 3 {
        return Err(GeometryError::InvalidArgument(format!(
            "polygon needs at least 3 vertices, got {}",
            polygon.len()
        )));
    }

    let (x, y) = (point.lat, point.lon);
    let mut inside = false;
    let mut j = polygon.len() - 1;

    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].lat, polygon[i].lon);
        let (xj, yj) = (polygon[j].lat, polygon[j].lon);

        if on_segment(x, y, xi, yi, xj, yj) {
            return Ok(false);
        }

        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    Ok(inside)
}

/// Minimum great-circle distance in kilometers from `point` to any vertex of
/// `polygon`, rounded to 3 decimals.
///
/// Only vertices are considered, not the edges between them.
pub fn min_distance(point: &GeoPoint, polygon: &[GeoPoint]) -> Result<f64, GeometryError> {
    let nearest = polygon
        .iter()
        .map(|vertex| distance(point, vertex))
        .min_by(f64::total_cmp)
        .ok_or_else(|| GeometryError::InvalidArgument("polygon has no vertices".to_string()))?;

    Ok(round_km(nearest))
}

fn on_segment(x: f64, y: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    let cross = (x2 - x1) * (y - y1) - (y2 - y1) * (x - x1);
    if cross.abs() > COLLINEAR_EPSILON {
        return false;
    }
    x >= x1.min(x2) && x <= x1.max(x2) && y >= y1.min(y2) && y <= y1.max(y2)
}
