//! Boundary file decoding.
//!
//! The map consumes a GeoJSON-style FeatureCollection of named Polygon /
//! MultiPolygon features. Decoding happens once, before the frame loop; the
//! core geometry pipeline receives plain `GeoRegion`s and never touches the
//! file format itself.

use regions::{GeoPoint, GeoPolygon, GeoRegion, Ring};
use serde_json::Value;

/// Property keys probed for a region's representative point. The source
/// dataset spells it `contorid`; the common spellings are accepted too.
const CENTER_KEYS: [&str; 4] = ["cp", "center", "centroid", "contorid"];

#[derive(Debug)]
pub enum BoundaryError {
    NotAFeatureCollection,
    InvalidFeature { index: usize, reason: String },
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            BoundaryError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for BoundaryError {}

/// Decodes a boundary payload into regions, keyed by `properties.name`.
pub fn regions_from_geojson_str(payload: &str) -> Result<Vec<GeoRegion>, BoundaryError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| BoundaryError::InvalidFeature {
            index: 0,
            reason: format!("JSON parse error: {e}"),
        })?;
    regions_from_geojson_value(&value)
}

pub fn regions_from_geojson_value(value: &Value) -> Result<Vec<GeoRegion>, BoundaryError> {
    let obj = value
        .as_object()
        .ok_or(BoundaryError::NotAFeatureCollection)?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or(BoundaryError::NotAFeatureCollection)?;
    if ty != "FeatureCollection" {
        return Err(BoundaryError::NotAFeatureCollection);
    }

    let features = obj
        .get("features")
        .and_then(|v| v.as_array())
        .ok_or(BoundaryError::NotAFeatureCollection)?;

    let mut regions = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        regions.push(parse_feature(feature).map_err(|reason| BoundaryError::InvalidFeature {
            index,
            reason,
        })?);
    }
    Ok(regions)
}

fn parse_feature(feature: &Value) -> Result<GeoRegion, String> {
    let obj = feature
        .as_object()
        .ok_or_else(|| "feature must be an object".to_string())?;

    let properties = obj
        .get("properties")
        .and_then(|v| v.as_object())
        .ok_or_else(|| "feature missing properties".to_string())?;
    let name = properties
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "feature missing properties.name".to_string())?;

    let geometry = obj
        .get("geometry")
        .and_then(|v| v.as_object())
        .ok_or_else(|| "feature missing geometry".to_string())?;
    let geom_type = geometry
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "geometry missing type".to_string())?;
    let coordinates = geometry
        .get("coordinates")
        .ok_or_else(|| "geometry missing coordinates".to_string())?;

    let polygons = match geom_type {
        "Polygon" => vec![parse_polygon(coordinates)?],
        "MultiPolygon" => coordinates
            .as_array()
            .ok_or_else(|| "MultiPolygon coordinates must be an array".to_string())?
            .iter()
            .map(parse_polygon)
            .collect::<Result<Vec<_>, _>>()?,
        other => return Err(format!("unsupported geometry type: {other}")),
    };

    let mut region = GeoRegion::new(name, polygons);
    region.center = CENTER_KEYS
        .iter()
        .find_map(|key| properties.get(*key))
        .and_then(parse_point);
    Ok(region)
}

/// A polygon is an array of rings; the first is the exterior, the rest are
/// holes of that polygon.
fn parse_polygon(value: &Value) -> Result<GeoPolygon, String> {
    let rings = value
        .as_array()
        .ok_or_else(|| "polygon must be an array of rings".to_string())?;
    let mut parsed: Vec<Ring> = Vec::with_capacity(rings.len());
    for ring in rings {
        parsed.push(parse_ring(ring)?);
    }

    let mut iter = parsed.into_iter();
    let exterior = iter
        .next()
        .ok_or_else(|| "polygon has no rings".to_string())?;
    Ok(GeoPolygon::with_holes(exterior, iter.collect()))
}

fn parse_ring(value: &Value) -> Result<Ring, String> {
    let points = value
        .as_array()
        .ok_or_else(|| "ring must be an array of positions".to_string())?;
    points
        .iter()
        .map(|p| parse_point(p).ok_or_else(|| "position must be [lon, lat]".to_string()))
        .collect()
}

fn parse_point(value: &Value) -> Option<GeoPoint> {
    let pair = value.as_array()?;
    let lon = pair.first()?.as_f64()?;
    let lat = pair.get(1)?.as_f64()?;
    Some(GeoPoint::new(lon, lat))
}
