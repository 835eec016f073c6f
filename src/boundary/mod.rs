//! Reference boundaries that addresses are measured against.
//!
//! A boundary is an immutable closed ring of vertices. The MKAD ring road is
//! built in; other rings can be loaded from a TOML file of the form
//!
//! ```toml
//! name = "Garden Ring"
//!
//! [[vertex]]
//! lat = 55.7702
//! lon = 37.5954
//! ```

mod mkad;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::geo::{self, GeoPoint, GeometryError};

pub use mkad::MKAD_VERTICES;

/// A named, closed ring of vertices
#[derive(Debug, Clone, PartialEq)]
pub struct RingRoad {
    name: String,
    vertices: Vec<GeoPoint>,
}

#[derive(Debug, Deserialize)]
struct RingRoadFile {
    name: String,
    #[serde(rename = "vertex", default)]
    vertices: Vec<GeoPoint>,
}

impl RingRoad {
    /// Create a ring from validated vertices
    pub fn new(name: impl Into<String>, vertices: Vec<GeoPoint>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidArgument(format!(
                "a ring needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        for vertex in &vertices {
            GeoPoint::try_new(vertex.lat, vertex.lon)?;
        }

        Ok(Self {
            name: name.into(),
            vertices,
        })
    }

    /// The built-in Moscow Ring Road
    pub fn mkad() -> Self {
        Self {
            name: "MKAD".to_string(),
            vertices: MKAD_VERTICES.to_vec(),
        }
    }

    /// Load a ring from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read boundary file {}", path.display()))?;
        let file: RingRoadFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse boundary file {}", path.display()))?;

        let ring = Self::new(file.name, file.vertices)
            .with_context(|| format!("Invalid boundary in {}", path.display()))?;

        info!(
            "Loaded boundary '{}' with {} vertices from {}",
            ring.name,
            ring.vertices.len(),
            path.display()
        );
        Ok(ring)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the point lies strictly inside the ring
    pub fn contains(&self, point: &GeoPoint) -> Result<bool, GeometryError> {
        geo::contains(point, &self.vertices)
    }

    /// Distance in kilometers from the point to the nearest vertex
    pub fn min_distance(&self, point: &GeoPoint) -> Result<f64, GeometryError> {
        geo::min_distance(point, &self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SADOVAYA_KUDRINSKAYA: GeoPoint = GeoPoint::new(55.7589, 37.5846);
    const KALUGA_TEATRALNAYA: GeoPoint = GeoPoint::new(54.5138, 36.26373);

    #[test]
    fn test_mkad_shape() {
        let mkad = RingRoad::mkad();
        assert_eq!(mkad.name(), "MKAD");
        assert_eq!(mkad.len(), 108);
        assert!(!mkad.is_empty());
        // Built-in vertices pass the same validation as loaded ones
        assert!(RingRoad::new("MKAD", MKAD_VERTICES.to_vec()).is_ok());
    }

    #[test]
    fn test_city_center_inside_mkad() {
        let mkad = RingRoad::mkad();
        assert_eq!(mkad.contains(&SADOVAYA_KUDRINSKAYA), Ok(true));
        assert_eq!(mkad.contains(&GeoPoint::new(55.7558, 37.6173)), Ok(true));
    }

    #[test]
    fn test_kaluga_outside_mkad() {
        let mkad = RingRoad::mkad();
        assert_eq!(mkad.contains(&KALUGA_TEATRALNAYA), Ok(false));
        assert_eq!(mkad.min_distance(&KALUGA_TEATRALNAYA), Ok(144.249));
    }

    #[test]
    fn test_just_outside_mkad() {
        let mkad = RingRoad::mkad();
        let point = GeoPoint::new(55.7558, 37.9);
        assert_eq!(mkad.contains(&point), Ok(false));
        assert_eq!(mkad.min_distance(&point), Ok(3.59));
    }

    #[test]
    fn test_mkad_vertices_are_on_boundary() {
        let mkad = RingRoad::mkad();
        for vertex in mkad.vertices() {
            assert_eq!(mkad.contains(vertex), Ok(false));
            assert_eq!(mkad.min_distance(vertex), Ok(0.0));
        }
    }

    #[test]
    fn test_new_rejects_short_ring() {
        let result = RingRoad::new("line", MKAD_VERTICES[..2].to_vec());
        assert!(matches!(result, Err(GeometryError::InvalidArgument(_))));
    }

    #[test]
    fn test_new_rejects_out_of_range_vertex() {
        let vertices = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 200.0),
            GeoPoint::new(1.0, 1.0),
        ];
        assert!(RingRoad::new("bad", vertices).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
name = "triangle"

[[vertex]]
lat = 55.0
lon = 37.0

[[vertex]]
lat = 56.0
lon = 37.0

[[vertex]]
lat = 55.5
lon = 38.0
"#
        )
        .unwrap();

        let ring = RingRoad::load_from_file(file.path()).unwrap();
        assert_eq!(ring.name(), "triangle");
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.vertices()[2], GeoPoint::new(55.5, 38.0));
        assert_eq!(ring.contains(&GeoPoint::new(55.5, 37.3)), Ok(true));
    }

    #[test]
    fn test_load_from_file_without_vertices() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"nothing\"").unwrap();

        let err = RingRoad::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid boundary"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = RingRoad::load_from_file("/nonexistent/ring.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read boundary file"));
    }
}
