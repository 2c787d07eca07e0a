//! Named collections of collision shapes, usually one per animation.
//!
//! File layout:
//!
//! ```json
//! {
//!   "version": "1",
//!   "bounds": {
//!     "idle": { "shapes": [ { "type": "box", "values": { "min": {"x": 0, "y": 0}, "max": {"x": 16, "y": 32} } } ] }
//!   }
//! }
//! ```
//!
//! The same document may also carry an animation declaration; unknown
//! top-level fields are ignored.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::io::Read;

use glam::Vec2;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{check_version, Error, Result};
use crate::shape::Shape;
use crate::types::Rect;

/// Ordered shape lists keyed by name.
///
/// Files always produce `ShapeSet<String>`; in-memory sets can use any key.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeSet<K = String>
where
    K: Eq + Hash,
{
    sets: HashMap<K, Vec<Shape>>,
}

impl<K: Eq + Hash> Default for ShapeSet<K> {
    fn default() -> Self {
        Self {
            sets: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> ShapeSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&[Shape]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.sets.get(key).map(Vec::as_slice)
    }

    /// Shape at `index` in the list stored under `key`.
    pub fn shape<Q>(&self, key: &Q, index: usize) -> Option<&Shape>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.sets.get(key).and_then(|v| v.get(index))
    }

    pub fn insert(&mut self, key: K, shapes: Vec<Shape>) -> Option<Vec<Shape>> {
        self.sets.insert(key, shapes)
    }

    /// Append one shape to the list under `key`, creating it if needed.
    pub fn push(&mut self, key: K, shape: Shape) {
        self.sets.entry(key).or_default().push(shape);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[Shape])> {
        self.sets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl<K: Eq + Hash> FromIterator<(K, Vec<Shape>)> for ShapeSet<K> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Shape>)>>(iter: I) -> Self {
        Self {
            sets: iter.into_iter().collect(),
        }
    }
}

impl ShapeSet<String> {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: BoundsFile = serde_json::from_reader(reader)?;
        Self::from_file(file)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        Self::from_file(serde_json::from_str(s)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_file(serde_json::from_slice(bytes)?)
    }

    fn from_file(file: BoundsFile) -> Result<Self> {
        check_version(&file.version)?;
        if file.bounds.is_empty() {
            warn!("bounds file declares no shape sets");
            return Err(Error::EmptyDeclaration { what: "bound set" });
        }

        let mut set = ShapeSet::new();
        for (id, raw) in file.bounds {
            let shapes = raw
                .shapes
                .iter()
                .map(parse_shape)
                .collect::<Result<Vec<_>>>()?;
            set.insert(id, shapes);
        }
        debug!(sets = set.len(), "loaded bounds");
        Ok(set)
    }
}

// File model ---------------------------------------------------------------

#[derive(Deserialize)]
struct BoundsFile {
    version: String,
    #[serde(default)]
    bounds: HashMap<String, RawShapeList>,
}

#[derive(Deserialize)]
struct RawShapeList {
    #[serde(default)]
    shapes: Vec<ShapeEntry>,
}

/// One `{type, values}` entry, shared with level layers.
#[derive(Deserialize)]
pub(crate) struct ShapeEntry {
    #[serde(rename = "type")]
    pub shape_type: String,
    #[serde(default)]
    pub values: Value,
}

#[derive(Copy, Clone, Debug, Default, Deserialize)]
pub(crate) struct Point {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// `{min: {x, y}, max: {x, y}}`
#[derive(Copy, Clone, Debug, Default, Deserialize)]
pub(crate) struct RectValues {
    pub min: Point,
    pub max: Point,
}

impl From<RectValues> for Rect {
    fn from(v: RectValues) -> Self {
        Rect::new(v.min.into(), v.max.into())
    }
}

pub(crate) fn parse_shape(entry: &ShapeEntry) -> Result<Shape> {
    match entry.shape_type.as_str() {
        "box" => {
            let values = RectValues::deserialize(&entry.values).map_err(|source| {
                warn!(shape_type = %entry.shape_type, "invalid shape values");
                Error::InvalidShapeParameters {
                    shape_type: entry.shape_type.clone(),
                    source,
                }
            })?;
            Ok(Shape::Box(values.into()))
        }
        other => {
            warn!(shape_type = other, "unsupported shape type");
            Err(Error::UnsupportedShapeType(other.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bounds() {
        let json = r#"{
            "version": "1",
            "bounds": {
                "idle": { "shapes": [
                    { "type": "box", "values": { "min": {"x": 0, "y": 0}, "max": {"x": 16, "y": 32} } },
                    { "type": "box", "values": { "min": {"x": 2, "y": 0}, "max": {"x": 14, "y": 30} } }
                ]},
                "run": { "shapes": [] }
            }
        }"#;
        let set = ShapeSet::from_str(json).unwrap();
        assert_eq!(set.len(), 2);
        let idle = set.get("idle").unwrap();
        assert_eq!(idle.len(), 2);
        assert_eq!(idle[0], Shape::new_box(Vec2::ZERO, Vec2::new(16.0, 32.0)));
        assert_eq!(set.shape("idle", 1).unwrap().bounding_rect().left(), 2.0);
        assert!(set.get("run").unwrap().is_empty());
        assert!(set.shape("run", 0).is_none());
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        assert!(matches!(ShapeSet::from_str(""), Err(Error::Parse(_))));
        assert!(matches!(ShapeSet::from_reader(&b""[..]), Err(Error::Parse(_))));
    }

    #[test]
    fn test_unsupported_version() {
        let err = ShapeSet::from_slice(br#"{"version": "2", "bounds": {"a": {"shapes": []}}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedVersion(v) if v == "2"));
    }

    #[test]
    fn test_no_bound_sets() {
        let err = ShapeSet::from_str(r#"{"version": "1"}"#).unwrap_err();
        assert!(matches!(err, Error::EmptyDeclaration { .. }));
        let err = ShapeSet::from_str(r#"{"version": "1", "bounds": {}}"#).unwrap_err();
        assert!(matches!(err, Error::EmptyDeclaration { .. }));
    }

    #[test]
    fn test_unsupported_shape_type() {
        let json = r#"{"version": "1", "bounds": {"a": {"shapes": [{"type": "hexagon"}]}}}"#;
        match ShapeSet::from_str(json) {
            Err(Error::UnsupportedShapeType(t)) => assert_eq!(t, "hexagon"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_box_without_values() {
        let json = r#"{"version": "1", "bounds": {"a": {"shapes": [{"type": "box"}]}}}"#;
        match ShapeSet::from_str(json) {
            Err(Error::InvalidShapeParameters { shape_type, .. }) => assert_eq!(shape_type, "box"),
            other => panic!("unexpected {other:?}"),
        }
        let json = r#"{"version": "1", "bounds": {"a": {"shapes": [{"type": "box", "values": {"min": 3}}]}}}"#;
        assert!(matches!(
            ShapeSet::from_str(json),
            Err(Error::InvalidShapeParameters { .. })
        ));
    }

    #[test]
    fn test_in_memory_keys() {
        #[derive(PartialEq, Eq, Hash)]
        enum Part {
            Head,
            Feet,
        }
        let mut set: ShapeSet<Part> = ShapeSet::new();
        set.push(Part::Head, Shape::new_circle(Vec2::new(0.0, 10.0), 3.0));
        set.push(Part::Feet, Shape::new_box(Vec2::ZERO, Vec2::new(4.0, 1.0)));
        set.push(Part::Feet, Shape::new_box(Vec2::new(4.0, 0.0), Vec2::new(8.0, 1.0)));
        assert_eq!(set.get(&Part::Feet).map(<[Shape]>::len), Some(2));
        assert_eq!(set.iter().count(), 2);

        let collected: ShapeSet<&str> = [("x", vec![])].into_iter().collect();
        assert!(!collected.is_empty());
    }
}
