//! Level files: named levels made of drawing layers with collision bounds.
//!
//! ```json
//! {
//!   "version": "1",
//!   "levels": [{
//!     "name": "intro",
//!     "limits": { "min": {"x": 0, "y": 0}, "max": {"x": 640, "y": 360} },
//!     "layers": [{
//!       "name": "ground",
//!       "image": { "path": "bg.png" },
//!       "grid": {
//!         "assets": { "path": "tiles.png", "quantity": 4, "offset": {"x": 0, "y": 0}, "width": 32, "height": 32 },
//!         "tiles": [ { "asset": 0, "x": 0, "y": 0, "bounded": true } ]
//!       },
//!       "bounds": [ { "type": "box", "values": { "min": {"x": 0, "y": 0}, "max": {"x": 640, "y": 8} } } ]
//!     }]
//!   }]
//! }
//! ```
//!
//! Every field except `version` may be omitted.

use std::io::Read;

use glam::Vec2;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::api::{DebugDraw, SpriteTarget};
use crate::bounds::{parse_shape, Point, RectValues, ShapeEntry};
use crate::error::{check_version, Error, Result};
use crate::grid::{Grid, Tile, TileAssets};
use crate::shape::Shape;
use crate::types::{Rect, Rgba};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Level {
    pub name: String,
    pub limits: Rect,
    /// Back to front.
    pub layers: Vec<Layer>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
    pub name: String,
    pub image: Option<String>,
    pub grid: Option<Grid>,
    /// Declared bounds first, then the boxes of bounded tiles.
    pub bounds: Vec<Shape>,
}

impl Level {
    /// Parse every level declared in a level file.
    pub fn load_all<R: Read>(reader: R) -> Result<Vec<Level>> {
        Self::from_file(serde_json::from_reader(reader)?)
    }

    pub fn load_all_str(s: &str) -> Result<Vec<Level>> {
        Self::from_file(serde_json::from_str(s)?)
    }

    fn from_file(file: LevelsFile) -> Result<Vec<Level>> {
        check_version(&file.version)?;
        if file.levels.is_empty() {
            warn!("level file declares no levels");
            return Err(Error::EmptyDeclaration { what: "level" });
        }
        let levels = file
            .levels
            .into_iter()
            .map(Level::from_raw)
            .collect::<Result<Vec<_>>>()?;
        debug!(levels = levels.len(), "loaded levels");
        Ok(levels)
    }

    fn from_raw(raw: RawLevel) -> Result<Level> {
        let layers = raw
            .layers
            .into_iter()
            .map(Layer::from_raw)
            .collect::<Result<Vec<_>>>()?;
        Ok(Level {
            name: raw.name,
            limits: raw.limits.into(),
            layers,
        })
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Obstacles of every layer, back to front.
    pub fn bounds(&self) -> impl Iterator<Item = &Shape> {
        self.layers.iter().flat_map(|l| l.bounds.iter())
    }

    /// Draw layers in order. Layer images are centered on the level limits;
    /// tiles are drawn at their cell centers.
    pub fn draw(&self, target: &mut impl SpriteTarget) {
        for layer in &self.layers {
            if let Some(path) = &layer.image {
                target.draw_image(path, self.limits.center());
            }
            if let Some(grid) = &layer.grid {
                for tile in &grid.tiles {
                    target.draw_frame(
                        &grid.assets.path,
                        grid.asset_frame(tile.asset),
                        grid.to_pixels(tile.coords),
                        false,
                    );
                }
            }
        }
    }

    pub fn debug_draw(&self, surface: &mut impl DebugDraw, color: Rgba) {
        for shape in self.bounds() {
            shape.debug_draw(surface, color);
        }
    }
}

impl Layer {
    fn from_raw(raw: RawLayer) -> Result<Layer> {
        let mut bounds = raw
            .bounds
            .iter()
            .map(parse_shape)
            .collect::<Result<Vec<_>>>()?;

        let grid = if raw.grid.tiles.is_empty() {
            None
        } else {
            let a = raw.grid.assets;
            let assets = TileAssets {
                path: a.path.trim().to_owned(),
                quantity: a.quantity,
                offset: a.offset.into(),
                width: a.width,
                height: a.height,
            };
            let tiles = raw
                .grid
                .tiles
                .into_iter()
                .map(|t| {
                    if t.asset >= assets.quantity {
                        warn!(layer = %raw.name, asset = t.asset, "tile asset out of range");
                        return Err(Error::InvalidTileAsset {
                            asset: t.asset,
                            quantity: assets.quantity,
                        });
                    }
                    Ok(Tile {
                        asset: t.asset,
                        coords: Vec2::new(t.x, t.y),
                        bounded: t.bounded,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            let grid = Grid::with_assets(assets, tiles);
            bounds.extend(grid.bounded_boxes());
            Some(grid)
        };

        let path = raw.image.path.trim();
        Ok(Layer {
            image: (!path.is_empty()).then(|| path.to_owned()),
            name: raw.name,
            grid,
            bounds,
        })
    }
}

// File model ---------------------------------------------------------------

#[derive(Deserialize)]
struct LevelsFile {
    version: String,
    #[serde(default)]
    levels: Vec<RawLevel>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawLevel {
    name: String,
    limits: RectValues,
    layers: Vec<RawLayer>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawLayer {
    name: String,
    image: RawImage,
    grid: RawGrid,
    bounds: Vec<ShapeEntry>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawImage {
    path: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawGrid {
    assets: RawAssets,
    tiles: Vec<RawTile>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawAssets {
    path: String,
    quantity: usize,
    offset: Point,
    width: f32,
    height: f32,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawTile {
    asset: usize,
    x: f32,
    y: f32,
    bounded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::tests::Recorder;

    #[derive(Default)]
    struct Canvas {
        images: Vec<(String, Vec2)>,
        frames: Vec<(String, Rect, Vec2)>,
    }

    impl SpriteTarget for Canvas {
        fn draw_frame(&mut self, sheet: &str, frame: Rect, position: Vec2, _flip_x: bool) {
            self.frames.push((sheet.to_owned(), frame, position));
        }
        fn draw_image(&mut self, path: &str, position: Vec2) {
            self.images.push((path.to_owned(), position));
        }
    }

    const LEVELS: &str = r#"{
        "version": "1",
        "levels": [{
            "name": "intro",
            "limits": { "min": {"x": 0, "y": 0}, "max": {"x": 320, "y": 180} },
            "layers": [
                { "name": "background", "image": { "path": " bg.png " } },
                {
                    "name": "ground",
                    "grid": {
                        "assets": { "path": "tiles.png", "quantity": 2, "offset": {"x": 0, "y": 32}, "width": 16, "height": 16 },
                        "tiles": [
                            { "asset": 0, "x": 0, "y": 0, "bounded": true },
                            { "asset": 1, "x": 1, "y": 0 },
                            { "asset": 1, "x": 2, "y": 0, "bounded": true }
                        ]
                    },
                    "bounds": [
                        { "type": "box", "values": { "min": {"x": -8, "y": 0}, "max": {"x": 0, "y": 180} } }
                    ]
                }
            ]
        }]
    }"#;

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(Level::load_all(&b""[..]), Err(Error::Parse(_))));
    }

    #[test]
    fn test_only_version_one() {
        assert!(Level::load_all_str(r#"{"version": "1", "levels": [{}]}"#).is_ok());
        assert!(matches!(
            Level::load_all_str(r#"{"version": "2", "levels": [{}]}"#),
            Err(Error::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_at_least_one_level() {
        assert!(matches!(
            Level::load_all_str(r#"{"version": "1"}"#),
            Err(Error::EmptyDeclaration { what: "level" })
        ));
    }

    #[test]
    fn test_bad_bounds() {
        let hexagon = r#"{"version": "1", "levels": [{"layers": [{"bounds": [{"type": "hexagon"}]}]}]}"#;
        assert!(matches!(
            Level::load_all_str(hexagon),
            Err(Error::UnsupportedShapeType(t)) if t == "hexagon"
        ));
        let no_values = r#"{"version": "1", "levels": [{"layers": [{"bounds": [{"type": "box"}]}]}]}"#;
        assert!(matches!(
            Level::load_all_str(no_values),
            Err(Error::InvalidShapeParameters { .. })
        ));
    }

    #[test]
    fn test_tile_asset_out_of_range() {
        let json = r#"{"version": "1", "levels": [{"layers": [{"grid": {
            "assets": {"path": "t.png", "quantity": 1, "width": 8, "height": 8},
            "tiles": [{"asset": 1, "x": 0, "y": 0}]
        }}]}]}"#;
        assert!(matches!(
            Level::load_all_str(json),
            Err(Error::InvalidTileAsset { asset: 1, quantity: 1 })
        ));
    }

    #[test]
    fn test_layers_and_bounds() {
        let levels = Level::load_all_str(LEVELS).unwrap();
        assert_eq!(levels.len(), 1);
        let level = &levels[0];
        assert_eq!(level.name, "intro");
        assert_eq!(level.limits.max, Vec2::new(320.0, 180.0));

        let bg = level.layer("background").unwrap();
        assert_eq!(bg.image.as_deref(), Some("bg.png"));
        assert!(bg.grid.is_none());
        assert!(bg.bounds.is_empty());

        let ground = level.layer("ground").unwrap();
        assert!(ground.image.is_none());
        // Declared box, then the two bounded tiles
        assert_eq!(ground.bounds.len(), 3);
        assert_eq!(ground.bounds[0].bounding_rect().right(), 0.0);
        assert_eq!(
            ground.bounds[2],
            Shape::new_box(Vec2::new(32.0, 0.0), Vec2::new(48.0, 16.0))
        );
        assert_eq!(level.bounds().count(), 3);
        assert!(level.layer("missing").is_none());
    }

    #[test]
    fn test_draw_order() {
        let level = Level::load_all_str(LEVELS).unwrap().remove(0);
        let mut canvas = Canvas::default();
        level.draw(&mut canvas);
        assert_eq!(canvas.images, vec![("bg.png".to_owned(), Vec2::new(160.0, 90.0))]);
        assert_eq!(canvas.frames.len(), 3);
        let (sheet, frame, pos) = &canvas.frames[1];
        assert_eq!(sheet, "tiles.png");
        assert_eq!(frame.min, Vec2::new(16.0, 32.0));
        assert_eq!(*pos, Vec2::new(24.0, 8.0));

        let mut rec = Recorder::default();
        level.debug_draw(&mut rec, Rgba::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(rec.rects.len(), 3);
    }
}
