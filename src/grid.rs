use glam::Vec2;

use crate::shape::Shape;
use crate::types::Rect;

/// A horizontal strip of equally sized tiles inside one sprite sheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileAssets {
    pub path: String,
    pub quantity: usize,
    /// Top-left corner of the strip within the sheet.
    pub offset: Vec2,
    pub width: f32,
    pub height: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tile {
    /// Index into the asset strip.
    pub asset: usize,
    /// Cell coordinates, not pixels.
    pub coords: Vec2,
    /// Whether the tile's cell takes part in collisions.
    pub bounded: bool,
}

/// Fixed-size cell layout for a level layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    tile_size: Vec2,
    pub assets: TileAssets,
    pub tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(tile_size: Vec2) -> Self {
        Self {
            tile_size,
            assets: TileAssets::default(),
            tiles: Vec::new(),
        }
    }

    /// Grid whose cells match the asset tiles.
    pub fn with_assets(assets: TileAssets, tiles: Vec<Tile>) -> Self {
        Self {
            tile_size: Vec2::new(assets.width, assets.height),
            assets,
            tiles,
        }
    }

    pub fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    /// Pixel-space center of the cell at `coords`.
    pub fn to_pixels(&self, coords: Vec2) -> Vec2 {
        coords * self.tile_size + self.tile_size / 2.0
    }

    /// Box covering the whole cell at `coords`.
    ///
    /// Anchored at the cell corner, so its center equals `to_pixels(coords)`.
    pub fn tile_bounding_box(&self, coords: Vec2) -> Shape {
        let min = coords * self.tile_size;
        Shape::Box(Rect::new(min, min + self.tile_size))
    }

    /// Region of the sprite sheet holding asset `index`.
    pub fn asset_frame(&self, index: usize) -> Rect {
        let a = &self.assets;
        let min = Vec2::new(a.width * index as f32, a.offset.y);
        Rect::new(min, min + Vec2::new(a.width, a.height))
    }

    /// Cell boxes of the bounded tiles, in tile order.
    pub fn bounded_boxes(&self) -> impl Iterator<Item = Shape> + '_ {
        self.tiles
            .iter()
            .filter(|t| t.bounded)
            .map(|t| self.tile_bounding_box(t.coords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels() {
        let g = Grid::new(Vec2::splat(32.0));
        assert_eq!(g.to_pixels(Vec2::ZERO), Vec2::new(16.0, 16.0));
        assert_eq!(g.to_pixels(Vec2::new(2.0, 1.0)), Vec2::new(80.0, 48.0));
    }

    #[test]
    fn test_tile_box_centered_on_pixels() {
        let g = Grid::new(Vec2::new(16.0, 8.0));
        let c = Vec2::new(3.0, 5.0);
        let b = g.tile_bounding_box(c);
        assert_eq!(b.bounding_rect().min, Vec2::new(48.0, 40.0));
        assert_eq!(b.bounding_rect().max, Vec2::new(64.0, 48.0));
        assert_eq!(b.center(), g.to_pixels(c));
    }

    #[test]
    fn test_asset_frame_and_bounded_tiles() {
        let assets = TileAssets {
            path: "tiles.png".into(),
            quantity: 4,
            offset: Vec2::new(0.0, 64.0),
            width: 32.0,
            height: 32.0,
        };
        let tiles = vec![
            Tile { asset: 0, coords: Vec2::ZERO, bounded: true },
            Tile { asset: 2, coords: Vec2::new(1.0, 0.0), bounded: false },
            Tile { asset: 3, coords: Vec2::new(2.0, 0.0), bounded: true },
        ];
        let g = Grid::with_assets(assets, tiles);
        let f = g.asset_frame(2);
        assert_eq!(f.min, Vec2::new(64.0, 64.0));
        assert_eq!(f.max, Vec2::new(96.0, 96.0));

        let boxes: Vec<Shape> = g.bounded_boxes().collect();
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[1].bounding_rect().left(), 64.0);
    }
}
