//! quarter: collision resolution, kinematics, sprite animation and tile levels
//! for small 2D arcade games (rendering stays with the host library)

pub mod types;
pub mod api;
pub mod error;
pub mod narrowphase;
pub mod shape;
pub mod resolve;
pub mod kinematics;
pub mod bounds;
pub mod grid;
pub mod animation;
pub mod level;
pub mod character;
pub mod fx;
pub mod scene;

pub use glam;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::error::{Error, Result};
pub use crate::shape::Shape;
pub use crate::resolve::Solution;
pub use crate::kinematics::{Kinematics, KinematicsParams};
pub use crate::bounds::ShapeSet;
pub use crate::grid::{Grid, Tile, TileAssets};
pub use crate::animation::{Animation, Cycle, Sequence};
pub use crate::level::{Layer, Level};
pub use crate::character::Character;
pub use crate::fx::{Blinking, Fade};
pub use crate::scene::{Director, Scene};
