pub mod map;
pub mod tile;

pub use map::WorldMap;
pub use tile::{Tile, TileCoord, TileFlags};
