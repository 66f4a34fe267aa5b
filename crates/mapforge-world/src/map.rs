use crate::tile::{Tile, TileCoord};

/// Dense rectangular grid of tiles.
///
/// Storage is column-major (all of column x=0 first), the same order the
/// on-disk formats use, so serialization walks the vector linearly.
/// Dimensions are single bytes because that is how the file header stores
/// them; each axis is therefore capped at 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    size_x: u8,
    size_z: u8,
    tiles: Vec<Tile>,
}

impl WorldMap {
    /// Create a world of the given size with every tile defaulted.
    pub fn new(size_x: u8, size_z: u8) -> Self {
        let tiles = vec![Tile::default(); size_x as usize * size_z as usize];
        Self {
            size_x,
            size_z,
            tiles,
        }
    }

    /// Build a world from an existing tile vector in column-major order.
    ///
    /// Panics if the vector length does not match the dimensions.
    pub fn from_tiles(size_x: u8, size_z: u8, tiles: Vec<Tile>) -> Self {
        assert_eq!(
            tiles.len(),
            size_x as usize * size_z as usize,
            "tile vector length must match grid dimensions"
        );
        Self {
            size_x,
            size_z,
            tiles,
        }
    }

    pub fn size_x(&self) -> u8 {
        self.size_x
    }

    pub fn size_z(&self) -> u8 {
        self.size_z
    }

    /// Total number of tiles in the grid.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Whether (x, z) falls inside the grid.
    pub fn contains(&self, x: u8, z: u8) -> bool {
        x < self.size_x && z < self.size_z
    }

    fn index(&self, x: u8, z: u8) -> usize {
        x as usize * self.size_z as usize + z as usize
    }

    /// Get the tile at (x, z).
    pub fn get(&self, x: u8, z: u8) -> Option<&Tile> {
        if self.contains(x, z) {
            Some(&self.tiles[self.index(x, z)])
        } else {
            None
        }
    }

    /// Get the tile at (x, z) for editing.
    pub fn get_mut(&mut self, x: u8, z: u8) -> Option<&mut Tile> {
        if self.contains(x, z) {
            let idx = self.index(x, z);
            Some(&mut self.tiles[idx])
        } else {
            None
        }
    }

    /// Resize the grid in place.
    ///
    /// Tiles whose position is valid under both the old and new dimensions
    /// keep their record; every other position gets a default tile. Either
    /// dimension may shrink, grow, or be zero.
    pub fn resize(&mut self, new_x: u8, new_z: u8) {
        let mut tiles = vec![Tile::default(); new_x as usize * new_z as usize];
        for x in 0..new_x.min(self.size_x) {
            for z in 0..new_z.min(self.size_z) {
                tiles[x as usize * new_z as usize + z as usize] = self.tiles[self.index(x, z)];
            }
        }
        self.size_x = new_x;
        self.size_z = new_z;
        self.tiles = tiles;
    }

    /// Iterate tiles with their coordinates, column-major (x outer, z inner).
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, &Tile)> {
        let size_z = self.size_z as usize;
        self.tiles.iter().enumerate().map(move |(i, tile)| {
            let coord = TileCoord::new((i / size_z) as u8, (i % size_z) as u8);
            (coord, tile)
        })
    }
}
