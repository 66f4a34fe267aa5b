use bitflags::bitflags;

bitflags! {
    /// Rotation applied to a tile, stored as one byte in the current file
    /// layout. Bits with no name here are carried through a load/save
    /// cycle untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TileFlags: u8 {
        const NONE = 0;
        const ROTATED_90 = 1;
        const ROTATED_180 = 2;
        const ROTATED_270 = 3;
    }
}

impl Default for TileFlags {
    fn default() -> Self {
        TileFlags::NONE
    }
}

/// One cell of the world grid.
///
/// Plain value data. A tile has no identity beyond its grid position, and
/// the position itself is implicit in storage order rather than stored on
/// the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    /// Material/model identifier ("type" in the file layout).
    pub kind: u8,
    /// Overlay effect identifier. 0 means no effect.
    pub effect: u8,
    /// Rotation flags. The legacy layout has no flags field, which implies
    /// no rotation.
    pub flags: TileFlags,
}

/// Grid position of a tile. X runs across columns, Z across rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub x: u8,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u8, z: u8) -> Self {
        Self { x, z }
    }
}
