use std::fmt;

/// Conventional extension for world map files.
pub const WORLD_FILE_EXTENSION: &str = "map";

/// Size of the current-layout header in bytes: width, height, version tag.
pub const HEADER_SIZE: usize = 6;

/// Size of the legacy-layout header in bytes: width and height only.
pub const LEGACY_HEADER_SIZE: usize = 2;

/// Size of one tile record in the current layout: type, effect, flags.
pub const TILE_RECORD_SIZE: usize = 3;

/// Size of one tile record in the legacy layout: type and effect only.
pub const LEGACY_TILE_RECORD_SIZE: usize = 2;

/// Number of tile records a header with these dimensions promises.
pub fn tile_count(width: u8, height: u8) -> u64 {
    width as u64 * height as u64
}

/// Total byte length of a current-layout file with these dimensions.
pub fn file_size(width: u8, height: u8) -> u64 {
    HEADER_SIZE as u64 + tile_count(width, height) * TILE_RECORD_SIZE as u64
}

/// Total byte length of a legacy-layout file with these dimensions.
pub fn legacy_file_size(width: u8, height: u8) -> u64 {
    LEGACY_HEADER_SIZE as u64 + tile_count(width, height) * LEGACY_TILE_RECORD_SIZE as u64
}

/// Application version packed into 32 bits, one byte per part.
///
/// Bit layout: `major << 24 | minor << 16 | build << 8 | revision`, fields
/// OR-combined so no part can carry into its neighbor. Written to the file
/// header as a little-endian u32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PackedVersion(u32);

impl PackedVersion {
    /// Version stamped on files produced by the legacy upgrader. Always 0,
    /// since the legacy layout records no version at all.
    pub const LEGACY: Self = Self(0);

    /// The running application's version, taken from the crate version at
    /// compile time. Cargo's patch number fills the build slot; the
    /// revision part has no Cargo equivalent and stays 0.
    pub const CURRENT: Self = Self::from_parts(
        parse_version_part(env!("CARGO_PKG_VERSION_MAJOR")),
        parse_version_part(env!("CARGO_PKG_VERSION_MINOR")),
        parse_version_part(env!("CARGO_PKG_VERSION_PATCH")),
        0,
    );

    /// Pack four version parts into one tag.
    pub const fn from_parts(major: u8, minor: u8, build: u8, revision: u8) -> Self {
        Self((major as u32) << 24 | (minor as u32) << 16 | (build as u32) << 8 | revision as u32)
    }

    /// Reinterpret a raw tag read from a file.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw 32-bit tag as written to disk.
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn major(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn minor(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn build(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn revision(self) -> u8 {
        self.0 as u8
    }

    /// Whether this version is strictly newer than `other`, by plain
    /// numeric comparison of the packed value.
    pub const fn is_newer_than(self, other: Self) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for PackedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major(),
            self.minor(),
            self.build(),
            self.revision()
        )
    }
}

/// Parse one decimal component of `CARGO_PKG_VERSION` in a const context.
const fn parse_version_part(part: &str) -> u8 {
    let bytes = part.as_bytes();
    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value as u8
}
