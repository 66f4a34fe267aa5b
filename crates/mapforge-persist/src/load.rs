use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use mapforge_world::{Tile, TileFlags, WorldMap};

use crate::error::PersistError;
use crate::format::{self, PackedVersion, HEADER_SIZE};
use crate::reader::TrackedReader;

/// Parse a world in the current layout from `reader`.
///
/// `current` is the running application's packed version; a file stamped
/// with anything newer is rejected before any tile data is read. Bytes
/// after the final record are left unread.
pub fn read_world<R: Read>(reader: R, current: PackedVersion) -> Result<WorldMap, PersistError> {
    let mut reader = TrackedReader::new(reader);

    let header = HEADER_SIZE as u64;
    let width = reader.require_u8(header)?;
    let height = reader.require_u8(header)?;
    let found = PackedVersion::from_bits(reader.require_u32_le(header)?);
    if found.is_newer_than(current) {
        return Err(PersistError::IncompatibleVersion { found, current });
    }

    let expected = format::file_size(width, height);
    let count = format::tile_count(width, height) as usize;
    let mut tiles = Vec::with_capacity(count);
    for _ in 0..count {
        let kind = reader.require_u8(expected)?;
        let effect = reader.require_u8(expected)?;
        let flags = TileFlags::from_bits_retain(reader.require_u8(expected)?);
        tiles.push(Tile { kind, effect, flags });
    }

    // Records arrive column-major, which is also the storage order
    Ok(WorldMap::from_tiles(width, height, tiles))
}

/// Load a world from `path`, rejecting files newer than this application.
pub fn load_world(path: impl AsRef<Path>) -> Result<WorldMap, PersistError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let map = read_world(BufReader::new(file), PackedVersion::CURRENT)?;

    log::info!(
        "loaded {}x{} world from {}",
        map.size_x(),
        map.size_z(),
        path.display()
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::{save_world, write_world};

    fn patterned(width: u8, height: u8) -> WorldMap {
        let mut map = WorldMap::new(width, height);
        for i in 0..map.tile_count() {
            let x = (i / height as usize) as u8;
            let z = (i % height as usize) as u8;
            *map.get_mut(x, z).expect("in bounds") = Tile {
                kind: ((i * 7 + 13) % 256) as u8,
                effect: ((i * 3 + 1) % 256) as u8,
                flags: TileFlags::from_bits_retain((i % 4) as u8),
            };
        }
        map
    }

    #[test]
    fn test_write_read_roundtrip() {
        let mut map = patterned(5, 4);
        // One flags byte with no named bits set
        map.get_mut(3, 2).expect("in bounds").flags = TileFlags::from_bits_retain(0xC5);

        let mut bytes = Vec::new();
        write_world(&map, PackedVersion::CURRENT, &mut bytes).expect("write");

        let loaded = read_world(&bytes[..], PackedVersion::CURRENT).expect("read");
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_empty_world_roundtrip() {
        let map = WorldMap::new(0, 0);
        let mut bytes = Vec::new();
        write_world(&map, PackedVersion::CURRENT, &mut bytes).expect("write");
        assert_eq!(bytes.len(), HEADER_SIZE);

        let loaded = read_world(&bytes[..], PackedVersion::CURRENT).expect("read");
        assert_eq!(loaded.tile_count(), 0);
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_rejects_newer_version() {
        let map = WorldMap::new(2, 2);
        let mut bytes = Vec::new();
        write_world(&map, PackedVersion::from_parts(0, 2, 0, 1), &mut bytes).expect("write");

        let current = PackedVersion::from_parts(0, 2, 0, 0);
        let err = read_world(&bytes[..], current).expect_err("newer file must be refused");
        match err {
            PersistError::IncompatibleVersion { found, current: c } => {
                assert_eq!(found, PackedVersion::from_parts(0, 2, 0, 1));
                assert_eq!(c, current);
            }
            other => panic!("expected IncompatibleVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_equal_and_older_versions() {
        let map = patterned(2, 1);
        let current = PackedVersion::from_parts(0, 3, 0, 0);

        let mut equal = Vec::new();
        write_world(&map, current, &mut equal).expect("write");
        assert_eq!(read_world(&equal[..], current).expect("read"), map);

        let mut older = Vec::new();
        write_world(&map, PackedVersion::LEGACY, &mut older).expect("write");
        assert_eq!(read_world(&older[..], current).expect("read"), map);
    }

    #[test]
    fn test_version_gate_runs_before_tile_reads() {
        // Header only, no tile data: a version check after any tile read
        // would report truncation instead
        let mut bytes = vec![3, 3];
        bytes.extend_from_slice(&PackedVersion::from_parts(9, 0, 0, 0).bits().to_le_bytes());

        let err = read_world(&bytes[..], PackedVersion::from_parts(1, 0, 0, 0))
            .expect_err("newer file must be refused");
        assert!(matches!(err, PersistError::IncompatibleVersion { .. }));
    }

    #[test]
    fn test_truncated_tile_data() {
        let map = WorldMap::new(3, 3);
        let mut bytes = Vec::new();
        write_world(&map, PackedVersion::CURRENT, &mut bytes).expect("write");
        bytes.truncate(20);

        let err = read_world(&bytes[..], PackedVersion::CURRENT).expect_err("short file");
        assert!(matches!(
            err,
            PersistError::Truncated {
                expected: 33,
                actual: 20
            }
        ));
    }

    #[test]
    fn test_truncated_header() {
        let err = read_world(&[4u8, 4, 0][..], PackedVersion::CURRENT).expect_err("short header");
        assert!(matches!(
            err,
            PersistError::Truncated {
                expected: 6,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let map = patterned(2, 2);
        let mut bytes = Vec::new();
        write_world(&map, PackedVersion::CURRENT, &mut bytes).expect("write");
        bytes.extend_from_slice(&[0xAA; 16]);

        let loaded = read_world(&bytes[..], PackedVersion::CURRENT).expect("read");
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_load_world_reads_saved_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir
            .path()
            .join(format!("world.{}", format::WORLD_FILE_EXTENSION));
        let map = patterned(4, 3);

        save_world(&map, &path).expect("save");
        let loaded = load_world(&path).expect("load");
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_load_world_missing_file_is_io() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_world(dir.path().join("absent.map")).expect_err("missing file");
        assert!(matches!(err, PersistError::Io(_)));
    }
}
