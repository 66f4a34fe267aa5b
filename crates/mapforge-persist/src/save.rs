use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use mapforge_world::WorldMap;

use crate::error::PersistError;
use crate::format::PackedVersion;

/// Serialize `map` into the current layout, stamped with `version`.
///
/// Layout: 2-byte dimensions, 4-byte little-endian version tag, then one
/// 3-byte record per tile in column-major order (outer loop X, inner Z).
pub fn write_world<W: Write>(
    map: &WorldMap,
    version: PackedVersion,
    writer: &mut W,
) -> Result<(), PersistError> {
    writer.write_all(&[map.size_x(), map.size_z()])?;
    writer.write_all(&version.bits().to_le_bytes())?;

    // WorldMap storage is column-major, the on-disk record order
    for (_, tile) in map.iter() {
        writer.write_all(&[tile.kind, tile.effect, tile.flags.bits()])?;
    }

    Ok(())
}

/// Save `map` at `path`, stamped with the running application's version.
/// Missing parent directories are created.
pub fn save_world(map: &WorldMap, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_world(map, PackedVersion::CURRENT, &mut writer)?;
    writer.flush()?;

    log::info!(
        "saved {}x{} world to {}",
        map.size_x(),
        map.size_z(),
        path.display()
    );
    Ok(())
}
