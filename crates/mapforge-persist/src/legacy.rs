use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::PersistError;
use crate::format::{self, PackedVersion, LEGACY_HEADER_SIZE};
use crate::reader::TrackedReader;

/// Dimensions of a world processed by the legacy upgrader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeSummary {
    pub width: u8,
    pub height: u8,
}

impl UpgradeSummary {
    /// Number of tile records carried over.
    pub fn tile_count(&self) -> u64 {
        format::tile_count(self.width, self.height)
    }
}

/// Transcode a legacy stream into the current layout.
///
/// Reads 2-byte records from `src` and writes 3-byte records to `dst`,
/// stamping version 0 on the header and a flags byte of 0 on every tile.
/// No grid is materialized; one record is in flight at a time.
pub fn upgrade_legacy<R: Read, W: Write>(
    src: R,
    dst: &mut W,
) -> Result<UpgradeSummary, PersistError> {
    let mut src = TrackedReader::new(src);

    let width = src.require_u8(LEGACY_HEADER_SIZE as u64)?;
    let height = src.require_u8(LEGACY_HEADER_SIZE as u64)?;
    dst.write_all(&[width, height])?;
    dst.write_all(&PackedVersion::LEGACY.bits().to_le_bytes())?;

    let expected = format::legacy_file_size(width, height);
    for _ in 0..format::tile_count(width, height) {
        let kind = src.require_u8(expected)?;
        let effect = src.require_u8(expected)?;
        // Legacy tiles have no flags field; synthesize no-rotation
        dst.write_all(&[kind, effect, 0])?;
    }

    Ok(UpgradeSummary { width, height })
}

/// Upgrade the legacy file at `src` into a current-layout file at `dst`.
///
/// Creates missing parent directories for `dst`. Refuses a destination
/// equal to the source, which would truncate the file mid-read.
pub fn convert_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
) -> Result<UpgradeSummary, PersistError> {
    let src = src.as_ref();
    let dst = dst.as_ref();
    if src == dst {
        return Err(PersistError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same path",
        )));
    }

    let source = File::open(src)?;
    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(dst)?);
    let summary = upgrade_legacy(BufReader::new(source), &mut writer)?;
    writer.flush()?;

    log::info!(
        "upgraded {}x{} world ({} tiles): {} -> {}",
        summary.width,
        summary.height,
        summary.tile_count(),
        src.display(),
        dst.display()
    );
    Ok(summary)
}
