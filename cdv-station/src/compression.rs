/// Decompression utilities for gzip-compressed station dumps
use crate::error::{Result, StationError};
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;

/// First two bytes of every gzip member.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Returns true if the bytes start with the gzip magic number.
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Inflates a gzip-compressed buffer.
///
/// # Errors
///
/// Returns `StationError::Decompression` if the stream is corrupt or truncated
pub fn decompress_gzip(input: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(input);
    let mut output = Vec::new();
    decoder
        .read_to_end(&mut output)
        .map_err(|e| StationError::Decompression(format!("gzip decompression failed: {}", e)))?;
    Ok(output)
}

/// Reads a station dump from disk in one shot, inflating it when it is
/// gzip-compressed (by `.gz` extension or by magic number).
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    let raw = std::fs::read(path)?;
    let gz_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if gz_extension || is_gzip(&raw) {
        decompress_gzip(&raw)
    } else {
        Ok(raw)
    }
}
