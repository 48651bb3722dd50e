//! File I/O utilities for ghost payloads.
//!
//! Payload files may be plain JSON or Zstandard-compressed; the `.zst`
//! extension selects compression on both the read and the write side.

/// Upper bound on a decompressed payload.
const MAX_DECOMPRESSED_BYTES: usize = 8 * 1024 * 1024;
const ZSTD_LEVEL: i32 = 3;

/// Read text file with automatic .zst decompression detection.
///
/// UTF-8 BOM is stripped if present.
///
/// # Example
///
/// ```rust,no_run
/// # use racing_suits_cli::io_utils::read_text_auto;
/// let plain = read_text_auto("ghost.json").unwrap();
/// let compressed = read_text_auto("ghost.json.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::bulk::decompress(&comp, MAX_DECOMPRESSED_BYTES).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Write text, compressing with zstd when `path` ends in `.zst`. Missing
/// parent directories are created.
pub fn write_text_auto(path: &str, content: &str) -> Result<(), String> {
    let target = std::path::Path::new(path);
    ensure_parent_dir(target)?;
    if path.ends_with(".zst") {
        let comp = zstd::bulk::compress(content.as_bytes(), ZSTD_LEVEL).map_err(|e| e.to_string())?;
        std::fs::write(target, comp).map_err(|e| e.to_string())
    } else {
        std::fs::write(target, content).map_err(|e| e.to_string())
    }
}

/// Ensure parent directory exists for given path, creating if needed.
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
