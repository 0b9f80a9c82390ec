//! Transcript input and deck output on disk.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use log::info;
use tempfile::NamedTempFile;

use crate::error::Result;

/// Read a whole text file. The contents are returned verbatim.
pub async fn read_text(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path).await?;
    info!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Write `contents` to `path` atomically.
///
/// The data goes to a temporary file in the destination directory first and is renamed over
/// the target once fully written, so an interrupted run never leaves a half-written deck.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut file = NamedTempFile::new_in(&parent)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path)?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
