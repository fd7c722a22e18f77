use crate::render::Renderer;
use anyhow::Result;
use chrono::Local;
use dayline_core::Config;
use dayline_core::location::import_takeout_files;
use std::path::PathBuf;

/// Imports Takeout location history into the locations directory, converting
/// timestamps to the local timezone.
pub fn import_mode(files: &[PathBuf], config: &Config, renderer: &Renderer) -> Result<()> {
    tracing::info!(files = files.len(), dir = %config.locations_dir.display(), "importing location history");
    let stats = import_takeout_files(files, &config.locations_dir, &Local)?;
    renderer.print_import_stats(&stats);
    Ok(())
}
