use std::path::{Path, PathBuf};

use tower_http::services::{ServeDir, ServeFile};

pub const SHELL_FILE: &str = "index.html";

/// Picks the directory the built site is served from: `<dist>/public` when
/// present, otherwise `<dist>` itself. `None` if neither exists.
pub fn resolve_dist_root(dist_dir: &Path) -> Option<PathBuf> {
    let public_dir = dist_dir.join("public");

    tracing::info!("Checking directory structure:");
    tracing::info!("Dist path: {}", dist_dir.display());
    tracing::info!("Public path: {}", public_dir.display());

    if !dist_dir.is_dir() {
        tracing::warn!("Dist directory does not exist! Static files will not be served");
        return None;
    }

    tracing::info!("Dist directory exists");
    if public_dir.is_dir() {
        tracing::info!("Public directory exists");
        Some(public_dir)
    } else {
        tracing::info!("Public directory does not exist, using dist directory");
        Some(dist_dir.to_path_buf())
    }
}

/// Serves files under `root`; any path without a matching file gets the
/// single-page shell so client-side routes survive a reload.
pub fn serve_spa(root: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(root).fallback(ServeFile::new(root.join(SHELL_FILE)))
}
