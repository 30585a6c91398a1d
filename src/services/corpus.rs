use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File extensions treated as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Whether `path` carries one of the [`IMAGE_EXTENSIONS`].
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Recursively collect every image file under `root`, sorted by path.
///
/// Entries that cannot be read (permissions, broken links) are logged and
/// skipped. A missing `root` yields an empty list.
pub fn scan_images(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "Skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_image_path(path))
        .collect();

    paths.sort();
    tracing::debug!(root = %root.display(), count = paths.len(), "Scanned image directory");
    paths
}
