//! Stored image files.
//!
//! Image paths are kept relative to the upload directory. Before a file is removed both
//! the directory and the image path are canonicalized, and the image must still lie
//! below the directory afterwards. This covers absolute paths, `..` segments and
//! symlinks pointing elsewhere.

use std::path::{Path, PathBuf};

use crate::server::error::image::ImageError;

/// Removes image files from the upload directory.
///
/// Cheap to clone; only holds the directory path.
#[derive(Clone, Debug)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Creates an image store rooted at the upload directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Removes an image file if it lies inside the upload directory.
    ///
    /// # Arguments
    /// - `image` - Image path relative to the upload directory
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Resolved path of the removed file
    /// - `Err(ImageError::OutsideUploadDir)` - Path resolves outside the directory; nothing removed
    /// - `Err(ImageError::Io)` - File missing or could not be removed
    pub async fn remove(&self, image: &str) -> Result<PathBuf, ImageError> {
        let root = tokio::fs::canonicalize(&self.root).await?;
        let path = tokio::fs::canonicalize(self.root.join(image)).await?;

        if !is_within(&root, &path) {
            return Err(ImageError::OutsideUploadDir(image.to_string()));
        }

        tokio::fs::remove_file(&path).await?;

        Ok(path)
    }

    /// Removes an image file on a detached task, logging instead of failing.
    pub fn remove_in_background(&self, image: String) {
        let store = self.clone();
        tokio::spawn(async move {
            match store.remove(&image).await {
                Ok(path) => tracing::debug!("Removed image {}", path.display()),
                Err(e) => tracing::warn!("Failed to remove image {}: {}", image, e),
            }
        });
    }
}

fn is_within(root: &Path, path: &Path) -> bool {
    path != root && path.starts_with(root)
}
