//! Thumbnail image storage.
//!
//! Services depend on the `ImageStore` trait; `LocalImageStore` writes files below a root
//! directory on the local filesystem. References returned by the store are the public URIs
//! `/images/<directory>/<name>` under which the router serves the root, and are what gets
//! persisted on articles and projects.

use rand::Rng;
use std::{
    future::Future,
    io::ErrorKind,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use crate::server::{
    error::AppError,
    model::image::{ImageFileType, ThumbnailFile},
};

/// Path prefix under which stored images are served.
pub const IMAGE_URI_PREFIX: &str = "/images";

const FILE_STEM_LENGTH: usize = 32;

/// Storage for uploaded thumbnail images.
pub trait ImageStore: Send + Sync {
    /// Stores `file` and returns its reference.
    fn save_thumbnail(
        &self,
        kind: ImageFileType,
        file: &ThumbnailFile,
    ) -> impl Future<Output = Result<String, AppError>> + Send;

    /// Stores `file` as the replacement of `old_reference`.
    ///
    /// The new reference is handed to `persist`. The old image is removed only once
    /// `persist` succeeds; when it fails the new image is removed instead and the error
    /// is returned. `old_reference` is `""` when the entity had no thumbnail.
    fn update_thumbnail<T, F, Fut>(
        &self,
        kind: ImageFileType,
        file: &ThumbnailFile,
        old_reference: &str,
        persist: F,
    ) -> impl Future<Output = Result<T, AppError>> + Send
    where
        T: Send,
        F: FnOnce(String) -> Fut + Send,
        Fut: Future<Output = Result<T, AppError>> + Send;
}

/// Image store backed by a directory on the local filesystem.
#[derive(Clone, Debug)]
pub struct LocalImageStore {
    root: Arc<PathBuf>,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Root directory below which all images are written.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a reference produced by this store back to a filesystem path.
    ///
    /// Returns `None` for empty references, references outside `IMAGE_URI_PREFIX` and
    /// references that would escape the root.
    pub fn resolve(&self, reference: &str) -> Option<PathBuf> {
        let relative = Path::new(reference.strip_prefix(IMAGE_URI_PREFIX)?.strip_prefix('/')?);
        let contained = relative.components().all(|c| matches!(c, Component::Normal(_)));
        if relative.as_os_str().is_empty() || !contained {
            return None;
        }

        Some(self.root.join(relative))
    }

    /// Removes a previously stored image. A file that is already gone is not an error.
    async fn remove(&self, kind: ImageFileType, reference: &str) -> Result<(), AppError> {
        let in_directory = reference
            .strip_prefix(IMAGE_URI_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(|rest| rest.strip_prefix(kind.directory()))
            .is_some_and(|rest| rest.starts_with('/'));
        let Some(path) = self.resolve(reference).filter(|_| in_directory) else {
            tracing::debug!("Not removing image outside the store: {:?}", reference);
            return Ok(());
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Image {} was already removed", path.display());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Removes an image whose reference is no longer persisted anywhere.
    ///
    /// The owning entity is already consistent at this point, so a failure only leaves
    /// an orphaned file behind and is logged instead of returned.
    async fn discard(&self, kind: ImageFileType, reference: &str) {
        if let Err(e) = self.remove(kind, reference).await {
            tracing::warn!("Failed to remove image {}: {}", reference, e);
        }
    }
}

impl ImageStore for LocalImageStore {
    async fn save_thumbnail(
        &self,
        kind: ImageFileType,
        file: &ThumbnailFile,
    ) -> Result<String, AppError> {
        let extension = file.extension().ok_or_else(|| {
            AppError::BadRequest(format!("File {} has no extension", file.file_name))
        })?;

        let directory = self.root.join(kind.directory());
        tokio::fs::create_dir_all(&directory).await?;

        let name = format!("{}.{}", generate_file_stem(), extension);
        tokio::fs::write(directory.join(&name), &file.bytes).await?;

        let reference = format!("{}/{}/{}", IMAGE_URI_PREFIX, kind.directory(), name);
        tracing::debug!("Stored {} bytes as {}", file.bytes.len(), reference);

        Ok(reference)
    }

    async fn update_thumbnail<T, F, Fut>(
        &self,
        kind: ImageFileType,
        file: &ThumbnailFile,
        old_reference: &str,
        persist: F,
    ) -> Result<T, AppError>
    where
        T: Send,
        F: FnOnce(String) -> Fut + Send,
        Fut: Future<Output = Result<T, AppError>> + Send,
    {
        let reference = self.save_thumbnail(kind, file).await?;

        match persist(reference.clone()).await {
            Ok(value) => {
                if !old_reference.is_empty() {
                    self.discard(kind, old_reference).await;
                }
                Ok(value)
            }
            Err(e) => {
                self.discard(kind, &reference).await;
                Err(e)
            }
        }
    }
}

/// Generates a random alphanumeric file stem.
fn generate_file_stem() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..FILE_STEM_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
