//! Thumbnail image uploads and the storage categories they belong to.

use crate::server::model::validation::FieldViolation;

const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Storage category of an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFileType {
    ArticleThumbnailImage,
    ProjectThumbnailImage,
}

impl ImageFileType {
    /// Directory, relative to the image store root, holding images of this type.
    pub fn directory(self) -> &'static str {
        match self {
            Self::ArticleThumbnailImage => "article/thumbnail",
            Self::ProjectThumbnailImage => "project/thumbnail",
        }
    }
}

/// An uploaded thumbnail file taken from a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailFile {
    /// Original file name as sent by the client.
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ThumbnailFile {
    /// Lowercased extension of the original file name, if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }

    /// Checks the upload is a non-empty file with an image extension.
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        let allowed = self
            .extension()
            .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
        if !allowed {
            violations.push(FieldViolation {
                field: "thumbnailImage",
                message: "Thumbnail image must be a png, jpg, jpeg, gif or webp file.",
            });
        }

        if self.bytes.is_empty() {
            violations.push(FieldViolation {
                field: "thumbnailImage",
                message: "Thumbnail image must not be empty.",
            });
        }

        violations
    }
}
