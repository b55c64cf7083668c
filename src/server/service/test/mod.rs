use std::{future::Future, sync::Mutex};

use crate::server::{
    error::AppError,
    model::{
        image::{ImageFileType, ThumbnailFile},
        user::User,
    },
    service::image::{ImageStore, IMAGE_URI_PREFIX},
};

mod article;

/// A call made against `RecordingImageStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageCall {
    Save {
        kind: ImageFileType,
        file_name: String,
    },
    Update {
        kind: ImageFileType,
        file_name: String,
        old_reference: String,
    },
}

/// Image store that records calls and returns `/images/<directory>/<file name>` references.
#[derive(Default)]
pub struct RecordingImageStore {
    calls: Mutex<Vec<ImageCall>>,
}

impl RecordingImageStore {
    pub fn calls(&self) -> Vec<ImageCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ImageStore for RecordingImageStore {
    async fn save_thumbnail(
        &self,
        kind: ImageFileType,
        file: &ThumbnailFile,
    ) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(ImageCall::Save {
            kind,
            file_name: file.file_name.clone(),
        });

        Ok(reference(kind, file))
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
        self.calls.lock().unwrap().push(ImageCall::Update {
            kind,
            file_name: file.file_name.clone(),
            old_reference: old_reference.to_string(),
        });

        persist(reference(kind, file)).await
    }
}

fn reference(kind: ImageFileType, file: &ThumbnailFile) -> String {
    format!("{}/{}/{}", IMAGE_URI_PREFIX, kind.directory(), file.file_name)
}

pub fn thumbnail(file_name: &str) -> ThumbnailFile {
    ThumbnailFile {
        file_name: file_name.to_string(),
        content_type: Some("image/png".to_string()),
        bytes: b"png".to_vec(),
    }
}

pub fn as_user(entity: entity::user::Model) -> User {
    User::from_entity(entity)
}
