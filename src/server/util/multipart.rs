//! Reading create and update requests sent as `multipart/form-data`.
//!
//! Requests carry a `request` part holding the JSON body and an optional `thumbnailImage`
//! file part. Unknown parts are ignored.

use axum::extract::Multipart;
use serde::de::DeserializeOwned;

use crate::server::{error::AppError, model::image::ThumbnailFile};

pub const REQUEST_PART: &str = "request";
pub const THUMBNAIL_PART: &str = "thumbnailImage";

/// Splits a multipart request into its JSON body and optional thumbnail.
///
/// A file part without a file name (the browser's "no file chosen") counts as no
/// thumbnail.
///
/// # Returns
/// - `Ok((T, Option<ThumbnailFile>))` - Parsed body and the uploaded file, if any
/// - `Err(AppError::BadRequest)` - Malformed multipart stream, missing or invalid
///   `request` part
pub async fn parse_request_with_thumbnail<T: DeserializeOwned>(
    mut multipart: Multipart,
) -> Result<(T, Option<ThumbnailFile>), AppError> {
    let mut request = None;
    let mut thumbnail = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart request: {}", e)))?
    {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some(REQUEST_PART) => {
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read request part: {}", e))
                })?;
                let parsed = serde_json::from_slice::<T>(&bytes)
                    .map_err(|e| AppError::BadRequest(format!("Invalid request part: {}", e)))?;
                request = Some(parsed);
            }
            Some(THUMBNAIL_PART) => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read thumbnail image: {}", e))
                })?;

                thumbnail = file_name
                    .filter(|name| !name.is_empty())
                    .map(|file_name| ThumbnailFile {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
            }
            _ => {}
        }
    }

    let request = request
        .ok_or_else(|| AppError::BadRequest(format!("Missing `{}` part", REQUEST_PART)))?;

    Ok((request, thumbnail))
}
