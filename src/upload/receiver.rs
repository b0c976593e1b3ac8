//! Multipart intake for the `file` part.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;

use crate::error::{AppError, AppResult};
use crate::upload::filter::UploadFilter;

/// Name of the multipart part that carries the upload.
pub const FILE_FIELD: &str = "file";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A file held in memory for the duration of one request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: String,
    pub mime_type: Option<String>,
    pub content: Vec<u8>,
}

impl UploadedFile {
    /// Decode the content as UTF-8, dropping a leading byte-order mark.
    pub fn into_text(self) -> AppResult<String> {
        let bytes = match self.content.strip_prefix(UTF8_BOM) {
            Some(rest) => rest.to_vec(),
            None => self.content,
        };
        String::from_utf8(bytes)
            .map_err(|_| AppError::validation_with("invalid encoding", "file content is not valid UTF-8 text"))
    }
}

/// Walk the multipart stream and buffer the `file` part.
///
/// The filter sees the part headers before any body bytes are read, and the
/// size cap is checked per chunk so an oversized upload is dropped early.
/// Parts with other names are skipped. Returns `None` when no `file` part was
/// sent.
pub async fn receive_file(multipart: &mut Multipart, filter: &UploadFilter) -> AppResult<Option<UploadedFile>> {
    let mut upload: Option<UploadedFile> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, filter))?
    {
        if field.name() != Some(FILE_FIELD) {
            tracing::debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        if upload.is_some() {
            return Err(AppError::validation_with("unexpected field", FILE_FIELD));
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let mime_type = field.content_type().map(str::to_string);

        filter.admit(&original_name, mime_type.as_deref())?;

        tracing::debug!(
            file_name = %original_name,
            mime_type = ?mime_type,
            "Receiving upload"
        );

        let mut content = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(|e| multipart_error(e, filter))? {
            if let Err(e) = filter.check_size(content.len() + chunk.len()) {
                tracing::warn!(
                    file_name = %original_name,
                    received = content.len() + chunk.len(),
                    max_file_size = filter.max_file_size(),
                    "Upload size limit exceeded, aborting"
                );
                return Err(e);
            }
            content.extend_from_slice(&chunk);
        }

        upload = Some(UploadedFile {
            original_name,
            mime_type,
            content,
        });
    }

    Ok(upload)
}

fn multipart_error(err: MultipartError, filter: &UploadFilter) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge {
            limit: filter.max_file_size(),
        }
    } else {
        AppError::validation_with("invalid multipart", err.body_text())
    }
}
