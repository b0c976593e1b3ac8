use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::http::response::{FileResult, Success};
use crate::http::server::AppState;
use crate::transform;
use crate::upload::receive_file;

pub async fn uppercase_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<Success<FileResult>>> {
    // A non-multipart request has no file part.
    let mut multipart = multipart.map_err(|e| AppError::validation_with("no file", e.body_text()))?;

    let upload = receive_file(&mut multipart, &state.upload_filter)
        .await?
        .ok_or_else(|| AppError::validation("no file"))?;

    let file_name = upload.original_name.clone();
    let text = upload.into_text()?;

    if text.trim().is_empty() {
        return Err(AppError::validation("empty content"));
    }

    let result = transform::uppercase(&text);
    let original_length = transform::char_count(&text);
    let converted_length = transform::char_count(&result);

    tracing::info!(
        file_name = %file_name,
        original_length,
        converted_length,
        "Uppercased file"
    );

    Ok(Json(Success::new(FileResult {
        result,
        file_name,
        original_length,
        converted_length,
    })))
}
