use std::path::PathBuf;

use axum::{
    extract::{Extension, Multipart},
    Json,
};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::error::{ApiError, ErrorType};

use super::model::ImportCsvResult;
use super::service::import_books_csv;

const UPLOAD_DIR: &str = "uploads";

pub async fn post_import_csv_route(
    Extension(pool): Extension<DbPool>,
    mut multipart: Multipart,
) -> Result<Json<ImportCsvResult>, ApiError> {
    let mut preferred_file_bytes: Option<Vec<u8>> = None;
    let mut fallback_file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|err| {
        ApiError::new(400, ErrorType::RequestError, format!("Multipart error: {}", err))
    })? {
        let field_name = field.name().map(|name| name.to_string());
        let is_file_field = field.file_name().is_some();
        if !is_file_field {
            continue;
        }

        let bytes = field.bytes().await.map_err(|err| {
            ApiError::new(
                400,
                ErrorType::RequestError,
                format!("Failed to read multipart field: {}", err),
            )
        })?;

        if field_name.as_deref() == Some("file") {
            preferred_file_bytes = Some(bytes.to_vec());
            break;
        }
        if fallback_file_bytes.is_none() {
            fallback_file_bytes = Some(bytes.to_vec());
        }
    }

    let file_bytes = preferred_file_bytes
        .or(fallback_file_bytes)
        .ok_or_else(|| ApiError::bad_request("CSV file is required"))?;

    // The upload lives on disk only for the duration of this request.
    let file_path = spool_upload(&file_bytes).await?;

    let raw_text = match tokio::fs::read(&file_path).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
        Err(err) => {
            let _ = tokio::fs::remove_file(&file_path).await;
            return Err(ApiError::new(
                500,
                ErrorType::InternalError,
                format!("Failed to read upload: {}", err),
            ));
        }
    };

    let result = import_books_csv(&raw_text, &pool);
    let _ = tokio::fs::remove_file(&file_path).await;

    Ok(Json(result?))
}

async fn spool_upload(file_bytes: &[u8]) -> Result<PathBuf, ApiError> {
    tokio::fs::create_dir_all(UPLOAD_DIR).await.map_err(|err| {
        ApiError::new(
            500,
            ErrorType::InternalError,
            format!("Failed to create upload dir: {}", err),
        )
    })?;

    let file_path = PathBuf::from(UPLOAD_DIR).join(format!("{}.csv", Uuid::new_v4()));
    tokio::fs::write(&file_path, file_bytes).await.map_err(|err| {
        ApiError::new(
            500,
            ErrorType::InternalError,
            format!("Failed to store upload: {}", err),
        )
    })?;
    Ok(file_path)
}
