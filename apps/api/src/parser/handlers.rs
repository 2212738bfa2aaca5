use std::io::Write;

use anyhow::Context;
use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::parser::process_resume;
use crate::state::AppState;

/// POST /parse-resume/
///
/// Accepts one multipart field named `file`. The extension check runs before
/// the upload is read, so rejected filenames never touch the filesystem. The
/// temp file is owned by this scope and deleted on every exit path.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let field = loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| {
                warn!("malformed multipart form data: {e}");
                AppError::InvalidInput("Malformed multipart form data.".into())
            })?
            .ok_or_else(|| {
                AppError::InvalidInput("Expected a multipart field named 'file'.".into())
            })?;
        if field.name() == Some("file") {
            break field;
        }
    };

    let filename = field.file_name().unwrap_or_default().to_string();
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::InvalidInput("Only PDF files are supported.".into()));
    }

    let data = field.bytes().await.map_err(|e| {
        warn!("failed to read upload: {e}");
        AppError::InvalidInput("Failed to read the uploaded file.".into())
    })?;

    info!("parsing resume upload: {filename} ({} bytes)", data.len());

    let mut tmp = NamedTempFile::with_suffix(".pdf").context("failed to create temp file")?;
    tmp.write_all(&data).context("failed to persist upload")?;

    let result = process_resume(tmp.path(), state.model.as_ref()).await?;

    Ok(Json(result))
}
