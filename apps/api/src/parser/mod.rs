pub mod extract;
pub mod handlers;
pub mod prompts;
pub mod recover;
pub mod schema;

#[cfg(test)]
pub mod testutil;

use std::path::Path;

use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::GenerativeModel;

/// Runs the full pipeline on a PDF at `path`:
/// text extraction, model call, JSON recovery.
pub async fn process_resume(
    path: &Path,
    model: &dyn GenerativeModel,
) -> Result<Value, AppError> {
    let text = extract::extract_text(path).map_err(|e| AppError::Extraction(e.to_string()))?;
    let prompt = prompts::build_extraction_prompt(&text);
    let raw_reply = model.generate(&prompt).await?;
    Ok(recover::recover_json(&raw_reply))
}
