use std::path::Path;

use lopdf::Document;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to open PDF: {0}")]
    Open(#[from] lopdf::Error),
}

/// Extracts the text of a PDF, page by page in page order.
///
/// Page texts are trimmed and joined by single newlines; pages that yield no
/// text (or fail to decode) are skipped with a warning. A document where no
/// page yields text produces the empty string.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let doc = Document::load(path)?;

    let mut pages_text: Vec<String> = Vec::new();
    for (page_num, _page_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) => {
                let page_text = page_text.trim();
                if !page_text.is_empty() {
                    pages_text.push(page_text.to_string());
                }
            }
            Err(e) => {
                warn!("failed to extract text from page {page_num}: {e}");
            }
        }
    }

    Ok(pages_text.join("\n"))
}
