use crate::modules::invoicing::core::document::InvoiceDocument;
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf rendering failed: {0}")]
    Pdf(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("document {0} not found")]
    NotFound(String),

    #[error("invalid document name: {0}")]
    InvalidName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentHandle {
    pub file_name: String,
    pub invoice_number: String,
}

/// Destination for rendered invoices, partitioned per owner. A write never replaces an existing document.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    async fn write(
        &self,
        owner_id: &str,
        document: &InvoiceDocument,
    ) -> Result<DocumentHandle, RenderError>;

    async fn read(&self, owner_id: &str, file_name: &str) -> Result<Vec<u8>, RenderError>;

    /// File names already issued to the owner, sorted.
    async fn list(&self, owner_id: &str) -> Result<Vec<String>, RenderError>;
}

/// Document names are single path components.
pub fn validate_file_name(file_name: &str) -> Result<(), RenderError> {
    let invalid = file_name.is_empty()
        || file_name.contains('/')
        || file_name.contains('\\')
        || file_name.contains("..");
    if invalid {
        return Err(RenderError::InvalidName(file_name.to_string()));
    }
    Ok(())
}
