// In memory DocumentSink. Keeps the document model instead of PDF bytes so tests can inspect it.

use crate::modules::invoicing::adapters::outbound::document_sink::{
    DocumentHandle, DocumentSink, RenderError, validate_file_name,
};
use crate::modules::invoicing::core::document::InvoiceDocument;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDocumentSink {
    documents: RwLock<HashMap<(String, String), InvoiceDocument>>,
    is_offline: bool,
}

impl InMemoryDocumentSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn documents_of(&self, owner_id: &str) -> Vec<InvoiceDocument> {
        let mut documents: Vec<InvoiceDocument> = self
            .documents
            .read()
            .await
            .iter()
            .filter(|((owner, _), _)| owner == owner_id)
            .map(|(_, document)| document.clone())
            .collect();
        documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        documents
    }
}

#[async_trait::async_trait]
impl DocumentSink for InMemoryDocumentSink {
    async fn write(
        &self,
        owner_id: &str,
        document: &InvoiceDocument,
    ) -> Result<DocumentHandle, RenderError> {
        if self.is_offline {
            return Err(RenderError::Io(std::io::Error::other(
                "Document sink offline",
            )));
        }
        validate_file_name(&document.file_name)?;

        let mut documents = self.documents.write().await;
        let key = (owner_id.to_string(), document.file_name.clone());
        if documents.contains_key(&key) {
            return Err(RenderError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", document.file_name),
            )));
        }
        documents.insert(key, document.clone());
        Ok(DocumentHandle {
            file_name: document.file_name.clone(),
            invoice_number: document.invoice_number.clone(),
        })
    }

    async fn read(&self, owner_id: &str, file_name: &str) -> Result<Vec<u8>, RenderError> {
        validate_file_name(file_name)?;
        let documents = self.documents.read().await;
        let document = documents
            .get(&(owner_id.to_string(), file_name.to_string()))
            .ok_or_else(|| RenderError::NotFound(file_name.to_string()))?;

        let text = std::iter::once(document.title.as_str())
            .chain(document.header.iter().map(String::as_str))
            .chain(document.lines.iter().map(String::as_str))
            .chain(document.summary.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(text.into_bytes())
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<String>, RenderError> {
        if self.is_offline {
            return Err(RenderError::Io(std::io::Error::other(
                "Document sink offline",
            )));
        }
        let mut names: Vec<String> = self
            .documents
            .read()
            .await
            .keys()
            .filter(|(owner, _)| owner == owner_id)
            .map(|(_, file_name)| file_name.clone())
            .collect();
        names.sort();
        Ok(names)
    }
}
