// PDF implementation of the DocumentSink port.
//
// Layout
// - A4 portrait, built-in Helvetica at 12 pt, one line every 10 mm.
// - Title centered, a blank line after the header and before the summary.
// - Entry lines wrap at the usable width; a new page starts at the bottom margin.
//
// Files land in `{output_dir}/{owner_id}/{file_name}` and are never overwritten.

use crate::modules::invoicing::adapters::outbound::document_sink::{
    DocumentHandle, DocumentSink, RenderError, validate_file_name,
};
use crate::modules::invoicing::core::document::InvoiceDocument;
use async_trait::async_trait;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const BOTTOM_MARGIN_MM: f32 = 20.0;
const LINE_PITCH_MM: f32 = 10.0;
const FONT_SIZE_PT: f32 = 12.0;
// Average Helvetica glyph width is about half the font size.
const CHAR_WIDTH_MM: f32 = FONT_SIZE_PT * 0.5 * 0.3528;
const WRAP_COLUMNS: usize = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
}

struct Cursor {
    pages: Vec<Vec<PlacedLine>>,
    y_mm: f32,
}

impl Cursor {
    fn top() -> f32 {
        PAGE_HEIGHT_MM - MARGIN_MM - LINE_PITCH_MM
    }

    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y_mm: Self::top(),
        }
    }

    fn place(&mut self, text: String, x_mm: f32) {
        if self.y_mm < BOTTOM_MARGIN_MM {
            self.pages.push(Vec::new());
            self.y_mm = Self::top();
        }
        if let Some(page) = self.pages.last_mut() {
            page.push(PlacedLine {
                text,
                x_mm,
                y_mm: self.y_mm,
            });
        }
        self.y_mm -= LINE_PITCH_MM;
    }

    fn skip(&mut self) {
        self.y_mm -= LINE_PITCH_MM;
    }
}

/// Greedy word wrap on whitespace; words longer than a row are split.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > columns {
            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
            }
            rows.push(word.drain(..columns).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }
        let needed = if row.is_empty() {
            word.chars().count()
        } else {
            row.chars().count() + 1 + word.chars().count()
        };
        if needed > columns {
            rows.push(std::mem::take(&mut row));
        }
        if !row.is_empty() {
            row.push(' ');
        }
        row.push_str(&word);
    }
    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

pub fn layout_pages(document: &InvoiceDocument) -> Vec<Vec<PlacedLine>> {
    let mut cursor = Cursor::new();

    let title_width = document.title.chars().count() as f32 * CHAR_WIDTH_MM;
    let title_x = ((PAGE_WIDTH_MM - title_width) / 2.0).max(MARGIN_MM);
    cursor.place(document.title.clone(), title_x);
    for line in &document.header {
        cursor.place(line.clone(), MARGIN_MM);
    }
    cursor.skip();

    for line in &document.lines {
        for row in wrap(line, WRAP_COLUMNS) {
            cursor.place(row, MARGIN_MM);
        }
    }
    cursor.skip();

    for line in &document.summary {
        cursor.place(line.clone(), MARGIN_MM);
    }
    cursor.pages
}

pub fn render_pdf(document: &InvoiceDocument) -> Result<Vec<u8>, RenderError> {
    let (pdf, first_page, first_layer) = PdfDocument::new(
        document.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| RenderError::Pdf(err.to_string()))?;

    for (index, lines) in layout_pages(document).into_iter().enumerate() {
        let layer = if index == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = pdf.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            pdf.get_page(page).get_layer(layer)
        };
        for line in lines {
            layer.use_text(line.text, FONT_SIZE_PT, Mm(line.x_mm), Mm(line.y_mm), &font);
        }
    }

    pdf.save_to_bytes()
        .map_err(|err| RenderError::Pdf(err.to_string()))
}

pub struct PdfDocumentSink {
    output_dir: PathBuf,
}

impl PdfDocumentSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn owner_dir(&self, owner_id: &str) -> Result<PathBuf, RenderError> {
        validate_file_name(owner_id)?;
        Ok(self.output_dir.join(owner_id))
    }
}

#[async_trait]
impl DocumentSink for PdfDocumentSink {
    async fn write(
        &self,
        owner_id: &str,
        document: &InvoiceDocument,
    ) -> Result<DocumentHandle, RenderError> {
        validate_file_name(&document.file_name)?;
        let dir = self.owner_dir(owner_id)?;
        let bytes = render_pdf(document)?;

        tokio::fs::create_dir_all(&dir).await?;
        let path = dir.join(&document.file_name);
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        tracing::debug!(path = %path.display(), "invoice document written");

        Ok(DocumentHandle {
            file_name: document.file_name.clone(),
            invoice_number: document.invoice_number.clone(),
        })
    }

    async fn read(&self, owner_id: &str, file_name: &str) -> Result<Vec<u8>, RenderError> {
        validate_file_name(file_name)?;
        let path = self.owner_dir(owner_id)?.join(file_name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(RenderError::NotFound(file_name.to_string()))
            }
            Err(err) => Err(RenderError::Io(err)),
        }
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<String>, RenderError> {
        let dir = self.owner_dir(owner_id)?;
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(RenderError::Io(err)),
        };
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
