use crate::file::{FileKind, TextSource};
use crate::models::IncomingFile;
use anyhow::Result;
use async_trait::async_trait;
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, TableCellContent, TableChild,
    TableRowChild,
};
use serde_json::Value;

/// Word document (.docx) handler; parsing is delegated to docx-rs
pub struct DocxFile {
    file: IncomingFile,
}

impl DocxFile {
    pub fn new(file: IncomingFile) -> Self {
        Self { file }
    }

    /// Collect the visible text of a parsed document, one entry per
    /// paragraph, including paragraphs inside table cells
    fn document_lines(docx: &docx_rs::Docx) -> Vec<String> {
        let mut lines = Vec::new();

        for child in docx.document.children.iter() {
            match child {
                DocumentChild::Paragraph(para) => {
                    lines.push(Self::paragraph_text(para));
                }
                DocumentChild::Table(table) => {
                    for row in table.rows.iter() {
                        let TableChild::TableRow(row) = row;
                        for cell in row.cells.iter() {
                            let TableRowChild::TableCell(cell) = cell;
                            for content in cell.children.iter() {
                                if let TableCellContent::Paragraph(para) = content {
                                    lines.push(Self::paragraph_text(para));
                                }
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        lines.retain(|line| !line.is_empty());
        lines
    }

    fn paragraph_text(para: &Paragraph) -> String {
        para.children
            .iter()
            .filter_map(|child| {
                if let ParagraphChild::Run(run) = child {
                    let run_text = run
                        .children
                        .iter()
                        .filter_map(|rc| {
                            if let RunChild::Text(text) = rc {
                                Some(text.text.as_str())
                            } else {
                                None
                            }
                        })
                        .collect::<Vec<_>>()
                        .join("");
                    Some(run_text)
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

#[async_trait]
impl TextSource for DocxFile {
    async fn to_text_impl(&self) -> Result<String> {
        let data = self.file.data.clone();
        let text = tokio::task::spawn_blocking(move || -> Result<String> {
            let docx = docx_rs::read_docx(&data)
                .map_err(|e| anyhow::anyhow!("Failed to read the Word document: {}", e))?;
            Ok(Self::document_lines(&docx).join("\n"))
        })
        .await??;

        Ok(text)
    }

    async fn to_metadata(&self) -> Result<Option<Value>> {
        if self.file.data.is_empty() {
            return Ok(None);
        }

        let data = self.file.data.clone();
        let metadata = tokio::task::spawn_blocking(move || -> Result<Option<Value>> {
            let docx = match docx_rs::read_docx(&data) {
                Ok(docx) => docx,
                Err(_) => return Ok(None),
            };

            let lines = Self::document_lines(&docx);
            let word_count: usize = lines
                .iter()
                .map(|line| line.split_whitespace().count())
                .sum();

            let mut meta_map = serde_json::Map::new();
            meta_map.insert("paragraph_count".to_string(), Value::Number(lines.len().into()));
            meta_map.insert("word_count".to_string(), Value::Number(word_count.into()));

            Ok(Some(Value::Object(meta_map)))
        })
        .await??;

        Ok(metadata)
    }

    fn data(&self) -> &[u8] {
        &self.file.data
    }

    fn name(&self) -> &str {
        &self.file.name
    }

    fn media_type(&self) -> &str {
        &self.file.media_type
    }

    fn kind(&self) -> FileKind {
        FileKind::WordDocument
    }
}
