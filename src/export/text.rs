//! テキスト出力
//!
//! PDFと同じページ割りで、行をそのまま書き出す。

use crate::error::Result;
use checklist_common::ReportDocument;
use std::path::Path;

pub fn render_text(document: &ReportDocument) -> String {
    let mut out = String::new();
    for (page_no, page) in document.pages.iter().enumerate() {
        if page_no > 0 {
            out.push('\n');
        }
        out.push_str(&format!("--- page {} ---\n", page_no + 1));
        for line in &page.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
    }
    out
}

pub fn generate_text(document: &ReportDocument, output_path: &Path) -> Result<()> {
    std::fs::write(output_path, render_text(document))?;
    Ok(())
}
