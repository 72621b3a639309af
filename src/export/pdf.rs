//! PDF生成
//!
//! 構成済みレポートの各行を、指定座標にHelveticaで描画する。
//! 行のY座標はページ上端基準なので、PDFの下端基準に変換して配置する。

use crate::error::{ChecklistError, Result};
use checklist_common::{ReportDocument, ReportLayout};
use printpdf::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn generate_pdf(document: &ReportDocument, layout: &ReportLayout, output_path: &Path) -> Result<()> {
    let page_width = Mm(layout.page_width_mm);
    let page_height = Mm(layout.page_height_mm);

    let (doc, page1, layer1) = PdfDocument::new(&document.title, page_width, page_height, "Layer 1");

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ChecklistError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;

    for (page_no, page) in document.pages.iter().enumerate() {
        let (page_index, layer_index) = if page_no == 0 {
            (page1, layer1)
        } else {
            doc.add_page(page_width, page_height, format!("Layer {}", page_no + 1))
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in &page.lines {
            layer.use_text(
                line.text.clone(),
                line.font_size_pt,
                Mm(line.x_mm),
                Mm(layout.to_pdf_y_mm(line.y_mm)),
                &font,
            );
        }
    }

    log::debug!("writing {} page(s) to {}", document.page_count(), output_path.display());

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ChecklistError::PdfGeneration(format!("PDF保存エラー: {:?}", e)))?;

    Ok(())
}
