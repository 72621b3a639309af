pub mod pdf;
pub mod text;

use crate::cli::ExportFormat;
use crate::error::Result;
use checklist_common::{ReportDocument, ReportLayout};
use std::path::{Path, PathBuf};

/// タイトルをファイル名に使える形へ（パス区切り等は "_" に置換）
fn file_stem_for_title(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        "report".to_string()
    } else {
        stem
    }
}

/// 出力先の親ディレクトリを作成
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let pdf_path = output.join(format!("{}.pdf", title));
        let text_path = output.join(format!("{}.txt", title));
        (pdf_path, text_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let pdf_path = parent.join(format!("{}.pdf", stem));
        let text_path = parent.join(format!("{}.txt", stem));
        (pdf_path, text_path)
    }
}

/// レポートを出力し、書き出したファイルのパスを返す
pub fn export_report(
    document: &ReportDocument,
    layout: &ReportLayout,
    format: &ExportFormat,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let stem = file_stem_for_title(&document.title);
    let title = stem.as_str();
    let mut written = Vec::new();

    match format {
        ExportFormat::Pdf => {
            let output_path = output_path_for_format(output_dir, title, "pdf");
            ensure_parent_dir(&output_path)?;
            println!("- PDFを生成中... ({}ページ)", document.page_count());
            pdf::generate_pdf(document, layout, &output_path)?;
            println!("✔ PDF出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Text => {
            let output_path = output_path_for_format(output_dir, title, "txt");
            ensure_parent_dir(&output_path)?;
            println!("- テキストを生成中...");
            text::generate_text(document, &output_path)?;
            println!("✔ テキスト出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Both => {
            let (pdf_path, text_path) = output_paths_for_both(output_dir, title);
            ensure_parent_dir(&pdf_path)?;

            println!("- PDFを生成中... ({}ページ)", document.page_count());
            pdf::generate_pdf(document, layout, &pdf_path)?;
            println!("✔ PDF出力: {}", pdf_path.display());

            println!("- テキストを生成中...");
            text::generate_text(document, &text_path)?;
            println!("✔ テキスト出力: {}", text_path.display());

            written.push(pdf_path);
            written.push(text_path);
        }
    }

    Ok(written)
}
