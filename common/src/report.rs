//! レポート構成
//!
//! 選択状態とスコアから、ページごとの描画行（文字列 + 座標）を組み立てる。
//! 描画・保存は行わない（PDF/テキスト出力側の責務）。
//!
//! 項目は「折り返し → 高さ計測 → 配置」の順で処理する。
//! 折り返し前の文字列長で高さを見積もると改ページ位置がずれる。

use crate::layout::ReportLayout;
use crate::model::{Checklist, ScoreSnapshot, SelectionState};
use crate::wrap::wrap_text;

/// 行の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Timestamp,
    Score,
    Item,
}

/// 描画する1行
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub text: String,
    pub x_mm: f32,
    /// ページ上端からの距離（mm）
    pub y_mm: f32,
    pub font_size_pt: f32,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPage {
    pub lines: Vec<ReportLine>,
}

/// 構成済みレポート
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub pages: Vec<ReportPage>,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// 全ページの行を順に列挙
    pub fn lines(&self) -> impl Iterator<Item = &ReportLine> {
        self.pages.iter().flat_map(|page| page.lines.iter())
    }
}

/// 項目行の文字列: "7. text - 5 pts"
pub fn item_line_text(number: usize, text: &str, score_label: &str) -> String {
    format!("{}. {} - {}", number, text, score_label)
}

/// レポートを構成
///
/// `generated_at` は出力時刻の表示文字列（呼び出し側で生成）。
/// `snapshot` が None の場合、スコア行は出力しない。
pub fn compose(
    checklist: &Checklist,
    selection: &SelectionState,
    snapshot: Option<ScoreSnapshot>,
    generated_at: &str,
    layout: &ReportLayout,
) -> ReportDocument {
    let x = layout.margin_left_mm;
    let mut pages = Vec::new();
    let mut page = ReportPage::default();

    page.lines.push(ReportLine {
        text: layout.title.clone(),
        x_mm: x,
        y_mm: layout.title_y_mm,
        font_size_pt: layout.title_font_size_pt,
        kind: LineKind::Title,
    });
    page.lines.push(ReportLine {
        text: format!("Date: {}", generated_at),
        x_mm: x,
        y_mm: layout.timestamp_y_mm,
        font_size_pt: layout.body_font_size_pt,
        kind: LineKind::Timestamp,
    });
    if let Some(snapshot) = snapshot {
        page.lines.push(ReportLine {
            text: format!("Total Score: {}", snapshot),
            x_mm: x,
            y_mm: layout.score_y_mm,
            font_size_pt: layout.body_font_size_pt,
            kind: LineKind::Score,
        });
    }

    let mut y = layout.content_start_y_mm;

    for (id, item) in checklist.iter() {
        if !selection.is_selected(id) {
            continue;
        }

        let text = item_line_text(id.number(), &item.text, &item.score_label());
        let wrapped = wrap_text(&text, layout.max_line_width_mm, layout.body_font_size_pt);
        let required = layout.block_height_mm(wrapped.len());

        if y + required > layout.content_limit_y_mm {
            pages.push(std::mem::take(&mut page));
            y = layout.continuation_start_y_mm;
        }

        for line in wrapped {
            page.lines.push(ReportLine {
                text: line,
                x_mm: x,
                y_mm: y,
                font_size_pt: layout.body_font_size_pt,
                kind: LineKind::Item,
            });
            y += layout.line_height_mm;
        }
        y += layout.item_spacing_mm;
    }

    pages.push(page);

    ReportDocument {
        title: layout.title.clone(),
        pages,
    }
}
