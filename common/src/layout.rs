//! レポートのレイアウト設定
//!
//! mm基準・ページ上端からの座標で定義する（PDF側で下端基準に変換）。

// ============================================
// mm基準レイアウト
// ============================================

/// A4サイズ（mm）
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

/// 左余白（mm）
pub const MARGIN_LEFT_MM: f32 = 20.0;

/// ヘッダー行のY座標（mm、上から）
pub const TITLE_Y_MM: f32 = 20.0;
pub const TIMESTAMP_Y_MM: f32 = 30.0;
pub const SCORE_Y_MM: f32 = 40.0;

/// 1ページ目の本文開始位置（スコア行の有無に関係なく固定）
pub const CONTENT_START_Y_MM: f32 = 50.0;

/// 2ページ目以降の本文開始位置
pub const CONTINUATION_START_Y_MM: f32 = 20.0;

/// 本文の下限（これを超える項目は次ページへ）
pub const CONTENT_LIMIT_Y_MM: f32 = 280.0;

/// 行送り・項目間隔（mm）
pub const LINE_HEIGHT_MM: f32 = 7.0;
pub const ITEM_SPACING_MM: f32 = 3.0;

/// 1行の最大幅（mm）
pub const MAX_LINE_WIDTH_MM: f32 = 180.0;

/// フォントサイズ（pt）
pub const TITLE_FONT_SIZE_PT: f32 = 16.0;
pub const BODY_FONT_SIZE_PT: f32 = 12.0;

// ============================================
// 変換係数
// ============================================

/// mm → pt変換 (1mm = 72/25.4 pt ≈ 2.835pt)
pub const MM_TO_PT: f32 = 72.0 / 25.4;

// ============================================
// レイアウト設定構造体
// ============================================

/// レポートレイアウト設定
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    /// タイトル文字列
    pub title: String,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_left_mm: f32,
    pub title_y_mm: f32,
    pub timestamp_y_mm: f32,
    pub score_y_mm: f32,
    pub content_start_y_mm: f32,
    pub continuation_start_y_mm: f32,
    pub content_limit_y_mm: f32,
    pub line_height_mm: f32,
    pub item_spacing_mm: f32,
    pub max_line_width_mm: f32,
    pub title_font_size_pt: f32,
    pub body_font_size_pt: f32,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self::a4("Checklist")
    }
}

impl ReportLayout {
    /// A4縦・標準レイアウト
    pub fn a4(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
            margin_left_mm: MARGIN_LEFT_MM,
            title_y_mm: TITLE_Y_MM,
            timestamp_y_mm: TIMESTAMP_Y_MM,
            score_y_mm: SCORE_Y_MM,
            content_start_y_mm: CONTENT_START_Y_MM,
            continuation_start_y_mm: CONTINUATION_START_Y_MM,
            content_limit_y_mm: CONTENT_LIMIT_Y_MM,
            line_height_mm: LINE_HEIGHT_MM,
            item_spacing_mm: ITEM_SPACING_MM,
            max_line_width_mm: MAX_LINE_WIDTH_MM,
            title_font_size_pt: TITLE_FONT_SIZE_PT,
            body_font_size_pt: BODY_FONT_SIZE_PT,
        }
    }

    /// 折り返し後の行数から、項目が必要とする高さ（mm）
    pub fn block_height_mm(&self, line_count: usize) -> f32 {
        line_count as f32 * self.line_height_mm + self.item_spacing_mm
    }

    /// 上端基準のY座標をPDFの下端基準に変換
    pub fn to_pdf_y_mm(&self, y_from_top_mm: f32) -> f32 {
        self.page_height_mm - y_from_top_mm
    }
}
