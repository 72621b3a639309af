//! テキスト折り返し
//!
//! Helvetica（PDF標準フォント）の文字幅で行幅を測り、
//! 最大幅を超えないよう単語単位で折り返す。
//! 1単語で最大幅を超える場合は文字単位で分割する。

use crate::layout::MM_TO_PT;

/// Helvetica の文字幅（1/1000 em、ASCII 32..=126）
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// 表に無い文字の幅
const DEFAULT_WIDTH: u16 = 556;

fn char_units(c: char) -> u16 {
    let code = c as u32;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[(code - 32) as usize]
    } else {
        DEFAULT_WIDTH
    }
}

/// 文字列の描画幅（mm）
pub fn text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_units(c))).sum();
    units as f32 / 1000.0 * font_size_pt / MM_TO_PT
}

/// 最大幅（mm）に収まるよう折り返す
///
/// 空文字列でも1行（空行）を返す。改行文字は強制改行として扱う。
pub fn wrap_text(text: &str, max_width_mm: f32, font_size_pt: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_width_mm, font_size_pt, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, max_width_mm: f32, font_size_pt: f32, lines: &mut Vec<String>) {
    let fits = |s: &str| text_width_mm(s, font_size_pt) <= max_width_mm;
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current = word.to_string();
        } else {
            // 長すぎる単語は文字単位で分割
            for c in word.chars() {
                current.push(c);
                if !fits(&current) && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }
    }

    lines.push(current);
}
