//! 端末表示
//!
//! カテゴリ見出し付きの項目一覧と、スコア表示の文字列を組み立てる。

use checklist_common::{ChecklistSession, ScoreSnapshot};

/// 一覧の1行: "[x] 2. Reusable cups (Value-added)    5 pts"
pub fn format_item_row(session: &ChecklistSession, index: usize) -> Option<String> {
    let id = session.checklist().id_at(index)?;
    let item = session.checklist().get(id)?;
    let mark = if session.selection().is_selected(id) { "x" } else { " " };
    let tag = if item.removable { " (Value-added)" } else { "" };
    Some(format!(
        "[{}] {}. {}{}  -  {}",
        mark,
        id.number(),
        item.text,
        tag,
        item.score_label()
    ))
}

/// カテゴリ見出し付きの一覧
pub fn format_checklist(session: &ChecklistSession) -> String {
    let mut out = String::new();
    for group in session.groups() {
        let heading = if group.name.is_empty() { "(no category)" } else { group.name.as_str() };
        out.push_str(&format!("\n## {}\n", heading));
        for id in group.items {
            if let Some(row) = format_item_row(session, id.index()) {
                out.push_str(&row);
                out.push('\n');
            }
        }
    }
    out
}

pub fn format_score(snapshot: ScoreSnapshot) -> String {
    if snapshot.is_empty() {
        "Your score: - (採点対象の項目がありません)".to_string()
    } else {
        format!("Your score: {}", snapshot)
    }
}
