//! Checklist Score
//!
//! チェックリスト項目の取得・採点・レポート出力（CLI側）。
//! 採点とレポート構成のロジックは checklist_common にある。

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod interactive;
pub mod source;

use checklist_common::{ChecklistSession, LoadState};
use std::time::Duration;

/// レポートに印字する出力時刻
pub fn report_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 項目ソースから取得し、表示状態を返す
pub async fn load_state(source: &source::ItemSource, timeout: Duration) -> LoadState {
    LoadState::from_fetch(source.fetch(timeout).await)
}

/// 1始まりの番号で選択を適用（範囲外は警告のみ）
pub fn apply_selection(session: &mut ChecklistSession, indices: &[usize]) {
    for &index in indices {
        if !session.toggle(index) {
            log::warn!(
                "item {} does not exist ({} items), ignored",
                index + 1,
                session.checklist().len()
            );
        }
    }
}
