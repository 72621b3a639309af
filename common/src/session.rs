//! チェックリストセッション
//!
//! 1ユーザー・1チェックリスト分の状態（項目・選択・最新スコア）を保持する。
//! スコアは明示的に計算したときだけ更新され、選択を変更すると破棄される。

use crate::grouping::{group_by_category, is_sorted_by_category, CategoryGroup};
use crate::layout::ReportLayout;
use crate::model::{compute_score, Checklist, ItemId, ScoreSnapshot, SelectionState};
use crate::report::{compose, ReportDocument};
use crate::types::ChecklistData;

/// 項目ソースの読み込み結果（表示状態）
#[derive(Debug)]
pub enum LoadState {
    /// 取得失敗
    Unavailable(String),
    /// 取得成功・項目0件
    Empty,
    Ready(ChecklistSession),
}

impl LoadState {
    /// 取得結果から表示状態を決定
    pub fn from_fetch<E: std::fmt::Display>(result: std::result::Result<ChecklistData, E>) -> Self {
        match result {
            Err(e) => LoadState::Unavailable(e.to_string()),
            Ok(data) if data.is_empty() => LoadState::Empty,
            Ok(data) => LoadState::Ready(ChecklistSession::new(data)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChecklistSession {
    checklist: Checklist,
    categories: Vec<String>,
    selection: SelectionState,
    snapshot: Option<ScoreSnapshot>,
}

impl ChecklistSession {
    pub fn new(data: ChecklistData) -> Self {
        let checklist = Checklist::new(data.items);
        if !is_sorted_by_category(&checklist) {
            log::warn!("items are not grouped by category; headers are built from explicit grouping");
        }
        log::debug!(
            "loaded {} items, baseline denominator {}",
            checklist.len(),
            checklist.baseline_denominator()
        );

        Self {
            checklist,
            categories: data.categories,
            selection: SelectionState::new(),
            snapshot: None,
        }
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// 最新のスコア（未計算・選択変更後は None）
    pub fn snapshot(&self) -> Option<ScoreSnapshot> {
        self.snapshot
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.checklist
            .id_at(index)
            .is_some_and(|id| self.selection.is_selected(id))
    }

    /// 選択中の項目位置（0始まり、昇順）
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection.selected().map(ItemId::index).collect()
    }

    /// 選択を反転（範囲外は何もしない）
    ///
    /// 反転した場合は true を返し、保持していたスコアを破棄する。
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(id) = self.checklist.id_at(index) else {
            log::debug!("toggle ignored: index {} out of range ({} items)", index, self.checklist.len());
            return false;
        };
        self.selection.toggle(id);
        self.snapshot = None;
        true
    }

    /// スコアを計算して保持
    pub fn compute_score(&mut self) -> ScoreSnapshot {
        let snapshot = compute_score(&self.checklist, &self.selection, self.checklist.baseline_denominator());
        self.snapshot = Some(snapshot);
        snapshot
    }

    pub fn groups(&self) -> Vec<CategoryGroup> {
        group_by_category(&self.checklist, &self.categories)
    }

    /// 現在の選択と保持中のスコアでレポートを構成
    pub fn compose(&self, generated_at: &str, layout: &ReportLayout) -> ReportDocument {
        compose(&self.checklist, &self.selection, self.snapshot, generated_at, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChecklistItem;

    fn session() -> ChecklistSession {
        ChecklistSession::new(ChecklistData {
            categories: vec!["A".into(), "B".into()],
            items: vec![
                ChecklistItem::new("Mandatory 10", "A", 10, false),
                ChecklistItem::new("Optional 5", "A", 5, true),
                ChecklistItem::new("Mandatory 0", "B", 0, false),
            ],
        })
    }

    #[test]
    fn test_toggle_clears_snapshot() {
        let mut s = session();
        assert!(s.snapshot().is_none());

        s.toggle(0);
        assert_eq!(s.compute_score(), ScoreSnapshot { earned: 10, denominator: 10 });
        assert!(s.snapshot().is_some());

        assert!(s.toggle(1));
        assert!(s.snapshot().is_none());
        assert_eq!(s.compute_score(), ScoreSnapshot { earned: 15, denominator: 15 });

        s.toggle(0);
        assert_eq!(s.compute_score(), ScoreSnapshot { earned: 5, denominator: 15 });
    }

    #[test]
    fn test_out_of_range_toggle_is_noop() {
        let mut s = session();
        s.toggle(0);
        let snapshot = s.compute_score();

        assert!(!s.toggle(3));
        assert!(!s.toggle(usize::MAX));
        assert_eq!(s.snapshot(), Some(snapshot));
        assert_eq!(s.selected_indices(), vec![0]);
    }

    #[test]
    fn test_double_toggle_restores_selection() {
        let mut s = session();
        s.toggle(1);
        s.toggle(1);
        assert!(!s.is_selected(1));
        assert!(s.selected_indices().is_empty());
        assert_eq!(s.compute_score(), ScoreSnapshot { earned: 0, denominator: 10 });
    }

    #[test]
    fn test_compose_uses_held_snapshot() {
        let mut s = session();
        s.toggle(0);
        let layout = ReportLayout::default();

        let without = s.compose("now", &layout);
        assert!(without.lines().all(|l| !l.text.starts_with("Total Score")));

        s.compute_score();
        let with = s.compose("now", &layout);
        assert!(with.lines().any(|l| l.text == "Total Score: 10 / 10"));

        // 選択変更後は古いスコアを出さない
        s.toggle(1);
        let stale = s.compose("now", &layout);
        assert!(stale.lines().all(|l| !l.text.starts_with("Total Score")));
    }

    #[test]
    fn test_load_state_from_fetch() {
        let unavailable = LoadState::from_fetch::<String>(Err("HTTP 500".into()));
        assert!(matches!(unavailable, LoadState::Unavailable(ref m) if m == "HTTP 500"));

        let empty = LoadState::from_fetch::<String>(Ok(ChecklistData::default()));
        assert!(matches!(empty, LoadState::Empty));

        let ready = LoadState::from_fetch::<String>(Ok(ChecklistData {
            categories: Vec::new(),
            items: vec![ChecklistItem::new("x", "A", 1, false)],
        }));
        assert!(matches!(ready, LoadState::Ready(_)));
    }

    #[test]
    fn test_oversized_source_scores_do_not_panic() {
        let json = r#"{"quizItems": [
            {"text": "a", "score": 9223372036854775807, "removable": false},
            {"text": "b", "score": 9223372036854775807, "removable": false},
            {"text": "c", "score": 1e300, "removable": true},
            {"text": "d", "score": 1e300, "removable": true}
        ]}"#;
        let mut s = ChecklistSession::new(ChecklistData::from_json(json).expect("パース失敗"));
        s.toggle(2);
        s.toggle(3);
        let snapshot = s.compute_score();
        assert!(snapshot.earned >= 0);
        assert!(snapshot.earned <= snapshot.denominator);
    }

    #[test]
    fn test_groups() {
        let s = session();
        let groups = s.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].name, "B");
        assert_eq!(groups[1].items[0].number(), 3);
    }
}
