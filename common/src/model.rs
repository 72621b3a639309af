//! スコア計算モデル
//!
//! - 分子（獲得点）: 選択された項目の正の配点の合計
//! - 分母: 必須項目の正の配点の合計（ベースライン）
//!   + 選択された任意項目の正の配点の合計
//!
//! 任意項目は選択されると分子・分母の両方に加算されるため、
//! 任意項目の選択で分母が減ることはない。
//!
//! 合計は飽和加算（i64::MAX で頭打ち）。

use crate::types::ChecklistItem;
use std::collections::BTreeMap;

/// 読み込み時に確定する項目ID（読み込み時点の位置）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(usize);

impl ItemId {
    /// 0始まりの位置
    pub fn index(self) -> usize {
        self.0
    }

    /// 1始まりの表示番号
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

/// 読み込み済みの項目一覧（不変）
#[derive(Debug, Clone, Default)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
    baseline: i64,
}

impl Checklist {
    pub fn new(items: Vec<ChecklistItem>) -> Self {
        let baseline = baseline_denominator(&items);
        Self { items, baseline }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 必須項目のみから得られる最大点（読み込み時に計算済み）
    pub fn baseline_denominator(&self) -> i64 {
        self.baseline
    }

    /// 位置からIDを解決（範囲外はNone）
    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        (index < self.items.len()).then_some(ItemId(index))
    }

    pub fn get(&self, id: ItemId) -> Option<&ChecklistItem> {
        self.items.get(id.0)
    }

    /// IDと項目のペアを順序どおりに列挙
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &ChecklistItem)> {
        self.items.iter().enumerate().map(|(i, item)| (ItemId(i), item))
    }
}

/// 項目ごとの選択状態（未登録 = 未選択）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    entries: BTreeMap<ItemId, bool>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.entries.get(&id).copied().unwrap_or(false)
    }

    /// 選択を反転し、反転後の値を返す
    pub fn toggle(&mut self, id: ItemId) -> bool {
        let entry = self.entries.entry(id).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// 選択中のIDを昇順で列挙
    pub fn selected(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries
            .iter()
            .filter(|(_, &selected)| selected)
            .map(|(&id, _)| id)
    }
}

/// ある時点のスコア（獲得点 / 分母）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSnapshot {
    pub earned: i64,
    pub denominator: i64,
}

impl ScoreSnapshot {
    /// (0, 0) はデータなし（満点ではない）
    pub fn is_empty(&self) -> bool {
        self.denominator == 0
    }
}

impl std::fmt::Display for ScoreSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.earned, self.denominator)
    }
}

/// ベースライン分母: 必須項目の正の配点の合計
pub fn baseline_denominator(items: &[ChecklistItem]) -> i64 {
    items
        .iter()
        .filter(|item| !item.removable)
        .map(ChecklistItem::points)
        .fold(0, i64::saturating_add)
}

/// 選択状態からスコアを計算
pub fn compute_score(checklist: &Checklist, selection: &SelectionState, baseline: i64) -> ScoreSnapshot {
    if checklist.is_empty() {
        return ScoreSnapshot::default();
    }

    let mut snapshot = ScoreSnapshot {
        earned: 0,
        denominator: baseline,
    };

    for (id, item) in checklist.iter() {
        if !selection.is_selected(id) {
            continue;
        }
        let points = item.points();
        snapshot.earned = snapshot.earned.saturating_add(points);
        if item.removable {
            snapshot.denominator = snapshot.denominator.saturating_add(points);
        }
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn example_checklist() -> Checklist {
        Checklist::new(vec![
            ChecklistItem::new("Mandatory 10", "A", 10, false),
            ChecklistItem::new("Optional 5", "A", 5, true),
            ChecklistItem::new("Mandatory 0", "B", 0, false),
        ])
    }

    fn select(checklist: &Checklist, selection: &mut SelectionState, index: usize) {
        let id = checklist.id_at(index).expect("範囲内のはず");
        selection.toggle(id);
    }

    #[test]
    fn test_baseline_counts_only_positive_mandatory() {
        let items = vec![
            ChecklistItem::new("a", "", 10, false),
            ChecklistItem::new("b", "", 5, true),
            ChecklistItem::new("c", "", -2, false),
            ChecklistItem::new("d", "", 3, false),
        ];
        assert_eq!(baseline_denominator(&items), 13);
    }

    #[test]
    fn test_worked_example() {
        let checklist = example_checklist();
        let baseline = checklist.baseline_denominator();
        assert_eq!(baseline, 10);

        let mut selection = SelectionState::new();
        select(&checklist, &mut selection, 0);
        assert_eq!(
            compute_score(&checklist, &selection, baseline),
            ScoreSnapshot { earned: 10, denominator: 10 }
        );

        select(&checklist, &mut selection, 1);
        assert_eq!(
            compute_score(&checklist, &selection, baseline),
            ScoreSnapshot { earned: 15, denominator: 15 }
        );

        select(&checklist, &mut selection, 0);
        assert_eq!(
            compute_score(&checklist, &selection, baseline),
            ScoreSnapshot { earned: 5, denominator: 15 }
        );
    }

    #[test]
    fn test_zero_score_item_never_counted() {
        let checklist = example_checklist();
        let baseline = checklist.baseline_denominator();
        let mut selection = SelectionState::new();

        let before = compute_score(&checklist, &selection, baseline);
        select(&checklist, &mut selection, 2);
        let after = compute_score(&checklist, &selection, baseline);
        assert_eq!(before, after);

        let optional_zero = Checklist::new(vec![ChecklistItem::new("z", "", 0, true)]);
        let mut selection = SelectionState::new();
        select(&optional_zero, &mut selection, 0);
        assert_eq!(
            compute_score(&optional_zero, &selection, optional_zero.baseline_denominator()),
            ScoreSnapshot { earned: 0, denominator: 0 }
        );
    }

    #[test]
    fn test_empty_checklist_yields_zero() {
        let checklist = Checklist::new(Vec::new());
        let snapshot = compute_score(&checklist, &SelectionState::new(), 0);
        assert_eq!(snapshot, ScoreSnapshot { earned: 0, denominator: 0 });
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_id_at_out_of_range() {
        let checklist = example_checklist();
        assert!(checklist.id_at(2).is_some());
        assert!(checklist.id_at(3).is_none());
        assert_eq!(checklist.id_at(0).map(ItemId::number), Some(1));
    }

    #[test]
    fn test_selection_absent_is_unselected() {
        let checklist = example_checklist();
        let selection = SelectionState::new();
        assert!(checklist.iter().all(|(id, _)| !selection.is_selected(id)));
        assert_eq!(selection.selected().count(), 0);
    }

    #[test]
    fn test_huge_scores_saturate() {
        let checklist = Checklist::new(vec![
            ChecklistItem::new("m1", "A", i64::MAX, false),
            ChecklistItem::new("m2", "A", i64::MAX, false),
            ChecklistItem::new("o1", "B", i64::MAX, true),
            ChecklistItem::new("o2", "B", i64::MAX, true),
        ]);
        let baseline = checklist.baseline_denominator();
        assert_eq!(baseline, i64::MAX);

        let mut selection = SelectionState::new();
        select(&checklist, &mut selection, 2);
        select(&checklist, &mut selection, 3);
        let snapshot = compute_score(&checklist, &selection, baseline);
        assert_eq!(snapshot, ScoreSnapshot { earned: i64::MAX, denominator: i64::MAX });
        assert!(snapshot.earned <= snapshot.denominator);
    }

    #[test]
    fn test_huge_source_scores_load_and_score() {
        let json = r#"{"quizItems": [
            {"text": "a", "score": 9223372036854775807, "removable": false},
            {"text": "b", "score": 9223372036854775807, "removable": false},
            {"text": "c", "score": 1e300, "removable": true},
            {"text": "d", "score": 1e300, "removable": true}
        ]}"#;
        let data = crate::types::ChecklistData::from_json(json).expect("パース失敗");
        let checklist = Checklist::new(data.items);
        let baseline = checklist.baseline_denominator();
        assert_eq!(baseline, 2 * crate::types::MAX_ITEM_SCORE);

        let mut selection = SelectionState::new();
        for i in 0..4 {
            select(&checklist, &mut selection, i);
        }
        let snapshot = compute_score(&checklist, &selection, baseline);
        assert_eq!(snapshot.earned, 4 * crate::types::MAX_ITEM_SCORE);
        assert_eq!(snapshot.earned, snapshot.denominator);
    }

    #[test]
    fn test_snapshot_display() {
        let snapshot = ScoreSnapshot { earned: 5, denominator: 15 };
        assert_eq!(snapshot.to_string(), "5 / 15");
    }

    // =============================================
    // プロパティテスト
    // =============================================

    fn arb_items() -> impl Strategy<Value = Vec<ChecklistItem>> {
        prop::collection::vec(
            (0i64..50, any::<bool>()).prop_map(|(score, removable)| {
                ChecklistItem::new("item", "cat", score, removable)
            }),
            0..20,
        )
    }

    fn arb_items_with_selection() -> impl Strategy<Value = (Vec<ChecklistItem>, Vec<bool>)> {
        arb_items().prop_flat_map(|items| {
            let len = items.len();
            (Just(items), prop::collection::vec(any::<bool>(), len))
        })
    }

    fn selection_from(checklist: &Checklist, flags: &[bool]) -> SelectionState {
        let mut selection = SelectionState::new();
        for (i, &flag) in flags.iter().enumerate() {
            if flag {
                select(checklist, &mut selection, i);
            }
        }
        selection
    }

    proptest! {
        #[test]
        fn baseline_is_independent_of_selection((items, flags) in arb_items_with_selection()) {
            let expected: i64 = items.iter().filter(|i| !i.removable && i.score > 0).map(|i| i.score).sum();
            let checklist = Checklist::new(items);
            let _selection = selection_from(&checklist, &flags);
            prop_assert_eq!(checklist.baseline_denominator(), expected);
        }

        #[test]
        fn earned_never_exceeds_denominator((items, flags) in arb_items_with_selection()) {
            let checklist = Checklist::new(items);
            let selection = selection_from(&checklist, &flags);
            let snapshot = compute_score(&checklist, &selection, checklist.baseline_denominator());
            prop_assert!(snapshot.earned <= snapshot.denominator);
        }

        #[test]
        fn double_toggle_is_neutral((items, flags) in arb_items_with_selection(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!items.is_empty());
            let checklist = Checklist::new(items);
            let mut selection = selection_from(&checklist, &flags);
            let id = checklist.id_at(pick.index(checklist.len())).expect("範囲内");
            let before_flag = selection.is_selected(id);
            let before = compute_score(&checklist, &selection, checklist.baseline_denominator());

            selection.toggle(id);
            selection.toggle(id);

            prop_assert_eq!(selection.is_selected(id), before_flag);
            prop_assert_eq!(compute_score(&checklist, &selection, checklist.baseline_denominator()), before);
        }

        #[test]
        fn selecting_more_items_moves_denominator_monotonically((items, flags) in arb_items_with_selection(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!items.is_empty());
            let checklist = Checklist::new(items);
            let mut selection = selection_from(&checklist, &flags);
            let id = checklist.id_at(pick.index(checklist.len())).expect("範囲内");
            prop_assume!(!selection.is_selected(id));

            let baseline = checklist.baseline_denominator();
            let before = compute_score(&checklist, &selection, baseline);
            selection.toggle(id);
            let after = compute_score(&checklist, &selection, baseline);

            let removable = checklist.get(id).map(|item| item.removable).unwrap_or(false);
            if removable {
                prop_assert!(after.denominator >= before.denominator);
            } else {
                prop_assert_eq!(after.denominator, before.denominator);
            }
        }
    }
}
