//! カテゴリ別グルーピング
//!
//! 隣接項目のカテゴリ変化で見出しを出す方式はソース側の並び順に依存するため、
//! ここでは明示的にグループを構築する。

use crate::model::{Checklist, ItemId};

/// 1カテゴリ分の項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    /// 元の並び順を保ったID（表示番号は全体での位置）
    pub items: Vec<ItemId>,
}

/// カテゴリごとに項目をまとめる
///
/// 並び順: ソースのカテゴリ一覧の順 → 一覧にないカテゴリ（初出順）。
/// 項目のないカテゴリは含めない。
pub fn group_by_category(checklist: &Checklist, categories: &[String]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::with_capacity(categories.len());
    for name in categories {
        // 重複したカテゴリ名は先頭のグループにまとめる
        if groups.iter().any(|g| &g.name == name) {
            continue;
        }
        groups.push(CategoryGroup {
            name: name.clone(),
            items: Vec::new(),
        });
    }

    for (id, item) in checklist.iter() {
        match groups.iter_mut().find(|g| g.name == item.category) {
            Some(group) => group.items.push(id),
            None => groups.push(CategoryGroup {
                name: item.category.clone(),
                items: vec![id],
            }),
        }
    }

    groups.retain(|g| !g.items.is_empty());
    groups
}

/// 同じカテゴリの項目が連続して並んでいるか
pub fn is_sorted_by_category(checklist: &Checklist) -> bool {
    let mut seen: Vec<&str> = Vec::new();
    for (_, item) in checklist.iter() {
        match seen.last() {
            Some(&last) if last == item.category => {}
            _ => {
                if seen.contains(&item.category.as_str()) {
                    return false;
                }
                seen.push(&item.category);
            }
        }
    }
    true
}
