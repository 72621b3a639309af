//! チェックリストの型定義
//!
//! 項目ソース（HTTP / JSONファイル）から受け取るデータ:
//! - ChecklistItem: 1項目（本文・カテゴリ・配点・任意フラグ）
//! - ChecklistData: カテゴリ名一覧 + 項目一覧
//!
//! ソースは完全には信頼できないため、項目単位の欠損・型違いは
//! エラーにせず安全な既定値へ補正する。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 1項目の配点の上限（絶対値）。これを超える値は読み込み時に丸める
pub const MAX_ITEM_SCORE: i64 = 1_000_000;

/// チェックリスト項目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub text: String,

    #[serde(rename = "kategorija")]
    pub category: String,

    /// 配点（0以下は「No points」）
    pub score: i64,

    /// true = 任意（Value-added）, false = 必須
    pub removable: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>, category: impl Into<String>, score: i64, removable: bool) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            score,
            removable,
        }
    }

    /// 分子・分母に計上される配点（0以下は0）
    pub fn points(&self) -> i64 {
        self.score.max(0)
    }

    pub fn has_points(&self) -> bool {
        self.score > 0
    }

    /// 表示用の配点ラベル: "5 pts" / "No points"
    pub fn score_label(&self) -> String {
        if self.has_points() {
            format!("{} pts", self.score)
        } else {
            "No points".to_string()
        }
    }

    /// JSON値から項目を生成（不正値は既定値へ補正）
    ///
    /// `position` はログ出力用の0始まり位置。
    pub fn coerce(position: usize, value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            log::warn!("item #{}: not an object, using empty mandatory item", position + 1);
            return Self::default();
        };

        let text = coerce_string(obj.get("text"));
        let category = coerce_string(obj.get("kategorija").or_else(|| obj.get("category")));

        let score = match obj.get("score").and_then(coerce_score) {
            Some(score) if !(-MAX_ITEM_SCORE..=MAX_ITEM_SCORE).contains(&score) => {
                let clamped = score.clamp(-MAX_ITEM_SCORE, MAX_ITEM_SCORE);
                log::warn!("item #{}: score {} out of range, using {}", position + 1, score, clamped);
                clamped
            }
            Some(score) => score,
            None => {
                log::warn!("item #{}: missing or non-numeric score {:?}, using 0", position + 1, obj.get("score"));
                0
            }
        };

        let removable = match obj.get("removable").and_then(coerce_flag) {
            Some(flag) => flag,
            None => {
                log::warn!("item #{}: missing removable flag, treating as mandatory", position + 1);
                false
            }
        };

        Self { text, category, score, removable }
    }
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn coerce_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn coerce_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// 項目ソースのレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawChecklistData")]
pub struct ChecklistData {
    #[serde(rename = "Kategories")]
    pub categories: Vec<String>,

    #[serde(rename = "quizItems")]
    pub items: Vec<ChecklistItem>,
}

/// デシリアライズ用の生データ（項目は補正前のJSON値）
#[derive(Deserialize)]
struct RawChecklistData {
    #[serde(rename = "Kategories", alias = "categories", default)]
    categories: Option<Value>,

    #[serde(rename = "quizItems", alias = "items", default)]
    items: Option<Value>,
}

impl From<RawChecklistData> for ChecklistData {
    fn from(raw: RawChecklistData) -> Self {
        let categories = match raw.categories {
            Some(Value::Array(values)) => values
                .iter()
                .map(|v| coerce_string(Some(v)))
                .filter(|name| !name.is_empty())
                .collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                log::warn!("category list is not an array: {}", other);
                Vec::new()
            }
        };

        let items = match raw.items {
            Some(Value::Array(values)) => values
                .iter()
                .enumerate()
                .map(|(i, v)| ChecklistItem::coerce(i, v))
                .collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                log::warn!("item list is not an array: {}", other);
                Vec::new()
            }
        };

        Self { categories, items }
    }
}

impl ChecklistData {
    /// JSON文字列からパース
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
