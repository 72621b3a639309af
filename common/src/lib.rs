//! Checklist Common Library
//!
//! スコア計算モデルとレポート構成（I/Oなし）。CLIから利用される。

pub mod error;
pub mod grouping;
pub mod layout;
pub mod model;
pub mod report;
pub mod session;
pub mod types;
pub mod wrap;

pub use error::{Error, Result};
pub use grouping::{group_by_category, is_sorted_by_category, CategoryGroup};
pub use layout::ReportLayout;
pub use model::{baseline_denominator, compute_score, Checklist, ItemId, ScoreSnapshot, SelectionState};
pub use report::{compose, LineKind, ReportDocument, ReportLine, ReportPage};
pub use session::{ChecklistSession, LoadState};
pub use types::{ChecklistData, ChecklistItem, MAX_ITEM_SCORE};
pub use wrap::{text_width_mm, wrap_text};
