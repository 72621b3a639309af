//! 対話式チェックリストモジュール
//!
//! 番号入力で項目を選択/解除し、明示的な操作でのみ採点する。
//! 選択を変更するたびに表示中のスコアは破棄される。

use crate::cli::ExportFormat;
use crate::display::{format_checklist, format_item_row, format_score};
use crate::error::{ChecklistError, Result};
use crate::export;
use checklist_common::{ChecklistSession, ReportLayout};
use dialoguer::Input;
use std::path::Path;

/// 対話アクション
#[derive(Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// 項目の選択を反転（0始まり）
    Toggle(usize),
    /// 採点
    Calculate,
    /// レポート出力
    Export,
    /// 一覧を再表示
    List,
    /// 終了
    Quit,
    /// 解釈できない入力
    Unknown(String),
}

/// 入力をアクションに変換
pub fn parse_action(input: &str) -> SessionAction {
    let trimmed = input.trim();
    match trimmed {
        "c" | "C" => SessionAction::Calculate,
        "e" | "E" => SessionAction::Export,
        "l" | "L" | "" => SessionAction::List,
        "q" | "Q" => SessionAction::Quit,
        _ => match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 => SessionAction::Toggle(n - 1),
            _ => SessionAction::Unknown(trimmed.to_string()),
        },
    }
}

/// 対話セッションを実行
pub fn run_interactive(
    session: &mut ChecklistSession,
    layout: &ReportLayout,
    output_dir: &Path,
) -> Result<()> {
    println!("{}", format_checklist(session));
    println!("---");
    println!("操作: [番号]選択/解除 [c]採点 [e]PDF出力 [l]一覧 [q]終了");
    println!("---\n");

    loop {
        let input: String = Input::new()
            .with_prompt("操作")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ChecklistError::Prompt(e.to_string()))?;

        match parse_action(&input) {
            SessionAction::Toggle(index) => {
                if session.toggle(index) {
                    if let Some(row) = format_item_row(session, index) {
                        println!("  → {}", row);
                    }
                } else {
                    println!("  → 項目 {} はありません（1-{}）", index + 1, session.checklist().len());
                }
            }
            SessionAction::Calculate => {
                let snapshot = session.compute_score();
                println!("  → {}", format_score(snapshot));
            }
            SessionAction::Export => {
                if session.snapshot().is_none() {
                    println!("  → スコア未計算のため、スコア行なしで出力します");
                }
                let generated_at = crate::report_timestamp();
                let document = session.compose(&generated_at, layout);
                export::export_report(&document, layout, &ExportFormat::Pdf, output_dir)?;
            }
            SessionAction::List => {
                println!("{}", format_checklist(session));
                if let Some(snapshot) = session.snapshot() {
                    println!("{}", format_score(snapshot));
                }
            }
            SessionAction::Quit => {
                println!("終了します");
                break;
            }
            SessionAction::Unknown(text) => {
                println!("  → 不明な操作: {}", text);
            }
        }
    }

    Ok(())
}
