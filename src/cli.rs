use crate::error::{ChecklistError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "checklist")]
#[command(about = "イベント・サステナビリティ・チェックリストの採点とレポート出力", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 項目ソース（URL または JSONファイル）。設定・環境変数より優先
    #[arg(long, global = true)]
    pub source: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// チェックリストをカテゴリ別に表示
    List,

    /// 指定した項目を選択してスコアを計算
    Score {
        /// 選択する項目番号（例: 1,3,5-7）
        #[arg(short, long, default_value = "")]
        select: String,
    },

    /// 選択項目とスコアをレポート出力
    Export {
        /// 選択する項目番号（例: 1,3,5-7）
        #[arg(short, long, default_value = "")]
        select: String,

        /// 出力形式 (pdf/text/both)
        #[arg(short, long, default_value = "pdf")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ドキュメントタイトル（未指定時は設定値）
        #[arg(short, long)]
        title: Option<String>,

        /// スコア行を出力しない
        #[arg(long)]
        no_score: bool,
    },

    /// 対話的に項目を選択・採点・出力
    Interactive {
        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 項目ソースを設定
        #[arg(long)]
        set_source: Option<String>,

        /// レポートタイトルを設定
        #[arg(long)]
        set_title: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Text,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "text" | "txt" => Ok(ExportFormat::Text),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use pdf, text, or both", s)),
        }
    }
}

/// 項目番号の指定をパース（1始まり → 0始まりの位置）
///
/// "1,3,5-7" 形式。空文字列は選択なし。範囲外の番号はそのまま返し、
/// モデル側で無視される。
pub fn parse_selection(spec: &str) -> Result<Vec<usize>> {
    let mut indices = Vec::new();

    for token in spec.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (start, end) = match token.split_once('-') {
            Some((a, b)) => (parse_number(a)?, parse_number(b)?),
            None => {
                let n = parse_number(token)?;
                (n, n)
            }
        };
        if start > end {
            return Err(ChecklistError::InvalidSelection(format!("範囲が逆順です: {}", token)));
        }
        for n in start..=end {
            let index = n - 1;
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
    }

    Ok(indices)
}

fn parse_number(token: &str) -> Result<usize> {
    let token = token.trim();
    match token.parse::<usize>() {
        Ok(0) => Err(ChecklistError::InvalidSelection("項目番号は1から始まります".into())),
        Ok(n) => Ok(n),
        Err(_) => Err(ChecklistError::InvalidSelection(format!("数値ではありません: {}", token))),
    }
}
