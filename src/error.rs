use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChecklistError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データを取得できません: {0}")]
    DataUnavailable(String),

    #[error("項目指定が不正: {0}")]
    InvalidSelection(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF生成エラー: {0}")]
    PdfGeneration(String),
}

impl From<checklist_common::Error> for ChecklistError {
    fn from(err: checklist_common::Error) -> Self {
        match err {
            checklist_common::Error::Json(e) => ChecklistError::DataUnavailable(format!("レスポンスの解析に失敗: {}", e)),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChecklistError>;
