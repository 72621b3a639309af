//! 項目ソースモジュール
//!
//! `{ "Kategories": [...], "quizItems": [...] }` 形式のJSONを
//! HTTP（GET）またはローカルファイルから取得する。
//! 取得・解析の失敗はすべて DataUnavailable として上位に返す。

use crate::error::{ChecklistError, Result};
use checklist_common::ChecklistData;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSource {
    Http(String),
    File(PathBuf),
}

impl ItemSource {
    /// http(s):// で始まればURL、それ以外はファイルパス
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ItemSource::Http(trimmed.to_string())
        } else {
            ItemSource::File(PathBuf::from(trimmed))
        }
    }

    pub async fn fetch(&self, timeout: Duration) -> Result<ChecklistData> {
        let data = match self {
            ItemSource::Http(url) => fetch_http(url, timeout).await?,
            ItemSource::File(path) => read_file(path).await?,
        };
        log::info!(
            "fetched {} items in {} categories from {}",
            data.items.len(),
            data.categories.len(),
            self
        );
        Ok(data)
    }
}

impl fmt::Display for ItemSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSource::Http(url) => write!(f, "{}", url),
            ItemSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

async fn fetch_http(url: &str, timeout: Duration) -> Result<ChecklistData> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ChecklistError::DataUnavailable(format!("HTTPクライアント初期化エラー: {}", e)))?;

    log::debug!("GET {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ChecklistError::DataUnavailable(format!("{}: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ChecklistError::DataUnavailable(format!("HTTP error! status: {}", status.as_u16())));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ChecklistError::DataUnavailable(format!("レスポンス読み込みエラー: {}", e)))?;

    Ok(ChecklistData::from_json(&body)?)
}

async fn read_file(path: &Path) -> Result<ChecklistData> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ChecklistError::DataUnavailable(format!("{}: {}", path.display(), e)))?;

    Ok(ChecklistData::from_json(&content)?)
}
