use crate::error::{ChecklistError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SOURCE: &str = "http://localhost:8080/api/quiz-data";
pub const DEFAULT_TITLE: &str = "Checklist";
pub const SOURCE_ENV: &str = "CHECKLIST_SOURCE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 項目ソース（URL または JSONファイルパス）
    pub source: String,
    /// レポートタイトル（PDFファイル名にも使用）
    pub title: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ChecklistError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("checklist-score").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            source: DEFAULT_SOURCE.into(),
            title: DEFAULT_TITLE.into(),
            timeout_seconds: 30,
        }
    }

    /// 項目ソースを決定（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_source(&self, override_source: Option<&str>) -> String {
        if let Some(source) = override_source {
            return source.to_string();
        }
        match std::env::var(SOURCE_ENV) {
            Ok(source) if !source.trim().is_empty() => source,
            _ => self.source.clone(),
        }
    }

    pub fn set_source(&mut self, source: String) -> Result<()> {
        if source.trim().is_empty() {
            return Err(ChecklistError::Config("項目ソースが空です".into()));
        }
        self.source = source;
        self.save()
    }

    pub fn set_title(&mut self, title: String) -> Result<()> {
        if title.trim().is_empty() {
            return Err(ChecklistError::Config("タイトルが空です".into()));
        }
        self.title = title;
        self.save()
    }
}
