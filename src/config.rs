use crate::error::{RecipeMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIキーの環境変数（設定ファイルより優先）
pub const API_KEY_ENV: &str = "RECIPE_MATCH_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    /// OpenAI互換のチャットAPIエンドポイント
    pub gateway_url: String,
    pub timeout_seconds: u64,
    /// アップロードできる画像の最大サイズ（バイト）
    pub max_image_bytes: u64,
    /// 未指定なら組み込みカタログを使用
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "google/gemini-2.5-flash".into(),
            gateway_url: "https://ai.gateway.lovable.dev/v1/chat/completions".into(),
            timeout_seconds: 60,
            max_image_bytes: 5 * 1024 * 1024,
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み。ファイルがなければデフォルト設定
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RecipeMatchError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("recipe-match").join("config.json"))
    }

    /// APIキーを取得（環境変数を優先）
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    /// CLI引数のカタログパスを優先し、なければ設定値
    pub fn catalog_path<'a>(&'a self, cli_override: Option<&'a Path>) -> Option<&'a Path> {
        cli_override.or(self.catalog_path.as_deref())
    }

    /// 設定を必要としないコマンド向けのカタログパス解決
    ///
    /// `--catalog` 指定時は設定ファイルを読まない。設定ファイルが壊れている場合は
    /// 警告を出して組み込みカタログ（`None`）を使う。
    pub fn resolve_catalog_path(cli_override: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = cli_override {
            return Some(path.to_path_buf());
        }
        match Self::config_path() {
            Ok(config_path) => Self::resolve_catalog_path_from(&config_path, None),
            Err(e) => {
                tracing::warn!(error = %e, "config unavailable; using built-in catalog");
                None
            }
        }
    }

    pub fn resolve_catalog_path_from(
        config_path: &Path,
        cli_override: Option<&Path>,
    ) -> Option<PathBuf> {
        if let Some(path) = cli_override {
            return Some(path.to_path_buf());
        }
        match Self::load_from(config_path) {
            Ok(config) => config.catalog_path,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "config could not be loaded; using built-in catalog"
                );
                None
            }
        }
    }
}
