//! エラー型定義

use thiserror::Error;

/// カタログ読み込みエラー
///
/// 起動時に致命的。有効なカタログなしでは何も実行できない。
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Catalog could not be read from {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog data is malformed: {0}")]
    Malformed(String),

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(String),

    #[error("Recipe {id}: {field} must not be empty")]
    EmptyField { id: String, field: &'static str },

    #[error("Recipe {id}: {field} must not be negative")]
    Negative { id: String, field: String },

    #[error("Recipe {id}: {field} must be greater than zero")]
    NotPositive { id: String, field: &'static str },
}

/// 入力検証エラー
///
/// 手入力の食材が不正な場合。呼び出し側では通知せず無視する。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Ingredient must not be empty")]
    EmptyIngredient,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
