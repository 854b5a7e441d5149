//! 写真読み込みモジュール
//!
//! 食材検出に送る画像を読み込み、Data URL に変換する。

use crate::error::{RecipeMatchError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// 検出APIに送れる画像形式
const SUPPORTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::WebP,
    ImageFormat::Gif,
];

#[derive(Debug, Clone)]
pub struct PhotoPayload {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: &'static str,
    pub size: u64,
    /// "data:image/jpeg;base64,..." 形式
    pub data_url: String,
}

/// 拡張子から対応形式か判定（大文字小文字を区別しない）
pub fn supported_format(path: &Path) -> Option<ImageFormat> {
    ImageFormat::from_path(path)
        .ok()
        .filter(|format| SUPPORTED_FORMATS.contains(format))
}

/// 写真を読み込んで送信用のペイロードを作る
///
/// # Arguments
/// * `path` - 画像ファイル
/// * `max_bytes` - 許容する最大サイズ
pub fn load_photo(path: &Path, max_bytes: u64) -> Result<PhotoPayload> {
    if !path.is_file() {
        return Err(RecipeMatchError::FileNotFound(path.display().to_string()));
    }

    let format = supported_format(path)
        .ok_or_else(|| RecipeMatchError::UnsupportedImage(path.display().to_string()))?;

    // 読み込む前にサイズを確認
    let size = std::fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(RecipeMatchError::ImageTooLarge { size, limit: max_bytes });
    }

    let bytes = std::fs::read(path)?;
    let mime_type = format.to_mime_type();
    let data_url = format!("data:{};base64,{}", mime_type, STANDARD.encode(&bytes));

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    tracing::debug!(file = %file_name, size, mime_type, "photo loaded");

    Ok(PhotoPayload {
        path: path.to_path_buf(),
        file_name,
        mime_type,
        size,
        data_url,
    })
}
