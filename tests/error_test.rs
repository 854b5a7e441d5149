//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use recipe_match::common::{Catalog, CatalogLoadError};
use recipe_match::config::Config;
use recipe_match::detector::{self, DetectionRelayError};
use recipe_match::error::RecipeMatchError;
use recipe_match::photo;
use recipe_match::session::{Notification, Session};
use std::path::Path;
use tempfile::tempdir;

/// 存在しない写真
#[test]
fn test_load_nonexistent_photo() {
    let result = photo::load_photo(Path::new("/nonexistent/path/12345.jpg"), 1024);
    assert!(matches!(result, Err(RecipeMatchError::FileNotFound(_))));
}

/// 非対応の拡張子
#[test]
fn test_load_unsupported_photo() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let result = photo::load_photo(&path, 1024);
    assert!(matches!(result, Err(RecipeMatchError::UnsupportedImage(_))));
}

/// サイズ超過はリクエスト前に拒否
#[test]
fn test_load_oversized_photo() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fridge.jpg");
    std::fs::write(&path, vec![0u8; 2048]).unwrap();

    let err = photo::load_photo(&path, 1024).unwrap_err();
    assert!(matches!(err, RecipeMatchError::ImageTooLarge { size: 2048, limit: 1024 }));
}

/// 壊れたカタログは起動時エラー
#[test]
fn test_broken_catalog_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("recipes.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Catalog::load(Some(&path)).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Malformed(_)));

    let err: RecipeMatchError = err.into();
    assert!(err.to_string().contains("malformed"));
}

#[test]
fn test_missing_catalog_file() {
    let err = Catalog::load(Some(Path::new("/nonexistent/recipes.json"))).unwrap_err();
    assert!(matches!(err, CatalogLoadError::Unreadable { .. }));
}

/// APIキー未設定なら失敗通知になり、食材集合は変わらない
#[tokio::test]
async fn test_detect_without_api_key() {
    if std::env::var(recipe_match::config::API_KEY_ENV).is_ok() {
        eprintln!("API key set in environment; skipping");
        return;
    }

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fridge.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let catalog = Catalog::builtin().unwrap();
    let mut session = Session::new(&catalog);
    session.add_ingredient("rice");

    let config = Config::default();
    let notification = detector::detect_into_session(&mut session, &config, &path)
        .await
        .unwrap();

    assert_eq!(
        notification,
        Notification::Failed {
            message: DetectionRelayError::MissingApiKey.user_message()
        }
    );
    assert_eq!(session.ingredients().len(), 1);
    assert!(!session.is_detecting());
}

/// RecipeMatchErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        RecipeMatchError::Config("bad config".to_string()),
        RecipeMatchError::FileNotFound("test.jpg".to_string()),
        RecipeMatchError::UnsupportedImage("test.bmp".to_string()),
        RecipeMatchError::ImageTooLarge { size: 6 * 1024 * 1024, limit: 5 * 1024 * 1024 },
        RecipeMatchError::RecipeNotFound("42".to_string()),
        RecipeMatchError::Detection(DetectionRelayError::RateLimited),
        RecipeMatchError::Prompt("closed".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Error display should not be empty");
    }

    let too_large = RecipeMatchError::ImageTooLarge { size: 6 * 1024 * 1024, limit: 5 * 1024 * 1024 };
    assert!(too_large.to_string().contains("smaller than 5MB"));
}
