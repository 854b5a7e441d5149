//! 食材検出モジュール
//!
//! 写真をOpenAI互換のAIゲートウェイに送り、写っている食材を取得する。
//! 失敗は `DetectionRelayError` に分類し、利用者向けメッセージに変換する。
//! 同時に処理中の検出は1件のみ（`DetectionTracker`）。

mod error;
mod gateway;
mod tracker;
mod types;

pub use error::DetectionRelayError;
pub use gateway::DetectionClient;
pub use tracker::{DetectionTicket, DetectionTracker};
pub use types::{build_request, ChatRequest};

use crate::config::Config;
use crate::error::Result;
use crate::photo;
use crate::session::{Notification, Session};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// 写真から食材を検出してセッションにマージ
///
/// 画像の読み込みエラー（サイズ超過など）は `Err` で返す。
/// 検出APIの失敗は `Notification::Failed` になり、食材集合は変わらない。
pub async fn detect_into_session(
    session: &mut Session<'_>,
    config: &Config,
    photo_path: &Path,
) -> Result<Notification> {
    let payload = photo::load_photo(photo_path, config.max_image_bytes)?;

    let client = match DetectionClient::from_config(config) {
        Ok(client) => client,
        Err(err) => {
            let ticket = session.begin_detection();
            return Ok(session.apply_detection(ticket, Err(err)));
        }
    };

    let ticket = session.begin_detection();
    let spinner = spinner("Detecting ingredients...");
    let outcome = client.detect(&payload).await;
    spinner.finish_and_clear();

    Ok(session.apply_detection(ticket, outcome))
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
