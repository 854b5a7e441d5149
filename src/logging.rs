//! ログ初期化
//!
//! 利用者向けの進捗は stdout に直接出力し、診断情報は tracing に流す。
//! `RUST_LOG` があればそれを優先する。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `--verbose` 指定時は debug、それ以外は warn
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "recipe_match=debug,warn"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    // テストなどで二重初期化された場合は既存のsubscriberを使う
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(verbose).with_writer(std::io::stderr))
        .try_init();
}
