use thiserror::Error;

/// 食材検出APIの失敗
///
/// 境界で捕捉し、利用者には `user_message()` のみを表示する。
/// 技術的な詳細はログにだけ出す。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectionRelayError {
    #[error("AI gateway API key is not configured")]
    MissingApiKey,

    #[error("AI gateway rate limit exceeded (429)")]
    RateLimited,

    #[error("AI gateway requires additional credits (402)")]
    PaymentRequired,

    #[error("AI gateway returned status {status}")]
    Service { status: u16 },

    #[error("AI gateway request failed: {0}")]
    Network(String),

    #[error("AI gateway response is malformed: {0}")]
    MalformedResponse(String),
}

impl DetectionRelayError {
    /// HTTPステータスから分類。2xxなら `None`
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            429 => Some(Self::RateLimited),
            402 => Some(Self::PaymentRequired),
            _ => Some(Self::Service { status }),
        }
    }

    /// 利用者向けメッセージ（失敗の種類ごとに異なる）
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingApiKey => {
                "Ingredient detection is not configured. Set an API key with `recipe-match config --set-api-key KEY`."
            }
            Self::RateLimited => "Rate limit exceeded. Please try again in a moment.",
            Self::PaymentRequired => "AI service requires additional credits.",
            Self::Service { .. } => "AI service error. Please try again later.",
            Self::Network(_) => "Could not reach the AI service. Check your connection and try again.",
            Self::MalformedResponse(_) => "Could not detect ingredients from image.",
        }
    }
}
