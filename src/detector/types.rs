//! AIゲートウェイのリクエスト型（OpenAI互換 chat/completions）

use recipe_match_common::detection::{SYSTEM_PROMPT, USER_PROMPT};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: &'static str,
    pub content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// 検出リクエストを作る
///
/// # Arguments
/// * `model` - モデル名（例: "google/gemini-2.5-flash"）
/// * `image_data_url` - "data:image/jpeg;base64,..." 形式の画像
pub fn build_request(model: &str, image_data_url: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            Message {
                role: "system",
                content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
            },
            Message {
                role: "user",
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: USER_PROMPT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image_data_url.to_string(),
                        },
                    },
                ]),
            },
        ],
    }
}
