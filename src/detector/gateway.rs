//! AIゲートウェイ呼び出し

use super::error::DetectionRelayError;
use super::types::build_request;
use crate::config::Config;
use crate::photo::PhotoPayload;
use recipe_match_common::{detected_ingredients, parse_chat_completion, IngredientToken};
use std::time::{Duration, Instant};

/// ログに残すエラー本文の最大文字数
const ERROR_BODY_PREVIEW: usize = 500;

/// 食材検出クライアント
#[derive(Clone)]
pub struct DetectionClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl std::fmt::Debug for DetectionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionClient")
            .field("url", &self.url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl DetectionClient {
    /// 設定から作成。APIキーがなければ `MissingApiKey`
    pub fn from_config(config: &Config) -> Result<Self, DetectionRelayError> {
        let api_key = config.api_key().ok_or(DetectionRelayError::MissingApiKey)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| DetectionRelayError::Network(e.to_string()))?;

        Ok(Self {
            http,
            url: config.gateway_url.clone(),
            api_key,
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// 写真から食材を検出
    ///
    /// # Returns
    /// 小文字化・重複除去済みの食材トークン（0件もありうる）
    pub async fn detect(&self, photo: &PhotoPayload) -> Result<Vec<IngredientToken>, DetectionRelayError> {
        let request = build_request(&self.model, &photo.data_url);
        let started = Instant::now();

        tracing::debug!(url = %self.url, model = %self.model, file = %photo.file_name, "sending detection request");

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "AI gateway request failed");
                DetectionRelayError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DetectionRelayError::Network(e.to_string()))?;

        tracing::debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            body_len = body.len(),
            "AI gateway responded"
        );

        if let Some(err) = DetectionRelayError::from_status(status.as_u16()) {
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            tracing::warn!(status = status.as_u16(), body = %preview, "AI gateway error");
            return Err(err);
        }

        ingredients_from_body(&body)
    }
}

/// 成功レスポンスの本文から食材を取り出す
pub(crate) fn ingredients_from_body(body: &str) -> Result<Vec<IngredientToken>, DetectionRelayError> {
    let content = parse_chat_completion(body).map_err(|e| {
        tracing::warn!(error = %e, "unexpected AI gateway response");
        DetectionRelayError::MalformedResponse(e.to_string())
    })?;

    let ingredients = detected_ingredients(&content);
    tracing::info!(count = ingredients.len(), "ingredients detected");
    Ok(ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_without_key() {
        if std::env::var(crate::config::API_KEY_ENV).is_ok() {
            return;
        }
        let config = Config::default();
        assert_eq!(
            DetectionClient::from_config(&config).unwrap_err(),
            DetectionRelayError::MissingApiKey
        );
    }

    #[test]
    fn test_from_config_with_key() {
        let config = Config {
            api_key: Some("test-key".into()),
            model: "test/model".into(),
            ..Default::default()
        };
        let client = DetectionClient::from_config(&config).unwrap();
        assert_eq!(client.model(), "test/model");
    }

    #[test]
    fn test_ingredients_from_body() {
        let body = r#"{"choices": [{"message": {"content": "Eggs, Spinach, feta cheese"}}]}"#;
        let tokens = ingredients_from_body(body).unwrap();
        let names: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["eggs", "spinach", "feta cheese"]);
    }

    #[test]
    fn test_ingredients_from_body_malformed() {
        assert!(matches!(
            ingredients_from_body("not json"),
            Err(DetectionRelayError::MalformedResponse(_))
        ));
        assert!(matches!(
            ingredients_from_body(r#"{"choices": []}"#),
            Err(DetectionRelayError::MalformedResponse(_))
        ));
    }
}
