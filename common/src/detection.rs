//! 食材検出のプロンプトとレスポンスパーサー
//!
//! 画像からの食材検出はOpenAI互換のチャットAPIに委譲する。
//! ここではプロンプト定数と、レスポンスから食材リストを取り出す処理のみ扱う。

use crate::error::{Error, Result};
use crate::ingredient::{parse_ingredient_list, IngredientToken};
use serde::Deserialize;

/// システムプロンプト
pub const SYSTEM_PROMPT: &str = "You are an expert at identifying food ingredients from images. \
List all visible ingredients in a clear, comma-separated format. \
Only include actual food items, not containers or utensils. \
Be specific (e.g., \"red bell pepper\" not just \"vegetable\").";

/// ユーザープロンプト（画像と一緒に送る）
pub const USER_PROMPT: &str =
    "What ingredients do you see in this image? List them clearly, separated by commas.";

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// チャットAPIのレスポンスJSONから本文を取り出す
///
/// # Returns
/// * `Ok(String)` - `choices[0].message.content`
/// * `Err(Error::Json)` - JSONとして不正
/// * `Err(Error::Parse)` - 期待するフィールドがない、または本文が空
pub fn parse_chat_completion(body: &str) -> Result<String> {
    let completion: ChatCompletion = serde_json::from_str(body)?;

    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .ok_or_else(|| Error::Parse("choices[0].message.content が見つかりません".into()))?;

    if content.trim().is_empty() {
        return Err(Error::Parse("レスポンス本文が空です".into()));
    }

    Ok(content)
}

/// 検出結果のテキストを食材トークンに変換
///
/// カンマ区切り、小文字化・前後空白除去・空要素除去・重複除去
pub fn detected_ingredients(content: &str) -> Vec<IngredientToken> {
    parse_ingredient_list(content)
}
