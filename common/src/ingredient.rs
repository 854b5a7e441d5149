//! 食材トークンと選択集合
//!
//! ユーザーが手入力または写真検出で追加した食材を保持する。
//! 照合は集合として扱い、表示用に追加順を保持する。

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 食材トークン（小文字化・前後空白除去済み、空でない）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IngredientToken(String);

impl IngredientToken {
    /// 生の入力を正規化してトークンを作る
    ///
    /// # Returns
    /// * `Ok(IngredientToken)` - 正規化済みトークン
    /// * `Err(ValidationError::EmptyIngredient)` - 空または空白のみ
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::EmptyIngredient);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IngredientToken {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<IngredientToken> for String {
    fn from(token: IngredientToken) -> Self {
        token.0
    }
}

impl AsRef<str> for IngredientToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 食材の選択集合（重複なし、追加順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<IngredientToken>", into = "Vec<IngredientToken>")]
pub struct IngredientSet {
    tokens: Vec<IngredientToken>,
}

impl IngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 手入力の食材を追加
    ///
    /// 空入力・重複は何も変更せず `false` を返す（通知不要）
    pub fn add(&mut self, raw: &str) -> bool {
        match IngredientToken::parse(raw) {
            Ok(token) => self.insert(token),
            Err(_) => false,
        }
    }

    /// 正規化済みトークンを追加。既に含まれていれば `false`
    pub fn insert(&mut self, token: IngredientToken) -> bool {
        if self.tokens.contains(&token) {
            return false;
        }
        self.tokens.push(token);
        true
    }

    /// 食材を削除。含まれていなければ `false`
    pub fn remove(&mut self, raw: &str) -> bool {
        let Ok(token) = IngredientToken::parse(raw) else {
            return false;
        };
        let before = self.tokens.len();
        self.tokens.retain(|t| *t != token);
        self.tokens.len() != before
    }

    /// 検出結果などをまとめて追加（和集合）
    ///
    /// # Returns
    /// 新たに追加された件数
    pub fn merge<I>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = IngredientToken>,
    {
        tokens
            .into_iter()
            .map(|t| self.insert(t))
            .filter(|&added| added)
            .count()
    }

    pub fn contains(&self, raw: &str) -> bool {
        IngredientToken::parse(raw)
            .map(|token| self.tokens.contains(&token))
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IngredientToken> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[IngredientToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<IngredientToken> for IngredientSet {
    fn from_iter<I: IntoIterator<Item = IngredientToken>>(iter: I) -> Self {
        let mut set = Self::new();
        set.merge(iter);
        set
    }
}

impl From<Vec<IngredientToken>> for IngredientSet {
    fn from(tokens: Vec<IngredientToken>) -> Self {
        tokens.into_iter().collect()
    }
}

impl From<IngredientSet> for Vec<IngredientToken> {
    fn from(set: IngredientSet) -> Self {
        set.tokens
    }
}

impl<'a> IntoIterator for &'a IngredientSet {
    type Item = &'a IngredientToken;
    type IntoIter = std::slice::Iter<'a, IngredientToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// カンマ区切りの食材リストをトークン列に変換
///
/// 前後空白除去・小文字化し、空要素を除き、重複は最初の出現を残す
///
/// # Examples
/// ```
/// use recipe_match_common::parse_ingredient_list;
///
/// let tokens = parse_ingredient_list("Tomato, basil,, TOMATO ");
/// let names: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(names, vec!["tomato", "basil"]);
/// ```
pub fn parse_ingredient_list(text: &str) -> Vec<IngredientToken> {
    let set: IngredientSet = text
        .split(',')
        .filter_map(|item| IngredientToken::parse(item).ok())
        .collect();
    set.tokens
}
