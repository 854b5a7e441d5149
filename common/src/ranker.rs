//! 一致率ランキングモジュール
//!
//! ユーザーの食材集合とカタログから、一致率付きのレシピ一覧を作る。
//! 状態を持たない純粋関数で、入力が変わるたびに呼び直す。
//!
//! ## 処理フロー
//! 1. 食材が空なら空の一覧を返す
//! 2. レシピごとに一致率を計算（双方向の部分一致）
//! 3. 一致率 20% 以下を除外
//! 4. 一致率の降順で安定ソート（同率はカタログ順）
//! 5. 食事制限タグで絞り込み（一致率は変えない）

use crate::ingredient::{IngredientSet, IngredientToken};
use crate::types::{MatchResult, Recipe};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// この一致率以下のレシピは表示しない（固定ルール）
pub const MATCH_THRESHOLD: u8 = 20;

/// 食事制限フィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietaryFilter {
    /// 絞り込みなし（"all"）
    #[default]
    All,
    /// タグの完全一致（大文字小文字を区別）
    Tag(String),
}

impl DietaryFilter {
    pub fn accepts(&self, recipe: &Recipe) -> bool {
        match self {
            DietaryFilter::All => true,
            DietaryFilter::Tag(tag) => recipe.has_dietary_tag(tag),
        }
    }
}

impl From<String> for DietaryFilter {
    fn from(raw: String) -> Self {
        if raw == "all" {
            DietaryFilter::All
        } else {
            DietaryFilter::Tag(raw)
        }
    }
}

impl From<&str> for DietaryFilter {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl FromStr for DietaryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<DietaryFilter> for String {
    fn from(filter: DietaryFilter) -> Self {
        match filter {
            DietaryFilter::All => "all".to_string(),
            DietaryFilter::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for DietaryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietaryFilter::All => f.write_str("all"),
            DietaryFilter::Tag(tag) => f.write_str(tag),
        }
    }
}

/// 食材トークンがレシピの材料名に一致するか
///
/// どちらかがもう一方の部分文字列なら一致とみなす。
/// "pepper" は "red bell pepper" に、"red bell pepper" は "pepper" に一致する。
/// 短い名前は無関係な語にも一致しうる（精度より再現率を優先した近似）。
///
/// # Arguments
/// * `token` - 小文字化済みの食材トークン
/// * `ingredient_name` - 小文字化済みの材料名
pub fn ingredient_matches(token: &str, ingredient_name: &str) -> bool {
    ingredient_name.contains(token) || token.contains(ingredient_name)
}

/// レシピの一致率を計算
///
/// 分母はレシピ自身の材料数。ユーザーの食材が全て一致しても、
/// 材料の多いレシピは低い値になる。
///
/// # Returns
/// `round(100 * 一致した食材数 / 材料数)`。複数の食材が同じ材料に
/// 一致して100を超える場合は100に丸める。
pub fn match_percentage(tokens: &[IngredientToken], recipe: &Recipe) -> u8 {
    let names: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|i| i.name.to_lowercase())
        .collect();

    if names.is_empty() {
        return 0;
    }

    let matched = tokens
        .iter()
        .filter(|token| names.iter().any(|name| ingredient_matches(token.as_str(), name)))
        .count();

    let percentage = (matched as f64 / names.len() as f64 * 100.0).round();
    percentage.min(100.0) as u8
}

/// 食材集合でカタログをランキング
///
/// # Arguments
/// * `ingredients` - ユーザーの食材集合
/// * `recipes` - カタログのレシピ（不変）
/// * `filter` - 食事制限フィルタ（ランキング後に適用）
///
/// # Returns
/// 一致率の降順に並んだ結果。食材が空なら空。
pub fn rank<'a>(
    ingredients: &IngredientSet,
    recipes: &'a [Recipe],
    filter: &DietaryFilter,
) -> Vec<MatchResult<'a>> {
    if ingredients.is_empty() {
        return Vec::new();
    }

    let tokens = ingredients.as_slice();

    let mut ranked: Vec<MatchResult<'a>> = recipes
        .iter()
        .map(|recipe| MatchResult {
            recipe,
            match_percentage: match_percentage(tokens, recipe),
        })
        .filter(|result| result.match_percentage > MATCH_THRESHOLD)
        .collect();

    // sort_by は安定ソート
    ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

    ranked.retain(|result| filter.accepts(result.recipe));
    ranked
}
