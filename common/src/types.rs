//! レシピの型定義
//!
//! - Recipe: カタログの1レコード（読み込み後は不変）
//! - RecipeIngredient: レシピの材料1行
//! - Difficulty: 難易度（未知の値はそのまま保持）
//! - MatchResult: ランキング結果（一致率付き、毎回再計算）

use serde::{Deserialize, Serialize};
use std::fmt;

/// レシピの材料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// 材料名（自由記述、大文字小文字は正規化されていない）
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// 難易度
///
/// easy/medium/hard（小文字の完全一致）以外の値はエラーにせず
/// `Other` として綴りのまま保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Other(raw) => raw,
        }
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other(raw),
        }
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// レシピ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub cuisine: String,
    pub difficulty: Difficulty,

    /// 調理時間（分）
    pub cook_time: f64,
    pub servings: f64,
    pub calories: f64,

    // 栄養素（g）
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,

    /// 食事制限タグ（vegan, gluten-free など）
    #[serde(default)]
    pub dietary: Vec<String>,

    pub ingredients: Vec<RecipeIngredient>,
    pub steps: Vec<String>,
}

impl Recipe {
    /// 食事制限タグを持つか（大文字小文字を区別する完全一致）
    pub fn has_dietary_tag(&self, tag: &str) -> bool {
        self.dietary.iter().any(|t| t == tag)
    }
}

/// ランキング結果
///
/// カタログのレシピを借用し、一致率を付与したもの。
/// シリアライズ時はレシピのフィールドと `matchPercentage` が同じ階層に並ぶ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    #[serde(flatten)]
    pub recipe: &'a Recipe,

    /// 0〜100の整数
    pub match_percentage: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPE_JSON: &str = r#"{
        "id": "r1",
        "title": "Garlic Chicken Rice",
        "cuisine": "Asian",
        "difficulty": "easy",
        "cookTime": 30,
        "servings": 2,
        "calories": 520,
        "protein": 38,
        "carbs": 55.5,
        "fats": 12,
        "dietary": ["gluten-free"],
        "ingredients": [
            {"name": "Chicken", "quantity": 300, "unit": "g"},
            {"name": "Garlic", "quantity": 3, "unit": "cloves"}
        ],
        "steps": ["Cook rice.", "Fry chicken with garlic."]
    }"#;

    #[test]
    fn test_recipe_deserialize() {
        let recipe: Recipe = serde_json::from_str(RECIPE_JSON).expect("デシリアライズ失敗");
        assert_eq!(recipe.id, "r1");
        assert_eq!(recipe.cook_time, 30.0);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.carbs, 55.5);
        assert_eq!(recipe.ingredients[1].unit, "cloves");
        assert!(recipe.has_dietary_tag("gluten-free"));
        assert!(!recipe.has_dietary_tag("Gluten-Free"));
    }

    #[test]
    fn test_recipe_missing_dietary_defaults_empty() {
        let json = RECIPE_JSON.replace(r#""dietary": ["gluten-free"],"#, "");
        let recipe: Recipe = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert!(recipe.dietary.is_empty());
    }

    #[test]
    fn test_recipe_missing_required_field() {
        let json = RECIPE_JSON.replace(r#""cuisine": "Asian","#, "");
        assert!(serde_json::from_str::<Recipe>(&json).is_err());
    }

    #[test]
    fn test_difficulty_unknown_is_passed_through() {
        let difficulty: Difficulty = serde_json::from_str(r#""expert""#).unwrap();
        assert_eq!(difficulty, Difficulty::Other("expert".to_string()));
        assert_eq!(serde_json::to_string(&difficulty).unwrap(), r#""expert""#);
    }

    #[test]
    fn test_difficulty_keeps_raw_spelling() {
        assert_eq!(Difficulty::from("medium".to_string()), Difficulty::Medium);
        assert_eq!(Difficulty::from("Easy".to_string()), Difficulty::Other("Easy".to_string()));

        let difficulty: Difficulty = serde_json::from_str(r#""HARD""#).unwrap();
        assert_eq!(serde_json::to_string(&difficulty).unwrap(), r#""HARD""#);
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }

    #[test]
    fn test_recipe_fractional_numbers() {
        let json = RECIPE_JSON
            .replace(r#""cookTime": 30"#, r#""cookTime": 7.5"#)
            .replace(r#""calories": 520"#, r#""calories": 450.5"#);
        let recipe: Recipe = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(recipe.cook_time, 7.5);
        assert_eq!(recipe.calories, 450.5);
    }

    #[test]
    fn test_match_result_serialize_flattens_recipe() {
        let recipe: Recipe = serde_json::from_str(RECIPE_JSON).unwrap();
        let result = MatchResult {
            recipe: &recipe,
            match_percentage: 50,
        };

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":\"r1\""));
        assert!(json.contains("\"cookTime\":30"));
        assert!(json.contains("\"matchPercentage\":50"));
    }
}
