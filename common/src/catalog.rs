//! レシピカタログモジュール
//!
//! 起動時に一度だけ読み込まれる不変のレシピ集合。
//! 読み込み時に検証し、不正なデータは `CatalogLoadError` で拒否する。

use crate::error::CatalogLoadError;
use crate::types::Recipe;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// 組み込みカタログ（カタログパス未設定時に使用）
const BUILTIN_CATALOG: &str = include_str!("../data/recipes.json");

/// レシピカタログ
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    /// id → recipes のインデックス
    index: HashMap<String, usize>,
}

impl Catalog {
    /// レシピ列から構築（検証あり）
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self, CatalogLoadError> {
        let mut index = HashMap::with_capacity(recipes.len());

        for (i, recipe) in recipes.iter().enumerate() {
            validate_recipe(recipe)?;
            if index.insert(recipe.id.clone(), i).is_some() {
                return Err(CatalogLoadError::DuplicateId(recipe.id.clone()));
            }
        }

        Ok(Self { recipes, index })
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)
            .map_err(|e| CatalogLoadError::Malformed(e.to_string()))?;
        Self::from_recipes(recipes)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &Path) -> Result<Self, CatalogLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// 組み込みカタログを読み込み
    pub fn builtin() -> Result<Self, CatalogLoadError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// 指定があればファイルから、なければ組み込みカタログを読み込む
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogLoadError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.index.get(id).map(|&i| &self.recipes[i])
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// カタログ内の食事制限タグ一覧（重複なし、ソート済み）
    pub fn dietary_tags(&self) -> Vec<&str> {
        self.recipes
            .iter()
            .flat_map(|r| r.dietary.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn validate_recipe(recipe: &Recipe) -> Result<(), CatalogLoadError> {
    let id = || recipe.id.clone();

    if recipe.id.trim().is_empty() {
        return Err(CatalogLoadError::EmptyField {
            id: recipe.title.clone(),
            field: "id",
        });
    }
    if recipe.ingredients.is_empty() {
        return Err(CatalogLoadError::EmptyField { id: id(), field: "ingredients" });
    }
    if recipe.steps.is_empty() {
        return Err(CatalogLoadError::EmptyField { id: id(), field: "steps" });
    }
    // 空の材料名は全ての食材に部分一致してしまう
    if recipe.ingredients.iter().any(|i| i.name.trim().is_empty()) {
        return Err(CatalogLoadError::EmptyField { id: id(), field: "ingredients.name" });
    }

    let positives = [("cookTime", recipe.cook_time), ("servings", recipe.servings)];
    for (field, value) in positives {
        if value.is_nan() || value <= 0.0 {
            return Err(CatalogLoadError::NotPositive { id: id(), field });
        }
    }

    let nutrients = [
        ("calories", recipe.calories),
        ("protein", recipe.protein),
        ("carbs", recipe.carbs),
        ("fats", recipe.fats),
    ];
    for (field, value) in nutrients {
        if !is_non_negative(value) {
            return Err(CatalogLoadError::Negative { id: id(), field: field.to_string() });
        }
    }
    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
        if !is_non_negative(ingredient.quantity) {
            return Err(CatalogLoadError::Negative {
                id: id(),
                field: format!("ingredients[{}].quantity", i),
            });
        }
    }

    Ok(())
}

/// NaNも不正として扱う
fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}
