//! 端末表示モジュール
//!
//! ランキング結果とレシピ詳細を文字列に整形する（読み取り専用）。

use crate::error::Result;
use recipe_match_common::{DietaryFilter, Difficulty, IngredientSet, MatchResult, Recipe};
use std::fmt::Write as _;

/// フィルタ選択肢の既定値
pub const DIETARY_OPTIONS: &[&str] = &["all", "vegetarian", "vegan", "gluten-free"];

/// 難易度の表示名（未知の値はそのまま）
pub fn difficulty_label(difficulty: &Difficulty) -> String {
    match difficulty {
        Difficulty::Easy => "Easy".to_string(),
        Difficulty::Medium => "Medium".to_string(),
        Difficulty::Hard => "Hard".to_string(),
        Difficulty::Other(raw) => raw.clone(),
    }
}

/// 数量の表示（整数なら小数点なし）
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

/// 一覧の1行
pub fn render_card(result: &MatchResult<'_>) -> String {
    let recipe = result.recipe;
    let mut line = String::new();

    if result.match_percentage > 0 {
        let _ = write!(line, "[{:>3}% Match] ", result.match_percentage);
    }
    let _ = write!(
        line,
        "{} ({} Cuisine) | {} | {} min | {} kcal | {} servings | id: {}",
        recipe.title,
        recipe.cuisine,
        difficulty_label(&recipe.difficulty),
        format_quantity(recipe.cook_time),
        format_quantity(recipe.calories),
        format_quantity(recipe.servings),
        recipe.id,
    );
    if !recipe.dietary.is_empty() {
        let _ = write!(line, " | {}", recipe.dietary.join(", "));
    }
    line
}

/// ランキング結果の一覧
pub fn render_results(
    results: &[MatchResult<'_>],
    ingredients: &IngredientSet,
    filter: &DietaryFilter,
) -> String {
    if ingredients.is_empty() {
        return "Add some ingredients to discover amazing recipes!".to_string();
    }

    let mut out = String::new();
    let plural = if results.len() == 1 { "" } else { "s" };
    let _ = writeln!(
        out,
        "Found {} recipe{} matching your ingredients",
        results.len(),
        plural
    );

    if results.is_empty() {
        let label = match filter {
            DietaryFilter::All => String::new(),
            DietaryFilter::Tag(tag) => format!("{} ", tag),
        };
        let _ = writeln!(out, "No {}recipes found with your current ingredients.", label);
        let _ = write!(out, "Try adding more ingredients or changing the dietary filter.");
        return out;
    }

    for result in results {
        let _ = writeln!(out, "  {}", render_card(result));
    }
    out.trim_end().to_string()
}

/// レシピ詳細
pub fn render_detail(recipe: &Recipe) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", recipe.title);
    let _ = writeln!(out, "{} Cuisine", recipe.cuisine);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Time:       {} min", format_quantity(recipe.cook_time));
    let _ = writeln!(out, "  Difficulty: {}", difficulty_label(&recipe.difficulty));
    let _ = writeln!(out, "  Calories:   {}", format_quantity(recipe.calories));
    let _ = writeln!(out, "  Servings:   {}", format_quantity(recipe.servings));
    let _ = writeln!(out);

    let _ = writeln!(out, "Nutrition per Serving");
    let _ = writeln!(
        out,
        "  Protein {}g | Carbs {}g | Fats {}g",
        format_quantity(recipe.protein),
        format_quantity(recipe.carbs),
        format_quantity(recipe.fats)
    );

    if !recipe.dietary.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Dietary: {}", recipe.dietary.join(", "));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Ingredients");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(
            out,
            "  - {} {} {}",
            format_quantity(ingredient.quantity),
            ingredient.unit,
            ingredient.name
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Instructions");
    for (i, step) in recipe.steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }

    out.trim_end().to_string()
}

/// 選択中の食材
pub fn render_ingredients(ingredients: &IngredientSet) -> String {
    if ingredients.is_empty() {
        return "No ingredients selected".to_string();
    }
    let names: Vec<&str> = ingredients.iter().map(|t| t.as_str()).collect();
    format!("Selected ingredients ({}): {}", ingredients.len(), names.join(", "))
}

/// スクリプト向けJSON出力
pub fn results_json(results: &[MatchResult<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
