//! Recipe Match Common Library
//!
//! CLIと対話セッションで共有される型とロジック:
//! - レシピカタログの読み込みと検証
//! - 食材トークンと選択集合
//! - 一致率によるランキング
//! - 食材検出レスポンスのパース

pub mod types;
pub mod error;
pub mod ingredient;
pub mod catalog;
pub mod ranker;
pub mod detection;

pub use types::{Difficulty, MatchResult, Recipe, RecipeIngredient};
pub use error::{CatalogLoadError, Error, Result, ValidationError};
pub use ingredient::{parse_ingredient_list, IngredientSet, IngredientToken};
pub use catalog::Catalog;
pub use ranker::{ingredient_matches, match_percentage, rank, DietaryFilter, MATCH_THRESHOLD};
pub use detection::{detected_ingredients, parse_chat_completion};
