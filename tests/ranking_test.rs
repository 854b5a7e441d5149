//! 組み込みカタログでのランキング統合テスト

use recipe_match::common::{rank, Catalog, DietaryFilter, IngredientSet};
use recipe_match::presenter;
use recipe_match::session::Session;

fn ingredients(items: &[&str]) -> IngredientSet {
    let mut set = IngredientSet::new();
    for item in items {
        set.add(item);
    }
    set
}

fn ids(results: &[recipe_match::common::MatchResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.recipe.id.clone()).collect()
}

#[test]
fn test_builtin_catalog_is_valid() {
    let catalog = Catalog::builtin().expect("builtin catalog must load");
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.dietary_tags(), vec!["gluten-free", "vegan", "vegetarian"]);
}

/// 一致率20%ちょうどは除外される
#[test]
fn test_single_common_ingredient_below_threshold() {
    let catalog = Catalog::builtin().unwrap();
    let results = rank(&ingredients(&["garlic"]), catalog.recipes(), &DietaryFilter::All);
    assert!(results.is_empty());
}

#[test]
fn test_ranking_order_and_percentages() {
    let catalog = Catalog::builtin().unwrap();
    let results = rank(
        &ingredients(&["onion", "garlic", "ginger"]),
        catalog.recipes(),
        &DietaryFilter::All,
    );

    assert_eq!(ids(&results), vec!["6", "1", "3"]);
    let percentages: Vec<u8> = results.iter().map(|r| r.match_percentage).collect();
    assert_eq!(percentages, vec![43, 33, 33]);
}

#[test]
fn test_dietary_filter_after_ranking() {
    let catalog = Catalog::builtin().unwrap();
    let set = ingredients(&["garlic", "onion"]);

    let all = rank(&set, catalog.recipes(), &DietaryFilter::All);
    assert_eq!(ids(&all), vec!["1", "6"]);

    let vegan = rank(&set, catalog.recipes(), &DietaryFilter::from("vegan"));
    assert_eq!(ids(&vegan), vec!["6"]);

    let unknown = rank(&set, catalog.recipes(), &DietaryFilter::from("keto"));
    assert!(unknown.is_empty());
}

/// 部分一致は双方向
#[test]
fn test_partial_names_match_both_ways() {
    let catalog = Catalog::builtin().unwrap();

    let results = rank(
        &ingredients(&["tomato", "basil", "pasta"]),
        catalog.recipes(),
        &DietaryFilter::All,
    );
    assert_eq!(ids(&results), vec!["2"]);
    assert_eq!(results[0].match_percentage, 60);

    let results = rank(
        &ingredients(&["chicken breast fillet", "rice"]),
        catalog.recipes(),
        &DietaryFilter::All,
    );
    assert_eq!(ids(&results), vec!["1"]);
}

#[test]
fn test_session_renders_like_cli() {
    let catalog = Catalog::builtin().unwrap();
    let mut session = Session::new(&catalog);
    for item in "Tomato, basil ,PASTA,".split(',') {
        session.add_ingredient(item);
    }
    assert_eq!(session.ingredients().len(), 3);

    let results = session.results();
    let text = presenter::render_results(&results, session.ingredients(), session.dietary_filter());
    assert!(text.starts_with("Found 1 recipe matching your ingredients"));
    assert!(text.contains("[ 60% Match] Tomato Basil Pasta"));

    let json = presenter::results_json(&results).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["id"], "2");
    assert_eq!(value[0]["matchPercentage"], 60);
}
