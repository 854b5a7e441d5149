//! 対話式食材入力モジュール
//!
//! 食材を1つずつ追加・削除しながら、その都度ランキングを表示する。

use crate::config::Config;
use crate::detector;
use crate::error::{RecipeMatchError, Result};
use crate::presenter;
use crate::session::{Notification, Session};
use dialoguer::Input;
use recipe_match_common::{Catalog, DietaryFilter};
use std::path::PathBuf;

const HELP: &str = "\
操作:
  <食材>[,<食材>...]  食材を追加（カンマで区切ると複数追加）
  -<食材>             食材を削除
  :photo <パス>       写真から食材を検出
  :diet <タグ|all>    食事制限フィルタ
  :show <ID>          レシピ詳細
  :clear              食材をすべて削除
  [Enter]             結果を再表示
  :q                  終了";

/// 対話アクション
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// 食材を追加（カンマ区切り可）
    Add(String),
    /// 食材を削除
    Remove(String),
    /// 写真から検出
    Photo(PathBuf),
    /// フィルタ変更
    Diet(DietaryFilter),
    /// レシピ詳細
    Show(String),
    /// 再表示
    List,
    /// 食材をすべて削除
    Clear,
    Help,
    Quit,
}

/// 入力行をアクションに変換
pub fn parse_action(input: &str) -> SessionAction {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return SessionAction::List;
    }

    if let Some(command) = trimmed.strip_prefix(':') {
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        return match name {
            "q" | "quit" => SessionAction::Quit,
            "clear" => SessionAction::Clear,
            "photo" if !arg.is_empty() => SessionAction::Photo(PathBuf::from(arg)),
            "diet" if !arg.is_empty() => SessionAction::Diet(DietaryFilter::from(arg)),
            "show" if !arg.is_empty() => SessionAction::Show(arg.to_string()),
            _ => SessionAction::Help,
        };
    }

    if trimmed == "?" {
        return SessionAction::Help;
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        return SessionAction::Remove(rest.trim().to_string());
    }

    SessionAction::Add(trimmed.to_string())
}

/// 追加入力を食材ごとに分ける
///
/// 1行に複数の食材をカンマ区切りで書ける（`rank` の引数と同じ）。
/// 空の要素は `Session::add_ingredient` 側で無視される。
pub fn entry_items(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
}

/// 対話セッションを実行
pub async fn run_interactive(catalog: &Catalog, config: &Config) -> Result<()> {
    let mut session = Session::new(catalog);

    println!("🍳 recipe-match - What's in Your Kitchen?");
    println!("---");
    println!("{}", HELP);
    println!("---");
    println!("Dietary filters: {}\n", presenter::DIETARY_OPTIONS.join(", "));

    loop {
        let prompt = format!("Ingredient [{}]", session.dietary_filter());
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| RecipeMatchError::Prompt(e.to_string()))?;

        match parse_action(&input) {
            SessionAction::Add(raw) => {
                for item in entry_items(&raw) {
                    session.add_ingredient(item);
                }
            }
            SessionAction::Remove(raw) => {
                if !session.remove_ingredient(&raw) {
                    println!("  → not in your list: {}", raw);
                }
            }
            SessionAction::Photo(path) => {
                match detector::detect_into_session(&mut session, config, &path).await {
                    Ok(Notification::Detected { found, added }) => {
                        println!("✔ Ingredients detected! Found {} ingredients ({} new)", found, added);
                    }
                    Ok(Notification::Failed { message }) => println!("✖ Detection failed: {}", message),
                    Ok(Notification::Ignored) => {}
                    // サイズ超過などは通知して続行
                    Err(e) => println!("✖ {}", e),
                }
            }
            SessionAction::Diet(filter) => session.set_dietary_filter(filter),
            SessionAction::Show(id) => {
                match session.select(&id) {
                    Some(recipe) => println!("\n{}\n", presenter::render_detail(recipe)),
                    None => println!("  → recipe not found: {}", id),
                }
                session.clear_selection();
                continue;
            }
            SessionAction::List => {}
            SessionAction::Clear => session.clear_ingredients(),
            SessionAction::Help => {
                println!("{}", HELP);
                continue;
            }
            SessionAction::Quit => break,
        }

        println!("{}", presenter::render_ingredients(session.ingredients()));
        let results = session.results();
        println!(
            "{}\n",
            presenter::render_results(&results, session.ingredients(), session.dietary_filter())
        );
    }

    Ok(())
}
