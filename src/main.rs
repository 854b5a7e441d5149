use clap::Parser;
use recipe_match::{cli, config, detector, error, interactive, logging, presenter, session};
use recipe_match::common::Catalog;
use cli::{Cli, Commands};
use config::Config;
use error::{RecipeMatchError, Result};
use session::{Notification, Session};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let catalog_override = cli.catalog.as_deref();

    match cli.command {
        Commands::Rank { ingredients, diet, json } => {
            let catalog = load_catalog(Config::resolve_catalog_path(catalog_override).as_deref())?;
            let mut session = Session::new(&catalog);
            for item in &ingredients {
                session.add_ingredient(item);
            }
            session.set_dietary_filter(diet);
            print_results(&session, json)?;
        }

        Commands::Detect { photo, with, diet, json } => {
            let config = Config::load()?;
            let catalog = load_catalog(config.catalog_path(catalog_override))?;
            let mut session = Session::new(&catalog);
            session.set_dietary_filter(diet);
            for item in &with {
                session.add_ingredient(item);
            }

            if !json {
                println!("📸 recipe-match - 食材検出\n");
            }
            match detector::detect_into_session(&mut session, &config, &photo).await? {
                Notification::Detected { found, added } => {
                    if !json {
                        println!("✔ Ingredients detected! Found {} ingredients ({} new)", found, added);
                        println!("{}\n", presenter::render_ingredients(session.ingredients()));
                    }
                }
                Notification::Failed { message } => eprintln!("✖ Detection failed: {}", message),
                Notification::Ignored => {}
            }

            print_results(&session, json)?;
        }

        Commands::Show { id } => {
            let catalog = load_catalog(Config::resolve_catalog_path(catalog_override).as_deref())?;
            let recipe = catalog
                .get(&id)
                .ok_or_else(|| RecipeMatchError::RecipeNotFound(id.clone()))?;
            println!("{}", presenter::render_detail(recipe));
        }

        Commands::Interactive => {
            let config = Config::load()?;
            let catalog = load_catalog(config.catalog_path(catalog_override))?;
            interactive::run_interactive(&catalog, &config).await?;
        }

        Commands::Catalog => {
            let path = Config::resolve_catalog_path(catalog_override);
            let source = path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string());
            let catalog = load_catalog(path.as_deref())?;

            println!("✔ Catalog is valid");
            println!("  Source:  {}", source);
            println!("  Recipes: {}", catalog.len());
            println!("  Dietary tags: {}", catalog.dietary_tags().join(", "));
        }

        Commands::Config { set_api_key, show } => {
            let mut config = Config::load()?;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if show {
                println!("Settings:");
                println!("  Model:       {}", config.model);
                println!("  Gateway:     {}", config.gateway_url);
                println!("  Timeout:     {}s", config.timeout_seconds);
                println!("  Max image:   {} bytes", config.max_image_bytes);
                println!(
                    "  Catalog:     {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(built-in)".to_string())
                );
                println!("  API key:     {}", if config.api_key().is_some() { "set" } else { "not set" });
            }
        }
    }

    Ok(())
}

/// カタログ読み込み（不正なら起動エラー）
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = Catalog::load(path)?;
    tracing::debug!(recipes = catalog.len(), path = ?path, "catalog loaded");
    Ok(catalog)
}

fn print_results(session: &Session<'_>, json: bool) -> Result<()> {
    let results = session.results();
    if json {
        println!("{}", presenter::results_json(&results)?);
    } else {
        println!("{}", presenter::render_ingredients(session.ingredients()));
        println!(
            "{}",
            presenter::render_results(&results, session.ingredients(), session.dietary_filter())
        );
    }
    Ok(())
}
