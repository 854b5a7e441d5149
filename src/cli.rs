use clap::{Parser, Subcommand};
use recipe_match_common::DietaryFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-match")]
#[command(about = "Find recipes that match the ingredients you have", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// レシピカタログJSON（未指定なら設定値、なければ組み込みカタログ）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 食材からレシピをランキング
    Rank {
        /// 食材（スペース区切りの引数、またはカンマ区切り）
        #[arg(required = true, value_delimiter = ',')]
        ingredients: Vec<String>,

        /// 食事制限フィルタ (all/vegetarian/vegan/gluten-free など)
        #[arg(short, long, default_value = "all")]
        diet: DietaryFilter,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 写真から食材を検出してランキング
    Detect {
        /// 写真ファイル (jpg/png/webp/gif)
        #[arg(required = true)]
        photo: PathBuf,

        /// 検出結果に追加する食材（カンマ区切り）
        #[arg(short = 'w', long = "with", value_delimiter = ',')]
        with: Vec<String>,

        /// 食事制限フィルタ
        #[arg(short, long, default_value = "all")]
        diet: DietaryFilter,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// レシピ詳細を表示
    Show {
        /// レシピID
        #[arg(required = true)]
        id: String,
    },

    /// 対話モードで食材を入力
    Interactive,

    /// カタログを検証して概要を表示
    Catalog,

    /// 設定
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rank_with_commas_and_spaces() {
        let cli = Cli::try_parse_from([
            "recipe-match",
            "rank",
            "chicken,garlic",
            "red bell pepper",
            "--diet",
            "vegan",
        ])
        .unwrap();

        match cli.command {
            Commands::Rank { ingredients, diet, json } => {
                assert_eq!(ingredients, vec!["chicken", "garlic", "red bell pepper"]);
                assert_eq!(diet, DietaryFilter::Tag("vegan".into()));
                assert!(!json);
            }
            _ => panic!("Expected Rank"),
        }
    }

    #[test]
    fn test_parse_rank_default_diet() {
        let cli = Cli::try_parse_from(["recipe-match", "rank", "rice"]).unwrap();
        match cli.command {
            Commands::Rank { diet, .. } => assert_eq!(diet, DietaryFilter::All),
            _ => panic!("Expected Rank"),
        }
    }

    #[test]
    fn test_parse_rank_requires_ingredients() {
        assert!(Cli::try_parse_from(["recipe-match", "rank"]).is_err());
    }

    #[test]
    fn test_parse_detect() {
        let cli = Cli::try_parse_from([
            "recipe-match",
            "--verbose",
            "detect",
            "fridge.jpg",
            "--with",
            "salt,pepper",
            "--catalog",
            "my.json",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.catalog, Some(PathBuf::from("my.json")));
        match cli.command {
            Commands::Detect { photo, with, .. } => {
                assert_eq!(photo, PathBuf::from("fridge.jpg"));
                assert_eq!(with, vec!["salt", "pepper"]);
            }
            _ => panic!("Expected Detect"),
        }
    }
}
