//! 食材入力セッション
//!
//! 食材集合・食事制限フィルタ・選択中のレシピを保持し、
//! 変更のたびにランキングを呼び直す。ランキング自体は状態を持たない。

use crate::detector::{DetectionRelayError, DetectionTicket, DetectionTracker};
use recipe_match_common::{
    rank, Catalog, DietaryFilter, IngredientSet, IngredientToken, MatchResult, Recipe,
};

/// 利用者への通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// 検出成功（検出件数と新規追加件数）
    Detected { found: usize, added: usize },
    /// 検出失敗（食材集合は変更なし）
    Failed { message: &'static str },
    /// 古いリクエストの結果なので無視した
    Ignored,
}

#[derive(Debug)]
pub struct Session<'c> {
    catalog: &'c Catalog,
    ingredients: IngredientSet,
    filter: DietaryFilter,
    selected: Option<&'c Recipe>,
    detection: DetectionTracker,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            ingredients: IngredientSet::new(),
            filter: DietaryFilter::All,
            selected: None,
            detection: DetectionTracker::new(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn ingredients(&self) -> &IngredientSet {
        &self.ingredients
    }

    /// 手入力の食材を追加。空入力・重複は黙って無視する
    pub fn add_ingredient(&mut self, raw: &str) -> bool {
        let added = self.ingredients.add(raw);
        if !added {
            tracing::debug!(input = raw, "ingredient rejected");
        }
        added
    }

    pub fn remove_ingredient(&mut self, raw: &str) -> bool {
        self.ingredients.remove(raw)
    }

    pub fn clear_ingredients(&mut self) {
        self.ingredients.clear();
    }

    pub fn dietary_filter(&self) -> &DietaryFilter {
        &self.filter
    }

    pub fn set_dietary_filter(&mut self, filter: DietaryFilter) {
        self.filter = filter;
    }

    /// 現在の入力でランキング
    pub fn results(&self) -> Vec<MatchResult<'c>> {
        rank(&self.ingredients, self.catalog.recipes(), &self.filter)
    }

    /// レシピを選択。カタログにないIDなら選択を解除して `None`
    pub fn select(&mut self, id: &str) -> Option<&'c Recipe> {
        self.selected = self.catalog.get(id);
        self.selected
    }

    pub fn selected(&self) -> Option<&'c Recipe> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// 検出を開始。処理中のものがあれば置き換える
    pub fn begin_detection(&mut self) -> DetectionTicket {
        self.detection.begin()
    }

    pub fn is_detecting(&self) -> bool {
        self.detection.is_in_flight()
    }

    /// 検出結果を反映
    ///
    /// 成功かつ最新のリクエストの場合のみ食材集合にマージする。
    /// 失敗時は集合を変更せず、利用者向けメッセージを返す。
    pub fn apply_detection(
        &mut self,
        ticket: DetectionTicket,
        outcome: Result<Vec<IngredientToken>, DetectionRelayError>,
    ) -> Notification {
        if !self.detection.finish(ticket) {
            return Notification::Ignored;
        }

        match outcome {
            Ok(tokens) => {
                let found = tokens.len();
                let added = self.ingredients.merge(tokens);
                tracing::info!(found, added, "detected ingredients merged");
                Notification::Detected { found, added }
            }
            Err(err) => {
                tracing::warn!(error = %err, "ingredient detection failed");
                Notification::Failed {
                    message: err.user_message(),
                }
            }
        }
    }
}
