//! recipe-match
//!
//! 手持ちの食材（手入力または写真から検出）に合うレシピを一致率順に表示する。

pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod photo;
pub mod presenter;
pub mod session;

pub use recipe_match_common as common;
