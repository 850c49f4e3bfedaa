//! 视图模型
//!
//! 与具体 UI 框架无关的目录与详情视图数据。

mod catalog;
mod detail;

pub use catalog::{CardModel, CatalogView, GridPosition, THUMBNAIL_PLACEHOLDER};
pub use detail::{DETAIL_PLACEHOLDER, DetailId, DetailModel, DetailStack, DetailView};
