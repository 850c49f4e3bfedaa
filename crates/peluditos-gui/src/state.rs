//! 应用状态
//!
//! 启动时构造一次，通过 Dioxus context 传给根组件。

use peluditos_core::config::{SPLASH_DECORATIONS, WHATSAPP_ICON_PATH};
use peluditos_core::{
    AppConfig, CatalogView, DetailModel, ImageHandle, ImageLoader, ImageSource, ListingRecord,
    ListingStore, ResourceResolver,
};

/// 只读的应用级状态
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub loader: ImageLoader,
    pub store: ListingStore,
}

impl AppState {
    pub fn new(config: AppConfig, resolver: ResourceResolver) -> Self {
        Self {
            config,
            loader: ImageLoader::new(resolver),
            store: ListingStore::builtin(),
        }
    }

    /// 构造目录：同步加载全部缩略图与联系图标
    pub fn build_catalog(&self) -> CatalogView {
        let icon = self
            .loader
            .load(WHATSAPP_ICON_PATH, Some(self.config.icon_size));
        let catalog = CatalogView::build(&self.store, &self.loader, self.config.thumbnail_size)
            .with_contact_icon(icon);

        let missing = catalog
            .cards()
            .iter()
            .filter(|card| card.thumbnail.is_none())
            .count();
        log::info!(
            "Catalog built: {} cards, {} without thumbnail",
            catalog.cards().len(),
            missing
        );
        catalog
    }

    pub fn build_detail(&self, record: &'static ListingRecord) -> DetailModel {
        DetailModel::build(record, &self.loader, self.config.detail_image_size)
    }

    /// 启动页装饰图，缺失的直接省略
    pub fn load_decorations(&self) -> Vec<ImageHandle> {
        SPLASH_DECORATIONS
            .iter()
            .filter_map(|path| self.loader.load(path, Some(self.config.decoration_size)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_without_assets() -> AppState {
        AppState::new(
            AppConfig::default(),
            ResourceResolver::with_base("/nonexistent/peluditos"),
        )
    }

    #[test]
    fn test_catalog_without_assets_uses_placeholders() {
        let catalog = state_without_assets().build_catalog();
        assert_eq!(catalog.cards().len(), 4);
        assert!(catalog.cards().iter().all(|c| c.thumbnail.is_none()));
        assert!(catalog.contact_icon().is_none());
    }

    #[test]
    fn test_missing_decorations_are_omitted() {
        assert!(state_without_assets().load_decorations().is_empty());
    }

    #[test]
    fn test_build_detail() {
        let state = state_without_assets();
        let record = state.store.get(3).unwrap();
        let detail = state.build_detail(record);
        assert_eq!(detail.title(), "Max, 2 años");
        assert!(detail.image.is_none());
    }
}
