//! Peluditos Core Library
//!
//! 领养目录应用的核心逻辑，与具体 UI 框架无关。
//!
//! # 模块
//!
//! - **assets**: 资源路径解析、带降级的图片加载
//! - **catalog**: 固定的领养记录表
//! - **contact**: WhatsApp 深链接构造
//! - **view**: 目录网格与详情视图模型
//! - **splash**: 启动页单次过渡
//! - **config**: 主题与尺寸配置
//!
//! # 使用示例
//!
//! ```no_run
//! use peluditos_core::{AppConfig, CatalogView, ImageLoader, ListingStore, ResourceResolver};
//!
//! let config = AppConfig::default();
//! let loader = ImageLoader::new(ResourceResolver::detect());
//! let catalog = CatalogView::build(&ListingStore::builtin(), &loader, config.thumbnail_size);
//!
//! for card in catalog.cards() {
//!     println!("{:?} {}", card.position, card.record.name);
//! }
//! ```

pub mod assets;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod splash;
pub mod view;

// Assets re-exports
pub use assets::{
    AssetError, ImageHandle, ImageLoader, ImageSize, ImageSource, ResourceResolver, RuntimeLayout,
};

// Catalog re-exports
pub use catalog::{DEFAULT_BREED, DEFAULT_DESCRIPTION, ListingRecord, ListingStore};

// Config re-exports
pub use config::{AppConfig, Theme, WindowSize, icon_advisory};

pub use contact::build_contact_link;
pub use splash::{Screen, SplashController};

// View re-exports
pub use view::{CardModel, CatalogView, DetailId, DetailModel, DetailStack, DetailView, GridPosition};
