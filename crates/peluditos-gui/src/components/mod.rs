//! UI 组件模块

mod catalog;
mod detail;
mod header;
mod image_box;
mod splash;

pub use catalog::CatalogGrid;
pub use detail::DetailPanel;
pub use header::Header;
pub use image_box::ImageBox;
pub use splash::SplashScreen;
