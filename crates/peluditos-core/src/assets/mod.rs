//! 资源模块
//!
//! 资源路径解析与带降级的图片加载。

mod loader;
mod resolver;

pub use loader::{ImageHandle, ImageLoader, ImageSize, ImageSource};
pub use resolver::{BUNDLE_MARKER, ResourceResolver, RuntimeLayout};

use std::path::PathBuf;
use thiserror::Error;

/// 资源不可用的具体原因
///
/// 仅在加载器内部使用，对外统一折叠为 `None`。
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid target size {0}")]
    InvalidSize(ImageSize),

    #[error("failed to read asset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
}
