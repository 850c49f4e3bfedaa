//! 图片加载
//!
//! 所有失败（文件缺失、解码失败、尺寸非法、编码失败）都在边界处折叠为 `None`，
//! 调用方把 `None` 视为正常的“无图片”情况并显示占位图。

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use log::debug;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::{AssetError, ResourceResolver};

/// 目标像素尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// 任一边为零即视为非法
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// 可显示的图片句柄
///
/// 持有解码后的像素以及供 webview 使用的 PNG data URI。克隆只增加引用计数。
/// 显示该图片的视图必须以具名字段持有句柄，直到视图销毁。
#[derive(Clone)]
pub struct ImageHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    pixels: RgbaImage,
    data_uri: String,
}

impl ImageHandle {
    fn from_pixels(pixels: RgbaImage) -> Result<Self, AssetError> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(
                pixels.as_raw(),
                pixels.width(),
                pixels.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(AssetError::Encode)?;

        let data_uri = format!("data:image/png;base64,{}", BASE64.encode(&png));
        Ok(Self {
            inner: Arc::new(HandleInner { pixels, data_uri }),
        })
    }

    pub fn width(&self) -> u32 {
        self.inner.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.pixels.height()
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width(), self.height())
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.inner.pixels
    }

    /// 用于 `img { src }` 的 data URI
    pub fn data_uri(&self) -> &str {
        &self.inner.data_uri
    }
}

// 同一次加载产生的句柄才相等
impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

/// 图片来源
///
/// 视图通过该 trait 获取图片，测试中可以替换为桩实现。
pub trait ImageSource {
    fn load(&self, path: &str, size: Option<ImageSize>) -> Option<ImageHandle>;
}

/// 基于文件系统的图片加载器
#[derive(Debug, Clone)]
pub struct ImageLoader {
    resolver: ResourceResolver,
}

impl ImageLoader {
    pub fn new(resolver: ResourceResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ResourceResolver {
        &self.resolver
    }

    /// 加载并按需缩放，保留具体错误
    pub fn try_load(
        &self,
        relative: impl AsRef<Path>,
        size: Option<ImageSize>,
    ) -> Result<ImageHandle, AssetError> {
        if let Some(size) = size
            && size.is_empty()
        {
            return Err(AssetError::InvalidSize(size));
        }

        let path = self.resolver.resolve(relative);
        if !path.is_file() {
            return Err(AssetError::NotFound(path));
        }

        let decoded = ImageReader::open(&path)?.with_guessed_format()?.decode()?;
        let resized = match size {
            Some(size) => decoded.resize_exact(size.width, size.height, FilterType::Lanczos3),
            None => decoded,
        };

        ImageHandle::from_pixels(resized.to_rgba8())
    }
}

impl ImageSource for ImageLoader {
    fn load(&self, path: &str, size: Option<ImageSize>) -> Option<ImageHandle> {
        match self.try_load(path, size) {
            Ok(handle) => Some(handle),
            Err(e) => {
                debug!("Image '{}' unavailable: {}", path, e);
                None
            }
        }
    }
}
