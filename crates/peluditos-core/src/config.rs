//! 应用配置
//!
//! 外观与尺寸在启动时一次性构造，显式传入根视图，不使用全局状态。

use std::time::Duration;

use crate::assets::{ImageSize, ResourceResolver};

/// 启动时检查的可选图标
pub const WHATSAPP_ICON_PATH: &str = "assets/icon.png";
/// 启动页装饰图
pub const SPLASH_DECORATIONS: [&str; 2] = ["assets/deco1.png", "assets/deco2.png"];

/// 缺少联系图标时的提示
pub const MISSING_ICON_ADVISORY: &str =
    "Aviso: no se encontró assets/icon.png — el botón de WhatsApp se mostrará sin ícono.";

/// 启动检查：图标缺失时返回提示文本，不影响继续运行
pub fn icon_advisory(resolver: &ResourceResolver) -> Option<&'static str> {
    if resolver.resolve(WHATSAPP_ICON_PATH).exists() {
        None
    } else {
        Some(MISSING_ICON_ADVISORY)
    }
}

/// 主题颜色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub surface: &'static str,
    pub card_border: &'static str,
    pub text_muted: &'static str,
    pub text_strong: &'static str,
    pub placeholder_bg: &'static str,
    pub placeholder_text: &'static str,
    pub whatsapp: &'static str,
    pub whatsapp_hover: &'static str,
    pub neutral_button: &'static str,
    pub neutral_button_hover: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#F05A28",
            surface: "#FFFFFF",
            card_border: "#e6e6e6",
            text_muted: "#666666",
            text_strong: "#444444",
            placeholder_bg: "#f0f0f0",
            placeholder_text: "#888888",
            whatsapp: "#25D366",
            whatsapp_hover: "#128C7E",
            neutral_button: "#e0e0e0",
            neutral_button_hover: "#d0d0d0",
        }
    }
}

/// 窗口尺寸（逻辑像素）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl WindowSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// 应用配置
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: &'static str,
    pub splash_title: &'static str,
    pub splash_window: WindowSize,
    pub main_window: WindowSize,
    pub main_min_window: WindowSize,
    /// 详情面板宽度
    pub detail_width: f64,
    pub splash_delay: Duration,
    pub thumbnail_size: ImageSize,
    pub detail_image_size: ImageSize,
    pub icon_size: ImageSize,
    pub decoration_size: ImageSize,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Peluditos en Adopción",
            splash_title: "Peluditos en Adopción - Iniciando",
            splash_window: WindowSize::new(420.0, 740.0),
            main_window: WindowSize::new(920.0, 760.0),
            main_min_window: WindowSize::new(600.0, 600.0),
            detail_width: 560.0,
            splash_delay: Duration::from_millis(1800),
            thumbnail_size: ImageSize::new(320, 180),
            detail_image_size: ImageSize::new(520, 360),
            icon_size: ImageSize::new(22, 22),
            decoration_size: ImageSize::new(80, 80),
            theme: Theme::default(),
        }
    }
}
