//! Peluditos GUI Application
//!
//! 基于 Dioxus 的桌面领养目录。
//!
//! # 架构
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Dioxus Desktop App                     │
//! ├──────────────────────────────────────────────────────────┤
//! │  Splash ──(1800ms)──▶ Header + CatalogGrid               │
//! │                           │ click                        │
//! │                           ▼                              │
//! │                      DetailPanel × N ──▶ wa.me           │
//! ├──────────────────────────────────────────────────────────┤
//! │                       Core Logic                         │
//! │                (peluditos-core crate)                    │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod app;
mod components;
mod contact;
mod state;
mod styles;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use peluditos_core::{AppConfig, ResourceResolver, icon_advisory};

use crate::state::AppState;

fn main() {
    // 初始化日志
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Peluditos GUI...");

    let config = AppConfig::default();
    let resolver = ResourceResolver::detect();
    if let Some(advisory) = icon_advisory(&resolver) {
        log::warn!("{advisory}");
    }

    // 启动页：无边框固定尺寸，过渡到目录时再恢复
    let window = WindowBuilder::new()
        .with_title(config.splash_title)
        .with_inner_size(LogicalSize::new(
            config.splash_window.width,
            config.splash_window.height,
        ))
        .with_decorations(false)
        .with_resizable(false);

    let state = AppState::new(config, resolver);

    // 启动 Dioxus 桌面应用
    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window).with_menu(None))
        .with_context(state)
        .launch(app::App);
}
