//! 主应用组件

use dioxus::desktop::LogicalSize;
use dioxus::desktop::tao::dpi::PhysicalPosition;
use dioxus::prelude::*;
use log::{debug, info};
use peluditos_core::{AppConfig, DetailId, DetailStack, ListingRecord, Screen, SplashController};

use crate::components::{CatalogGrid, DetailPanel, Header, SplashScreen};
use crate::state::AppState;
use crate::styles::global_css;

/// 主应用
#[component]
pub fn App() -> Element {
    let state = use_context::<AppState>();
    let css = use_hook(|| global_css(&state.config.theme));
    let mut splash = use_signal(|| SplashController::new(state.config.splash_delay));

    use_hook(center_window);

    // 启动页计时：非阻塞，只触发一次
    use_hook(move || {
        let config = state.config.clone();
        spawn(async move {
            tokio::time::sleep(config.splash_delay).await;
            if splash.write().finish() {
                enter_main_window(&config);
            }
        })
    });

    rsx! {
        style { "{css}" }

        match splash.read().screen() {
            Screen::Splash => rsx! { SplashScreen {} },
            Screen::Catalog => rsx! { CatalogScreen {} },
        }
    }
}

/// 将无边框启动窗口移到当前显示器中央
fn center_window() {
    let desktop = dioxus::desktop::window();
    let Some(monitor) = desktop.window.current_monitor() else {
        debug!("No monitor reported, leaving splash position to the OS");
        return;
    };

    let origin = monitor.position();
    let screen = monitor.size();
    let window = desktop.window.outer_size();
    let (x, y) = centered_origin(
        (origin.x, origin.y),
        (screen.width, screen.height),
        (window.width, window.height),
    );
    desktop.window.set_outer_position(PhysicalPosition::new(x, y));
}

/// 窗口在显示器内居中时的左上角坐标（物理像素）
fn centered_origin(
    monitor_origin: (i32, i32),
    monitor_size: (u32, u32),
    window_size: (u32, u32),
) -> (i32, i32) {
    let axis = |origin: i32, screen: u32, window: u32| {
        let offset = (i64::from(screen) - i64::from(window)) / 2;
        i32::try_from(i64::from(origin) + offset).unwrap_or(origin)
    };
    (
        axis(monitor_origin.0, monitor_size.0, window_size.0),
        axis(monitor_origin.1, monitor_size.1, window_size.1),
    )
}

/// 启动页结束后恢复普通窗口
fn enter_main_window(config: &AppConfig) {
    let desktop = dioxus::desktop::window();
    desktop.window.set_title(config.title);
    desktop.window.set_decorations(true);
    desktop.window.set_resizable(true);
    desktop.window.set_min_inner_size(Some(LogicalSize::new(
        config.main_min_window.width,
        config.main_min_window.height,
    )));
    desktop.window.set_inner_size(LogicalSize::new(
        config.main_window.width,
        config.main_window.height,
    ));
}

/// 目录界面：网格加上任意数量的详情面板
#[component]
fn CatalogScreen() -> Element {
    let state = use_context::<AppState>();
    // 目录只构造一次，图片在此同步加载
    let catalog = use_hook(|| state.build_catalog());
    let mut details = use_signal(DetailStack::new);

    let on_open = {
        let state = state.clone();
        use_callback(move |record: &'static ListingRecord| {
            let model = state.build_detail(record);
            let id = details.write().open(model);
            info!("Opened {} for {}", id, record.name);
        })
    };

    let on_close = use_callback(move |id: DetailId| {
        if details.write().close(id) {
            debug!("Closed {}", id);
        }
    });

    let config = &state.config;

    rsx! {
        div { class: "app-container",
            Header { title: config.title }

            div { class: "content",
                p { class: "section-title", "Peludos en Adopción" }

                CatalogGrid {
                    cards: catalog.cards().to_vec(),
                    thumbnail_size: config.thumbnail_size,
                    on_open,
                }
            }
        }

        if !details.read().is_empty() {
            div { class: "detail-backdrop" }
        }

        for (depth, view) in details.read().iter().enumerate() {
            DetailPanel {
                key: "{view.id}",
                view: view.clone(),
                depth,
                width: config.detail_width,
                image_size: config.detail_image_size,
                contact_icon: catalog.contact_icon().cloned(),
                on_close,
            }
        }
    }
}
