//! 头部组件

use dioxus::prelude::*;

/// 顶部色条
#[component]
pub fn Header(title: &'static str) -> Element {
    rsx! {
        div { class: "header",
            h1 { "🐾 {title}" }
        }
    }
}
