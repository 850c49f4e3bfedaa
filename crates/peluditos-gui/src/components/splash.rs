//! 启动页组件

use dioxus::prelude::*;

use super::ImageBox;
use crate::state::AppState;

/// 启动页：标题、可选装饰图、欢迎语与不确定进度条
#[component]
pub fn SplashScreen() -> Element {
    let state = use_context::<AppState>();
    let decorations = use_hook(|| state.load_decorations());

    rsx! {
        div { class: "splash",
            div { class: "splash-top",
                h1 { class: "splash-title multiline", "Peluditos\nen Adopción" }

                if !decorations.is_empty() {
                    div { class: "splash-decorations",
                        for (i, deco) in decorations.iter().enumerate() {
                            ImageBox {
                                key: "{i}",
                                image: Some(deco.clone()),
                                size: deco.size(),
                                placeholder: "",
                            }
                        }
                    }
                }
            }

            div { class: "splash-bottom",
                p { class: "splash-welcome", "¡Encontrá a tu compañero ideal!" }
                p { class: "splash-desc",
                    "Explorá perfiles, mirá fotos y contactá por WhatsApp."
                }
                div { class: "progress-indeterminate" }
                p { class: "splash-footer", "Peluditos - Comunidad de adopción" }
            }
        }
    }
}
