//! 详情面板组件

use dioxus::prelude::*;
use peluditos_core::view::DETAIL_PLACEHOLDER;
use peluditos_core::{DetailId, DetailView, ImageHandle, ImageSize};

use super::ImageBox;
use crate::contact::open_contact;

/// 后打开的面板逐级错开，便于区分
const CASCADE_OFFSET: usize = 28;

#[derive(Props, Clone, PartialEq)]
pub struct DetailPanelProps {
    /// 持有大图句柄
    pub view: DetailView,
    pub depth: usize,
    pub width: f64,
    pub image_size: ImageSize,
    pub contact_icon: Option<ImageHandle>,
    pub on_close: EventHandler<DetailId>,
}

/// 单个详情实例
#[component]
pub fn DetailPanel(props: DetailPanelProps) -> Element {
    let id = props.view.id;
    let on_close = props.on_close;
    let model = props.view.model.clone();
    let image = model.image.clone();
    let width = props.width;
    let left_shift = width / 2.0;
    let offset = props.depth * CASCADE_OFFSET;
    let z_index = 10 + props.depth;

    let window_title = model.window_title();
    let title = model.title();
    let metadata = model.metadata_line();
    let description = model.description();

    rsx! {
        div {
            class: "detail-panel",
            style: "width: {width}px; left: calc(50% - {left_shift}px + {offset}px); margin-top: {offset}px; z-index: {z_index};",

            div { class: "detail-titlebar", "{window_title}" }

            div { class: "detail-image",
                ImageBox {
                    image: image,
                    size: props.image_size,
                    placeholder: DETAIL_PLACEHOLDER,
                }
            }

            div { class: "detail-info",
                h2 { class: "detail-title", "{title}" }
                p { class: "detail-meta", style: "white-space: pre;", "{metadata}" }
                p { class: "detail-desc", "{description}" }

                div { class: "detail-actions",
                    button {
                        class: "btn btn-whatsapp",
                        onclick: move |_| open_contact(&model),
                        if let Some(icon) = props.contact_icon.clone() {
                            ImageBox {
                                image: Some(icon.clone()),
                                size: icon.size(),
                                placeholder: "",
                            }
                        }
                        "Contactar por WhatsApp"
                    }
                    button {
                        class: "btn btn-neutral",
                        onclick: move |_| on_close.call(id),
                        "Cerrar"
                    }
                }
            }
        }
    }
}
