//! 图片或占位框

use dioxus::prelude::*;
use peluditos_core::{ImageHandle, ImageSize};

#[derive(Props, Clone, PartialEq)]
pub struct ImageBoxProps {
    /// 显示期间一直持有，不可提前释放
    pub image: Option<ImageHandle>,
    pub size: ImageSize,
    pub placeholder: &'static str,
}

/// 有图显示图片，无图显示同尺寸占位
#[component]
pub fn ImageBox(props: ImageBoxProps) -> Element {
    let width = props.size.width;
    let height = props.size.height;

    match &props.image {
        Some(image) => {
            let src = image.data_uri().to_string();
            rsx! {
                img {
                    src: "{src}",
                    width: "{width}",
                    height: "{height}",
                    draggable: "false",
                }
            }
        }
        None => rsx! {
            div {
                class: "image-placeholder",
                style: "width: {width}px; height: {height}px;",
                "{props.placeholder}"
            }
        },
    }
}
