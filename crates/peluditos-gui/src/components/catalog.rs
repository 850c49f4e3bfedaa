//! 目录网格组件

use dioxus::prelude::*;
use peluditos_core::view::THUMBNAIL_PLACEHOLDER;
use peluditos_core::{CardModel, ImageSize, ListingRecord};

use super::ImageBox;

#[derive(Props, Clone, PartialEq)]
pub struct CatalogGridProps {
    pub cards: Vec<CardModel>,
    pub thumbnail_size: ImageSize,
    pub on_open: EventHandler<&'static ListingRecord>,
}

/// 两列可滚动网格
#[component]
pub fn CatalogGrid(props: CatalogGridProps) -> Element {
    rsx! {
        div { class: "catalog-scroll",
            div { class: "catalog-grid",
                for card in props.cards.iter() {
                    PetCard {
                        key: "{card.index}",
                        card: card.clone(),
                        thumbnail_size: props.thumbnail_size,
                        on_open: props.on_open,
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PetCardProps {
    /// 持有缩略图句柄
    card: CardModel,
    thumbnail_size: ImageSize,
    on_open: EventHandler<&'static ListingRecord>,
}

/// 整张卡片是同一个点击目标
#[component]
fn PetCard(props: PetCardProps) -> Element {
    let record = props.card.record;
    let on_open = props.on_open;
    let row = props.card.position.row + 1;
    let column = props.card.position.column + 1;
    let name_age = props.card.name_age_label();
    let species = props.card.species_label();

    rsx! {
        div {
            class: "card",
            style: "grid-row: {row}; grid-column: {column};",
            onclick: move |_| on_open.call(record),

            ImageBox {
                image: props.card.thumbnail.clone(),
                size: props.thumbnail_size,
                placeholder: THUMBNAIL_PLACEHOLDER,
            }

            div { class: "card-band",
                span { class: "card-name", "{name_age}" }
                span { class: "card-species", "{species}" }
            }
        }
    }
}
