//! 目录视图模型

use crate::assets::{ImageHandle, ImageSize, ImageSource};
use crate::catalog::{ListingRecord, ListingStore};

/// 缩略图缺失时的占位文本
pub const THUMBNAIL_PLACEHOLDER: &str = "Imagen\nno encontrada";

/// 网格位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    /// 网格列数
    pub const COLUMNS: usize = 2;

    pub const fn for_index(index: usize) -> Self {
        Self {
            row: index / Self::COLUMNS,
            column: index % Self::COLUMNS,
        }
    }
}

/// 单张卡片
///
/// `thumbnail` 在卡片显示期间必须一直被持有。
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub index: usize,
    pub position: GridPosition,
    pub record: &'static ListingRecord,
    pub thumbnail: Option<ImageHandle>,
}

impl CardModel {
    /// 色带左侧文字：名字与年龄分两行
    pub fn name_age_label(&self) -> String {
        format!("{}\n{}", self.record.name, self.record.age)
    }

    pub fn species_label(&self) -> &'static str {
        self.record.species
    }
}

/// 目录视图
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    cards: Vec<CardModel>,
    contact_icon: Option<ImageHandle>,
}

impl CatalogView {
    /// 为目录中的每条记录构造一张卡片，并同步加载缩略图
    pub fn build(
        store: &ListingStore,
        images: &impl ImageSource,
        thumbnail_size: ImageSize,
    ) -> Self {
        let cards = store
            .all()
            .iter()
            .enumerate()
            .map(|(index, record)| CardModel {
                index,
                position: GridPosition::for_index(index),
                record,
                thumbnail: images.load(record.photo_path, Some(thumbnail_size)),
            })
            .collect();

        Self {
            cards,
            contact_icon: None,
        }
    }

    /// 附加与所有详情视图共享的联系图标
    #[must_use]
    pub fn with_contact_icon(mut self, icon: Option<ImageHandle>) -> Self {
        self.contact_icon = icon;
        self
    }

    pub fn cards(&self) -> &[CardModel] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&CardModel> {
        self.cards.get(index)
    }

    pub fn contact_icon(&self) -> Option<&ImageHandle> {
        self.contact_icon.as_ref()
    }

    /// 网格行数
    pub fn rows(&self) -> usize {
        self.cards.len().div_ceil(GridPosition::COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// 不返回任何图片，只记录请求
    #[derive(Default)]
    struct RecordingSource {
        requests: RefCell<Vec<(String, Option<ImageSize>)>>,
    }

    impl ImageSource for RecordingSource {
        fn load(&self, path: &str, size: Option<ImageSize>) -> Option<ImageHandle> {
            self.requests.borrow_mut().push((path.to_string(), size));
            None
        }
    }

    #[test]
    fn test_grid_position() {
        assert_eq!(GridPosition::for_index(0), GridPosition { row: 0, column: 0 });
        assert_eq!(GridPosition::for_index(1), GridPosition { row: 0, column: 1 });
        assert_eq!(GridPosition::for_index(2), GridPosition { row: 1, column: 0 });
        assert_eq!(GridPosition::for_index(5), GridPosition { row: 2, column: 1 });
    }

    #[test]
    fn test_one_card_per_record() {
        let store = ListingStore::builtin();
        let source = RecordingSource::default();
        let view = CatalogView::build(&store, &source, ImageSize::new(320, 180));

        assert_eq!(view.cards().len(), store.len());
        assert_eq!(view.rows(), 2);
        for (index, card) in view.cards().iter().enumerate() {
            assert_eq!(card.index, index);
            assert_eq!(card.position.row, index / 2);
            assert_eq!(card.position.column, index % 2);
            assert_eq!(card.record, &store.all()[index]);
            assert!(card.thumbnail.is_none());
        }
    }

    #[test]
    fn test_thumbnails_requested_at_fixed_size() {
        let store = ListingStore::builtin();
        let source = RecordingSource::default();
        CatalogView::build(&store, &source, ImageSize::new(320, 180));

        let requests = source.requests.borrow();
        assert_eq!(requests.len(), store.len());
        assert_eq!(requests[0].0, "assets/gato2.jpeg");
        assert!(
            requests
                .iter()
                .all(|(_, size)| *size == Some(ImageSize::new(320, 180)))
        );
    }

    #[test]
    fn test_card_labels() {
        let store = ListingStore::builtin();
        let view = CatalogView::build(&store, &RecordingSource::default(), ImageSize::new(1, 1));
        let card = view.card(1).unwrap();
        assert_eq!(card.name_age_label(), "Rocky\n8 años");
        assert_eq!(card.species_label(), "Perro");
    }

    #[test]
    fn test_empty_store() {
        static EMPTY: [ListingRecord; 0] = [];
        let store = ListingStore::from_static(&EMPTY);
        let view = CatalogView::build(&store, &RecordingSource::default(), ImageSize::new(1, 1));
        assert!(view.cards().is_empty());
        assert_eq!(view.rows(), 0);
        assert!(view.contact_icon().is_none());
    }
}
