//! 详情视图模型
//!
//! 每次点击卡片都会打开一个新的详情实例，同一记录可以同时打开多个；
//! 关闭只影响对应实例。

use std::fmt;

use crate::assets::{ImageHandle, ImageSize, ImageSource};
use crate::catalog::ListingRecord;
use crate::contact::build_contact_link;

/// 大图缺失时的占位文本
pub const DETAIL_PLACEHOLDER: &str = "Imagen no disponible";

/// 详情实例标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DetailId(u64);

impl fmt::Display for DetailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "detail-{}", self.0)
    }
}

/// 单条记录的完整展示内容
///
/// `image` 在详情显示期间必须一直被持有。
#[derive(Debug, Clone, PartialEq)]
pub struct DetailModel {
    pub record: &'static ListingRecord,
    pub image: Option<ImageHandle>,
}

impl DetailModel {
    /// 构造时同步加载大图
    pub fn build(
        record: &'static ListingRecord,
        images: &impl ImageSource,
        image_size: ImageSize,
    ) -> Self {
        Self {
            record,
            image: images.load(record.photo_path, Some(image_size)),
        }
    }

    pub fn window_title(&self) -> &'static str {
        self.record.name
    }

    /// `"{name}, {age}"`
    pub fn title(&self) -> String {
        format!("{}, {}", self.record.name, self.record.age)
    }

    /// `"Raza: {breed}    Sexo: {sex}"`
    pub fn metadata_line(&self) -> String {
        format!(
            "Raza: {}    Sexo: {}",
            self.record.breed_or_default(),
            self.record.sex_or_default()
        )
    }

    pub fn description(&self) -> &'static str {
        self.record.description_or_default()
    }

    pub fn contact_link(&self) -> String {
        build_contact_link(self.record.contact_handle, self.record.name)
    }
}

/// 已打开的详情实例
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: DetailId,
    pub model: DetailModel,
}

/// 当前打开的所有详情实例，按打开顺序排列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailStack {
    next_id: u64,
    open: Vec<DetailView>,
}

impl DetailStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// 总是新建实例，不复用已打开的同一记录
    pub fn open(&mut self, model: DetailModel) -> DetailId {
        let id = DetailId(self.next_id);
        self.next_id += 1;
        self.open.push(DetailView { id, model });
        id
    }

    /// 关闭指定实例；实例不存在时返回 `false`
    pub fn close(&mut self, id: DetailId) -> bool {
        let before = self.open.len();
        self.open.retain(|view| view.id != id);
        self.open.len() != before
    }

    pub fn get(&self, id: DetailId) -> Option<&DetailView> {
        self.open.iter().find(|view| view.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DetailView> {
        self.open.iter()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ListingStore;

    struct NoImages;

    impl ImageSource for NoImages {
        fn load(&self, _path: &str, _size: Option<ImageSize>) -> Option<ImageHandle> {
            None
        }
    }

    static BARE: ListingRecord = ListingRecord {
        name: "Sombra",
        age: "3 años",
        species: "Gato",
        description: None,
        breed: None,
        sex: None,
        photo_path: "assets/sombra.png",
        contact_handle: "5491112223333",
    };

    fn model(record: &'static ListingRecord) -> DetailModel {
        DetailModel::build(record, &NoImages, ImageSize::new(520, 360))
    }

    #[test]
    fn test_detail_text() {
        let luna = &ListingStore::builtin().all()[0];
        let detail = model(luna);
        assert_eq!(detail.window_title(), "Luna");
        assert_eq!(detail.title(), "Luna, 1 año");
        assert_eq!(detail.metadata_line(), "Raza: Maine Coon    Sexo: ♀");
        assert!(detail.description().starts_with("Tímida"));
        assert!(detail.image.is_none());
    }

    #[test]
    fn test_detail_fallbacks() {
        let detail = model(&BARE);
        assert_eq!(detail.metadata_line(), "Raza: N/D    Sexo: ");
        assert_eq!(detail.description(), "Sin descripción");
    }

    #[test]
    fn test_contact_link_uses_record() {
        let link = model(&BARE).contact_link();
        assert!(link.starts_with("https://wa.me/5491112223333?text="));
        assert!(link.contains("Sombra"));
    }

    #[test]
    fn test_open_never_reuses() {
        let luna = &ListingStore::builtin().all()[0];
        let mut stack = DetailStack::new();
        let a = stack.open(model(luna));
        let b = stack.open(model(luna));
        assert_ne!(a, b);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_close_is_independent() {
        let store = ListingStore::builtin();
        let mut stack = DetailStack::new();
        let ids: Vec<_> = store.all().iter().map(|r| stack.open(model(r))).collect();
        assert_eq!(stack.len(), store.len());

        assert!(stack.close(ids[1]));
        assert_eq!(stack.len(), store.len() - 1);
        assert!(stack.get(ids[1]).is_none());
        for id in [ids[0], ids[2], ids[3]] {
            assert!(stack.get(id).is_some());
        }

        // 重复关闭无效果
        assert!(!stack.close(ids[1]));
        assert_eq!(stack.len(), store.len() - 1);
    }

    #[test]
    fn test_ids_not_recycled_after_close() {
        let mut stack = DetailStack::new();
        let first = stack.open(model(&BARE));
        stack.close(first);
        let second = stack.open(model(&BARE));
        assert_ne!(first, second);
        assert_eq!(stack.iter().map(|v| v.id).collect::<Vec<_>>(), [second]);
    }
}
