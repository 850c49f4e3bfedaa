//! 领养目录
//!
//! 进程启动时即存在、运行期间不可变的固定顺序记录表。

/// 描述缺失时显示的占位文本
pub const DEFAULT_DESCRIPTION: &str = "Sin descripción";
/// 品种缺失时显示的占位文本
pub const DEFAULT_BREED: &str = "N/D";

/// 单条领养信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    pub name: &'static str,
    pub age: &'static str,
    /// 仅用于展示，不做枚举约束
    pub species: &'static str,
    pub description: Option<&'static str>,
    pub breed: Option<&'static str>,
    /// 单个符号，如 ♀ / ♂
    pub sex: Option<&'static str>,
    /// 相对资源路径，文件可以不存在
    pub photo_path: &'static str,
    /// WhatsApp 号码，不做格式校验
    pub contact_handle: &'static str,
}

impl ListingRecord {
    pub fn description_or_default(&self) -> &'static str {
        self.description.unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn breed_or_default(&self) -> &'static str {
        self.breed.unwrap_or(DEFAULT_BREED)
    }

    pub fn sex_or_default(&self) -> &'static str {
        self.sex.unwrap_or_default()
    }
}

const CONTACT: &str = "5492964600521";

static LISTINGS: [ListingRecord; 4] = [
    ListingRecord {
        name: "Luna",
        age: "1 año",
        species: "Gato",
        description: Some(
            "Tímida, busca un hogar tranquilo y sin otros gatos. Ideal para personas que teletrabajan.",
        ),
        breed: Some("Maine Coon"),
        sex: Some("♀"),
        photo_path: "assets/gato2.jpeg",
        contact_handle: CONTACT,
    },
    ListingRecord {
        name: "Rocky",
        age: "8 años",
        species: "Perro",
        description: Some("Energético, necesita espacio y ejercicio diario. Muy leal y protector."),
        breed: Some("Husky Siberiano"),
        sex: Some("♂"),
        photo_path: "assets/Oso.jpg",
        contact_handle: CONTACT,
    },
    ListingRecord {
        name: "Bella",
        age: "7 meses",
        species: "Gato",
        description: Some("Juguetona y muy curiosa. Ideal para familias con niños pequeños."),
        breed: Some("Mestizo"),
        sex: Some("♀"),
        photo_path: "assets/manchas.jpg",
        contact_handle: CONTACT,
    },
    ListingRecord {
        name: "Max",
        age: "2 años",
        species: "Perro",
        description: Some("Muy amigable y leal. Le encanta jugar a la pelota."),
        breed: Some("Labrador"),
        sex: Some("♂"),
        photo_path: "assets/perro2.jpeg",
        contact_handle: CONTACT,
    },
];

/// 只读目录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingStore {
    records: &'static [ListingRecord],
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ListingStore {
    /// 内置的领养列表
    pub fn builtin() -> Self {
        Self {
            records: &LISTINGS,
        }
    }

    /// 使用任意静态记录表（测试用）
    pub const fn from_static(records: &'static [ListingRecord]) -> Self {
        Self { records }
    }

    /// 每次调用都返回同一顺序的同一序列
    pub fn all(&self) -> &'static [ListingRecord] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static ListingRecord> {
        self.records.get(index)
    }
}
