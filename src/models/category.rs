use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// 分类选择框里"未选择"占位项的值
pub const NONE_SENTINEL: &str = "none";
/// 分类选择框里"其他"选项的值
pub const OTHER_SENTINEL: &str = "other";

pub const PLACEHOLDER_LABEL: &str = "Select a category";
pub const OTHER_LABEL: &str = "Other";

/// 分类 ID
///
/// 后端以 JSON 对象的键返回，因此总是字符串。
/// 只有规范的十进制整数（不带符号、无前导零，如 "7"、"10"）按数值排序；
/// "01"、"+1" 之类以及其余非数字 ID 都排在后面，按字典序而不是后端返回的顺序。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<u64> {
        let s = self.0.as_str();
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        canonical.then(|| s.parse().ok()).flatten()
    }
}

impl Ord for CategoryId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for CategoryId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 分类目录：ID → 显示名称
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Categories(BTreeMap<CategoryId, String>);

impl Categories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn name(&self, id: &CategoryId) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.0.contains_key(id)
    }

    /// 按 ID 顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, &str)> {
        self.0.iter().map(|(id, name)| (id, name.as_str()))
    }
}

impl<I: Into<String>, N: Into<String>> FromIterator<(I, N)> for Categories {
    fn from_iter<T: IntoIterator<Item = (I, N)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, name)| (CategoryId::new(id), name.into()))
                .collect(),
        )
    }
}

/// `GET /categories` 的响应体
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub success: Option<bool>,
    pub categories: Categories,
}

/// 当前选中的分类
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryChoice {
    /// 尚未选择（占位项）
    #[default]
    None,
    /// 新建分类，名称取自 newCategory 字段
    Other,
    /// 已有分类
    Existing(CategoryId),
}

impl CategoryChoice {
    /// 按选择框的 option value 解析
    pub fn from_value(value: &str) -> Self {
        match value {
            NONE_SENTINEL => CategoryChoice::None,
            OTHER_SENTINEL => CategoryChoice::Other,
            id => CategoryChoice::Existing(CategoryId::new(id)),
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            CategoryChoice::None => NONE_SENTINEL,
            CategoryChoice::Other => OTHER_SENTINEL,
            CategoryChoice::Existing(id) => id.as_str(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, CategoryChoice::None)
    }

    pub fn is_other(&self) -> bool {
        matches!(self, CategoryChoice::Other)
    }
}

impl Serialize for CategoryChoice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_value())
    }
}

/// 分类选择框中的一个选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl CategoryOption {
    fn enabled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }
}

/// 构建分类选择框的全部选项：禁用的占位项 + 各分类 + "Other"
pub fn category_options(categories: &Categories) -> Vec<CategoryOption> {
    let mut options = Vec::with_capacity(categories.len() + 2);
    options.push(CategoryOption {
        value: NONE_SENTINEL.to_string(),
        label: PLACEHOLDER_LABEL.to_string(),
        disabled: true,
    });
    options.extend(
        categories
            .iter()
            .map(|(id, name)| CategoryOption::enabled(id.as_str(), name)),
    );
    options.push(CategoryOption::enabled(OTHER_SENTINEL, OTHER_LABEL));
    options
}
