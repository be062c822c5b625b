use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::models::category::CategoryChoice;

/// 难度（1-5）
///
/// 与难度选择框的 option value 一一对应，序列化为字符串（如 `"2"`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    /// 按选择框的 option value 解析，只接受 "1".."5" 原样输入
    pub fn from_value(value: &str) -> Option<Self> {
        Self::all().find(|d| d.to_string() == value)
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// 所有可选难度，按选择框顺序
    pub fn all() -> impl Iterator<Item = Difficulty> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// `POST /questions` 的请求体
///
/// 五个字段总是全部发送，即使 newCategory 与当前分类无关。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub category: CategoryChoice,
    #[serde(rename = "newCategory")]
    pub new_category: String,
}

/// `POST /questions` 成功响应体
///
/// 响应体对表单本身没有意义，只用于日志；解析失败也不影响提交结果。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionCreated {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub created: Option<u64>,
    #[serde(default)]
    pub total_questions: Option<u64>,
}

/// 后端错误响应体 `{success: false, error: 404, message: "..."}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}
