use serde::{Deserialize, Serialize};

use crate::models::form_state::Field;

/// 题目草稿（来自 TOML 文件），批量提交时逐字段填入表单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub question: String,
    pub answer: String,
    #[serde(default = "default_difficulty", deserialize_with = "deserialize_difficulty")]
    pub difficulty: String,
    /// 已有分类 ID，或 "other"
    pub category: String,
    #[serde(default)]
    pub new_category: String,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl QuestionDraft {
    /// 按表单控件顺序给出 (字段, 值)，模拟用户逐项填写
    pub fn field_values(&self) -> Vec<(Field, &str)> {
        let mut values = vec![
            (Field::Question, self.question.as_str()),
            (Field::Answer, self.answer.as_str()),
            (Field::Difficulty, self.difficulty.as_str()),
            (Field::Category, self.category.as_str()),
        ];
        if !self.new_category.is_empty() {
            values.push((Field::NewCategory, self.new_category.as_str()));
        }
        values
    }

    /// 日志里用于标识草稿的名称
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| crate::utils::truncate_text(&self.question, 30))
    }

    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }
}

fn default_difficulty() -> String {
    "1".to_string()
}

// 难度既可以写成整数也可以写成字符串
fn deserialize_difficulty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct DifficultyVisitor;

    impl<'de> Visitor<'de> for DifficultyVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer representing a difficulty")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(DifficultyVisitor)
}
