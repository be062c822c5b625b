use std::fmt;
use std::str::FromStr;

use crate::models::category::{category_options, Categories, CategoryChoice, CategoryOption};
use crate::models::question::{Difficulty, NewQuestion};

/// 表单中可编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Question,
    Answer,
    Difficulty,
    Category,
    NewCategory,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Question,
        Field::Answer,
        Field::Difficulty,
        Field::Category,
        Field::NewCategory,
    ];

    /// 表单控件的 name 属性
    pub fn name(self) -> &'static str {
        match self {
            Field::Question => "question",
            Field::Answer => "answer",
            Field::Difficulty => "difficulty",
            Field::Category => "category",
            Field::NewCategory => "newCategory",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// 表单状态
///
/// 挂载时以默认值创建；逐字段编辑；分类目录在挂载时填充一次；
/// 提交成功后用户可编辑字段全部恢复默认。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub category: CategoryChoice,
    pub categories: Categories,
    pub new_category: String,
}

impl FormState {
    /// 读取字段当前值（以表单控件的字符串形式）
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Question => self.question.clone(),
            Field::Answer => self.answer.clone(),
            Field::Difficulty => self.difficulty.to_string(),
            Field::Category => self.category.as_value().to_string(),
            Field::NewCategory => self.new_category.clone(),
        }
    }

    /// 提交按钮是否可用：未选择分类时禁用
    pub fn submit_enabled(&self) -> bool {
        !self.category.is_none()
    }

    /// 选择 "Other" 时才需要（并显示）新分类输入框
    pub fn new_category_required(&self) -> bool {
        self.category.is_other()
    }

    /// 恢复用户可编辑字段的默认值，保留已加载的分类目录
    pub fn reset_fields(&mut self) {
        let categories = std::mem::take(&mut self.categories);
        *self = FormState {
            categories,
            ..FormState::default()
        };
    }

    /// 生成提交载荷
    pub fn to_payload(&self) -> NewQuestion {
        NewQuestion {
            question: self.question.clone(),
            answer: self.answer.clone(),
            difficulty: self.difficulty,
            category: self.category.clone(),
            new_category: self.new_category.clone(),
        }
    }

    /// 当前状态对应的视图快照
    pub fn view(&self) -> FormView {
        FormView {
            question: self.question.clone(),
            answer: self.answer.clone(),
            difficulty: self.difficulty,
            difficulty_options: Difficulty::all().collect(),
            category: self.category.as_value().to_string(),
            category_options: category_options(&self.categories),
            new_category: self.new_category.clone(),
            new_category_visible: self.new_category_required(),
            new_category_required: self.new_category_required(),
            submit_enabled: self.submit_enabled(),
        }
    }
}

/// 展示层渲染表单所需的全部信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub difficulty_options: Vec<Difficulty>,
    pub category: String,
    pub category_options: Vec<CategoryOption>,
    pub new_category: String,
    pub new_category_visible: bool,
    pub new_category_required: bool,
    pub submit_enabled: bool,
}
