//! 题目提交表单 - 流程层
//!
//! 核心职责：持有一份表单状态，定义"挂载 → 编辑 → 提交"的完整流程
//!
//! 1. `mount` 获取分类目录
//! 2. `handle_change` 逐字段更新状态
//! 3. `submit` 校验、提交、成功后重置
//!
//! 失败不弹窗，统一以 [`FormError`] 返回，由展示层决定如何呈现。
//! 组件卸载后（`unmount` 或 drop），进行中的请求不会再写入状态。

use tracing::{debug, info, warn};

use crate::clients::TriviaApi;
use crate::error::{FormError, ValidationError};
use crate::infrastructure::{Lifecycle, UnmountHandle};
use crate::models::category::CategoryChoice;
use crate::models::form_state::{Field, FormState, FormView};
use crate::models::question::{Difficulty, NewQuestion, QuestionCreated};
use crate::services::validation;

/// 提交成功的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// 实际发送的载荷
    pub payload: NewQuestion,
    /// 后端响应（可能为空）
    pub created: QuestionCreated,
}

/// 题目提交表单
///
/// - 唯一持有 FormState，所有修改都经过 `&mut self`
/// - 只依赖 [`TriviaApi`] 能力
/// - 不做重试
pub struct QuestionForm<A> {
    api: A,
    state: FormState,
    lifecycle: Lifecycle,
}

impl<A: TriviaApi> QuestionForm<A> {
    /// 以默认状态创建表单（尚未挂载）
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: FormState::default(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn view(&self) -> FormView {
        self.state.view()
    }

    /// 挂载：获取一次分类目录
    ///
    /// 失败时分类目录保持原样（首次挂载即为空），表单仍可渲染。
    pub async fn mount(&mut self) -> Result<(), FormError> {
        if self.lifecycle.is_unmounted() {
            return Err(FormError::Unmounted);
        }

        debug!("表单挂载，正在获取分类目录");

        match self.lifecycle.guard(self.api.fetch_categories()).await {
            None => {
                debug!("表单已卸载，丢弃分类目录响应");
                Err(FormError::Unmounted)
            }
            Some(Ok(categories)) => {
                info!("✓ 分类目录加载完成，共 {} 个分类", categories.len());
                self.state.categories = categories;
                Ok(())
            }
            Some(Err(e)) => {
                warn!("⚠️ 分类目录加载失败: {}", e);
                Err(FormError::CategoryLoad(e))
            }
        }
    }

    /// 将字段设置为输入值，其余字段不变
    ///
    /// 难度只接受 1-5，越界时状态不变并返回 `InvalidValue`。
    pub fn handle_change(&mut self, field: Field, value: &str) -> Result<(), FormError> {
        match field {
            Field::Question => self.state.question = value.to_string(),
            Field::Answer => self.state.answer = value.to_string(),
            Field::Difficulty => {
                self.state.difficulty =
                    Difficulty::from_value(value).ok_or_else(|| FormError::InvalidValue {
                        field: field.to_string(),
                        value: value.to_string(),
                    })?;
            }
            Field::Category => self.state.category = CategoryChoice::from_value(value),
            Field::NewCategory => self.state.new_category = value.to_string(),
        }
        Ok(())
    }

    /// 按表单控件 name 更新字段
    pub fn handle_named_change(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = name.parse::<Field>().map_err(FormError::UnknownField)?;
        self.handle_change(field, value)
    }

    /// 提交按钮是否可用
    pub fn can_submit(&self) -> bool {
        self.state.submit_enabled()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate(&self.state)
    }

    /// 提交题目
    ///
    /// 校验失败时不发请求；提交失败时表单内容保持不变，方便用户重试；
    /// 提交成功后所有可编辑字段恢复默认值。
    pub async fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        if self.lifecycle.is_unmounted() {
            return Err(FormError::Unmounted);
        }

        self.validate()?;

        let payload = self.state.to_payload();
        debug!("📤 正在提交题目: {:?}", payload);

        match self.lifecycle.guard(self.api.create_question(&payload)).await {
            None => {
                debug!("表单已卸载，丢弃提交响应");
                Err(FormError::Unmounted)
            }
            Some(Ok(created)) => {
                info!("✓ 题目提交成功 (created: {:?})", created.created);
                self.state.reset_fields();
                Ok(SubmitOutcome { payload, created })
            }
            Some(Err(e)) => {
                warn!("⚠️ 题目提交失败: {}", e);
                Err(FormError::Submit(e))
            }
        }
    }

    /// 可交给其他任务的卸载句柄
    pub fn unmount_handle(&self) -> UnmountHandle {
        self.lifecycle.handle()
    }

    pub fn is_unmounted(&self) -> bool {
        self.lifecycle.is_unmounted()
    }

    /// 卸载并销毁表单
    pub fn unmount(self) {
        self.lifecycle.unmount();
    }
}
