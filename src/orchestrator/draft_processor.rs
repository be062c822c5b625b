//! 单个草稿处理器
//!
//! 为一份草稿创建独立的表单：挂载 → 逐字段填写 → 提交，失败时写入失败记录

use tracing::{error, info, warn};

use crate::clients::TriviaApi;
use crate::error::{AppResult, FormError};
use crate::models::category::{CategoryChoice, CategoryId};
use crate::models::draft::QuestionDraft;
use crate::services::FailureWriter;
use crate::utils::truncate_text;
use crate::workflow::QuestionForm;

/// 单个草稿的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftResult {
    /// 提交成功，附带后端返回的题目 ID（如有）
    Submitted { created: Option<u64> },
    /// 未提交或提交失败
    Failed { reason: String },
}

impl DraftResult {
    pub fn is_submitted(&self) -> bool {
        matches!(self, DraftResult::Submitted { .. })
    }
}

/// 处理单个草稿
///
/// 只有写失败记录出错时才返回 `Err`；业务失败体现在 [`DraftResult::Failed`]。
pub async fn process_draft<A: TriviaApi>(
    api: A,
    draft: &QuestionDraft,
    draft_index: usize,
    failure_writer: &FailureWriter,
) -> AppResult<DraftResult> {
    let name = draft.display_name();
    info!(
        "[草稿 {}] 题干: {}",
        draft_index,
        truncate_text(&draft.question, 80)
    );

    let result = fill_and_submit(api, draft, draft_index).await;

    if let DraftResult::Failed { reason } = &result {
        warn!("[草稿 {}] ⚠️ 提交失败，写入失败记录: {}", draft_index, reason);
        failure_writer.write(&name, reason).await?;
    }

    Ok(result)
}

async fn fill_and_submit<A: TriviaApi>(
    api: A,
    draft: &QuestionDraft,
    draft_index: usize,
) -> DraftResult {
    let mut form = QuestionForm::new(api);

    // 分类目录加载失败时表单仍可用，只是只能选择 "Other"
    let mount_error = form.mount().await.err();
    if let Some(e) = &mount_error {
        warn!("[草稿 {}] {}", draft_index, e.user_message());
    }

    for (field, value) in draft.field_values() {
        if let Err(e) = form.handle_change(field, value) {
            return failed(e);
        }
    }

    // 选择框里只有已加载的分类可选；空 value 交给表单校验
    if let CategoryChoice::Existing(id) = &form.state().category {
        if !id.as_str().is_empty() && !form.state().categories.contains(id) {
            return match mount_error {
                Some(e) => failed(e),
                None => DraftResult::Failed {
                    reason: unknown_category(id),
                },
            };
        }
    }

    match form.submit().await {
        Ok(outcome) => {
            info!("[草稿 {}] ✓ 题目提交成功", draft_index);
            DraftResult::Submitted {
                created: outcome.created.created,
            }
        }
        Err(e) => {
            if let Some(cause) = std::error::Error::source(&e) {
                error!("[草稿 {}] ❌ {}: {}", draft_index, e, cause);
            }
            failed(e)
        }
    }
}

fn failed(e: FormError) -> DraftResult {
    DraftResult::Failed {
        reason: e.user_message(),
    }
}

fn unknown_category(id: &CategoryId) -> String {
    format!("unknown category {}", id)
}
