//! 表单校验 - 业务能力层
//!
//! 对应浏览器端的 required / disabled 规则，只看当前表单状态

use crate::error::ValidationError;
use crate::models::category::CategoryChoice;
use crate::models::form_state::FormState;

/// 校验表单是否允许提交
///
/// 与 HTML `required` 一致，只有空字符串算缺失。
/// 规则按表单控件顺序检查，返回第一个失败项。
pub fn validate(state: &FormState) -> Result<(), ValidationError> {
    if state.question.is_empty() {
        return Err(ValidationError::EmptyQuestion);
    }
    if state.answer.is_empty() {
        return Err(ValidationError::EmptyAnswer);
    }
    match &state.category {
        CategoryChoice::None => return Err(ValidationError::NoCategorySelected),
        // 空 value 与 required 选择框未选择等价
        CategoryChoice::Existing(id) if id.as_str().is_empty() => {
            return Err(ValidationError::NoCategorySelected)
        }
        _ => {}
    }
    if state.category.is_other() && state.new_category.is_empty() {
        return Err(ValidationError::EmptyNewCategory);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            question: "What is 2+2?".to_string(),
            answer: "4".to_string(),
            category: CategoryChoice::from_value("1"),
            ..FormState::default()
        }
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn test_required_text_fields() {
        let state = FormState {
            question: String::new(),
            ..filled()
        };
        assert_eq!(validate(&state), Err(ValidationError::EmptyQuestion));

        let state = FormState {
            answer: String::new(),
            ..filled()
        };
        assert_eq!(validate(&state), Err(ValidationError::EmptyAnswer));
    }

    #[test]
    fn test_none_category_blocks_submission() {
        let state = FormState {
            category: CategoryChoice::None,
            ..filled()
        };
        assert_eq!(validate(&state), Err(ValidationError::NoCategorySelected));
    }

    #[test]
    fn test_empty_category_value_blocks_submission() {
        let state = FormState {
            category: CategoryChoice::from_value(""),
            ..filled()
        };
        assert_eq!(validate(&state), Err(ValidationError::NoCategorySelected));
    }

    #[test]
    fn test_new_category_required_only_for_other() {
        let state = FormState {
            category: CategoryChoice::Other,
            ..filled()
        };
        assert_eq!(validate(&state), Err(ValidationError::EmptyNewCategory));

        let state = FormState {
            category: CategoryChoice::Other,
            new_category: "Music".to_string(),
            ..filled()
        };
        assert_eq!(validate(&state), Ok(()));

        // 非 other 时 newCategory 可为空，也可为任意值
        let state = FormState {
            new_category: "ignored".to_string(),
            ..filled()
        };
        assert_eq!(validate(&state), Ok(()));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let state = FormState {
            question: " ".to_string(),
            ..filled()
        };
        assert_eq!(validate(&state), Ok(()));
    }
}
