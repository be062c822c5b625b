//! # Add Trivia Question
//!
//! 题库题目提交表单的无界面实现，外加一个批量提交草稿的命令行工具
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有组件生命周期（取消令牌），只暴露能力
//! - `Lifecycle` - 卸载后丢弃进行中的请求响应
//!
//! ### ② 业务能力层（Clients / Services）
//! - `clients/` - `TriviaApi`：分类目录服务 + 题目录入服务
//! - `services/` - 表单校验、失败记录
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - `QuestionForm`：挂载 → 编辑 → 提交
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量草稿处理器，管理并发
//! - `orchestrator/draft_processor` - 单个草稿处理器
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{TriviaApi, TriviaClient};
pub use config::Config;
pub use error::{ApiError, AppError, AppResult, FormError, ValidationError};
pub use infrastructure::UnmountHandle;
pub use models::{
    Categories, CategoryChoice, CategoryId, Difficulty, Field, FormState, FormView, NewQuestion,
    QuestionDraft,
};
pub use orchestrator::{process_all_drafts, App, RunStats};
pub use workflow::{QuestionForm, SubmitOutcome};
