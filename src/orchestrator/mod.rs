//! 编排层（Orchestration Layer）
//!
//! ### `batch_processor` - 批量草稿处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载草稿（Vec<QuestionDraft>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `draft_processor` - 单个草稿处理器
//! - 为草稿创建独立的 QuestionForm
//! - 挂载、填写、提交
//! - 记录失败草稿
//!
//! ```text
//! batch_processor (处理 Vec<QuestionDraft>)
//!     ↓
//! draft_processor (处理单个 QuestionDraft)
//!     ↓
//! workflow::QuestionForm (挂载 / 编辑 / 提交)
//!     ↓
//! services / clients (校验、失败记录、后端 API)
//!     ↓
//! infrastructure (Lifecycle)
//! ```

pub mod batch_processor;
pub mod draft_processor;

pub use batch_processor::{process_all_drafts, App, RunStats};
pub use draft_processor::{process_draft, DraftResult};
