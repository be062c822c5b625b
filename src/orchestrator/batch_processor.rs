//! 批量草稿处理器
//!
//! 管理应用生命周期：加载草稿、控制并发、汇总统计

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::clients::{TriviaApi, TriviaClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::draft::QuestionDraft;
use crate::models::loaders::load_all_drafts;
use crate::orchestrator::draft_processor::process_draft;
use crate::services::FailureWriter;
use crate::utils::logging;

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    client: Arc<TriviaClient>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::init_log_file(&config.output_log_file)
            .with_context(|| format!("无法写入日志文件: {}", config.output_log_file))?;

        logging::log_startup(&config.api_base_url, config.max_concurrent_submissions);

        let client = build_client(&config).context("无法创建题库客户端")?;

        Ok(Self {
            config,
            client: Arc::new(client),
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunStats> {
        info!("\n📁 正在扫描待提交的草稿...");
        let drafts = load_all_drafts(&self.config.drafts_folder).await?;

        if drafts.is_empty() {
            warn!("⚠️ 没有找到待提交的TOML草稿，程序结束");
            return Ok(RunStats::default());
        }

        logging::log_drafts_loaded(drafts.len(), self.config.max_concurrent_submissions);

        let stats = process_all_drafts(self.client.clone(), drafts, &self.config).await?;

        logging::print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            &self.config.output_log_file,
        );

        Ok(stats)
    }
}

/// 按配置创建题库客户端
fn build_client(config: &Config) -> AppResult<TriviaClient> {
    Ok(TriviaClient::new(config)?)
}

/// 并发处理所有草稿
///
/// 每份草稿拥有独立的表单，同时进行的数量受 `max_concurrent_submissions` 限制。
pub async fn process_all_drafts<A>(
    api: Arc<A>,
    drafts: Vec<QuestionDraft>,
    config: &Config,
) -> Result<RunStats>
where
    A: TriviaApi + 'static,
{
    let semaphore = Arc::new(Semaphore::new(config.max_concurrent_submissions.max(1)));
    let failure_writer = Arc::new(FailureWriter::new(config.failed_drafts_file.clone()));
    let mut stats = RunStats {
        total: drafts.len(),
        ..Default::default()
    };

    let mut handles = Vec::with_capacity(drafts.len());
    for (idx, draft) in drafts.into_iter().enumerate() {
        let draft_index = idx + 1;
        let permit = semaphore.clone().acquire_owned().await?;
        let api = api.clone();
        let failure_writer = failure_writer.clone();

        let handle = tokio::spawn(async move {
            let _permit = permit;
            process_draft(api, &draft, draft_index, &failure_writer).await
        });
        handles.push((draft_index, handle));
    }

    for (draft_index, handle) in handles {
        match handle.await {
            Ok(Ok(result)) if result.is_submitted() => stats.success += 1,
            Ok(Ok(_)) => stats.failed += 1,
            Ok(Err(e)) => {
                error!("[草稿 {}] ❌ 处理过程中发生错误: {}", draft_index, e);
                stats.failed += 1;
            }
            Err(e) => {
                error!("[草稿 {}] 任务执行失败: {}", draft_index, e);
                stats.failed += 1;
            }
        }
    }

    Ok(stats)
}
