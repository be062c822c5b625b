//! 组件生命周期 - 基础设施层
//!
//! 持有组件的取消令牌，只暴露"在组件存活期间运行异步请求"的能力

use std::future::Future;
use tokio_util::sync::CancellationToken;

/// 组件生命周期
///
/// 职责：
/// - 持有唯一的取消令牌
/// - 卸载后让所有进行中的请求立即返回 `None`
/// - 不认识表单字段
pub struct Lifecycle {
    token: CancellationToken,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    pub fn is_unmounted(&self) -> bool {
        self.token.is_cancelled()
    }

    /// 卸载组件
    pub fn unmount(&self) {
        self.token.cancel();
    }

    /// 可跨任务传递的卸载句柄
    pub fn handle(&self) -> UnmountHandle {
        UnmountHandle {
            token: self.token.clone(),
        }
    }

    /// 在组件存活期间运行 `fut`
    ///
    /// 组件已卸载或在 `fut` 完成前被卸载时返回 `None`，`fut` 被丢弃。
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            output = fut => {
                // 完成与卸载同时发生时，以卸载为准
                (!self.token.is_cancelled()).then_some(output)
            }
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// 卸载句柄，可 clone 后交给其他任务（例如展示层的关闭事件）
#[derive(Clone, Debug)]
pub struct UnmountHandle {
    token: CancellationToken,
}

impl UnmountHandle {
    pub fn unmount(&self) {
        self.token.cancel();
    }

    pub fn is_unmounted(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_guard_passes_output_while_mounted() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.guard(async { 42 }).await, Some(42));
    }

    #[tokio::test]
    async fn test_guard_short_circuits_after_unmount() {
        let lifecycle = Lifecycle::new();
        lifecycle.unmount();
        assert_eq!(lifecycle.guard(async { 42 }).await, None);
    }

    #[tokio::test]
    async fn test_handle_unmounts_in_flight_request() {
        let lifecycle = Lifecycle::new();
        let handle = lifecycle.handle();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            handle.unmount();
        });

        let result = lifecycle
            .guard(tokio::time::sleep(Duration::from_secs(30)))
            .await;

        assert_eq!(result, None);
        assert!(lifecycle.is_unmounted());
    }

    #[test]
    fn test_drop_cancels_outstanding_handles() {
        let lifecycle = Lifecycle::new();
        let handle = lifecycle.handle();
        drop(lifecycle);
        assert!(handle.is_unmounted());
    }
}
