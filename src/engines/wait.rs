// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::PageDriver;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// 等待时间配置
///
/// 页面渲染的每个过渡点都通过这些参数限定等待时间
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTiming {
    /// 首页可交互的最长等待时间
    pub ready_timeout: Duration,
    /// 点击后等待下一层元素渲染的最长时间
    pub transition_timeout: Duration,
    /// 点击后的固定停顿
    pub settle_delay: Duration,
    /// 轮询间隔
    pub poll_interval: Duration,
}

impl Default for WaitTiming {
    fn default() -> Self {
        Self {
            ready_timeout: Duration::from_secs(10),
            transition_timeout: Duration::from_secs(2),
            settle_delay: Duration::from_millis(100),
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// 轮询条件直到满足或超时
///
/// 条件至少会被检查一次；超时返回 `false`。
pub async fn wait_until<F, Fut>(timeout: Duration, poll_interval: Duration, mut condition: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if condition().await {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        tokio::time::sleep(poll_interval.min(deadline - now)).await;
    }
}

/// 等待选择器在文档中出现
pub async fn wait_for_selector<D: PageDriver>(
    driver: &D,
    selector: &str,
    timeout: Duration,
    poll_interval: Duration,
) -> bool {
    let found = wait_until(timeout, poll_interval, move || async move {
        matches!(driver.find(None, selector).await, Ok(Some(_)))
    })
    .await;

    if !found {
        tracing::debug!("Selector '{}' did not appear within {:?}", selector, timeout);
    }
    found
}
