// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chromiumoxide::error::CdpError;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 浏览器协议错误
    #[error("Browser error: {0}")]
    Browser(#[from] CdpError),
    /// 超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 页面驱动特质
///
/// 对浏览器会话的最小抽象：加载URL、按选择器查找元素、点击、读取文本。
/// 元素句柄由实现方定义，遍历时按层级一次性快照后逐个访问。
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// 元素句柄
    type Element: Send + Sync;

    /// 加载URL并等待页面加载事件
    async fn goto(&self, url: &str) -> Result<(), EngineError>;

    /// 查找所有匹配的元素
    ///
    /// `scope` 为 `None` 时在整个文档中查找，否则只查找其后代元素。
    /// 结果按文档顺序排列。
    async fn find_all(
        &self,
        scope: Option<&Self::Element>,
        selector: &str,
    ) -> Result<Vec<Self::Element>, EngineError>;

    /// 查找第一个匹配的元素，不存在时返回 `None`
    async fn find(
        &self,
        scope: Option<&Self::Element>,
        selector: &str,
    ) -> Result<Option<Self::Element>, EngineError> {
        Ok(self.find_all(scope, selector).await?.into_iter().next())
    }

    /// 读取元素的可见文本（未裁剪）
    async fn inner_text(&self, element: &Self::Element) -> Result<String, EngineError>;

    /// 以脚本方式点击元素
    async fn click(&self, element: &Self::Element) -> Result<(), EngineError>;

    /// 向文档发送 Escape 按键
    async fn press_escape(&self) -> Result<(), EngineError>;
}
