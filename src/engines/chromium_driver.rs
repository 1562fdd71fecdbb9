// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::BrowserSettings;
use crate::engines::traits::{EngineError, PageDriver};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Element, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Chromium 页面驱动
///
/// 基于 chromiumoxide 的单页浏览器会话，整个导出过程只使用一个页面
pub struct ChromiumDriver {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    remote: bool,
    page_load_timeout: Duration,
}

impl ChromiumDriver {
    /// 启动本地 Chrome 或连接远程 DevTools 端点
    pub async fn launch(settings: &BrowserSettings) -> Result<Self, EngineError> {
        let (browser, mut handler) = if let Some(ref url) = settings.remote_debugging_url {
            tracing::info!("Connecting to remote Chrome instance at: {}", url);
            Browser::connect(url)
                .await
                .map_err(|e| EngineError::Other(format!("Failed to connect to remote Chrome: {}", e)))?
        } else {
            let mut builder = BrowserConfig::builder()
                .no_sandbox()
                .request_timeout(Duration::from_secs(settings.request_timeout_secs))
                .arg("--disable-gpu")
                .arg("--disable-dev-shm-usage");

            if !settings.headless {
                builder = builder.with_head();
            }

            let config = builder.build().map_err(EngineError::Other)?;
            tracing::info!("Launching Chrome (headless: {})", settings.headless);
            Browser::launch(config).await?
        };

        // Drive the CDP event loop until the connection drops
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            browser,
            page,
            handler_task,
            remote: settings.remote_debugging_url.is_some(),
            page_load_timeout: Duration::from_secs(settings.page_load_timeout_secs),
        })
    }

    /// 关闭会话
    ///
    /// 远程浏览器只关闭本次打开的页面，本地浏览器整体退出
    pub async fn close(mut self) -> Result<(), EngineError> {
        let result = if self.remote {
            self.page.close().await.map_err(EngineError::from)
        } else {
            match self.browser.close().await {
                Ok(_) => {
                    let _ = self.browser.wait().await;
                    Ok(())
                }
                Err(e) => Err(EngineError::from(e)),
            }
        };
        self.handler_task.abort();
        result
    }
}

#[async_trait]
impl PageDriver for ChromiumDriver {
    type Element = Element;

    async fn goto(&self, url: &str) -> Result<(), EngineError> {
        tokio::time::timeout(self.page_load_timeout, self.page.goto(url))
            .await
            .map_err(|_| EngineError::Timeout)??;
        Ok(())
    }

    async fn find_all(
        &self,
        scope: Option<&Element>,
        selector: &str,
    ) -> Result<Vec<Element>, EngineError> {
        let elements = match scope {
            Some(element) => element.find_elements(selector).await?,
            None => self.page.find_elements(selector).await?,
        };
        Ok(elements)
    }

    async fn inner_text(&self, element: &Element) -> Result<String, EngineError> {
        Ok(element.inner_text().await?.unwrap_or_default())
    }

    async fn click(&self, element: &Element) -> Result<(), EngineError> {
        // A script click works on elements hidden behind overlays or outside the viewport
        element
            .call_js_fn("function() { this.click(); }", false)
            .await?;
        Ok(())
    }

    async fn press_escape(&self) -> Result<(), EngineError> {
        self.page.find_element("body").await?.press_key("Escape").await?;
        Ok(())
    }
}
