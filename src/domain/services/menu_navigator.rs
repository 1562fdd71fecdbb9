// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::outcome::Outcome;
use crate::domain::services::selectors;
use crate::engines::traits::{EngineError, PageDriver};
use crate::engines::wait::{wait_for_selector, WaitTiming};
use thiserror::Error;
use tracing::{debug, info, warn};

/// 中止整个导出的导航错误
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Restaurant page failed to load: {0}")]
    PageLoad(String),
    #[error("Menu entry point unavailable: {0}")]
    MenuUnavailable(String),
}

/// 关闭弹窗所用的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalDismissal {
    /// 点击关闭按钮
    CloseButton,
    /// 关闭按钮缺失或点击失败，发送 Escape
    Escape,
    /// 两种方式都失败
    Failed,
}

/// 菜单导航器
///
/// 按位置遍历三级结构（分类 → 子分类 → 菜单条目）。每进入一层只对当前渲染的
/// 节点做一次快照，之后按快照顺序访问，不在迭代中重新查询。
pub struct MenuNavigator<'a, D: PageDriver> {
    driver: &'a D,
    timing: WaitTiming,
}

impl<'a, D: PageDriver> MenuNavigator<'a, D> {
    pub fn new(driver: &'a D, timing: WaitTiming) -> Self {
        Self { driver, timing }
    }

    /// 打开餐厅页面并等待其可交互
    pub async fn open_restaurant(&self, url: &str) -> Result<(), NavigationError> {
        info!("Opening URL: {}", url);
        self.driver
            .goto(url)
            .await
            .map_err(|e| NavigationError::PageLoad(e.to_string()))?;

        if !self.wait_for(selectors::LANDING_READY, self.timing.ready_timeout).await {
            return Err(NavigationError::PageLoad(format!(
                "page did not become interactive within {:?}",
                self.timing.ready_timeout
            )));
        }
        Ok(())
    }

    /// 点击第一个菜单入口
    ///
    /// 入口缺失或点击失败都会中止导出
    pub async fn enter_menu(&self) -> Result<(), NavigationError> {
        let entry = match self.driver.find(None, selectors::MAIN_MENU_ITEM).await {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                return Err(NavigationError::MenuUnavailable(format!(
                    "'{}' not found",
                    selectors::MAIN_MENU_ITEM
                )))
            }
            Err(e) => return Err(NavigationError::MenuUnavailable(e.to_string())),
        };

        let label = self.driver.inner_text(&entry).await.unwrap_or_default();
        info!("Clicking on first menu item: {}", label.trim());
        self.driver
            .click(&entry)
            .await
            .map_err(|e| NavigationError::MenuUnavailable(e.to_string()))?;

        self.settle().await;
        if !self.wait_for(selectors::CATEGORY, self.timing.ready_timeout).await {
            warn!("Side menu did not render; no categories to export");
        }
        Ok(())
    }

    /// 当前渲染的分类快照
    pub async fn categories(&self) -> Result<Vec<D::Element>, EngineError> {
        self.driver.find_all(None, selectors::CATEGORY).await
    }

    /// 激活分类，使其菜品列表渲染出来
    pub async fn select_category(&self, category: &D::Element) -> Outcome<()> {
        let link = match Outcome::from(
            self.driver
                .find(Some(category), selectors::CATEGORY_LINK)
                .await,
        ) {
            Outcome::Found(link) => link,
            Outcome::Absent => return Outcome::Absent,
            Outcome::Failed(reason) => return Outcome::Failed(reason),
        };

        if let Err(e) = self.driver.click(&link).await {
            return Outcome::Failed(e.to_string());
        }

        self.settle().await;
        self.wait_for(selectors::DISH_LIST, self.timing.transition_timeout)
            .await;
        Outcome::Found(())
    }

    /// 当前分类下的菜品列表快照
    pub async fn dish_lists(&self) -> Result<Vec<D::Element>, EngineError> {
        self.driver.find_all(None, selectors::DISH_LIST).await
    }

    /// 菜品列表内的菜单条目快照
    pub async fn items(&self, dish_list: &D::Element) -> Result<Vec<D::Element>, EngineError> {
        self.driver
            .find_all(Some(dish_list), selectors::MENU_ITEM)
            .await
    }

    /// 点击条目标题打开详情弹窗
    pub async fn open_item_detail(&self, item: &D::Element) -> Outcome<()> {
        let title = match Outcome::from(self.driver.find(Some(item), selectors::ITEM_TITLE).await) {
            Outcome::Found(title) => title,
            Outcome::Absent => return Outcome::Absent,
            Outcome::Failed(reason) => return Outcome::Failed(reason),
        };

        if let Err(e) = self.driver.click(&title).await {
            return Outcome::Failed(e.to_string());
        }

        self.settle().await;
        if !self
            .wait_for(selectors::MODAL_READY, self.timing.transition_timeout)
            .await
        {
            debug!("Item detail popup did not render any known field");
        }
        Outcome::Found(())
    }

    /// 关闭详情弹窗
    ///
    /// 优先点击关闭按钮，失败时回退到 Escape，保证遍历不会卡在弹窗上
    pub async fn close_item_detail(&self) -> ModalDismissal {
        let primary = match self.driver.find(None, selectors::CLOSE_BUTTON).await {
            Ok(Some(button)) => self.driver.click(&button).await,
            Ok(None) => Err(EngineError::Other(format!(
                "'{}' not found",
                selectors::CLOSE_BUTTON
            ))),
            Err(e) => Err(e),
        };

        let dismissal = match primary {
            Ok(()) => ModalDismissal::CloseButton,
            Err(e) => {
                warn!("Error closing popup: {}", e);
                match self.driver.press_escape().await {
                    Ok(()) => ModalDismissal::Escape,
                    Err(e) => {
                        warn!("Escape key did not dismiss popup: {}", e);
                        ModalDismissal::Failed
                    }
                }
            }
        };

        self.settle().await;
        dismissal
    }

    async fn settle(&self) {
        if !self.timing.settle_delay.is_zero() {
            tokio::time::sleep(self.timing.settle_delay).await;
        }
    }

    async fn wait_for(&self, selector: &str, timeout: std::time::Duration) -> bool {
        wait_for_selector(self.driver, selector, timeout, self.timing.poll_interval).await
    }
}
