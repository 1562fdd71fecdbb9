// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::menu::FieldKind;
use crate::domain::models::outcome::Outcome;
use crate::domain::services::selectors;
use crate::engines::traits::{EngineError, PageDriver};

/// 可提取的语义字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Subtitle,
    About,
    CategoryTitle,
    SubcategoryTitle,
    ItemTitle,
    ItemAmount,
    ItemDescription,
    ItemAllergens,
}

impl Field {
    pub fn selector(&self) -> &'static str {
        match self {
            Field::Subtitle => selectors::SUBTITLE,
            Field::About => selectors::ABOUT,
            Field::CategoryTitle => selectors::CATEGORY_TITLE,
            Field::SubcategoryTitle => selectors::DISH_LIST_TITLE,
            Field::ItemTitle => selectors::ITEM_TITLE,
            Field::ItemAmount => selectors::ITEM_AMOUNT,
            Field::ItemDescription => selectors::DESCRIPTION,
            Field::ItemAllergens => selectors::ALLERGENS,
        }
    }

    /// 弹窗字段在整个文档中查找（同一时间只有一个弹窗）
    pub fn is_document_scoped(&self) -> bool {
        matches!(
            self,
            Field::Subtitle | Field::About | Field::ItemDescription | Field::ItemAllergens
        )
    }

    /// 对应 "Type" 列的字段类型，非菜单条目字段返回 `None`
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Field::ItemTitle => Some(FieldKind::Title),
            Field::ItemAmount => Some(FieldKind::Amount),
            Field::ItemDescription => Some(FieldKind::Description),
            Field::ItemAllergens => Some(FieldKind::Allergens),
            _ => None,
        }
    }
}

/// 字段提取器
///
/// 只读取当前渲染的页面，从不触发导航
pub struct FieldExtractor<'a, D: PageDriver> {
    driver: &'a D,
}

impl<'a, D: PageDriver> FieldExtractor<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// 读取一个字段的裁剪文本
    ///
    /// 空白文本视为不存在
    pub async fn read_field(&self, scope: Option<&D::Element>, field: Field) -> Outcome<String> {
        let scope = if field.is_document_scoped() { None } else { scope };
        let text = match field {
            Field::ItemDescription => self.read_description().await,
            _ => self.read_text(scope, field.selector()).await,
        };

        match text {
            Ok(Some(text)) if !text.is_empty() => Outcome::Found(text),
            Ok(_) => Outcome::Absent,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }

    async fn read_text(
        &self,
        scope: Option<&D::Element>,
        selector: &str,
    ) -> Result<Option<String>, EngineError> {
        match self.driver.find(scope, selector).await? {
            Some(element) => Ok(Some(self.driver.inner_text(&element).await?.trim().to_string())),
            None => Ok(None),
        }
    }

    // Paragraphs are joined line by line; a container without paragraphs is read whole
    async fn read_description(&self) -> Result<Option<String>, EngineError> {
        let Some(container) = self.driver.find(None, selectors::DESCRIPTION).await? else {
            return Ok(None);
        };

        let paragraphs = self
            .driver
            .find_all(Some(&container), selectors::DESCRIPTION_PARAGRAPH)
            .await?;

        if paragraphs.is_empty() {
            return Ok(Some(self.driver.inner_text(&container).await?.trim().to_string()));
        }

        let mut lines = Vec::with_capacity(paragraphs.len());
        for paragraph in &paragraphs {
            lines.push(self.driver.inner_text(paragraph).await?.trim().to_string());
        }
        Ok(Some(lines.join("\n").trim().to_string()))
    }
}
