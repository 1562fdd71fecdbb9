// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::menu::{ExportRow, ExportSummary, TextPair};
use crate::domain::models::outcome::Outcome;
use crate::domain::repositories::export_repository::{ExportError, ExportSink};
use crate::domain::services::field_extractor::{Field, FieldExtractor};
use crate::domain::services::menu_navigator::{MenuNavigator, ModalDismissal, NavigationError};
use crate::domain::services::translation_service::Translator;
use crate::engines::traits::PageDriver;
use crate::engines::wait::WaitTiming;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ExportMenuError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// 菜单条目所在的分类路径
struct ItemPath<'p> {
    category: &'p str,
    subcategory: &'p str,
    item_title: &'p str,
}

/// 导出菜单用例
///
/// 驱动导航器做一次深度优先遍历，每个叶子字段依次经过提取、翻译并写入导出目标
pub struct ExportMenuUseCase<'a, D: PageDriver, T: Translator> {
    driver: &'a D,
    translator: &'a T,
    target_language: String,
    timing: WaitTiming,
}

impl<'a, D, T> ExportMenuUseCase<'a, D, T>
where
    D: PageDriver,
    T: Translator,
{
    pub fn new(driver: &'a D, translator: &'a T, target_language: impl Into<String>, timing: WaitTiming) -> Self {
        Self {
            driver,
            translator,
            target_language: target_language.into(),
            timing,
        }
    }

    /// 执行一次完整导出
    ///
    /// 只有页面加载失败、菜单入口不可用和导出目标写入失败会中止；
    /// 其余查找失败都只跳过当前元素
    pub async fn execute<S: ExportSink>(
        &self,
        restaurant_url: &str,
        sink: &mut S,
    ) -> Result<ExportSummary, ExportMenuError> {
        let navigator = MenuNavigator::new(self.driver, self.timing);
        let extractor = FieldExtractor::new(self.driver);
        let mut summary = ExportSummary::default();

        navigator.open_restaurant(restaurant_url).await?;

        // 1. Restaurant details
        for (field, label) in [(Field::Subtitle, "subtitle"), (Field::About, "about")] {
            match extractor.read_field(None, field).await {
                Outcome::Found(text) => {
                    info!("Crawled {} text: {}", label, text);
                    let pair = self.translate(text).await;
                    self.write(sink, &mut summary, ExportRow::RestaurantDetail(pair))?;
                }
                miss => warn!("Error retrieving {} text: {}", label, miss_reason(&miss)),
            }
        }

        // 2. Menu
        navigator.enter_menu().await?;

        let categories = match navigator.categories().await {
            Ok(categories) => categories,
            Err(e) => {
                warn!("Error retrieving categories: {}", e);
                Vec::new()
            }
        };
        info!("Found {} main categories.", categories.len());

        for category in &categories {
            let category_title = match extractor.read_field(Some(category), Field::CategoryTitle).await {
                Outcome::Found(title) => title,
                miss => {
                    warn!("Error retrieving category title: {}", miss_reason(&miss));
                    summary.skipped += 1;
                    continue;
                }
            };
            info!("Crawled category title: {}", category_title);
            summary.categories += 1;
            let pair = self.translate(category_title.clone()).await;
            self.write(sink, &mut summary, ExportRow::Category(pair))?;

            info!("Clicking on category: {}", category_title);
            if let Some(reason) = navigator.select_category(category).await.describe_miss() {
                warn!("Error clicking on category '{}': {}", category_title, reason);
                summary.skipped += 1;
                continue;
            }

            self.export_dish_lists(&navigator, &extractor, &category_title, sink, &mut summary)
                .await?;
        }

        info!(
            "Export finished: {} categories, {} subcategories, {} items ({} skipped)",
            summary.categories, summary.subcategories, summary.items, summary.skipped
        );
        Ok(summary)
    }

    async fn export_dish_lists<S: ExportSink>(
        &self,
        navigator: &MenuNavigator<'_, D>,
        extractor: &FieldExtractor<'_, D>,
        category_title: &str,
        sink: &mut S,
        summary: &mut ExportSummary,
    ) -> Result<(), ExportMenuError> {
        let dish_lists = match navigator.dish_lists().await {
            Ok(dish_lists) => dish_lists,
            Err(e) => {
                warn!("Error retrieving dish lists: {}", e);
                return Ok(());
            }
        };
        info!("Found {} dish lists in category '{}'.", dish_lists.len(), category_title);

        for dish_list in &dish_lists {
            let subcategory_title = match extractor.read_field(Some(dish_list), Field::SubcategoryTitle).await {
                Outcome::Found(title) => title,
                miss => {
                    warn!("Error retrieving subcategory title: {}", miss_reason(&miss));
                    summary.skipped += 1;
                    continue;
                }
            };
            info!("Crawled subcategory title: {}", subcategory_title);
            summary.subcategories += 1;
            let pair = self.translate(subcategory_title.clone()).await;
            self.write(sink, summary, ExportRow::Category(pair))?;

            let items = match navigator.items(dish_list).await {
                Ok(items) => items,
                Err(e) => {
                    warn!("Error retrieving menu items: {}", e);
                    summary.skipped += 1;
                    continue;
                }
            };
            info!("Found {} menu items in subcategory '{}'.", items.len(), subcategory_title);

            for item in &items {
                self.export_item(navigator, extractor, category_title, &subcategory_title, item, sink, summary)
                    .await?;
            }
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    async fn export_item<S: ExportSink>(
        &self,
        navigator: &MenuNavigator<'_, D>,
        extractor: &FieldExtractor<'_, D>,
        category_title: &str,
        subcategory_title: &str,
        item: &D::Element,
        sink: &mut S,
        summary: &mut ExportSummary,
    ) -> Result<(), ExportMenuError> {
        let item_title = match extractor.read_field(Some(item), Field::ItemTitle).await {
            Outcome::Found(title) => title,
            miss => {
                warn!("Error retrieving item title: {}", miss_reason(&miss));
                summary.skipped += 1;
                return Ok(());
            }
        };
        info!("Crawled item title: {}", item_title);
        summary.items += 1;

        let path = ItemPath {
            category: category_title,
            subcategory: subcategory_title,
            item_title: &item_title,
        };
        self.write_item_field(sink, summary, &path, Field::ItemTitle, item_title.clone())
            .await?;

        match extractor.read_field(Some(item), Field::ItemAmount).await {
            Outcome::Found(amount) => {
                info!("Crawled item amount: {}", amount);
                self.write_item_field(sink, summary, &path, Field::ItemAmount, amount)
                    .await?;
            }
            _ => info!("Item amount not found for '{}'. Continuing...", item_title),
        }

        info!("Clicking on item to get description: {}", item_title);
        if let Some(reason) = navigator.open_item_detail(item).await.describe_miss() {
            warn!("Error clicking on item title '{}': {}", item_title, reason);
            summary.skipped += 1;
            return Ok(());
        }

        match extractor.read_field(None, Field::ItemDescription).await {
            Outcome::Found(description) => {
                info!("Crawled item description: {}", description);
                self.write_item_field(sink, summary, &path, Field::ItemDescription, description)
                    .await?;
            }
            _ => info!("Item description not found for '{}'. Continuing...", item_title),
        }

        match extractor.read_field(None, Field::ItemAllergens).await {
            Outcome::Found(allergens) => {
                info!("Crawled allergens: {}", allergens);
                self.write_item_field(sink, summary, &path, Field::ItemAllergens, allergens)
                    .await?;
            }
            _ => info!("No allergens found for '{}'. Continuing...", item_title),
        }

        if navigator.close_item_detail().await != ModalDismissal::CloseButton {
            summary.escape_fallbacks += 1;
        }
        Ok(())
    }

    async fn write_item_field<S: ExportSink>(
        &self,
        sink: &mut S,
        summary: &mut ExportSummary,
        path: &ItemPath<'_>,
        field: Field,
        source: String,
    ) -> Result<(), ExportError> {
        let Some(kind) = field.kind() else {
            return Ok(());
        };
        let text = self.translate(source).await;
        self.write(
            sink,
            summary,
            ExportRow::MenuItem {
                category: path.category.to_string(),
                subcategory: path.subcategory.to_string(),
                item_title: path.item_title.to_string(),
                kind,
                text,
            },
        )
    }

    async fn translate(&self, source: String) -> TextPair {
        let translation = self.translator.translate(&source, &self.target_language).await;
        TextPair { source, translation }
    }

    fn write<S: ExportSink>(
        &self,
        sink: &mut S,
        summary: &mut ExportSummary,
        row: ExportRow,
    ) -> Result<(), ExportError> {
        let table = row.table();
        sink.append(row)?;
        summary.record_row(table);
        Ok(())
    }
}

fn miss_reason<T>(outcome: &Outcome<T>) -> String {
    outcome.describe_miss().unwrap_or_default()
}
