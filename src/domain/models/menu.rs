// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

/// 菜单条目字段类型（"Type" 列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Title,
    Amount,
    Description,
    Allergens,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Title => "Title",
            FieldKind::Amount => "Amount",
            FieldKind::Description => "Description",
            FieldKind::Allergens => "Allergens",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 原文与译文
///
/// 原文总是非空的裁剪文本；译文在翻译失败时为空字符串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPair {
    pub source: String,
    pub translation: String,
}

impl TextPair {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: translation.into(),
        }
    }
}

/// 输出表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportTable {
    CategoriesAndSubcategories,
    MenuItems,
    RestaurantDetails,
}

impl ExportTable {
    /// 所有表，按写入文件的顺序
    pub const ALL: [ExportTable; 3] = [
        ExportTable::CategoriesAndSubcategories,
        ExportTable::MenuItems,
        ExportTable::RestaurantDetails,
    ];

    /// 工作表名称
    pub fn sheet_name(&self) -> &'static str {
        match self {
            ExportTable::CategoriesAndSubcategories => "Categories and Subcategories",
            ExportTable::MenuItems => "Menu Items",
            ExportTable::RestaurantDetails => "Restaurant Details",
        }
    }

    /// 表头，译文列标题包含目标语言名称
    pub fn headers(&self, target_language: &str) -> Vec<String> {
        let translation = format!("{} translation", target_language);
        match self {
            ExportTable::MenuItems => vec![
                "Category".to_string(),
                "Subcategory".to_string(),
                "Item Title".to_string(),
                "Type".to_string(),
                "Ukrainian text".to_string(),
                translation,
            ],
            _ => vec!["Ukrainian text".to_string(), translation],
        }
    }
}

/// 导出行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportRow {
    /// 分类或子分类标题
    Category(TextPair),
    /// 菜单条目的一个字段
    MenuItem {
        category: String,
        subcategory: String,
        item_title: String,
        kind: FieldKind,
        text: TextPair,
    },
    /// 餐厅简介（副标题、关于文本）
    RestaurantDetail(TextPair),
}

impl ExportRow {
    pub fn table(&self) -> ExportTable {
        match self {
            ExportRow::Category(_) => ExportTable::CategoriesAndSubcategories,
            ExportRow::MenuItem { .. } => ExportTable::MenuItems,
            ExportRow::RestaurantDetail(_) => ExportTable::RestaurantDetails,
        }
    }

    /// 行内容，列顺序与表头一致
    pub fn cells(&self) -> Vec<&str> {
        match self {
            ExportRow::Category(text) | ExportRow::RestaurantDetail(text) => {
                vec![text.source.as_str(), text.translation.as_str()]
            }
            ExportRow::MenuItem {
                category,
                subcategory,
                item_title,
                kind,
                text,
            } => vec![
                category.as_str(),
                subcategory.as_str(),
                item_title.as_str(),
                kind.as_str(),
                text.source.as_str(),
                text.translation.as_str(),
            ],
        }
    }
}

/// 一次导出的统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// 成功读取标题的分类数
    pub categories: usize,
    /// 成功读取标题的子分类数
    pub subcategories: usize,
    /// 成功读取标题的菜单条目数
    pub items: usize,
    pub category_rows: usize,
    pub menu_item_rows: usize,
    pub restaurant_detail_rows: usize,
    /// 因查找失败而跳过的元素（分类、子分类、条目）
    pub skipped: usize,
    /// 关闭弹窗时回退到 Escape 的次数
    pub escape_fallbacks: usize,
}

impl ExportSummary {
    pub fn record_row(&mut self, table: ExportTable) {
        match table {
            ExportTable::CategoriesAndSubcategories => self.category_rows += 1,
            ExportTable::MenuItems => self.menu_item_rows += 1,
            ExportTable::RestaurantDetails => self.restaurant_detail_rows += 1,
        }
    }
}
