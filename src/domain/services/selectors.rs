// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! expz.menu 页面结构对应的 CSS 选择器

// Landing page
pub const SUBTITLE: &str = "div.subtitle";
pub const ABOUT: &str = "div.decorate-supported-text";
pub const MAIN_MENU_ITEM: &str = "a.main-menu-item";
/// 任一出现即认为首页可交互
pub const LANDING_READY: &str = "a.main-menu-item, div.subtitle";

// Side menu
pub const CATEGORY: &str = "li.side-menu__category";
pub const CATEGORY_LINK: &str = "a.side-menu__category--link";
pub const CATEGORY_TITLE: &str = "a.side-menu__category--link div";

// Dish lists
pub const DISH_LIST: &str = "div.dish-list";
pub const DISH_LIST_TITLE: &str = "h2.dish-list--title";
pub const MENU_ITEM: &str = "div.menu-list-item";
pub const ITEM_TITLE: &str = "h4.item-title";
pub const ITEM_AMOUNT: &str = "div.item-amount";

// Item detail modal
pub const DESCRIPTION: &str = "div.dish--description";
pub const DESCRIPTION_PARAGRAPH: &str = "p";
pub const ALLERGENS: &str = "div.allergens--list";
pub const CLOSE_BUTTON: &str = "div.close-btn";
pub const MODAL_READY: &str = "div.dish--description, div.allergens--list, div.close-btn";
