// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use menu_exporter::engines::traits::{EngineError, PageDriver};
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::Mutex;

/// 弹窗中的描述
#[derive(Debug, Clone)]
pub enum DescriptionFixture {
    Paragraphs(Vec<String>),
    Plain(String),
}

#[derive(Debug, Clone, Default)]
pub struct ItemFixture {
    pub title: Option<String>,
    pub amount: Option<String>,
    pub description: Option<DescriptionFixture>,
    pub allergens: Option<String>,
}

impl ItemFixture {
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: &str) -> Self {
        self.amount = Some(amount.to_string());
        self
    }

    pub fn paragraphs(mut self, paragraphs: &[&str]) -> Self {
        self.description = Some(DescriptionFixture::Paragraphs(
            paragraphs.iter().map(|p| p.to_string()).collect(),
        ));
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = Some(DescriptionFixture::Plain(text.to_string()));
        self
    }

    pub fn allergens(mut self, allergens: &str) -> Self {
        self.allergens = Some(allergens.to_string());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct DishListFixture {
    pub title: Option<String>,
    pub items: Vec<ItemFixture>,
}

impl DishListFixture {
    pub fn new(title: &str, items: Vec<ItemFixture>) -> Self {
        Self {
            title: Some(title.to_string()),
            items,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryFixture {
    pub title: Option<String>,
    pub has_link: bool,
    pub dish_lists: Vec<DishListFixture>,
}

impl CategoryFixture {
    pub fn new(title: &str, dish_lists: Vec<DishListFixture>) -> Self {
        Self {
            title: Some(title.to_string()),
            has_link: true,
            dish_lists,
        }
    }
}

/// 模拟站点的静态描述
#[derive(Debug, Clone)]
pub struct SiteFixture {
    pub subtitle: Option<String>,
    pub about: Option<String>,
    pub menu_entry: bool,
    pub close_button: bool,
    pub escape_closes: bool,
    pub escape_fails: bool,
    pub fail_load: bool,
    /// 点击时返回错误的元素
    pub failing_clicks: HashSet<String>,
    pub categories: Vec<CategoryFixture>,
}

impl Default for SiteFixture {
    fn default() -> Self {
        Self {
            subtitle: None,
            about: None,
            menu_entry: true,
            close_button: true,
            escape_closes: true,
            escape_fails: false,
            fail_load: false,
            failing_clicks: HashSet::new(),
            categories: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct SiteState {
    url: Option<String>,
    in_menu: bool,
    category: Option<usize>,
    open_item: Option<(usize, usize, usize)>,
    escape_presses: usize,
    clicks: Vec<String>,
}

/// 模拟的菜单站点
///
/// 每次查询都把当前状态渲染成 HTML，再用 scraper 执行选择器。
/// 元素句柄是稳定的 `data-fid` 字符串，点击通过 `data-action` 改变状态。
pub struct FakeMenuSite {
    fixture: SiteFixture,
    state: Mutex<SiteState>,
}

impl FakeMenuSite {
    pub fn new(fixture: SiteFixture) -> Self {
        Self {
            fixture,
            state: Mutex::new(SiteState::default()),
        }
    }

    pub fn visited_url(&self) -> Option<String> {
        self.state.lock().unwrap().url.clone()
    }

    pub fn escape_presses(&self) -> usize {
        self.state.lock().unwrap().escape_presses
    }

    pub fn clicks(&self) -> Vec<String> {
        self.state.lock().unwrap().clicks.clone()
    }

    pub fn modal_open(&self) -> bool {
        self.state.lock().unwrap().open_item.is_some()
    }

    fn render(&self) -> String {
        let state = self.state.lock().unwrap();
        let mut html = String::from("<html><body>");
        if state.url.is_none() {
            html.push_str("</body></html>");
            return html;
        }

        if !state.in_menu {
            if let Some(ref subtitle) = self.fixture.subtitle {
                html.push_str(&format!(r#"<div class="subtitle" data-fid="subtitle">{}</div>"#, escape(subtitle)));
            }
            if let Some(ref about) = self.fixture.about {
                html.push_str(&format!(
                    r#"<div class="decorate-supported-text" data-fid="about">{}</div>"#,
                    escape(about)
                ));
            }
            if self.fixture.menu_entry {
                html.push_str(r#"<a class="main-menu-item" data-fid="menu-entry" data-action="enter-menu">Меню</a>"#);
            }
            html.push_str("</body></html>");
            return html;
        }

        html.push_str(r#"<ul class="side-menu">"#);
        for (i, category) in self.fixture.categories.iter().enumerate() {
            html.push_str(&format!(r#"<li class="side-menu__category" data-fid="cat-{i}">"#));
            if category.has_link {
                html.push_str(&format!(
                    r#"<a class="side-menu__category--link" data-fid="cat-{i}-link" data-action="category:{i}">"#
                ));
                if let Some(ref title) = category.title {
                    html.push_str(&format!(r#"<div data-fid="cat-{i}-title">{}</div>"#, escape(title)));
                }
                html.push_str("</a>");
            }
            html.push_str("</li>");
        }
        html.push_str("</ul>");

        if let Some(c) = state.category {
            for (j, dish_list) in self.fixture.categories[c].dish_lists.iter().enumerate() {
                html.push_str(&format!(r#"<div class="dish-list" data-fid="dl-{c}-{j}">"#));
                if let Some(ref title) = dish_list.title {
                    html.push_str(&format!(
                        r#"<h2 class="dish-list--title" data-fid="dl-{c}-{j}-title">{}</h2>"#,
                        escape(title)
                    ));
                }
                for (k, item) in dish_list.items.iter().enumerate() {
                    let key = format!("item-{c}-{j}-{k}");
                    html.push_str(&format!(r#"<div class="menu-list-item" data-fid="{key}">"#));
                    if let Some(ref title) = item.title {
                        html.push_str(&format!(
                            r#"<h4 class="item-title" data-fid="{key}-title" data-action="open:{c}:{j}:{k}">{}</h4>"#,
                            escape(title)
                        ));
                    }
                    if let Some(ref amount) = item.amount {
                        html.push_str(&format!(
                            r#"<div class="item-amount" data-fid="{key}-amount">{}</div>"#,
                            escape(amount)
                        ));
                    }
                    html.push_str("</div>");
                }
                html.push_str("</div>");
            }
        }

        if let Some((c, j, k)) = state.open_item {
            let item = &self.fixture.categories[c].dish_lists[j].items[k];
            html.push_str(r#"<div class="modal" data-fid="modal">"#);
            match item.description {
                Some(DescriptionFixture::Paragraphs(ref paragraphs)) => {
                    html.push_str(r#"<div class="dish--description" data-fid="description">"#);
                    for (n, paragraph) in paragraphs.iter().enumerate() {
                        html.push_str(&format!(r#"<p data-fid="description-p{n}">{}</p>"#, escape(paragraph)));
                    }
                    html.push_str("</div>");
                }
                Some(DescriptionFixture::Plain(ref text)) => {
                    html.push_str(&format!(
                        r#"<div class="dish--description" data-fid="description">{}</div>"#,
                        escape(text)
                    ));
                }
                None => {}
            }
            if let Some(ref allergens) = item.allergens {
                html.push_str(&format!(
                    r#"<div class="allergens--list" data-fid="allergens">{}</div>"#,
                    escape(allergens)
                ));
            }
            if self.fixture.close_button {
                html.push_str(r#"<div class="close-btn" data-fid="close" data-action="close"></div>"#);
            }
            html.push_str("</div>");
        }

        html.push_str("</body></html>");
        html
    }

    fn query(&self, scope: Option<&String>, selector: &str) -> Result<Vec<String>, EngineError> {
        let document = Html::parse_document(&self.render());
        let selector = parse_selector(selector)?;
        let ids = match scope {
            None => document.select(&selector).filter_map(fid).collect(),
            Some(key) => lookup(&document, key)?
                .select(&selector)
                .filter_map(fid)
                .collect(),
        };
        Ok(ids)
    }

    fn text_of(&self, key: &str) -> Result<String, EngineError> {
        let document = Html::parse_document(&self.render());
        let element = lookup(&document, key)?;
        Ok(element.text().collect::<String>())
    }

    fn action_of(&self, key: &str) -> Result<Option<String>, EngineError> {
        let document = Html::parse_document(&self.render());
        let element = lookup(&document, key)?;
        Ok(element.value().attr("data-action").map(str::to_string))
    }
}

#[async_trait]
impl PageDriver for FakeMenuSite {
    type Element = String;

    async fn goto(&self, url: &str) -> Result<(), EngineError> {
        if self.fixture.fail_load {
            return Err(EngineError::Other("net::ERR_NAME_NOT_RESOLVED".to_string()));
        }
        let mut state = self.state.lock().unwrap();
        *state = SiteState {
            url: Some(url.to_string()),
            ..Default::default()
        };
        Ok(())
    }

    async fn find_all(&self, scope: Option<&String>, selector: &str) -> Result<Vec<String>, EngineError> {
        self.query(scope, selector)
    }

    async fn inner_text(&self, element: &String) -> Result<String, EngineError> {
        self.text_of(element)
    }

    async fn click(&self, element: &String) -> Result<(), EngineError> {
        if self.fixture.failing_clicks.contains(element) {
            return Err(EngineError::Other(format!("click on '{}' intercepted", element)));
        }
        let action = self.action_of(element)?;

        let mut state = self.state.lock().unwrap();
        state.clicks.push(element.clone());
        let Some(action) = action else {
            return Ok(());
        };

        let parts: Vec<&str> = action.split(':').collect();
        match parts.as_slice() {
            ["enter-menu"] => state.in_menu = true,
            ["category", i] => {
                state.category = i.parse().ok();
                state.open_item = None;
            }
            ["open", c, j, k] => {
                state.open_item = match (c.parse(), j.parse(), k.parse()) {
                    (Ok(c), Ok(j), Ok(k)) => Some((c, j, k)),
                    _ => None,
                };
            }
            ["close"] => state.open_item = None,
            _ => {}
        }
        Ok(())
    }

    async fn press_escape(&self) -> Result<(), EngineError> {
        let mut state = self.state.lock().unwrap();
        state.escape_presses += 1;
        if self.fixture.escape_fails {
            return Err(EngineError::Other("body not focusable".to_string()));
        }
        if self.fixture.escape_closes {
            state.open_item = None;
        }
        Ok(())
    }
}

fn parse_selector(selector: &str) -> Result<Selector, EngineError> {
    Selector::parse(selector)
        .map_err(|e| EngineError::Other(format!("invalid selector '{}': {:?}", selector, e)))
}

fn lookup<'a>(document: &'a Html, key: &str) -> Result<ElementRef<'a>, EngineError> {
    let selector = parse_selector(&format!(r#"[data-fid="{}"]"#, key))?;
    document
        .select(&selector)
        .next()
        .ok_or_else(|| EngineError::Other(format!("stale element '{}'", key)))
}

fn fid(element: ElementRef<'_>) -> Option<String> {
    element.value().attr("data-fid").map(str::to_string)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
