// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::fake_site::{CategoryFixture, DishListFixture, FakeMenuSite, ItemFixture, SiteFixture};
use crate::helpers::fast_timing;
use menu_exporter::domain::models::outcome::Outcome;
use menu_exporter::domain::services::menu_navigator::{MenuNavigator, ModalDismissal, NavigationError};

const URL: &str = "https://expz.menu/0b1d6a6e-3c5e-4b8e-9d5f-1a2b3c4d5e6f";

fn menu(close_button: bool, escape_closes: bool, escape_fails: bool) -> SiteFixture {
    SiteFixture {
        close_button,
        escape_closes,
        escape_fails,
        categories: vec![
            CategoryFixture::new(
                "Десерти",
                vec![
                    DishListFixture::new(
                        "Торти",
                        vec![
                            ItemFixture::new("Київський").allergens("Горіхи"),
                            ItemFixture::new("Наполеон"),
                        ],
                    ),
                    DishListFixture::new("Морозиво", vec![ItemFixture::new("Пломбір")]),
                ],
            ),
            CategoryFixture {
                title: Some("Напої".to_string()),
                has_link: false,
                dish_lists: vec![],
            },
        ],
        ..Default::default()
    }
}

async fn first_item(site: &FakeMenuSite) -> String {
    let navigator = MenuNavigator::new(site, fast_timing());
    navigator.open_restaurant(URL).await.unwrap();
    navigator.enter_menu().await.unwrap();
    let categories = navigator.categories().await.unwrap();
    assert!(navigator.select_category(&categories[0]).await.is_found());
    let dish_lists = navigator.dish_lists().await.unwrap();
    let items = navigator.items(&dish_lists[0]).await.unwrap();
    items[0].clone()
}

#[tokio::test]
async fn test_snapshots_follow_document_order() {
    let site = FakeMenuSite::new(menu(true, true, false));
    let navigator = MenuNavigator::new(&site, fast_timing());

    navigator.open_restaurant(URL).await.unwrap();
    navigator.enter_menu().await.unwrap();
    assert_eq!(site.clicks(), vec!["menu-entry".to_string()]);

    let categories = navigator.categories().await.unwrap();
    assert_eq!(categories, vec!["cat-0".to_string(), "cat-1".to_string()]);

    // Nothing is rendered until a category is selected
    assert!(navigator.dish_lists().await.unwrap().is_empty());

    assert!(navigator.select_category(&categories[0]).await.is_found());
    let dish_lists = navigator.dish_lists().await.unwrap();
    assert_eq!(dish_lists, vec!["dl-0-0".to_string(), "dl-0-1".to_string()]);

    assert_eq!(
        navigator.items(&dish_lists[0]).await.unwrap(),
        vec!["item-0-0-0".to_string(), "item-0-0-1".to_string()]
    );
    assert_eq!(
        navigator.items(&dish_lists[1]).await.unwrap(),
        vec!["item-0-1-0".to_string()]
    );
}

#[tokio::test]
async fn test_category_without_link_is_absent() {
    let site = FakeMenuSite::new(menu(true, true, false));
    let navigator = MenuNavigator::new(&site, fast_timing());
    navigator.open_restaurant(URL).await.unwrap();
    navigator.enter_menu().await.unwrap();
    let categories = navigator.categories().await.unwrap();

    assert_eq!(navigator.select_category(&categories[1]).await, Outcome::Absent);
}

#[tokio::test]
async fn test_failed_click_is_reported_not_raised() {
    let mut fixture = menu(true, true, false);
    fixture.failing_clicks.insert("item-0-0-0-title".to_string());
    let site = FakeMenuSite::new(fixture);
    let item = first_item(&site).await;

    let navigator = MenuNavigator::new(&site, fast_timing());
    assert!(matches!(
        navigator.open_item_detail(&item).await,
        Outcome::Failed(_)
    ));
    assert!(!site.modal_open());
}

#[tokio::test]
async fn test_close_button_dismisses_modal() {
    let site = FakeMenuSite::new(menu(true, false, false));
    let item = first_item(&site).await;
    let navigator = MenuNavigator::new(&site, fast_timing());

    assert!(navigator.open_item_detail(&item).await.is_found());
    assert!(site.modal_open());

    assert_eq!(navigator.close_item_detail().await, ModalDismissal::CloseButton);
    assert!(!site.modal_open());
    assert_eq!(site.escape_presses(), 0);
}

#[tokio::test]
async fn test_escape_is_used_when_close_button_missing() {
    let site = FakeMenuSite::new(menu(false, true, false));
    let item = first_item(&site).await;
    let navigator = MenuNavigator::new(&site, fast_timing());

    assert!(navigator.open_item_detail(&item).await.is_found());
    assert_eq!(navigator.close_item_detail().await, ModalDismissal::Escape);
    assert_eq!(site.escape_presses(), 1);
    assert!(!site.modal_open());
}

#[tokio::test]
async fn test_close_failure_is_reported() {
    let site = FakeMenuSite::new(menu(false, false, true));
    let item = first_item(&site).await;
    let navigator = MenuNavigator::new(&site, fast_timing());

    assert!(navigator.open_item_detail(&item).await.is_found());
    assert_eq!(navigator.close_item_detail().await, ModalDismissal::Failed);
    assert_eq!(site.escape_presses(), 1);
}

#[tokio::test]
async fn test_open_restaurant_errors() {
    let mut fixture = menu(true, true, false);
    fixture.fail_load = true;
    let site = FakeMenuSite::new(fixture);
    let err = MenuNavigator::new(&site, fast_timing())
        .open_restaurant(URL)
        .await
        .unwrap_err();
    assert!(matches!(err, NavigationError::PageLoad(_)));

    let mut fixture = menu(true, true, false);
    fixture.failing_clicks.insert("menu-entry".to_string());
    let site = FakeMenuSite::new(fixture);
    let navigator = MenuNavigator::new(&site, fast_timing());
    navigator.open_restaurant(URL).await.unwrap();
    let err = navigator.enter_menu().await.unwrap_err();
    assert!(matches!(err, NavigationError::MenuUnavailable(_)));
}
