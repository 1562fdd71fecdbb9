// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};
use uuid::Uuid;

/// 由站点基础URL和餐厅UUID构造餐厅页面URL
///
/// 基础URL缺少结尾的 `/` 时自动补上，避免最后一段路径被替换
pub fn restaurant_url(base_url: &str, restaurant: &Uuid) -> Result<Url, ParseError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(&restaurant.to_string())
}
