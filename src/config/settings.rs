// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::wait::WaitTiming;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 翻译服务凭据的环境变量
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 站点配置
    pub site: SiteSettings,
    /// 浏览器配置
    pub browser: BrowserSettings,
    /// 翻译配置
    pub translator: TranslatorSettings,
}

/// 站点配置设置
#[derive(Debug, Deserialize)]
pub struct SiteSettings {
    /// 餐厅页面的基础URL，餐厅UUID拼接在其后
    pub base_url: String,
}

/// 浏览器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserSettings {
    /// 远程 Chrome DevTools 地址，设置后不再启动本地浏览器
    pub remote_debugging_url: Option<String>,
    /// 是否无头运行
    pub headless: bool,
    /// CDP 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 页面加载超时（秒）
    pub page_load_timeout_secs: u64,
    /// 首页可交互的等待上限（毫秒）
    pub ready_timeout_ms: u64,
    /// 点击后等待渲染的上限（毫秒）
    pub transition_timeout_ms: u64,
    /// 点击后的固定停顿（毫秒）
    pub settle_delay_ms: u64,
    /// 轮询间隔（毫秒）
    pub poll_interval_ms: u64,
}

impl BrowserSettings {
    pub fn wait_timing(&self) -> WaitTiming {
        WaitTiming {
            ready_timeout: Duration::from_millis(self.ready_timeout_ms),
            transition_timeout: Duration::from_millis(self.transition_timeout_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
        }
    }
}

/// 翻译配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorSettings {
    /// API密钥，未设置时回退到 `OPENAI_API_KEY`
    pub api_key: Option<String>,
    /// 模型名称
    pub model: String,
    /// API基础URL
    pub api_base_url: String,
    /// 单次回复的最大令牌数
    pub max_tokens: u32,
    /// 采样温度
    pub temperature: f32,
    /// 请求超时（秒）
    pub timeout_secs: u64,
}

impl TranslatorSettings {
    /// 解析API密钥
    ///
    /// 优先使用配置值，其次读取 `OPENAI_API_KEY`；空字符串视为未设置
    pub fn resolve_api_key(&self) -> Option<String> {
        let present = |key: &String| !key.trim().is_empty();
        self.api_key
            .clone()
            .filter(present)
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(present))
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `MENU_EXPORTER__` 前缀的环境变量
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("MENU_EXPORTER").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 只含默认值的配置构建器
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("site.base_url", "https://expz.menu/")?
            // Browser
            .set_default("browser.headless", true)?
            .set_default("browser.request_timeout_secs", 30)?
            .set_default("browser.page_load_timeout_secs", 30)?
            .set_default("browser.ready_timeout_ms", 10_000)?
            .set_default("browser.transition_timeout_ms", 2_000)?
            .set_default("browser.settle_delay_ms", 100)?
            .set_default("browser.poll_interval_ms", 100)?
            // Translator
            .set_default("translator.model", "gpt-4o")?
            .set_default("translator.api_base_url", "https://api.openai.com/v1")?
            .set_default("translator.max_tokens", 500)?
            .set_default("translator.temperature", 0.1)?
            .set_default("translator.timeout_secs", 60)
    }
}
