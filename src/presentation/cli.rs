// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use clap::Parser;
use std::path::PathBuf;
use uuid::Uuid;

/// 命令行参数
///
/// 参数错误时 clap 打印用法并以退出码 2 结束，`-h` 以退出码 0 结束
#[derive(Parser, Debug)]
#[command(name = "menu-exporter", version)]
#[command(about = "Export a restaurant menu from expz.menu with translations into an XLSX workbook")]
pub struct Cli {
    /// Output workbook path (.xlsx)
    pub output_file: PathBuf,

    /// Restaurant UUID used to build the page URL
    #[arg(short = 'u', long = "uuid")]
    pub uuid: Uuid,

    /// Target language name passed to the translator
    #[arg(short = 'l', long = "language", default_value = "English")]
    pub language: String,

    /// Show the browser window
    #[arg(long)]
    pub headful: bool,

    /// Connect to a running Chrome DevTools endpoint instead of launching one
    #[arg(long = "remote", value_name = "WS_URL")]
    pub remote_debugging_url: Option<String>,
}

impl Cli {
    /// 用命令行选项覆盖配置
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if self.headful {
            settings.browser.headless = false;
        }
        if let Some(ref url) = self.remote_debugging_url {
            settings.browser.remote_debugging_url = Some(url.clone());
        }
    }
}
