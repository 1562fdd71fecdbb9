// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::export_menu_use_case::ExportMenuError;
use crate::domain::repositories::export_repository::ExportError;
use crate::engines::traits::EngineError;
use thiserror::Error;

/// 应用程序错误类型
///
/// 所有错误都是致命的，进程以退出码 1 结束；命令行参数错误由 clap 以退出码 2 处理
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid site URL: {0}")]
    SiteUrl(#[from] url::ParseError),

    #[error("API key not found. Set the {0} environment variable.")]
    MissingCredential(&'static str),

    #[error("Translator setup failed: {0}")]
    Translator(String),

    #[error("Browser error: {0}")]
    Browser(#[from] EngineError),

    #[error(transparent)]
    Run(#[from] ExportMenuError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}
