// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::Parser;
use menu_exporter::application::use_cases::export_menu_use_case::ExportMenuUseCase;
use menu_exporter::config::settings::{Settings, API_KEY_ENV};
use menu_exporter::domain::models::menu::ExportSummary;
use menu_exporter::domain::repositories::export_repository::ExportSink;
use menu_exporter::domain::services::translation_service::LlmTranslator;
use menu_exporter::engines::chromium_driver::ChromiumDriver;
use menu_exporter::infrastructure::export::workbook_exporter::WorkbookExporter;
use menu_exporter::presentation::cli::Cli;
use menu_exporter::utils::errors::AppError;
use menu_exporter::utils::telemetry;
use menu_exporter::utils::url_utils;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// 主函数
///
/// 解析参数、校验凭据，然后执行一次完整的抓取导出
#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit with 2 and -h with 0, before anything else starts
    let cli = Cli::parse();

    let _ = dotenvy::dotenv();
    telemetry::init_telemetry();

    match run(cli).await {
        Ok(summary) => {
            info!(
                "Wrote {} category rows, {} menu item rows, {} restaurant detail rows",
                summary.category_rows, summary.menu_item_rows, summary.restaurant_detail_rows
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExportSummary, AppError> {
    let mut settings = Settings::new()?;
    cli.apply_overrides(&mut settings);

    let api_key = settings
        .translator
        .resolve_api_key()
        .ok_or(AppError::MissingCredential(API_KEY_ENV))?;
    let translator = LlmTranslator::new(api_key, &settings.translator)
        .map_err(|e| AppError::Translator(e.to_string()))?;

    let url = url_utils::restaurant_url(&settings.site.base_url, &cli.uuid)?;
    let mut exporter = WorkbookExporter::new(&cli.language)?;

    let driver = ChromiumDriver::launch(&settings.browser).await?;
    let use_case = ExportMenuUseCase::new(
        &driver,
        &translator,
        cli.language.clone(),
        settings.browser.wait_timing(),
    );
    let result = use_case.execute(url.as_str(), &mut exporter).await;

    if let Err(e) = driver.close().await {
        warn!("Failed to close browser: {}", e);
    }

    let summary = result?;
    exporter.save(&cli.output_file)?;
    Ok(summary)
}
