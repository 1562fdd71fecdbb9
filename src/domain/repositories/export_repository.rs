// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::menu::ExportRow;
use std::path::Path;
use thiserror::Error;

/// 导出错误
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("Export has already been saved")]
    AlreadySaved,
}

/// 导出目标
///
/// 行按产生顺序追加到对应的表，不做缓冲、去重或排序。
/// `save` 是一次性的终结操作。
pub trait ExportSink {
    /// 追加一行到 `row.table()` 对应的表
    fn append(&mut self, row: ExportRow) -> Result<(), ExportError>;

    /// 将所有表写入同一个输出文件
    fn save(&mut self, path: &Path) -> Result<(), ExportError>;
}
