// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::menu::{ExportRow, ExportTable};
use crate::domain::repositories::export_repository::{ExportError, ExportSink};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

const WIDE_COLUMN: f64 = 50.0;
const TYPE_COLUMN: f64 = 20.0;

/// Excel 单元格可容纳的最大字符数
pub const MAX_CELL_CHARS: usize = 32_767;

struct Sheet {
    table: ExportTable,
    worksheet: Worksheet,
    next_row: u32,
}

impl Sheet {
    fn new(table: ExportTable, target_language: &str, header_format: &Format) -> Result<Self, ExportError> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(table.sheet_name())?;

        let widths: &[f64] = match table {
            ExportTable::MenuItems => &[
                WIDE_COLUMN,
                WIDE_COLUMN,
                WIDE_COLUMN,
                TYPE_COLUMN,
                WIDE_COLUMN,
                WIDE_COLUMN,
            ],
            _ => &[WIDE_COLUMN, WIDE_COLUMN],
        };
        for (col, width) in widths.iter().enumerate() {
            worksheet.set_column_width(col as u16, *width)?;
        }

        for (col, header) in table.headers(target_language).iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, header_format)?;
        }

        Ok(Self {
            table,
            worksheet,
            next_row: 1,
        })
    }

    fn append(&mut self, cells: &[&str]) -> Result<(), ExportError> {
        for (col, original) in cells.iter().enumerate() {
            let cell = clamp_cell(original);
            if cell.len() < original.len() {
                tracing::warn!(
                    "Cell text in '{}' row {} exceeds {} characters, truncating",
                    self.table.sheet_name(),
                    self.next_row,
                    MAX_CELL_CHARS
                );
            }
            self.worksheet.write_string(self.next_row, col as u16, cell)?;
        }
        self.next_row += 1;
        Ok(())
    }
}

// Cuts on a char boundary so the cell stays valid UTF-8
fn clamp_cell(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// XLSX 导出器
///
/// 三个工作表在内存中逐行追加，`save` 时一次写入文件
pub struct WorkbookExporter {
    sheets: Vec<Sheet>,
    saved: bool,
}

impl WorkbookExporter {
    /// 创建导出器并写好三张表的表头
    pub fn new(target_language: &str) -> Result<Self, ExportError> {
        let header_format = Format::new().set_bold();
        let sheets = ExportTable::ALL
            .iter()
            .map(|table| Sheet::new(*table, target_language, &header_format))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            sheets,
            saved: false,
        })
    }

    /// 某张表已写入的数据行数（不含表头）
    pub fn row_count(&self, table: ExportTable) -> usize {
        self.sheets
            .iter()
            .find(|sheet| sheet.table == table)
            .map(|sheet| (sheet.next_row - 1) as usize)
            .unwrap_or(0)
    }
}

impl ExportSink for WorkbookExporter {
    fn append(&mut self, row: ExportRow) -> Result<(), ExportError> {
        if self.saved {
            return Err(ExportError::AlreadySaved);
        }

        let table = row.table();
        match self.sheets.iter_mut().find(|sheet| sheet.table == table) {
            Some(sheet) => sheet.append(&row.cells()),
            None => Ok(()),
        }
    }

    fn save(&mut self, path: &Path) -> Result<(), ExportError> {
        if self.saved {
            return Err(ExportError::AlreadySaved);
        }

        let mut workbook = Workbook::new();
        for sheet in self.sheets.drain(..) {
            workbook.push_worksheet(sheet.worksheet);
        }
        self.saved = true;

        workbook.save(path)?;
        tracing::info!("Excel file '{}' has been created successfully.", path.display());
        Ok(())
    }
}
