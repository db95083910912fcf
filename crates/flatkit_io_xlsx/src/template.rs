//! Template fill writer: copies listing records into a marketplace template.
//!
//! The template workbook is treated as read-only input. Every write call loads
//! it again, fills the data rows below the header row and saves the result
//! under a new name, so styling, validation lists and hidden sheets of the
//! template survive untouched.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::spec::{
    EnumCellValue, SpecRecord, SpecTemplateHeader, SpecTemplateLayout, SpecXlsxReport, XlsxError,
};
use crate::util::{derive_unmatched_headers, validate_unique_columns};

/// Read every non-empty header cell of the layout's header row.
///
/// Column positions are kept as found, so blank header cells between named
/// columns do not shift later columns.
pub fn read_template_headers(
    path_template: &Path,
    layout: &SpecTemplateLayout,
) -> Result<Vec<SpecTemplateHeader>, XlsxError> {
    let book = load_template(path_template)?;
    let sheet = select_sheet(&book, path_template, &layout.sheet_name)?;
    collect_headers(sheet, layout)
}

fn load_template(path_template: &Path) -> Result<Spreadsheet, XlsxError> {
    if !path_template.is_file() {
        return Err(XlsxError::TemplateUnreadable {
            path: path_template.to_path_buf(),
            message: "file does not exist".to_string(),
        });
    }
    umya_spreadsheet::reader::xlsx::read(path_template).map_err(|err| {
        XlsxError::TemplateUnreadable {
            path: path_template.to_path_buf(),
            message: err.to_string(),
        }
    })
}

fn select_sheet<'a>(
    book: &'a Spreadsheet,
    path_template: &Path,
    sheet_name: &str,
) -> Result<&'a Worksheet, XlsxError> {
    book.get_sheet_by_name(sheet_name)
        .ok_or_else(|| XlsxError::SheetNotFound {
            path: path_template.to_path_buf(),
            sheet_name: sheet_name.to_string(),
        })
}

fn collect_headers(
    sheet: &Worksheet,
    layout: &SpecTemplateLayout,
) -> Result<Vec<SpecTemplateHeader>, XlsxError> {
    let n_col_max = sheet.get_highest_column();
    let mut l_headers = Vec::new();
    for n_col in 1..=n_col_max {
        let Some(cell) = sheet.get_cell((n_col, layout.row_header)) else {
            continue;
        };
        let c_text = cell.get_value().to_string();
        if c_text.is_empty() {
            continue;
        }
        l_headers.push(SpecTemplateHeader {
            col_idx: n_col,
            text: c_text,
        });
    }

    if l_headers.is_empty() {
        return Err(XlsxError::HeaderRowEmpty {
            sheet_name: layout.sheet_name.clone(),
            row: layout.row_header,
        });
    }
    Ok(l_headers)
}

/// Writer bound to one template file and sheet layout.
#[derive(Debug, Clone)]
pub struct TemplateXlsxWriter {
    path_template: PathBuf,
    layout: SpecTemplateLayout,
    l_headers: Vec<SpecTemplateHeader>,
}

impl TemplateXlsxWriter {
    /// Open `path_template` and read its headers.
    pub fn open(path_template: PathBuf, layout: SpecTemplateLayout) -> Result<Self, XlsxError> {
        let l_headers = read_template_headers(&path_template, &layout)?;
        debug!(
            template = %path_template.display(),
            sheet = %layout.sheet_name,
            n_headers = l_headers.len(),
            "template headers loaded"
        );
        Ok(Self {
            path_template,
            layout,
            l_headers,
        })
    }

    /// Fill `records` into a fresh copy of the template and save it as
    /// `dir_out/file_name`. `dir_out` is created when missing.
    pub fn write_records(
        &self,
        records: &[SpecRecord],
        dir_out: &Path,
        file_name: &str,
    ) -> Result<SpecXlsxReport, XlsxError> {
        let mut book = load_template(&self.path_template)?;
        let sheet = book
            .get_sheet_by_name_mut(&self.layout.sheet_name)
            .ok_or_else(|| XlsxError::SheetNotFound {
                path: self.path_template.clone(),
                sheet_name: self.layout.sheet_name.clone(),
            })?;

        let mut report = SpecXlsxReport {
            sheet_name: self.layout.sheet_name.clone(),
            ..Default::default()
        };

        let l_header_texts: Vec<String> = self.l_headers.iter().map(|h| h.text.clone()).collect();
        if let Err(msg) = validate_unique_columns(&l_header_texts) {
            warn!(sheet = %self.layout.sheet_name, "{msg}");
            report.warn(format!("{msg}; values are written to every matching column."));
        }

        for (n_idx_record, record) in records.iter().enumerate() {
            let n_row = u32::try_from(n_idx_record)
                .ok()
                .and_then(|n_offset| self.layout.row_data_start.checked_add(n_offset))
                .ok_or_else(|| {
                    XlsxError::IndexOverflow(format!("row index overflow: {n_idx_record}"))
                })?;

            for header in &self.l_headers {
                let Some(value) = record.get(&header.text) else {
                    continue;
                };
                let cell = sheet.get_cell_mut((header.col_idx, n_row));
                match value {
                    EnumCellValue::None => continue,
                    EnumCellValue::String(val) => {
                        cell.set_value_string(val.clone());
                    }
                    EnumCellValue::Number(val) => {
                        cell.set_value_number(*val);
                    }
                }
                report.n_cells_written += 1;
            }
            report.n_rows_written += 1;
        }

        report.headers_unmatched = derive_unmatched_headers(records, &self.l_headers);
        if !report.headers_unmatched.is_empty() {
            warn!(
                sheet = %self.layout.sheet_name,
                headers = ?report.headers_unmatched,
                "record fields without template column"
            );
            let c_msg = format!(
                "{} field(s) have no template column: {}",
                report.headers_unmatched.len(),
                report.headers_unmatched.join(", ")
            );
            report.warn(c_msg);
        }

        fs::create_dir_all(dir_out).map_err(|err| XlsxError::OutputDirFailed {
            path: dir_out.to_path_buf(),
            message: err.to_string(),
        })?;
        let path_file_out = dir_out.join(file_name);
        umya_spreadsheet::writer::xlsx::write(&book, &path_file_out).map_err(|err| {
            XlsxError::SaveFailed {
                path: path_file_out.clone(),
                message: err.to_string(),
            }
        })?;

        info!(
            path = %path_file_out.display(),
            rows = report.n_rows_written,
            cells = report.n_cells_written,
            "template filled"
        );
        report.path_file_out = path_file_out;
        Ok(report)
    }
}
