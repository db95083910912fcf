//! Plain XLSX writer: records to a standalone workbook, no template needed.

use std::collections::BTreeSet;
use std::path::PathBuf;

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use tracing::info;

use crate::conf::{EnumFmtKey, N_LEN_EXCEL_SHEET_NAME_MAX, derive_default_xlsx_formats};
use crate::spec::{
    EnumAutofitColumnsRule, EnumCellValue, SpecAutofitCellsPolicy, SpecCellFormat, SpecRecord,
    SpecXlsxReport, XlsxError,
};
use crate::util::{
    cast_col_num, cast_row_num, create_sheet_identifier, derive_header_union,
    estimate_unicode_string_width, sanitize_sheet_name,
};

/// Stateful workbook writer.
pub struct XlsxWriter {
    path_file_out: PathBuf,
    workbook: Workbook,
    fmt_text: SpecCellFormat,
    fmt_number: SpecCellFormat,
    fmt_header: SpecCellFormat,
    policy_autofit: SpecAutofitCellsPolicy,
    set_sheet_names_existing: BTreeSet<String>,
    l_reports: Vec<SpecXlsxReport>,
    if_closed: bool,
}

impl XlsxWriter {
    /// Create writer bound to output path with the default format presets.
    ///
    /// The workbook is buffered in memory until [`Self::close`] is called.
    pub fn new(path_file_out: PathBuf) -> Self {
        let dict_fmt = derive_default_xlsx_formats();
        let fmt_of = |key: EnumFmtKey| dict_fmt.get(key.as_str()).cloned().unwrap_or_default();
        Self::with_formats(
            path_file_out,
            fmt_of(EnumFmtKey::Text),
            fmt_of(EnumFmtKey::Number),
            fmt_of(EnumFmtKey::Header),
            SpecAutofitCellsPolicy::default(),
        )
    }

    /// Create writer with explicit format presets and autofit policy.
    pub fn with_formats(
        path_file_out: PathBuf,
        fmt_text: SpecCellFormat,
        fmt_number: SpecCellFormat,
        fmt_header: SpecCellFormat,
        policy_autofit: SpecAutofitCellsPolicy,
    ) -> Self {
        Self {
            path_file_out,
            workbook: Workbook::new(),
            fmt_text,
            fmt_number,
            fmt_header,
            policy_autofit,
            set_sheet_names_existing: BTreeSet::new(),
            l_reports: Vec::new(),
            if_closed: false,
        }
    }

    /// Snapshot of per-sheet write reports.
    pub fn report(&self) -> Vec<SpecXlsxReport> {
        self.l_reports.clone()
    }

    /// Flush workbook to disk, creating the parent directory. Idempotent.
    pub fn close(&mut self) -> Result<(), XlsxError> {
        if self.if_closed {
            return Ok(());
        }
        if let Some(dir_parent) = self.path_file_out.parent()
            && !dir_parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir_parent).map_err(|err| XlsxError::OutputDirFailed {
                path: dir_parent.to_path_buf(),
                message: err.to_string(),
            })?;
        }
        self.workbook
            .save(&self.path_file_out)
            .map_err(|err| XlsxError::SaveFailed {
                path: self.path_file_out.clone(),
                message: err.to_string(),
            })?;
        self.if_closed = true;
        info!(path = %self.path_file_out.display(), "workbook saved");
        Ok(())
    }

    /// Write `records` into a new sheet: header row from the union of record
    /// keys, one body row per record.
    pub fn write_records(
        &mut self,
        records: &[SpecRecord],
        sheet_name: &str,
    ) -> Result<(), XlsxError> {
        if self.if_closed {
            return Err(XlsxError::Closed);
        }

        let l_headers = derive_header_union(records);
        let sheet_name_unique =
            self.derive_unique_sheet_name(&sanitize_sheet_name(sheet_name, "_"));

        let fmt_header = derive_rust_xlsx_format(&self.fmt_header);
        let fmt_text = derive_rust_xlsx_format(&self.fmt_text);
        let fmt_number = derive_rust_xlsx_format(&self.fmt_number);
        let policy_autofit = self.policy_autofit.clone();

        let worksheet = self.workbook.add_worksheet();
        worksheet
            .set_name(&sheet_name_unique)
            .map_err(derive_xlsx_error)?;

        let mut l_width_by_col = vec![0usize; l_headers.len()];
        for (n_idx_col, c_header) in l_headers.iter().enumerate() {
            worksheet
                .write_string_with_format(0, cast_col_num(n_idx_col)?, c_header, &fmt_header)
                .map_err(derive_xlsx_error)?;
            l_width_by_col[n_idx_col] = estimate_unicode_string_width(c_header);
        }
        worksheet.set_freeze_panes(1, 0).map_err(derive_xlsx_error)?;

        let mut report = SpecXlsxReport {
            path_file_out: self.path_file_out.clone(),
            sheet_name: sheet_name_unique,
            ..Default::default()
        };

        for (n_idx_row, record) in records.iter().enumerate() {
            let n_row = cast_row_num(n_idx_row + 1)?;
            for (n_idx_col, c_header) in l_headers.iter().enumerate() {
                let Some(value) = record.get(c_header) else {
                    continue;
                };
                if write_cell_with_format(
                    worksheet,
                    n_row,
                    cast_col_num(n_idx_col)?,
                    value,
                    &fmt_text,
                    &fmt_number,
                )? {
                    report.n_cells_written += 1;
                }
                if policy_autofit.rule_columns == EnumAutofitColumnsRule::All {
                    l_width_by_col[n_idx_col] = usize::max(
                        l_width_by_col[n_idx_col],
                        estimate_unicode_string_width(&value.to_string()),
                    );
                }
            }
            report.n_rows_written += 1;
        }

        if policy_autofit.rule_columns != EnumAutofitColumnsRule::None {
            apply_column_widths(worksheet, &l_width_by_col, &policy_autofit)?;
        }

        self.l_reports.push(report);
        Ok(())
    }

    fn derive_unique_sheet_name(&mut self, name: &str) -> String {
        if !self.set_sheet_names_existing.contains(name) {
            self.set_sheet_names_existing.insert(name.to_string());
            return name.to_string();
        }

        let base_name: String = name
            .chars()
            .take(usize::max(1, N_LEN_EXCEL_SHEET_NAME_MAX - 3))
            .collect();

        let mut n_idx = 2usize;
        loop {
            let candidate = create_sheet_identifier(&base_name, n_idx);
            if !self.set_sheet_names_existing.contains(&candidate) {
                self.set_sheet_names_existing.insert(candidate.clone());
                return candidate;
            }
            n_idx += 1;
        }
    }
}

fn apply_column_widths(
    worksheet: &mut Worksheet,
    l_width_by_col: &[usize],
    policy_autofit: &SpecAutofitCellsPolicy,
) -> Result<(), XlsxError> {
    let n_min = usize::max(1, policy_autofit.width_cell_min);
    let n_max = usize::min(255, usize::max(n_min, policy_autofit.width_cell_max));
    let n_pad = policy_autofit.width_cell_padding;

    for (n_idx_col, n_width_recorded) in l_width_by_col.iter().enumerate() {
        let n_width_final = usize::min(n_max, usize::max(n_min, n_width_recorded + n_pad));
        worksheet
            .set_column_width(cast_col_num(n_idx_col)?, n_width_final as f64)
            .map_err(derive_xlsx_error)?;
    }
    Ok(())
}

/// Returns whether a non-blank value was written.
fn write_cell_with_format(
    worksheet: &mut Worksheet,
    n_row: u32,
    n_col: u16,
    value: &EnumCellValue,
    fmt_text: &Format,
    fmt_number: &Format,
) -> Result<bool, XlsxError> {
    match value {
        EnumCellValue::None => {
            worksheet
                .write_blank(n_row, n_col, fmt_text)
                .map_err(derive_xlsx_error)?;
            Ok(false)
        }
        EnumCellValue::String(val) => {
            worksheet
                .write_string_with_format(n_row, n_col, val, fmt_text)
                .map_err(derive_xlsx_error)?;
            Ok(true)
        }
        EnumCellValue::Number(val) => {
            worksheet
                .write_number_with_format(n_row, n_col, *val, fmt_number)
                .map_err(derive_xlsx_error)?;
            Ok(true)
        }
    }
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = &spec.font_name {
        format = format.set_font_name(val.clone());
    }
    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }

    if let Some(val) = &spec.align
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }
    if let Some(val) = &spec.valign
        && let Some(align) = derive_format_align(val)
    {
        format = format.set_align(align);
    }

    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.clone());
    }
    if let Some(val) = &spec.bg_color {
        format = format.set_background_color(val.as_str());
    }
    if let Some(val) = spec.border {
        format = format.set_border(derive_format_border(val));
    }
    if spec.text_wrap.unwrap_or(false) {
        format = format.set_text_wrap();
    }

    format
}

fn derive_format_border(border: i64) -> FormatBorder {
    match border {
        1 => FormatBorder::Thin,
        2 => FormatBorder::Medium,
        3 => FormatBorder::Dashed,
        4 => FormatBorder::Dotted,
        5 => FormatBorder::Thick,
        6 => FormatBorder::Double,
        _ => FormatBorder::None,
    }
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    let value = align.trim().to_ascii_lowercase();
    match value.as_str() {
        "general" => Some(FormatAlign::General),
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "right" => Some(FormatAlign::Right),
        "top" => Some(FormatAlign::Top),
        "bottom" => Some(FormatAlign::Bottom),
        "vcenter" | "vertical_center" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}

fn derive_xlsx_error(err: rust_xlsxwriter::XlsxError) -> XlsxError {
    XlsxError::WriteFailed(format!("xlsx write error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::tests::TestDir;

    fn record(part: &str, weight: Option<u32>) -> SpecRecord {
        let mut record = SpecRecord::new();
        record.insert("Manufacturer Model Number".to_string(), part.into());
        record.insert("Shipping Weight (Box 1)".to_string(), weight.into());
        record
    }

    #[test]
    fn write_records_saves_workbook_with_union_header() {
        let tmp = TestDir::new();
        let path_out = tmp.path().join("plain/VN007.xlsx");

        let mut writer = XlsxWriter::new(path_out.clone());
        let mut record_extra = record("VN007 16x22 Non-Woven", Some(4));
        record_extra.insert("Wallpaper Material".to_string(), "Non-Woven".into());
        writer
            .write_records(&[record("VN007 16x22 Peel-n-Stick", None), record_extra], "Listings")
            .expect("write");
        writer.close().expect("close");
        writer.close().expect("close twice");

        assert!(path_out.is_file());
        let l_reports = writer.report();
        assert_eq!(l_reports.len(), 1);
        assert_eq!(l_reports[0].n_rows_written, 2);
        assert_eq!(l_reports[0].n_cells_written, 4);
        assert_eq!(l_reports[0].sheet_name, "Listings");

        let book = umya_spreadsheet::reader::xlsx::read(&path_out).expect("read back");
        let sheet = book.get_sheet_by_name("Listings").expect("sheet");
        let text = |col: u32, row: u32| {
            sheet
                .get_cell((col, row))
                .map(|cell| cell.get_value().to_string())
                .unwrap_or_default()
        };
        assert_eq!(text(1, 1), "Manufacturer Model Number");
        assert_eq!(text(3, 1), "Wallpaper Material");
        assert_eq!(text(1, 2), "VN007 16x22 Peel-n-Stick");
        assert_eq!(text(2, 3), "4");
        assert_eq!(text(3, 3), "Non-Woven");
    }

    #[test]
    fn repeated_sheet_names_get_suffix() {
        let tmp = TestDir::new();
        let mut writer = XlsxWriter::new(tmp.path().join("out.xlsx"));
        writer.write_records(&[], "Listings").expect("first");
        writer.write_records(&[], "Listings").expect("second");

        let l_names: Vec<String> = writer.report().into_iter().map(|r| r.sheet_name).collect();
        assert_eq!(l_names, vec!["Listings", "Listings_2"]);
    }

    #[test]
    fn write_after_close_fails() {
        let tmp = TestDir::new();
        let mut writer = XlsxWriter::new(tmp.path().join("out.xlsx"));
        writer.close().expect("close");
        let err = writer.write_records(&[], "Listings").unwrap_err();
        assert!(matches!(err, XlsxError::Closed));
    }
}
