//! Stateless helper utilities used by the template and plain writers.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, TimeZone};

use crate::conf::{
    C_FMT_FILENAME_TIMESTAMP, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    TUP_EXCEL_ILLEGAL, TUP_FILENAME_ILLEGAL,
};
use crate::spec::{SpecRecord, SpecTemplateHeader, XlsxError};

////////////////////////////////////////////////////////////////////////////////
// #region HeaderUtils

/// Validate that `columns` has no duplicated names.
pub fn validate_unique_columns(columns: &[String]) -> Result<(), String> {
    if columns.len() == columns.iter().collect::<BTreeSet<_>>().len() {
        return Ok(());
    }

    let mut dict_pos: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (n_idx, c_name) in columns.iter().enumerate() {
        dict_pos.entry(c_name).or_default().push(n_idx);
    }

    let c_msg = dict_pos
        .iter()
        .filter_map(|(c_name, l_pos)| {
            if l_pos.len() > 1 {
                Some(format!(
                    "{c_name:?} x{} at indices {:?}",
                    l_pos.len(),
                    l_pos
                ))
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("; ");

    Err(format!("Duplicate column names detected: {c_msg}"))
}

/// Union of record keys in first-seen order.
pub fn derive_header_union(records: &[SpecRecord]) -> Vec<String> {
    let mut set_seen = BTreeSet::new();
    let mut l_headers = Vec::new();
    for record in records {
        for c_key in record.keys() {
            if set_seen.insert(c_key.as_str()) {
                l_headers.push(c_key.clone());
            }
        }
    }
    l_headers
}

/// Record keys that no template header matches, sorted and deduplicated.
pub fn derive_unmatched_headers(
    records: &[SpecRecord],
    headers: &[SpecTemplateHeader],
) -> Vec<String> {
    let set_headers: BTreeSet<&str> = headers.iter().map(|h| h.text.as_str()).collect();
    let set_unmatched: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| record.keys())
        .map(String::as_str)
        .filter(|c_key| !set_headers.contains(c_key))
        .collect();
    set_unmatched.into_iter().map(ToString::to_string).collect()
}

/// Convert 1-based column index to spreadsheet letters (`1` -> `A`, `27` -> `AA`).
pub fn derive_column_letters(col_idx_1based: u32) -> String {
    let mut n_rest = col_idx_1based;
    let mut l_chars = Vec::new();
    while n_rest > 0 {
        let n_rem = (n_rest - 1) % 26;
        l_chars.push(char::from(b'A' + n_rem as u8));
        n_rest = (n_rest - 1) / 26;
    }
    l_chars.iter().rev().collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region NameNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Create suffixed sheet name (`base_1`, `base_2`, ...), respecting length cap.
pub fn create_sheet_identifier(base_name: &str, part_idx_1based: usize) -> String {
    let c_sheet_name_suffix = format!("_{part_idx_1based}");
    let n_len_base_name_max = N_LEN_EXCEL_SHEET_NAME_MAX.saturating_sub(c_sheet_name_suffix.len());

    let c_sheet_name_base: String = base_name
        .chars()
        .take(usize::max(1, n_len_base_name_max))
        .collect();

    format!("{c_sheet_name_base}{c_sheet_name_suffix}")
}

/// Replace path-hostile characters so `part` can be used inside a file name.
pub fn sanitize_filename_part(part: &str) -> String {
    let c_clean: String = part
        .trim()
        .chars()
        .map(|chr| {
            if TUP_FILENAME_ILLEGAL.contains(&chr) || chr.is_control() {
                '_'
            } else {
                chr
            }
        })
        .collect();
    if c_clean.is_empty() {
        "listing".to_string()
    } else {
        c_clean
    }
}

/// Output workbook name: `{sku}_{DD_MM_YYYY_HH_MM}.xlsx`.
pub fn derive_output_filename<Tz>(sku: &str, timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}_{}.xlsx",
        sanitize_filename_part(sku),
        timestamp.format(C_FMT_FILENAME_TIMESTAMP)
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region IndexCasting

pub(crate) fn cast_row_num(value: usize) -> Result<u32, XlsxError> {
    if value >= N_NROWS_EXCEL_MAX {
        return Err(XlsxError::IndexOverflow(format!(
            "row index overflow: {value}"
        )));
    }
    u32::try_from(value).map_err(|_| XlsxError::IndexOverflow(format!("row index overflow: {value}")))
}

pub(crate) fn cast_col_num(value: usize) -> Result<u16, XlsxError> {
    if value >= N_NCOLS_EXCEL_MAX {
        return Err(XlsxError::IndexOverflow(format!(
            "column index overflow: {value}"
        )));
    }
    u16::try_from(value)
        .map_err(|_| XlsxError::IndexOverflow(format!("column index overflow: {value}")))
}

pub(crate) fn estimate_unicode_string_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
