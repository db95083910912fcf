//! XLSX constants and default preset factories.

use std::collections::BTreeMap;

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];
/// Characters not allowed in output file names.
pub const TUP_FILENAME_ILLEGAL: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// 1-based row holding column headers in marketplace templates.
pub const N_ROW_TEMPLATE_HEADER: u32 = 3;
/// 1-based row where listing data starts in marketplace templates.
pub const N_ROW_TEMPLATE_DATA_START: u32 = 6;

/// Timestamp suffix used in output file names (`DD_MM_YYYY_HH_MM`).
pub const C_FMT_FILENAME_TIMESTAMP: &str = "%d_%m_%Y_%H_%M";

/// Canonical format preset keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumFmtKey {
    /// Generic text cell format.
    Text,
    /// Number cell format.
    Number,
    /// Header cell format.
    Header,
}

impl EnumFmtKey {
    /// Key under which the preset is stored in [`derive_default_xlsx_formats`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Header => "header",
        }
    }
}

/// Presets of the standalone listing workbook, keyed by [`EnumFmtKey::as_str`].
///
/// Listing copy runs long, so text cells wrap and align to the top.
pub fn derive_default_xlsx_formats() -> BTreeMap<String, SpecCellFormat> {
    let fmt_listing = SpecCellFormat {
        font_name: Some("Calibri".to_string()),
        font_size: Some(11),
        align: Some("left".to_string()),
        valign: Some("top".to_string()),
        ..Default::default()
    };

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(
        EnumFmtKey::Text.as_str().to_string(),
        fmt_listing.with_(SpecCellFormat {
            text_wrap: Some(true),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Header.as_str().to_string(),
        fmt_listing.with_(SpecCellFormat {
            bold: Some(true),
            valign: Some("vcenter".to_string()),
            border: Some(1),
            text_wrap: Some(true),
            bg_color: Some("#FFF2CC".to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        EnumFmtKey::Number.as_str().to_string(),
        fmt_listing.with_(SpecCellFormat {
            align: Some("right".to_string()),
            num_format: Some("0.##".to_string()),
            ..Default::default()
        }),
    );

    dict_fmt
}
