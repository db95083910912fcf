//! Shared XLSX specification models.

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::conf::{N_ROW_TEMPLATE_DATA_START, N_ROW_TEMPLATE_HEADER};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification used by the plain writer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,

    /// Horizontal alignment.
    pub align: Option<String>,
    /// Vertical alignment.
    pub valign: Option<String>,
    /// Border style for all sides.
    pub border: Option<i64>,
    /// Text wrap.
    pub text_wrap: Option<bool>,

    /// Number format code.
    pub num_format: Option<String>,
    /// Background fill color.
    pub bg_color: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.clone().or_else(|| self.align.clone()),
            valign: other.valign.clone().or_else(|| self.valign.clone()),
            border: other.border.or(self.border),
            text_wrap: other.text_wrap.or(self.text_wrap),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
            bg_color: other.bg_color.clone().or_else(|| self.bg_color.clone()),
        }
    }
}

/// Autofit rule for column width inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumAutofitColumnsRule {
    /// Disable autofit.
    None,
    /// Infer width from header cells only (default).
    #[default]
    Header,
    /// Infer width from both header and body cells.
    All,
}

/// Autofit policy for the plain writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAutofitCellsPolicy {
    /// Autofit width inference rule.
    pub rule_columns: EnumAutofitColumnsRule,
    /// Minimum final width.
    pub width_cell_min: usize,
    /// Maximum final width.
    pub width_cell_max: usize,
    /// Width padding added after inference.
    pub width_cell_padding: usize,
}

impl Default for SpecAutofitCellsPolicy {
    fn default() -> Self {
        Self {
            rule_columns: EnumAutofitColumnsRule::Header,
            width_cell_min: 8,
            width_cell_max: 60,
            width_cell_padding: 2,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellValueSpecification

/// Normalized cell value during the record/write pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
}

impl EnumCellValue {
    /// Text view of the value, `None` for blanks and numbers.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(val) => Some(val.as_str()),
            _ => None,
        }
    }

    /// Whether the cell is left blank on write.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<&str> for EnumCellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumCellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for EnumCellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for EnumCellValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<T> From<Option<T>> for EnumCellValue
where
    T: Into<EnumCellValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

impl fmt::Display for EnumCellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::String(val) => write!(f, "{val}"),
            Self::Number(val) => write!(f, "{val}"),
        }
    }
}

/// One listing row keyed by template header text, in insertion order.
pub type SpecRecord = IndexMap<String, EnumCellValue>;

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TemplateSpecification

/// Where headers and data live inside a template sheet (1-based rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTemplateLayout {
    /// Target sheet name.
    pub sheet_name: String,
    /// Row holding column headers.
    pub row_header: u32,
    /// First row receiving records.
    pub row_data_start: u32,
}

impl SpecTemplateLayout {
    /// Layout with the default header/data rows for `sheet_name`.
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            row_header: N_ROW_TEMPLATE_HEADER,
            row_data_start: N_ROW_TEMPLATE_DATA_START,
        }
    }
}

/// One non-empty header cell found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTemplateHeader {
    /// 1-based column index.
    pub col_idx: u32,
    /// Header text, as written in the template.
    pub text: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-write call report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecXlsxReport {
    /// Output file path.
    pub path_file_out: PathBuf,
    /// Sheet that received the rows.
    pub sheet_name: String,
    /// Number of record rows written.
    pub n_rows_written: usize,
    /// Number of non-blank cells written.
    pub n_cells_written: usize,
    /// Record keys with no matching template column.
    pub headers_unmatched: Vec<String>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecXlsxReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Failures of template reads and workbook writes.
#[derive(Debug)]
pub enum XlsxError {
    /// Template could not be opened or parsed.
    TemplateUnreadable {
        /// Template path.
        path: PathBuf,
        /// Underlying reader error text.
        message: String,
    },
    /// Template has no sheet with the expected name.
    SheetNotFound {
        /// Template path.
        path: PathBuf,
        /// Expected sheet name.
        sheet_name: String,
    },
    /// Header row has no non-empty cell.
    HeaderRowEmpty {
        /// Sheet name.
        sheet_name: String,
        /// 1-based header row.
        row: u32,
    },
    /// Output directory could not be created.
    OutputDirFailed {
        /// Directory path.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Workbook could not be saved.
    SaveFailed {
        /// Output path.
        path: PathBuf,
        /// Underlying writer error text.
        message: String,
    },
    /// Cell or sheet write rejected by the workbook writer.
    WriteFailed(String),
    /// Row/column index out of Excel range.
    IndexOverflow(String),
    /// Writer was used after `close()`.
    Closed,
}

impl fmt::Display for XlsxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemplateUnreadable { path, message } => {
                write!(f, "Cannot read template {}: {message}", path.display())
            }
            Self::SheetNotFound { path, sheet_name } => write!(
                f,
                "Template {} has no sheet named {sheet_name:?}",
                path.display()
            ),
            Self::HeaderRowEmpty { sheet_name, row } => {
                write!(f, "Sheet {sheet_name:?} has no headers in row {row}")
            }
            Self::OutputDirFailed { path, message } => write!(
                f,
                "Failed to create output directory {}: {message}",
                path.display()
            ),
            Self::SaveFailed { path, message } => {
                write!(f, "Failed to save workbook {}: {message}", path.display())
            }
            Self::WriteFailed(msg) => write!(f, "{msg}"),
            Self::IndexOverflow(msg) => write!(f, "{msg}"),
            Self::Closed => write!(f, "Cannot write after close()."),
        }
    }
}

impl std::error::Error for XlsxError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_right_side_values() {
        let fmt_base = SpecCellFormat {
            font_name: Some("Arial".to_string()),
            bold: Some(false),
            ..Default::default()
        };
        let fmt_merged = fmt_base.with_(SpecCellFormat {
            bold: Some(true),
            ..Default::default()
        });

        assert_eq!(fmt_merged.font_name.as_deref(), Some("Arial"));
        assert_eq!(fmt_merged.bold, Some(true));
    }

    #[test]
    fn test_cell_value_from_option_maps_none_to_blank() {
        assert!(EnumCellValue::from(None::<u32>).is_none());
        assert_eq!(EnumCellValue::from(Some(4u32)), EnumCellValue::Number(4.0));
        assert_eq!(EnumCellValue::from("Vinyl").as_str(), Some("Vinyl"));
    }
}
