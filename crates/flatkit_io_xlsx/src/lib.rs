//! `flatkit_io_xlsx` v1:
//! XLSX kernel for marketplace flat files.
//!
//! Module layout:
//! - `conf`     : constants and default presets
//! - `spec`     : cell/record models, layouts, reports, errors
//! - `util`     : pure helper functions
//! - `template` : fill records into an existing template workbook
//! - `writer`   : standalone workbook writer
pub mod conf;
pub mod spec;
pub mod template;
pub mod util;
pub mod writer;

pub use conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_ROW_TEMPLATE_DATA_START, N_ROW_TEMPLATE_HEADER,
    TUP_EXCEL_ILLEGAL,
};
pub use spec::{
    EnumAutofitColumnsRule, EnumCellValue, SpecAutofitCellsPolicy, SpecCellFormat, SpecRecord,
    SpecTemplateHeader, SpecTemplateLayout, SpecXlsxReport, XlsxError,
};
pub use template::{TemplateXlsxWriter, read_template_headers};
pub use util::{
    derive_column_letters, derive_header_union, derive_output_filename, derive_unmatched_headers,
    sanitize_filename_part, sanitize_sheet_name,
};
pub use writer::XlsxWriter;
