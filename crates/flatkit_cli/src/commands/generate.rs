// Generate command: shape a listing and write the workbook

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use flatkit_io_xlsx::{
    SpecRecord, SpecTemplateLayout, SpecXlsxReport, TemplateXlsxWriter, XlsxWriter,
    derive_output_filename,
};
use flatkit_shape::{create_shaper, shape_listing};
use tracing::{info, info_span};

use crate::cli::ListingArgs;
use crate::commands::listing::load_listing;
use crate::config::AppConfig;

pub fn handle_generate(
    config: &AppConfig,
    listing: ListingArgs,
    out: Option<PathBuf>,
    template: Option<PathBuf>,
    if_plain: bool,
) -> Result<()> {
    let input = load_listing(listing)?.normalized();
    let l_records = shape_listing(&input)?;

    let _span = info_span!("generate", kind = %input.kind, sku = %input.sku).entered();
    let shaper = create_shaper(input.kind);
    let layout = config.layout_for(shaper.layout())?;
    let dir_out = out.unwrap_or_else(|| config.dir_out());
    let c_file_name = derive_output_filename(&input.sku, &Local::now());

    let report = if if_plain {
        write_plain(&l_records, &layout, &dir_out.join(&c_file_name))?
    } else {
        let path_template = template
            .unwrap_or_else(|| config.template_for(input.kind, shaper.default_template_path()));
        info!(template = %path_template.display(), "filling template");
        TemplateXlsxWriter::open(path_template, layout)
            .and_then(|writer| writer.write_records(&l_records, &dir_out, &c_file_name))
            .with_context(|| format!("Failed to write {} listing {}", input.kind, input.sku))?
    };

    for c_warning in &report.warnings {
        eprintln!("warning: {c_warning}");
    }
    println!(
        "Wrote {} rows to {}",
        report.n_rows_written,
        report.path_file_out.display()
    );
    Ok(())
}

fn write_plain(
    records: &[SpecRecord],
    layout: &SpecTemplateLayout,
    path_file_out: &Path,
) -> Result<SpecXlsxReport> {
    let mut writer = XlsxWriter::new(path_file_out.to_path_buf());
    writer.write_records(records, &layout.sheet_name)?;
    writer.close()?;
    writer
        .report()
        .pop()
        .context("Plain workbook has no sheet report")
}
