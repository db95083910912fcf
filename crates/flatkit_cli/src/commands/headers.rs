// Headers command: list template header columns

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use flatkit_io_xlsx::{derive_column_letters, read_template_headers};
use flatkit_shape::{EnumProductKind, create_shaper};

use crate::config::AppConfig;

/// Print `LETTER<TAB>HEADER` for every non-empty header cell.
pub fn handle_headers(
    config: &AppConfig,
    kind: EnumProductKind,
    template: Option<PathBuf>,
) -> Result<()> {
    let shaper = create_shaper(kind);
    let layout = config.layout_for(shaper.layout())?;
    let path_template =
        template.unwrap_or_else(|| config.template_for(kind, shaper.default_template_path()));

    let l_headers = read_template_headers(&path_template, &layout)
        .with_context(|| format!("Failed to read {kind} template headers"))?;

    let mut stdout = io::stdout().lock();
    for header in &l_headers {
        writeln!(
            stdout,
            "{}\t{}",
            derive_column_letters(header.col_idx),
            header.text
        )?;
    }
    Ok(())
}
