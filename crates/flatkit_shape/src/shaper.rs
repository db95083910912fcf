//! Shaper trait, row accumulation and the kind -> shaper factory.

use flatkit_io_xlsx::{EnumCellValue, SpecRecord, SpecTemplateLayout};
use tracing::{debug, info_span};

use crate::conf::{C_HEADER_MODEL_NUMBER, C_PRINT_TYPE_FIRST};
use crate::decal::DecalShaper;
use crate::spec::{EnumProductKind, ShapeError, SpecListingInput, SpecPackage, SpecSizeEntry};
use crate::wallpaper::WallpaperShaper;

/// Turns listing input into template records for one product family.
pub trait DataShaper {
    /// Product family handled by this shaper.
    fn kind(&self) -> EnumProductKind;

    /// Sheet layout of the family's template.
    fn layout(&self) -> SpecTemplateLayout;

    /// Template file used when none is configured.
    fn default_template_path(&self) -> &'static str;

    /// Packaging bracket for a design of `height` x `width` inches.
    fn derive_package(&self, height: u32, width: u32) -> SpecPackage;

    /// Variant part numbers for one size.
    fn derive_part_numbers(
        &self,
        sku: &str,
        size: &SpecSizeEntry,
        if_color_variants: bool,
    ) -> Vec<String>;

    /// Records for every variant of one size.
    fn derive_records(&self, input: &SpecListingInput, size: &SpecSizeEntry) -> Vec<SpecRecord>;

    /// Accumulated rows.
    fn rows(&self) -> &[SpecRecord];

    /// Mutable access to the row accumulator.
    fn rows_mut(&mut self) -> &mut Vec<SpecRecord>;

    /// Append the records of one size to the accumulator.
    fn add_records(&mut self, input: &SpecListingInput, size: &SpecSizeEntry) {
        let l_records = self.derive_records(input, size);
        debug!(
            kind = %self.kind(),
            size = %size,
            n_records = l_records.len(),
            "records added"
        );
        self.rows_mut().extend(l_records);
    }

    /// Drain the accumulator, `Peel-n-Stick` rows first, order otherwise kept.
    fn take_rows_sorted(&mut self) -> Vec<SpecRecord> {
        let mut l_rows = std::mem::take(self.rows_mut());
        l_rows.sort_by_key(|record| {
            let if_first = record
                .get(C_HEADER_MODEL_NUMBER)
                .and_then(EnumCellValue::as_str)
                .is_some_and(|c_part| c_part.contains(C_PRINT_TYPE_FIRST));
            if if_first { 0u8 } else { 1u8 }
        });
        l_rows
    }
}

/// Build the shaper for `kind`.
pub fn create_shaper(kind: EnumProductKind) -> Box<dyn DataShaper> {
    match kind {
        EnumProductKind::Decals => Box::new(DecalShaper::new()),
        EnumProductKind::Wallpapers => Box::new(WallpaperShaper::new()),
    }
}

/// Validate `input` and shape every size into ordered records.
pub fn shape_listing(input: &SpecListingInput) -> Result<Vec<SpecRecord>, ShapeError> {
    let input = input.normalized();
    input.validate()?;

    let _span = info_span!("shape", kind = %input.kind, sku = %input.sku).entered();
    let mut shaper = create_shaper(input.kind);
    for size in &input.sizes {
        shaper.add_records(&input, size);
    }
    Ok(shaper.take_rows_sorted())
}

/// Assemble a record from `(header, value)` pairs, keeping their order.
pub(crate) fn derive_record<const N: usize>(fields: [(&str, EnumCellValue); N]) -> SpecRecord {
    fields
        .into_iter()
        .map(|(c_header, value)| (c_header.to_string(), value))
        .collect()
}

/// Round to one decimal place, exact ties to the even digit.
pub(crate) fn round_1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
