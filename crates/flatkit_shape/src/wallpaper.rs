//! Wallpaper rules: weight brackets, print-type variants and pricing.

use flatkit_io_xlsx::{EnumCellValue, SpecRecord, SpecTemplateLayout};
use tracing::{debug, warn};

use crate::conf::{
    C_BRAND, C_COLOR_MULTI, C_COUNTRY, C_DOES_NOT_APPLY, C_HEADER_MODEL_NUMBER,
    C_MATERIAL_SURCHARGED, C_SHIP_TYPE, C_WALLPAPER_BULLET_3, C_WALLPAPER_BULLET_4,
    C_WALLPAPER_BULLET_5, C_WALLPAPER_BULLET_6, C_WALLPAPER_BULLET_7, C_WALLPAPER_DURABILITY,
    C_WALLPAPER_SHEET_NAME, C_WALLPAPER_TEMPLATE_PATH, C_WALLPAPER_USE, C_WARRANTY_DETAILS,
    C_WARRANTY_LENGTH, N_FREIGHT_CLASS, N_PRICE_SURCHARGE, N_PRICE_SURCHARGE_MIN,
    N_WALLPAPER_LEAD_TIME_HOURS, SpecPrintType, TUP_WALLPAPER_DESCRIPTION,
    TUP_WALLPAPER_PRINT_TYPES,
};
use crate::shaper::{DataShaper, derive_record, round_1};
use crate::spec::{EnumProductKind, SpecListingInput, SpecPackage, SpecSizeEntry};

/// `(upper bound, weight)` pairs above the small-parcel bracket.
const TUP_WEIGHT_BRACKETS: [(u32, u32); 5] = [(50, 4), (60, 5), (80, 6), (100, 7), (120, 11)];

/// Shaper for wall murals sold as Peel-n-Stick and Non-Woven.
#[derive(Debug, Default)]
pub struct WallpaperShaper {
    l_rows: Vec<SpecRecord>,
}

impl WallpaperShaper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marketing copy and the two keyword bullets.
    pub fn derive_texts(keyword: &str) -> [String; 3] {
        [
            format!(
                "Looking for a stylish and easy way to transform your space? Our {keyword} is the perfect solution. Available in both Peel and Stick and Non-Woven options, this versatile wallpaper is designed to elevate your d\u{e9}cor and refresh any smooth surface with minimal effort."
            ),
            format!("Our {keyword} is made from high-quality, durable, and waterproof material."),
            format!(
                "Variety of Sizes Available: {keyword} comes in multiple size options to fit your space perfectly."
            ),
        ]
    }

    /// Base cost of one print type; the surcharged material costs more from the threshold up.
    pub fn derive_base_cost(price: f64, print_type: &SpecPrintType) -> f64 {
        if price < N_PRICE_SURCHARGE_MIN {
            price
        } else if print_type.material == C_MATERIAL_SURCHARGED {
            price + N_PRICE_SURCHARGE
        } else {
            price
        }
    }

    /// Area in square feet, rounded to one decimal.
    pub fn calculate_sq_ft(width_in_inches: f64, height_in_inches: f64) -> f64 {
        round_1((width_in_inches / 12.0) * (height_in_inches / 12.0))
    }
}

impl DataShaper for WallpaperShaper {
    fn kind(&self) -> EnumProductKind {
        EnumProductKind::Wallpapers
    }

    fn layout(&self) -> SpecTemplateLayout {
        SpecTemplateLayout::new(C_WALLPAPER_SHEET_NAME)
    }

    fn default_template_path(&self) -> &'static str {
        C_WALLPAPER_TEMPLATE_PATH
    }

    /// Small designs ship in the 24in tube; everything else in the 44in box
    /// with weight by the smaller side.
    fn derive_package(&self, height: u32, width: u32) -> SpecPackage {
        if height <= 24 || width <= 24 {
            return SpecPackage {
                weight: Some(1),
                height: 24,
                width: 2,
                depth: 2,
            };
        }

        let weight = TUP_WEIGHT_BRACKETS
            .iter()
            .find(|(n_bound, _)| height <= *n_bound || width <= *n_bound)
            .map(|(_, n_weight)| *n_weight);
        if weight.is_none() {
            warn!(height, width, "no weight bracket covers this size, weight left blank");
        }

        SpecPackage {
            weight,
            height: 44,
            width: 5,
            depth: 5,
        }
    }

    fn derive_part_numbers(
        &self,
        sku: &str,
        size: &SpecSizeEntry,
        _if_color_variants: bool,
    ) -> Vec<String> {
        TUP_WALLPAPER_PRINT_TYPES
            .iter()
            .map(|print_type| {
                format!("{sku} {}x{} {}", size.width, size.height, print_type.name)
            })
            .collect()
    }

    fn derive_records(&self, input: &SpecListingInput, size: &SpecSizeEntry) -> Vec<SpecRecord> {
        if input.if_color_variants || input.if_personalization {
            debug!(sku = %input.sku, "color and personalization options do not apply to wallpapers");
        }

        let package = self.derive_package(size.height, size.width);
        let [c_marketing, c_bullet_1, c_bullet_2] = Self::derive_texts(&input.keyword);
        let c_description = TUP_WALLPAPER_DESCRIPTION.join("\n");
        let n_sq_ft = Self::calculate_sq_ft(f64::from(size.width), f64::from(size.height));

        self.derive_part_numbers(&input.sku, size, false)
            .into_iter()
            .zip(TUP_WALLPAPER_PRINT_TYPES.iter())
            .map(|(c_part, print_type)| {
                derive_record([
                    ("Brand", C_BRAND.into()),
                    (C_HEADER_MODEL_NUMBER, c_part.clone().into()),
                    ("Supplier Part Number", c_part.into()),
                    (
                        "Product Name",
                        format!("{} ({}) {}", input.title, print_type.name, input.sku).into(),
                    ),
                    ("This product is", c_description.clone().into()),
                    (
                        "Base Cost",
                        Self::derive_base_cost(size.price, print_type).into(),
                    ),
                    ("Minimum Order Quantity (Per Part #)", 1u32.into()),
                    ("Force Multiples", 1u32.into()),
                    ("Display Set Quantity", 1u32.into()),
                    ("Marketing Copy", c_marketing.clone().into()),
                    ("Feature Bullet 1", c_bullet_1.clone().into()),
                    ("Feature Bullet 2", c_bullet_2.clone().into()),
                    ("Feature Bullet 3", C_WALLPAPER_BULLET_3.into()),
                    ("Feature Bullet 4", C_WALLPAPER_BULLET_4.into()),
                    ("Feature Bullet 5", C_WALLPAPER_BULLET_5.into()),
                    ("Feature Bullet 6", C_WALLPAPER_BULLET_6.into()),
                    ("Feature Bullet 7", C_WALLPAPER_BULLET_7.into()),
                    ("Country of Manufacture", C_COUNTRY.into()),
                    ("California Proposition 65 Warning Required", "No".into()),
                    ("Ship Type (Small Parcel, LTL)", C_SHIP_TYPE.into()),
                    ("Freight Class", N_FREIGHT_CLASS.into()),
                    (
                        "Supplier Lead Time in Business Day Hours",
                        N_WALLPAPER_LEAD_TIME_HOURS.into(),
                    ),
                    (
                        "Supplier Lead Time in Business Day Hours for Replacement Parts",
                        N_WALLPAPER_LEAD_TIME_HOURS.into(),
                    ),
                    ("Number of Boxes", 1u32.into()),
                    ("Shipping Weight (Box 1)", package.weight.into()),
                    ("Carton Height (Box 1)", package.height.into()),
                    ("Carton Width (Box 1)", package.width.into()),
                    ("Carton Depth (Box 1)", package.depth.into()),
                    ("Image 1 File", input.image_link.clone().into()),
                    ("Image 2 File", input.second_image_link.clone().into()),
                    ("Individually Sellable", "Yes".into()),
                    ("Product Type", "Wall Mural".into()),
                    ("Life Stage", "All Ages".into()),
                    ("Wallpaper Texture", "Smooth".into()),
                    ("Finish Treatment", "Primed".into()),
                    ("Wallpaper Material", print_type.material.into()),
                    ("Application Type", print_type.application.into()),
                    ("Match Type", "Random".into()),
                    ("Removal Type", print_type.removal.into()),
                    ("Paintable / Stainable", "No".into()),
                    ("Supplier Intended and Approved Use", C_WALLPAPER_USE.into()),
                    ("BPA Free", "No".into()),
                    ("Made to Order", "Yes".into()),
                    ("Licensed Product Category", C_DOES_NOT_APPLY.into()),
                    ("Movie / Show Series Name", C_DOES_NOT_APPLY.into()),
                    ("Character Name", C_DOES_NOT_APPLY.into()),
                    ("Sports Team Name", C_DOES_NOT_APPLY.into()),
                    ("Durability", C_WALLPAPER_DURABILITY.into()),
                    ("Color", C_COLOR_MULTI.into()),
                    ("Pattern Repeat Frequency", 0u32.into()),
                    ("Pattern Interval", EnumCellValue::Number(0.0)),
                    ("Wood Species", C_DOES_NOT_APPLY.into()),
                    (
                        "Uniform Packaging and Labeling Regulations (UPLR) Compliant",
                        "Yes".into(),
                    ),
                    ("Canada Product Restriction", "No".into()),
                    ("Reason for Restriction", C_DOES_NOT_APPLY.into()),
                    (
                        "ISO 14021 Recycled Content Standard Certified",
                        C_DOES_NOT_APPLY.into(),
                    ),
                    ("Overall Product Length - End to End", size.height.into()),
                    ("Overall Width - Side to Side", size.width.into()),
                    ("Square Footage per Unit", n_sq_ft.into()),
                    ("Overall Product Weight", package.weight.into()),
                    ("Commercial Warranty", "Yes".into()),
                    ("Commercial Warranty Length", C_WARRANTY_LENGTH.into()),
                    ("Product Warranty", "Yes".into()),
                    ("Warranty Length", C_WARRANTY_LENGTH.into()),
                    ("Full or Limited Warranty", "Full".into()),
                    ("Warranty Details", C_WARRANTY_DETAILS.into()),
                ])
            })
            .collect()
    }

    fn rows(&self) -> &[SpecRecord] {
        &self.l_rows
    }

    fn rows_mut(&mut self) -> &mut Vec<SpecRecord> {
        &mut self.l_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> SpecListingInput {
        SpecListingInput {
            kind: EnumProductKind::Wallpapers,
            title: "Forest Mural".to_string(),
            sku: "WP100".to_string(),
            keyword: "Forest Wallpaper".to_string(),
            image_link: "https://img.example/forest.jpg".to_string(),
            second_image_link: None,
            if_color_variants: true,
            if_personalization: true,
            sizes: vec![],
        }
    }

    fn size(width: u32, height: u32, price: f64) -> SpecSizeEntry {
        SpecSizeEntry {
            width,
            height,
            price,
        }
    }

    #[test]
    fn package_uses_tube_for_small_sides() {
        let shaper = WallpaperShaper::new();
        let package = shaper.derive_package(96, 24);
        assert_eq!(
            package,
            SpecPackage {
                weight: Some(1),
                height: 24,
                width: 2,
                depth: 2
            }
        );
    }

    #[test]
    fn package_weight_follows_smaller_side() {
        let shaper = WallpaperShaper::new();
        let weight_of = |height, width| shaper.derive_package(height, width).weight;
        assert_eq!(weight_of(25, 200), Some(4));
        assert_eq!(weight_of(50, 50), Some(4));
        assert_eq!(weight_of(51, 60), Some(5));
        assert_eq!(weight_of(144, 80), Some(6));
        assert_eq!(weight_of(100, 101), Some(7));
        assert_eq!(weight_of(120, 130), Some(11));
        assert_eq!(shaper.derive_package(60, 36).height, 44);
    }

    #[test]
    fn package_weight_is_blank_above_every_bracket() {
        let shaper = WallpaperShaper::new();
        let package = shaper.derive_package(121, 140);
        assert_eq!(package.weight, None);
        assert_eq!((package.height, package.width, package.depth), (44, 5, 5));
    }

    #[test]
    fn base_cost_surcharges_non_woven_from_ten() {
        let [peel, non_woven] = TUP_WALLPAPER_PRINT_TYPES;
        assert_eq!(WallpaperShaper::derive_base_cost(9.5, &non_woven), 9.5);
        assert_eq!(WallpaperShaper::derive_base_cost(10.0, &non_woven), 20.0);
        assert_eq!(WallpaperShaper::derive_base_cost(40.0, &non_woven), 50.0);
        assert_eq!(WallpaperShaper::derive_base_cost(40.0, &peel), 40.0);
    }

    #[test]
    fn square_footage_rounds_to_one_decimal() {
        assert_eq!(WallpaperShaper::calculate_sq_ft(16.0, 22.0), 2.4);
        assert_eq!(WallpaperShaper::calculate_sq_ft(36.0, 60.0), 15.0);
    }

    #[test]
    fn square_footage_ties_round_to_even() {
        assert_eq!(WallpaperShaper::calculate_sq_ft(30.0, 30.0), 6.2);
        assert_eq!(WallpaperShaper::calculate_sq_ft(36.0, 25.0), 6.2);
        assert_eq!(WallpaperShaper::calculate_sq_ft(12.0, 15.0), 1.2);
        assert_eq!(WallpaperShaper::calculate_sq_ft(18.0, 10.0), 1.2);
    }

    #[test]
    fn records_expand_both_print_types() {
        let shaper = WallpaperShaper::new();
        let l_records = shaper.derive_records(&input(), &size(36, 60, 40.0));
        assert_eq!(l_records.len(), 2);

        let [peel, non_woven] = [&l_records[0], &l_records[1]];
        assert_eq!(
            peel[C_HEADER_MODEL_NUMBER].as_str(),
            Some("WP100 36x60 Peel-n-Stick")
        );
        assert_eq!(
            non_woven["Product Name"].as_str(),
            Some("Forest Mural (Non-Woven) WP100")
        );
        assert_eq!(peel["Base Cost"], EnumCellValue::Number(40.0));
        assert_eq!(non_woven["Base Cost"], EnumCellValue::Number(50.0));
        assert_eq!(peel["Wallpaper Material"].as_str(), Some("Vinyl"));
        assert_eq!(non_woven["Application Type"].as_str(), Some("Non-Pasted"));
        assert_eq!(non_woven["Removal Type"].as_str(), Some("Strippable"));
        assert_eq!(peel["Shipping Weight (Box 1)"], EnumCellValue::Number(4.0));
        assert_eq!(peel["Square Footage per Unit"], EnumCellValue::Number(15.0));
        assert_eq!(peel["Overall Product Length - End to End"], EnumCellValue::Number(60.0));
        assert_eq!(peel["Color"].as_str(), Some("Multicolor"));
        assert!(peel["Image 2 File"].is_none());
        assert_eq!(peel.len(), 66);
    }
}
