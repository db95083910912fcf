//! Decal rules: size brackets, color variants and the wall-sticker field table.

use flatkit_io_xlsx::{SpecRecord, SpecTemplateLayout};

use crate::conf::{
    C_BRAND, C_COLOR_MULTI, C_COUNTRY, C_DECAL_BULLET_3, C_DECAL_BULLET_4, C_DECAL_BULLET_5,
    C_DECAL_DESCRIPTION, C_DECAL_DURABILITY, C_DECAL_IMAGE_2_FALLBACK, C_DECAL_IMAGE_3_COLORS,
    C_DECAL_IMAGE_3_DEFAULT, C_DECAL_ROOMS, C_DECAL_SHEET_NAME, C_DECAL_SURFACES,
    C_DECAL_TEMPLATE_PATH, C_DOES_NOT_APPLY, C_HEADER_MODEL_NUMBER, C_SHIP_TYPE,
    C_WARRANTY_DETAILS, C_WARRANTY_LENGTH, N_DECAL_LEAD_TIME_HOURS, N_FREIGHT_CLASS,
    TUP_DECAL_COLORS,
};
use crate::shaper::{DataShaper, derive_record};
use crate::spec::{EnumProductKind, SpecListingInput, SpecPackage, SpecSizeEntry};

/// Shaper for vinyl wall decals.
#[derive(Debug, Default)]
pub struct DecalShaper {
    l_rows: Vec<SpecRecord>,
}

impl DecalShaper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marketing copy and the two keyword bullets.
    pub fn derive_texts(keyword: &str) -> [String; 3] {
        [
            format!(
                "Are you in search of the perfect decorative solution for your walls or other smooth surfaces? Look no further than our remarkable {keyword}. These versatile vinyl stickers, also known as wall tattoos or wall vinyl, are designed to elevate your decor while serving informative purposes."
            ),
            format!("Our {keyword} are crafted from high-quality, waterproof material."),
            format!("Variety of Sizes Available: {keyword} come in multiple sizes."),
        ]
    }
}

fn derive_base_number(sku: &str, size: &SpecSizeEntry) -> String {
    format!("{sku} {}x{}", size.width, size.height)
}

impl DataShaper for DecalShaper {
    fn kind(&self) -> EnumProductKind {
        EnumProductKind::Decals
    }

    fn layout(&self) -> SpecTemplateLayout {
        SpecTemplateLayout::new(C_DECAL_SHEET_NAME)
    }

    fn default_template_path(&self) -> &'static str {
        C_DECAL_TEMPLATE_PATH
    }

    /// The smaller side decides: the first bracket either side fits wins.
    fn derive_package(&self, height: u32, width: u32) -> SpecPackage {
        let fits = |n_low: u32, n_high: u32| {
            (n_low < height && height <= n_high) || (n_low < width && width <= n_high)
        };
        let (weight, n_height, n_width, n_depth) = if height <= 24 || width <= 24 {
            (1, 24, 2, 2)
        } else if fits(24, 37) {
            (2, 37, 3, 3)
        } else if fits(37, 48) {
            (3, 48, 3, 3)
        } else {
            (4, 56, 3, 3)
        };
        SpecPackage {
            weight: Some(weight),
            height: n_height,
            width: n_width,
            depth: n_depth,
        }
    }

    fn derive_part_numbers(
        &self,
        sku: &str,
        size: &SpecSizeEntry,
        if_color_variants: bool,
    ) -> Vec<String> {
        let c_base = derive_base_number(sku, size);
        if if_color_variants {
            TUP_DECAL_COLORS
                .iter()
                .map(|c_color| format!("{c_base} {c_color}"))
                .collect()
        } else {
            vec![c_base]
        }
    }

    fn derive_records(&self, input: &SpecListingInput, size: &SpecSizeEntry) -> Vec<SpecRecord> {
        let package = self.derive_package(size.height, size.width);
        let [c_marketing, c_bullet_1, c_bullet_2] = Self::derive_texts(&input.keyword);
        let c_base = derive_base_number(&input.sku, size);

        let c_image_2 = input
            .second_image_link
            .clone()
            .unwrap_or_else(|| C_DECAL_IMAGE_2_FALLBACK.to_string());
        let c_image_3 = if input.if_color_variants {
            C_DECAL_IMAGE_3_COLORS
        } else {
            C_DECAL_IMAGE_3_DEFAULT
        };
        let c_personalization = if input.if_personalization { "Yes" } else { "No" };

        self.derive_part_numbers(&input.sku, size, input.if_color_variants)
            .into_iter()
            .map(|c_part| {
                let c_color = if input.if_color_variants {
                    c_part
                        .strip_prefix(&c_base)
                        .map(str::trim_start)
                        .unwrap_or_default()
                        .to_string()
                } else {
                    C_COLOR_MULTI.to_string()
                };

                derive_record([
                    ("Brand", C_BRAND.into()),
                    (C_HEADER_MODEL_NUMBER, c_part.clone().into()),
                    ("Supplier Part Number", c_part.into()),
                    ("Product Name", input.title.clone().into()),
                    ("This product is", C_DECAL_DESCRIPTION.into()),
                    ("Base Cost", size.price.into()),
                    ("Minimum Order Quantity (Per Part #)", 1u32.into()),
                    ("Force Multiples", 1u32.into()),
                    ("Display Set Quantity", 1u32.into()),
                    ("Marketing Copy", c_marketing.clone().into()),
                    ("Feature Bullet 1", c_bullet_1.clone().into()),
                    ("Feature Bullet 2", c_bullet_2.clone().into()),
                    ("Feature Bullet 3", C_DECAL_BULLET_3.into()),
                    ("Feature Bullet 4", C_DECAL_BULLET_4.into()),
                    ("Feature Bullet 5", C_DECAL_BULLET_5.into()),
                    ("Country of Manufacture", C_COUNTRY.into()),
                    ("California Proposition 65 Warning Required", "No".into()),
                    ("Ship Type (Small Parcel, LTL)", C_SHIP_TYPE.into()),
                    ("Freight Class", N_FREIGHT_CLASS.into()),
                    (
                        "Supplier Lead Time in Business Day Hours",
                        N_DECAL_LEAD_TIME_HOURS.into(),
                    ),
                    (
                        "Supplier Lead Time in Business Day Hours for Replacement Parts",
                        N_DECAL_LEAD_TIME_HOURS.into(),
                    ),
                    ("Number of Boxes", 1u32.into()),
                    ("Shipping Weight (Box 1)", package.weight.into()),
                    ("Carton Height (Box 1)", package.height.into()),
                    ("Carton Width (Box 1)", package.width.into()),
                    ("Carton Depth (Box 1)", package.depth.into()),
                    ("Image 1 File", input.image_link.clone().into()),
                    ("Image 2 File", c_image_2.clone().into()),
                    ("Image 3 File", c_image_3.into()),
                    ("Individually Sellable", "Yes".into()),
                    ("Product Type", "Accent".into()),
                    ("Subject", "Fashion".into()),
                    ("Surface Type", "Glossy".into()),
                    ("Material", "Vinyl".into()),
                    ("Compatible Surfaces", C_DECAL_SURFACES.into()),
                    ("Paste Included", "No".into()),
                    ("Non Wall Damaging", "Yes".into()),
                    ("Reusable", "No".into()),
                    ("Personalization or Monogramming", c_personalization.into()),
                    // trailing space is part of the template header
                    ("Room Use ", C_DECAL_ROOMS.into()),
                    ("Holiday / Occasion", "No Holiday".into()),
                    ("Country of Origin - Additional Details", "Made in USA".into()),
                    ("BPA Free", "No".into()),
                    ("Licensed Product Category", C_DOES_NOT_APPLY.into()),
                    ("Movie / Show Series Name", C_DOES_NOT_APPLY.into()),
                    ("Character Name", C_DOES_NOT_APPLY.into()),
                    ("Durability", C_DECAL_DURABILITY.into()),
                    ("Color", c_color.into()),
                    ("Total Number of Pieces Included", 1u32.into()),
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
                    (
                        "Sustainability Assessment for Wallcovering Products - NSF/ANSI 342 - Compliant",
                        "No".into(),
                    ),
                    ("Overall Height - Top to Bottom", size.height.into()),
                    ("Overall Width - Side to Side", size.width.into()),
                    ("Overall Product Weight", package.weight.into()),
                    ("Product Warranty", "Yes".into()),
                    ("Warranty Length", C_WARRANTY_LENGTH.into()),
                    ("Full or Limited Warranty", "Full".into()),
                    ("Warranty Details", C_WARRANTY_DETAILS.into()),
                    ("Commercial Warranty", "No".into()),
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
    use flatkit_io_xlsx::EnumCellValue;

    use super::*;

    fn input(if_color_variants: bool) -> SpecListingInput {
        SpecListingInput {
            kind: EnumProductKind::Decals,
            title: "Dog Paw Wall Decal".to_string(),
            sku: "VN007".to_string(),
            keyword: "Dog Wall Stickers".to_string(),
            image_link: "https://img.example/1.jpg".to_string(),
            second_image_link: None,
            if_color_variants,
            if_personalization: false,
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

    fn package(weight: u32, height: u32, width: u32, depth: u32) -> SpecPackage {
        SpecPackage {
            weight: Some(weight),
            height,
            width,
            depth,
        }
    }

    #[test]
    fn package_brackets_follow_smaller_side() {
        let shaper = DecalShaper::new();
        assert_eq!(shaper.derive_package(22, 16), package(1, 24, 2, 2));
        assert_eq!(shaper.derive_package(24, 60), package(1, 24, 2, 2));
        assert_eq!(shaper.derive_package(80, 10), package(1, 24, 2, 2));
        assert_eq!(shaper.derive_package(30, 22), package(1, 24, 2, 2));
        assert_eq!(shaper.derive_package(30, 35), package(2, 37, 3, 3));
        assert_eq!(shaper.derive_package(37, 90), package(2, 37, 3, 3));
        assert_eq!(shaper.derive_package(48, 44), package(3, 48, 3, 3));
        assert_eq!(shaper.derive_package(60, 48), package(3, 48, 3, 3));
        assert_eq!(shaper.derive_package(60, 49), package(4, 56, 3, 3));
    }

    #[test]
    fn part_numbers_expand_all_colors_in_order() {
        let shaper = DecalShaper::new();
        let l_parts = shaper.derive_part_numbers("VN007", &size(16, 22, 1.0), true);
        assert_eq!(l_parts.len(), 22);
        assert_eq!(l_parts[0], "VN007 16x22 White");
        assert_eq!(l_parts[8], "VN007 16x22 Lime Green");
        assert_eq!(l_parts[21], "VN007 16x22 Metallic Gold");

        let l_parts = shaper.derive_part_numbers("VN007", &size(16, 22, 1.0), false);
        assert_eq!(l_parts, vec!["VN007 16x22"]);
    }

    #[test]
    fn records_without_colors_are_multicolor() {
        let shaper = DecalShaper::new();
        let l_records = shaper.derive_records(&input(false), &size(16, 22, 16.99));
        assert_eq!(l_records.len(), 1);

        let record = &l_records[0];
        assert_eq!(record["Color"], EnumCellValue::from("Multicolor"));
        assert_eq!(record["Base Cost"], EnumCellValue::Number(16.99));
        assert_eq!(record["Shipping Weight (Box 1)"], EnumCellValue::Number(1.0));
        assert_eq!(record["Carton Height (Box 1)"], EnumCellValue::Number(24.0));
        assert_eq!(record["Overall Height - Top to Bottom"], EnumCellValue::Number(22.0));
        assert_eq!(record["Overall Width - Side to Side"], EnumCellValue::Number(16.0));
        assert_eq!(record["Image 2 File"].as_str(), Some(C_DECAL_IMAGE_2_FALLBACK));
        assert_eq!(record["Image 3 File"].as_str(), Some(C_DECAL_IMAGE_3_DEFAULT));
        assert_eq!(record["Personalization or Monogramming"].as_str(), Some("No"));
        assert_eq!(
            record["Feature Bullet 1"].as_str(),
            Some("Our Dog Wall Stickers are crafted from high-quality, waterproof material.")
        );
        assert_eq!(record.len(), 62);
    }

    #[test]
    fn records_with_colors_carry_color_suffix() {
        let shaper = DecalShaper::new();
        let mut input = input(true);
        input.if_personalization = true;
        input.second_image_link = Some("https://img.example/2.jpg".to_string());

        let l_records = shaper.derive_records(&input, &size(22, 30, 27.99));
        assert_eq!(l_records.len(), 22);
        assert_eq!(l_records[13]["Color"].as_str(), Some("Ice Blue"));
        assert_eq!(
            l_records[13]["Supplier Part Number"].as_str(),
            Some("VN007 22x30 Ice Blue")
        );
        assert_eq!(l_records[0]["Image 2 File"].as_str(), Some("https://img.example/2.jpg"));
        assert_eq!(l_records[0]["Image 3 File"].as_str(), Some(C_DECAL_IMAGE_3_COLORS));
        assert_eq!(
            l_records[0]["Personalization or Monogramming"].as_str(),
            Some("Yes")
        );
        assert_eq!(l_records[0]["Shipping Weight (Box 1)"], EnumCellValue::Number(1.0));
    }
}
