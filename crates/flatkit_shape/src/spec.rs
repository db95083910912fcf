//! Listing input models, packaging brackets and shaping errors.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::conf::N_LEN_TITLE_MAX;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Product family; selects the rule set and the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum EnumProductKind {
    /// Vinyl wall decals, optionally in 22 colors.
    Decals,
    /// Wall murals in two print types.
    Wallpapers,
}

impl EnumProductKind {
    /// Identifier used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decals => "decals",
            Self::Wallpapers => "wallpapers",
        }
    }
}

impl FromStr for EnumProductKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decals" => Ok(Self::Decals),
            "wallpapers" => Ok(Self::Wallpapers),
            _ => Err(ShapeError::UnknownKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for EnumProductKind {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for EnumProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region InputSpecification

/// One size line of the listing: design width, height (inches) and base price.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct SpecSizeEntry {
    /// Design width in inches.
    pub width: u32,
    /// Design height in inches.
    pub height: u32,
    /// Base price.
    pub price: f64,
}

impl FromStr for SpecSizeEntry {
    type Err = ShapeError;

    /// Parse `WIDTHxHEIGHT@PRICE`; the price may use `,` as decimal separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let c_raw = s.trim();
        let invalid = |why: &str| ShapeError::InvalidSize(format!("{c_raw:?}: {why}"));

        let (c_dims, c_price) = c_raw
            .split_once('@')
            .ok_or_else(|| invalid("expected WIDTHxHEIGHT@PRICE"))?;
        let (c_width, c_height) = c_dims
            .split_once(['x', 'X'])
            .ok_or_else(|| invalid("expected WIDTHxHEIGHT before '@'"))?;

        let width = c_width
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid("width must be a whole number"))?;
        let height = c_height
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid("height must be a whole number"))?;
        let price = c_price
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| invalid("price must be a number"))?;

        Ok(Self {
            width,
            height,
            price,
        })
    }
}

impl TryFrom<String> for SpecSizeEntry {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SpecSizeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@{}", self.width, self.height, self.price)
    }
}

/// Everything the listing form collects for one design.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpecListingInput {
    /// Product family.
    pub kind: EnumProductKind,
    /// Listing title.
    pub title: String,
    /// Base SKU, e.g. `VN007`.
    pub sku: String,
    /// Key phrase used in marketing copy, e.g. `Dog Wall Stickers`.
    pub keyword: String,
    /// Main image link.
    #[serde(rename = "image")]
    pub image_link: String,
    /// Optional second image link.
    #[serde(rename = "image2", default)]
    pub second_image_link: Option<String>,
    /// Expand decals into every color.
    #[serde(rename = "colors", default)]
    pub if_color_variants: bool,
    /// Design carries customer personalization (decals only).
    #[serde(rename = "personalized", default)]
    pub if_personalization: bool,
    /// Sizes in submission order.
    pub sizes: Vec<SpecSizeEntry>,
}

impl SpecListingInput {
    /// Trim text fields, upper-case the SKU and drop a blank second image.
    pub fn normalized(&self) -> Self {
        let second_image_link = self
            .second_image_link
            .as_deref()
            .map(str::trim)
            .filter(|c_link| !c_link.is_empty())
            .map(ToString::to_string);
        Self {
            kind: self.kind,
            title: self.title.trim().to_string(),
            sku: self.sku.trim().to_uppercase(),
            keyword: self.keyword.trim().to_string(),
            image_link: self.image_link.trim().to_string(),
            second_image_link,
            if_color_variants: self.if_color_variants,
            if_personalization: self.if_personalization,
            sizes: self.sizes.clone(),
        }
    }

    /// Check required fields and sizes; every problem is reported at once.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let mut l_problems = Vec::new();

        let l_required = [
            ("title", &self.title),
            ("sku", &self.sku),
            ("keyword", &self.keyword),
            ("image", &self.image_link),
        ];
        for (c_field, c_value) in l_required {
            if c_value.trim().is_empty() {
                l_problems.push(format!("{c_field}: required"));
            }
        }
        if self.title.chars().count() > N_LEN_TITLE_MAX {
            l_problems.push(format!("title: longer than {N_LEN_TITLE_MAX} characters"));
        }

        if self.sizes.is_empty() {
            l_problems.push("sizes: at least one size is required".to_string());
        }
        for (n_idx, size) in self.sizes.iter().enumerate() {
            let n_line = n_idx + 1;
            if size.width == 0 {
                l_problems.push(format!("size {n_line}: width must be > 0"));
            }
            if size.height == 0 {
                l_problems.push(format!("size {n_line}: height must be > 0"));
            }
            if !size.price.is_finite() || size.price < 0.0 {
                l_problems.push(format!("size {n_line}: price must be >= 0"));
            }
        }

        if l_problems.is_empty() {
            Ok(())
        } else {
            Err(ShapeError::Invalid(l_problems))
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PackageSpecification

/// Shipping bracket: box weight (lb) and carton dimensions (in).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecPackage {
    /// Shipping weight; absent when no bracket covers the size.
    pub weight: Option<u32>,
    /// Carton height.
    pub height: u32,
    /// Carton width.
    pub width: u32,
    /// Carton depth.
    pub depth: u32,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Listing shaping failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Product kind is neither `decals` nor `wallpapers`.
    UnknownKind(String),
    /// Size line could not be parsed.
    InvalidSize(String),
    /// Listing input failed validation.
    Invalid(Vec<String>),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(kind) => write!(
                f,
                "Unknown product kind {kind:?} (expected \"decals\" or \"wallpapers\")"
            ),
            Self::InvalidSize(msg) => write!(f, "Invalid size {msg}"),
            Self::Invalid(l_problems) => {
                write!(f, "Listing is incomplete: {}", l_problems.join("; "))
            }
        }
    }
}

impl std::error::Error for ShapeError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> SpecListingInput {
        SpecListingInput {
            kind: EnumProductKind::Decals,
            title: "Dog Paw Wall Decal".to_string(),
            sku: "vn007".to_string(),
            keyword: "Dog Wall Stickers".to_string(),
            image_link: "https://img.example/1.jpg".to_string(),
            second_image_link: Some("   ".to_string()),
            if_color_variants: false,
            if_personalization: false,
            sizes: vec!["16x22@16.99".parse().unwrap()],
        }
    }

    #[test]
    fn parse_size_accepts_comma_price() {
        let size: SpecSizeEntry = " 22X30@27,99 ".parse().unwrap();
        assert_eq!(size.width, 22);
        assert_eq!(size.height, 30);
        assert!((size.price - 27.99).abs() < 1e-9);
    }

    #[test]
    fn parse_size_rejects_malformed_lines() {
        for c_raw in ["16x22", "16@9.99", "ax22@1", "16x22@free", "-1x2@3"] {
            let err = c_raw.parse::<SpecSizeEntry>().unwrap_err();
            assert!(matches!(err, ShapeError::InvalidSize(_)), "{c_raw}");
        }
    }

    #[test]
    fn kind_parses_case_insensitive_and_rejects_unknown() {
        assert_eq!("Decals".parse::<EnumProductKind>().unwrap(), EnumProductKind::Decals);
        assert_eq!(
            " wallpapers ".parse::<EnumProductKind>().unwrap(),
            EnumProductKind::Wallpapers
        );
        assert_eq!(
            "posters".parse::<EnumProductKind>().unwrap_err(),
            ShapeError::UnknownKind("posters".to_string())
        );
    }

    #[test]
    fn kind_deserializes_case_insensitive() {
        let kind: EnumProductKind = serde_yaml_ng::from_str("Decals").unwrap();
        assert_eq!(kind, EnumProductKind::Decals);
        let kind: EnumProductKind = serde_yaml_ng::from_str("WALLPAPERS").unwrap();
        assert_eq!(kind, EnumProductKind::Wallpapers);
        assert!(serde_yaml_ng::from_str::<EnumProductKind>("posters").is_err());
    }

    #[test]
    fn normalized_uppercases_sku_and_drops_blank_second_image() {
        let input = input().normalized();
        assert_eq!(input.sku, "VN007");
        assert_eq!(input.second_image_link, None);
    }

    #[test]
    fn validate_collects_every_problem() {
        let mut input = input();
        input.title = " ".to_string();
        input.keyword = String::new();
        input.sizes.push(SpecSizeEntry {
            width: 0,
            height: 10,
            price: f64::NAN,
        });

        let ShapeError::Invalid(l_problems) = input.validate().unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(
            l_problems,
            vec![
                "title: required",
                "keyword: required",
                "size 2: width must be > 0",
                "size 2: price must be >= 0",
            ]
        );
    }

    #[test]
    fn validate_caps_title_length() {
        let mut input = input();
        input.title = "a".repeat(N_LEN_TITLE_MAX);
        assert!(input.validate().is_ok());

        input.title.push('a');
        let ShapeError::Invalid(l_problems) = input.validate().unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(l_problems, vec!["title: longer than 255 characters"]);
    }

    #[test]
    fn validate_collects_title_cap_with_other_problems() {
        let mut input = input();
        input.title = "a".repeat(256);
        input.keyword = String::new();
        input.sizes.push(SpecSizeEntry {
            width: 0,
            height: 10,
            price: f64::NAN,
        });

        let ShapeError::Invalid(l_problems) = input.validate().unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(
            l_problems,
            vec![
                "keyword: required",
                "title: longer than 255 characters",
                "size 2: width must be > 0",
                "size 2: price must be >= 0",
            ]
        );
    }

    #[test]
    fn validate_requires_a_size() {
        let mut input = input();
        input.sizes.clear();
        assert!(input.validate().is_err());
        assert!(self::input().validate().is_ok());
    }

    #[test]
    fn listing_deserializes_from_yaml() {
        let c_yaml = r#"
kind: wallpapers
title: Forest Mural
sku: wp100
keyword: Forest Wallpaper
image: https://img.example/forest.jpg
sizes:
  - 36x60@49.99
  - "48x96@89,50"
"#;
        let input: SpecListingInput = serde_yaml_ng::from_str(c_yaml).unwrap();
        assert_eq!(input.kind, EnumProductKind::Wallpapers);
        assert_eq!(input.sizes.len(), 2);
        assert!((input.sizes[1].price - 89.5).abs() < 1e-9);
        assert!(!input.if_color_variants);
        assert_eq!(input.second_image_link, None);
    }
}
