//! `flatkit_shape` v1:
//! Listing rules that turn one design into marketplace template records.
//!
//! Module layout:
//! - `conf`      : brand, template, color and print-type tables, listing copy
//! - `spec`      : listing input, size lines, packages, errors
//! - `shaper`    : `DataShaper` trait, factory and `shape_listing`
//! - `decal`     : decal brackets and color variants
//! - `wallpaper` : wallpaper brackets, print types and pricing
pub mod conf;
pub mod decal;
pub mod shaper;
pub mod spec;
pub mod wallpaper;

pub use decal::DecalShaper;
pub use shaper::{DataShaper, create_shaper, shape_listing};
pub use spec::{EnumProductKind, ShapeError, SpecListingInput, SpecPackage, SpecSizeEntry};
pub use wallpaper::WallpaperShaper;
