// Listing input assembly from --from files and form flags

use std::path::Path;

use anyhow::{Context, Result};
use flatkit_shape::SpecListingInput;

use crate::cli::ListingArgs;

/// Build the listing from `--from` (if given) with flags taking precedence.
///
/// Missing text fields become empty strings so validation reports all of
/// them together.
pub fn load_listing(args: ListingArgs) -> Result<SpecListingInput> {
    let mut input = match &args.from {
        Some(path) => read_listing_file(path)?,
        None => SpecListingInput {
            kind: args
                .kind
                .context("--kind is required unless --from is given")?,
            title: String::new(),
            sku: String::new(),
            keyword: String::new(),
            image_link: String::new(),
            second_image_link: None,
            if_color_variants: false,
            if_personalization: false,
            sizes: Vec::new(),
        },
    };

    if let Some(kind) = args.kind {
        input.kind = kind;
    }
    if let Some(title) = args.title {
        input.title = title;
    }
    if let Some(sku) = args.sku {
        input.sku = sku;
    }
    if let Some(keyword) = args.keyword {
        input.keyword = keyword;
    }
    if let Some(image) = args.image {
        input.image_link = image;
    }
    if args.image2.is_some() {
        input.second_image_link = args.image2;
    }
    input.if_color_variants |= args.colors;
    input.if_personalization |= args.personalized;
    if !args.sizes.is_empty() {
        input.sizes = args.sizes;
    }
    Ok(input)
}

/// `.json` files are read as JSON, anything else as YAML.
fn read_listing_file(path: &Path) -> Result<SpecListingInput> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read listing file {}", path.display()))?;
    let if_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if if_json {
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid listing file {}", path.display()))
    } else {
        serde_yaml_ng::from_str(&contents)
            .with_context(|| format!("Invalid listing file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use flatkit_shape::EnumProductKind;

    use super::*;

    #[test]
    fn flags_alone_require_kind() {
        let err = load_listing(ListingArgs::default()).unwrap_err();
        assert!(err.to_string().contains("--kind"));
    }

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listing.json");
        std::fs::write(
            &path,
            r#"{
                "kind": "decals",
                "title": "Dog Paw Wall Decal",
                "sku": "vn007",
                "keyword": "Dog Wall Stickers",
                "image": "https://img.example/1.jpg",
                "sizes": ["16x22@16.99"]
            }"#,
        )
        .unwrap();

        let input = load_listing(ListingArgs {
            from: Some(path),
            title: Some("Cat Paw Wall Decal".to_string()),
            colors: true,
            sizes: vec!["22x30@27.99".parse().unwrap()],
            ..Default::default()
        })
        .unwrap();

        assert_eq!(input.kind, EnumProductKind::Decals);
        assert_eq!(input.title, "Cat Paw Wall Decal");
        assert_eq!(input.sku, "vn007");
        assert!(input.if_color_variants);
        assert_eq!(input.sizes.len(), 1);
        assert_eq!(input.sizes[0].width, 22);
    }

    #[test]
    fn yaml_listing_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listing.yaml");
        std::fs::write(
            &path,
            "kind: Wallpapers\ntitle: Forest Mural\nsku: wp100\nkeyword: Forest Wallpaper\nimage: https://img.example/f.jpg\nimage2: https://img.example/f2.jpg\nsizes: [36x60@49.99]\n",
        )
        .unwrap();

        let input = load_listing(ListingArgs {
            from: Some(path),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(input.kind, EnumProductKind::Wallpapers);
        assert_eq!(
            input.second_image_link.as_deref(),
            Some("https://img.example/f2.jpg")
        );
    }

    #[test]
    fn unreadable_listing_file_names_the_path() {
        let err = load_listing(ListingArgs {
            from: Some("missing/listing.yaml".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("missing/listing.yaml"));
    }
}
