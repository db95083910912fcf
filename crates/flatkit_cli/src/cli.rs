// CLI argument parsing and definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flatkit_shape::{EnumProductKind, SpecSizeEntry};

#[derive(Debug, Clone, Parser)]
#[command(name = "flatkit")]
#[command(about = "Build marketplace flat files for decal and wallpaper listings")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a flatkit.yaml configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Shape a listing and write it into the product template
    Generate {
        #[command(flatten)]
        listing: ListingArgs,

        /// Output folder (default: config `dir_out`, else the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Template workbook overriding the configured one
        #[arg(long, conflicts_with = "plain")]
        template: Option<PathBuf>,

        /// Write a standalone workbook instead of filling the template
        #[arg(long)]
        plain: bool,
    },
    /// List the header columns of a product template
    Headers {
        /// Product family: decals or wallpapers
        #[arg(long)]
        kind: EnumProductKind,

        /// Template workbook overriding the configured one
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Print the shaped rows as JSON without writing a file
    Preview {
        #[command(flatten)]
        listing: ListingArgs,
    },
}

/// Listing form fields; `--from` loads them from YAML or JSON and the flags
/// override individual values.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListingArgs {
    /// Listing file (.yaml, .yml or .json)
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Product family: decals or wallpapers
    #[arg(long)]
    pub kind: Option<EnumProductKind>,

    /// Listing title
    #[arg(long)]
    pub title: Option<String>,

    /// Base SKU
    #[arg(long)]
    pub sku: Option<String>,

    /// Key phrase used in the marketing copy
    #[arg(long)]
    pub keyword: Option<String>,

    /// Main image link
    #[arg(long)]
    pub image: Option<String>,

    /// Second image link
    #[arg(long)]
    pub image2: Option<String>,

    /// Expand decals into every color
    #[arg(long)]
    pub colors: bool,

    /// Design is personalized (decals)
    #[arg(long)]
    pub personalized: bool,

    /// Size line WIDTHxHEIGHT@PRICE, repeatable
    #[arg(long = "size", value_name = "WxH@PRICE")]
    pub sizes: Vec<SpecSizeEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_collects_repeated_sizes() {
        let args = Args::try_parse_from([
            "flatkit",
            "-vv",
            "generate",
            "--kind",
            "Wallpapers",
            "--sku",
            "wp100",
            "--size",
            "36x60@49.99",
            "--size",
            "48x96@89",
            "--out",
            "listings",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        let Command::Generate { listing, out, .. } = args.command else {
            panic!("expected generate");
        };
        assert_eq!(listing.kind, Some(EnumProductKind::Wallpapers));
        assert_eq!(listing.sizes.len(), 2);
        assert_eq!(out, Some(PathBuf::from("listings")));
    }

    #[test]
    fn malformed_size_is_rejected_by_the_parser() {
        let result =
            Args::try_parse_from(["flatkit", "preview", "--kind", "decals", "--size", "16x22"]);
        assert!(result.is_err());
    }

    #[test]
    fn template_and_plain_conflict() {
        let result = Args::try_parse_from([
            "flatkit",
            "generate",
            "--plain",
            "--template",
            "t.xlsx",
        ]);
        assert!(result.is_err());
    }
}
