// Preview command: shaped rows as JSON on stdout

use anyhow::Result;
use flatkit_shape::shape_listing;

use crate::cli::ListingArgs;
use crate::commands::listing::load_listing;

pub fn handle_preview(listing: ListingArgs) -> Result<()> {
    let input = load_listing(listing)?;
    let l_records = shape_listing(&input)?;
    println!("{}", serde_json::to_string_pretty(&l_records)?);
    Ok(())
}
