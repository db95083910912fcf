// Command handlers for flatkit subcommands

use anyhow::Result;
use tracing::debug;

use crate::cli::{Args, Command};
use crate::config::AppConfig;

pub mod generate;
pub mod headers;
pub mod listing;
pub mod preview;

/// Main command dispatcher
pub fn execute_command(args: Args) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Generate {
            listing,
            out,
            template,
            plain,
        } => {
            debug!("Handling generate command");
            generate::handle_generate(&config, listing, out, template, plain)
        }
        Command::Headers { kind, template } => {
            debug!(kind = %kind, "Handling headers command");
            headers::handle_headers(&config, kind, template)
        }
        Command::Preview { listing } => {
            debug!("Handling preview command");
            preview::handle_preview(listing)
        }
    }
}
