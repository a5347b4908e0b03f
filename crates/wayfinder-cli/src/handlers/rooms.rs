//! Rooms command handler.

use std::io::Write;

use wayfinder_core::{CatalogState, LocationField};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the rooms command.
///
/// Loads the catalog and prints the suggestions the current-location input
/// would show for `filter` on `floor`, one per line.
pub async fn execute(
    ctx: &mut CliContext,
    filter: Option<&str>,
    floor: u8,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let navigator = &mut ctx.navigator;
    if let CatalogState::Failed { reason } = navigator.initialize().await {
        return Err(CliError::Reported(reason.to_string()));
    }

    navigator.change_floor(floor);
    let suggestions = navigator.set_input(LocationField::Current, filter.unwrap_or_default());
    tracing::debug!(count = suggestions.len(), floor, "Listing rooms");

    for name in suggestions {
        writeln!(out, "{name}")?;
    }
    Ok(())
}
