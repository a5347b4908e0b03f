//! Route command handler.

use std::io::Write;
use std::path::Path;

use wayfinder_core::LocationField;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the route command.
///
/// Prints the route cells and, with `svg`, writes the drawn overlay.
/// Failures have already been shown as notifications when this returns
/// `CliError::Reported`.
pub async fn execute(
    ctx: &mut CliContext,
    from: &str,
    to: &str,
    svg: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let navigator = &mut ctx.navigator;
    // Routing goes straight to the backend; an unavailable catalog only
    // costs suggestions.
    navigator.initialize().await;

    navigator.set_input(LocationField::Current, from);
    navigator.set_input(LocationField::Destination, to);
    let summary = navigator.request_route().await?;

    let cells: Vec<String> = summary.path.cells.iter().map(ToString::to_string).collect();
    writeln!(out, "{} cells, {} segments", cells.len(), summary.segments)?;
    writeln!(out, "{}", cells.join(" -> "))?;

    if let Some(path) = svg {
        std::fs::write(path, navigator.surface().to_svg_string())?;
        tracing::info!(path = %path.display(), "Wrote route overlay");
        writeln!(out, "Wrote {}", path.display())?;
    }
    Ok(())
}
