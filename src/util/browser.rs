use anyhow::{Context, Result};
use tracing::debug;

/// Open a link (web page or `mailto:`) with the system handler.
pub fn open_url(url: &str) -> Result<()> {
    debug!(url = url, "Opening link");
    open::that(url).with_context(|| format!("Failed to open {url}"))?;
    Ok(())
}
