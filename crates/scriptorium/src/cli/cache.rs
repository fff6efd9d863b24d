//! Memo cache command handlers.

use super::commands::CacheCommands;
use scriptorium::{ScriptoriumConfig, ScriptoriumResult};
use tracing::info;

/// Handle memo cache commands.
pub async fn handle_cache_command(
    config: &ScriptoriumConfig,
    cmd: CacheCommands,
) -> ScriptoriumResult<()> {
    match cmd {
        CacheCommands::Clear => {
            let cache = config.memo_cache()?;
            let removed = cache.clear().await?;
            info!(removed, directory = %cache.config().directory().display(), "Cleared memo cache");
            println!("Removed {} cache entries", removed);
        }
    }

    Ok(())
}
