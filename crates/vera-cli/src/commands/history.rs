use std::path::PathBuf;

use anyhow::bail;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ClearResponse {
    cleared: usize,
    dir: PathBuf,
}

/// Handle `vera history`.
pub async fn handle(action: &HistoryCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List => {
            let mut entries = ctx.history.entries();
            if let Some(limit) = flags.limit {
                entries.truncate(usize::try_from(limit)?);
            }
            output(&entries, flags.format)
        }
        HistoryCommands::Show { id } => match ctx.history.get(id) {
            Some(result) => output(&result, flags.format),
            None => bail!("no result with id '{id}' in history"),
        },
        HistoryCommands::Clear => {
            let _lock = ctx.lock_history().await?;
            let cleared = ctx.history.len();
            ctx.history.clear();
            if let Some(error) = ctx.history.last_persist_error() {
                bail!("history cleared in memory but could not be saved: {error}");
            }
            output(
                &ClearResponse {
                    cleared,
                    dir: ctx.history.storage().dir().to_path_buf(),
                },
                flags.format,
            )
        }
    }
}
