use std::path::PathBuf;

use anyhow::{Context, bail};
use serde::Serialize;
use vera_core::entities::AnalysisResult;
use vera_core::export::ExportDocument;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExportResponse {
    id: String,
    path: PathBuf,
}

/// Handle `vera export`.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = select(&ctx.history.entries(), args.id.as_deref())?;
    let document = ExportDocument::from_result(&result);

    if args.stdout {
        return output(&document, flags.format);
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(ExportDocument::file_name(&result)));
    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(id = %result.id, path = %path.display(), "exported result");

    output(
        &ExportResponse {
            id: result.id,
            path,
        },
        flags.format,
    )
}

/// The result with `id`, or the newest one when no id is given.
fn select(entries: &[AnalysisResult], id: Option<&str>) -> anyhow::Result<AnalysisResult> {
    match id {
        Some(id) => match entries.iter().find(|entry| entry.id == id) {
            Some(entry) => Ok(entry.clone()),
            None => bail!("no result with id '{id}' in history"),
        },
        None => match entries.first() {
            Some(entry) => Ok(entry.clone()),
            None => bail!("history is empty; run 'vera analyze' first"),
        },
    }
}
