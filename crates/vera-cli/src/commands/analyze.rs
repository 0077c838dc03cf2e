use std::io::Read;

use anyhow::Context;
use vera_core::entities::AnalysisResult;
use vera_engine::Analyzer;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vera analyze`.
pub async fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_input(args)?;
    match analyze_and_record(&text, !args.no_record, ctx).await? {
        Some(result) => output(&result, flags.format),
        None => Ok(()),
    }
}

/// Analyze `text` and, when `record` is set, prepend the result to history.
/// Blank text yields `None` and never touches the history slot.
async fn analyze_and_record(
    text: &str,
    record: bool,
    ctx: &AppContext,
) -> anyhow::Result<Option<AnalysisResult>> {
    let Some(result) = ctx.analyzer.analyze(text).await? else {
        tracing::debug!("blank input; nothing analyzed");
        return Ok(None);
    };

    if record {
        let _lock = ctx.lock_history().await?;
        ctx.history.record(result.clone());
        if let Some(error) = ctx.history.last_persist_error() {
            tracing::warn!(%error, "result kept for this run only; history was not saved");
        }
    } else {
        tracing::debug!(id = %result.id, "not recording result");
    }

    Ok(Some(result))
}

fn read_input(args: &AnalyzeArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read text from stdin")?;
    Ok(buf)
}
