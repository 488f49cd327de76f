use brand_core::responses::HistoryResponse;

use crate::cli::root_commands::HistoryArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `brandkit history`.
pub fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(args.limit, ctx.config.general.history_limit);
    let (total_rows, strategies) = ctx.store.recent(usize::try_from(limit)?)?;

    tracing::debug!(total_rows, shown = strategies.len(), "read strategy history");

    match flags.format {
        OutputFormat::Text | OutputFormat::Table => output(&strategies, flags.format),
        format => output(
            &HistoryResponse {
                store: ctx.store.path().display().to_string(),
                total_rows,
                strategies,
            },
            format,
        ),
    }
}

/// Local `--limit` wins over the configured limit.
const fn effective_limit(local: Option<u32>, configured: u32) -> u32 {
    match local {
        Some(limit) => limit,
        None => configured,
    }
}
