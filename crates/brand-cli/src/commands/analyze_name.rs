use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeNameArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `brandkit analyze-name`.
pub fn handle(args: &AnalyzeNameArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let assessment = ctx.generator().analyze_name(&args.name);
    output(&assessment, flags.format)
}
