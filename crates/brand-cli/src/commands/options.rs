use brand_core::responses::OptionsResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `brandkit options`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&OptionsResponse::from_tables(&ctx.tables), flags.format)
}
