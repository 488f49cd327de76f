use brand_core::schema::schema_json;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `brandkit schema`. Always JSON; `--format raw` prints it on one line.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_json(&args.type_name)?;
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        _ => serde_json::to_string_pretty(&schema)?,
    };
    println!("{rendered}");
    Ok(())
}
