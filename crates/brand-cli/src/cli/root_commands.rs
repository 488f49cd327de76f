use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate a brand strategy, optionally saving it to the store.
    Generate(GenerateArgs),
    /// Assess a business name on its own.
    #[command(name = "analyze-name")]
    AnalyzeName(AnalyzeNameArgs),
    /// List every accepted category, price point, budget level, and target market.
    Options,
    /// Show strategies saved to the store.
    History(HistoryArgs),
    /// Dump JSON schema for a generated type.
    Schema(SchemaArgs),
}

/// Arguments for `brandkit generate`.
#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Business name.
    #[arg(short, long)]
    pub name: String,
    /// Industry category (defaults to the configured category).
    #[arg(short, long)]
    pub category: Option<String>,
    /// Price point (defaults to the configured price point).
    #[arg(long = "price-point")]
    pub price_point: Option<String>,
    /// Marketing budget level (defaults to the configured level).
    #[arg(short, long)]
    pub budget: Option<String>,
    /// Target-market tag. Repeat for several.
    #[arg(short, long = "target")]
    pub targets: Vec<String>,
    /// Append the generated strategy to the store.
    #[arg(long)]
    pub save: bool,
}

/// Arguments for `brandkit analyze-name`.
#[derive(Clone, Debug, Args)]
pub struct AnalyzeNameArgs {
    /// Business name to assess.
    pub name: String,
}

/// Arguments for `brandkit history`.
#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Show at most this many of the most recent rows.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,
}

/// Arguments for `brandkit schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name: strategy, record, framework, personality, campaign, name-analysis.
    pub type_name: String,
}
