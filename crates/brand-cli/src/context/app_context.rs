use brand_config::BrandConfig;
use brand_core::{ReferenceTables, StrategyGenerator};
use brand_store::StrategyStore;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: BrandConfig,
    pub tables: ReferenceTables,
    pub store: StrategyStore,
}

impl AppContext {
    /// Build the tables and open the store, honouring a `--store` override.
    #[must_use]
    pub fn init(config: BrandConfig, flags: &GlobalFlags) -> Self {
        let store_path = flags
            .store
            .clone()
            .unwrap_or_else(|| config.store.path.clone());
        tracing::debug!(store = %store_path, "initialized application context");

        Self {
            config,
            tables: ReferenceTables::builtin(),
            store: StrategyStore::new(store_path),
        }
    }

    #[must_use]
    pub const fn generator(&self) -> StrategyGenerator<'_> {
        StrategyGenerator::new(&self.tables)
    }
}
