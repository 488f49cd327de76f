//! Entity structs produced by the strategy generator and consumed by the
//! exporter.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the CLI
//! can render them in any output format and dump their schemas.

mod audience;
mod campaign;
mod framework;
mod name;
mod personality;
mod record;
mod strategy;

pub use audience::AudienceProfile;
pub use campaign::CampaignOutline;
pub use framework::BrandFramework;
pub use name::NameAssessment;
pub use personality::PersonalityRecommendation;
pub use record::StrategyRecord;
pub use strategy::{BrandStrategy, StrategyRequest};
