pub mod analysis;
pub mod config;

pub use analysis::{Analysis, AnalysisOutcome, Claim, ClaimStatus, RiskLevel};
pub use config::{Config, GatewayConfig};
