//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod plan;

pub use plan::{GetPlanStatsHandler, GetPlanStatsQuery, GetPlanStatsResult, PlanStatsView};
