//! Plan handlers.
//!
//! ## Queries
//! - Get plan statistics for the dashboard

mod get_plan_stats;

pub use get_plan_stats::{
    GetPlanStatsHandler, GetPlanStatsQuery, GetPlanStatsResult, PlanStatsView,
};
