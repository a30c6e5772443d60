//! Plan domain module.
//!
//! Membership plan records and the statistics the dashboard shows for them.
//!
//! # Module Structure
//!
//! - `record` - MembershipPlan and raw record validation
//! - `stats` - PlanStatsAggregator and its summary types
//! - `memo` - Single-entry memoization over the aggregator
//! - `errors` - PlanError

mod errors;
mod memo;
mod record;
mod stats;

pub use errors::PlanError;
pub use memo::PlanStatsMemo;
pub use record::MembershipPlan;
pub use stats::{PlanStats, PlanStatsAggregator, PlanStatsSummary};
