//! Plan reader port (read side).
//!
//! Defines the contract for whatever supplies membership plans to the
//! dashboard: a backend API client, a state store, a fixture file.
//! Implementations hand back records that are already validated, in their
//! natural order.
//!
//! # Example
//!
//! ```ignore
//! async fn show_stats(reader: &dyn PlanReader, memo: &PlanStatsMemo) -> Result<(), DomainError> {
//!     let plans = reader.list_plans().await?;
//!     let summary = memo.compute(&plans);
//!     println!("{} plans, {} members", summary.total_plans, summary.total_active_members);
//!     Ok(())
//! }
//! ```

use crate::domain::foundation::DomainError;
use crate::domain::plan::MembershipPlan;
use async_trait::async_trait;

/// Reader port for membership plans.
#[async_trait]
pub trait PlanReader: Send + Sync {
    /// List all plans in their natural order.
    async fn list_plans(&self) -> Result<Vec<MembershipPlan>, DomainError>;
}
