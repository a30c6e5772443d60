//! GetPlanStatsHandler - Query handler for dashboard plan statistics.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::plan::{MembershipPlan, PlanError, PlanStatsMemo, PlanStatsSummary};
use crate::ports::PlanReader;

/// Query to get plan statistics.
#[derive(Debug, Clone)]
pub struct GetPlanStatsQuery;

/// Owned plan statistics handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStatsView {
    pub total_plans: usize,
    pub total_active_members: u64,
    pub monthly_revenue: f64,
    pub most_popular_plan: Option<MembershipPlan>,
}

impl From<PlanStatsSummary<'_>> for PlanStatsView {
    fn from(summary: PlanStatsSummary<'_>) -> Self {
        Self {
            total_plans: summary.total_plans,
            total_active_members: summary.total_active_members,
            monthly_revenue: summary.monthly_revenue,
            most_popular_plan: summary.most_popular_plan.cloned(),
        }
    }
}

/// Result type for statistics query.
pub type GetPlanStatsResult = PlanStatsView;

/// Handler for retrieving plan statistics.
///
/// Owns the memo, so repeated queries over an unchanged plan list reuse
/// the previous aggregation.
pub struct GetPlanStatsHandler {
    reader: Arc<dyn PlanReader>,
    memo: PlanStatsMemo,
}

impl GetPlanStatsHandler {
    pub fn new(reader: Arc<dyn PlanReader>) -> Self {
        Self {
            reader,
            memo: PlanStatsMemo::new(),
        }
    }

    pub async fn handle(&self, _query: GetPlanStatsQuery) -> Result<GetPlanStatsResult, PlanError> {
        let plans = self.reader.list_plans().await.map_err(|e| {
            tracing::warn!("Plan reader failed: {}", e);
            PlanError::from(e)
        })?;

        let view = PlanStatsView::from(self.memo.compute(&plans));
        tracing::debug!(
            total_plans = view.total_plans,
            total_active_members = view.total_active_members,
            monthly_revenue = view.monthly_revenue,
            "plan stats ready"
        );
        Ok(view)
    }

    /// Number of aggregations run so far.
    pub fn computations(&self) -> u64 {
        self.memo.computations()
    }
}
