//! Plan statistics - summary metrics over a list of membership plans.

use serde::Serialize;
use tracing::warn;

use super::record::MembershipPlan;

/// Summary of a plan list, borrowing the most popular plan from its input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStatsSummary<'a> {
    pub total_plans: usize,
    pub total_active_members: u64,
    pub monthly_revenue: f64,
    pub most_popular_plan: Option<&'a MembershipPlan>,
}

/// Owned statistics, holding the position of the most popular plan
/// instead of a reference to it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    pub total_plans: usize,
    pub total_active_members: u64,
    pub monthly_revenue: f64,
    pub most_popular_index: Option<usize>,
}

impl PlanStats {
    /// Binds these statistics to the plan list they were computed from.
    ///
    /// An index that does not exist in `plans` resolves to `None`.
    pub fn resolve<'a>(&self, plans: &'a [MembershipPlan]) -> PlanStatsSummary<'a> {
        PlanStatsSummary {
            total_plans: self.total_plans,
            total_active_members: self.total_active_members,
            monthly_revenue: self.monthly_revenue,
            most_popular_plan: self.most_popular_index.and_then(|i| plans.get(i)),
        }
    }
}

/// Aggregator producing dashboard statistics from plan records.
pub struct PlanStatsAggregator;

impl PlanStatsAggregator {
    /// Computes the summary for `plans`.
    ///
    /// Sums run left to right in input order, so floating-point revenue is
    /// reproducible for a given order. A member total that overflows is reported
    /// as `u64::MAX` with a warning; [`Self::checked_member_total`] detects it.
    ///
    /// # Edge Cases
    /// - Empty plans: zeroed counters and no most popular plan
    /// - Ties on active members: the earliest plan wins
    pub fn compute(plans: &[MembershipPlan]) -> PlanStatsSummary<'_> {
        Self::compute_stats(plans).resolve(plans)
    }

    /// Computes the owned form of the summary.
    pub fn compute_stats(plans: &[MembershipPlan]) -> PlanStats {
        let total_active_members = Self::checked_member_total(plans).unwrap_or_else(|| {
            warn!(
                total_plans = plans.len(),
                "active member total overflowed u64, reporting u64::MAX"
            );
            u64::MAX
        });

        let monthly_revenue = plans.iter().fold(0.0f64, |acc, p| acc + p.revenue());

        PlanStats {
            total_plans: plans.len(),
            total_active_members,
            monthly_revenue,
            most_popular_index: Self::most_popular_index(plans),
        }
    }

    /// Sums active members, or `None` if the sum does not fit in a `u64`.
    pub fn checked_member_total(plans: &[MembershipPlan]) -> Option<u64> {
        plans
            .iter()
            .try_fold(0u64, |acc, p| acc.checked_add(p.active_members))
    }

    /// Finds the plan with the most active members.
    pub fn most_popular(plans: &[MembershipPlan]) -> Option<&MembershipPlan> {
        Self::most_popular_index(plans).map(|i| &plans[i])
    }

    // Only a strictly greater count replaces the running best, which is
    // what makes the first occurrence win a tie. `max_by_key` would keep
    // the last one.
    fn most_popular_index(plans: &[MembershipPlan]) -> Option<usize> {
        let (first, rest) = plans.split_first()?;
        let mut best = (0, first.active_members);
        for (offset, plan) in rest.iter().enumerate() {
            if plan.active_members > best.1 {
                best = (offset + 1, plan.active_members);
            }
        }
        Some(best.0)
    }
}
