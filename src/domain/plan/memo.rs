//! Memoized plan statistics.
//!
//! Holds a single cache entry: the last plan list seen and the statistics
//! computed for it. A call whose input equals the cached list reuses the
//! statistics; anything else recomputes and replaces the entry.
//!
//! Inputs are compared by value, not by address. A caller may mutate a
//! list in place between calls, so an unchanged address says nothing about
//! unchanged contents.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use super::record::MembershipPlan;
use super::stats::{PlanStats, PlanStatsAggregator, PlanStatsSummary};

#[derive(Debug)]
struct CacheEntry {
    input: Vec<MembershipPlan>,
    stats: PlanStats,
}

/// Single-entry cache in front of [`PlanStatsAggregator`].
#[derive(Debug, Default)]
pub struct PlanStatsMemo {
    entry: Mutex<Option<CacheEntry>>,
    computations: AtomicU64,
}

impl PlanStatsMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the summary for `plans`, recomputing only when `plans`
    /// differs from the previous input.
    pub fn compute<'a>(&self, plans: &'a [MembershipPlan]) -> PlanStatsSummary<'a> {
        let mut entry = self.lock();

        if let Some(cached) = entry.as_ref() {
            if cached.input.as_slice() == plans {
                trace!(total_plans = plans.len(), "plan stats cache hit");
                return cached.stats.resolve(plans);
            }
        }

        let stats = PlanStatsAggregator::compute_stats(plans);
        self.computations.fetch_add(1, Ordering::Relaxed);
        debug!(
            total_plans = stats.total_plans,
            total_active_members = stats.total_active_members,
            "plan stats recomputed"
        );

        *entry = Some(CacheEntry {
            input: plans.to_vec(),
            stats,
        });
        stats.resolve(plans)
    }

    /// Number of times the aggregation actually ran.
    pub fn computations(&self) -> u64 {
        self.computations.load(Ordering::Relaxed)
    }

    /// Drops the cached entry.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    // The entry is always replaced whole, so a panic elsewhere cannot leave
    // it half-written.
    fn lock(&self) -> MutexGuard<'_, Option<CacheEntry>> {
        self.entry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
