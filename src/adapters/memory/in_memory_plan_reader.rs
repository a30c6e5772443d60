//! In-Memory Plan Reader Adapter
//!
//! Holds membership plans in memory. Plans can be seeded directly, from a
//! JSON array of raw records, or from a JSON file on disk.
//! Useful for testing, development, and fixture-driven dashboards.

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::plan::{MembershipPlan, PlanError};
use crate::ports::PlanReader;

/// In-memory source of membership plans
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanReader {
    plans: Arc<RwLock<Vec<MembershipPlan>>>,
}

impl InMemoryPlanReader {
    /// Create a reader serving `plans` in the given order
    pub fn new(plans: Vec<MembershipPlan>) -> Self {
        Self {
            plans: Arc::new(RwLock::new(plans)),
        }
    }

    /// Create a reader with no plans
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of raw plan records.
    ///
    /// The whole document is rejected on the first invalid record.
    pub fn from_json_str(json: &str) -> Result<Self, PlanError> {
        let document: Value = serde_json::from_str(json)
            .map_err(|e| PlanError::invalid_record("document", format!("is not valid JSON: {}", e)))?;

        let records = document
            .as_array()
            .ok_or_else(|| PlanError::invalid_record("document", "must be a JSON array"))?;

        Ok(Self::new(MembershipPlan::parse_records(records)?))
    }

    /// Load plans from a JSON file containing an array of raw records
    pub async fn load_json_file(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            tracing::error!("Failed to read plan file {}: {}", path.display(), e);
            PlanError::infrastructure(format!("cannot read {}: {}", path.display(), e))
        })?;

        let reader = Self::from_json_str(&contents)?;
        tracing::debug!(
            "Loaded {} plans from {}",
            reader.plan_count().await,
            path.display()
        );
        Ok(reader)
    }

    /// Replace every stored plan
    pub async fn replace(&self, plans: Vec<MembershipPlan>) {
        *self.plans.write().await = plans;
    }

    /// Append a plan after the existing ones
    pub async fn push(&self, plan: MembershipPlan) {
        self.plans.write().await.push(plan);
    }

    /// Get the number of stored plans
    pub async fn plan_count(&self) -> usize {
        self.plans.read().await.len()
    }
}

#[async_trait]
impl PlanReader for InMemoryPlanReader {
    async fn list_plans(&self) -> Result<Vec<MembershipPlan>, DomainError> {
        Ok(self.plans.read().await.clone())
    }
}
