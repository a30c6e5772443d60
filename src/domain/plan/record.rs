//! Membership plan records.
//!
//! A plan is one membership tier as the dashboard sees it: an id, a price
//! per active member per billing cycle, and the number of members currently
//! enrolled. Any other fields a backend sends are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::PlanError;
use crate::domain::foundation::PlanId;

/// A membership plan record.
///
/// Deserializing goes through the same validation as [`MembershipPlan::from_record`],
/// so a malformed record fails with `InvalidRecord` rather than a bare serde error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct MembershipPlan {
    pub id: PlanId,

    pub name: String,

    /// Price per active member per billing cycle.
    ///
    /// Sign is not checked; a negative price reduces revenue.
    pub price: f64,

    pub active_members: u64,

    /// Descriptive pass-through fields, never read by aggregation.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl MembershipPlan {
    /// Creates a plan, rejecting a non-finite price.
    pub fn new(
        id: PlanId,
        name: impl Into<String>,
        price: f64,
        active_members: u64,
    ) -> Result<Self, PlanError> {
        if !price.is_finite() {
            return Err(PlanError::invalid_record("price", "must be a finite number"));
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            active_members,
            attributes: Map::new(),
        })
    }

    /// Adds a pass-through attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Revenue this plan contributes per billing cycle.
    pub fn revenue(&self) -> f64 {
        self.price * self.active_members as f64
    }

    /// Validates one raw record from an input supplier.
    ///
    /// Fails on the first missing or mistyped field rather than coercing
    /// it to zero.
    pub fn from_record(index: usize, record: &Value) -> Result<Self, PlanError> {
        Self::validate_record(record).map_err(|e| e.at_index(index))
    }

    fn validate_record(record: &Value) -> Result<Self, PlanError> {
        let fields = record
            .as_object()
            .ok_or_else(|| PlanError::invalid_record("record", "must be a JSON object"))?;

        let id = match fields.get("id") {
            None | Some(Value::Null) => return Err(PlanError::invalid_record("id", "is missing")),
            Some(value @ (Value::String(_) | Value::Number(_))) => PlanId::deserialize(value)
                .map_err(|e| PlanError::invalid_record("id", e.to_string()))?,
            Some(_) => {
                return Err(PlanError::invalid_record("id", "must be a string or a number"))
            }
        };

        let name = match fields.get("name") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(PlanError::invalid_record("name", "must be a string")),
        };

        let price = match fields.get("price") {
            None | Some(Value::Null) => return Err(PlanError::invalid_record("price", "is missing")),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| PlanError::invalid_record("price", "must be a number"))?,
            Some(_) => return Err(PlanError::invalid_record("price", "must be a number")),
        };

        let active_members = match fields.get("activeMembers") {
            None | Some(Value::Null) => {
                return Err(PlanError::invalid_record("activeMembers", "is missing"))
            }
            Some(Value::Number(n)) => n.as_u64().ok_or_else(|| {
                PlanError::invalid_record("activeMembers", "must be a non-negative integer")
            })?,
            Some(_) => {
                return Err(PlanError::invalid_record(
                    "activeMembers",
                    "must be a non-negative integer",
                ))
            }
        };

        let attributes = fields
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "id" | "name" | "price" | "activeMembers"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let mut plan = Self::new(id, name, price, active_members)?;
        plan.attributes = attributes;
        Ok(plan)
    }

    /// Validates a list of raw records, stopping at the first bad one.
    pub fn parse_records(records: &[Value]) -> Result<Vec<Self>, PlanError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| Self::from_record(index, record))
            .collect()
    }
}

impl TryFrom<Value> for MembershipPlan {
    type Error = PlanError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::validate_record(&value)
    }
}
