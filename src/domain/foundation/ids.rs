//! Strongly-typed identifier value objects.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Opaque identifier of a membership plan.
///
/// Backends hand out either string or numeric ids, so both are accepted
/// on input and kept in textual form. Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlanId(String);

impl PlanId {
    /// Creates a new PlanId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("plan_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlanId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<u64> for PlanId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for PlanId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPlanId {
            Text(String),
            Number(serde_json::Number),
        }

        let raw = match RawPlanId::deserialize(deserializer)? {
            RawPlanId::Text(s) => s,
            RawPlanId::Number(n) => n.to_string(),
        };
        PlanId::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_id_rejects_empty() {
        assert_eq!(
            PlanId::new(""),
            Err(ValidationError::empty_field("plan_id"))
        );
    }

    #[test]
    fn plan_id_from_number_uses_decimal_text() {
        assert_eq!(PlanId::from(42).as_str(), "42");
    }

    #[test]
    fn plan_id_deserializes_from_string_and_number() {
        let from_text: PlanId = serde_json::from_str("\"gold\"").unwrap();
        let from_number: PlanId = serde_json::from_str("7").unwrap();

        assert_eq!(from_text.as_str(), "gold");
        assert_eq!(from_number.as_str(), "7");
    }

    #[test]
    fn plan_id_deserialize_rejects_empty_string() {
        assert!(serde_json::from_str::<PlanId>("\"\"").is_err());
    }

    #[test]
    fn plan_id_serializes_transparently() {
        let id = PlanId::new("basic").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"basic\"");
    }
}
