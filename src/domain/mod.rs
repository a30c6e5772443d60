//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `plan` - Membership plan records and plan statistics

pub mod foundation;
pub mod plan;
