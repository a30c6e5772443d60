//! Membership Dashboard - Plan Statistics
//!
//! This crate computes the summary metrics a membership-management
//! dashboard shows for its plans: plan count, active members, monthly
//! revenue, and the most popular plan.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
