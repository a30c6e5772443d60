//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PlanReader` - Supplies membership plan records

mod plan_reader;

pub use plan_reader::PlanReader;
