//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory plan source (seeded, JSON string, JSON file)

pub mod memory;

pub use memory::InMemoryPlanReader;
