//! In-memory adapters.

mod in_memory_plan_reader;

pub use in_memory_plan_reader::InMemoryPlanReader;
