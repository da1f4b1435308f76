pub mod adapters;
mod crawl;
pub mod engine;
pub mod error;
mod greedy;
pub mod invariants;
pub mod noop;
pub mod ports;
mod resolution;
pub mod result;
pub mod strategy;
mod threshold;
pub mod types;

pub use adapters::{CachedCostResolver, TableCostResolver};
pub use engine::Allocator;
pub use error::{AllocationError, AllocationErrorKind};
pub use invariants::assert_allocation_consistency;
pub use noop::NoopObserver;
pub use ports::{AllocationObserver, CostResolverPort};
pub use result::{AllocationResult, PlannedUnlock};
pub use strategy::AllocationStrategy;
pub use types::{Budget, CostCeiling, Item, ItemId, PaymentMethod};
