pub mod cached;
pub mod table;

pub use cached::CachedCostResolver;
pub use table::TableCostResolver;
