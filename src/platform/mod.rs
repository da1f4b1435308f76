pub mod client;
pub mod error;
pub mod resolver;
pub mod wire;

pub use client::{PlatformClient, PlatformConfig};
pub use error::PlatformError;
pub use resolver::PlatformCostResolver;
