pub mod dry_run;
pub mod error;
pub mod executor;
pub mod ports;

pub use dry_run::DryRunUnlocker;
pub use error::{UnlockError, UnlockErrorKind};
pub use executor::{UnlockExecutor, UnlockReport};
pub use ports::UnlockPort;
