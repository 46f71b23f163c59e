// Core business logic module

pub mod config;
pub mod dispatch;
pub mod pkgmgr;
pub mod probes;
pub mod sampler;
pub mod variants;
pub mod workers;

// Re-export commonly used items
pub use config::Config;
pub use pkgmgr::{PmOperation, PmProfile};
pub use probes::ProbeResult;
pub use sampler::{Sampler, SamplerSnapshot};
pub use variants::{ConfigVariant, VariantState, VariantSwitcher};
pub use workers::{WorkerUpdate, Workers};
