// Command handlers module
pub mod completions;
pub mod config;
pub mod info;
pub mod open;
pub mod pkg;
pub mod status;
pub mod toggle;
pub mod update;
pub mod version;
pub mod watch;

// Re-exports for cleaner imports
pub use info::execute as info;
pub use status::execute as status;
pub use version::execute as version;
pub use watch::execute as watch;
