pub mod cleanup;
pub mod config;
pub mod context;
pub mod deps;
pub mod env_file;
pub mod layout;
pub mod process;
pub mod runner;
pub mod ui;
pub mod validation;

// Re-export commonly used types
pub use config::BootstrapConfig;
pub use layout::Layout;
pub use process::{CommandFailure, CommandOutcome};
pub use runner::{run, RunOptions, RunOutcome};
