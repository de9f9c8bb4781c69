// Public modules
pub mod collate;
pub mod config;
pub mod error;
pub mod naming;
pub mod output;
pub mod renamer;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use naming::DigitPolicy;
pub use output::{RenameStatus, RenumberResult, RunSummary};
