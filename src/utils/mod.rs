//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - Directory listing and renames with consistent error handling

pub mod io;
