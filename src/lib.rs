//! webbind - Web API bindings regeneration
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use webbind_hierarchy as hierarchy;
pub use webbind_runner as runner;
pub use webbind_symbols as symbols;
