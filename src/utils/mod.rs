//! Utility modules for the layout engine
//!
//! This module contains helpers that sit beside the layout
//! calculations rather than inside them.

pub mod performance;

// Re-export commonly used types
pub use performance::*;
