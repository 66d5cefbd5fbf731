//! Models module for the match-up layout engine
//!
//! This module contains the input snapshots and output structures
//! exchanged between the layout engine and the game scene.

pub mod viewport;
pub mod layout;

// Re-export commonly used types
pub use viewport::*;
pub use layout::*;
