#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ids;
pub mod morphology;

// Re-export core types for convenience
pub use ids::{NodeId, SentenceId};
pub use morphology::*;

pub mod model;
pub use model::*;
