//! Shared test utilities for threatboard integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Randomized paths take a seeded `StdRng` so failures
//! reproduce.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
