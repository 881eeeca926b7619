// src/genres/mod.rs

// High-level orchestrations that drive the economy systems to an end.
// The campaign is feature-gated; the sprint and the report are always on.

pub mod report;
pub mod sprint;
pub use report::*;

#[cfg(feature = "genre-city")]
pub mod city;

#[cfg(feature = "genre-city")]
pub use city::*;
