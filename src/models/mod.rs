//! Domain models for the feature table.
//!
//! There is exactly one entity: [`FeatureRecord`], a documented piece of
//! partner feedback. Records are defined once in [`crate::data`] and never
//! mutated; their position in that sequence is their display number.

mod feature;

pub use feature::*;
