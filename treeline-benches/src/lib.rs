//! Benchmark support crate for treeline.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for Kruskal, tie-branching Prim enumeration and the
//! union-find strategies.

pub mod error;
pub mod graphs;
pub mod params;
