//! Property-based tests for the Kruskal and Prim engines.
//!
//! Checks both engines against a brute-force oracle that enumerates every
//! spanning tree of small graphs, validates the structure of every returned
//! tree, and confirms that repeated runs and union-find strategies do not
//! change the results.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
