// ABOUTME: Extraction modules: compiled-selector cache, query primitives, scalar and tabular contracts.
// ABOUTME: Everything here operates on an already-parsed document tree.

pub mod compiled;
pub mod scalar;
pub mod select;
pub mod tables;
