//! Integration tests for vexel crates.
//!
//! Properties every vector of the family must satisfy, checked across
//! several element types and arities, plus data-driven conversion cases.

#[cfg(test)]
mod cases;
