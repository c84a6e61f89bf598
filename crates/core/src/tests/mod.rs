//! Behavioral tests for the carousel and page rules
//!
//! BDD-style tests using given-when-then naming. They exercise whole
//! interaction sequences rather than single transitions.

#![allow(clippy::unwrap_used)]
#![allow(clippy::arithmetic_side_effects)]
