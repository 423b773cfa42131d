//! Abaplus is an Assumption-Based Argumentation reasoner with preference handling.
//!
//! It derives the arguments of an ABA+ framework, computes the attacks between
//! them (taking assumption preferences into account through attack reversal),
//! and lifts attacks to assumption coalitions. Two framework transformers are
//! provided to break rule cycles and to make rule bodies atomic.

#![warn(missing_docs)]

pub mod aba;

pub mod utils;
