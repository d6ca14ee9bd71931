//! # tvm-core
//!
//! Core types and error definitions for the time-value-of-money calculators.
//!
//! This crate provides the building blocks shared by the policy crate and the
//! foreign boundary layer: numeric type aliases, the error taxonomy, and the
//! `ensure!` / `fail!` validation macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the calculators.
pub type Real = f64;

/// Signed integer type used for period counts (maps to C `int`).
pub type Integer = i32;

/// Alias used for array sizes / indices.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A monetary amount (principal, cash flow, present or future value).
pub type Amount = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
