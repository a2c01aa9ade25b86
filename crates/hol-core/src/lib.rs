//! # hol-core
//!
//! Core types and error definitions for holidayrules.
//!
//! This crate provides the pieces shared by every other crate in the
//! workspace: the error enum, the `ensure!` precondition macro, and the
//! primitive aliases used for years and day counts.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year as used by date rules (1–9999 is the supported range).
pub type Year = u16;

/// Signed number of calendar or business days.
pub type Days = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
