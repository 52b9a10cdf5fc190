//! Driftwood Core - Shared types library.
//!
//! This crate provides common types used across all Driftwood components:
//! - `store` - Local-first persistence core (cart, reviews, orders, favorites)
//! - `cli` - Command-line tools for driving and inspecting the store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and validated ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
