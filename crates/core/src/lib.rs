//! QuickBite Core - Shared types library.
//!
//! This crate provides common types used across all QuickBite components:
//! - `server` - JSON API backend for the storefront SPA
//! - `cli` - Command-line tools for migrations and admin seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and emails, plus the
//!   order status and payment method enumerations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
