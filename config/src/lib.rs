//! # Config Crate
//!
//! Centralized configuration constants for the angie math libraries.
//! Tolerances, text-format defaults and literal limits live here
//! so every crate in the workspace agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use angie_config::constants::{DEFAULT_SEPARATOR, NORMALIZED_TOLERANCE};
//!
//! // Unit-length check used by `Vec3::is_normalized`
//! let length: f64 = 1.0 + 1e-12;
//! assert!((length - 1.0).abs() < NORMALIZED_TOLERANCE);
//!
//! // Vector literals are comma separated unless told otherwise
//! assert_eq!("1,2,3".split(DEFAULT_SEPARATOR).count(), 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Plain `std`, usable from any crate
//! - **Literal Compatible**: Text defaults match the vector literal grammar

pub mod constants;
