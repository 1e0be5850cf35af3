//! # Angie Math
//!
//! Three component vector math for graphics and geometry code.
//!
//! ## Architecture
//!
//! ```text
//! angie-config (tolerances, literal syntax)
//!       ↓
//! config::VectorConfig ──→ vec3::Vec3 ←── glam::DVec3 interop
//!                              ↓
//!                  "[x, y, z]" literals (lenient / strict)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use angie_math::Vec3;
//!
//! let mut v = Vec3::default();
//! v.read_str("[3, 0, 4]");
//! assert_eq!(v.length(), 5.0);
//!
//! v.normalize();
//! assert!(v.is_normalized());
//! assert_eq!(v.to_string(), "[0.6, 0, 0.8]");
//! ```

pub mod config;
pub mod error;
pub mod vec3;

pub use config::{VectorConfig, VectorConfigError};
pub use error::{MathResult, ParseError, SwizzleError};
pub use vec3::{parse_float_prefix, ArithOp, Operand, Vec3};
